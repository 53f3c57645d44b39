use crate::errors::{MetobsError, Result};
use futures_util::StreamExt;
use indicatif::{ProgressBar, ProgressStyle};
use reqwest::{Client, StatusCode};
use std::io;
use std::path::{Path, PathBuf};
use tokio::{fs, io::AsyncWriteExt};

const BAR_TEMPLATE: &str =
    "{spinner:.green} [{elapsed_precise}] [{bar:50.cyan/blue}] {bytes}/{total_bytes} ({eta})";
const SPINNER_TEMPLATE: &str = "{spinner:.green} [{elapsed_precise}] {bytes} ({bytes_per_sec})";

// Bounded bar when the size is known up front, spinner otherwise.
fn progress_bar(total_size: Option<u64>) -> ProgressBar {
    let (pb, template) = match total_size {
        Some(len) => (ProgressBar::new(len), BAR_TEMPLATE),
        None => (ProgressBar::new_spinner(), SPINNER_TEMPLATE),
    };

    match ProgressStyle::with_template(template) {
        Ok(style) => pb.set_style(style.progress_chars("#>-")),
        Err(e) => log::debug!("Progress bar template error: {e}"),
    }
    pb
}

/// Fetches `url` and streams the body to `file_name` inside `dir`.
///
/// Nothing touches the disk unless the server answers 200. The directory is
/// created if it is missing and an existing file is truncated. If the copy
/// fails part way the partial file is left behind.
pub async fn download_file(client: &Client, url: &str, dir: &Path, file_name: &str) -> Result<PathBuf> {
    log::debug!("GET {url}");
    let response = client.get(url).send().await.map_err(MetobsError::Transport)?;

    if response.status() != StatusCode::OK {
        return Err(MetobsError::UpstreamStatus(response.status()));
    }

    fs::create_dir_all(dir)
        .await
        .map_err(|source| MetobsError::DirectoryCreation {
            path: dir.to_path_buf(),
            source,
        })?;

    let path = dir.join(file_name);
    let mut file = fs::File::create(&path)
        .await
        .map_err(|source| MetobsError::FileCreation {
            path: path.clone(),
            source,
        })?;

    let copy_err = |source: io::Error| MetobsError::Copy {
        path: path.clone(),
        source,
    };

    let pb = progress_bar(response.content_length());

    // stream downloading
    let mut stream = response.bytes_stream();
    let mut downloaded: u64 = 0;
    while let Some(chunk) = stream.next().await {
        let chunk = chunk.map_err(|e| copy_err(io::Error::new(io::ErrorKind::Other, e)))?;
        file.write_all(&chunk).await.map_err(copy_err)?;
        downloaded += chunk.len() as u64;
        pb.set_position(downloaded);
    }

    file.flush().await.map_err(copy_err)?;
    file.sync_all().await.map_err(copy_err)?;
    pb.finish_and_clear();

    log::debug!("Wrote {downloaded} bytes to {}", path.display());
    Ok(path)
}
