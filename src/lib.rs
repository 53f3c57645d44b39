//! # getmetobs
//!
//! Downloads meteorological observation data from SMHI's open data API.
//! One request per invocation: build the URL, GET it, and stream the body to
//! `smhi_metobs_<parameter>_<station>_<period>.<ext>` in the output directory.

pub mod args;
pub mod errors;
pub mod request;
pub mod utils;

pub use args::{Args, Config};
pub use errors::{MetobsError, Result};
pub use request::{Period, Request};

use std::path::PathBuf;

/// Runs a single download and returns the path of the written file.
pub async fn run(config: &Config) -> Result<PathBuf> {
    let request = &config.request;
    if !request.period().is_known() {
        log::warn!(
            "Period '{}' is not one of latest-hour, latest-day, latest-months or corrected-archive",
            request.period()
        );
    }

    let url = request.url(&config.base_url);
    log::debug!("Downloading {url}");

    // No timeout: a stalled server stalls the download.
    let client = reqwest::Client::new();
    utils::download_file(&client, &url, &config.output_dir, &request.file_name()).await
}
