//! Errors raised while resolving arguments, fetching and saving data.
use reqwest::StatusCode;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum MetobsError {
    /// Wrong number of positional arguments, unknown flag and the like.
    #[error(transparent)]
    Usage(#[from] clap::Error),

    /// The request never got a response.
    #[error("error downloading file: {0}")]
    Transport(reqwest::Error),

    /// The server answered with something other than 200 OK.
    #[error("bad status: {0}, check argument values")]
    UpstreamStatus(StatusCode),

    #[error("error creating output directory {}", path.display())]
    DirectoryCreation {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("error creating output file {}", path.display())]
    FileCreation {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Reading the body or writing it out failed part way. The partial file stays.
    #[error("error writing to file {}", path.display())]
    Copy {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, MetobsError>;
