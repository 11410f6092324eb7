use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BrickDumpError {
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Invalid command-line arguments: {details}")]
    CliArgumentValidation { details: String },

    #[error("Download directory creation failed at {path}: {reason}")]
    DirectoryCreation { path: PathBuf, reason: String },

    #[error("Could not fetch page {url}: {source}")]
    IndexFetch {
        url: String,
        #[source]
        source: FetchError,
    },

    #[error("Could not find any downloadable files on {url}")]
    NoDownloadableFiles { url: String },

    #[error("Invalid download host {host}: {source}")]
    InvalidDownloadHost {
        host: String,
        #[source]
        source: regex::Error,
    },

    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),
}

#[derive(Error, Debug)]
pub enum FetchError {
    #[error("{url} returned HTTP {status}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
    },

    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },
}

impl FetchError {
    pub fn status(&self) -> Option<reqwest::StatusCode> {
        match self {
            FetchError::Status { status, .. } => Some(*status),
            FetchError::Transport { source, .. } => source.status(),
        }
    }
}
