use crate::links::DEFAULT_DOWNLOAD_HOST;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub const DEFAULT_INDEX_URL: &str = "https://rebrickable.com/downloads/";
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0";
pub const DEFAULT_INDEX_TIMEOUT_SECS: u64 = 10;
pub const DEFAULT_FILE_TIMEOUT_SECS: u64 = 60;
pub const DEFAULT_DIRECTORY: &str = "data";

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
#[serde(deny_unknown_fields, default)]
pub struct Config {
    pub index_url: String,
    pub download_host: String,
    pub user_agent: String,
    pub index_timeout_secs: u64,
    pub file_timeout_secs: u64,
    /// Worker pool size; the host's available parallelism when unset.
    pub parallelism: Option<usize>,
    pub directory: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            index_url: DEFAULT_INDEX_URL.to_string(),
            download_host: DEFAULT_DOWNLOAD_HOST.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            index_timeout_secs: DEFAULT_INDEX_TIMEOUT_SECS,
            file_timeout_secs: DEFAULT_FILE_TIMEOUT_SECS,
            parallelism: None,
            directory: None,
        }
    }
}
