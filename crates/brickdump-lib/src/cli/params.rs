use crate::pool::PoolOptions;
use std::path::PathBuf;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct DownloadParams {
    pub output_dir: PathBuf,
    pub index_url: String,
    pub download_host: String,
    pub user_agent: String,
    pub index_timeout: Duration,
    pub pool: PoolOptions,
}
