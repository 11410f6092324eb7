mod args;
mod download;
mod params;
mod resolve;

pub use args::{Args, DownloadCommand, parse_args};
pub use download::run_download;
pub use params::DownloadParams;
pub use resolve::resolve_command;
