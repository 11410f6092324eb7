mod processor;
mod types;

pub use processor::process;
pub use types::{DownloadTask, FileOutcome};
