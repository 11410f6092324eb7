pub mod cli;
pub mod config;
pub mod error;
pub mod fetch;
pub mod links;
pub mod logging;
pub mod pool;
pub mod process;

pub use config::Config;
pub use error::{BrickDumpError, FetchError};
