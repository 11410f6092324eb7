mod loader;
mod model;

pub use loader::load_config;
pub use model::{
    Config, DEFAULT_DIRECTORY, DEFAULT_FILE_TIMEOUT_SECS, DEFAULT_INDEX_TIMEOUT_SECS,
    DEFAULT_INDEX_URL, DEFAULT_USER_AGENT,
};
