use crate::cli::args::DownloadCommand;
use crate::cli::params::DownloadParams;
use crate::config::{Config, DEFAULT_DIRECTORY, load_config};
use crate::error::BrickDumpError;
use crate::pool::{PoolOptions, default_parallelism};
use std::path::PathBuf;
use std::time::Duration;

/// Merges command-line flags over the optional config file over built-in defaults.
pub fn resolve_command(command: DownloadCommand) -> Result<DownloadParams, BrickDumpError> {
    let DownloadCommand {
        config_path,
        directory,
        parallelism,
        index_url,
    } = command;

    let app_config = match config_path {
        Some(config_path) => {
            tracing::debug!("Loading configuration from {}", config_path);
            load_config(&config_path)?
        }
        None => Config::default(),
    };

    let parallelism = parallelism
        .or(app_config.parallelism)
        .unwrap_or_else(default_parallelism);

    for (name, value) in [
        ("parallelism", parallelism as u64),
        ("index_timeout_secs", app_config.index_timeout_secs),
        ("file_timeout_secs", app_config.file_timeout_secs),
    ] {
        if value == 0 {
            return Err(BrickDumpError::CliArgumentValidation {
                details: format!("{name} must be greater than 0."),
            });
        }
    }

    let index_url = index_url.unwrap_or(app_config.index_url);
    url::Url::parse(&index_url).map_err(|e| BrickDumpError::CliArgumentValidation {
        details: format!("Invalid index URL {index_url}: {e}"),
    })?;

    if app_config.download_host.trim().is_empty() {
        return Err(BrickDumpError::CliArgumentValidation {
            details: "download_host must not be empty.".to_string(),
        });
    }

    let output_dir = directory
        .or(app_config.directory)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_DIRECTORY));

    Ok(DownloadParams {
        output_dir,
        index_url,
        download_host: app_config.download_host,
        user_agent: app_config.user_agent,
        index_timeout: Duration::from_secs(app_config.index_timeout_secs),
        pool: PoolOptions {
            parallelism,
            file_timeout: Duration::from_secs(app_config.file_timeout_secs),
        },
    })
}
