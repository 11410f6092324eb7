use crate::logging::{init_logging, log_level_from_verbosity};
use clap::{ArgAction, Parser};
use std::path::PathBuf;
use tracing::Level;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DownloadCommand {
    pub config_path: Option<String>,
    pub directory: Option<PathBuf>,
    pub parallelism: Option<usize>,
    pub index_url: Option<String>,
}

pub struct Args {
    pub command: DownloadCommand,
    pub log_level: Level,
}

#[derive(Debug, Parser)]
#[command(
    name = "brickdump",
    version,
    author = "Nick Guletskii",
    about = "Download and decompress all CSV data from Rebrickable"
)]
struct Cli {
    #[arg(
        short = 'v',
        long = "verbose",
        help = "Sets the level of verbosity",
        action = ArgAction::Count,
        global = true
    )]
    verbose: u8,

    #[arg(
        short = 'd',
        long = "directory",
        value_name = "DIR",
        help = "The directory to download files to (default: data). Existing files with the same names are overwritten"
    )]
    directory: Option<PathBuf>,

    #[arg(
        short = 'c',
        long = "config",
        value_name = "FILE",
        help = "Optional config file (YAML, TOML or JSON)"
    )]
    config: Option<String>,

    #[arg(
        short = 'j',
        long = "parallelism",
        value_name = "N",
        help = "Maximum number of files processed at once (default: available parallelism)"
    )]
    parallelism: Option<usize>,

    #[arg(
        long = "index-url",
        value_name = "URL",
        help = "Overrides the page scraped for download links"
    )]
    index_url: Option<String>,
}

impl From<Cli> for DownloadCommand {
    fn from(cli: Cli) -> Self {
        DownloadCommand {
            config_path: cli.config,
            directory: cli.directory,
            parallelism: cli.parallelism,
            index_url: cli.index_url,
        }
    }
}

pub fn parse_args() -> Args {
    let cli = Cli::parse();

    let log_level = log_level_from_verbosity(cli.verbose);
    init_logging(log_level);

    Args {
        command: cli.into(),
        log_level,
    }
}
