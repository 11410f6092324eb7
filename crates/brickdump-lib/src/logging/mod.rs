//! Tracing setup that keeps log lines from tearing through the progress bar.

use indicatif::MultiProgress;
use std::io::{self, Write};
use std::sync::LazyLock;
use tracing::Level;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::MakeWriter;

static PROGRESS: LazyLock<MultiProgress> = LazyLock::new(MultiProgress::new);

/// Process-wide progress display. Bars drawn here are hidden while a log line
/// is written.
pub fn progress() -> &'static MultiProgress {
    &PROGRESS
}

/// Stderr writer that suspends the progress display around every write.
pub struct ProgressAwareStderr;

impl Write for ProgressAwareStderr {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        PROGRESS.suspend(|| io::stderr().lock().write(buf))
    }

    fn write_all(&mut self, buf: &[u8]) -> io::Result<()> {
        PROGRESS.suspend(|| io::stderr().lock().write_all(buf))
    }

    fn flush(&mut self) -> io::Result<()> {
        io::stderr().lock().flush()
    }
}

pub struct ProgressAwareMakeWriter;

impl<'a> MakeWriter<'a> for ProgressAwareMakeWriter {
    type Writer = ProgressAwareStderr;

    fn make_writer(&'a self) -> Self::Writer {
        ProgressAwareStderr
    }
}

pub fn log_level_from_verbosity(verbose: u8) -> Level {
    match verbose {
        0 => Level::INFO,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    }
}

pub fn init_logging(log_level: Level) {
    let env_filter = EnvFilter::builder()
        .with_default_directive(log_level.into())
        .from_env_lossy()
        .add_directive("hyper_util=warn".parse().expect("static directive"))
        .add_directive("reqwest=warn".parse().expect("static directive"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(ProgressAwareMakeWriter)
        .with_target(false)
        .init();
}
