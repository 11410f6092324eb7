use crate::fetch::Fetcher;
use crate::process::{DownloadTask, FileOutcome, process};
use futures::stream::{self, StreamExt};
use indicatif::{ProgressBar, ProgressStyle};
use std::num::NonZeroUsize;
use std::time::Duration;

#[derive(Clone, Copy, Debug)]
pub struct PoolOptions {
    pub parallelism: usize,
    pub file_timeout: Duration,
}

impl Default for PoolOptions {
    fn default() -> Self {
        Self {
            parallelism: default_parallelism(),
            file_timeout: Duration::from_secs(crate::config::DEFAULT_FILE_TIMEOUT_SECS),
        }
    }
}

pub fn default_parallelism() -> usize {
    std::thread::available_parallelism()
        .map(NonZeroUsize::get)
        .unwrap_or(1)
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub total: usize,
    pub completed: usize,
    pub failed: usize,
}

impl RunSummary {
    fn record(&mut self, outcome: &FileOutcome) {
        if outcome.is_completed() {
            self.completed += 1;
        } else {
            self.failed += 1;
        }
    }
}

pub fn progress_bar(total: usize) -> ProgressBar {
    let bar = ProgressBar::new(total as u64);
    if let Ok(style) = ProgressStyle::default_bar()
        .template("{msg}: {percent:>3}%|{wide_bar}| {pos}/{len} [{elapsed_precise}<{eta_precise}]")
    {
        bar.set_style(style);
    }
    bar.set_message("Downloading files");
    bar
}

/// Runs every task with at most `options.parallelism` in flight and returns
/// once all of them have finished. Tasks complete in any order; `progress`
/// advances by one per completion.
pub async fn process_all(
    fetcher: &Fetcher,
    tasks: Vec<DownloadTask>,
    options: PoolOptions,
    progress: &ProgressBar,
) -> RunSummary {
    let mut summary = RunSummary {
        total: tasks.len(),
        ..RunSummary::default()
    };
    progress.set_length(tasks.len() as u64);

    let file_timeout = options.file_timeout;
    let mut outcomes = stream::iter(tasks)
        .map(move |task| async move { process(fetcher, &task, file_timeout).await })
        .buffer_unordered(options.parallelism.max(1));

    while let Some(outcome) = outcomes.next().await {
        summary.record(&outcome);
        progress.inc(1);
    }

    progress.finish();
    summary
}
