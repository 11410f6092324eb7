use crate::cli::DownloadParams;
use crate::error::BrickDumpError;
use crate::fetch::Fetcher;
use crate::links::LinkExtractor;
use crate::logging::progress;
use crate::pool::{RunSummary, process_all, progress_bar};
use crate::process::DownloadTask;

/// Scrapes the index page and downloads every linked file into `output_dir`.
///
/// Only batch-level problems are errors: an unreachable index page or a page
/// without links. Individual files that fail are logged and counted in the
/// returned summary.
pub async fn run_download(params: DownloadParams) -> Result<RunSummary, BrickDumpError> {
    let DownloadParams {
        output_dir,
        index_url,
        download_host,
        user_agent,
        index_timeout,
        pool,
    } = params;

    tokio::fs::create_dir_all(&output_dir)
        .await
        .map_err(|e| BrickDumpError::DirectoryCreation {
            path: output_dir.clone(),
            reason: e.to_string(),
        })?;

    let fetcher = Fetcher::new(&user_agent)?;
    let extractor = LinkExtractor::new(&download_host)?;

    tracing::info!("Fetching {}", index_url);
    let page = fetcher
        .fetch_text(&index_url, index_timeout)
        .await
        .map_err(|source| BrickDumpError::IndexFetch {
            url: index_url.clone(),
            source,
        })?;

    let links = extractor.extract(&page);
    if links.is_empty() {
        return Err(BrickDumpError::NoDownloadableFiles { url: index_url });
    }

    tracing::info!(
        "Found {} files, downloading to {} with {} workers",
        links.len(),
        output_dir.display(),
        pool.parallelism
    );
    let tasks: Vec<DownloadTask> = links
        .into_iter()
        .map(|(filename, url)| DownloadTask::new(filename, url, &output_dir))
        .collect();

    let bar = progress().add(progress_bar(tasks.len()));
    let summary = process_all(&fetcher, tasks, pool, &bar).await;

    if summary.failed == 0 {
        tracing::info!("Downloaded {} files", summary.completed);
    } else {
        tracing::warn!(
            "Downloaded {} of {} files, {} failed",
            summary.completed,
            summary.total,
            summary.failed
        );
    }
    Ok(summary)
}
