use super::types::{DownloadTask, FileOutcome};
use crate::fetch::Fetcher;
use eyre::{Result, WrapErr};
use flate2::read::MultiGzDecoder;
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Removes the compressed download when dropped, whatever happened to the task.
struct CompressedArtifact {
    path: PathBuf,
}

impl Drop for CompressedArtifact {
    fn drop(&mut self) {
        match std::fs::remove_file(&self.path) {
            Ok(()) => tracing::trace!(path = %self.path.display(), "Removed compressed file"),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {}
            Err(err) => {
                tracing::warn!(path = %self.path.display(), "Failed to remove compressed file: {}", err)
            }
        }
    }
}

/// Downloads, unpacks and cleans up a single file.
///
/// Failures are logged and reported through [`FileOutcome::Failed`]; they never
/// escape this function, so one broken file cannot abort the batch.
pub async fn process(fetcher: &Fetcher, task: &DownloadTask, timeout: Duration) -> FileOutcome {
    let output_path = task.output_path();
    let artifact = CompressedArtifact {
        path: task.compressed_path(),
    };

    let outcome = match fetch_and_unpack(fetcher, task, &artifact.path, &output_path, timeout).await
    {
        Ok(bytes) => {
            tracing::debug!(
                filename = %task.filename,
                output = %output_path.display(),
                bytes,
                "Downloaded and unpacked"
            );
            FileOutcome::Completed {
                filename: task.filename.clone(),
                output_path,
            }
        }
        Err(err) => {
            tracing::warn!(filename = %task.filename, url = %task.url, "Failed processing {}: {:#}", task.filename, err);
            FileOutcome::Failed {
                filename: task.filename.clone(),
            }
        }
    };

    drop(artifact);
    outcome
}

async fn fetch_and_unpack(
    fetcher: &Fetcher,
    task: &DownloadTask,
    compressed_path: &Path,
    output_path: &Path,
    timeout: Duration,
) -> Result<u64> {
    tracing::trace!(filename = %task.filename, url = %task.url, "Downloading");
    let payload = fetcher
        .fetch(&task.url, timeout)
        .await
        .wrap_err("Download failed")?;

    tokio::fs::write(compressed_path, &payload)
        .await
        .wrap_err_with(|| format!("Failed to write {}", compressed_path.display()))?;

    let source = compressed_path.to_path_buf();
    let destination = output_path.to_path_buf();
    tokio::task::spawn_blocking(move || decompress(&source, &destination))
        .await
        .wrap_err("Decompression task did not complete")?
}

/// Streams a gzip file into `destination`. The partial output is removed on error.
fn decompress(source: &Path, destination: &Path) -> Result<u64> {
    let input =
        File::open(source).wrap_err_with(|| format!("Failed to open {}", source.display()))?;
    let mut decoder = MultiGzDecoder::new(BufReader::new(input));

    let output = File::create(destination)
        .wrap_err_with(|| format!("Failed to create {}", destination.display()))?;
    let mut writer = BufWriter::new(output);

    let copied = std::io::copy(&mut decoder, &mut writer).and_then(|n| writer.flush().map(|_| n));
    drop(writer);

    match copied {
        Ok(n) => Ok(n),
        Err(err) => {
            if let Err(remove_err) = std::fs::remove_file(destination) {
                tracing::debug!(path = %destination.display(), "Failed to remove partial output: {}", remove_err);
            }
            Err(err).wrap_err_with(|| format!("Failed to decompress {}", source.display()))
        }
    }
}
