use std::path::{Path, PathBuf};

const COMPRESSION_SUFFIX: &str = ".gz";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DownloadTask {
    pub filename: String,
    pub url: String,
    pub destination: PathBuf,
}

impl DownloadTask {
    pub fn new(filename: impl Into<String>, url: impl Into<String>, destination: &Path) -> Self {
        Self {
            filename: filename.into(),
            url: url.into(),
            destination: destination.to_path_buf(),
        }
    }

    /// Where the downloaded payload is stored until it has been unpacked.
    pub fn compressed_path(&self) -> PathBuf {
        self.destination.join(&self.filename)
    }

    /// The unpacked file: the compressed name without its `.gz` suffix.
    pub fn output_path(&self) -> PathBuf {
        let name = self
            .filename
            .strip_suffix(COMPRESSION_SUFFIX)
            .unwrap_or(&self.filename);
        self.destination.join(name)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FileOutcome {
    Completed {
        filename: String,
        output_path: PathBuf,
    },
    Failed {
        filename: String,
    },
}

impl FileOutcome {
    pub fn is_completed(&self) -> bool {
        matches!(self, FileOutcome::Completed { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths_are_derived_from_filename() {
        let task = DownloadTask::new(
            "colors.csv.gz",
            "https://cdn.rebrickable.com/media/downloads/colors.csv.gz?1.0",
            Path::new("data"),
        );

        assert_eq!(task.compressed_path(), Path::new("data/colors.csv.gz"));
        assert_eq!(task.output_path(), Path::new("data/colors.csv"));
    }

    #[test]
    fn test_output_path_only_strips_trailing_suffix() {
        let task = DownloadTask::new("a.gz.csv.gz", "unused", Path::new("out"));
        assert_eq!(task.output_path(), Path::new("out/a.gz.csv"));
    }
}
