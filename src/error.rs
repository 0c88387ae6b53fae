use std::path::{Path, PathBuf};

/// Errors raised while filtering, splitting or persisting a dataset
#[derive(Debug, thiserror::Error)]
pub enum DatasetError {
    #[error("invalid --dir-dataset, dir {} does not exist", .0.display())]
    MissingDatasetDir(PathBuf),

    #[error("{name} should be in (0..1), got {value}")]
    InvalidRatio { name: &'static str, value: f64 },

    #[error("malformed observation path {}: {reason}", .path.display())]
    MalformedName { path: PathBuf, reason: String },

    #[error("{} is not located under dataset dir {}", .path.display(), .root.display())]
    OutsideDatasetRoot { path: PathBuf, root: PathBuf },

    #[error("invalid glob pattern: {0}")]
    Pattern(#[from] glob::PatternError),

    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl DatasetError {
    pub fn io(path: &Path, source: std::io::Error) -> Self {
        Self::Io {
            path: path.to_path_buf(),
            source,
        }
    }

    pub fn malformed(path: &Path, reason: impl Into<String>) -> Self {
        Self::MalformedName {
            path: path.to_path_buf(),
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, DatasetError>;
