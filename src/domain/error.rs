use std::path::PathBuf;
use thiserror::Error;

/// Failure reading one JSON file. IO and parse failures stay distinct.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("cannot read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid JSON in {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Unsupported OS ({0}). Local State path is not available.")]
    UnsupportedPlatform(String),

    #[error("home directory is not available")]
    HomeDirUnavailable,

    #[error("failed to load profile registry: {0}")]
    RegistryLoad(#[source] LoadError),

    #[error("failed to load bookmarks for profile {profile}: {source}")]
    ProfileLoad {
        profile: String,
        #[source]
        source: LoadError,
    },
}

impl AppError {
    /// Only per-profile failures are recovered from; everything else aborts the run.
    pub fn is_fatal(&self) -> bool {
        !matches!(self, AppError::ProfileLoad { .. })
    }
}
