use crate::domain::error::AppError;
use std::path::PathBuf;

/// Where a browser keeps its profile registry and per-profile bookmark files.
pub trait ProfileLocator {
    fn registry_path(&self) -> Result<PathBuf, AppError>;

    fn bookmark_path(&self, profile_key: &str) -> PathBuf;
}
