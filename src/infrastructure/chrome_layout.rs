use crate::domain::error::AppError;
use crate::domain::platform::{self, Platform};
use crate::domain::traits::ProfileLocator;
use std::env;
use std::path::PathBuf;
use tracing::debug;

/// Google Chrome's on-disk layout for one user on one platform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChromeLayout {
    pub platform: Platform,
    pub home: PathBuf,
}

impl ChromeLayout {
    pub fn new(platform: Platform, home: impl Into<PathBuf>) -> Self {
        Self {
            platform,
            home: home.into(),
        }
    }

    pub fn from_env() -> Result<Self, AppError> {
        let platform = Platform::current();
        let home = home_dir(&platform).ok_or(AppError::HomeDirUnavailable)?;
        debug!(platform = platform.name(), home = %home.display(), "chrome layout");
        Ok(Self::new(platform, home))
    }
}

fn home_dir(platform: &Platform) -> Option<PathBuf> {
    let primary = match platform {
        Platform::Windows => "USERPROFILE",
        _ => "HOME",
    };
    env::var_os(primary)
        .or_else(|| env::var_os("HOME"))
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
}

impl ProfileLocator for ChromeLayout {
    fn registry_path(&self) -> Result<PathBuf, AppError> {
        platform::registry_path(&self.platform, &self.home)
    }

    fn bookmark_path(&self, profile_key: &str) -> PathBuf {
        platform::bookmark_path(&self.platform, &self.home, profile_key)
    }
}
