use crate::domain::error::AppError;
use std::path::{Path, PathBuf};

pub const REGISTRY_FILE: &str = "Local State";
pub const BOOKMARKS_FILE: &str = "Bookmarks";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Platform {
    Windows,
    MacOs,
    Linux,
    Other(String),
}

impl Platform {
    /// Accepts both Rust (`windows`, `macos`) and Node-style (`win32`, `darwin`) names.
    pub fn from_os(os: &str) -> Self {
        match os {
            "windows" | "win32" => Platform::Windows,
            "macos" | "darwin" => Platform::MacOs,
            "linux" => Platform::Linux,
            other => Platform::Other(other.to_string()),
        }
    }

    pub fn current() -> Self {
        Self::from_os(std::env::consts::OS)
    }

    pub fn name(&self) -> &str {
        match self {
            Platform::Windows => "windows",
            Platform::MacOs => "macos",
            Platform::Linux => "linux",
            Platform::Other(name) => name.as_str(),
        }
    }
}

/// Directory holding the registry file and one subdirectory per profile.
///
/// Unrecognized platforms fall back to the Linux layout.
pub fn profile_root(platform: &Platform, home: &Path) -> PathBuf {
    match platform {
        Platform::Windows => home
            .join("AppData")
            .join("Local")
            .join("Google")
            .join("Chrome")
            .join("User Data"),
        Platform::MacOs => home
            .join("Library")
            .join("Application Support")
            .join("Google")
            .join("Chrome"),
        Platform::Linux | Platform::Other(_) => home.join(".config").join("google-chrome"),
    }
}

pub fn registry_path(platform: &Platform, home: &Path) -> Result<PathBuf, AppError> {
    match platform {
        Platform::Other(name) => Err(AppError::UnsupportedPlatform(name.clone())),
        _ => Ok(profile_root(platform, home).join(REGISTRY_FILE)),
    }
}

pub fn bookmark_path(platform: &Platform, home: &Path, profile_key: &str) -> PathBuf {
    profile_root(platform, home)
        .join(profile_key)
        .join(BOOKMARKS_FILE)
}
