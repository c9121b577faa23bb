//! Content loaders for reading campaign data from files.
//!
//! Loaders convert RON/TOML files into the catalog and config values the
//! runtime injects into decisions.

pub mod config;
pub mod roles;

pub use config::ConfigLoader;
pub use roles::RoleLoader;

use std::path::Path;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}
