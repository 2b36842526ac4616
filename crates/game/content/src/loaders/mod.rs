//! Content loaders for reading editor data from files.
//!
//! Each loader turns one RON/TOML file into core types or oracle snapshots.

pub mod config;
pub mod database;
pub mod factory;
pub mod party;

pub use config::ConfigLoader;
pub use database::{ClassEntry, Database, DatabaseFile, DatabaseLoader, SkillEntry};
pub use factory::ContentFactory;
pub use party::{ActorEntry, PartyFile, PartyLoader};

use std::path::Path;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}
