//! Content factory for building oracles from data files.

use std::path::{Path, PathBuf};

use magic_core::{MagicConfig, Party};

use crate::loaders::{ConfigLoader, Database, DatabaseLoader, LoadResult, PartyLoader};

/// Content factory that loads all usage-count content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── config.toml     (optional; defaults when missing)
/// ├── database.ron
/// └── party.ron
/// ```
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    pub const CONFIG_FILE: &'static str = "config.toml";
    pub const DATABASE_FILE: &'static str = "database.ron";
    pub const PARTY_FILE: &'static str = "party.ron";

    /// Creates a new content factory pointing to a data directory.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Load configuration from `config.toml`, or the defaults if the file is absent.
    pub fn load_config(&self) -> LoadResult<MagicConfig> {
        let path = self.data_dir.join(Self::CONFIG_FILE);
        if !path.exists() {
            tracing::info!(path = %path.display(), "no config file, using defaults");
            return Ok(MagicConfig::default());
        }
        ConfigLoader::load(&path)
    }

    /// Load class and skill tables from `database.ron`.
    pub fn load_database(&self) -> LoadResult<Database> {
        DatabaseLoader::load(&self.data_dir.join(Self::DATABASE_FILE))
    }

    /// Load the actor roster from `party.ron`, with ledgers shaped by `config`.
    pub fn load_party(&self, config: &MagicConfig) -> LoadResult<Party> {
        PartyLoader::load(&self.data_dir.join(Self::PARTY_FILE), config)
    }

    /// Returns the data directory path.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn setup() -> (TempDir, ContentFactory) {
        let temp_dir = TempDir::new().unwrap();
        let factory = ContentFactory::new(temp_dir.path());
        (temp_dir, factory)
    }

    #[test]
    fn test_factory_paths() {
        let factory = ContentFactory::new("/tmp/data");
        assert_eq!(factory.data_dir(), Path::new("/tmp/data"));
    }

    #[test]
    fn missing_config_falls_back_to_defaults() {
        let (_temp, factory) = setup();
        assert_eq!(factory.load_config().unwrap(), MagicConfig::default());
    }

    #[test]
    fn loads_every_file() {
        let (temp, factory) = setup();
        std::fs::write(temp.path().join("config.toml"), "max_level = 5\n").unwrap();
        std::fs::write(
            temp.path().join("database.ron"),
            r#"DatabaseFile(classes: [(id: 1, name: "Wizard")], skills: [(id: 10, name: "Spark", skill_type: 1)])"#,
        )
        .unwrap();
        std::fs::write(
            temp.path().join("party.ron"),
            r#"PartyFile(actors: [(id: 1, name: "Aria", class: 1, skills: [10])], members: [1])"#,
        )
        .unwrap();

        let config = factory.load_config().unwrap();
        assert_eq!(config.max_level, 5);
        let database = factory.load_database().unwrap();
        assert_eq!(database.skills.len(), 1);
        let party = factory.load_party(&config).unwrap();
        let aria = party.actor(magic_core::ActorId(1)).unwrap();
        assert_eq!(magic_core::LedgerHolder::ledger(aria).shape(), (3, 5));
    }

    #[test]
    fn missing_database_names_the_file() {
        let (_temp, factory) = setup();
        let err = factory.load_database().unwrap_err();
        assert!(err.to_string().contains("database.ron"), "{err}");
    }
}
