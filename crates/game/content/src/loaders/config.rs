//! Usage-count configuration loader.

use std::path::Path;

use magic_core::MagicConfig;

use crate::loaders::{LoadResult, read_file};

/// Loader for [`MagicConfig`] from TOML files.
///
/// Missing keys take their defaults. Values outside the accepted ranges fail
/// the load; the core itself never re-checks them.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load and validate config data from a TOML file.
    pub fn load(path: &Path) -> LoadResult<MagicConfig> {
        let content = read_file(path)?;
        Self::parse(&content)
            .map_err(|e| anyhow::anyhow!("Invalid config {}: {}", path.display(), e))
    }

    /// Parse and validate config data from TOML text.
    pub fn parse(content: &str) -> LoadResult<MagicConfig> {
        let config: MagicConfig = toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse config TOML: {}", e))?;
        config.validate()?;
        Ok(config)
    }
}
