//! Client configuration structures and loaders.
use std::env;
use std::path::PathBuf;

/// How command results are printed.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum, strum::Display, strum::EnumString,
)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum OutputFormat {
    /// Human-readable tables
    #[default]
    Summary,
    /// Pretty-printed JSON
    Json,
}

/// Configuration shared by every subcommand.
#[derive(Clone, Debug)]
pub struct ClientConfig {
    /// Directory holding `config.toml`, `database.ron` and `party.ron`.
    pub content_dir: PathBuf,
    pub format: OutputFormat,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            content_dir: PathBuf::from(Self::DEFAULT_CONTENT_DIR),
            format: OutputFormat::default(),
        }
    }
}

impl ClientConfig {
    pub const DEFAULT_CONTENT_DIR: &'static str = "content";

    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `MAGIC_CONTENT_DIR` - Content directory (default: `content`)
    /// - `MAGIC_OUTPUT` - `summary` or `json` (default: summary)
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(dir) = env::var_os("MAGIC_CONTENT_DIR") {
            config.content_dir = PathBuf::from(dir);
        }
        if let Some(format) = read_env::<OutputFormat>("MAGIC_OUTPUT") {
            config.format = format;
        }

        config
    }

    /// Applies command-line overrides on top of the environment.
    pub fn with_overrides(mut self, content_dir: Option<PathBuf>, format: Option<OutputFormat>) -> Self {
        if let Some(dir) = content_dir {
            self.content_dir = dir;
        }
        if let Some(format) = format {
            self.format = format;
        }
        self
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}
