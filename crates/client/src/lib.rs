//! Command-line inspector for the usage-count system.
//!
//! Loads content files through [`magic_content::ContentFactory`], sets every
//! character up the way a host would, and exposes the engine operations
//! (casting, levelling, recovery, skill menus) as commands and scripts.
//!
//! ```text
//! content/
//!   ├─ config.toml    MagicConfig overrides
//!   ├─ database.ron   classes and skills with their notes
//!   └─ party.ron      actors, enemies and the active party
//! ```
pub mod config;
pub mod diagnostics;
pub mod report;
pub mod script;
pub mod session;

pub use config::{ClientConfig, OutputFormat};
pub use report::Report;
pub use script::Step;
pub use session::{CastOutcome, MenuView, Session};
