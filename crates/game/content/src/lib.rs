//! Data-driven content for the usage-count system.
//!
//! This crate turns editor data into the oracles `magic-core` reads:
//! - Note-tag extraction (`<magicAptitude1:1,1.4>`) into aptitude slots
//! - Configuration (TOML)
//! - Class and skill database (RON, with raw note fields)
//! - Actor roster and active party (RON)
//!
//! Content is consumed through oracles and never appears in a ledger.

pub mod notes;

#[cfg(feature = "loaders")]
pub mod loaders;

pub use notes::{APTITUDE_KEYS, NoteMeta, NoteValue};

#[cfg(feature = "loaders")]
pub use loaders::{ConfigLoader, ContentFactory, Database, DatabaseLoader, PartyLoader};
