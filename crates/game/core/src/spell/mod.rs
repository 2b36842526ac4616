//! Spell numbering: which skills the usage-count system manages and where
//! each one sits in the ledger.
mod coordinate;

pub use coordinate::{Coordinate, CoordinateResolver, SpellLevel, SpellType};
