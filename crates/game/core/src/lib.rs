//! Magic usage-count rules shared by hosts and tools.
//!
//! `magic-core` replaces mana cost for spell skills with per-level usage
//! counts. Skills are placed on a `(type, level)` grid by their ids, each
//! character carries a [`UsageLedger`] of current and maximum uses per grid
//! cell, and maximums follow a formula driven by a base parameter and
//! class/skill aptitude annotations.
//!
//! Hosts reach the core through narrow seams: read-only oracles for class and
//! skill tables ([`env`]), capability traits on their characters
//! ([`state::Caster`]), and the stateless [`MagicEngine`]. Skill screens embed
//! a [`SelectionMachine`] and apply the effects it returns.
pub mod config;
pub mod engine;
pub mod env;
pub mod error;
pub mod selection;
pub mod spell;
pub mod state;
pub mod stats;

pub use config::{ConfigurationError, MagicConfig};
pub use engine::{
    Affordability, MagicEngine, Payment, RecomputeError, RecoverCommand, RecoverError,
    RecoverTarget,
};
pub use env::{
    AptitudeAnnotations, AptitudeTag, ClassOracle, ClassRecord, ClassesSnapshot, Env, MagicEnv,
    OracleError, PartyRoster, SkillOracle, SkillRecord, SkillsSnapshot,
};
pub use error::{ErrorSeverity, GameError};
pub use selection::{
    Effects, Focus, LevelEntry, LevelRow, SelectionContext, SelectionEffect, SelectionMachine,
    SelectionMode,
};
pub use spell::{Coordinate, CoordinateResolver, SpellLevel, SpellType};
pub use state::{
    ActorId, Caster, CasterKind, CasterState, ClassId, LearnableSkillHolder, LedgerError,
    LedgerHolder, Party, SkillId, SkillRef, SkillTypeId, StatSource, UsageCount, UsageLedger,
};
pub use stats::{AptitudeError, AptitudeResolver, ParamId, UsageFormula};
