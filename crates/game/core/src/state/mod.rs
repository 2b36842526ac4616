//! Character-owned state.
//!
//! Identifiers, the per-character [`UsageLedger`], the capability traits the
//! engine calls through, and plain-data casters and party rosters.
mod caster;
mod ids;
mod ledger;
mod party;

pub use caster::{
    Caster, CasterKind, CasterState, LearnableSkillHolder, LedgerHolder, StatSource,
};
pub use ids::{ActorId, ClassId, SkillId, SkillRef, SkillTypeId};
pub use ledger::{LedgerError, UsageCount, UsageLedger};
pub use party::Party;
