//! Numeric side of the usage-count system.
//!
//! - [`params`]: base parameter ids the formula reads from
//! - [`formula`]: maximum-count formula with floor and clamp
//! - [`aptitude`]: class and skill multipliers feeding the formula

pub mod aptitude;
pub mod formula;
pub mod params;

pub use aptitude::{AptitudeError, AptitudeResolver, NEUTRAL_APTITUDE};
pub use formula::{BASE_RATE, LEVEL_PENALTY, RATE_STEP, UsageFormula};
pub use params::{ParamId, UnknownParamId};
