//! Maximum usage-count formula.
//!
//! ```text
//! raw = (X * ((A - L) * 0.01 + 0.24) + B - (L - 2) * 1.6) * aptitude
//! ```
//!
//! with `X` the base parameter, `A` the coefficient, `B` the bias and `L` the
//! spell level. The floor of `raw` is raised to `minimum_count` when the level
//! is learned (and forced to 0 otherwise), then capped at `max_count`.
//!
//! Reference values (A = 5, B = 0, aptitude 1.0, raw floors):
//! - X = 20: `7, 5, 3, 1`, negative from level 5 on
//! - X = 40: `12, 10, 8, 6, 4, 2, 0` (capped to `9, 9, 8, ...` with max 9)

use crate::config::MagicConfig;
use crate::spell::SpellLevel;

/// Rate applied to the base parameter before the per-level adjustment.
pub const BASE_RATE: f64 = 0.24;
/// Rate change per point of `coefficient - level`.
pub const RATE_STEP: f64 = 0.01;
/// Flat reduction per spell level above 2.
pub const LEVEL_PENALTY: f64 = 1.6;

/// Formula constants taken from a [`MagicConfig`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct UsageFormula {
    pub coefficient: f64,
    pub bias: f64,
    pub minimum_count: u32,
    pub max_count: u32,
}

impl UsageFormula {
    pub fn from_config(config: &MagicConfig) -> Self {
        Self {
            coefficient: config.coefficient,
            bias: config.bias,
            minimum_count: config.minimum_count,
            max_count: config.max_count,
        }
    }

    /// Unclamped, unfloored value of the formula.
    pub fn raw(&self, stat: i32, level: SpellLevel, aptitude: f64) -> f64 {
        let level = f64::from(level.0);
        let rate = (self.coefficient - level) * RATE_STEP + BASE_RATE;
        (f64::from(stat) * rate + self.bias - (level - 2.0) * LEVEL_PENALTY) * aptitude
    }

    /// Maximum uses at one level.
    ///
    /// `learned` is whether the character knows at least one skill at this
    /// coordinate; an unlearned level always yields 0.
    pub fn maximum(&self, stat: i32, level: SpellLevel, aptitude: f64, learned: bool) -> u32 {
        if !learned {
            return 0;
        }
        let floored = self.raw(stat, level, aptitude).floor();
        let raised = floored.max(f64::from(self.minimum_count));
        raised.min(f64::from(self.max_count)) as u32
    }
}

impl From<&MagicConfig> for UsageFormula {
    fn from(config: &MagicConfig) -> Self {
        Self::from_config(config)
    }
}
