//! Usage-count system configuration.
//!
//! One `MagicConfig` is loaded per process and never changes afterwards. It
//! fixes the numbering scheme (which skill and skill-type ids belong to the
//! system) and the tuning constants of the maximum-count formula.

use core::ops::RangeInclusive;

use crate::error::{ErrorSeverity, GameError};
use crate::state::SkillTypeId;
use crate::stats::ParamId;

/// Configuration constants and tunable parameters of the usage-count system.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct MagicConfig {
    /// First skill id belonging to the system (family 0, level 1).
    pub start_id: u32,
    /// Skill-type id of family 0. Family `t` uses `skill_type_base + t`.
    pub skill_type_base: u32,
    /// Number of parallel spell families.
    pub spell_type_count: u8,
    /// Number of skill ids sharing one `(type, level)` coordinate.
    pub spells_per_level: u8,
    /// Highest spell level.
    pub max_level: u8,
    /// Floor applied to a learned level's maximum count.
    pub minimum_count: u32,
    /// Ceiling applied to every maximum count.
    pub max_count: u32,
    /// Base parameter driving the formula.
    pub base_stat_id: ParamId,
    pub coefficient: f64,
    pub bias: f64,
}

impl MagicConfig {
    // ===== accepted ranges =====
    pub const SPELLS_PER_LEVEL_RANGE: RangeInclusive<u8> = 1..=8;
    pub const MAX_LEVEL_RANGE: RangeInclusive<u8> = 3..=9;
    pub const COUNT_RANGE: RangeInclusive<u32> = 1..=99;
    pub const COEFFICIENT_RANGE: RangeInclusive<f64> = 0.0..=10.0;
    pub const BIAS_RANGE: RangeInclusive<f64> = -10.0..=10.0;

    // ===== defaults =====
    pub const DEFAULT_START_ID: u32 = 10;
    pub const DEFAULT_SKILL_TYPE_BASE: u32 = 1;
    pub const DEFAULT_SPELL_TYPE_COUNT: u8 = 3;
    pub const DEFAULT_SPELLS_PER_LEVEL: u8 = 3;
    pub const DEFAULT_MAX_LEVEL: u8 = 7;
    pub const DEFAULT_MINIMUM_COUNT: u32 = 3;
    pub const DEFAULT_MAX_COUNT: u32 = 9;
    pub const DEFAULT_COEFFICIENT: f64 = 5.0;
    pub const DEFAULT_BIAS: f64 = 0.0;

    pub fn new() -> Self {
        Self {
            start_id: Self::DEFAULT_START_ID,
            skill_type_base: Self::DEFAULT_SKILL_TYPE_BASE,
            spell_type_count: Self::DEFAULT_SPELL_TYPE_COUNT,
            spells_per_level: Self::DEFAULT_SPELLS_PER_LEVEL,
            max_level: Self::DEFAULT_MAX_LEVEL,
            minimum_count: Self::DEFAULT_MINIMUM_COUNT,
            max_count: Self::DEFAULT_MAX_COUNT,
            base_stat_id: ParamId::default(),
            coefficient: Self::DEFAULT_COEFFICIENT,
            bias: Self::DEFAULT_BIAS,
        }
    }

    /// Number of skill ids used by one family (levels only, no gap).
    #[inline]
    pub const fn family_span(&self) -> u32 {
        self.spells_per_level as u32 * self.max_level as u32
    }

    /// Distance between the first ids of two consecutive families.
    ///
    /// One id after every family is a reserved gap.
    #[inline]
    pub const fn family_stride(&self) -> u32 {
        self.family_span() + 1
    }

    /// Skill-type id that lists family `index`.
    #[inline]
    pub const fn skill_type_of_family(&self, index: u8) -> SkillTypeId {
        SkillTypeId(self.skill_type_base + index as u32)
    }

    /// Checks every field against its accepted range.
    ///
    /// The rules layer never calls this; loaders do, so that a bad file is
    /// rejected before any ledger is shaped from it.
    pub fn validate(&self) -> Result<(), ConfigurationError> {
        if self.spell_type_count == 0 {
            return Err(ConfigurationError::out_of_range(
                "spell_type_count",
                0.0,
                1.0,
                f64::from(u8::MAX),
            ));
        }
        check_range(
            "spells_per_level",
            self.spells_per_level,
            &Self::SPELLS_PER_LEVEL_RANGE,
        )?;
        check_range("max_level", self.max_level, &Self::MAX_LEVEL_RANGE)?;
        check_range("minimum_count", self.minimum_count, &Self::COUNT_RANGE)?;
        check_range("max_count", self.max_count, &Self::COUNT_RANGE)?;
        check_range("coefficient", self.coefficient, &Self::COEFFICIENT_RANGE)?;
        check_range("bias", self.bias, &Self::BIAS_RANGE)?;
        Ok(())
    }
}

impl Default for MagicConfig {
    fn default() -> Self {
        Self::new()
    }
}

fn check_range<T>(
    field: &'static str,
    value: T,
    range: &RangeInclusive<T>,
) -> Result<(), ConfigurationError>
where
    T: PartialOrd + Copy + Into<f64>,
{
    if range.contains(&value) {
        Ok(())
    } else {
        Err(ConfigurationError::out_of_range(
            field,
            value.into(),
            (*range.start()).into(),
            (*range.end()).into(),
        ))
    }
}

/// Content or configuration is malformed.
///
/// These are authoring bugs surfaced where the bad value is used, not runtime
/// conditions to recover from.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum ConfigurationError {
    #[error("aptitude annotation '{raw}' is not a `skillTypeId,multiplier` pair")]
    MalformedAnnotation { raw: String },

    #[error("aptitude annotation '{raw}' has a non-numeric skill type id")]
    InvalidSkillType { raw: String },

    #[error("aptitude annotation '{raw}' has a non-numeric multiplier")]
    InvalidMultiplier { raw: String },

    #[error("{field} = {value} is outside {min}..={max}")]
    OutOfRange {
        field: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },
}

impl ConfigurationError {
    fn out_of_range(field: &'static str, value: f64, min: f64, max: f64) -> Self {
        Self::OutOfRange {
            field,
            value,
            min,
            max,
        }
    }
}

impl GameError for ConfigurationError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Fatal
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::MalformedAnnotation { .. } => "CONFIG_MALFORMED_ANNOTATION",
            Self::InvalidSkillType { .. } => "CONFIG_INVALID_SKILL_TYPE",
            Self::InvalidMultiplier { .. } => "CONFIG_INVALID_MULTIPLIER",
            Self::OutOfRange { .. } => "CONFIG_OUT_OF_RANGE",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_layout_matches_documented_example() {
        let config = MagicConfig::default();
        assert_eq!(config.family_span(), 21);
        assert_eq!(config.family_stride(), 22);
        assert_eq!(config.skill_type_of_family(2), SkillTypeId(3));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn rejects_out_of_range_levels() {
        let config = MagicConfig {
            max_level: 10,
            ..MagicConfig::default()
        };
        let err = config.validate().unwrap_err();
        assert!(matches!(
            err,
            ConfigurationError::OutOfRange {
                field: "max_level",
                ..
            }
        ));
        assert_eq!(err.error_code(), "CONFIG_OUT_OF_RANGE");
    }

    #[test]
    fn rejects_bias_and_empty_family_set() {
        let config = MagicConfig {
            bias: -10.5,
            ..MagicConfig::default()
        };
        assert!(config.validate().is_err());

        let config = MagicConfig {
            spell_type_count: 0,
            ..MagicConfig::default()
        };
        assert!(config.validate().is_err());
    }
}
