//! Aptitude annotations attached to class and skill records.
//!
//! Each record carries up to three raw `skillTypeId,multiplier` payloads
//! (authored as `<magicAptitude1:1,1.4>` ... `<magicAptitude3:...>` tags).
//! Payloads stay raw until used so that a malformed one surfaces where it is
//! read instead of being silently dropped at load.

use core::str::FromStr;

use crate::config::ConfigurationError;
use crate::state::SkillTypeId;

/// Number of annotation slots a record can carry.
pub const APTITUDE_SLOTS: usize = 3;

/// Raw annotation payloads of one record, by slot.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AptitudeAnnotations {
    slots: [Option<String>; APTITUDE_SLOTS],
}

impl AptitudeAnnotations {
    pub fn new(slots: [Option<String>; APTITUDE_SLOTS]) -> Self {
        Self { slots }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    /// Sets the payload of `slot` (0-based). Slots past the third are ignored.
    pub fn with_slot(mut self, slot: usize, raw: impl Into<String>) -> Self {
        if let Some(entry) = self.slots.get_mut(slot) {
            *entry = Some(raw.into());
        }
        self
    }

    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(Option::is_none)
    }

    /// Present payloads, in slot order.
    pub fn raw(&self) -> impl Iterator<Item = &str> {
        self.slots.iter().flatten().map(String::as_str)
    }

    /// Parses every present payload.
    pub fn tags(&self) -> impl Iterator<Item = Result<AptitudeTag, ConfigurationError>> + '_ {
        self.raw().map(AptitudeTag::parse)
    }

    /// Product of the multipliers of every slot naming `skill_type`.
    ///
    /// Several matching slots on one record compound. Any malformed payload
    /// fails the whole lookup, matching or not.
    pub fn multiplier_for(&self, skill_type: SkillTypeId) -> Result<f64, ConfigurationError> {
        self.tags().try_fold(1.0, |acc, tag| {
            let tag = tag?;
            Ok(if tag.skill_type == skill_type {
                acc * tag.multiplier
            } else {
                acc
            })
        })
    }
}

/// One parsed `(skill type, multiplier)` annotation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AptitudeTag {
    pub skill_type: SkillTypeId,
    pub multiplier: f64,
}

impl AptitudeTag {
    /// Parses `"<skillTypeId>,<multiplier>"`. Whitespace around either half is
    /// ignored, as are fields after the second comma.
    pub fn parse(raw: &str) -> Result<Self, ConfigurationError> {
        let mut fields = raw.split(',');
        let (Some(type_field), Some(multiplier_field)) = (fields.next(), fields.next()) else {
            return Err(ConfigurationError::MalformedAnnotation {
                raw: raw.to_string(),
            });
        };

        let skill_type = type_field
            .trim()
            .parse::<u32>()
            .map(SkillTypeId)
            .map_err(|_| ConfigurationError::InvalidSkillType {
                raw: raw.to_string(),
            })?;
        let multiplier = multiplier_field
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|value| value.is_finite())
            .ok_or_else(|| ConfigurationError::InvalidMultiplier {
                raw: raw.to_string(),
            })?;

        Ok(Self {
            skill_type,
            multiplier,
        })
    }
}

impl FromStr for AptitudeTag {
    type Err = ConfigurationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
