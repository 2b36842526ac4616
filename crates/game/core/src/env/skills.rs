//! Skill records and the oracle serving them.

use super::AptitudeAnnotations;
use crate::state::{SkillId, SkillRef, SkillTypeId};

/// Read-only skill data the usage-count system needs.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SkillRecord {
    pub id: SkillId,
    pub name: String,
    /// Skill type the record is listed under.
    pub skill_type: SkillTypeId,
    /// Passive aptitude annotations granted to whoever knows this skill.
    pub aptitudes: AptitudeAnnotations,
}

impl SkillRecord {
    pub fn new(id: SkillId, name: impl Into<String>, skill_type: SkillTypeId) -> Self {
        Self {
            id,
            name: name.into(),
            skill_type,
            aptitudes: AptitudeAnnotations::empty(),
        }
    }

    pub fn with_aptitudes(mut self, aptitudes: AptitudeAnnotations) -> Self {
        self.aptitudes = aptitudes;
        self
    }

    /// Identifier and declared type, the pair the coordinate resolver reads.
    pub fn key(&self) -> SkillRef {
        SkillRef::new(self.id, self.skill_type)
    }
}

/// Oracle providing skill records by id.
pub trait SkillOracle: Send + Sync {
    /// Returns the skill record for `id`, if the table has one.
    fn skill(&self, id: SkillId) -> Option<&SkillRecord>;
}
