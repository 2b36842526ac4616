//! Table-backed oracle implementations.
//!
//! - **Snapshots**: Serializable id-keyed tables of class and skill records
//! - **Oracles**: Each snapshot implements its oracle trait directly
//!
//! Loaders build these from content files; tests build them by hand.

use std::collections::BTreeMap;

use super::{ClassOracle, ClassRecord, SkillOracle, SkillRecord};
use crate::state::{ClassId, SkillId, SkillTypeId};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Class table keyed by id.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ClassesSnapshot {
    pub classes: BTreeMap<ClassId, ClassRecord>,
}

impl ClassesSnapshot {
    pub fn new(records: impl IntoIterator<Item = ClassRecord>) -> Self {
        Self {
            classes: records.into_iter().map(|record| (record.id, record)).collect(),
        }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, record: ClassRecord) -> Option<ClassRecord> {
        self.classes.insert(record.id, record)
    }

    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ClassRecord> {
        self.classes.values()
    }
}

impl ClassOracle for ClassesSnapshot {
    fn class(&self, id: ClassId) -> Option<&ClassRecord> {
        self.classes.get(&id)
    }
}

/// Skill table keyed by id.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SkillsSnapshot {
    pub skills: BTreeMap<SkillId, SkillRecord>,
}

impl SkillsSnapshot {
    pub fn new(records: impl IntoIterator<Item = SkillRecord>) -> Self {
        Self {
            skills: records.into_iter().map(|record| (record.id, record)).collect(),
        }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, record: SkillRecord) -> Option<SkillRecord> {
        self.skills.insert(record.id, record)
    }

    pub fn len(&self) -> usize {
        self.skills.len()
    }

    pub fn is_empty(&self) -> bool {
        self.skills.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &SkillRecord> {
        self.skills.values()
    }

    /// Records listed under `skill_type`, in id order.
    pub fn of_type(&self, skill_type: SkillTypeId) -> impl Iterator<Item = &SkillRecord> {
        self.skills
            .values()
            .filter(move |record| record.skill_type == skill_type)
    }
}

impl SkillOracle for SkillsSnapshot {
    fn skill(&self, id: SkillId) -> Option<&SkillRecord> {
        self.skills.get(&id)
    }
}
