//! Class records and the oracle serving them.

use super::AptitudeAnnotations;
use crate::state::ClassId;

/// Read-only class data the usage-count system needs.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ClassRecord {
    pub id: ClassId,
    pub name: String,
    pub aptitudes: AptitudeAnnotations,
}

impl ClassRecord {
    pub fn new(id: ClassId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            aptitudes: AptitudeAnnotations::empty(),
        }
    }

    pub fn with_aptitudes(mut self, aptitudes: AptitudeAnnotations) -> Self {
        self.aptitudes = aptitudes;
        self
    }
}

/// Oracle providing class records by id.
///
/// Hosts implement this over their class table; the usage-count system never
/// reaches for a global.
pub trait ClassOracle: Send + Sync {
    /// Returns the class record for `id`, if the table has one.
    fn class(&self, id: ClassId) -> Option<&ClassRecord>;
}
