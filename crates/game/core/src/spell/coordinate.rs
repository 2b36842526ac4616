//! Skill coordinate resolution.
//!
//! Maps skill identifiers onto `(spell type, spell level)` coordinates inside
//! the configured numbering scheme. With the default configuration:
//!
//! ```text
//! family 0: ids 10..=30  (Lv.1 = 10..=12, Lv.2 = 13..=15, ... Lv.7 = 28..=30)
//! gap:      id  31
//! family 1: ids 32..=52
//! gap:      id  53
//! family 2: ids 54..=74
//! ```

use core::fmt;
use core::ops::{Range, RangeInclusive};

use crate::config::MagicConfig;
use crate::state::{SkillId, SkillRef, SkillTypeId};

/// Zero-based index of a spell family.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct SpellType(pub u8);

impl SpellType {
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

/// One-based spell level.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct SpellLevel(pub u8);

impl SpellLevel {
    pub const FIRST: Self = Self(1);

    /// Zero-based row index used by ledger tables.
    #[inline]
    pub const fn index(self) -> usize {
        self.0.saturating_sub(1) as usize
    }

    #[inline]
    pub const fn from_index(index: usize) -> Self {
        Self(index as u8 + 1)
    }
}

impl Default for SpellLevel {
    fn default() -> Self {
        Self::FIRST
    }
}

impl fmt::Display for SpellLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Lv.{}", self.0)
    }
}

/// A `(type, level)` pair keying the usage-count ledger.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Coordinate {
    pub spell_type: SpellType,
    pub level: SpellLevel,
}

impl Coordinate {
    pub const fn new(spell_type: SpellType, level: SpellLevel) -> Self {
        Self { spell_type, level }
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "type {} {}", self.spell_type.0, self.level)
    }
}

/// Pure classifier over one [`MagicConfig`].
#[derive(Clone, Copy, Debug)]
pub struct CoordinateResolver<'a> {
    config: &'a MagicConfig,
}

impl<'a> CoordinateResolver<'a> {
    pub const fn new(config: &'a MagicConfig) -> Self {
        Self { config }
    }

    pub const fn config(&self) -> &'a MagicConfig {
        self.config
    }

    /// Family listed under `skill_type`, if that category belongs to the system.
    pub fn type_of(&self, skill_type: SkillTypeId) -> Option<SpellType> {
        let offset = skill_type.0.checked_sub(self.config.skill_type_base)?;
        (offset < u32::from(self.config.spell_type_count)).then(|| SpellType(offset as u8))
    }

    /// True when selecting `category` should switch the UI into count selection.
    pub fn is_managed_category(&self, category: SkillTypeId) -> bool {
        self.type_of(category).is_some()
    }

    /// Family of a skill, taken from the skill type its record declares.
    pub fn type_of_skill(&self, skill: SkillRef) -> Option<SpellType> {
        self.type_of(skill.skill_type)
    }

    /// Level of a skill inside its declared family.
    ///
    /// Returns `None` when the declared type is unmanaged or when the id does
    /// not fall on a level of that family (including the reserved gap).
    pub fn level_of(&self, skill: SkillRef) -> Option<SpellLevel> {
        let spell_type = self.type_of_skill(skill)?;
        let family_start = self.family_start(spell_type);
        let offset = i64::from(skill.id.0) - family_start;
        let level = offset.div_euclid(i64::from(self.config.spells_per_level)) + 1;
        (1..=i64::from(self.config.max_level))
            .contains(&level)
            .then(|| SpellLevel(level as u8))
    }

    /// Full coordinate of a skill, or `None` if the system does not manage it.
    pub fn coordinate_of(&self, skill: SkillRef) -> Option<Coordinate> {
        let spell_type = self.type_of_skill(skill)?;
        let level = self.level_of(skill)?;
        Some(Coordinate::new(spell_type, level))
    }

    /// Coordinate implied by the id's position alone, ignoring any declared type.
    pub fn coordinate_by_position(&self, skill: SkillId) -> Option<Coordinate> {
        let offset = skill.0.checked_sub(self.config.start_id)?;
        let stride = self.config.family_stride();
        let family = offset / stride;
        if family >= u32::from(self.config.spell_type_count) {
            return None;
        }
        let within = offset % stride;
        if within >= self.config.family_span() {
            return None;
        }
        let level = within / u32::from(self.config.spells_per_level) + 1;
        Some(Coordinate::new(
            SpellType(family as u8),
            SpellLevel(level as u8),
        ))
    }

    /// The `spells_per_level` skill ids sharing `coordinate`.
    ///
    /// Empty when the level lies outside `1..=max_level`.
    pub fn skill_range(&self, coordinate: Coordinate) -> RangeInclusive<u32> {
        if !(1..=self.config.max_level).contains(&coordinate.level.0) {
            return RangeInclusive::new(1, 0);
        }
        let first = self.config.start_id
            + self.config.family_stride() * u32::from(coordinate.spell_type.0)
            + u32::from(self.config.spells_per_level) * coordinate.level.index() as u32;
        first..=first + u32::from(self.config.spells_per_level) - 1
    }

    /// Skill ids of every level in `spell_type`, gap excluded.
    pub fn family_range(&self, spell_type: SpellType) -> Range<u32> {
        let first = self.config.start_id + self.config.family_stride() * u32::from(spell_type.0);
        first..first + self.config.family_span()
    }

    /// Every spell family, in order.
    pub fn spell_types(&self) -> impl Iterator<Item = SpellType> + use<> {
        (0..self.config.spell_type_count).map(SpellType)
    }

    /// Every level, from 1 to `max_level`.
    pub fn levels(&self) -> impl Iterator<Item = SpellLevel> + use<> {
        (1..=self.config.max_level).map(SpellLevel)
    }

    fn family_start(&self, spell_type: SpellType) -> i64 {
        i64::from(self.config.start_id)
            + i64::from(self.config.family_stride()) * i64::from(spell_type.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn skill(id: u32, stype: u32) -> SkillRef {
        SkillRef::new(SkillId(id), SkillTypeId(stype))
    }

    #[test]
    fn classifies_skill_types() {
        let config = MagicConfig::default();
        let resolver = CoordinateResolver::new(&config);
        assert_eq!(resolver.type_of(SkillTypeId(0)), None);
        assert_eq!(resolver.type_of(SkillTypeId(1)), Some(SpellType(0)));
        assert_eq!(resolver.type_of(SkillTypeId(3)), Some(SpellType(2)));
        assert_eq!(resolver.type_of(SkillTypeId(4)), None);
    }

    #[test]
    fn resolves_levels_of_documented_layout() {
        let config = MagicConfig::default();
        let resolver = CoordinateResolver::new(&config);

        assert_eq!(resolver.level_of(skill(10, 1)), Some(SpellLevel(1)));
        assert_eq!(resolver.level_of(skill(12, 1)), Some(SpellLevel(1)));
        assert_eq!(resolver.level_of(skill(13, 1)), Some(SpellLevel(2)));
        assert_eq!(resolver.level_of(skill(30, 1)), Some(SpellLevel(7)));
        assert_eq!(resolver.level_of(skill(32, 2)), Some(SpellLevel(1)));
        assert_eq!(resolver.level_of(skill(74, 3)), Some(SpellLevel(7)));
    }

    #[test]
    fn gap_and_foreign_ids_are_unmanaged() {
        let config = MagicConfig::default();
        let resolver = CoordinateResolver::new(&config);

        // reserved gap after family 0
        assert_eq!(resolver.level_of(skill(31, 1)), None);
        // below the first family
        assert_eq!(resolver.level_of(skill(9, 1)), None);
        // declared as family 1 but positioned in family 0
        assert_eq!(resolver.level_of(skill(10, 2)), None);
        // ordinary skill type
        assert_eq!(resolver.coordinate_of(skill(12, 5)), None);
    }

    #[test]
    fn position_lookup_skips_gaps() {
        let config = MagicConfig::default();
        let resolver = CoordinateResolver::new(&config);

        assert_eq!(
            resolver.coordinate_by_position(SkillId(54)),
            Some(Coordinate::new(SpellType(2), SpellLevel(1)))
        );
        assert_eq!(resolver.coordinate_by_position(SkillId(31)), None);
        assert_eq!(resolver.coordinate_by_position(SkillId(53)), None);
        assert_eq!(resolver.coordinate_by_position(SkillId(75)), None);
        assert_eq!(resolver.coordinate_by_position(SkillId(3)), None);
    }

    #[test]
    fn skill_range_covers_one_level() {
        let config = MagicConfig::default();
        let resolver = CoordinateResolver::new(&config);

        let coord = Coordinate::new(SpellType(1), SpellLevel(2));
        assert_eq!(resolver.skill_range(coord), 35..=37);
        assert_eq!(resolver.family_range(SpellType(2)), 54..75);
    }

    #[test]
    fn skill_range_is_empty_off_the_level_scale() {
        let config = MagicConfig::default();
        let resolver = CoordinateResolver::new(&config);

        for level in [SpellLevel(0), SpellLevel(8)] {
            let range = resolver.skill_range(Coordinate::new(SpellType(0), level));
            assert!(range.is_empty(), "{level:?}");
        }
    }
}
