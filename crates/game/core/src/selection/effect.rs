//! Instructions the host applies to its widgets.

use arrayvec::ArrayVec;

use super::Focus;
use crate::spell::{SpellLevel, SpellType};
use crate::state::UsageCount;

/// One cell of the level row.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LevelEntry {
    pub level: SpellLevel,
    pub count: UsageCount,
    /// False when no uses are left; the host draws the cell disabled.
    pub enabled: bool,
}

impl LevelEntry {
    pub const fn new(level: SpellLevel, count: UsageCount) -> Self {
        Self {
            level,
            count,
            enabled: count.current != 0,
        }
    }

    /// Cell text, `current/max`.
    pub fn label(&self) -> String {
        self.count.to_string()
    }
}

/// Level row for one spell family, level 1 first.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LevelRow {
    pub spell_type: SpellType,
    pub entries: Vec<LevelEntry>,
}

impl LevelRow {
    pub fn entry(&self, level: SpellLevel) -> Option<&LevelEntry> {
        self.entries.get(level.index()).filter(|_| level.0 >= 1)
    }

    pub fn labels(&self) -> impl Iterator<Item = String> + '_ {
        self.entries.iter().map(LevelEntry::label)
    }
}

/// A single widget instruction.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SelectionEffect {
    /// Refresh and open the level row.
    ShowLevelRow(LevelRow),
    HideLevelRow,
    /// Move the level row cursor.
    HighlightLevel(SpellLevel),
    /// Rebuild the skill list with only the skills of this level.
    ScopeSkillList(SpellLevel),
    /// Rebuild the skill list the host's usual way.
    ShowDefaultSkillList,
    ShowSkillList,
    HideSkillList,
    DeselectSkillList,
    /// Put the skill-list cursor back on the last used skill.
    SelectLastSkill,
    ClearHelp,
    HideTargetWindow,
    Focus(Focus),
    /// Play the rejection sound; nothing else changes.
    Buzzer,
}

/// Effects of one transition, in application order.
pub type Effects = ArrayVec<SelectionEffect, 8>;
