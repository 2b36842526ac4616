//! Count-selection UI mode for skill screens.
//!
//! When the player opens a managed skill category, the host inserts a level
//! row between the category list and the skill list. The row shows
//! `current/max` for each level; picking a level scopes the skill list to
//! that level's skills.
//!
//! ```text
//!            managed category                confirm (uses left)
//! Category ─────────────────▶ LevelSelector ───────────────────▶ SkillList ──▶ Target
//!    ▲      ◀─────────────────       ▲  ◀──────── cancel ─────────┘                 │
//!    │          cancel                └─────── exhausted after action ──────────────┘
//!    │
//!    └── unmanaged category: straight to SkillList (Normal mode)
//! ```
//!
//! The machine owns no widgets. Every transition returns [`Effects`] for the
//! host to apply to its own windows.
mod effect;
mod machine;

pub use effect::{Effects, LevelEntry, LevelRow, SelectionEffect};
pub use machine::SelectionMachine;

/// Which screen the machine is embedded in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum SelectionContext {
    /// Out-of-battle skill menu.
    Menu,
    /// Battle command input.
    Battle,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum SelectionMode {
    /// Host default skill handling.
    #[default]
    Normal,
    /// A managed category is open and the level row is in use.
    CountSelect,
}

/// Widget holding input focus.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum Focus {
    /// Skill-type list (menu) or actor command list (battle).
    #[default]
    Category,
    LevelSelector,
    SkillList,
    Target,
}
