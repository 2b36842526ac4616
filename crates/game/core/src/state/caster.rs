//! Character capabilities the usage-count system calls through.
//!
//! The host owns its characters. Instead of patching host classes, the system
//! asks for three narrow capabilities:
//!
//! - [`StatSource`]: base parameters and level
//! - [`LearnableSkillHolder`]: class and learned-skill set
//! - [`LedgerHolder`]: the character's [`UsageLedger`]
//!
//! [`CasterState`] is a plain-data implementation for hosts without their own
//! character model (and for tests).

use strum::EnumCount;

use super::{ActorId, ClassId, SkillId, UsageLedger};
use crate::config::MagicConfig;
use crate::stats::ParamId;

/// Base statistics of a character.
pub trait StatSource {
    /// Base value of `param`, excluding equipment and buff modifiers.
    fn base_param(&self, param: ParamId) -> i32;

    /// Current character level.
    fn level(&self) -> u32;

    /// Side the character fights on. Enemies skip the formula.
    fn kind(&self) -> CasterKind {
        CasterKind::Actor
    }
}

/// Class membership and learned skills.
pub trait LearnableSkillHolder {
    fn class_id(&self) -> ClassId;

    fn is_learned(&self, skill: SkillId) -> bool;

    /// Every skill the character currently knows.
    fn learned_skills(&self) -> &[SkillId];
}

/// Access to the character's usage-count ledger.
pub trait LedgerHolder {
    fn ledger(&self) -> &UsageLedger;

    fn ledger_mut(&mut self) -> &mut UsageLedger;
}

/// Everything needed to recompute a player character's maximums.
pub trait Caster: StatSource + LearnableSkillHolder + LedgerHolder {}

impl<T> Caster for T where T: StatSource + LearnableSkillHolder + LedgerHolder + ?Sized {}

/// Which side a character fights on.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum CasterKind {
    /// Player character; maximums follow the formula.
    #[default]
    Actor,
    /// Enemy instance; maximums are pinned to the configured ceiling.
    Enemy,
}

/// Plain-data character carrying its own ledger.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CasterState {
    pub id: ActorId,
    pub name: String,
    pub kind: CasterKind,
    pub class_id: ClassId,
    pub level: u32,
    pub base_params: [i32; ParamId::COUNT],
    /// Sorted, without duplicates.
    skills: Vec<SkillId>,
    ledger: UsageLedger,
}

impl CasterState {
    /// A level-1 actor with zeroed parameters and an all-zero ledger.
    pub fn actor(id: ActorId, name: impl Into<String>, config: &MagicConfig) -> Self {
        Self {
            id,
            name: name.into(),
            kind: CasterKind::Actor,
            class_id: ClassId::default(),
            level: 1,
            base_params: [0; ParamId::COUNT],
            skills: Vec::new(),
            ledger: UsageLedger::new(config),
        }
    }

    /// An enemy instance. Call [`crate::MagicEngine::setup_enemy`] before use.
    pub fn enemy(id: ActorId, name: impl Into<String>, config: &MagicConfig) -> Self {
        Self {
            kind: CasterKind::Enemy,
            ..Self::actor(id, name, config)
        }
    }

    pub fn with_class(mut self, class_id: ClassId) -> Self {
        self.class_id = class_id;
        self
    }

    pub fn with_level(mut self, level: u32) -> Self {
        self.level = level;
        self
    }

    pub fn with_param(mut self, param: ParamId, value: i32) -> Self {
        self.base_params[param.index()] = value;
        self
    }

    pub fn with_skills(mut self, skills: impl IntoIterator<Item = SkillId>) -> Self {
        for skill in skills {
            self.learn_skill(skill);
        }
        self
    }

    /// Adds `skill` to the learned set. Returns false if it was already known.
    pub fn learn_skill(&mut self, skill: SkillId) -> bool {
        match self.skills.binary_search(&skill) {
            Ok(_) => false,
            Err(pos) => {
                self.skills.insert(pos, skill);
                true
            }
        }
    }

    /// Removes `skill` from the learned set. Returns false if it was unknown.
    pub fn forget_skill(&mut self, skill: SkillId) -> bool {
        match self.skills.binary_search(&skill) {
            Ok(pos) => {
                self.skills.remove(pos);
                true
            }
            Err(_) => false,
        }
    }

    pub fn set_param(&mut self, param: ParamId, value: i32) {
        self.base_params[param.index()] = value;
    }

    pub const fn is_enemy(&self) -> bool {
        matches!(self.kind, CasterKind::Enemy)
    }
}

impl StatSource for CasterState {
    fn base_param(&self, param: ParamId) -> i32 {
        self.base_params[param.index()]
    }

    fn level(&self) -> u32 {
        self.level
    }

    fn kind(&self) -> CasterKind {
        self.kind
    }
}

impl LearnableSkillHolder for CasterState {
    fn class_id(&self) -> ClassId {
        self.class_id
    }

    fn is_learned(&self, skill: SkillId) -> bool {
        self.skills.binary_search(&skill).is_ok()
    }

    fn learned_skills(&self) -> &[SkillId] {
        &self.skills
    }
}

impl LedgerHolder for CasterState {
    fn ledger(&self) -> &UsageLedger {
        &self.ledger
    }

    fn ledger_mut(&mut self) -> &mut UsageLedger {
        &mut self.ledger
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn learned_set_stays_sorted_and_unique() {
        let config = MagicConfig::default();
        let mut caster = CasterState::actor(ActorId(1), "Mage", &config)
            .with_skills([SkillId(13), SkillId(10), SkillId(13)]);

        assert_eq!(caster.learned_skills(), &[SkillId(10), SkillId(13)]);
        assert!(caster.is_learned(SkillId(13)));
        assert!(!caster.learn_skill(SkillId(10)));
        assert!(caster.forget_skill(SkillId(10)));
        assert!(!caster.is_learned(SkillId(10)));
    }

    #[test]
    fn params_are_indexed_by_id() {
        let config = MagicConfig::default();
        let caster = CasterState::actor(ActorId(1), "Mage", &config)
            .with_param(ParamId::MagicAttack, 20)
            .with_level(4);

        assert_eq!(caster.base_param(ParamId::MagicAttack), 20);
        assert_eq!(caster.base_param(ParamId::Attack), 0);
        assert_eq!(caster.level(), 4);
        assert!(!caster.is_enemy());
        assert!(CasterState::enemy(ActorId(9), "Slime", &config).is_enemy());
    }
}
