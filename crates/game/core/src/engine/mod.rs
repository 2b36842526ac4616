//! Usage-count lifecycle.
//!
//! The [`MagicEngine`] ties the pieces together: it classifies skills,
//! recomputes maximums from the formula and aptitude, and charges or checks
//! uses on a character's ledger. It holds no state of its own; every call
//! borrows the character it works on.
//!
//! Lifecycle hooks a host wires up:
//!
//! | host event     | engine call                 |
//! |----------------|-----------------------------|
//! | actor setup    | [`MagicEngine::setup_actor`] |
//! | level up       | [`MagicEngine::level_up`]    |
//! | enemy setup    | [`MagicEngine::setup_enemy`] |
//! | skill cost     | [`MagicEngine::pay`]         |
//! | cost check     | [`MagicEngine::can_afford`]  |

mod command;
mod errors;
mod outcome;

pub use command::{RecoverCommand, RecoverTarget};
pub use errors::{RecomputeError, RecoverError};
pub use outcome::{Affordability, Payment};

use crate::config::MagicConfig;
use crate::env::MagicEnv;
use crate::spell::{Coordinate, CoordinateResolver, SpellType};
use crate::state::{
    Caster, CasterKind, CasterState, LearnableSkillHolder, LedgerError, LedgerHolder, SkillId, SkillRef,
};
use crate::stats::{AptitudeResolver, UsageFormula};

/// Stateless driver over one configuration and one set of host tables.
#[derive(Clone, Copy)]
pub struct MagicEngine<'a> {
    config: &'a MagicConfig,
    env: MagicEnv<'a>,
}

impl<'a> MagicEngine<'a> {
    pub fn new(config: &'a MagicConfig, env: MagicEnv<'a>) -> Self {
        Self { config, env }
    }

    pub fn config(&self) -> &'a MagicConfig {
        self.config
    }

    pub fn env(&self) -> MagicEnv<'a> {
        self.env
    }

    pub fn resolver(&self) -> CoordinateResolver<'a> {
        CoordinateResolver::new(self.config)
    }

    pub fn aptitude(&self) -> AptitudeResolver<'a> {
        AptitudeResolver::new(self.config, self.env)
    }

    pub fn formula(&self) -> UsageFormula {
        UsageFormula::from_config(self.config)
    }

    /// Coordinate of `skill`, or `None` when the system does not manage it.
    pub fn classify(&self, skill: SkillRef) -> Option<Coordinate> {
        self.resolver().coordinate_of(skill)
    }

    /// True if the holder knows any skill whose id sits at `coordinate`.
    pub fn is_learned_coordinate<H>(&self, holder: &H, coordinate: Coordinate) -> bool
    where
        H: LearnableSkillHolder + ?Sized,
    {
        self.resolver()
            .skill_range(coordinate)
            .any(|id| holder.is_learned(SkillId(id)))
    }

    /// True if the holder knows any skill of `spell_type`, at any level.
    pub fn is_learned_type<H>(&self, holder: &H, spell_type: SpellType) -> bool
    where
        H: LearnableSkillHolder + ?Sized,
    {
        self.resolver()
            .levels()
            .any(|level| self.is_learned_coordinate(holder, Coordinate::new(spell_type, level)))
    }

    /// Recomputes every maximum of one family.
    ///
    /// A family with no learned skill is zeroed. Otherwise each level gets
    /// the formula value, or 0 when none of its skills is known. Enemies stay
    /// pinned to `max_count`.
    pub fn recompute_type<C>(&self, caster: &mut C, spell_type: SpellType) -> Result<(), RecomputeError>
    where
        C: Caster + ?Sized,
    {
        if caster.kind() == CasterKind::Enemy {
            let ledger = caster.ledger_mut();
            for level in self.resolver().levels() {
                ledger.set_maximum(Coordinate::new(spell_type, level), self.config.max_count)?;
            }
            return Ok(());
        }
        if !self.is_learned_type(&*caster, spell_type) {
            caster.ledger_mut().clear_type(spell_type);
            return Ok(());
        }

        let aptitude = self.aptitude().aptitude(&*caster, spell_type)?;
        let stat = caster.base_param(self.config.base_stat_id);
        let formula = self.formula();

        let maximums: Vec<(Coordinate, u32)> = self
            .resolver()
            .levels()
            .map(|level| {
                let coordinate = Coordinate::new(spell_type, level);
                let learned = self.is_learned_coordinate(&*caster, coordinate);
                (coordinate, formula.maximum(stat, level, aptitude, learned))
            })
            .collect();

        let ledger = caster.ledger_mut();
        for (coordinate, maximum) in maximums {
            ledger.set_maximum(coordinate, maximum)?;
        }
        tracing::trace!(spell_type = spell_type.0, stat, aptitude, "recomputed family");
        Ok(())
    }

    /// Recomputes the maximums of every family.
    pub fn recompute_all<C>(&self, caster: &mut C) -> Result<(), RecomputeError>
    where
        C: Caster + ?Sized,
    {
        for spell_type in self.resolver().spell_types() {
            self.recompute_type(caster, spell_type)?;
        }
        Ok(())
    }

    /// Actor setup: recompute, then refill every count.
    pub fn setup_actor<C>(&self, caster: &mut C) -> Result<(), RecomputeError>
    where
        C: Caster + ?Sized,
    {
        self.recompute_all(caster)?;
        caster.ledger_mut().full_recover();
        tracing::debug!(level = caster.level(), "actor usage counts set up");
        Ok(())
    }

    /// Level up: recompute only. Current counts are not refilled.
    pub fn level_up<C>(&self, caster: &mut C) -> Result<(), RecomputeError>
    where
        C: Caster + ?Sized,
    {
        self.recompute_all(caster)?;
        tracing::debug!(level = caster.level(), "usage maximums recomputed after level up");
        Ok(())
    }

    /// Enemy setup: every maximum pinned to `max_count`, then refilled.
    pub fn setup_enemy<H>(&self, holder: &mut H)
    where
        H: LedgerHolder + ?Sized,
    {
        let ledger = holder.ledger_mut();
        ledger.fill_maximum(self.config.max_count);
        ledger.full_recover();
    }

    /// Runs the setup matching the caster's kind.
    pub fn setup(&self, caster: &mut CasterState) -> Result<(), RecomputeError> {
        if caster.is_enemy() {
            self.setup_enemy(caster);
            Ok(())
        } else {
            self.setup_actor(caster)
        }
    }

    pub fn full_recover<H>(&self, holder: &mut H)
    where
        H: LedgerHolder + ?Sized,
    {
        holder.ledger_mut().full_recover();
    }

    /// Usage side of the cost check for `skill`.
    pub fn can_afford<H>(&self, holder: &H, skill: SkillRef) -> Affordability
    where
        H: LedgerHolder + ?Sized,
    {
        match self.classify(skill) {
            None => Affordability::Unmanaged,
            Some(coordinate) if holder.ledger().can_afford(coordinate) => {
                Affordability::Available(coordinate)
            }
            Some(coordinate) => Affordability::Exhausted(coordinate),
        }
    }

    /// Full cost check: the host's own check and the usage check together.
    pub fn can_use<H>(&self, holder: &H, skill: SkillRef, host_ok: bool) -> bool
    where
        H: LedgerHolder + ?Sized,
    {
        self.can_afford(holder, skill).allows(host_ok)
    }

    /// Spends one use of `skill`'s coordinate.
    ///
    /// # Errors
    ///
    /// `InsufficientUses` when the coordinate is already at 0; the ledger is
    /// left unchanged.
    pub fn pay<H>(&self, holder: &mut H, skill: SkillRef) -> Result<Payment, LedgerError>
    where
        H: LedgerHolder + ?Sized,
    {
        let Some(coordinate) = self.classify(skill) else {
            return Ok(Payment::Unmanaged);
        };
        match holder.ledger_mut().pay(coordinate) {
            Ok(remaining) => Ok(Payment::Spent {
                coordinate,
                remaining,
            }),
            Err(err) => {
                tracing::warn!(skill = %skill.id, %coordinate, error = %err, "payment rejected");
                Err(err)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::{ClassRecord, ClassesSnapshot, Env, SkillRecord, SkillsSnapshot};
    use crate::spell::SpellLevel;
    use crate::state::{ActorId, ClassId, SkillTypeId};
    use crate::stats::ParamId;

    fn tables() -> (ClassesSnapshot, SkillsSnapshot) {
        let classes = ClassesSnapshot::new([ClassRecord::new(ClassId(1), "Mage")]);
        let skills = SkillsSnapshot::new(
            [(10, "Spark"), (13, "Frost"), (28, "Meteor"), (32, "Heal")].map(|(id, name)| {
                let stype = if id < 31 { 1 } else { 2 };
                SkillRecord::new(SkillId(id), name, SkillTypeId(stype))
            }),
        );
        (classes, skills)
    }

    fn coord(t: u8, l: u8) -> Coordinate {
        Coordinate::new(SpellType(t), SpellLevel(l))
    }

    fn mage(config: &MagicConfig, skills: &[u32]) -> CasterState {
        CasterState::actor(ActorId(1), "Mage", config)
            .with_class(ClassId(1))
            .with_param(ParamId::MagicAttack, 20)
            .with_skills(skills.iter().copied().map(SkillId))
    }

    #[test]
    fn setup_fills_learned_levels_only() {
        let config = MagicConfig::default();
        let (classes, skills) = tables();
        let engine = MagicEngine::new(&config, Env::with_all(&classes, &skills).into_magic_env());

        let mut caster = mage(&config, &[10, 28]);
        engine.setup_actor(&mut caster).unwrap();

        let ledger = caster.ledger();
        assert_eq!(ledger.maximum(coord(0, 1)), 7);
        assert_eq!(ledger.maximum(coord(0, 2)), 0);
        assert_eq!(ledger.maximum(coord(0, 7)), 3);
        assert_eq!(ledger.maximum(coord(1, 1)), 0);
        assert!(ledger.is_fully_recovered());
    }

    #[test]
    fn level_up_does_not_refill() {
        let config = MagicConfig::default();
        let (classes, skills) = tables();
        let engine = MagicEngine::new(&config, Env::with_all(&classes, &skills).into_magic_env());
        let spark = SkillRef::new(SkillId(10), SkillTypeId(1));

        let mut caster = mage(&config, &[10]);
        engine.setup_actor(&mut caster).unwrap();
        engine.pay(&mut caster, spark).unwrap();
        caster.set_param(ParamId::MagicAttack, 30);
        engine.level_up(&mut caster).unwrap();

        // 30 * 0.28 + 1.6 = 10.0 -> capped at 9
        assert_eq!(caster.ledger().maximum(coord(0, 1)), 9);
        assert_eq!(caster.ledger().current(coord(0, 1)), 6);
    }

    #[test]
    fn forgetting_a_family_zeroes_it() {
        let config = MagicConfig::default();
        let (classes, skills) = tables();
        let engine = MagicEngine::new(&config, Env::with_all(&classes, &skills).into_magic_env());

        let mut caster = mage(&config, &[10]);
        engine.setup_actor(&mut caster).unwrap();
        caster.forget_skill(SkillId(10));
        engine.level_up(&mut caster).unwrap();

        assert!(caster.ledger().row(SpellType(0)).iter().all(|count| count.maximum == 0));
        assert_eq!(caster.ledger().current(coord(0, 1)), 0);
    }

    #[test]
    fn unmanaged_skills_bypass_the_ledger() {
        let config = MagicConfig::default();
        let engine = MagicEngine::new(&config, Env::empty());
        let slash = SkillRef::new(SkillId(1), SkillTypeId(9));

        let mut caster = CasterState::actor(ActorId(1), "Knight", &config);
        assert_eq!(engine.can_afford(&caster, slash), Affordability::Unmanaged);
        assert!(engine.can_use(&caster, slash, true));
        assert!(!engine.can_use(&caster, slash, false));
        assert_eq!(engine.pay(&mut caster, slash), Ok(Payment::Unmanaged));
    }

    #[test]
    fn exhausted_coordinate_blocks_use_even_when_host_allows() {
        let config = MagicConfig::default();
        let engine = MagicEngine::new(&config, Env::empty());
        let spark = SkillRef::new(SkillId(10), SkillTypeId(1));

        let mut caster = CasterState::actor(ActorId(1), "Mage", &config);
        assert_eq!(engine.can_afford(&caster, spark), Affordability::Exhausted(coord(0, 1)));
        assert!(!engine.can_use(&caster, spark, true));
        assert_eq!(
            engine.pay(&mut caster, spark),
            Err(LedgerError::InsufficientUses(coord(0, 1)))
        );
    }

    #[test]
    fn level_zero_is_never_learned() {
        let config = MagicConfig::default();
        let engine = MagicEngine::new(&config, Env::empty());
        let caster = mage(&config, &[10]);

        assert!(engine.is_learned_coordinate(&caster, coord(0, 1)));
        assert!(!engine.is_learned_coordinate(&caster, coord(0, 0)));
    }

    #[test]
    fn enemy_level_up_keeps_every_cell_at_ceiling() {
        let config = MagicConfig::default();
        let (classes, skills) = tables();
        let engine = MagicEngine::new(&config, Env::with_all(&classes, &skills).into_magic_env());

        let mut lich = CasterState::enemy(ActorId(100), "Lich", &config)
            .with_class(ClassId(1))
            .with_param(ParamId::MagicAttack, 10)
            .with_skills([SkillId(10)]);
        engine.setup(&mut lich).unwrap();
        engine.pay(&mut lich, SkillRef::new(SkillId(10), SkillTypeId(1))).unwrap();
        engine.level_up(&mut lich).unwrap();

        assert!(lich.ledger().iter().all(|(_, count)| count.maximum == config.max_count));
        assert_eq!(lich.ledger().current(coord(0, 1)), config.max_count - 1);
        assert_eq!(lich.ledger().current(coord(2, 7)), config.max_count);
    }

    #[test]
    fn missing_class_surfaces_as_recompute_error() {
        let config = MagicConfig::default();
        let (_, skills) = tables();
        let classes = ClassesSnapshot::empty();
        let engine = MagicEngine::new(&config, Env::with_all(&classes, &skills).into_magic_env());

        let mut caster = mage(&config, &[10]);
        let err = engine.setup_actor(&mut caster).unwrap_err();
        assert!(matches!(err, RecomputeError::Aptitude(_)));
    }
}
