//! Loaded content plus live character state.
//!
//! A session owns the configuration, the database oracles and the roster.
//! Every actor is set up on load (formula maximums, full counts) and enemies
//! are pinned to the ceiling, so commands start from the state a host would
//! have right after creating its characters.

use anyhow::{Context, Result, bail};
use magic_content::{ContentFactory, Database};
use magic_core::{
    ActorId, CasterState, Env, LearnableSkillHolder, LevelRow, MagicConfig, MagicEngine, MagicEnv,
    ParamId, Party, PartyRoster, Payment, RecoverCommand, SelectionContext, SelectionMachine,
    SkillId, SkillRef, SkillTypeId,
};

/// Result of one cast attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CastOutcome {
    /// Cost paid; `Payment::Unmanaged` when the skill is outside the system.
    Paid(Payment),
    /// The usage check refused the cast; nothing was spent.
    Refused,
}

/// Menu view of one category for one actor.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MenuView {
    pub row: Option<LevelRow>,
    pub skills: Vec<SkillId>,
}

pub struct Session {
    config: MagicConfig,
    database: Database,
    party: Party,
}

impl Session {
    /// Loads every content file and sets up all actors.
    pub fn load(factory: &ContentFactory) -> Result<Self> {
        let config = factory.load_config()?;
        let database = factory.load_database()?;
        let party = factory.load_party(&config)?;
        Self::new(config, database, party)
    }

    pub fn new(config: MagicConfig, database: Database, party: Party) -> Result<Self> {
        let mut session = Self {
            config,
            database,
            party,
        };
        session.setup_all()?;
        Ok(session)
    }

    pub fn config(&self) -> &MagicConfig {
        &self.config
    }

    pub fn database(&self) -> &Database {
        &self.database
    }

    pub fn party(&self) -> &Party {
        &self.party
    }

    pub fn actor(&self, id: ActorId) -> Result<&CasterState> {
        self.party
            .actor(id)
            .with_context(|| format!("{id} is not in the roster"))
    }

    /// Skill reference with the type its database record declares.
    pub fn skill_ref(&self, id: SkillId) -> Result<SkillRef> {
        self.database
            .skills
            .skills
            .get(&id)
            .map(|record| record.key())
            .with_context(|| format!("{id} is not in the database"))
    }

    /// Casts `skill` once. `host_ok` stands in for the host's MP/TP check.
    pub fn cast(&mut self, actor: ActorId, skill: SkillId, host_ok: bool) -> Result<CastOutcome> {
        let skill = self.skill_ref(skill)?;
        let engine = MagicEngine::new(&self.config, magic_env(&self.database));
        let caster = self
            .party
            .actor_mut(actor)
            .with_context(|| format!("{actor} is not in the roster"))?;
        if !caster.learned_skills().contains(&skill.id) {
            bail!("{actor} does not know {}", skill.id);
        }

        if !engine.can_use(caster, skill, host_ok) {
            tracing::info!(%actor, skill = %skill.id, "cast refused");
            return Ok(CastOutcome::Refused);
        }
        let payment = engine.pay(caster, skill)?;
        Ok(CastOutcome::Paid(payment))
    }

    /// Raises the actor's level by one and its formula stat by `stat_gain`,
    /// then recomputes maximums.
    pub fn level_up(&mut self, actor: ActorId, stat_gain: i32) -> Result<()> {
        let engine = MagicEngine::new(&self.config, magic_env(&self.database));
        let stat: ParamId = self.config.base_stat_id;
        let caster = self
            .party
            .actor_mut(actor)
            .with_context(|| format!("{actor} is not in the roster"))?;

        caster.level += 1;
        let value = caster.base_params[stat.index()].saturating_add(stat_gain);
        caster.set_param(stat, value);
        engine
            .level_up(caster)
            .with_context(|| format!("recomputing {actor} after level up"))?;
        tracing::info!(%actor, level = caster.level, %stat, value, "level up");
        Ok(())
    }

    pub fn recover(&mut self, command: &RecoverCommand) -> Result<Vec<ActorId>> {
        let recovered = command.execute(&mut self.party)?;
        Ok(recovered)
    }

    /// Opens `category` in a menu selection machine for `actor`.
    pub fn menu(&self, actor: ActorId, category: SkillTypeId) -> Result<MenuView> {
        let caster = self.actor(actor)?;
        let mut machine = SelectionMachine::new(&self.config, SelectionContext::Menu);
        machine.set_actor(actor);
        machine.on_select_category(caster, category);
        Ok(MenuView {
            row: machine.level_row(caster),
            skills: machine.visible_skills(caster, &self.database.skills),
        })
    }

    fn setup_all(&mut self) -> Result<()> {
        let engine = MagicEngine::new(&self.config, magic_env(&self.database));
        for caster in self.party.actors_mut() {
            engine
                .setup(caster)
                .with_context(|| format!("setting up {} ({})", caster.name, caster.id))?;
        }
        tracing::debug!(actors = self.party.actors().count(), "session ready");
        Ok(())
    }
}

fn magic_env(database: &Database) -> MagicEnv<'_> {
    Env::with_all(&database.classes, &database.skills).into_magic_env()
}
