//! Read-only views: coordinate table, ledgers, skill menus.

use anyhow::Result;
use clap::Parser;
use magic_client::{ClientConfig, report};
use magic_content::ContentFactory;
use magic_core::{ActorId, SkillId, SkillTypeId};

use super::{load_session, print};

/// Print the skill-id range of every (type, level) coordinate
#[derive(Parser, Debug)]
pub struct Coords {
    /// Only locate this skill id
    #[arg(long)]
    pub skill: Option<u32>,
}

impl Coords {
    pub fn execute(self, config: &ClientConfig) -> Result<()> {
        let magic = ContentFactory::new(&config.content_dir).load_config()?;
        let report = match self.skill {
            Some(id) => report::locate(&magic, SkillId(id)),
            None => report::coordinates(&magic),
        };
        print(config, &report);
        Ok(())
    }
}

/// Print usage counts after setup
#[derive(Parser, Debug)]
pub struct Ledger {
    /// Actor id; every actor when omitted
    pub actor: Option<u32>,
}

impl Ledger {
    pub fn execute(self, config: &ClientConfig) -> Result<()> {
        let session = load_session(config)?;
        match self.actor {
            Some(id) => print(config, &report::ledger(session.actor(ActorId(id))?)),
            None => {
                for caster in session.party().actors() {
                    print(config, &report::ledger(caster));
                }
            }
        }
        Ok(())
    }
}

/// Open a skill category the way the skill screen does
#[derive(Parser, Debug)]
pub struct Menu {
    pub actor: u32,
    /// Skill type id of the category
    pub category: u32,
}

impl Menu {
    pub fn execute(self, config: &ClientConfig) -> Result<()> {
        let session = load_session(config)?;
        let actor = ActorId(self.actor);
        let view = session.menu(actor, SkillTypeId(self.category))?;
        print(config, &report::menu(session.actor(actor)?, &view));
        Ok(())
    }
}
