//! Commands that change usage counts on a freshly loaded session.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use magic_client::{ClientConfig, Step, script};
use magic_core::{ActorId, RecoverCommand, RecoverTarget, SkillId};

use super::{load_session, print};

/// Cast a skill one or more times
#[derive(Parser, Debug)]
pub struct Cast {
    pub actor: u32,
    pub skill: u32,

    /// Number of casts
    #[arg(short = 'n', long, default_value_t = 1)]
    pub times: u32,
}

impl Cast {
    pub fn execute(self, config: &ClientConfig) -> Result<()> {
        let step = Step::Cast {
            actor: ActorId(self.actor),
            skill: SkillId(self.skill),
            times: self.times,
        };
        run_one(config, step)
    }
}

/// Gain one level and recompute maximums without refilling
#[derive(Parser, Debug)]
pub struct LevelUp {
    pub actor: u32,

    /// Points added to the formula stat
    #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
    pub stat_gain: i32,
}

impl LevelUp {
    pub fn execute(self, config: &ClientConfig) -> Result<()> {
        let step = Step::LevelUp {
            actor: ActorId(self.actor),
            stat_gain: self.stat_gain,
        };
        run_one(config, step)
    }
}

/// Restore usage counts of one actor or the whole party
#[derive(Parser, Debug)]
pub struct Recover {
    /// Actor id or `All`
    pub target: RecoverTarget,
}

impl Recover {
    pub fn execute(self, config: &ClientConfig) -> Result<()> {
        run_one(config, Step::Recover(RecoverCommand::new(self.target)))
    }
}

/// Run a script file against a fresh session
#[derive(Parser, Debug)]
pub struct Script {
    pub path: PathBuf,
}

impl Script {
    pub fn execute(self, config: &ClientConfig) -> Result<()> {
        let source = fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read {}", self.path.display()))?;
        let steps = script::parse(&source)
            .with_context(|| format!("Failed to parse {}", self.path.display()))?;

        let mut session = load_session(config)?;
        tracing::info!(steps = steps.len(), path = %self.path.display(), "running script");
        for report in script::run(&mut session, &steps)? {
            print(config, &report);
        }
        Ok(())
    }
}

fn run_one(config: &ClientConfig, step: Step) -> Result<()> {
    let mut session = load_session(config)?;
    let report = step.run(&mut session)?;
    print(config, &report);
    Ok(())
}
