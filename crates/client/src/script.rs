//! Line-based event scripts.
//!
//! ```text
//! # comments and blank lines are skipped
//! cast 1 10 3          # actor 1 casts skill 10 three times
//! level-up 1 5         # actor 1 gains a level and 5 points of the formula stat
//! ledger 1
//! menu 1 2             # open skill type 2 for actor 1
//! GR_MagicRecover All
//! ```

use anyhow::{Context, Result, bail};
use magic_core::{ActorId, RecoverCommand, SkillId, SkillTypeId};

use crate::report::{self, Report};
use crate::session::Session;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Step {
    Cast {
        actor: ActorId,
        skill: SkillId,
        times: u32,
    },
    LevelUp {
        actor: ActorId,
        stat_gain: i32,
    },
    Ledger(ActorId),
    Menu {
        actor: ActorId,
        category: SkillTypeId,
    },
    Recover(RecoverCommand),
}

impl Step {
    /// Parses one line. Blank lines and comments yield `None`.
    pub fn parse(line: &str) -> Result<Option<Self>> {
        let line = line.split_once('#').map_or(line, |(code, _)| code).trim();
        if line.is_empty() {
            return Ok(None);
        }
        if let Some(command) = RecoverCommand::parse(line)? {
            return Ok(Some(Self::Recover(command)));
        }

        let mut words = line.split_whitespace();
        let verb = words.next().unwrap_or_default();
        let args: Vec<&str> = words.collect();
        let step = match (verb, args.as_slice()) {
            ("cast", [actor, skill, rest @ ..]) => Self::Cast {
                actor: ActorId(number(actor)?),
                skill: SkillId(number(skill)?),
                times: optional(rest, 1)?,
            },
            ("level-up", [actor, rest @ ..]) => Self::LevelUp {
                actor: ActorId(number(actor)?),
                stat_gain: optional(rest, 0)?,
            },
            ("ledger", [actor]) => Self::Ledger(ActorId(number(actor)?)),
            ("menu", [actor, category]) => Self::Menu {
                actor: ActorId(number(actor)?),
                category: SkillTypeId(number(category)?),
            },
            _ => bail!("unrecognized step `{line}`"),
        };
        Ok(Some(step))
    }

    /// Applies the step and renders what it changed.
    pub fn run(&self, session: &mut Session) -> Result<Report> {
        match *self {
            Self::Cast {
                actor,
                skill,
                times,
            } => {
                let outcomes = (0..times)
                    .map(|_| session.cast(actor, skill, true))
                    .collect::<Result<Vec<_>>>()?;
                Ok(report::cast(session.actor(actor)?, skill, &outcomes))
            }
            Self::LevelUp { actor, stat_gain } => {
                session.level_up(actor, stat_gain)?;
                Ok(report::ledger(session.actor(actor)?))
            }
            Self::Ledger(actor) => Ok(report::ledger(session.actor(actor)?)),
            Self::Menu { actor, category } => {
                let view = session.menu(actor, category)?;
                Ok(report::menu(session.actor(actor)?, &view))
            }
            Self::Recover(command) => {
                let ids = session.recover(&command)?;
                let actors = ids
                    .into_iter()
                    .map(|id| session.actor(id))
                    .collect::<Result<Vec<_>>>()?;
                Ok(report::recovered(&actors))
            }
        }
    }
}

/// Parses a whole script, reporting the first bad line by number.
pub fn parse(source: &str) -> Result<Vec<Step>> {
    let mut steps = Vec::new();
    for (index, line) in source.lines().enumerate() {
        let step = Step::parse(line).with_context(|| format!("line {}", index + 1))?;
        steps.extend(step);
    }
    Ok(steps)
}

/// Runs every step in order.
pub fn run(session: &mut Session, steps: &[Step]) -> Result<Vec<Report>> {
    steps
        .iter()
        .enumerate()
        .map(|(index, step)| {
            tracing::debug!(step = index + 1, ?step, "running script step");
            step.run(session)
                .with_context(|| format!("step {} ({step:?})", index + 1))
        })
        .collect()
}

fn number<T: std::str::FromStr>(word: &str) -> Result<T> {
    word.parse()
        .map_err(|_| anyhow::anyhow!("`{word}` is not a number"))
}

fn optional<T: std::str::FromStr>(rest: &[&str], default: T) -> Result<T> {
    match rest {
        [] => Ok(default),
        [word] => number(word),
        _ => bail!("too many arguments"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use magic_core::RecoverTarget;

    #[test]
    fn parses_every_verb() {
        let steps = parse(
            "# setup\n\
             cast 1 10 3\n\
             cast 2 13\n\
             level-up 1 5   # trailing comment\n\
             ledger 1\n\
             \n\
             menu 1 2\n\
             gr_magicrecover all\n",
        )
        .unwrap();

        assert_eq!(
            steps,
            [
                Step::Cast {
                    actor: ActorId(1),
                    skill: SkillId(10),
                    times: 3,
                },
                Step::Cast {
                    actor: ActorId(2),
                    skill: SkillId(13),
                    times: 1,
                },
                Step::LevelUp {
                    actor: ActorId(1),
                    stat_gain: 5,
                },
                Step::Ledger(ActorId(1)),
                Step::Menu {
                    actor: ActorId(1),
                    category: SkillTypeId(2),
                },
                Step::Recover(RecoverCommand::new(RecoverTarget::Party)),
            ]
        );
    }

    #[test]
    fn bad_lines_report_their_number() {
        let err = parse("ledger 1\ncast one 10").unwrap_err();
        assert_eq!(err.to_string(), "line 2");
        assert!(format!("{err:#}").contains("`one` is not a number"));

        assert!(parse("GR_MagicRecover").is_err());
        assert!(parse("ledger 1 2").is_err());
        assert!(parse("teleport 1").is_err());
    }
}
