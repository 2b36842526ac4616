//! Batch recovery command.
//!
//! Event scripts restore usage counts with one line:
//!
//! ```text
//! GR_MagicRecover 1     # actor 1
//! GR_MagicRecover All   # every active party member
//! ```
//!
//! Both the command name and the `All` sentinel are case-insensitive.

use core::fmt;
use core::str::FromStr;

use super::RecoverError;
use crate::env::PartyRoster;
use crate::state::{ActorId, LedgerHolder};

/// Who a recover command restores.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RecoverTarget {
    Actor(ActorId),
    /// Every member of the active party.
    Party,
}

impl FromStr for RecoverTarget {
    type Err = RecoverError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.eq_ignore_ascii_case(RecoverCommand::ALL) {
            return Ok(Self::Party);
        }
        s.parse::<u32>()
            .map(|id| Self::Actor(ActorId(id)))
            .map_err(|_| RecoverError::InvalidTarget(s.to_owned()))
    }
}

impl fmt::Display for RecoverTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Actor(id) => write!(f, "{}", id.0),
            Self::Party => f.write_str(RecoverCommand::ALL),
        }
    }
}

/// A parsed `GR_MagicRecover` line.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RecoverCommand {
    pub target: RecoverTarget,
}

impl RecoverCommand {
    pub const NAME: &'static str = "GR_MagicRecover";
    pub const ALL: &'static str = "All";

    pub const fn new(target: RecoverTarget) -> Self {
        Self { target }
    }

    /// Parses a script line.
    ///
    /// Returns `Ok(None)` when the line is some other command, so callers can
    /// chain several parsers. Arguments after the target are ignored.
    pub fn parse(line: &str) -> Result<Option<Self>, RecoverError> {
        let mut words = line.split_whitespace();
        match words.next() {
            Some(name) if name.eq_ignore_ascii_case(Self::NAME) => {}
            _ => return Ok(None),
        }
        let target = words.next().ok_or(RecoverError::MissingTarget)?.parse()?;
        Ok(Some(Self::new(target)))
    }

    /// Fully recovers the targeted characters and returns their ids.
    ///
    /// # Errors
    ///
    /// `ActorNotFound` when a single target is unknown to the roster. Party
    /// members the roster cannot resolve are skipped with a warning.
    pub fn execute<R>(&self, roster: &mut R) -> Result<Vec<ActorId>, RecoverError>
    where
        R: PartyRoster + ?Sized,
    {
        match self.target {
            RecoverTarget::Actor(id) => {
                let actor = roster
                    .actor_mut(id)
                    .ok_or(RecoverError::ActorNotFound(id))?;
                actor.ledger_mut().full_recover();
                tracing::debug!(actor = %id, "recovered usage counts");
                Ok(vec![id])
            }
            RecoverTarget::Party => {
                let mut recovered = Vec::new();
                for id in roster.active_members() {
                    match roster.actor_mut(id) {
                        Some(actor) => {
                            actor.ledger_mut().full_recover();
                            recovered.push(id);
                        }
                        None => tracing::warn!(actor = %id, "party member missing from roster"),
                    }
                }
                tracing::debug!(count = recovered.len(), "recovered party usage counts");
                Ok(recovered)
            }
        }
    }
}

impl fmt::Display for RecoverCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", Self::NAME, self.target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_actor_and_party_targets() {
        assert_eq!(
            RecoverCommand::parse("GR_MagicRecover 1"),
            Ok(Some(RecoverCommand::new(RecoverTarget::Actor(ActorId(1)))))
        );
        assert_eq!(
            RecoverCommand::parse("gr_magicrecover ALL"),
            Ok(Some(RecoverCommand::new(RecoverTarget::Party)))
        );
        assert_eq!(
            RecoverCommand::parse("  GR_MagicRecover   all  extra"),
            Ok(Some(RecoverCommand::new(RecoverTarget::Party)))
        );
    }

    #[test]
    fn ignores_other_commands() {
        assert_eq!(RecoverCommand::parse("ShowPicture 1"), Ok(None));
        assert_eq!(RecoverCommand::parse(""), Ok(None));
    }

    #[test]
    fn rejects_bad_targets() {
        assert_eq!(
            RecoverCommand::parse("GR_MagicRecover"),
            Err(RecoverError::MissingTarget)
        );
        assert_eq!(
            RecoverCommand::parse("GR_MagicRecover everyone"),
            Err(RecoverError::InvalidTarget("everyone".into()))
        );
    }

    #[test]
    fn display_round_trips_through_parse() {
        for command in [
            RecoverCommand::new(RecoverTarget::Actor(ActorId(7))),
            RecoverCommand::new(RecoverTarget::Party),
        ] {
            assert_eq!(RecoverCommand::parse(&command.to_string()), Ok(Some(command)));
        }
    }
}
