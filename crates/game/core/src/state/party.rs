//! In-memory actor roster with an active party.

use std::collections::BTreeMap;

use super::{ActorId, CasterState};
use crate::env::PartyRoster;

/// Every known actor plus the ordered list of active party members.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Party {
    actors: BTreeMap<ActorId, CasterState>,
    members: Vec<ActorId>,
}

impl Party {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers an actor without adding it to the active party.
    pub fn insert_actor(&mut self, actor: CasterState) -> Option<CasterState> {
        self.actors.insert(actor.id, actor)
    }

    /// Adds a registered actor to the active party. Unknown or duplicate ids
    /// are ignored and reported as `false`.
    pub fn add_member(&mut self, id: ActorId) -> bool {
        if !self.actors.contains_key(&id) || self.members.contains(&id) {
            return false;
        }
        self.members.push(id);
        true
    }

    pub fn remove_member(&mut self, id: ActorId) -> bool {
        let before = self.members.len();
        self.members.retain(|member| *member != id);
        self.members.len() != before
    }

    pub fn actor(&self, id: ActorId) -> Option<&CasterState> {
        self.actors.get(&id)
    }

    pub fn actors(&self) -> impl Iterator<Item = &CasterState> {
        self.actors.values()
    }

    pub fn actors_mut(&mut self) -> impl Iterator<Item = &mut CasterState> {
        self.actors.values_mut()
    }

    pub fn members(&self) -> &[ActorId] {
        &self.members
    }
}

impl PartyRoster for Party {
    type Member = CasterState;

    fn active_members(&self) -> Vec<ActorId> {
        self.members.clone()
    }

    fn actor_mut(&mut self, id: ActorId) -> Option<&mut CasterState> {
        self.actors.get_mut(&id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MagicConfig;

    #[test]
    fn only_registered_actors_join() {
        let config = MagicConfig::default();
        let mut party = Party::new();
        party.insert_actor(CasterState::actor(ActorId(1), "Aria", &config));

        assert!(party.add_member(ActorId(1)));
        assert!(!party.add_member(ActorId(1)));
        assert!(!party.add_member(ActorId(2)));
        assert_eq!(party.active_members(), vec![ActorId(1)]);
        assert!(party.remove_member(ActorId(1)));
        assert!(party.members().is_empty());
    }
}
