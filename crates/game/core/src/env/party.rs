//! Party roster access for batch commands.

use crate::state::{ActorId, LedgerHolder};

/// Host roster consulted by the recover command.
///
/// Unlike the other oracles this one hands out mutable characters, so it is
/// passed by `&mut` and never stored in the environment.
pub trait PartyRoster {
    type Member: LedgerHolder;

    /// Ids of every character currently in the active party, in order.
    fn active_members(&self) -> Vec<ActorId>;

    /// Any known actor, whether or not it is in the active party.
    fn actor_mut(&mut self, id: ActorId) -> Option<&mut Self::Member>;
}
