//! Groups and the membership edge that links them to players.

use serde::{Deserialize, Serialize};

use crate::player::{Player, PlayerId};

/// Unique, caller-assigned group identifier.
pub type GroupId = u64;

/// A group together with its members, in the order they joined.
///
/// This is a materialised view. The roster stores membership as edges and
/// builds a `Group` on read, so the `players` list is never edited directly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Group {
  pub group_id: GroupId,
  pub players:  Vec<Player>,
}

impl Group {
  pub fn player_ids(&self) -> impl Iterator<Item = PlayerId> + '_ {
    self.players.iter().map(Player::id)
  }
}

/// One membership edge: `player_id` belongs to `group_id`.
#[derive(
  Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct PlayerGroupRecord {
  pub player_id: PlayerId,
  pub group_id:  GroupId,
}

impl PlayerGroupRecord {
  pub fn new(player_id: PlayerId, group_id: GroupId) -> Self {
    Self { player_id, group_id }
  }
}
