//! Error types for `roster-core`.

use thiserror::Error;

use crate::{group::GroupId, player::PlayerId};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
  #[error("player {0} already exists")]
  DuplicatePlayer(PlayerId),

  #[error("group {0} already exists")]
  DuplicateGroup(GroupId),

  #[error("player {player_id} is already a member of group {group_id}")]
  DuplicateMembership {
    player_id: PlayerId,
    group_id:  GroupId,
  },

  #[error("player not found: {0}")]
  PlayerNotFound(PlayerId),

  #[error("group not found: {0}")]
  GroupNotFound(GroupId),

  #[error("player {player_id} is not a member of group {group_id}")]
  MembershipNotFound {
    player_id: PlayerId,
    group_id:  GroupId,
  },

  /// `name` or `surname` was empty (or whitespace only).
  #[error("invalid player {id}: {field} must not be empty")]
  InvalidPlayer { id: PlayerId, field: &'static str },
}

impl Error {
  /// A referenced player, group or membership edge does not exist.
  pub fn is_not_found(&self) -> bool {
    matches!(
      self,
      Self::PlayerNotFound(_)
        | Self::GroupNotFound(_)
        | Self::MembershipNotFound { .. }
    )
  }

  /// An id or membership edge is already registered.
  pub fn is_duplicate(&self) -> bool {
    matches!(
      self,
      Self::DuplicatePlayer(_)
        | Self::DuplicateGroup(_)
        | Self::DuplicateMembership { .. }
    )
  }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
