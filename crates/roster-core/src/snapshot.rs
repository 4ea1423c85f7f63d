//! The boundary shape of a whole roster.
//!
//! A snapshot is what storage backends persist and what the CLI prints. It
//! carries raw [`PlayerData`] (no `fio`), the set of group ids, and the
//! membership edges in creation order so that per-group ordering survives a
//! round trip.

use serde::{Deserialize, Serialize};

use crate::{
  group::{GroupId, PlayerGroupRecord},
  player::PlayerData,
};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RosterSnapshot {
  pub players: Vec<PlayerData>,
  pub groups:  Vec<GroupId>,
  pub records: Vec<PlayerGroupRecord>,
}

impl RosterSnapshot {
  pub fn is_empty(&self) -> bool {
    self.players.is_empty() && self.groups.is_empty() && self.records.is_empty()
  }

  pub fn to_json(&self) -> serde_json::Result<String> {
    serde_json::to_string_pretty(self)
  }

  pub fn from_json(raw: &str) -> serde_json::Result<Self> {
    serde_json::from_str(raw)
  }
}
