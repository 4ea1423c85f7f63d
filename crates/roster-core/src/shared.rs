//! [`SharedRoster`] — a cloneable, thread-safe handle to one [`RosterModel`].
//!
//! A single mutex covers the whole model. Each method holds it for the full
//! read-modify-write of the underlying operation, which is what keeps the
//! edge set and both indices consistent for concurrent callers.

use std::{
  collections::BTreeSet,
  sync::{Arc, Mutex, MutexGuard, PoisonError},
};

use crate::{
  Result,
  group::{Group, GroupId, PlayerGroupRecord},
  model::RosterModel,
  player::{Player, PlayerData, PlayerId},
  snapshot::RosterSnapshot,
};

/// Cloning is cheap — the inner model is reference-counted.
#[derive(Debug, Clone, Default)]
pub struct SharedRoster {
  inner: Arc<Mutex<RosterModel>>,
}

impl SharedRoster {
  pub fn new(model: RosterModel) -> Self {
    Self { inner: Arc::new(Mutex::new(model)) }
  }

  /// Run `f` with exclusive access to the model.
  pub fn with<R>(&self, f: impl FnOnce(&mut RosterModel) -> R) -> R {
    f(&mut self.lock())
  }

  // Model operations never leave partial state behind, so a guard poisoned
  // by a panicking caller still holds a consistent model.
  fn lock(&self) -> MutexGuard<'_, RosterModel> {
    self.inner.lock().unwrap_or_else(PoisonError::into_inner)
  }

  pub fn add_player(&self, data: PlayerData) -> Result<Player> {
    self.lock().add_player(data)
  }

  pub fn update_player(&self, data: PlayerData) -> Result<Player> {
    self.lock().update_player(data)
  }

  pub fn remove_player(&self, player_id: PlayerId) -> Result<Player> {
    self.lock().remove_player(player_id)
  }

  pub fn add_group(&self, group_id: GroupId) -> Result<Group> {
    self.lock().add_group(group_id)
  }

  pub fn remove_group(&self, group_id: GroupId) -> Result<Group> {
    self.lock().remove_group(group_id)
  }

  pub fn add_membership(
    &self,
    player_id: PlayerId,
    group_id: GroupId,
  ) -> Result<PlayerGroupRecord> {
    self.lock().add_membership(player_id, group_id)
  }

  pub fn remove_membership(
    &self,
    player_id: PlayerId,
    group_id: GroupId,
  ) -> Result<()> {
    self.lock().remove_membership(player_id, group_id)
  }

  pub fn players_in_group(&self, group_id: GroupId) -> Result<Vec<Player>> {
    self.lock().players_in_group(group_id)
  }

  pub fn groups_for_player(
    &self,
    player_id: PlayerId,
  ) -> Result<BTreeSet<GroupId>> {
    self.lock().groups_for_player(player_id)
  }

  pub fn snapshot(&self) -> RosterSnapshot { self.lock().snapshot() }
}
