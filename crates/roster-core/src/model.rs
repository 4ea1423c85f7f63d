//! [`RosterModel`] — players, groups and the membership relation between them.
//!
//! Membership is stored as an explicit edge set keyed by
//! [`PlayerGroupRecord`], with two indices kept alongside it:
//!
//! - by group: `seq -> player_id`, where `seq` is a roster-wide counter
//!   assigned when the edge is created, so iteration yields join order;
//! - by player: the set of groups the player belongs to.
//!
//! Every mutating operation validates all of its preconditions before it
//! touches any container, so a failed call leaves the model as it was.

use std::collections::{BTreeMap, BTreeSet, HashMap};

use tracing::debug;

use crate::{
  Error, Result,
  group::{Group, GroupId, PlayerGroupRecord},
  player::{Player, PlayerData, PlayerId},
  snapshot::RosterSnapshot,
};

// ─── Model ───────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default)]
pub struct RosterModel {
  players:       BTreeMap<PlayerId, PlayerData>,
  /// Every known player has an entry, possibly empty.
  player_groups: HashMap<PlayerId, BTreeSet<GroupId>>,
  /// Every known group has an entry, possibly empty.
  group_members: BTreeMap<GroupId, BTreeMap<u64, PlayerId>>,
  edges:         HashMap<PlayerGroupRecord, u64>,
  next_seq:      u64,
}

impl RosterModel {
  pub fn new() -> Self { Self::default() }

  // ── Players ───────────────────────────────────────────────────────────

  /// Register a new player and return it with `fio` computed.
  pub fn add_player(&mut self, data: PlayerData) -> Result<Player> {
    if self.players.contains_key(&data.id) {
      return Err(Error::DuplicatePlayer(data.id));
    }
    data.validate()?;

    debug!(player_id = data.id, "adding player");
    self.player_groups.insert(data.id, BTreeSet::new());
    self.players.insert(data.id, data.clone());
    Ok(data.into())
  }

  /// Replace the name fields and birthday of an existing player. The id is
  /// the lookup key and never changes.
  pub fn update_player(&mut self, data: PlayerData) -> Result<Player> {
    data.validate()?;
    let slot = self
      .players
      .get_mut(&data.id)
      .ok_or(Error::PlayerNotFound(data.id))?;

    debug!(player_id = data.id, "updating player");
    *slot = data.clone();
    Ok(data.into())
  }

  /// Remove a player together with every membership edge that references it.
  pub fn remove_player(&mut self, player_id: PlayerId) -> Result<Player> {
    let data = self
      .players
      .remove(&player_id)
      .ok_or(Error::PlayerNotFound(player_id))?;
    let groups = self.player_groups.remove(&player_id).unwrap_or_default();

    for group_id in &groups {
      let record = PlayerGroupRecord::new(player_id, *group_id);
      if let Some(seq) = self.edges.remove(&record)
        && let Some(members) = self.group_members.get_mut(group_id)
      {
        members.remove(&seq);
      }
    }

    debug!(player_id, cascaded = groups.len(), "removed player");
    Ok(data.into())
  }

  pub fn player(&self, player_id: PlayerId) -> Result<Player> {
    self
      .players
      .get(&player_id)
      .cloned()
      .map(Player::from)
      .ok_or(Error::PlayerNotFound(player_id))
  }

  /// All players, ordered by id.
  pub fn players(&self) -> Vec<Player> {
    self.players.values().cloned().map(Player::from).collect()
  }

  pub fn contains_player(&self, player_id: PlayerId) -> bool {
    self.players.contains_key(&player_id)
  }

  // ── Groups ────────────────────────────────────────────────────────────

  /// Create an empty group.
  pub fn add_group(&mut self, group_id: GroupId) -> Result<Group> {
    if self.group_members.contains_key(&group_id) {
      return Err(Error::DuplicateGroup(group_id));
    }

    debug!(group_id, "adding group");
    self.group_members.insert(group_id, BTreeMap::new());
    Ok(Group { group_id, players: Vec::new() })
  }

  /// Remove a group together with every membership edge that references it.
  /// Member players stay in the roster.
  pub fn remove_group(&mut self, group_id: GroupId) -> Result<Group> {
    let group = self.group(group_id)?;
    let members = self.group_members.remove(&group_id).unwrap_or_default();

    for player_id in members.values() {
      self.edges.remove(&PlayerGroupRecord::new(*player_id, group_id));
      if let Some(groups) = self.player_groups.get_mut(player_id) {
        groups.remove(&group_id);
      }
    }

    debug!(group_id, cascaded = members.len(), "removed group");
    Ok(group)
  }

  /// Materialise a group with its members in join order.
  pub fn group(&self, group_id: GroupId) -> Result<Group> {
    Ok(Group { group_id, players: self.players_in_group(group_id)? })
  }

  /// All group ids, ascending.
  pub fn group_ids(&self) -> Vec<GroupId> {
    self.group_members.keys().copied().collect()
  }

  /// All groups, materialised, ordered by id.
  pub fn groups(&self) -> Vec<Group> {
    self
      .group_members
      .keys()
      .map(|&group_id| Group { group_id, players: self.members_of(group_id) })
      .collect()
  }

  pub fn contains_group(&self, group_id: GroupId) -> bool {
    self.group_members.contains_key(&group_id)
  }

  // ── Memberships ───────────────────────────────────────────────────────

  /// Add `player_id` to the end of `group_id`'s member list.
  pub fn add_membership(
    &mut self,
    player_id: PlayerId,
    group_id: GroupId,
  ) -> Result<PlayerGroupRecord> {
    if !self.players.contains_key(&player_id) {
      return Err(Error::PlayerNotFound(player_id));
    }
    if !self.group_members.contains_key(&group_id) {
      return Err(Error::GroupNotFound(group_id));
    }
    let record = PlayerGroupRecord::new(player_id, group_id);
    if self.edges.contains_key(&record) {
      return Err(Error::DuplicateMembership { player_id, group_id });
    }

    let seq = self.next_seq;
    self.next_seq += 1;

    self.edges.insert(record, seq);
    self
      .group_members
      .entry(group_id)
      .or_default()
      .insert(seq, player_id);
    self.player_groups.entry(player_id).or_default().insert(group_id);

    debug!(player_id, group_id, seq, "added membership");
    Ok(record)
  }

  pub fn remove_membership(
    &mut self,
    player_id: PlayerId,
    group_id: GroupId,
  ) -> Result<()> {
    let record = PlayerGroupRecord::new(player_id, group_id);
    let seq = self
      .edges
      .remove(&record)
      .ok_or(Error::MembershipNotFound { player_id, group_id })?;

    if let Some(members) = self.group_members.get_mut(&group_id) {
      members.remove(&seq);
    }
    if let Some(groups) = self.player_groups.get_mut(&player_id) {
      groups.remove(&group_id);
    }

    debug!(player_id, group_id, "removed membership");
    Ok(())
  }

  /// Members of `group_id`, in the order they joined.
  pub fn players_in_group(&self, group_id: GroupId) -> Result<Vec<Player>> {
    if !self.group_members.contains_key(&group_id) {
      return Err(Error::GroupNotFound(group_id));
    }
    Ok(self.members_of(group_id))
  }

  pub fn groups_for_player(
    &self,
    player_id: PlayerId,
  ) -> Result<BTreeSet<GroupId>> {
    self
      .player_groups
      .get(&player_id)
      .cloned()
      .ok_or(Error::PlayerNotFound(player_id))
  }

  pub fn contains_membership(
    &self,
    player_id: PlayerId,
    group_id: GroupId,
  ) -> bool {
    self.edges.contains_key(&PlayerGroupRecord::new(player_id, group_id))
  }

  pub fn membership_count(&self) -> usize { self.edges.len() }

  /// Every membership edge, in the order the edges were created.
  pub fn records(&self) -> Vec<PlayerGroupRecord> {
    let mut ordered: Vec<(u64, PlayerGroupRecord)> = self
      .edges
      .iter()
      .map(|(record, seq)| (*seq, *record))
      .collect();
    ordered.sort_unstable_by_key(|(seq, _)| *seq);
    ordered.into_iter().map(|(_, record)| record).collect()
  }

  // ── Snapshots ─────────────────────────────────────────────────────────

  pub fn snapshot(&self) -> RosterSnapshot {
    RosterSnapshot {
      players: self.players.values().cloned().collect(),
      groups:  self.group_ids(),
      records: self.records(),
    }
  }

  /// Rebuild a model by replaying a snapshot through the normal operations,
  /// so every invariant is checked again on the way in.
  pub fn from_snapshot(snapshot: RosterSnapshot) -> Result<Self> {
    let mut model = Self::new();
    for data in snapshot.players {
      model.add_player(data)?;
    }
    for group_id in snapshot.groups {
      model.add_group(group_id)?;
    }
    for record in snapshot.records {
      model.add_membership(record.player_id, record.group_id)?;
    }
    Ok(model)
  }

  // ── Internals ─────────────────────────────────────────────────────────

  fn members_of(&self, group_id: GroupId) -> Vec<Player> {
    self
      .group_members
      .get(&group_id)
      .into_iter()
      .flat_map(BTreeMap::values)
      .filter_map(|player_id| self.players.get(player_id))
      .cloned()
      .map(Player::from)
      .collect()
  }
}
