//! Player identity records and the derived display name.
//!
//! [`PlayerData`] is what callers supply and what storage persists.
//! [`Player`] is the read model handed back by the roster: the same record
//! plus `fio`, which is computed on every access and never stored.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Unique, caller-assigned player identifier.
pub type PlayerId = u64;

// ─── PlayerData ──────────────────────────────────────────────────────────────

/// Raw identity record for a player.
///
/// `birthday` serialises as an ISO-8601 calendar date (`YYYY-MM-DD`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerData {
  pub id:       PlayerId,
  pub name:     String,
  pub surname:  String,
  pub birthday: NaiveDate,
}

impl PlayerData {
  pub fn new(
    id: PlayerId,
    name: impl Into<String>,
    surname: impl Into<String>,
    birthday: NaiveDate,
  ) -> Self {
    Self { id, name: name.into(), surname: surname.into(), birthday }
  }

  /// Reject records whose name parts are blank.
  pub fn validate(&self) -> Result<()> {
    if self.name.trim().is_empty() {
      return Err(Error::InvalidPlayer { id: self.id, field: "name" });
    }
    if self.surname.trim().is_empty() {
      return Err(Error::InvalidPlayer { id: self.id, field: "surname" });
    }
    Ok(())
  }

  /// Full display name: surname, a single space, then the given name.
  pub fn fio(&self) -> String { format!("{} {}", self.surname, self.name) }
}

// ─── Player ──────────────────────────────────────────────────────────────────

/// A player as exposed by the roster.
///
/// On the wire this is `PlayerData` plus a `fio` field. An incoming `fio` is
/// ignored; the value is always rebuilt from `name` and `surname`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "PlayerWire", from = "PlayerWire")]
pub struct Player {
  data: PlayerData,
}

impl Player {
  pub fn id(&self) -> PlayerId { self.data.id }

  pub fn name(&self) -> &str { &self.data.name }

  pub fn surname(&self) -> &str { &self.data.surname }

  pub fn birthday(&self) -> NaiveDate { self.data.birthday }

  pub fn fio(&self) -> String { self.data.fio() }

  pub fn data(&self) -> &PlayerData { &self.data }
}

impl From<PlayerData> for Player {
  fn from(data: PlayerData) -> Self { Self { data } }
}

/// Serialised form of [`Player`].
#[derive(Serialize, Deserialize)]
struct PlayerWire {
  id:       PlayerId,
  name:     String,
  surname:  String,
  birthday: NaiveDate,
  #[serde(default, skip_deserializing)]
  fio:      String,
}

impl From<Player> for PlayerWire {
  fn from(player: Player) -> Self {
    let fio = player.fio();
    let PlayerData { id, name, surname, birthday } = player.data;
    Self { id, name, surname, birthday, fio }
  }
}

impl From<PlayerWire> for Player {
  fn from(wire: PlayerWire) -> Self {
    PlayerData::new(wire.id, wire.name, wire.surname, wire.birthday).into()
  }
}
