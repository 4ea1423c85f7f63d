//! Encoding and decoding helpers between roster types and SQLite columns.
//!
//! Ids are stored as `INTEGER` (signed 64-bit). Birthdays are stored as
//! `YYYY-MM-DD` text.

use chrono::NaiveDate;
use roster_core::{GroupId, PlayerData, PlayerGroupRecord, PlayerId};

use crate::{Error, Result};

const DATE_FORMAT: &str = "%Y-%m-%d";

// ─── Ids ─────────────────────────────────────────────────────────────────────

pub fn encode_id(id: u64) -> Result<i64> {
  i64::try_from(id).map_err(|_| Error::IdOutOfRange(id))
}

pub fn decode_id(raw: i64) -> Result<u64> {
  u64::try_from(raw).map_err(|_| Error::NegativeId(raw))
}

// ─── NaiveDate ───────────────────────────────────────────────────────────────

pub fn encode_date(d: NaiveDate) -> String { d.format(DATE_FORMAT).to_string() }

pub fn decode_date(s: &str) -> Result<NaiveDate> {
  NaiveDate::parse_from_str(s, DATE_FORMAT)
    .map_err(|e| Error::DateParse(format!("{s:?}: {e}")))
}

// ─── Row types ───────────────────────────────────────────────────────────────

/// Raw values read directly from a `players` row.
pub struct RawPlayer {
  pub id:       i64,
  pub name:     String,
  pub surname:  String,
  pub birthday: String,
}

impl RawPlayer {
  pub fn into_player_data(self) -> Result<PlayerData> {
    let id: PlayerId = decode_id(self.id)?;
    Ok(PlayerData::new(
      id,
      self.name,
      self.surname,
      decode_date(&self.birthday)?,
    ))
  }
}

/// Raw values read directly from a `memberships` row, already ordered by
/// `seq`.
pub struct RawMembership {
  pub player_id: i64,
  pub group_id:  i64,
}

impl RawMembership {
  pub fn into_record(self) -> Result<PlayerGroupRecord> {
    let group_id: GroupId = decode_id(self.group_id)?;
    Ok(PlayerGroupRecord::new(decode_id(self.player_id)?, group_id))
  }
}

/// Player row ready for insertion.
pub struct EncodedPlayer {
  pub id:       i64,
  pub name:     String,
  pub surname:  String,
  pub birthday: String,
}

impl EncodedPlayer {
  pub fn encode(data: &PlayerData) -> Result<Self> {
    Ok(Self {
      id:       encode_id(data.id)?,
      name:     data.name.clone(),
      surname:  data.surname.clone(),
      birthday: encode_date(data.birthday),
    })
  }
}
