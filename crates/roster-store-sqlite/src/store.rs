//! [`SqliteStore`] — the SQLite implementation of [`RosterStore`].

use std::path::Path;

use roster_core::{RosterSnapshot, store::RosterStore};
use tracing::debug;

use crate::{
  Result,
  encode::{EncodedPlayer, RawMembership, RawPlayer, decode_id, encode_id},
  schema::SCHEMA,
};

// ─── Store ───────────────────────────────────────────────────────────────────

/// A roster store backed by a single SQLite file.
///
/// Cloning is cheap — the inner connection is reference-counted.
#[derive(Clone)]
pub struct SqliteStore {
  conn: tokio_rusqlite::Connection,
}

impl SqliteStore {
  /// Open (or create) a store at `path` and run schema initialisation.
  pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open(path).await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  /// Open an in-memory store — useful for testing.
  pub async fn open_in_memory() -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open_in_memory().await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  async fn init_schema(&self) -> Result<()> {
    self
      .conn
      .call(|conn| {
        conn.execute_batch(SCHEMA)?;
        Ok(())
      })
      .await?;
    Ok(())
  }

  #[cfg(test)]
  pub(crate) fn conn_for_tests(&self) -> &tokio_rusqlite::Connection {
    &self.conn
  }
}

// ─── RosterStore impl ────────────────────────────────────────────────────────

impl RosterStore for SqliteStore {
  type Error = crate::Error;

  async fn load(&self) -> Result<RosterSnapshot> {
    let (raw_players, raw_groups, raw_memberships) = self
      .conn
      .call(|conn| {
        let players = conn
          .prepare("SELECT id, name, surname, birthday FROM players ORDER BY id")?
          .query_map([], |row| {
            Ok(RawPlayer {
              id:       row.get(0)?,
              name:     row.get(1)?,
              surname:  row.get(2)?,
              birthday: row.get(3)?,
            })
          })?
          .collect::<rusqlite::Result<Vec<_>>>()?;

        let groups = conn
          .prepare("SELECT group_id FROM groups ORDER BY group_id")?
          .query_map([], |row| row.get::<_, i64>(0))?
          .collect::<rusqlite::Result<Vec<_>>>()?;

        let memberships = conn
          .prepare("SELECT player_id, group_id FROM memberships ORDER BY seq")?
          .query_map([], |row| {
            Ok(RawMembership { player_id: row.get(0)?, group_id: row.get(1)? })
          })?
          .collect::<rusqlite::Result<Vec<_>>>()?;

        Ok((players, groups, memberships))
      })
      .await?;

    let snapshot = RosterSnapshot {
      players: raw_players
        .into_iter()
        .map(RawPlayer::into_player_data)
        .collect::<Result<_>>()?,
      groups:  raw_groups.into_iter().map(decode_id).collect::<Result<_>>()?,
      records: raw_memberships
        .into_iter()
        .map(RawMembership::into_record)
        .collect::<Result<_>>()?,
    };

    debug!(
      players = snapshot.players.len(),
      groups = snapshot.groups.len(),
      memberships = snapshot.records.len(),
      "loaded roster"
    );
    Ok(snapshot)
  }

  async fn save(&self, snapshot: &RosterSnapshot) -> Result<()> {
    // Encode up front so range errors surface before the transaction opens.
    let players = snapshot
      .players
      .iter()
      .map(EncodedPlayer::encode)
      .collect::<Result<Vec<_>>>()?;
    let groups = snapshot
      .groups
      .iter()
      .map(|g| encode_id(*g))
      .collect::<Result<Vec<_>>>()?;
    let memberships = snapshot
      .records
      .iter()
      .map(|r| Ok((encode_id(r.player_id)?, encode_id(r.group_id)?)))
      .collect::<Result<Vec<(i64, i64)>>>()?;

    let counts = (players.len(), groups.len(), memberships.len());

    self
      .conn
      .call(move |conn| {
        let tx = conn.transaction()?;
        tx.execute_batch(
          "DELETE FROM memberships; DELETE FROM players; DELETE FROM groups;",
        )?;

        {
          let mut stmt = tx.prepare(
            "INSERT INTO players (id, name, surname, birthday) VALUES (?1, ?2, ?3, ?4)",
          )?;
          for p in &players {
            stmt.execute(rusqlite::params![p.id, p.name, p.surname, p.birthday])?;
          }

          let mut stmt = tx.prepare("INSERT INTO groups (group_id) VALUES (?1)")?;
          for g in &groups {
            stmt.execute(rusqlite::params![g])?;
          }

          let mut stmt = tx.prepare(
            "INSERT INTO memberships (seq, player_id, group_id) VALUES (?1, ?2, ?3)",
          )?;
          for (seq, (player_id, group_id)) in memberships.iter().enumerate() {
            stmt.execute(rusqlite::params![seq as i64, player_id, group_id])?;
          }
        }

        tx.commit()?;
        Ok(())
      })
      .await?;

    debug!(
      players = counts.0,
      groups = counts.1,
      memberships = counts.2,
      "saved roster"
    );
    Ok(())
  }
}
