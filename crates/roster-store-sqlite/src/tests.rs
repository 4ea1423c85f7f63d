//! Integration tests for `SqliteStore` against an in-memory database.

use chrono::NaiveDate;
use roster_core::{
  PlayerData, PlayerGroupRecord, RosterModel, RosterSnapshot, store::RosterStore,
};

use crate::{Error, SqliteStore};

async fn store() -> SqliteStore {
  SqliteStore::open_in_memory()
    .await
    .expect("in-memory store")
}

fn player(id: u64, name: &str, surname: &str) -> PlayerData {
  PlayerData::new(
    id,
    name,
    surname,
    NaiveDate::from_ymd_opt(1990, 1, 1).unwrap(),
  )
}

fn sample_model() -> RosterModel {
  let mut m = RosterModel::new();
  m.add_player(player(1, "Ana", "Smith")).unwrap();
  m.add_player(player(2, "Ivan", "Petrov")).unwrap();
  m.add_player(player(3, "Mei", "Chen")).unwrap();
  m.add_group(10).unwrap();
  m.add_group(20).unwrap();
  m.add_membership(3, 10).unwrap();
  m.add_membership(1, 10).unwrap();
  m.add_membership(1, 20).unwrap();
  m.add_membership(2, 10).unwrap();
  m
}

// ─── Load / save ─────────────────────────────────────────────────────────────

#[tokio::test]
async fn empty_store_loads_empty_snapshot() {
  let s = store().await;
  let snapshot = s.load().await.unwrap();
  assert!(snapshot.is_empty());
}

#[tokio::test]
async fn save_then_load_preserves_roster() {
  let s = store().await;
  let model = sample_model();

  s.save(&model.snapshot()).await.unwrap();
  let loaded = s.load().await.unwrap();
  assert_eq!(loaded, model.snapshot());

  let rebuilt = RosterModel::from_snapshot(loaded).unwrap();
  let order: Vec<u64> = rebuilt.group(10).unwrap().player_ids().collect();
  assert_eq!(order, vec![3, 1, 2]);
  assert_eq!(rebuilt.player(1).unwrap().fio(), "Smith Ana");
}

#[tokio::test]
async fn save_replaces_previous_contents() {
  let s = store().await;
  let mut model = sample_model();
  s.save(&model.snapshot()).await.unwrap();

  model.remove_player(1).unwrap();
  model.remove_group(20).unwrap();
  s.save(&model.snapshot()).await.unwrap();

  let loaded = s.load().await.unwrap();
  assert_eq!(loaded.players.len(), 2);
  assert_eq!(loaded.groups, vec![10]);
  assert_eq!(
    loaded.records,
    vec![PlayerGroupRecord::new(3, 10), PlayerGroupRecord::new(2, 10)]
  );
}

#[tokio::test]
async fn birthday_is_stored_as_iso_date() {
  let s = store().await;
  let mut model = RosterModel::new();
  model
    .add_player(PlayerData::new(
      7,
      "Ana",
      "Smith",
      NaiveDate::from_ymd_opt(2001, 9, 3).unwrap(),
    ))
    .unwrap();
  s.save(&model.snapshot()).await.unwrap();

  let raw: String = s
    .conn_for_tests()
    .call(|conn| {
      Ok(conn.query_row("SELECT birthday FROM players WHERE id = 7", [], |r| {
        r.get(0)
      })?)
    })
    .await
    .unwrap();
  assert_eq!(raw, "2001-09-03");
}

// ─── Id range ────────────────────────────────────────────────────────────────

#[tokio::test]
async fn ids_above_i64_max_are_rejected() {
  let s = store().await;
  let big = i64::MAX as u64 + 1;
  let snapshot = RosterSnapshot {
    players: vec![player(big, "Big", "Id")],
    groups:  vec![],
    records: vec![],
  };

  let err = s.save(&snapshot).await.unwrap_err();
  assert!(matches!(err, Error::IdOutOfRange(id) if id == big));
  assert!(s.load().await.unwrap().is_empty());
}

#[tokio::test]
async fn i64_max_id_roundtrips() {
  let s = store().await;
  let id = i64::MAX as u64;
  let mut model = RosterModel::new();
  model.add_player(player(id, "Max", "Id")).unwrap();
  model.add_group(id).unwrap();
  model.add_membership(id, id).unwrap();

  s.save(&model.snapshot()).await.unwrap();
  assert_eq!(s.load().await.unwrap(), model.snapshot());
}

// ─── Referential integrity ───────────────────────────────────────────────────

#[tokio::test]
async fn dangling_record_rolls_back_whole_save() {
  let s = store().await;
  s.save(&sample_model().snapshot()).await.unwrap();

  let bad = RosterSnapshot {
    players: vec![player(1, "Ana", "Smith")],
    groups:  vec![10],
    records: vec![PlayerGroupRecord::new(1, 99)],
  };
  let err = s.save(&bad).await.unwrap_err();
  assert!(matches!(err, Error::Database(_)));

  // The previous roster is still there.
  assert_eq!(s.load().await.unwrap(), sample_model().snapshot());
}

#[tokio::test]
async fn deleting_a_player_row_cascades_memberships() {
  let s = store().await;
  s.save(&sample_model().snapshot()).await.unwrap();

  s.conn_for_tests()
    .call(|conn| {
      conn.execute("DELETE FROM players WHERE id = 1", [])?;
      Ok(())
    })
    .await
    .unwrap();

  let loaded = s.load().await.unwrap();
  assert!(loaded.records.iter().all(|r| r.player_id != 1));
  assert_eq!(loaded.records.len(), 2);
}
