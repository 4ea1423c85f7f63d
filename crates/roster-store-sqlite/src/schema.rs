//! SQL schema for the roster SQLite store.
//!
//! Executed once at connection startup. Future migrations will be gated on
//! `PRAGMA user_version`.

/// Full schema DDL; idempotent thanks to `CREATE TABLE IF NOT EXISTS`.
pub const SCHEMA: &str = "
PRAGMA journal_mode = WAL;
PRAGMA foreign_keys = ON;

CREATE TABLE IF NOT EXISTS players (
    id        INTEGER PRIMARY KEY,
    name      TEXT NOT NULL CHECK (length(trim(name)) > 0),
    surname   TEXT NOT NULL CHECK (length(trim(surname)) > 0),
    birthday  TEXT NOT NULL      -- ISO 8601 calendar date, YYYY-MM-DD
);

CREATE TABLE IF NOT EXISTS groups (
    group_id  INTEGER PRIMARY KEY
);

-- One row per membership edge. `seq` preserves join order within a group.
CREATE TABLE IF NOT EXISTS memberships (
    seq       INTEGER PRIMARY KEY,
    player_id INTEGER NOT NULL REFERENCES players(id)       ON DELETE CASCADE,
    group_id  INTEGER NOT NULL REFERENCES groups(group_id)  ON DELETE CASCADE,
    UNIQUE (player_id, group_id)
);

CREATE INDEX IF NOT EXISTS memberships_group_idx ON memberships(group_id);

PRAGMA user_version = 1;
";
