//! Core types and the in-memory roster model.
//!
//! This crate is deliberately free of database and UI dependencies. The
//! storage backend and the command-line front end both depend on it.

pub mod error;
pub mod group;
pub mod model;
pub mod player;
pub mod shared;
pub mod snapshot;
pub mod store;

pub use error::{Error, Result};
pub use group::{Group, GroupId, PlayerGroupRecord};
pub use model::RosterModel;
pub use player::{Player, PlayerData, PlayerId};
pub use shared::SharedRoster;
pub use snapshot::RosterSnapshot;
