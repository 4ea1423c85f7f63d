//! The `RosterStore` trait.
//!
//! Implemented by storage backends (e.g. `roster-store-sqlite`). The CLI
//! depends on this abstraction, not on any concrete backend.

use std::future::Future;

use crate::snapshot::RosterSnapshot;

/// Abstraction over a roster persistence backend.
///
/// Backends persist whole snapshots. All invariant checking happens in
/// [`RosterModel`](crate::RosterModel); a backend only has to preserve the
/// order of `records`.
pub trait RosterStore: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  /// Load the stored roster. An empty store yields an empty snapshot.
  fn load(
    &self,
  ) -> impl Future<Output = Result<RosterSnapshot, Self::Error>> + Send + '_;

  /// Replace the stored roster with `snapshot` atomically.
  fn save<'a>(
    &'a self,
    snapshot: &'a RosterSnapshot,
  ) -> impl Future<Output = Result<(), Self::Error>> + Send + 'a;
}
