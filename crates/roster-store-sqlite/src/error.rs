//! Error type for `roster-store-sqlite`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("core error: {0}")]
  Core(#[from] roster_core::Error),

  #[error("database error: {0}")]
  Database(#[from] tokio_rusqlite::Error),

  #[error("date parse error: {0}")]
  DateParse(String),

  /// SQLite integers are signed 64-bit; larger ids are refused rather than
  /// wrapped.
  #[error("id {0} does not fit in an SQLite integer")]
  IdOutOfRange(u64),

  #[error("stored id {0} is negative")]
  NegativeId(i64),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
