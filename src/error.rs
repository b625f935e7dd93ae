//! Error taxonomy for notes-web.
//!
//! Variants map to HTTP status codes in the handler layer (spec §7):
//! `EmptyContent` → 400, `NoteNotFound` → 404, `StorageUnavailable` → 500.

use thiserror::Error;

/// The main error type for notes-web operations.
#[derive(Error, Debug)]
pub enum Error {
    /// Note content was empty after trimming.
    #[error("note content cannot be empty")]
    EmptyContent,

    /// No note matched the requested id.
    #[error("note {0} not found")]
    NoteNotFound(i64),

    /// The backing store was unavailable or a query failed.
    #[error("storage unavailable: {0}")]
    StorageUnavailable(String),
}

impl From<tokio_postgres::Error> for Error {
    fn from(err: tokio_postgres::Error) -> Self {
        Error::StorageUnavailable(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
