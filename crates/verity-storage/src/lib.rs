//! SQLite persistence for the Verity workspace.
//!
//! [`StorageEngine`] owns a single serialized connection and implements
//! `IAssertionSource`, `ISynthesisStore`, and `IAuditSink`.

pub mod audit;
pub mod engine;
pub mod migrations;
pub mod pool;
pub mod queries;

pub use engine::StorageEngine;

use verity_core::errors::StorageError;
use verity_core::VerityError;

/// Wrap a SQLite failure message as a workspace error.
pub(crate) fn to_storage_err(message: impl Into<String>) -> VerityError {
    VerityError::StorageError(StorageError::SqliteError {
        message: message.into(),
    })
}

/// A row that cannot be mapped back into a domain value.
pub(crate) fn corrupt_row(details: impl Into<String>) -> VerityError {
    VerityError::StorageError(StorageError::CorruptRow {
        details: details.into(),
    })
}
