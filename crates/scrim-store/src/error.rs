//! Store-specific error types.

use thiserror::Error;

/// Errors that can occur during entity store operations.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum StoreError {
    /// An inserted id is already present (or repeated within the batch).
    #[error("{store}: id {id} already present")]
    DuplicateId {
        /// Name of the store's schema.
        store: &'static str,
        /// The colliding id.
        id: i32,
    },
    /// A point operation referenced an id that is not in the store.
    #[error("{store}: id {id} not found")]
    UnknownId {
        /// Name of the store's schema.
        store: &'static str,
        /// The missing id.
        id: i32,
    },
    /// A batch column's length differs from the batch's id count.
    #[error("{store}: column '{column}' has {found} values, expected {expected}")]
    LengthMismatch {
        /// Name of the store's schema.
        store: &'static str,
        /// Name of the offending column.
        column: &'static str,
        /// Number of ids in the batch.
        expected: usize,
        /// Number of values supplied for the column.
        found: usize,
    },
}
