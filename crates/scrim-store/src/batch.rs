//! Column-oriented batches for bulk insert and alter.

use crate::column::ColumnKey;

/// A batch of rows in columnar form: one id list plus any subset of a
/// schema's columns.
///
/// Every supplied column must have exactly `ids.len()` values; the store
/// checks this before touching its own buffers.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ColumnBatch<C> {
    /// Entity ids, one per row.
    pub ids: Vec<i32>,
    /// Supplied columns and their values.
    pub columns: Vec<(C, Vec<i32>)>,
}

impl<C: ColumnKey> ColumnBatch<C> {
    /// A batch with the given ids and no columns.
    pub fn new(ids: Vec<i32>) -> Self {
        Self {
            ids,
            columns: Vec::new(),
        }
    }

    /// Add (or replace) a column.
    pub fn with(mut self, column: C, values: Vec<i32>) -> Self {
        self.set(column, values);
        self
    }

    /// Add (or replace) a column in place.
    pub fn set(&mut self, column: C, values: Vec<i32>) {
        match self.columns.iter_mut().find(|(c, _)| *c == column) {
            Some((_, existing)) => *existing = values,
            None => self.columns.push((column, values)),
        }
    }

    /// Values supplied for `column`, if any.
    pub fn values(&self, column: C) -> Option<&[i32]> {
        self.columns
            .iter()
            .find(|(c, _)| *c == column)
            .map(|(_, v)| v.as_slice())
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Whether the batch has no rows.
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}
