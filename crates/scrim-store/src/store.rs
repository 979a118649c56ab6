//! The columnar entity store.

use std::fmt;
use std::marker::PhantomData;

use indexmap::IndexMap;

use crate::batch::ColumnBatch;
use crate::column::{ColumnData, ColumnKey, ColumnKind, ColumnRef, Schema};
use crate::error::StoreError;

/// A structure-of-arrays table of entities keyed by unique `i32` ids.
///
/// Invariants, held after every public operation:
/// - every column has exactly `len()` rows;
/// - `index[ids[i]] == i` for every row `i`, and the index holds no
///   other entries.
pub struct EntityStore<S: Schema> {
    ids: Vec<i32>,
    columns: Vec<ColumnData>,
    index: IndexMap<i32, usize>,
    _schema: PhantomData<fn() -> S>,
}

impl<S: Schema> EntityStore<S> {
    /// An empty store with one buffer per schema column.
    pub fn new() -> Self {
        debug_assert!(
            S::COLUMNS
                .iter()
                .enumerate()
                .all(|(i, spec)| spec.column.position() == i),
            "{}: column positions out of order",
            S::NAME
        );
        Self {
            ids: Vec::new(),
            columns: S::COLUMNS.iter().map(|s| ColumnData::new(s.kind)).collect(),
            index: IndexMap::new(),
            _schema: PhantomData,
        }
    }

    /// Number of entities.
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Whether the store holds no entities.
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// The id column, in row order.
    pub fn ids(&self) -> &[i32] {
        &self.ids
    }

    /// Whether `id` is present.
    pub fn contains(&self, id: i32) -> bool {
        self.index.contains_key(&id)
    }

    /// Row index of `id`, if present.
    pub fn index_of(&self, id: i32) -> Option<usize> {
        self.index.get(&id).copied()
    }

    /// Row indices for a list of ids, `None` for absent ids.
    pub fn lookup_indices(&self, ids: &[i32]) -> Vec<Option<usize>> {
        ids.iter().map(|&id| self.index_of(id)).collect()
    }

    /// Borrow a whole column.
    pub fn column(&self, column: S::Column) -> ColumnRef<'_> {
        self.columns[column.position()].view()
    }

    /// Element type of a column.
    pub fn column_kind(&self, column: S::Column) -> ColumnKind {
        self.columns[column.position()].kind()
    }

    /// Read a cell by row index.
    ///
    /// # Panics
    ///
    /// Panics if `row >= len()`.
    pub fn value_at(&self, row: usize, column: S::Column) -> i32 {
        self.columns[column.position()].get(row)
    }

    /// Overwrite a cell by row index.
    ///
    /// # Panics
    ///
    /// Panics if `row >= len()`.
    pub fn set_at(&mut self, row: usize, column: S::Column, value: i32) {
        self.columns[column.position()].set(row, value);
    }

    /// Read a cell by id.
    pub fn value(&self, id: i32, column: S::Column) -> Option<i32> {
        self.index_of(id).map(|row| self.value_at(row, column))
    }

    /// A view of the row holding `id`.
    pub fn get(&self, id: i32) -> Option<Row<'_, S>> {
        self.index_of(id).map(|row| Row {
            store: self,
            row,
        })
    }

    /// A view of the row holding `id`, or [`StoreError::UnknownId`].
    pub fn lookup(&self, id: i32) -> Result<Row<'_, S>, StoreError> {
        self.get(id).ok_or(StoreError::UnknownId { store: S::NAME, id })
    }

    /// Iterate over all rows in row order.
    pub fn rows(&self) -> impl Iterator<Item = Row<'_, S>> + '_ {
        (0..self.len()).map(move |row| Row { store: self, row })
    }

    // ── Mutation ────────────────────────────────────────────────

    /// Append every row of `batch`. Columns the batch omits are
    /// zero-filled.
    ///
    /// Fails without modifying the store if any column length differs
    /// from the id count, or if any id is already present or repeated
    /// within the batch. Returns the row index of the first new row.
    pub fn insert_bulk(&mut self, batch: &ColumnBatch<S::Column>) -> Result<usize, StoreError> {
        let n = batch.ids.len();
        self.check_lengths(batch)?;
        let mut seen = indexmap::IndexSet::with_capacity(n);
        for &id in &batch.ids {
            if self.index.contains_key(&id) || !seen.insert(id) {
                return Err(StoreError::DuplicateId { store: S::NAME, id });
            }
        }

        let start = self.len();
        for (pos, data) in self.columns.iter_mut().enumerate() {
            match batch.columns.iter().find(|(c, _)| c.position() == pos) {
                Some((_, values)) => data.extend_from(values),
                None => data.extend_zeros(n),
            }
        }
        for (offset, &id) in batch.ids.iter().enumerate() {
            self.index.insert(id, start + offset);
        }
        self.ids.extend_from_slice(&batch.ids);
        Ok(start)
    }

    /// Append a single row. Unlisted columns are zero.
    pub fn insert(&mut self, id: i32, values: &[(S::Column, i32)]) -> Result<usize, StoreError> {
        if self.index.contains_key(&id) {
            return Err(StoreError::DuplicateId { store: S::NAME, id });
        }
        let row = self.len();
        for data in &mut self.columns {
            data.extend_zeros(1);
        }
        for &(column, value) in values {
            self.columns[column.position()].set(row, value);
        }
        self.ids.push(id);
        self.index.insert(id, row);
        Ok(row)
    }

    /// Overwrite the listed cells of the row holding `id`.
    pub fn alter(&mut self, id: i32, values: &[(S::Column, i32)]) -> Result<usize, StoreError> {
        let row = self
            .index_of(id)
            .ok_or(StoreError::UnknownId { store: S::NAME, id })?;
        for &(column, value) in values {
            self.columns[column.position()].set(row, value);
        }
        Ok(row)
    }

    /// Overwrite the supplied columns for every batch id present in the
    /// store. Absent ids are skipped. Returns the number of rows altered.
    ///
    /// Column lengths are validated before any write.
    pub fn alter_bulk(&mut self, batch: &ColumnBatch<S::Column>) -> Result<usize, StoreError> {
        self.check_lengths(batch)?;
        let mut altered = 0;
        for (i, &id) in batch.ids.iter().enumerate() {
            let Some(row) = self.index_of(id) else {
                continue;
            };
            for (column, values) in &batch.columns {
                self.columns[column.position()].set(row, values[i]);
            }
            altered += 1;
        }
        Ok(altered)
    }

    /// Remove the row holding `id`, compacting by moving the last row
    /// into its place. Returns whether the id was present.
    pub fn remove(&mut self, id: i32) -> bool {
        let Some(row) = self.index.swap_remove(&id) else {
            return false;
        };
        let last = self.ids.len() - 1;
        self.ids.swap_remove(row);
        for data in &mut self.columns {
            data.swap_remove(row);
        }
        if row != last {
            let moved = self.ids[row];
            self.index.insert(moved, row);
        }
        true
    }

    /// Remove every listed id. Absent and repeated ids are ignored.
    /// Returns the number of rows removed.
    pub fn delete_bulk(&mut self, ids: &[i32]) -> usize {
        ids.iter().filter(|&&id| self.remove(id)).count()
    }

    /// Remove every row, keeping allocations.
    pub fn clear(&mut self) {
        self.ids.clear();
        self.index.clear();
        for data in &mut self.columns {
            data.clear();
        }
    }

    /// Make `self` an exact copy of `other`, reusing allocations.
    pub fn copy_from(&mut self, other: &Self) {
        self.ids.clone_from(&other.ids);
        self.columns.clone_from(&other.columns);
        self.index.clone_from(&other.index);
    }

    fn check_lengths(&self, batch: &ColumnBatch<S::Column>) -> Result<(), StoreError> {
        let expected = batch.ids.len();
        for (column, values) in &batch.columns {
            if values.len() != expected {
                return Err(StoreError::LengthMismatch {
                    store: S::NAME,
                    column: S::column_name(*column),
                    expected,
                    found: values.len(),
                });
            }
        }
        Ok(())
    }
}

impl<S: Schema> Default for EntityStore<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: Schema> Clone for EntityStore<S> {
    fn clone(&self) -> Self {
        Self {
            ids: self.ids.clone(),
            columns: self.columns.clone(),
            index: self.index.clone(),
            _schema: PhantomData,
        }
    }
}

impl<S: Schema> PartialEq for EntityStore<S> {
    /// Row-order sensitive equality of ids and every column.
    fn eq(&self, other: &Self) -> bool {
        self.ids == other.ids && self.columns == other.columns
    }
}

impl<S: Schema> fmt::Debug for EntityStore<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EntityStore")
            .field("schema", &S::NAME)
            .field("len", &self.len())
            .finish()
    }
}

/// A borrowed view of one row.
pub struct Row<'a, S: Schema> {
    store: &'a EntityStore<S>,
    row: usize,
}

impl<'a, S: Schema> Row<'a, S> {
    /// The entity id.
    pub fn id(&self) -> i32 {
        self.store.ids[self.row]
    }

    /// The row index at the time of borrowing.
    pub fn index(&self) -> usize {
        self.row
    }

    /// A cell of this row.
    pub fn get(&self, column: S::Column) -> i32 {
        self.store.value_at(self.row, column)
    }
}

impl<S: Schema> Clone for Row<'_, S> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<S: Schema> Copy for Row<'_, S> {}

impl<S: Schema> fmt::Debug for Row<'_, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut d = f.debug_struct(S::NAME);
        d.field("id", &self.id());
        for spec in S::COLUMNS {
            d.field(spec.name, &self.get(spec.column));
        }
        d.finish()
    }
}
