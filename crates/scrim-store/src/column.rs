//! Column definitions and typed column buffers.

use std::fmt;

/// Primitive element type of a column.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ColumnKind {
    /// Signed 8-bit values (small enums and flags).
    I8,
    /// Signed 32-bit values (ids, coordinates, counters).
    I32,
}

/// A column identifier usable as a key into an [`EntityStore`](crate::EntityStore).
///
/// Implemented by a schema's column enum. `position()` must equal the
/// column's index in [`Schema::COLUMNS`].
pub trait ColumnKey: Copy + Eq + fmt::Debug + 'static {
    /// Index of this column within its schema.
    fn position(self) -> usize;
}

/// Static description of one column.
#[derive(Clone, Copy, Debug)]
pub struct ColumnSpec<C> {
    /// The column key.
    pub column: C,
    /// Human-readable column name, used in errors.
    pub name: &'static str,
    /// Element type.
    pub kind: ColumnKind,
}

/// The fixed set of columns an entity store holds (besides `id`).
pub trait Schema: 'static {
    /// The column key type.
    type Column: ColumnKey;

    /// Name of the store, used in errors and log events.
    const NAME: &'static str;

    /// Columns in position order.
    const COLUMNS: &'static [ColumnSpec<Self::Column>];

    /// Name of a column.
    fn column_name(column: Self::Column) -> &'static str {
        Self::COLUMNS[column.position()].name
    }
}

/// A densely packed column buffer.
///
/// Values cross the API as `i32`; `I8` columns narrow on write with
/// two's-complement truncation and widen on read.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ColumnData {
    /// 8-bit buffer.
    I8(Vec<i8>),
    /// 32-bit buffer.
    I32(Vec<i32>),
}

impl ColumnData {
    /// An empty buffer of the given kind.
    pub fn new(kind: ColumnKind) -> Self {
        match kind {
            ColumnKind::I8 => Self::I8(Vec::new()),
            ColumnKind::I32 => Self::I32(Vec::new()),
        }
    }

    /// Element type of this buffer.
    pub fn kind(&self) -> ColumnKind {
        match self {
            Self::I8(_) => ColumnKind::I8,
            Self::I32(_) => ColumnKind::I32,
        }
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        match self {
            Self::I8(v) => v.len(),
            Self::I32(v) => v.len(),
        }
    }

    /// Whether the buffer has no rows.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Read row `row`, widened to `i32`.
    ///
    /// # Panics
    ///
    /// Panics if `row` is out of range.
    pub fn get(&self, row: usize) -> i32 {
        match self {
            Self::I8(v) => i32::from(v[row]),
            Self::I32(v) => v[row],
        }
    }

    /// Overwrite row `row`.
    ///
    /// # Panics
    ///
    /// Panics if `row` is out of range.
    pub fn set(&mut self, row: usize, value: i32) {
        match self {
            Self::I8(v) => v[row] = value as i8,
            Self::I32(v) => v[row] = value,
        }
    }

    /// Append the given values.
    pub fn extend_from(&mut self, values: &[i32]) {
        match self {
            Self::I8(v) => v.extend(values.iter().map(|&x| x as i8)),
            Self::I32(v) => v.extend_from_slice(values),
        }
    }

    /// Append `n` zero rows.
    pub fn extend_zeros(&mut self, n: usize) {
        match self {
            Self::I8(v) => v.resize(v.len() + n, 0),
            Self::I32(v) => v.resize(v.len() + n, 0),
        }
    }

    /// Remove row `row`, moving the last row into its place.
    pub fn swap_remove(&mut self, row: usize) {
        match self {
            Self::I8(v) => {
                v.swap_remove(row);
            }
            Self::I32(v) => {
                v.swap_remove(row);
            }
        }
    }

    /// Remove every row, keeping the allocation.
    pub fn clear(&mut self) {
        match self {
            Self::I8(v) => v.clear(),
            Self::I32(v) => v.clear(),
        }
    }

    /// Borrow the buffer.
    pub fn view(&self) -> ColumnRef<'_> {
        match self {
            Self::I8(v) => ColumnRef::I8(v),
            Self::I32(v) => ColumnRef::I32(v),
        }
    }
}

/// A borrowed column buffer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ColumnRef<'a> {
    /// 8-bit values.
    I8(&'a [i8]),
    /// 32-bit values.
    I32(&'a [i32]),
}

impl<'a> ColumnRef<'a> {
    /// Number of rows.
    pub fn len(&self) -> usize {
        match self {
            Self::I8(v) => v.len(),
            Self::I32(v) => v.len(),
        }
    }

    /// Whether the column has no rows.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Read row `row`, widened to `i32`.
    pub fn get(&self, row: usize) -> i32 {
        match self {
            Self::I8(v) => i32::from(v[row]),
            Self::I32(v) => v[row],
        }
    }

    /// Iterate over the column, widened to `i32`.
    pub fn iter(&self) -> impl Iterator<Item = i32> + 'a {
        let this = *self;
        (0..this.len()).map(move |row| this.get(row))
    }
}
