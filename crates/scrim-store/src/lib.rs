//! Columnar entity storage for Scrim replay snapshots.
//!
//! An [`EntityStore`] keeps one densely packed array per column, all the
//! same length, with row `i` of every column describing the same entity.
//! Entities are addressed by a unique integer id; an id → row index is
//! kept consistent across every insert and delete.
//!
//! # Layout
//!
//! ```text
//! EntityStore<S: Schema>
//! ├── ids: Vec<i32>                (the id column)
//! ├── columns: Vec<ColumnData>     (one per S::COLUMNS entry, i8 or i32)
//! └── index: IndexMap<id, row>
//! ```
//!
//! Deletes compact by swapping the last row into the hole, so row
//! indices are **not** stable across deletes. Only ids are.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod batch;
pub mod column;
pub mod error;
pub mod store;

pub use batch::ColumnBatch;
pub use column::{ColumnData, ColumnKey, ColumnKind, ColumnRef, ColumnSpec, Schema};
pub use error::StoreError;
pub use store::{EntityStore, Row};
