//! Map-grid geometry for Scrim.
//!
//! Every per-cell map layer (rubble, lead, gold) is a flat row-major
//! array of `width × height` values. [`GridDims`] converts between flat
//! indices and map-relative `(x, y)` locations, and the functions in
//! [`transform`] permute a whole grid in place (the effect of a vortex
//! anomaly).

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod dims;
pub mod error;
pub mod transform;

pub use dims::GridDims;
pub use error::SpaceError;
pub use transform::{mirror_horizontal, mirror_vertical, rotate_quarter, GridTransform};
