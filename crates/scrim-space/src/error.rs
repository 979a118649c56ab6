//! Error types for grid operations.

use thiserror::Error;

/// Errors arising from grid construction or grid transforms.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum SpaceError {
    /// The bounding box has a negative extent.
    #[error("invalid grid dimensions {width}x{height}")]
    InvalidDimensions {
        /// Requested width.
        width: i32,
        /// Requested height.
        height: i32,
    },
    /// A grid buffer does not hold `width × height` cells.
    #[error("grid has {found} cells, expected {expected}")]
    LengthMismatch {
        /// `width × height`.
        expected: usize,
        /// Actual buffer length.
        found: usize,
    },
    /// A quarter-turn rotation was requested on a non-square grid.
    #[error("cannot rotate a {width}x{height} grid in place")]
    NotSquare {
        /// Grid width.
        width: u32,
        /// Grid height.
        height: u32,
    },
}
