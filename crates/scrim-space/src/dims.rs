//! Grid dimensions and the index ↔ location mapping.

use crate::error::SpaceError;
use scrim_core::Location;

/// Width and height of a map grid, in cells.
///
/// Cell `(x, y)` lives at flat index `y * width + x`. Locations are
/// relative to the map's minimum corner.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct GridDims {
    width: u32,
    height: u32,
}

impl GridDims {
    /// Dimensions of a `width × height` grid.
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Dimensions of the box spanned by two corners (max exclusive).
    pub fn from_corners(min: Location, max: Location) -> Result<Self, SpaceError> {
        let width = max.x - min.x;
        let height = max.y - min.y;
        if width < 0 || height < 0 {
            return Err(SpaceError::InvalidDimensions { width, height });
        }
        Ok(Self::new(width as u32, height as u32))
    }

    /// Number of columns.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Number of rows.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Total number of cells.
    pub fn cell_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Whether the grid is square.
    pub fn is_square(&self) -> bool {
        self.width == self.height
    }

    /// Whether `(x, y)` lies in `[0, width) × [0, height)`.
    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && (x as u32) < self.width && (y as u32) < self.height
    }

    /// Flat index of `(x, y)`, or `None` when out of bounds.
    pub fn index(&self, x: i32, y: i32) -> Option<usize> {
        self.contains(x, y)
            .then(|| y as usize * self.width as usize + x as usize)
    }

    /// Location of a flat index, or `None` when out of range.
    pub fn location(&self, index: usize) -> Option<Location> {
        if index >= self.cell_count() {
            return None;
        }
        let w = self.width as usize;
        Some(Location::new((index % w) as i32, (index / w) as i32))
    }

    /// Check that a buffer has exactly `cell_count()` cells.
    pub fn check_len(&self, len: usize) -> Result<(), SpaceError> {
        let expected = self.cell_count();
        if len == expected {
            Ok(())
        } else {
            Err(SpaceError::LengthMismatch {
                expected,
                found: len,
            })
        }
    }
}
