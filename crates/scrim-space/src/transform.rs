//! In-place whole-grid permutations.
//!
//! Each function checks the buffer against its dimensions before
//! touching it, so an `Err` leaves the grid unchanged.

use crate::dims::GridDims;
use crate::error::SpaceError;

/// A whole-grid permutation selected by a vortex anomaly's target value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GridTransform {
    /// Quarter-turn cycles (square grids only).
    RotateQuarter,
    /// Swap column `x` with column `width - 1 - x`.
    MirrorHorizontal,
    /// Swap row `y` with row `height - 1 - y`.
    MirrorVertical,
}

impl GridTransform {
    /// Decode a vortex target: 0 = rotate, 1 = mirror across x, 2 =
    /// mirror across y.
    pub fn from_raw(raw: i32) -> Option<Self> {
        match raw {
            0 => Some(Self::RotateQuarter),
            1 => Some(Self::MirrorHorizontal),
            2 => Some(Self::MirrorVertical),
            _ => None,
        }
    }

    /// Apply this transform to `grid`.
    pub fn apply<T>(self, grid: &mut [T], dims: GridDims) -> Result<(), SpaceError> {
        match self {
            Self::RotateQuarter => rotate_quarter(grid, dims),
            Self::MirrorHorizontal => mirror_horizontal(grid, dims),
            Self::MirrorVertical => mirror_vertical(grid, dims),
        }
    }
}

/// Rotate a square grid by quarter-turn cycles: each step carries the
/// value at `(x, y)` to `(y, n - 1 - x)`.
///
/// Cycles are started from every cell with `x < ceil(n/2)` and
/// `y <= n/2`. That window overlaps itself, so on even grids every
/// cycle is turned twice and on odd grids the middle row and column
/// are turned twice as well. Replays record the result of exactly this
/// pattern, so it is kept as is. Four applications are still the
/// identity.
pub fn rotate_quarter<T>(grid: &mut [T], dims: GridDims) -> Result<(), SpaceError> {
    dims.check_len(grid.len())?;
    if !dims.is_square() {
        return Err(SpaceError::NotSquare {
            width: dims.width(),
            height: dims.height(),
        });
    }
    let n = dims.width() as usize;
    if n == 0 {
        return Ok(());
    }
    let at = |x: usize, y: usize| y * n + x;
    for x in 0..n.div_ceil(2) {
        for y in 0..=n / 2 {
            let (mut cx, mut cy) = (x, y);
            let start = at(cx, cy);
            for _ in 0..3 {
                (cx, cy) = (cy, n - 1 - cx);
                // `start` carries the value to drop into the next cell.
                grid.swap(start, at(cx, cy));
            }
        }
    }
    Ok(())
}

/// Mirror a grid left-to-right.
pub fn mirror_horizontal<T>(grid: &mut [T], dims: GridDims) -> Result<(), SpaceError> {
    dims.check_len(grid.len())?;
    let w = dims.width() as usize;
    if w == 0 {
        return Ok(());
    }
    for row in grid.chunks_exact_mut(w) {
        row.reverse();
    }
    Ok(())
}

/// Mirror a grid top-to-bottom.
pub fn mirror_vertical<T>(grid: &mut [T], dims: GridDims) -> Result<(), SpaceError> {
    dims.check_len(grid.len())?;
    let w = dims.width() as usize;
    let h = dims.height() as usize;
    for y in 0..h / 2 {
        let (top, bottom) = grid.split_at_mut((h - 1 - y) * w);
        top[y * w..(y + 1) * w].swap_with_slice(&mut bottom[..w]);
    }
    Ok(())
}
