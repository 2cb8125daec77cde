//! Conversion between grids and linear bit sequences.
//!
//! Linear order walks the first axis fastest and the last axis slowest: row
//! by row, then layer by layer, then (for 4-axis grids) frame by frame.

use bitmatrix_core::{BitField, CoordIter, GridError};
use tracing::{debug, trace};

/// Lay `bits` out into a new grid of `shape` in linear order.
///
/// Cells past the end of `bits` stay false. Fails with
/// [`GridError::CapacityExceeded`] if `bits` is longer than the grid, and
/// with [`GridError::InvalidShape`] for an invalid shape.
///
/// # Examples
///
/// ```
/// use bitmatrix_transform::{from_linear, to_linear};
///
/// let grid = from_linear(&[true, false, true], &[2, 2, 1]).unwrap();
/// assert!(grid.get(&[0, 1, 0]).unwrap());
/// assert_eq!(to_linear(&grid), vec![true, false, true, false]);
/// ```
pub fn from_linear(bits: &[bool], shape: &[usize]) -> Result<BitField, GridError> {
    let mut grid = BitField::new(shape)?;
    if bits.len() > grid.cell_count() {
        return Err(GridError::CapacityExceeded {
            len: bits.len(),
            capacity: grid.cell_count(),
        });
    }
    for (coord, &bit) in CoordIter::linear(shape).zip(bits) {
        if bit {
            grid.set(&coord, true)?;
        }
    }
    trace!(len = bits.len(), shape = ?shape, "from_linear");
    Ok(grid)
}

/// Read every bit of `grid` in linear order.
pub fn to_linear(grid: &BitField) -> Vec<bool> {
    CoordIter::linear(grid.shape())
        .map(|coord| grid.get(&coord).unwrap_or(false))
        .collect()
}

/// Re-lay the bits of `grid` into `shape`, preserving linear order.
///
/// The new shape must have the same number of axes and the same cell
/// count, otherwise [`GridError::InvalidShape`]. Properties are not
/// carried: cell identity does not survive a reshape.
pub fn reshape(grid: &BitField, shape: &[usize]) -> Result<BitField, GridError> {
    if shape.len() != grid.ndim() {
        return Err(GridError::InvalidShape {
            reason: format!(
                "cannot reshape a {}-axis grid to {} axes",
                grid.ndim(),
                shape.len()
            ),
        });
    }
    let capacity = shape
        .iter()
        .try_fold(1usize, |acc, &d| acc.checked_mul(d))
        .unwrap_or(usize::MAX);
    if capacity != grid.cell_count() {
        return Err(GridError::InvalidShape {
            reason: format!(
                "shape {shape:?} holds {capacity} cells, grid has {}",
                grid.cell_count()
            ),
        });
    }

    let out = from_linear(&to_linear(grid), shape)?;
    debug!(from = ?grid.shape(), to = ?shape, "reshape");
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn linear_order_is_first_axis_fastest() {
        let grid = from_linear(&[false, true], &[2, 2, 2]).unwrap();
        assert!(grid.get(&[1, 0, 0]).unwrap());
        assert_eq!(grid.count_ones(), 1);

        let grid = from_linear(&[false, false, false, false, true], &[2, 2, 2]).unwrap();
        assert!(grid.get(&[0, 0, 1]).unwrap());
    }

    #[test]
    fn temporal_frames_are_slowest() {
        let mut bits = vec![false; 8];
        bits.push(true);
        let grid = from_linear(&bits, &[2, 2, 2, 2]).unwrap();
        assert!(grid.get(&[0, 0, 0, 1]).unwrap());
    }

    #[test]
    fn short_input_is_padded_with_false() {
        let bits = [true, true, false, true];
        let grid = from_linear(&bits, &[2, 2, 2]).unwrap();
        let back = to_linear(&grid);
        assert_eq!(back.len(), 8);
        assert_eq!(&back[..4], &bits);
        assert!(back[4..].iter().all(|b| !b));
    }

    #[test]
    fn overlong_input_is_rejected() {
        let bits = vec![true; 9];
        assert_eq!(
            from_linear(&bits, &[2, 2, 2]).unwrap_err(),
            GridError::CapacityExceeded {
                len: 9,
                capacity: 8
            }
        );
    }

    #[test]
    fn reshape_preserves_linear_sequence() {
        let bits: Vec<bool> = (0..24).map(|i| i % 3 == 0).collect();
        let grid = from_linear(&bits, &[2, 3, 4]).unwrap();
        let reshaped = reshape(&grid, &[4, 3, 2]).unwrap();
        assert_eq!(reshaped.shape(), &[4, 3, 2]);
        assert_eq!(to_linear(&reshaped), bits);
    }

    #[test]
    fn reshape_drops_properties() {
        let mut grid = BitField::spatial(2, 2, 2).unwrap();
        grid.set_property(&[0, 0, 0], "a", 1i32).unwrap();
        let reshaped = reshape(&grid, &[4, 2, 1]).unwrap();
        assert!(reshaped.property_names(&[0, 0, 0]).unwrap().is_empty());
    }

    #[test]
    fn reshape_rejects_rank_or_capacity_change() {
        let grid = BitField::spatial(2, 2, 2).unwrap();
        assert!(matches!(
            reshape(&grid, &[2, 2, 2, 1]),
            Err(GridError::InvalidShape { .. })
        ));
        assert!(matches!(
            reshape(&grid, &[3, 3, 1]),
            Err(GridError::InvalidShape { .. })
        ));
    }
}
