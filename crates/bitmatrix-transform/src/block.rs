//! Rectangular block copies between grids.

use crate::geometry::require_arity;
use bitmatrix_core::{BitField, Coord, CoordIter, GridError, Shape};
use tracing::debug;

/// An axis-aligned rectangular region: `origin` (inclusive) plus `extent`
/// cells along each axis.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Block {
    origin: Coord,
    extent: Shape,
}

impl Block {
    /// Create a block. `origin` and `extent` must have the same length, and
    /// every cell of the block must have an `i32` coordinate.
    pub fn new(origin: &[i32], extent: &[usize]) -> Result<Self, GridError> {
        if origin.len() != extent.len() {
            return Err(GridError::InvalidArgument {
                reason: format!(
                    "block origin has {} axes but extent has {}",
                    origin.len(),
                    extent.len()
                ),
            });
        }
        // Both the last local index (extent - 1) and the last global index
        // (origin + extent - 1) must fit in i32.
        let overflows = |(&o, &e): (&i32, &usize)| {
            e > 0 && i128::from(o.max(0)) + e as i128 - 1 > i128::from(i32::MAX)
        };
        if let Some(axis) = origin.iter().zip(extent).position(overflows) {
            return Err(GridError::InvalidArgument {
                reason: format!(
                    "block extent {} at origin {} overflows axis {axis}",
                    extent[axis], origin[axis]
                ),
            });
        }
        Ok(Self {
            origin: Coord::from_slice(origin),
            extent: Shape::from_slice(extent),
        })
    }

    /// Inclusive minimum corner.
    pub fn origin(&self) -> &[i32] {
        &self.origin
    }

    /// Number of cells along each axis.
    pub fn extent(&self) -> &[usize] {
        &self.extent
    }

    /// Whether the block lies entirely inside a grid of `shape`.
    pub fn fits(&self, shape: &[usize]) -> bool {
        self.origin.len() == shape.len()
            && self
                .origin
                .iter()
                .zip(&self.extent)
                .zip(shape)
                .all(|((&o, &e), &dim)| o >= 0 && (o as u64) + (e as u64) <= dim as u64)
    }

    /// `(local, global)` coordinate pairs for every cell of the block, in
    /// canonical order. `local` is relative to the block origin.
    pub fn cells(&self) -> impl Iterator<Item = (Coord, Coord)> + '_ {
        CoordIter::canonical(&self.extent).map(move |local| {
            let global: Coord = local
                .iter()
                .zip(&self.origin)
                .map(|(&l, &o)| l + o)
                .collect();
            (local, global)
        })
    }

    fn check_fits(&self, shape: &[usize]) -> Result<(), GridError> {
        if self.fits(shape) {
            Ok(())
        } else {
            Err(GridError::BlockOutOfBounds {
                origin: self.origin.clone(),
                extent: self.extent.clone(),
                shape: Shape::from_slice(shape),
            })
        }
    }
}

/// Copy `block` into a copy of `target` with its minimum corner at `origin`.
///
/// Bits in the region are overwritten. Properties from `block` are merged
/// into whatever the target cells already carry.
pub fn insert_block(
    target: &BitField,
    block: &BitField,
    origin: &[i32],
) -> Result<BitField, GridError> {
    if target.ndim() != block.ndim() {
        return Err(GridError::IncompatibleOperands {
            reason: format!(
                "cannot place a {}-axis block into a {}-axis grid",
                block.ndim(),
                target.ndim()
            ),
        });
    }
    require_arity(target, "block origin", origin.len())?;
    let region = Block::new(origin, block.shape())?;
    region.check_fits(target.shape())?;

    let mut out = target.clone();
    for (local, global) in region.cells() {
        out.copy_cell_from(block, &local, &global)?;
    }

    debug!(origin = ?origin, extent = ?block.shape(), "insert_block");
    Ok(out)
}

/// Same as [`insert_block`]: bits are overwritten and properties merged.
pub fn replace_block(
    target: &BitField,
    block: &BitField,
    origin: &[i32],
) -> Result<BitField, GridError> {
    insert_block(target, block, origin)
}

/// Copy the region of `grid` starting at `origin` with `extent` into a new
/// grid of shape `extent`.
pub fn extract_block(
    grid: &BitField,
    origin: &[i32],
    extent: &[usize],
) -> Result<BitField, GridError> {
    require_arity(grid, "block origin", origin.len())?;
    let region = Block::new(origin, extent)?;
    region.check_fits(grid.shape())?;

    let mut out = BitField::new(extent)?;
    for (local, global) in region.cells() {
        out.copy_cell_from(grid, &global, &local)?;
    }

    debug!(origin = ?origin, extent = ?extent, ones = out.count_ones(), "extract_block");
    Ok(out)
}
