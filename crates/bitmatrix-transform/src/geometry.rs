//! Rotation, translation, scaling, and mirroring.
//!
//! [`rotate`], [`translate`] and [`mirror`] iterate the source grid in
//! canonical order and push each cell to its image; when several cells map
//! to the same destination the last one written wins. [`scale`] instead
//! iterates the destination grid and pulls from the nearest source cell.

use crate::axis::{Axis, Plane};
use crate::round::to_index;
use bitmatrix_core::{BitField, Coord, GridError, Shape};
use tracing::debug;

/// Rotate a 3-axis grid about its geometric center.
///
/// Each cell is rotated about `((dx - 1) / 2, (dy - 1) / 2, (dz - 1) / 2)`
/// by `degrees` around `axis`, rounded to the nearest cell, and written
/// there if it lands in bounds. The output has the input's shape.
///
/// Fails with [`GridError::TypeMismatch`] for a 4-axis grid and
/// [`GridError::InvalidArgument`] for a non-finite angle.
pub fn rotate(grid: &BitField, axis: Axis, degrees: f64) -> Result<BitField, GridError> {
    require_spatial(grid, "rotate")?;
    if !degrees.is_finite() {
        return Err(GridError::InvalidArgument {
            reason: format!("rotation angle must be finite, got {degrees}"),
        });
    }

    let matrix = rotation_matrix(axis, degrees.to_radians());
    let center: [f64; 3] = std::array::from_fn(|i| (grid.shape()[i] as f64 - 1.0) / 2.0);

    let mut out = BitField::new(grid.shape())?;
    let mut dropped = 0usize;
    for src in grid.coords() {
        let offset: [f64; 3] = std::array::from_fn(|i| src[i] as f64 - center[i]);
        let mut dest = Coord::with_capacity(3);
        for (row, c) in matrix.iter().zip(center) {
            let rotated = row[0] * offset[0] + row[1] * offset[1] + row[2] * offset[2];
            match to_index(rotated + c) {
                Some(v) => dest.push(v),
                None => break,
            }
        }
        if dest.len() == 3 && out.contains(&dest) {
            out.copy_cell_from(grid, &src, &dest)?;
        } else {
            dropped += 1;
        }
    }

    debug!(%axis, degrees, shape = ?grid.shape(), dropped, "rotate");
    Ok(out)
}

/// Shift every cell of a grid by `vector`.
///
/// `vector` needs one component per axis. Cells shifted out of bounds are
/// dropped; vacated cells stay false.
pub fn translate(grid: &BitField, vector: &[i32]) -> Result<BitField, GridError> {
    require_arity(grid, "translation vector", vector.len())?;

    let mut out = BitField::new(grid.shape())?;
    let mut dropped = 0usize;
    for src in grid.coords() {
        let dest: Option<Coord> = src
            .iter()
            .zip(vector)
            .map(|(&c, &d)| c.checked_add(d))
            .collect();
        match dest {
            Some(dest) if out.contains(&dest) => out.copy_cell_from(grid, &src, &dest)?,
            _ => dropped += 1,
        }
    }

    debug!(vector = ?vector, shape = ?grid.shape(), dropped, "translate");
    Ok(out)
}

/// Nearest-neighbour resample of a grid by per-axis `factors`.
///
/// The output shape is `round(dim * factor)` per axis. Every output cell
/// `d` copies from source cell `round(d / factor)` when that lies in
/// bounds.
///
/// Fails with [`GridError::InvalidArgument`] if the factor count does not
/// match the grid's rank, any factor is not a positive finite number, or an
/// output axis would have zero length.
pub fn scale(grid: &BitField, factors: &[f64]) -> Result<BitField, GridError> {
    require_arity(grid, "scale factors", factors.len())?;
    if let Some(bad) = factors.iter().find(|f| !(f.is_finite() && **f > 0.0)) {
        return Err(GridError::InvalidArgument {
            reason: format!("scale factors must be positive and finite, got {bad}"),
        });
    }

    let mut shape = Shape::with_capacity(factors.len());
    for (axis, (&dim, &factor)) in grid.shape().iter().zip(factors).enumerate() {
        let scaled = (dim as f64 * factor).round();
        if scaled < 1.0 {
            return Err(GridError::InvalidArgument {
                reason: format!(
                    "scale factor {factor} collapses axis {axis} (length {dim}) to zero"
                ),
            });
        }
        shape.push(scaled as usize);
    }

    let mut out = BitField::new(&shape)?;
    let mut unmapped = 0usize;
    for dest in out.coords() {
        let src: Option<Coord> = dest
            .iter()
            .zip(factors)
            .map(|(&d, &f)| to_index(d as f64 / f))
            .collect();
        match src {
            Some(src) if grid.contains(&src) => out.copy_cell_from(grid, &src, &dest)?,
            _ => unmapped += 1,
        }
    }

    debug!(factors = ?factors, from = ?grid.shape(), to = ?out.shape(), unmapped, "scale");
    Ok(out)
}

/// Reflect a 3-axis grid across `plane`.
///
/// The axis perpendicular to the plane is flipped (`i -> dim - 1 - i`).
/// Reflection is a bijection, so no cell is ever dropped and mirroring twice
/// across the same plane restores the original.
pub fn mirror(grid: &BitField, plane: Plane) -> Result<BitField, GridError> {
    require_spatial(grid, "mirror")?;

    let flip = plane.normal().index();
    let last = grid.shape()[flip] as i32 - 1;
    let mut out = BitField::new(grid.shape())?;
    for src in grid.coords() {
        let mut dest = src.clone();
        dest[flip] = last - src[flip];
        out.copy_cell_from(grid, &src, &dest)?;
    }

    debug!(%plane, shape = ?grid.shape(), "mirror");
    Ok(out)
}

/// Standard right-handed rotation matrix about `axis`.
fn rotation_matrix(axis: Axis, radians: f64) -> [[f64; 3]; 3] {
    let (s, c) = radians.sin_cos();
    match axis {
        Axis::X => [[1.0, 0.0, 0.0], [0.0, c, -s], [0.0, s, c]],
        Axis::Y => [[c, 0.0, s], [0.0, 1.0, 0.0], [-s, 0.0, c]],
        Axis::Z => [[c, -s, 0.0], [s, c, 0.0], [0.0, 0.0, 1.0]],
    }
}

pub(crate) fn require_spatial(grid: &BitField, operation: &'static str) -> Result<(), GridError> {
    if grid.ndim() == 3 {
        Ok(())
    } else {
        Err(GridError::TypeMismatch {
            operation,
            expected: "a 3-axis grid",
            ndim: grid.ndim(),
        })
    }
}

pub(crate) fn require_arity(grid: &BitField, what: &str, len: usize) -> Result<(), GridError> {
    if len == grid.ndim() {
        Ok(())
    } else {
        Err(GridError::InvalidArgument {
            reason: format!(
                "{what} has {len} components, grid has {} axes",
                grid.ndim()
            ),
        })
    }
}
