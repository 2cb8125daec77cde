//! Reusable grid fixtures.
//!
//! - [`checkerboard`]: bits set where the coordinate sum is even.
//! - [`tagged_checkerboard`]: checkerboard plus properties on a mix of set
//!   and unset cells, for checking that transforms move properties with bits.
//! - [`filled`]: every bit set.

use bitmatrix_core::BitField;

pub fn checkerboard(shape: &[usize]) -> BitField {
    let mut grid = BitField::new(shape).expect("fixture shape must be valid");
    let coords: Vec<_> = grid.coords().collect();
    for coord in coords {
        let sum: i64 = coord.iter().map(|&c| i64::from(c)).sum();
        grid.set(&coord, sum % 2 == 0).expect("in bounds");
    }
    grid
}

/// Every set cell carries `"id"` (its canonical index); every cell on the
/// `x == 0` face carries `"edge" = true`.
pub fn tagged_checkerboard(shape: &[usize]) -> BitField {
    let mut grid = checkerboard(shape);
    let coords: Vec<_> = grid.coords().collect();
    for (index, coord) in coords.iter().enumerate() {
        if grid.get(coord).expect("in bounds") {
            grid.set_property(coord, "id", index as i64)
                .expect("in bounds");
        }
        if coord[0] == 0 {
            grid.set_property(coord, "edge", true).expect("in bounds");
        }
    }
    grid
}

pub fn filled(shape: &[usize]) -> BitField {
    let mut grid = BitField::new(shape).expect("fixture shape must be valid");
    let coords: Vec<_> = grid.coords().collect();
    for coord in coords {
        grid.set(&coord, true).expect("in bounds");
    }
    grid
}

/// An all-false grid with a single set cell.
pub fn single(shape: &[usize], coord: &[i32]) -> BitField {
    let mut grid = BitField::new(shape).expect("fixture shape must be valid");
    grid.set(coord, true).expect("fixture coord must be in bounds");
    grid
}
