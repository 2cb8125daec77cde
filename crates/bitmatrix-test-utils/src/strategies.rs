//! Proptest strategies for grids.

use bitmatrix_core::BitField;
use proptest::prelude::*;

/// Largest axis length generated; keeps grids small enough for exhaustive
/// per-cell checks.
pub const MAX_TEST_DIM: usize = 5;

/// A shape with 3 or 4 axes, each `1..=MAX_TEST_DIM`.
pub fn arb_shape() -> impl Strategy<Value = Vec<usize>> {
    prop::collection::vec(1..=MAX_TEST_DIM, 3..=4)
}

/// A 3-axis shape, each axis `1..=MAX_TEST_DIM`.
pub fn arb_spatial_shape() -> impl Strategy<Value = Vec<usize>> {
    prop::collection::vec(1..=MAX_TEST_DIM, 3)
}

/// A grid of the given shape strategy with random bits and up to four
/// integer properties on random cells.
pub fn arb_grid_with(
    shape: impl Strategy<Value = Vec<usize>>,
) -> impl Strategy<Value = BitField> {
    shape.prop_flat_map(|shape| {
        let cells: usize = shape.iter().product();
        (
            Just(shape),
            prop::collection::vec(any::<bool>(), cells),
            prop::collection::vec((0..cells, any::<i64>()), 0..=4),
        )
            .prop_map(|(shape, bits, props)| {
                let mut grid = BitField::new(&shape).expect("strategy shapes are valid");
                let coords: Vec<_> = grid.coords().collect();
                for (coord, bit) in coords.iter().zip(bits) {
                    grid.set(coord, bit).expect("in bounds");
                }
                for (cell, value) in props {
                    grid.set_property(&coords[cell], "weight", value)
                        .expect("in bounds");
                }
                grid
            })
    })
}

/// Any 3-axis or 4-axis grid.
pub fn arb_grid() -> impl Strategy<Value = BitField> {
    arb_grid_with(arb_shape())
}

/// Any 3-axis grid.
pub fn arb_spatial_grid() -> impl Strategy<Value = BitField> {
    arb_grid_with(arb_spatial_shape())
}
