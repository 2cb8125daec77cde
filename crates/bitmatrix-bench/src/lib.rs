//! Benchmark profiles for the BitMatrix grid toolkit.
//!
//! - [`reference_grid`]: 32x32x32 random grid (32K cells)
//! - [`temporal_grid`]: 16x16x16x8 random grid (32K cells)
//! - [`tagged_grid`]: reference grid with a property on every 16th cell

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use bitmatrix_core::BitField;
use bitmatrix_pattern::{generate_seeded, PatternKind};

/// Side length of the 3-axis reference grid.
pub const REFERENCE_SIDE: usize = 32;

/// Build the 3-axis reference profile: a seeded random 32³ grid.
pub fn reference_grid(seed: u64) -> BitField {
    generate_seeded(PatternKind::Random, &[REFERENCE_SIDE; 3], seed)
        .expect("reference shape is valid")
}

/// Build the 4-axis profile: a seeded random 16x16x16x8 grid.
pub fn temporal_grid(seed: u64) -> BitField {
    generate_seeded(PatternKind::Random, &[16, 16, 16, 8], seed).expect("temporal shape is valid")
}

/// Reference grid with an integer `"weight"` property on every 16th cell
/// in canonical order, so transforms pay for property moves too.
pub fn tagged_grid(seed: u64) -> BitField {
    let mut grid = reference_grid(seed);
    let coords: Vec<_> = grid.coords().step_by(16).collect();
    for (i, coord) in coords.iter().enumerate() {
        grid.set_property(coord, "weight", i as i64)
            .expect("coords come from the grid");
    }
    grid
}
