//! Copy-then-flip kinetic passes.

use crate::kind::KineticKind;
use bitmatrix_core::{BitField, GridError};
use tracing::debug;

/// Apply `kind` to a copy of `grid`: every cell whose coordinates satisfy
/// the rule has its bit inverted. Properties are carried unchanged.
pub fn kinetic_transform(grid: &BitField, kind: KineticKind) -> Result<BitField, GridError> {
    let mut out = grid.clone();
    let mut flipped = 0usize;
    for coord in grid.coords() {
        if kind.flips(&coord)? {
            out.set(&coord, !grid.get(&coord)?)?;
            flipped += 1;
        }
    }
    debug!(%kind, shape = ?grid.shape(), flipped, "kinetic transform");
    Ok(out)
}

/// Apply several kinetic transforms in order.
///
/// An empty sequence returns an unmodified copy.
pub fn kinetic_sequence(grid: &BitField, kinds: &[KineticKind]) -> Result<BitField, GridError> {
    kinds
        .iter()
        .try_fold(grid.clone(), |acc, &kind| kinetic_transform(&acc, kind))
}

#[cfg(test)]
mod tests {
    use super::*;
    use bitmatrix_test_utils::fixtures;

    #[test]
    fn recursive_flips_expected_cells() {
        let grid = BitField::spatial(3, 3, 3).unwrap();
        let out = kinetic_transform(&grid, KineticKind::Recursive).unwrap();
        assert!(out.get(&[0, 0, 0]).unwrap());
        assert!(out.get(&[1, 1, 1]).unwrap());
        assert!(!out.get(&[1, 0, 0]).unwrap());
        // 9 of the 27 coordinate sums are multiples of 3.
        assert_eq!(out.count_ones(), 9);
    }

    #[test]
    fn flipping_inverts_set_bits() {
        let grid = fixtures::filled(&[3, 3, 3]);
        let out = kinetic_transform(&grid, KineticKind::Recursive).unwrap();
        assert!(!out.get(&[0, 0, 0]).unwrap());
        assert_eq!(out.count_ones(), 27 - 9);
    }

    #[test]
    fn same_rule_twice_is_identity() {
        let grid = fixtures::tagged_checkerboard(&[4, 3, 2, 2]);
        for kind in KineticKind::ALL {
            let twice = kinetic_sequence(&grid, &[kind, kind]).unwrap();
            assert_eq!(twice, grid, "{kind}");
        }
    }

    #[test]
    fn input_and_properties_untouched() {
        let grid = fixtures::tagged_checkerboard(&[3, 3, 3]);
        let before = grid.clone();
        let out = kinetic_transform(&grid, KineticKind::Fractal).unwrap();
        assert_eq!(grid, before);
        assert_eq!(
            out.property_names(&[0, 0, 0]).unwrap(),
            grid.property_names(&[0, 0, 0]).unwrap()
        );
    }

    #[test]
    fn sequence_applies_in_order() {
        let grid = fixtures::checkerboard(&[4, 4, 4]);
        let chained = kinetic_sequence(&grid, &[KineticKind::Wave, KineticKind::Fractal]).unwrap();
        let stepwise = kinetic_transform(
            &kinetic_transform(&grid, KineticKind::Wave).unwrap(),
            KineticKind::Fractal,
        )
        .unwrap();
        assert_eq!(chained, stepwise);
        assert_eq!(kinetic_sequence(&grid, &[]).unwrap(), grid);
    }
}
