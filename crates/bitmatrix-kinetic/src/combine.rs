//! Pairwise grid combination: superposition and entanglement.

use bitmatrix_core::{BitField, CellMapping, Entanglement, GridError};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::debug;

/// Property recording the `(bit_a, bit_b)` pair each superposed cell came from.
pub const SUPERPOSITION: &str = "superposition";

/// Property marking every cell of an entangled grid.
pub const ENTANGLED: &str = "entangled";

/// Blend two grids of identical shape cell by cell.
///
/// Where the bits agree the output keeps that value; where they differ the
/// output takes one boolean draw from `rng`. Cells are visited in canonical
/// order and agreeing cells draw nothing, so a deterministic `rng` gives a
/// deterministic result. Every output cell carries
/// [`SUPERPOSITION`]` = (bit_a, bit_b)`; no other properties are kept.
///
/// Fails with [`GridError::IncompatibleOperands`] if the shapes differ.
pub fn superposition<R: Rng + ?Sized>(
    a: &BitField,
    b: &BitField,
    rng: &mut R,
) -> Result<BitField, GridError> {
    require_same_shape(a, b, "superpose")?;

    let mut out = BitField::new(a.shape())?;
    let mut undecided = 0usize;
    for coord in a.coords() {
        let bit_a = a.get(&coord)?;
        let bit_b = b.get(&coord)?;
        let value = if bit_a == bit_b {
            bit_a
        } else {
            undecided += 1;
            rng.random::<bool>()
        };
        out.set(&coord, value)?;
        out.set_property(&coord, SUPERPOSITION, (bit_a, bit_b))?;
    }

    debug!(shape = ?a.shape(), undecided, ones = out.count_ones(), "superposition");
    Ok(out)
}

/// [`superposition`] with a `ChaCha8Rng` seeded from `seed`.
pub fn superposition_seeded(a: &BitField, b: &BitField, seed: u64) -> Result<BitField, GridError> {
    superposition(a, b, &mut ChaCha8Rng::seed_from_u64(seed))
}

/// Produce linked copies of two grids of identical shape.
///
/// Both copies keep their source's bits and properties, every cell gains
/// [`ENTANGLED`]` = true`, and each copy's
/// [`entanglement`](BitField::entanglement) names the other under the
/// identity cell mapping.
///
/// The link is a label only. Writing to one copy afterwards never changes
/// the other; a caller that wants mirrored edits applies them to both.
pub fn entangle(a: &BitField, b: &BitField) -> Result<(BitField, BitField), GridError> {
    require_same_shape(a, b, "entangle")?;

    let mut left = a.clone();
    let mut right = b.clone();
    for coord in a.coords() {
        left.set_property(&coord, ENTANGLED, true)?;
        right.set_property(&coord, ENTANGLED, true)?;
    }
    left.set_entanglement(Some(Entanglement::new(right.id(), CellMapping::Identity)));
    right.set_entanglement(Some(Entanglement::new(left.id(), CellMapping::Identity)));

    debug!(left = %left.id(), right = %right.id(), shape = ?a.shape(), "entangle");
    Ok((left, right))
}

fn require_same_shape(a: &BitField, b: &BitField, verb: &str) -> Result<(), GridError> {
    if a.shape() == b.shape() {
        Ok(())
    } else {
        Err(GridError::IncompatibleOperands {
            reason: format!(
                "cannot {verb} grids of shape {:?} and {:?}",
                a.shape(),
                b.shape()
            ),
        })
    }
}
