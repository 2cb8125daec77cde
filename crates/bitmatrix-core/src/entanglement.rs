//! Passive entanglement labels linking two grids.

use crate::id::{Coord, GridId};

/// How cells of one entangled grid correspond to cells of its partner.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum CellMapping {
    /// Each coordinate corresponds to the same coordinate in the partner.
    Identity,
}

impl CellMapping {
    /// The partner coordinate corresponding to `coord`.
    pub fn map(&self, coord: &[i32]) -> Coord {
        match self {
            Self::Identity => Coord::from_slice(coord),
        }
    }
}

/// Metadata recording that a grid is entangled with a partner grid.
///
/// This is a declared linkage, not a synchronization mechanism: writing to
/// one grid never updates its partner. Collaborators that want mirrored
/// edits must look up [`partner`](Self::partner) and apply the change
/// themselves.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Entanglement {
    partner: GridId,
    mapping: CellMapping,
}

impl Entanglement {
    /// Label a grid as entangled with `partner` under `mapping`.
    pub fn new(partner: GridId, mapping: CellMapping) -> Self {
        Self { partner, mapping }
    }

    /// ID of the partner grid.
    pub fn partner(&self) -> GridId {
        self.partner
    }

    /// Cell correspondence with the partner grid.
    pub fn mapping(&self) -> CellMapping {
        self.mapping
    }

    /// The partner coordinate linked to `coord`.
    pub fn partner_coord(&self, coord: &[i32]) -> Coord {
        self.mapping.map(coord)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity_mapping_returns_same_coord() {
        let e = Entanglement::new(GridId::next(), CellMapping::Identity);
        assert_eq!(e.partner_coord(&[1, 2, 3]).as_slice(), &[1, 2, 3]);
        assert_eq!(e.mapping(), CellMapping::Identity);
    }
}
