//! Grid identity and the [`Coord`] / [`Shape`] type aliases.

use smallvec::SmallVec;
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

/// Counter for unique [`GridId`] allocation.
static GRID_ID_COUNTER: AtomicU64 = AtomicU64::new(1);

/// Unique per-instance identifier for a [`BitField`](crate::BitField).
///
/// Allocated from a monotonic atomic counter via [`GridId::next`]. Two
/// distinct grids always have different IDs, even if their contents are
/// identical. Entanglement labels refer to partner grids by this ID.
///
/// Cloning a grid allocates a fresh ID: the clone is a new, independently
/// mutable grid and must not be mistaken for its source.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GridId(u64);

impl GridId {
    /// Allocate a fresh, unique grid ID.
    ///
    /// Each call returns a new ID that has never been returned before
    /// within this process. Thread-safe.
    pub fn next() -> Self {
        Self(GRID_ID_COUNTER.fetch_add(1, Ordering::Relaxed))
    }

    /// The raw counter value.
    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for GridId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A coordinate within a grid, one signed component per axis.
///
/// Uses `SmallVec<[i32; 4]>` to avoid heap allocation for the 3-axis
/// (spatial) and 4-axis (spatial + temporal) grids. Components are signed so
/// that transforms can produce out-of-range candidates that are then
/// rejected by bounds checks rather than wrapping.
pub type Coord = SmallVec<[i32; 4]>;

/// Extent of a grid, one positive length per axis.
pub type Shape = SmallVec<[usize; 4]>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grid_ids_are_unique_and_increasing() {
        let a = GridId::next();
        let b = GridId::next();
        assert_ne!(a, b);
        assert!(b > a);
    }

    #[test]
    fn grid_id_display_is_raw_value() {
        let id = GridId::next();
        assert_eq!(id.to_string(), id.get().to_string());
    }
}
