//! Odometer iteration over every coordinate of a shape.

use crate::id::{Coord, Shape};
use smallvec::smallvec;

/// Iterator over every coordinate of a shape.
///
/// Two orders are supported:
///
/// - [`CoordIter::canonical`]: lexicographic, first axis slowest and last
///   axis fastest. This is the storage order of [`BitField`](crate::BitField)
///   and the iteration order every transform and search uses, so ties
///   ("last write wins", discovery order) are resolved deterministically.
/// - [`CoordIter::linear`]: first axis fastest and last axis slowest, i.e.
///   row by row, layer by layer, frame by frame. Used for linear bit
///   sequences.
///
/// A shape with a zero-length axis yields nothing.
#[derive(Clone, Debug)]
pub struct CoordIter {
    shape: Shape,
    next: Option<Coord>,
    remaining: usize,
    first_axis_fastest: bool,
}

impl CoordIter {
    /// Lexicographic order, last axis fastest.
    pub fn canonical(shape: &[usize]) -> Self {
        Self::with_order(shape, false)
    }

    /// Linear order, first axis fastest.
    pub fn linear(shape: &[usize]) -> Self {
        Self::with_order(shape, true)
    }

    fn with_order(shape: &[usize], first_axis_fastest: bool) -> Self {
        let remaining: usize = if shape.is_empty() {
            0
        } else {
            shape.iter().product()
        };
        let next: Option<Coord> = (remaining > 0).then(|| smallvec![0; shape.len()]);
        Self {
            shape: Shape::from_slice(shape),
            next,
            remaining,
            first_axis_fastest,
        }
    }

    /// Advance `coord` one step; returns `false` once the odometer rolls over.
    fn advance(&self, coord: &mut Coord) -> bool {
        let n = self.shape.len();
        for step in 0..n {
            let axis = if self.first_axis_fastest {
                step
            } else {
                n - 1 - step
            };
            coord[axis] += 1;
            if (coord[axis] as usize) < self.shape[axis] {
                return true;
            }
            coord[axis] = 0;
        }
        false
    }
}

impl Iterator for CoordIter {
    type Item = Coord;

    fn next(&mut self) -> Option<Coord> {
        let current = self.next.take()?;
        let mut following = current.clone();
        if self.advance(&mut following) {
            self.next = Some(following);
        }
        self.remaining -= 1;
        Some(current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for CoordIter {}
