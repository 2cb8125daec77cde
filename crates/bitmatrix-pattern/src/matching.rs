//! Sliding-window pattern search.
//!
//! Offsets are visited in canonical order (first axis slowest), so exact
//! matches come back in that order and approximate matches with equal
//! similarity keep it.

use crate::config::MatchConfig;
use bitmatrix_core::{BitField, Coord, CoordIter, GridError, Shape};
use tracing::debug;

/// One approximate-match result.
#[derive(Clone, Debug, PartialEq)]
pub struct Match {
    /// Position of the pattern's origin cell within the searched grid.
    pub offset: Coord,
    /// Fraction of pattern cells whose bit agrees with the grid, in `[0, 1]`.
    pub similarity: f64,
}

/// Every offset at which `pattern` matches `grid` bit for bit.
///
/// Fails with [`GridError::IncompatiblePattern`] if the grids differ in
/// rank or `pattern` is longer than `grid` along any axis.
///
/// # Examples
///
/// ```
/// use bitmatrix_core::BitField;
/// use bitmatrix_pattern::find_exact;
///
/// let grid = BitField::new(&[3, 3, 3]).unwrap();
/// let hits = find_exact(&grid, &grid).unwrap();
/// assert_eq!(hits.len(), 1);
/// assert_eq!(hits[0].as_slice(), &[0, 0, 0]);
/// ```
pub fn find_exact(grid: &BitField, pattern: &BitField) -> Result<Vec<Coord>, GridError> {
    let offsets = offset_space(grid, pattern)?;
    let mut found = Vec::new();
    for offset in CoordIter::canonical(&offsets) {
        if pattern
            .coords()
            .all(|local| cell_at(grid, &offset, &local) == cell_at(pattern, &[], &local))
        {
            found.push(offset);
        }
    }
    debug!(grid = ?grid.shape(), pattern = ?pattern.shape(), found = found.len(), "find_exact");
    Ok(found)
}

/// Offsets where at least `threshold` of the pattern's bits agree with the
/// grid, best first.
///
/// Fails with [`GridError::InvalidArgument`] unless `threshold` lies in
/// `[0, 1]`, and with [`GridError::IncompatiblePattern`] as for
/// [`find_exact`].
pub fn find_approximate(
    grid: &BitField,
    pattern: &BitField,
    threshold: f64,
) -> Result<Vec<Match>, GridError> {
    let config = MatchConfig::builder().threshold(threshold).build()?;
    find_with_config(grid, pattern, &config)
}

/// Approximate search driven by a [`MatchConfig`].
///
/// Results are sorted by descending similarity; ties keep canonical offset
/// order. With a limit set, only the first `limit` results are kept.
pub fn find_with_config(
    grid: &BitField,
    pattern: &BitField,
    config: &MatchConfig,
) -> Result<Vec<Match>, GridError> {
    let offsets = offset_space(grid, pattern)?;
    let total = pattern.cell_count() as f64;

    let mut matches: Vec<Match> = CoordIter::canonical(&offsets)
        .filter_map(|offset| {
            let similarity = agreeing_cells(grid, pattern, &offset) as f64 / total;
            (similarity >= config.threshold()).then_some(Match { offset, similarity })
        })
        .collect();
    // sort_by is stable: equal similarities keep discovery order.
    matches.sort_by(|a, b| b.similarity.total_cmp(&a.similarity));
    if let Some(limit) = config.limit() {
        matches.truncate(limit);
    }

    debug!(
        grid = ?grid.shape(),
        pattern = ?pattern.shape(),
        threshold = config.threshold(),
        found = matches.len(),
        "find_approximate"
    );
    Ok(matches)
}

/// Similarity of `pattern` placed at `offset` within `grid`.
///
/// Fails with [`GridError::IncompatiblePattern`] as for [`find_exact`] and
/// with [`GridError::BlockOutOfBounds`] if the pattern does not fit at
/// `offset`.
pub fn similarity_at(
    grid: &BitField,
    pattern: &BitField,
    offset: &[i32],
) -> Result<f64, GridError> {
    let offsets = offset_space(grid, pattern)?;
    let fits = offset.len() == offsets.len()
        && offset
            .iter()
            .zip(&offsets)
            .all(|(&o, &n)| o >= 0 && (o as usize) < n);
    if !fits {
        return Err(GridError::BlockOutOfBounds {
            origin: Coord::from_slice(offset),
            extent: Shape::from_slice(pattern.shape()),
            shape: Shape::from_slice(grid.shape()),
        });
    }
    Ok(agreeing_cells(grid, pattern, offset) as f64 / pattern.cell_count() as f64)
}

/// Number of valid offsets along each axis.
fn offset_space(grid: &BitField, pattern: &BitField) -> Result<Shape, GridError> {
    if grid.ndim() != pattern.ndim() {
        return Err(GridError::IncompatiblePattern {
            reason: format!(
                "cannot search a {}-axis grid for a {}-axis pattern",
                grid.ndim(),
                pattern.ndim()
            ),
        });
    }
    if let Some(axis) = (0..grid.ndim()).find(|&a| pattern.shape()[a] > grid.shape()[a]) {
        return Err(GridError::IncompatiblePattern {
            reason: format!(
                "pattern shape {:?} exceeds grid shape {:?} on axis {axis}",
                pattern.shape(),
                grid.shape()
            ),
        });
    }
    Ok(grid
        .shape()
        .iter()
        .zip(pattern.shape())
        .map(|(&g, &p)| g - p + 1)
        .collect())
}

fn agreeing_cells(grid: &BitField, pattern: &BitField, offset: &[i32]) -> usize {
    pattern
        .coords()
        .filter(|local| cell_at(grid, offset, local) == cell_at(pattern, &[], local))
        .count()
}

/// Bit at `offset + local`; an empty offset reads `local` directly.
/// Callers only pass in-bounds positions.
fn cell_at(grid: &BitField, offset: &[i32], local: &[i32]) -> bool {
    let coord: Coord = if offset.is_empty() {
        Coord::from_slice(local)
    } else {
        local.iter().zip(offset).map(|(&l, &o)| l + o).collect()
    };
    grid.get(&coord).unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use bitmatrix_test_utils::fixtures;

    fn coords(list: &[&[i32]]) -> Vec<Coord> {
        list.iter().map(|c| Coord::from_slice(c)).collect()
    }

    #[test]
    fn grid_matches_itself_only_at_origin() {
        let g = fixtures::tagged_checkerboard(&[3, 4, 2]);
        assert_eq!(find_exact(&g, &g).unwrap(), coords(&[&[0, 0, 0]]));
    }

    #[test]
    fn single_cell_pattern_finds_every_set_cell() {
        let grid = fixtures::checkerboard(&[2, 2, 1]);
        let pattern = fixtures::filled(&[1, 1, 1]);
        assert_eq!(
            find_exact(&grid, &pattern).unwrap(),
            coords(&[&[0, 0, 0], &[1, 1, 0]])
        );
    }

    #[test]
    fn exact_offsets_are_canonical_order() {
        let grid = fixtures::filled(&[3, 2, 2]);
        let pattern = fixtures::filled(&[2, 1, 2]);
        assert_eq!(
            find_exact(&grid, &pattern).unwrap(),
            coords(&[&[0, 0, 0], &[0, 1, 0], &[1, 0, 0], &[1, 1, 0]])
        );
    }

    #[test]
    fn incompatible_patterns_rejected() {
        let grid = BitField::spatial(3, 3, 3).unwrap();
        let big = BitField::spatial(3, 4, 3).unwrap();
        let temporal = BitField::temporal(1, 1, 1, 1).unwrap();
        assert!(matches!(
            find_exact(&grid, &big),
            Err(GridError::IncompatiblePattern { .. })
        ));
        assert!(matches!(
            find_approximate(&grid, &temporal, 0.5),
            Err(GridError::IncompatiblePattern { .. })
        ));
    }

    #[test]
    fn threshold_zero_returns_every_offset() {
        let grid = fixtures::checkerboard(&[4, 3, 2]);
        let pattern = fixtures::filled(&[2, 2, 1]);
        let all = find_approximate(&grid, &pattern, 0.0).unwrap();
        assert_eq!(all.len(), 3 * 2 * 2);
    }

    #[test]
    fn threshold_one_equals_exact() {
        let grid = fixtures::checkerboard(&[4, 4, 2]);
        let pattern = fixtures::checkerboard(&[2, 2, 2]);
        let exact = find_exact(&grid, &pattern).unwrap();
        let approx: Vec<Coord> = find_approximate(&grid, &pattern, 1.0)
            .unwrap()
            .into_iter()
            .map(|m| m.offset)
            .collect();
        assert_eq!(approx, exact);
        assert!(!exact.is_empty());
    }

    #[test]
    fn approximate_sorted_descending_with_stable_ties() {
        // 1-D strip along x: pattern [1, 1] over grid [1, 1, 0, 1].
        let mut grid = BitField::spatial(4, 1, 1).unwrap();
        for x in [0, 1, 3] {
            grid.set(&[x, 0, 0], true).unwrap();
        }
        let pattern = fixtures::filled(&[2, 1, 1]);
        let found = find_approximate(&grid, &pattern, 0.0).unwrap();
        let summary: Vec<(i32, f64)> = found.iter().map(|m| (m.offset[0], m.similarity)).collect();
        assert_eq!(summary, vec![(0, 1.0), (1, 0.5), (2, 0.5)]);
    }

    #[test]
    fn invalid_threshold_rejected() {
        let g = BitField::spatial(2, 2, 2).unwrap();
        for t in [-0.1, 1.5] {
            assert!(matches!(
                find_approximate(&g, &g, t),
                Err(GridError::InvalidArgument { .. })
            ));
        }
    }

    #[test]
    fn config_limit_keeps_best() {
        let grid = fixtures::checkerboard(&[4, 4, 2]);
        let pattern = fixtures::checkerboard(&[2, 2, 2]);
        let cfg = MatchConfig::builder().threshold(0.0).limit(2).build().unwrap();
        let found = find_with_config(&grid, &pattern, &cfg).unwrap();
        assert_eq!(found.len(), 2);
        assert_eq!(found[0].similarity, 1.0);
    }

    #[test]
    fn similarity_at_scores_single_offset() {
        let grid = fixtures::checkerboard(&[3, 3, 3]);
        let pattern = fixtures::checkerboard(&[2, 2, 2]);
        assert_eq!(similarity_at(&grid, &pattern, &[0, 0, 0]).unwrap(), 1.0);
        assert_eq!(similarity_at(&grid, &pattern, &[1, 0, 0]).unwrap(), 0.0);
        assert!(matches!(
            similarity_at(&grid, &pattern, &[2, 0, 0]),
            Err(GridError::BlockOutOfBounds { .. })
        ));
    }
}
