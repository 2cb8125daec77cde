use bitmatrix_core::Coord;
use bitmatrix_pattern::{
    find_approximate, find_exact, generate_seeded, generate_with_rng, PatternKind,
};
use bitmatrix_test_utils::{strategies, ConstRng};
use bitmatrix_transform::extract_block;
use proptest::prelude::*;

#[test]
fn cube_on_four_by_four_by_two() {
    let cube = generate_with_rng(PatternKind::Cube, &[4, 4, 2], &mut ConstRng::always(false))
        .unwrap();
    assert!(cube.get(&[0, 0, 0]).unwrap());
    assert!(cube.get(&[3, 3, 1]).unwrap());
    assert!(cube.get(&[1, 2, 0]).unwrap());
}

#[test]
fn generated_sub_block_is_found_at_its_origin() {
    let grid = generate_seeded(PatternKind::Random, &[6, 6, 6], 7).unwrap();
    let pattern = extract_block(&grid, &[2, 3, 1], &[3, 2, 3]).unwrap();
    let hits = find_exact(&grid, &pattern).unwrap();
    assert!(hits.contains(&Coord::from_slice(&[2, 3, 1])));
}

proptest! {
    #[test]
    fn every_grid_matches_itself_once(grid in strategies::arb_grid()) {
        let hits = find_exact(&grid, &grid).unwrap();
        prop_assert_eq!(hits, vec![Coord::from_elem(0, grid.ndim())]);
    }

    #[test]
    fn zero_threshold_visits_every_offset(
        grid in strategies::arb_grid_with(Just(vec![4, 4, 3])),
        pattern in strategies::arb_grid_with(Just(vec![2, 3, 1])),
    ) {
        let all = find_approximate(&grid, &pattern, 0.0).unwrap();
        prop_assert_eq!(all.len(), 3 * 2 * 3);
        for pair in all.windows(2) {
            prop_assert!(pair[0].similarity >= pair[1].similarity);
        }
    }

    #[test]
    fn full_threshold_agrees_with_exact(
        grid in strategies::arb_grid_with(Just(vec![3, 3, 3])),
        pattern in strategies::arb_grid_with(Just(vec![1, 2, 1])),
    ) {
        let exact = find_exact(&grid, &pattern).unwrap();
        let approx: Vec<Coord> = find_approximate(&grid, &pattern, 1.0)
            .unwrap()
            .into_iter()
            .map(|m| m.offset)
            .collect();
        prop_assert_eq!(approx, exact);
    }
}
