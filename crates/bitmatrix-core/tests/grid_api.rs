use bitmatrix_core::{BitField, CellMapping, Entanglement, GridError, PropertyValue};

#[test]
fn spatial_and_temporal_share_one_api() {
    for shape in [&[3, 2, 4][..], &[3, 2, 4, 2][..]] {
        let mut grid = BitField::new(shape).unwrap();
        let last: Vec<i32> = shape.iter().map(|&d| d as i32 - 1).collect();
        grid.set(&last, true).unwrap();
        grid.set_property(&last, "corner", true).unwrap();

        assert_eq!(grid.count_ones(), 1);
        assert_eq!(grid.coords().last().unwrap().as_slice(), last.as_slice());
        assert_eq!(grid.property_names(&last).unwrap(), vec!["corner"]);
    }
}

#[test]
fn errors_distinguish_bounds_from_missing_property() {
    let mut grid = BitField::spatial(2, 2, 2).unwrap();
    grid.set_property(&[0, 0, 0], "a", 1i32).unwrap();

    let missing = grid.property(&[0, 0, 0], "b").unwrap_err();
    assert_eq!(missing.to_string(), "property 'b' not found at [0, 0, 0]");

    let outside = grid.property(&[0, 0, 5], "a").unwrap_err();
    assert!(matches!(outside, GridError::OutOfBounds { .. }));
}

#[test]
fn failed_writes_leave_grid_unchanged() {
    let mut grid = BitField::spatial(2, 2, 2).unwrap();
    let before = grid.clone();
    assert!(grid.set(&[2, 0, 0], true).is_err());
    assert!(grid.set_property(&[0, -1, 0], "x", 1i32).is_err());
    assert_eq!(grid, before);
}

#[test]
fn properties_hold_every_value_kind() {
    let mut grid = BitField::spatial(1, 1, 1).unwrap();
    let c = [0, 0, 0];
    grid.set_property(&c, "flag", true).unwrap();
    grid.set_property(&c, "count", 3i64).unwrap();
    grid.set_property(&c, "mass", 1.5).unwrap();
    grid.set_property(&c, "label", "rock").unwrap();
    grid.set_property(&c, "pair", (1i32, "b")).unwrap();

    let props = grid.properties_at(&c).unwrap().unwrap();
    assert_eq!(props.len(), 5);
    assert_eq!(props["mass"], PropertyValue::Float(1.5));
    assert_eq!(props["pair"].to_string(), "(1, b)");
}

#[test]
fn entanglement_label_is_plain_metadata() {
    let partner = BitField::spatial(2, 2, 2).unwrap();
    let mut grid = BitField::spatial(2, 2, 2).unwrap();
    grid.set_entanglement(Some(Entanglement::new(partner.id(), CellMapping::Identity)));

    let label = grid.entanglement().unwrap();
    assert_eq!(label.partner(), partner.id());
    assert_eq!(label.partner_coord(&[1, 0, 1]).as_slice(), &[1, 0, 1]);
    // Labels do not affect equality.
    assert_eq!(grid, partner);

    grid.set_entanglement(None);
    assert!(grid.entanglement().is_none());
}
