//! Rounding of fractional coordinates onto the integer lattice.

/// Round a fractional coordinate to the nearest lattice index.
///
/// Ties round half away from zero (`2.5 -> 3`, `-0.5 -> -1`). Returns
/// `None` for non-finite values and values outside the `i32` range, which
/// callers treat as out of bounds.
pub fn to_index(value: f64) -> Option<i32> {
    let rounded = value.round();
    if !rounded.is_finite() || rounded < i32::MIN as f64 || rounded > i32::MAX as f64 {
        return None;
    }
    Some(rounded as i32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ties_round_away_from_zero() {
        assert_eq!(to_index(0.5), Some(1));
        assert_eq!(to_index(1.5), Some(2));
        assert_eq!(to_index(2.5), Some(3));
        assert_eq!(to_index(-0.5), Some(-1));
        assert_eq!(to_index(-1.5), Some(-2));
    }

    #[test]
    fn non_ties_round_to_nearest() {
        assert_eq!(to_index(1.49), Some(1));
        assert_eq!(to_index(1.51), Some(2));
        assert_eq!(to_index(-0.49), Some(0));
        // cos(90 deg) is not exactly zero.
        assert_eq!(to_index(6.123e-17), Some(0));
    }

    #[test]
    fn unrepresentable_values_are_none() {
        assert_eq!(to_index(f64::NAN), None);
        assert_eq!(to_index(f64::INFINITY), None);
        assert_eq!(to_index(1e12), None);
    }
}
