//! Kinetic rule selection and per-cell predicates.

use bitmatrix_core::GridError;
use bitmatrix_pattern::wave_value;
use std::fmt;
use std::str::FromStr;

/// A per-cell flip rule.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum KineticKind {
    /// Flip where the sinusoid product of the coordinates is positive.
    Wave,
    /// Flip where `x & y == y & z` (3-axis) or `x & y == z & t` (4-axis).
    Fractal,
    /// Flip where the coordinate sum is a multiple of the rank.
    Recursive,
}

impl KineticKind {
    /// All kinds, in declaration order.
    pub const ALL: [KineticKind; 3] = [Self::Wave, Self::Fractal, Self::Recursive];

    fn name(self) -> &'static str {
        match self {
            Self::Wave => "wave",
            Self::Fractal => "fractal",
            Self::Recursive => "recursive",
        }
    }

    /// Whether the cell at `coord` is flipped by this rule.
    ///
    /// Fails with [`GridError::TypeMismatch`] unless `coord` has 3 or 4
    /// axes.
    pub fn flips(self, coord: &[i32]) -> Result<bool, GridError> {
        let rank = coord.len();
        if !(3..=4).contains(&rank) {
            return Err(GridError::TypeMismatch {
                operation: "kinetic transform",
                expected: "a 3-axis or 4-axis grid",
                ndim: rank,
            });
        }
        Ok(match self {
            Self::Wave => wave_value(coord) > 0.0,
            Self::Fractal => match *coord {
                [x, y, z] => (x & y) == (y & z),
                [x, y, z, t] => (x & y) == (z & t),
                _ => false,
            },
            Self::Recursive => {
                let sum: i64 = coord.iter().map(|&c| i64::from(c)).sum();
                sum % rank as i64 == 0
            }
        })
    }
}

impl fmt::Display for KineticKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for KineticKind {
    type Err = GridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|kind| kind.name() == wanted)
            .ok_or_else(|| GridError::InvalidTransformKind { kind: s.to_owned() })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fractal_rule_per_rank() {
        // 3 & 1 = 1, 1 & 2 = 0
        assert!(!KineticKind::Fractal.flips(&[3, 1, 2]).unwrap());
        assert!(KineticKind::Fractal.flips(&[3, 1, 1]).unwrap());
        // x & y = 2 & 3 = 2; z & t = 6 & 2 = 2
        assert!(KineticKind::Fractal.flips(&[2, 3, 6, 2]).unwrap());
        assert!(!KineticKind::Fractal.flips(&[2, 3, 1, 1]).unwrap());
    }

    #[test]
    fn recursive_rule_uses_rank_as_modulus() {
        assert!(KineticKind::Recursive.flips(&[1, 1, 1]).unwrap());
        assert!(!KineticKind::Recursive.flips(&[1, 1, 0]).unwrap());
        assert!(KineticKind::Recursive.flips(&[1, 1, 1, 1]).unwrap());
        assert!(!KineticKind::Recursive.flips(&[1, 1, 1, 0]).unwrap());
        assert!(KineticKind::Recursive.flips(&[0, 0, 0, 0]).unwrap());
    }

    #[test]
    fn recursive_rule_handles_sums_past_i32() {
        let m = i32::MAX;
        // 2^31 % 3 == 2
        assert!(!KineticKind::Recursive.flips(&[m, 1, 0]).unwrap());
        assert!(KineticKind::Recursive.flips(&[m, m, m]).unwrap());
        assert!(KineticKind::Recursive.flips(&[m, m, m, m]).unwrap());
    }

    #[test]
    fn wave_rule_matches_pattern_wave() {
        assert!(!KineticKind::Wave.flips(&[0, 3, 3]).unwrap());
        assert!(KineticKind::Wave.flips(&[1, 1, 1]).unwrap());
    }

    #[test]
    fn unsupported_rank_is_type_mismatch() {
        assert!(matches!(
            KineticKind::Recursive.flips(&[1, 1]),
            Err(GridError::TypeMismatch { ndim: 2, .. })
        ));
    }

    #[test]
    fn unknown_name_is_invalid_transform_kind() {
        assert_eq!("FRACTAL".parse::<KineticKind>().unwrap(), KineticKind::Fractal);
        assert_eq!(
            "spiral".parse::<KineticKind>().unwrap_err(),
            GridError::InvalidTransformKind {
                kind: "spiral".into()
            }
        );
    }
}
