//! Canonical pattern generators.

use bitmatrix_core::{BitField, GridError};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::fmt;
use std::str::FromStr;
use tracing::debug;

/// Kind of pattern produced by [`generate`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PatternKind {
    /// Hollow shell: every cell on a boundary face.
    Cube,
    /// Spherical shell of radius `min(shape) / 2` about the center.
    Sphere,
    /// Cells where [`wave_value`] is strictly positive.
    Wave,
    /// Each cell independently true with probability 0.5.
    Random,
}

impl PatternKind {
    /// All kinds, in declaration order.
    pub const ALL: [PatternKind; 4] = [Self::Cube, Self::Sphere, Self::Wave, Self::Random];

    fn name(self) -> &'static str {
        match self {
            Self::Cube => "cube",
            Self::Sphere => "sphere",
            Self::Wave => "wave",
            Self::Random => "random",
        }
    }
}

impl fmt::Display for PatternKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PatternKind {
    type Err = GridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|kind| kind.name() == wanted)
            .ok_or_else(|| GridError::InvalidArgument {
                reason: format!("unknown pattern '{s}', expected one of cube, sphere, wave, random"),
            })
    }
}

/// Product of `sin(c / 2)` over even axes and `cos(c / 2)` over odd axes.
///
/// For a 3-axis coordinate this is `sin(x/2) cos(y/2) sin(z/2)`; a 4-axis
/// coordinate adds a `cos(t/2)` factor.
pub fn wave_value(coord: &[i32]) -> f64 {
    coord
        .iter()
        .enumerate()
        .map(|(axis, &c)| {
            let half = f64::from(c) / 2.0;
            if axis % 2 == 0 {
                half.sin()
            } else {
                half.cos()
            }
        })
        .product()
}

/// Generate a pattern using the thread-local random source.
pub fn generate(kind: PatternKind, shape: &[usize]) -> Result<BitField, GridError> {
    generate_with_rng(kind, shape, &mut rand::rng())
}

/// Generate a pattern reproducibly from `seed`.
pub fn generate_seeded(kind: PatternKind, shape: &[usize], seed: u64) -> Result<BitField, GridError> {
    generate_with_rng(kind, shape, &mut ChaCha8Rng::seed_from_u64(seed))
}

/// Generate a pattern of `kind` and `shape`.
///
/// Only [`PatternKind::Random`] draws from `rng`, one boolean per cell in
/// canonical order. Fails with [`GridError::InvalidShape`] for an invalid
/// shape.
///
/// # Examples
///
/// ```
/// use bitmatrix_pattern::{generate_with_rng, PatternKind};
///
/// let cube = generate_with_rng(PatternKind::Cube, &[4, 4, 2], &mut rand::rng()).unwrap();
/// assert!(cube.get(&[0, 0, 0]).unwrap());
/// ```
pub fn generate_with_rng<R: Rng + ?Sized>(
    kind: PatternKind,
    shape: &[usize],
    rng: &mut R,
) -> Result<BitField, GridError> {
    let mut grid = BitField::new(shape)?;
    let center: Vec<f64> = shape.iter().map(|&d| (d as f64 - 1.0) / 2.0).collect();
    let radius = shape.iter().copied().min().unwrap_or(0) as f64 / 2.0;

    let coords: Vec<_> = grid.coords().collect();
    for coord in coords {
        let on = match kind {
            PatternKind::Cube => coord
                .iter()
                .zip(shape)
                .any(|(&c, &d)| c == 0 || c as usize == d - 1),
            PatternKind::Sphere => {
                let distance = coord
                    .iter()
                    .zip(&center)
                    .map(|(&c, &m)| (f64::from(c) - m).powi(2))
                    .sum::<f64>()
                    .sqrt();
                (distance - radius).abs() < 0.5
            }
            PatternKind::Wave => wave_value(&coord) > 0.0,
            PatternKind::Random => rng.random::<bool>(),
        };
        if on {
            grid.set(&coord, true)?;
        }
    }

    debug!(%kind, shape = ?shape, ones = grid.count_ones(), "generate");
    Ok(grid)
}

#[cfg(test)]
mod tests {
    use super::*;
    use bitmatrix_test_utils::ConstRng;

    #[test]
    fn cube_is_a_hollow_shell() {
        let cube = generate_seeded(PatternKind::Cube, &[4, 4, 2], 0).unwrap();
        assert!(cube.get(&[0, 0, 0]).unwrap());
        // z has length 2, so every cell touches a z face.
        assert_eq!(cube.count_ones(), 32);

        let cube = generate_seeded(PatternKind::Cube, &[4, 4, 4], 0).unwrap();
        assert!(!cube.get(&[1, 2, 1]).unwrap());
        assert_eq!(cube.count_ones(), 64 - 8);
    }

    #[test]
    fn temporal_cube_includes_time_faces() {
        let cube = generate_seeded(PatternKind::Cube, &[3, 3, 3, 3], 0).unwrap();
        assert!(cube.get(&[1, 1, 1, 0]).unwrap());
        assert!(!cube.get(&[1, 1, 1, 1]).unwrap());
    }

    #[test]
    fn sphere_is_a_shell_around_center() {
        let sphere = generate_seeded(PatternKind::Sphere, &[7, 7, 7], 0).unwrap();
        // radius 3.5, center (3, 3, 3)
        assert!(!sphere.get(&[3, 3, 3]).unwrap());
        assert!(sphere.get(&[0, 2, 3]).unwrap());
        assert!(!sphere.get(&[0, 0, 0]).unwrap());
        // distance 3.0 is exactly 0.5 from the radius: excluded
        assert!(!sphere.get(&[3, 3, 0]).unwrap());
    }

    #[test]
    fn wave_matches_sinusoid_sign() {
        let wave = generate_seeded(PatternKind::Wave, &[6, 6, 6], 0).unwrap();
        for c in wave.coords() {
            assert_eq!(wave.get(&c).unwrap(), wave_value(&c) > 0.0);
        }
        // Any zero coordinate on an even axis zeroes the product.
        assert!(!wave.get(&[0, 1, 1]).unwrap());
        assert!(wave.get(&[1, 1, 1]).unwrap());
    }

    #[test]
    fn wave_value_adds_time_factor() {
        let spatial = wave_value(&[1, 2, 3]);
        let temporal = wave_value(&[1, 2, 3, 4]);
        assert!((temporal - spatial * 2.0f64.cos()).abs() < 1e-12);
    }

    #[test]
    fn random_follows_injected_source() {
        let all = generate_with_rng(PatternKind::Random, &[2, 3, 2], &mut ConstRng::always(true))
            .unwrap();
        assert_eq!(all.count_ones(), 12);

        let mut rng = ConstRng::always(false);
        let none = generate_with_rng(PatternKind::Random, &[2, 3, 2], &mut rng).unwrap();
        assert_eq!(none.count_ones(), 0);
        assert_eq!(rng.draws(), 12);
    }

    #[test]
    fn seeded_random_is_reproducible() {
        let a = generate_seeded(PatternKind::Random, &[4, 4, 4], 42).unwrap();
        let b = generate_seeded(PatternKind::Random, &[4, 4, 4], 42).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn kind_parses_from_name() {
        assert_eq!("Sphere".parse::<PatternKind>().unwrap(), PatternKind::Sphere);
        for kind in PatternKind::ALL {
            assert_eq!(kind.to_string().parse::<PatternKind>().unwrap(), kind);
        }
        assert!(matches!(
            "torus".parse::<PatternKind>(),
            Err(GridError::InvalidArgument { .. })
        ));
    }

    #[test]
    fn invalid_shape_is_rejected() {
        assert!(matches!(
            generate_seeded(PatternKind::Cube, &[4, 4], 0),
            Err(GridError::InvalidShape { .. })
        ));
    }
}
