//! Named rotation axes and mirror planes.

use bitmatrix_core::GridError;
use std::fmt;
use std::str::FromStr;

/// A spatial rotation axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Axis {
    /// First spatial axis.
    X,
    /// Second spatial axis.
    Y,
    /// Third spatial axis.
    Z,
}

impl Axis {
    /// All axes in coordinate order.
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];

    /// Position of this axis in a coordinate tuple.
    pub fn index(self) -> usize {
        match self {
            Self::X => 0,
            Self::Y => 1,
            Self::Z => 2,
        }
    }

    fn name(self) -> &'static str {
        match self {
            Self::X => "x",
            Self::Y => "y",
            Self::Z => "z",
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Axis {
    type Err = GridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "x" => Ok(Self::X),
            "y" => Ok(Self::Y),
            "z" => Ok(Self::Z),
            _ => Err(GridError::InvalidArgument {
                reason: format!("unknown axis '{s}', expected one of x, y, z"),
            }),
        }
    }
}

/// A mirror plane, named by the two axes it contains.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Plane {
    /// The x-y plane; mirroring flips the z axis.
    Xy,
    /// The x-z plane; mirroring flips the y axis.
    Xz,
    /// The y-z plane; mirroring flips the x axis.
    Yz,
}

impl Plane {
    /// All planes.
    pub const ALL: [Plane; 3] = [Plane::Xy, Plane::Xz, Plane::Yz];

    /// The axis perpendicular to this plane, i.e. the one a mirror flips.
    pub fn normal(self) -> Axis {
        match self {
            Self::Xy => Axis::Z,
            Self::Xz => Axis::Y,
            Self::Yz => Axis::X,
        }
    }

    fn name(self) -> &'static str {
        match self {
            Self::Xy => "xy",
            Self::Xz => "xz",
            Self::Yz => "yz",
        }
    }
}

impl fmt::Display for Plane {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Plane {
    type Err = GridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "xy" => Ok(Self::Xy),
            "xz" => Ok(Self::Xz),
            "yz" => Ok(Self::Yz),
            _ => Err(GridError::InvalidArgument {
                reason: format!("unknown plane '{s}', expected one of xy, xz, yz"),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn axis_parses_case_insensitively() {
        assert_eq!("X".parse::<Axis>().unwrap(), Axis::X);
        assert_eq!(" z ".parse::<Axis>().unwrap(), Axis::Z);
        assert!(matches!(
            "w".parse::<Axis>(),
            Err(GridError::InvalidArgument { .. })
        ));
    }

    #[test]
    fn plane_normal_matches_flipped_axis() {
        assert_eq!(Plane::Xy.normal(), Axis::Z);
        assert_eq!(Plane::Xz.normal(), Axis::Y);
        assert_eq!(Plane::Yz.normal(), Axis::X);
    }

    #[test]
    fn display_round_trips_through_from_str() {
        for axis in Axis::ALL {
            assert_eq!(axis.to_string().parse::<Axis>().unwrap(), axis);
        }
        for plane in Plane::ALL {
            assert_eq!(plane.to_string().parse::<Plane>().unwrap(), plane);
        }
        assert!("zx".parse::<Plane>().is_err());
    }
}
