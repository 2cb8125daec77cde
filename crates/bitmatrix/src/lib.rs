//! BitMatrix: dense 3D/4D bitfield grids with per-cell properties.
//!
//! This is the top-level facade crate that re-exports the public API from all
//! BitMatrix sub-crates. For most users, adding `bitmatrix` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use bitmatrix::prelude::*;
//!
//! // A 4×4×2 hollow cube, mirrored and searched for its own corner.
//! let cube = generate_seeded(PatternKind::Cube, &[4, 4, 2], 0).unwrap();
//! assert!(cube.get(&[0, 0, 0]).unwrap());
//!
//! let flipped = mirror(&cube, Plane::Xy).unwrap();
//! assert_eq!(flipped, cube);
//!
//! let corner = extract_block(&cube, &[0, 0, 0], &[2, 2, 2]).unwrap();
//! let hits = find_exact(&cube, &corner).unwrap();
//! assert_eq!(hits[0].as_slice(), &[0, 0, 0]);
//!
//! // Entangled copies are labelled, not synchronised.
//! let (mut left, right) = entangle(&cube, &cube).unwrap();
//! left.set(&[1, 1, 0], false).unwrap();
//! assert!(right.get(&[1, 1, 0]).unwrap());
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for types not in the prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`grid`] | `bitmatrix-core` | `BitField`, coordinates, properties, errors |
//! | [`transform`] | `bitmatrix-transform` | Rotate, translate, scale, mirror, blocks, linear mapping |
//! | [`pattern`] | `bitmatrix-pattern` | Pattern generation and search |
//! | [`kinetic`] | `bitmatrix-kinetic` | Kinetic flip rules, superposition, entanglement |
//! | [`render`] | `bitmatrix-render` | ASCII rendering and animation frames |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Grid type, coordinates, properties, and errors (`bitmatrix-core`).
pub use bitmatrix_core as grid;

/// Geometric transforms and linear mapping (`bitmatrix-transform`).
///
/// [`transform::rotate`] and [`transform::mirror`] accept 3-axis grids
/// only; everything else works on both ranks.
pub use bitmatrix_transform as transform;

/// Pattern generation and exact/approximate search (`bitmatrix-pattern`).
pub use bitmatrix_pattern as pattern;

/// Kinetic flip rules and grid combination (`bitmatrix-kinetic`).
pub use bitmatrix_kinetic as kinetic;

/// ASCII rendering (`bitmatrix-render`).
pub use bitmatrix_render as render;

/// Common imports for typical BitMatrix usage.
///
/// ```rust
/// use bitmatrix::prelude::*;
/// ```
pub mod prelude {
    // Grid
    pub use bitmatrix_core::{BitField, Coord, GridError, GridId, PropertyValue, Shape};

    // Transforms
    pub use bitmatrix_transform::{
        extract_block, from_linear, insert_block, mirror, replace_block, reshape, rotate, scale,
        to_linear, translate, Axis, Plane,
    };

    // Patterns
    pub use bitmatrix_pattern::{
        find_approximate, find_exact, generate, generate_seeded, generate_with_rng, Match,
        MatchConfig, PatternKind,
    };

    // Kinetic
    pub use bitmatrix_kinetic::{
        entangle, kinetic_sequence, kinetic_transform, superposition, superposition_seeded,
        KineticKind,
    };

    // Rendering
    pub use bitmatrix_render::{render, RenderOptions, RenderStyle};
}
