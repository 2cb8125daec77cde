//! Kinetic transforms and grid combination for BitMatrix.
//!
//! A kinetic transform copies a grid and flips every cell whose coordinates
//! satisfy a fixed rule ([`KineticKind`]). The combination operations merge
//! two same-shaped grids: [`superposition`] blends them cell by cell with an
//! injected random source, and [`entangle`] returns tagged copies linked by
//! passive [`Entanglement`](bitmatrix_core::Entanglement) labels.
//!
//! None of this models physics; the names describe the cellular rules only.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod combine;
pub mod kind;
pub mod transform;

pub use combine::{entangle, superposition, superposition_seeded, ENTANGLED, SUPERPOSITION};
pub use kind::KineticKind;
pub use transform::{kinetic_sequence, kinetic_transform};
