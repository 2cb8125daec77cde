//! Core types for the BitMatrix spatial computing toolkit.
//!
//! This is the leaf crate with zero internal dependencies. It defines the
//! [`BitField`] grid (dense bits plus sparse per-cell properties), the
//! [`Coord`] and [`Shape`] types, the property value model, grid identity,
//! and the shared [`GridError`] type.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

mod bits;
pub mod coords;
pub mod entanglement;
pub mod error;
pub mod grid;
pub mod id;
pub mod property;

pub use coords::CoordIter;
pub use entanglement::{CellMapping, Entanglement};
pub use error::GridError;
pub use grid::{BitField, PropertyMap, MAX_RANK, MIN_RANK};
pub use id::{Coord, GridId, Shape};
pub use property::PropertyValue;
