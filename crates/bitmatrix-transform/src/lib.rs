//! Geometric transforms over BitMatrix grids.
//!
//! Every operation here is pure: the input grid is borrowed, never mutated,
//! and a freshly allocated [`BitField`](bitmatrix_core::BitField) is
//! returned. A cell's bit and all of its properties travel together to the
//! destination coordinate; cells that land outside the output are dropped.
//!
//! # Operations
//!
//! - [`rotate`], [`mirror`]: 3-axis only
//! - [`translate`], [`scale`]: any supported rank
//! - [`insert_block`], [`extract_block`], [`replace_block`]: rectangular copies
//! - [`from_linear`], [`to_linear`], [`reshape`]: linear bit sequences
//!
//! Fractional coordinates are resolved with [`to_index`], which rounds half
//! away from zero.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod axis;
pub mod block;
pub mod geometry;
pub mod linear;
pub mod round;

pub use axis::{Axis, Plane};
pub use block::{extract_block, insert_block, replace_block, Block};
pub use geometry::{mirror, rotate, scale, translate};
pub use linear::{from_linear, reshape, to_linear};
pub use round::to_index;
