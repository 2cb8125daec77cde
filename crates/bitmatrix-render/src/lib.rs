//! ASCII rendering for BitMatrix grids.
//!
//! Grids are drawn as stacks of x-by-y layers, one per z value (and, for
//! 4-axis grids, one block of layers per time point). Rendering only uses
//! the grid's read-only queries.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod options;
pub mod text;

pub use options::{RenderOptions, RenderOptionsBuilder, RenderStyle};
pub use text::{animate, describe_cell, render};
