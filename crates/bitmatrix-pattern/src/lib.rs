//! Pattern generation and pattern search for BitMatrix grids.
//!
//! [`generate`] builds canonical shapes (hollow cube, spherical shell,
//! sinusoidal wave, uniform noise). [`find_exact`] and [`find_approximate`]
//! slide a smaller pattern grid over every valid offset of a target grid.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod generate;
pub mod matching;

pub use config::{MatchConfig, MatchConfigBuilder};
pub use generate::{generate, generate_seeded, generate_with_rng, wave_value, PatternKind};
pub use matching::{find_approximate, find_exact, find_with_config, similarity_at, Match};
