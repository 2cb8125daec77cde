//! Command-line argument definitions.

use bitmatrix::kinetic::KineticKind;
use bitmatrix::pattern::PatternKind;
use bitmatrix::transform::{Axis, Plane};
use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "bitmatrix")]
#[command(about = "Build, transform, search, and render 3D/4D bitfield grids")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Build a grid from a linear bit string (first axis fastest)
    Create {
        /// Grid shape, e.g. 4,4,2 or 4,4,2,3
        #[arg(long, value_delimiter = ',', required = true)]
        shape: Vec<usize>,

        /// Bits as 0/1 characters; shorter input is padded with zeros
        #[arg(long, default_value = "")]
        bits: String,

        #[command(flatten)]
        render: RenderArgs,
    },

    /// Generate a canonical pattern
    Pattern {
        /// cube, sphere, wave, or random
        kind: PatternKind,

        #[command(flatten)]
        source: ShapeArgs,

        #[command(flatten)]
        render: RenderArgs,
    },

    /// Apply a transform to a generated grid
    Transform {
        #[command(flatten)]
        source: SourceArgs,

        #[command(flatten)]
        render: RenderArgs,

        #[command(subcommand)]
        op: TransformOp,
    },

    /// Print animation frames stepping through layers or time points
    Animate {
        #[command(flatten)]
        source: SourceArgs,

        /// Number of frames
        #[arg(long, default_value_t = 5)]
        frames: usize,
    },

    /// Search a generated grid for a generated pattern
    Match {
        #[command(flatten)]
        source: SourceArgs,

        /// Pattern kind to search for
        #[arg(long = "find", default_value = "cube")]
        find: PatternKind,

        /// Shape of the searched-for pattern
        #[arg(long, value_delimiter = ',', required = true)]
        pattern_shape: Vec<usize>,

        /// Minimum similarity in [0, 1]; 1.0 searches for exact matches only
        #[arg(long, default_value_t = 0.8)]
        threshold: f64,

        /// Show at most this many matches
        #[arg(long)]
        limit: Option<usize>,
    },
}

#[derive(Subcommand, Debug)]
pub enum TransformOp {
    /// Rotate a 3-axis grid about its center
    Rotate {
        #[arg(long)]
        axis: Axis,
        #[arg(long, allow_negative_numbers = true)]
        degrees: f64,
    },
    /// Shift every cell by a vector
    Translate {
        #[arg(long, value_delimiter = ',', allow_negative_numbers = true, required = true)]
        vector: Vec<i32>,
    },
    /// Nearest-neighbour rescale
    Scale {
        #[arg(long, value_delimiter = ',', required = true)]
        factors: Vec<f64>,
    },
    /// Reflect a 3-axis grid across a plane
    Mirror {
        #[arg(long)]
        plane: Plane,
    },
    /// Apply kinetic flip rules in order
    Kinetic {
        #[arg(value_delimiter = ',', required = true)]
        kinds: Vec<KineticKind>,
    },
}

#[derive(Args, Debug)]
pub struct ShapeArgs {
    /// Grid shape, e.g. 4,4,2 or 4,4,2,3
    #[arg(long, value_delimiter = ',', required = true)]
    pub shape: Vec<usize>,

    /// Seed for random patterns
    #[arg(long, env = "BITMATRIX_SEED")]
    pub seed: Option<u64>,
}

#[derive(Args, Debug)]
pub struct SourceArgs {
    #[command(flatten)]
    pub shape: ShapeArgs,

    /// Pattern used to populate the source grid
    #[arg(long, default_value = "cube")]
    pub pattern: PatternKind,
}

#[derive(Args, Debug)]
pub struct RenderArgs {
    /// Only render this z layer
    #[arg(long)]
    pub layer: Option<usize>,

    /// Only render this time point (4-axis grids)
    #[arg(long)]
    pub time: Option<usize>,

    /// Borderless output
    #[arg(long)]
    pub compact: bool,
}
