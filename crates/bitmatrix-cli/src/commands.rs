//! Subcommand execution.

use crate::args::{Command, RenderArgs, ShapeArgs, SourceArgs, TransformOp};
use anyhow::{bail, Context, Result};
use bitmatrix::grid::BitField;
use bitmatrix::pattern::{self, MatchConfig, PatternKind};
use bitmatrix::render::{self, RenderOptions, RenderStyle};
use bitmatrix::{kinetic, transform};
use tracing::info;

pub fn run(command: Command) -> Result<()> {
    match command {
        Command::Create {
            shape,
            bits,
            render,
        } => {
            let bits = parse_bits(&bits)?;
            let grid = transform::from_linear(&bits, &shape)
                .with_context(|| format!("failed to lay {} bits into {shape:?}", bits.len()))?;
            print_grid(&grid, &render)
        }
        Command::Pattern {
            kind,
            source,
            render,
        } => {
            let grid = generate(kind, &source)?;
            print_grid(&grid, &render)
        }
        Command::Transform { source, render, op } => {
            let grid = generate(source.pattern, &source.shape)?;
            let out = apply(&grid, &op).with_context(|| format!("{op:?} failed"))?;
            info!(from = ?grid.shape(), to = ?out.shape(), ones = out.count_ones(), "transformed");
            print_grid(&out, &render)
        }
        Command::Animate { source, frames } => {
            let grid = generate(source.pattern, &source.shape)?;
            let frames = render::animate(&grid, frames).context("failed to build animation")?;
            for (i, frame) in frames.iter().enumerate() {
                println!("--- frame {i} ---");
                println!("{frame}");
            }
            Ok(())
        }
        Command::Match {
            source,
            find,
            pattern_shape,
            threshold,
            limit,
        } => {
            let grid = generate(source.pattern, &source.shape)?;
            let needle = pattern::generate_seeded(find, &pattern_shape, source.shape.seed.unwrap_or(0))
                .with_context(|| format!("invalid pattern shape {pattern_shape:?}"))?;
            let mut config = MatchConfig::builder().threshold(threshold);
            if let Some(limit) = limit {
                config = config.limit(limit);
            }
            let config = config.build().context("invalid match settings")?;
            let matches = pattern::find_with_config(&grid, &needle, &config)
                .context("pattern search failed")?;

            println!("{} match(es) for {find} {pattern_shape:?}:", matches.len());
            for m in &matches {
                println!("  {:?}  similarity {:.3}", m.offset.as_slice(), m.similarity);
            }
            Ok(())
        }
    }
}

fn apply(grid: &BitField, op: &TransformOp) -> Result<BitField, bitmatrix::grid::GridError> {
    match op {
        TransformOp::Rotate { axis, degrees } => transform::rotate(grid, *axis, *degrees),
        TransformOp::Translate { vector } => transform::translate(grid, vector),
        TransformOp::Scale { factors } => transform::scale(grid, factors),
        TransformOp::Mirror { plane } => transform::mirror(grid, *plane),
        TransformOp::Kinetic { kinds } => kinetic::kinetic_sequence(grid, kinds),
    }
}

fn generate(kind: PatternKind, args: &ShapeArgs) -> Result<BitField> {
    let grid = match args.seed {
        Some(seed) => pattern::generate_seeded(kind, &args.shape, seed),
        None => pattern::generate(kind, &args.shape),
    };
    grid.with_context(|| format!("cannot generate {kind} pattern of shape {:?}", args.shape))
}

fn print_grid(grid: &BitField, args: &RenderArgs) -> Result<()> {
    let mut options = RenderOptions::builder();
    if let Some(layer) = args.layer {
        options = options.layer(layer);
    }
    if let Some(t) = args.time {
        options = options.time_point(t);
    }
    if args.compact {
        options = options.style(RenderStyle::Compact);
    }
    let text = render::render(grid, &options.build()).context("failed to render grid")?;
    println!("{text}");
    Ok(())
}

fn parse_bits(bits: &str) -> Result<Vec<bool>> {
    bits.chars()
        .filter(|c| !c.is_whitespace() && *c != ',')
        .map(|c| match c {
            '0' => Ok(false),
            '1' => Ok(true),
            other => bail!("invalid bit '{other}', expected 0 or 1"),
        })
        .collect()
}
