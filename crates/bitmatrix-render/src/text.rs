//! Text renderers.

use crate::options::{RenderOptions, RenderStyle};
use bitmatrix_core::{BitField, GridError};
use tracing::trace;

/// Render `grid` as ASCII layers.
///
/// Fails with [`GridError::InvalidArgument`] if the requested layer or time
/// point is out of range, or a time point is requested for a 3-axis grid.
///
/// # Examples
///
/// ```
/// use bitmatrix_core::BitField;
/// use bitmatrix_render::{render, RenderOptions};
///
/// let mut grid = BitField::spatial(3, 2, 1).unwrap();
/// grid.set(&[0, 1, 0], true).unwrap();
/// let text = render(&grid, &RenderOptions::default()).unwrap();
/// assert_eq!(text, "BitField3D(3×2×1)\n\nLayer z=0:\n+---+\n|000|\n|100|\n+---+");
/// ```
pub fn render(grid: &BitField, options: &RenderOptions) -> Result<String, GridError> {
    let shape = grid.shape();
    let z_dim = shape[2];
    if let Some(layer) = options.layer() {
        check_range("layer", layer, z_dim)?;
    }
    let temporal = grid.ndim() == 4;
    match (options.time_point(), temporal) {
        (Some(t), true) => check_range("time point", t, shape[3])?,
        (Some(_), false) => {
            return Err(GridError::InvalidArgument {
                reason: "a time point can only be selected on a 4-axis grid".to_string(),
            })
        }
        (None, _) => {}
    }

    let layers: Vec<usize> = match options.layer() {
        Some(z) => vec![z],
        None => (0..z_dim).collect(),
    };
    let times: Vec<usize> = match (options.time_point(), temporal) {
        (Some(t), _) => vec![t],
        (None, true) => (0..shape[3]).collect(),
        (None, false) => vec![0],
    };
    let boxed = options.style() == RenderStyle::Boxed;

    let mut lines = vec![header(grid, boxed)];
    for &t in &times {
        let indent = if temporal { "  " } else { "" };
        if temporal {
            lines.push(String::new());
            lines.push(if boxed {
                format!("Time t={t}:")
            } else {
                format!("t={t}:")
            });
        }
        for &z in &layers {
            let label = if boxed {
                format!("Layer z={z}:")
            } else {
                format!("z={z}:")
            };
            if temporal {
                lines.push(format!("{indent}{label}"));
            } else {
                lines.push(String::new());
                lines.push(label);
            }
            push_layer(&mut lines, grid, z, t, indent, boxed)?;
        }
    }

    trace!(shape = ?shape, lines = lines.len(), "render");
    Ok(lines.join("\n"))
}

/// Frames that step through a grid: z layers for a 3-axis grid, time points
/// for a 4-axis grid, wrapping around when `frames` exceeds the axis length.
///
/// Fails with [`GridError::InvalidArgument`] if `frames` is zero.
pub fn animate(grid: &BitField, frames: usize) -> Result<Vec<String>, GridError> {
    if frames == 0 {
        return Err(GridError::InvalidArgument {
            reason: "an animation needs at least one frame".to_string(),
        });
    }
    let step_axis = grid.ndim() - 1;
    let steps = grid.shape()[step_axis];
    (0..frames)
        .map(|frame| {
            let options = if step_axis == 3 {
                RenderOptions::builder().time_point(frame % steps)
            } else {
                RenderOptions::builder().layer(frame % steps)
            };
            render(grid, &options.build())
        })
        .collect()
}

/// The bit and every property at `coord`, one per line.
pub fn describe_cell(grid: &BitField, coord: &[i32]) -> Result<String, GridError> {
    let value = grid.get(coord)?;
    let position = coord
        .iter()
        .map(i32::to_string)
        .collect::<Vec<_>>()
        .join(", ");

    let mut out = format!("Bit at position ({position}):\nValue: {}\n", u8::from(value));
    match grid.properties_at(coord)? {
        Some(props) if !props.is_empty() => {
            out.push_str("\nProperties:");
            for (name, value) in props {
                out.push_str(&format!("\n  {name}: {value}"));
            }
        }
        _ => out.push_str("\nNo properties set."),
    }
    Ok(out)
}

fn header(grid: &BitField, boxed: bool) -> String {
    let dims = grid
        .shape()
        .iter()
        .map(usize::to_string)
        .collect::<Vec<_>>()
        .join("×");
    let suffix = if boxed { "" } else { " [Compact View]" };
    format!("BitField{}D({dims}){suffix}", grid.ndim())
}

fn push_layer(
    lines: &mut Vec<String>,
    grid: &BitField,
    z: usize,
    t: usize,
    indent: &str,
    boxed: bool,
) -> Result<(), GridError> {
    let shape = grid.shape();
    let border = format!("{indent}+{}+", "-".repeat(shape[0]));
    if boxed {
        lines.push(border.clone());
    }
    for y in 0..shape[1] {
        let mut row = String::with_capacity(shape[0] + indent.len() + 2);
        row.push_str(indent);
        if boxed {
            row.push('|');
        }
        for x in 0..shape[0] {
            let mut coord = vec![x as i32, y as i32, z as i32];
            if grid.ndim() == 4 {
                coord.push(t as i32);
            }
            row.push(if grid.get(&coord)? { '1' } else { '0' });
        }
        if boxed {
            row.push('|');
        }
        lines.push(row);
    }
    if boxed {
        lines.push(border);
    }
    Ok(())
}

fn check_range(what: &str, value: usize, len: usize) -> Result<(), GridError> {
    if value < len {
        Ok(())
    } else {
        Err(GridError::InvalidArgument {
            reason: format!("{what} {value} is out of bounds (0-{})", len - 1),
        })
    }
}
