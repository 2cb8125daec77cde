//! The [`BitField`] grid: dense bits plus sparse per-cell properties.

use crate::bits::BitStore;
use crate::coords::CoordIter;
use crate::entanglement::Entanglement;
use crate::error::GridError;
use crate::id::{Coord, GridId, Shape};
use crate::property::PropertyValue;
use indexmap::IndexMap;
use smallvec::smallvec;
use std::fmt;

/// Smallest supported axis count (the spatial `x, y, z` grid).
pub const MIN_RANK: usize = 3;

/// Largest supported axis count (the spatial + temporal `x, y, z, t` grid).
pub const MAX_RANK: usize = 4;

/// Named properties of a single cell, in insertion order.
pub type PropertyMap = IndexMap<String, PropertyValue>;

/// A dense 3-axis or 4-axis boolean grid with sparse per-cell properties.
///
/// Every cell holds one bit. Cells may additionally carry named
/// [`PropertyValue`]s; property maps are allocated lazily, so a cell that
/// was never given a property costs nothing beyond its bit.
///
/// The shape is fixed at construction. Bits start out `false`. Storage is
/// laid out in canonical order (first axis slowest), matching
/// [`BitField::coords`].
///
/// `Clone` produces a fully independent grid with a fresh [`GridId`] and no
/// entanglement label. Equality compares shape, bits and properties only.
///
/// # Examples
///
/// ```
/// use bitmatrix_core::{BitField, GridError};
///
/// let mut grid = BitField::new(&[4, 4, 2]).unwrap();
/// grid.set(&[1, 2, 0], true).unwrap();
/// grid.set_property(&[1, 2, 0], "color", "red").unwrap();
///
/// assert!(grid.get(&[1, 2, 0]).unwrap());
/// assert_eq!(grid.property(&[1, 2, 0], "color").unwrap().as_str(), Some("red"));
/// assert!(grid.property_names(&[0, 0, 0]).unwrap().is_empty());
/// assert!(matches!(grid.get(&[4, 0, 0]), Err(GridError::OutOfBounds { .. })));
/// ```
pub struct BitField {
    shape: Shape,
    strides: Shape,
    bits: BitStore,
    properties: IndexMap<Coord, PropertyMap>,
    entanglement: Option<Entanglement>,
    id: GridId,
}

impl BitField {
    /// Maximum length of a single axis: coordinates use `i32`.
    pub const MAX_DIM: usize = i32::MAX as usize;

    /// Create an all-false grid of the given shape.
    ///
    /// Returns `Err(GridError::InvalidShape)` if the shape does not have 3
    /// or 4 axes, any axis is zero or exceeds [`MAX_DIM`](Self::MAX_DIM), or
    /// the total cell count overflows `usize`.
    pub fn new(shape: &[usize]) -> Result<Self, GridError> {
        let cell_count = validate_shape(shape)?;

        // strides[i] = product(shape[j] for j > i); last axis fastest.
        let mut strides: Shape = smallvec![1; shape.len()];
        for i in (0..shape.len() - 1).rev() {
            strides[i] = strides[i + 1] * shape[i + 1];
        }

        Ok(Self {
            shape: Shape::from_slice(shape),
            strides,
            bits: BitStore::new(cell_count),
            properties: IndexMap::new(),
            entanglement: None,
            id: GridId::next(),
        })
    }

    /// Create a 3-axis spatial grid.
    pub fn spatial(x: usize, y: usize, z: usize) -> Result<Self, GridError> {
        Self::new(&[x, y, z])
    }

    /// Create a 4-axis spatial + temporal grid.
    pub fn temporal(x: usize, y: usize, z: usize, t: usize) -> Result<Self, GridError> {
        Self::new(&[x, y, z, t])
    }

    /// Length of each axis.
    pub fn shape(&self) -> &[usize] {
        &self.shape
    }

    /// Number of axes (3 or 4).
    pub fn ndim(&self) -> usize {
        self.shape.len()
    }

    /// Total number of cells.
    pub fn cell_count(&self) -> usize {
        self.bits.len()
    }

    /// Unique instance identifier of this grid.
    pub fn id(&self) -> GridId {
        self.id
    }

    /// Number of cells whose bit is set.
    pub fn count_ones(&self) -> usize {
        self.bits.count_ones()
    }

    /// Whether `coord` has the grid's rank and lies within bounds.
    pub fn contains(&self, coord: &[i32]) -> bool {
        self.flat_index(coord).is_some()
    }

    /// Every coordinate of the grid in canonical order.
    pub fn coords(&self) -> CoordIter {
        CoordIter::canonical(&self.shape)
    }

    /// Read the bit at `coord`.
    pub fn get(&self, coord: &[i32]) -> Result<bool, GridError> {
        let index = self.checked_index(coord)?;
        Ok(self.bits.get(index))
    }

    /// Overwrite the bit at `coord`.
    pub fn set(&mut self, coord: &[i32], value: bool) -> Result<(), GridError> {
        let index = self.checked_index(coord)?;
        self.bits.set(index, value);
        Ok(())
    }

    /// Set (or overwrite) a named property at `coord`.
    pub fn set_property(
        &mut self,
        coord: &[i32],
        name: impl Into<String>,
        value: impl Into<PropertyValue>,
    ) -> Result<(), GridError> {
        self.checked_index(coord)?;
        self.properties
            .entry(Coord::from_slice(coord))
            .or_default()
            .insert(name.into(), value.into());
        Ok(())
    }

    /// Read a named property at `coord`.
    ///
    /// Returns `Err(GridError::PropertyNotFound)` if the cell has no
    /// property of that name, whether or not it has other properties.
    pub fn property(&self, coord: &[i32], name: &str) -> Result<&PropertyValue, GridError> {
        self.checked_index(coord)?;
        self.properties
            .get(coord)
            .and_then(|props| props.get(name))
            .ok_or_else(|| GridError::PropertyNotFound {
                coord: Coord::from_slice(coord),
                name: name.to_owned(),
            })
    }

    /// Names of every property set at `coord`, in insertion order.
    ///
    /// Empty (not an error) for a cell without properties.
    pub fn property_names(&self, coord: &[i32]) -> Result<Vec<&str>, GridError> {
        Ok(self
            .properties_at(coord)?
            .map(|props| props.keys().map(String::as_str).collect())
            .unwrap_or_default())
    }

    /// The full property map of the cell at `coord`, if it has one.
    pub fn properties_at(&self, coord: &[i32]) -> Result<Option<&PropertyMap>, GridError> {
        self.checked_index(coord)?;
        Ok(self.properties.get(coord))
    }

    /// Remove a named property at `coord`, returning its previous value.
    pub fn remove_property(
        &mut self,
        coord: &[i32],
        name: &str,
    ) -> Result<Option<PropertyValue>, GridError> {
        self.checked_index(coord)?;
        let Some(props) = self.properties.get_mut(coord) else {
            return Ok(None);
        };
        let removed = props.shift_remove(name);
        if props.is_empty() {
            self.properties.shift_remove(coord);
        }
        Ok(removed)
    }

    /// Remove every property at `coord`.
    pub fn clear_properties(&mut self, coord: &[i32]) -> Result<(), GridError> {
        self.checked_index(coord)?;
        self.properties.shift_remove(coord);
        Ok(())
    }

    /// Cells that carry at least one property, in first-write order.
    pub fn property_cells(&self) -> impl Iterator<Item = (&Coord, &PropertyMap)> {
        self.properties.iter()
    }

    /// Copy the bit and every property of `source[from]` into `self[to]`.
    ///
    /// Properties are merged: existing properties at `to` with other names
    /// are kept, same-named ones are overwritten. This is the primitive
    /// every coordinate-mapping transform is built on.
    pub fn copy_cell_from(
        &mut self,
        source: &BitField,
        from: &[i32],
        to: &[i32],
    ) -> Result<(), GridError> {
        let src_index = source.checked_index(from)?;
        let dst_index = self.checked_index(to)?;
        self.bits.set(dst_index, source.bits.get(src_index));
        if let Some(props) = source.properties.get(from) {
            let dst = self.properties.entry(Coord::from_slice(to)).or_default();
            for (name, value) in props {
                dst.insert(name.clone(), value.clone());
            }
        }
        Ok(())
    }

    /// The entanglement label, if this grid was produced by entanglement.
    pub fn entanglement(&self) -> Option<&Entanglement> {
        self.entanglement.as_ref()
    }

    /// Attach or clear the entanglement label.
    pub fn set_entanglement(&mut self, entanglement: Option<Entanglement>) {
        self.entanglement = entanglement;
    }

    fn flat_index(&self, coord: &[i32]) -> Option<usize> {
        if coord.len() != self.shape.len() {
            return None;
        }
        let mut index = 0usize;
        for ((&c, &dim), &stride) in coord.iter().zip(&self.shape).zip(&self.strides) {
            if c < 0 || c as usize >= dim {
                return None;
            }
            index += c as usize * stride;
        }
        Some(index)
    }

    fn checked_index(&self, coord: &[i32]) -> Result<usize, GridError> {
        self.flat_index(coord).ok_or_else(|| GridError::OutOfBounds {
            coord: Coord::from_slice(coord),
            shape: self.shape.clone(),
        })
    }
}

/// Validate a grid shape and return its cell count.
fn validate_shape(shape: &[usize]) -> Result<usize, GridError> {
    if !(MIN_RANK..=MAX_RANK).contains(&shape.len()) {
        return Err(GridError::InvalidShape {
            reason: format!(
                "expected {MIN_RANK} or {MAX_RANK} axes, got {}",
                shape.len()
            ),
        });
    }
    let mut cell_count = 1usize;
    for (axis, &dim) in shape.iter().enumerate() {
        if dim == 0 {
            return Err(GridError::InvalidShape {
                reason: format!("axis {axis} has zero length"),
            });
        }
        if dim > BitField::MAX_DIM {
            return Err(GridError::InvalidShape {
                reason: format!("axis {axis} length {dim} exceeds {}", BitField::MAX_DIM),
            });
        }
        cell_count = cell_count
            .checked_mul(dim)
            .ok_or_else(|| GridError::InvalidShape {
                reason: "total cell count overflows usize".to_string(),
            })?;
    }
    Ok(cell_count)
}

impl Clone for BitField {
    fn clone(&self) -> Self {
        Self {
            shape: self.shape.clone(),
            strides: self.strides.clone(),
            bits: self.bits.clone(),
            properties: self.properties.clone(),
            entanglement: None,
            id: GridId::next(),
        }
    }
}

impl PartialEq for BitField {
    fn eq(&self, other: &Self) -> bool {
        self.shape == other.shape
            && self.bits == other.bits
            && self.properties.len() == other.properties.len()
            && self
                .properties
                .iter()
                .all(|(coord, props)| other.properties.get(coord) == Some(props))
    }
}

impl fmt::Debug for BitField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BitField")
            .field("id", &self.id)
            .field("shape", &self.shape)
            .field("ones", &self.count_ones())
            .field("property_cells", &self.properties.len())
            .field("entanglement", &self.entanglement)
            .finish()
    }
}
