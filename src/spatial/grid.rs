//! Dense fixed-size 2D grid with row-major addressing
//!
//! Cells live in an ndarray `Array2` of shape `(height, width)`, so the
//! linear offset of `(x, y)` is `y * width + x`. Dimensions are fixed at
//! construction; there is no resize.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use ndarray::{Array2, ArrayView2, Ix2, Zip};

use crate::io::configuration::MAX_GRID_DIMENSION;
use crate::io::error::{GridError, Result};

/// Fixed-size two-dimensional container over an arbitrary cell type
///
/// Coordinates are `(x, y)` pairs where `x` selects the column and `y` the
/// row. The grid owns its cells; dropping it drops every cell exactly once.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Grid<T> {
    cells: Array2<T>,
    width: usize,
    height: usize,
}

fn validate_dimensions(width: usize, height: usize) -> Result<()> {
    if width == 0 || height == 0 {
        return Err(GridError::InvalidDimensions {
            width,
            height,
            reason: "width and height must be positive".to_string(),
        });
    }
    if width > MAX_GRID_DIMENSION || height > MAX_GRID_DIMENSION {
        return Err(GridError::InvalidDimensions {
            width,
            height,
            reason: format!("dimensions may not exceed {MAX_GRID_DIMENSION}"),
        });
    }
    Ok(())
}

impl<T: Default> Grid<T> {
    /// Create a grid with every cell set to `T::default()`
    ///
    /// # Errors
    ///
    /// Returns `GridError::InvalidDimensions` if either dimension is zero or
    /// exceeds `MAX_GRID_DIMENSION`.
    pub fn new(width: usize, height: usize) -> Result<Self> {
        validate_dimensions(width, height)?;
        Ok(Self {
            cells: Array2::default((height, width)),
            width,
            height,
        })
    }

    /// Replace every cell with `T::default()`, dropping the previous values
    pub fn reset(&mut self) {
        for cell in &mut self.cells {
            *cell = T::default();
        }
    }
}

impl<T: Clone> Grid<T> {
    /// Create a grid with every cell set to a copy of `value`
    ///
    /// # Errors
    ///
    /// Returns `GridError::InvalidDimensions` if either dimension is zero or
    /// exceeds `MAX_GRID_DIMENSION`.
    pub fn from_elem(width: usize, height: usize, value: T) -> Result<Self> {
        validate_dimensions(width, height)?;
        Ok(Self {
            cells: Array2::from_elem((height, width), value),
            width,
            height,
        })
    }
}

impl<T> Grid<T> {
    /// Create a grid whose cells are produced from their coordinates
    ///
    /// # Errors
    ///
    /// Returns `GridError::InvalidDimensions` if either dimension is zero or
    /// exceeds `MAX_GRID_DIMENSION`.
    pub fn from_fn<F>(width: usize, height: usize, mut generator: F) -> Result<Self>
    where
        F: FnMut(usize, usize) -> T,
    {
        validate_dimensions(width, height)?;
        Ok(Self {
            cells: Array2::from_shape_fn((height, width), |(y, x)| generator(x, y)),
            width,
            height,
        })
    }

    /// Create a grid from row-major cell values
    ///
    /// # Errors
    ///
    /// Returns `GridError::InvalidDimensions` for invalid dimensions, or
    /// `GridError::ShapeMismatch` if `values.len() != width * height`.
    pub fn from_vec(width: usize, height: usize, values: Vec<T>) -> Result<Self> {
        validate_dimensions(width, height)?;
        let expected = width * height;
        let actual = values.len();
        if actual != expected {
            return Err(GridError::ShapeMismatch {
                expected,
                actual,
                source: None,
            });
        }
        let cells = Array2::from_shape_vec((height, width), values).map_err(|source| {
            GridError::ShapeMismatch {
                expected,
                actual,
                source: Some(source),
            }
        })?;
        Ok(Self {
            cells,
            width,
            height,
        })
    }

    /// Number of columns
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Number of rows
    pub const fn height(&self) -> usize {
        self.height
    }

    /// Grid dimensions as `(width, height)`
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    /// Total number of cells (`width * height`)
    pub const fn len(&self) -> usize {
        self.width * self.height
    }

    /// Always false for a constructed grid; dimensions are positive
    pub const fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Determine whether a signed coordinate lies inside the grid
    pub const fn is_valid(&self, x: isize, y: isize) -> bool {
        x >= 0 && y >= 0 && (x as usize) < self.width && (y as usize) < self.height
    }

    /// Determine whether an unsigned coordinate lies inside the grid
    pub const fn contains(&self, x: usize, y: usize) -> bool {
        x < self.width && y < self.height
    }

    /// Convert a 2D coordinate to its row-major offset
    ///
    /// Returns `None` for coordinates outside the grid.
    pub const fn index_of(&self, x: usize, y: usize) -> Option<usize> {
        if self.contains(x, y) {
            Some(y * self.width + x)
        } else {
            None
        }
    }

    /// Convert a 2D coordinate to an offset without rejecting invalid input
    ///
    /// Always returns `y * width + x` (wrapping on overflow). Invalid
    /// coordinates produce an aliased or out-of-range offset and a warning
    /// diagnostic; prefer `index_of` unless the caller already guarantees
    /// validity.
    pub fn index_of_unchecked(&self, x: usize, y: usize) -> usize {
        if !self.contains(x, y) {
            tracing::warn!(
                x,
                y,
                width = self.width,
                height = self.height,
                "index is invalid for this grid"
            );
        }
        y.wrapping_mul(self.width).wrapping_add(x)
    }

    /// Convert a row-major offset to its 2D coordinate
    ///
    /// Exact inverse of `index_of` for offsets in `[0, len)`. Larger offsets
    /// map to rows past the last one.
    pub const fn coords_of(&self, offset: usize) -> (usize, usize) {
        (offset % self.width, offset / self.width)
    }

    /// Convert a row-major offset to its 2D coordinate, rejecting offsets past the end
    pub const fn checked_coords_of(&self, offset: usize) -> Option<(usize, usize)> {
        if offset < self.len() {
            Some(self.coords_of(offset))
        } else {
            None
        }
    }

    /// Cell at a coordinate
    pub fn get(&self, x: usize, y: usize) -> Option<&T> {
        self.cells.get((y, x))
    }

    /// Mutable cell at a coordinate
    pub fn get_mut(&mut self, x: usize, y: usize) -> Option<&mut T> {
        self.cells.get_mut((y, x))
    }

    /// Cell at a row-major offset
    pub fn get_at(&self, offset: usize) -> Option<&T> {
        let (x, y) = self.checked_coords_of(offset)?;
        self.get(x, y)
    }

    /// Mutable cell at a row-major offset
    pub fn get_at_mut(&mut self, offset: usize) -> Option<&mut T> {
        let (x, y) = self.checked_coords_of(offset)?;
        self.get_mut(x, y)
    }

    /// Overwrite the cell at a coordinate
    ///
    /// # Errors
    ///
    /// Returns `GridError::CoordinateOutOfBounds` if the coordinate lies
    /// outside the grid; the grid is left unchanged.
    pub fn set(&mut self, x: usize, y: usize, value: T) -> Result<()> {
        let grid_dimensions = self.dimensions();
        let cell = self
            .get_mut(x, y)
            .ok_or(GridError::CoordinateOutOfBounds {
                x,
                y,
                grid_dimensions,
            })?;
        *cell = value;
        Ok(())
    }

    /// Iterate cells in row-major order
    pub fn iter(&self) -> ndarray::iter::Iter<'_, T, Ix2> {
        self.cells.iter()
    }

    /// Iterate cells mutably in row-major order
    pub fn iter_mut(&mut self) -> ndarray::iter::IterMut<'_, T, Ix2> {
        self.cells.iter_mut()
    }

    /// Iterate `((x, y), cell)` pairs in row-major order
    pub fn indexed_iter(&self) -> impl Iterator<Item = ((usize, usize), &T)> + '_ {
        self.cells.indexed_iter().map(|((y, x), cell)| ((x, y), cell))
    }

    /// Iterate `((x, y), cell)` pairs mutably in row-major order
    pub fn indexed_iter_mut(&mut self) -> impl Iterator<Item = ((usize, usize), &mut T)> + '_ {
        self.cells
            .indexed_iter_mut()
            .map(|((y, x), cell)| ((x, y), cell))
    }

    /// Build a grid of the same size from every `(x, y, cell)`
    pub fn map_to_grid<U, F>(&self, mut f: F) -> Grid<U>
    where
        F: FnMut(usize, usize, &T) -> U,
    {
        Grid {
            cells: Zip::indexed(&self.cells).map_collect(|(y, x), cell| f(x, y, cell)),
            width: self.width,
            height: self.height,
        }
    }

    /// Backing array, indexed `[row, column]`
    pub const fn as_array(&self) -> &Array2<T> {
        &self.cells
    }

    /// Read-only ndarray view, indexed `[row, column]`
    pub fn view(&self) -> ArrayView2<'_, T> {
        self.cells.view()
    }

    /// Take ownership of every cell in row-major order
    pub fn into_values(self) -> Vec<T> {
        self.cells.into_iter().collect()
    }

    /// Content hash over dimensions and every cell
    ///
    /// Equal grids produce equal checksums within one process.
    pub fn checksum(&self) -> u64
    where
        T: Hash,
    {
        let mut hasher = DefaultHasher::new();
        self.hash(&mut hasher);
        hasher.finish()
    }
}

impl<'a, T> IntoIterator for &'a Grid<T> {
    type Item = &'a T;
    type IntoIter = ndarray::iter::Iter<'a, T, Ix2>;

    fn into_iter(self) -> Self::IntoIter {
        self.cells.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut Grid<T> {
    type Item = &'a mut T;
    type IntoIter = ndarray::iter::IterMut<'a, T, Ix2>;

    fn into_iter(self) -> Self::IntoIter {
        self.cells.iter_mut()
    }
}
