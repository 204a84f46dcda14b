//! Rectangular region traversal
//!
//! Every bulk operation on a grid is expressed as a walk over a `Region`.
//! A region is either accepted wholesale or rejected wholesale: there is no
//! clamping and no partial visitation. Accepted regions are scanned in
//! column-major order (outer loop over x, inner loop over y).

use std::fmt;

use crate::io::error::{Result, region_out_of_bounds};
use crate::spatial::grid::Grid;

/// Axis-aligned rectangle of cells given by origin and extent
///
/// Covers the half-open range `[x, x + width) × [y, y + height)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Region {
    /// Column of the first cell
    pub x: usize,
    /// Row of the first cell
    pub y: usize,
    /// Number of columns covered
    pub width: usize,
    /// Number of rows covered
    pub height: usize,
}

impl Region {
    /// Create a region from origin and extent
    pub const fn new(x: usize, y: usize, width: usize, height: usize) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Region covering a whole grid of the given dimensions
    pub const fn whole(width: usize, height: usize) -> Self {
        Self::new(0, 0, width, height)
    }

    /// Exclusive end coordinates `(x + width, y + height)`
    ///
    /// Returns `None` if either sum overflows.
    pub const fn end(&self) -> Option<(usize, usize)> {
        match (
            self.x.checked_add(self.width),
            self.y.checked_add(self.height),
        ) {
            (Some(x_end), Some(y_end)) => Some((x_end, y_end)),
            _ => None,
        }
    }

    /// Number of cells covered
    pub const fn area(&self) -> usize {
        self.width.saturating_mul(self.height)
    }

    /// Test if the region covers no cells
    pub const fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Test if a coordinate lies inside the region
    pub const fn contains(&self, x: usize, y: usize) -> bool {
        match self.end() {
            Some((x_end, y_end)) => x >= self.x && x < x_end && y >= self.y && y < y_end,
            None => false,
        }
    }

    /// Test if the region fits inside a grid of the given dimensions
    ///
    /// The single boundary check of the traversal engine: only the far edges
    /// are compared against the grid size.
    pub const fn fits_within(&self, width: usize, height: usize) -> bool {
        match self.end() {
            Some((x_end, y_end)) => x_end <= width && y_end <= height,
            None => false,
        }
    }

    /// Iterate the region's coordinates in column-major order
    ///
    /// Performs no bounds check; use `Grid::region_cells` to validate first.
    /// A region whose end overflows yields nothing.
    pub const fn cells(&self) -> RegionCells {
        let column = if self.end().is_some() { 0 } else { self.width };
        RegionCells {
            region: *self,
            column,
            row: 0,
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{},{},{},{}]", self.x, self.y, self.width, self.height)
    }
}

/// Column-major iterator over the coordinates of a region
///
/// Owns its bounds, so the grid it was validated against stays free for
/// mutation while iterating.
#[derive(Debug, Clone)]
pub struct RegionCells {
    region: Region,
    column: usize,
    row: usize,
}

impl Iterator for RegionCells {
    type Item = (usize, usize);

    fn next(&mut self) -> Option<Self::Item> {
        if self.region.is_empty() || self.column >= self.region.width {
            return None;
        }

        let item = (self.region.x + self.column, self.region.y + self.row);

        self.row += 1;
        if self.row >= self.region.height {
            self.row = 0;
            self.column += 1;
        }

        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = if self.region.is_empty() || self.column >= self.region.width {
            0
        } else {
            (self.region.width - self.column)
                .saturating_mul(self.region.height)
                .saturating_sub(self.row)
        };
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for RegionCells {}

impl<T> Grid<T> {
    /// Test if a region lies entirely inside this grid
    pub const fn region_fits(&self, region: &Region) -> bool {
        region.fits_within(self.width(), self.height())
    }

    /// Validate a region and return its coordinates
    ///
    /// # Errors
    ///
    /// Returns `GridError::RegionOutOfBounds` if `x + width > grid width` or
    /// `y + height > grid height`.
    pub fn region_cells(&self, region: Region) -> Result<RegionCells> {
        if self.region_fits(&region) {
            Ok(region.cells())
        } else {
            tracing::debug!(
                %region,
                width = self.width(),
                height = self.height(),
                "region rejected"
            );
            Err(region_out_of_bounds(region, self.dimensions()))
        }
    }

    /// Visit every coordinate of a region in column-major order
    ///
    /// # Errors
    ///
    /// Returns `GridError::RegionOutOfBounds` without visiting any cell if
    /// the region does not fit.
    pub fn scan_region<F>(&self, region: Region, mut visit: F) -> Result<()>
    where
        F: FnMut(usize, usize),
    {
        for (x, y) in self.region_cells(region)? {
            visit(x, y);
        }
        Ok(())
    }

    /// Visit every coordinate of a region, or report the rejected region
    ///
    /// Exactly one of the two callbacks runs: `visit` for each cell of an
    /// accepted region, or `on_rejected` once with the rejected region.
    pub fn scan_region_or_else<F, R>(&self, region: Region, visit: F, on_rejected: R)
    where
        F: FnMut(usize, usize),
        R: FnOnce(&Region),
    {
        if self.scan_region(region, visit).is_err() {
            on_rejected(&region);
        }
    }
}
