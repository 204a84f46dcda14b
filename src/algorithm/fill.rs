//! Bulk mutation and traversal over the whole grid or a region
//!
//! Region-scoped variants go through `Grid::region_cells`, so a rectangle
//! that does not fit is rejected before any cell is read or written.

use crate::io::error::Result;
use crate::spatial::grid::Grid;
use crate::spatial::region::Region;

impl<T> Grid<T> {
    /// Write `value` into every cell
    pub fn fill_all(&mut self, value: T)
    where
        T: Clone,
    {
        for cell in self.iter_mut() {
            *cell = value.clone();
        }
    }

    /// Write `value` into every cell of a region
    ///
    /// # Errors
    ///
    /// Returns `GridError::RegionOutOfBounds` if the region does not fit;
    /// nothing is written in that case.
    pub fn fill(&mut self, region: Region, value: T) -> Result<()>
    where
        T: Clone,
    {
        for (x, y) in self.region_cells(region)? {
            if let Some(cell) = self.get_mut(x, y) {
                *cell = value.clone();
            }
        }
        Ok(())
    }

    /// Write `value` into every cell where `predicate` holds, in column-major order
    pub fn fill_where<P>(&mut self, mut predicate: P, value: T)
    where
        P: FnMut(&T) -> bool,
        T: Clone,
    {
        for (x, y) in Region::whole(self.width(), self.height()).cells() {
            if let Some(cell) = self.get_mut(x, y)
                && predicate(&*cell)
            {
                *cell = value.clone();
            }
        }
    }

    /// Write `value` into every cell of a region where `predicate` holds
    ///
    /// # Errors
    ///
    /// Returns `GridError::RegionOutOfBounds` if the region does not fit;
    /// nothing is written in that case.
    pub fn fill_region_where<P>(&mut self, region: Region, mut predicate: P, value: T) -> Result<()>
    where
        P: FnMut(&T) -> bool,
        T: Clone,
    {
        for (x, y) in self.region_cells(region)? {
            if let Some(cell) = self.get_mut(x, y)
                && predicate(&*cell)
            {
                *cell = value.clone();
            }
        }
        Ok(())
    }

    /// Write `generator(x, y)` into every cell, in column-major order
    ///
    /// Visits cells in the same order as `fill_region_with` over the whole
    /// grid, so a stateful generator produces the same grid either way.
    pub fn fill_with<F>(&mut self, mut generator: F)
    where
        F: FnMut(usize, usize) -> T,
    {
        for (x, y) in Region::whole(self.width(), self.height()).cells() {
            if let Some(cell) = self.get_mut(x, y) {
                *cell = generator(x, y);
            }
        }
    }

    /// Write `generator(offset)` into every cell, in row-major order
    pub fn fill_with_offset<F>(&mut self, mut generator: F)
    where
        F: FnMut(usize) -> T,
    {
        for (offset, cell) in self.iter_mut().enumerate() {
            *cell = generator(offset);
        }
    }

    /// Write `generator()` into every cell, in row-major order
    pub fn fill_with_fn<F>(&mut self, mut generator: F)
    where
        F: FnMut() -> T,
    {
        for cell in self.iter_mut() {
            *cell = generator();
        }
    }

    /// Write `generator(x, y)` into every cell of a region
    ///
    /// # Errors
    ///
    /// Returns `GridError::RegionOutOfBounds` if the region does not fit;
    /// the generator is never called in that case.
    pub fn fill_region_with<F>(&mut self, region: Region, mut generator: F) -> Result<()>
    where
        F: FnMut(usize, usize) -> T,
    {
        for (x, y) in self.region_cells(region)? {
            if let Some(cell) = self.get_mut(x, y) {
                *cell = generator(x, y);
            }
        }
        Ok(())
    }

    /// Replace every cell with `transform(cell)`, in column-major order
    pub fn map_in_place<F>(&mut self, mut transform: F)
    where
        F: FnMut(&T) -> T,
    {
        for (x, y) in Region::whole(self.width(), self.height()).cells() {
            if let Some(cell) = self.get_mut(x, y) {
                *cell = transform(&*cell);
            }
        }
    }

    /// Replace every cell of a region with `transform(cell)`
    ///
    /// # Errors
    ///
    /// Returns `GridError::RegionOutOfBounds` if the region does not fit;
    /// nothing is written in that case.
    pub fn map_region<F>(&mut self, region: Region, mut transform: F) -> Result<()>
    where
        F: FnMut(&T) -> T,
    {
        for (x, y) in self.region_cells(region)? {
            if let Some(cell) = self.get_mut(x, y) {
                *cell = transform(&*cell);
            }
        }
        Ok(())
    }

    /// Write `value` into every cell of the outermost ring
    ///
    /// Covers rows `0` and `height - 1` entirely, then columns `0` and
    /// `width - 1` for the rows in between.
    pub fn fill_borders(&mut self, value: T)
    where
        T: Clone,
    {
        let (width, height) = self.dimensions();
        let last_row = height - 1;
        for x in 0..width {
            for y in [0, last_row] {
                if let Some(cell) = self.get_mut(x, y) {
                    *cell = value.clone();
                }
            }
        }

        let last_column = width - 1;
        for y in 1..last_row {
            for x in [0, last_column] {
                if let Some(cell) = self.get_mut(x, y) {
                    *cell = value.clone();
                }
            }
        }
    }

    /// Visit every cell in row-major order
    pub fn for_each<F>(&self, mut action: F)
    where
        F: FnMut(&T),
    {
        for cell in self.iter() {
            action(cell);
        }
    }

    /// Visit every cell where `predicate` holds
    pub fn for_each_where<P, F>(&self, mut predicate: P, mut action: F)
    where
        P: FnMut(&T) -> bool,
        F: FnMut(&T),
    {
        for cell in self.iter() {
            if predicate(cell) {
                action(cell);
            }
        }
    }

    /// Visit every `(offset, cell)` in row-major order
    pub fn for_each_offset<F>(&self, mut action: F)
    where
        F: FnMut(usize, &T),
    {
        for (offset, cell) in self.iter().enumerate() {
            action(offset, cell);
        }
    }

    /// Visit every `(x, y, cell)` in column-major order
    pub fn for_each_coord<F>(&self, mut action: F)
    where
        F: FnMut(usize, usize, &T),
    {
        for (x, y) in Region::whole(self.width(), self.height()).cells() {
            if let Some(cell) = self.get(x, y) {
                action(x, y, cell);
            }
        }
    }

    /// Visit every `(x, y, cell)` of a region in column-major order
    ///
    /// # Errors
    ///
    /// Returns `GridError::RegionOutOfBounds` if the region does not fit;
    /// `action` is never called in that case.
    pub fn for_each_in_region<F>(&self, region: Region, mut action: F) -> Result<()>
    where
        F: FnMut(usize, usize, &T),
    {
        self.scan_region(region, |x, y| {
            if let Some(cell) = self.get(x, y) {
                action(x, y, cell);
            }
        })
    }

    /// Visit every `(offset, cell)` of a region in column-major order
    ///
    /// # Errors
    ///
    /// Returns `GridError::RegionOutOfBounds` if the region does not fit;
    /// `action` is never called in that case.
    pub fn for_each_offset_in_region<F>(&self, region: Region, mut action: F) -> Result<()>
    where
        F: FnMut(usize, &T),
    {
        self.scan_region(region, |x, y| {
            if let (Some(offset), Some(cell)) = (self.index_of(x, y), self.get(x, y)) {
                action(offset, cell);
            }
        })
    }

    /// Logical AND of `predicate` over a region
    ///
    /// Returns `false` for a region that does not fit, and stops at the
    /// first cell that fails.
    pub fn true_for_all<P>(&self, region: Region, mut predicate: P) -> bool
    where
        P: FnMut(&T) -> bool,
    {
        self.region_cells(region).is_ok_and(|mut cells| {
            cells.all(|(x, y)| self.get(x, y).is_some_and(&mut predicate))
        })
    }

    /// Logical OR of `predicate` over a region
    ///
    /// Returns `false` for a region that does not fit, and stops at the
    /// first cell that passes.
    pub fn true_for_any<P>(&self, region: Region, mut predicate: P) -> bool
    where
        P: FnMut(&T) -> bool,
    {
        self.region_cells(region).is_ok_and(|mut cells| {
            cells.any(|(x, y)| self.get(x, y).is_some_and(&mut predicate))
        })
    }
}
