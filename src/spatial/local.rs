//! Conversion between grid coordinates and a host's local space
//!
//! The grid is centered on the local origin and lies in a plane of the host
//! space. Each cell is a `spacing`-sized square whose center is the point
//! returned by `LocalFrame::to_local`. The point representation is chosen by
//! the caller through `PlanarPoint`, so 2D hosts and 3D hosts (XZ ground
//! plane) share one implementation.

use num_traits::Float;

use crate::io::error::{Result, invalid_parameter};
use crate::spatial::grid::Grid;
use crate::spatial::region::Region;

/// A point type that can be built from and projected onto the grid plane
///
/// `u` follows grid columns (x) and `v` follows grid rows (y).
pub trait PlanarPoint<F: Float>: Sized {
    /// Build a point lying on the grid plane
    fn from_plane(u: F, v: F) -> Self;

    /// Project a point onto the grid plane
    fn plane(&self) -> (F, F);
}

impl<F: Float> PlanarPoint<F> for [F; 2] {
    fn from_plane(u: F, v: F) -> Self {
        [u, v]
    }

    fn plane(&self) -> (F, F) {
        let [u, v] = *self;
        (u, v)
    }
}

// Ground plane of a y-up 3D space: columns run along x, rows along z
impl<F: Float> PlanarPoint<F> for [F; 3] {
    fn from_plane(u: F, v: F) -> Self {
        [u, F::zero(), v]
    }

    fn plane(&self) -> (F, F) {
        let [u, _, v] = *self;
        (u, v)
    }
}

/// Converts `usize` to the float type (never fails for IEEE floats)
fn to_float<F: Float>(value: usize) -> F {
    F::from(value).unwrap_or_else(F::nan)
}

/// Geometry of a grid placed in local space
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LocalFrame<F> {
    width: usize,
    height: usize,
    spacing: F,
}

impl<F: Float> LocalFrame<F> {
    /// Create a frame for a grid of the given dimensions and cell spacing
    ///
    /// # Errors
    ///
    /// Returns `GridError::InvalidParameter` if `spacing` is not a positive
    /// finite number.
    pub fn new(width: usize, height: usize, spacing: F) -> Result<Self> {
        if !spacing.is_finite() || spacing <= F::zero() {
            return Err(invalid_parameter(
                "spacing",
                &spacing.to_f64().unwrap_or(f64::NAN),
                &"must be a positive finite number",
            ));
        }
        Ok(Self {
            width,
            height,
            spacing,
        })
    }

    /// Distance between neighboring cell centers
    pub const fn spacing(&self) -> F {
        self.spacing
    }

    fn half_extent(&self, cells: usize) -> F {
        to_float::<F>(cells) * self.spacing / to_float(2)
    }

    fn axis_to_local(&self, index: usize, cells: usize) -> F {
        let half = self.spacing / to_float(2);
        to_float::<F>(index) * self.spacing - self.half_extent(cells) + half
    }

    fn axis_from_local(&self, value: F, cells: usize) -> Option<usize> {
        let index = ((value + self.half_extent(cells)) / self.spacing)
            .floor()
            .to_isize()?;
        usize::try_from(index).ok().filter(|&index| index < cells)
    }

    /// Center of cell `(x, y)` in local space
    pub fn to_local<P: PlanarPoint<F>>(&self, x: usize, y: usize) -> P {
        P::from_plane(
            self.axis_to_local(x, self.width),
            self.axis_to_local(y, self.height),
        )
    }

    /// Center of the cell at a row-major offset in local space
    pub fn offset_to_local<P: PlanarPoint<F>>(&self, offset: usize) -> P {
        self.to_local(offset % self.width.max(1), offset / self.width.max(1))
    }

    /// Center of a region in local space
    ///
    /// Returns `None` for a region covering no cells.
    pub fn region_center<P: PlanarPoint<F>>(&self, region: &Region) -> Option<P> {
        if region.is_empty() {
            return None;
        }
        let (x_end, y_end) = region.end()?;
        let half = to_float::<F>(1) / to_float(2);
        let (start_u, start_v) = self.to_local::<[F; 2]>(region.x, region.y).plane();
        let (end_u, end_v) = self.to_local::<[F; 2]>(x_end - 1, y_end - 1).plane();
        Some(P::from_plane(
            start_u + (end_u - start_u) * half,
            start_v + (end_v - start_v) * half,
        ))
    }

    /// Cell containing a local-space point
    ///
    /// Returns `None` if the point falls outside the grid. Indices are
    /// floored, so a point up to one `spacing` past the near edge is outside
    /// rather than truncated into the first row or column.
    pub fn from_local<P: PlanarPoint<F>>(&self, point: &P) -> Option<(usize, usize)> {
        let (u, v) = point.plane();
        let x = self.axis_from_local(u, self.width)?;
        let y = self.axis_from_local(v, self.height)?;
        Some((x, y))
    }
}

impl<T> Grid<T> {
    /// Local-space frame for this grid with the given cell spacing
    ///
    /// # Errors
    ///
    /// Returns `GridError::InvalidParameter` if `spacing` is not a positive
    /// finite number.
    pub fn local_frame<F: Float>(&self, spacing: F) -> Result<LocalFrame<F>> {
        LocalFrame::new(self.width(), self.height(), spacing)
    }
}
