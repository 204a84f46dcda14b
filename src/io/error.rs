//! Error types for grid construction, addressing and region traversal

use std::fmt;

use crate::spatial::region::Region;

/// Main error type for all grid operations
#[derive(Debug)]
pub enum GridError {
    /// Grid dimensions are zero or exceed the configured maximum
    InvalidDimensions {
        /// Requested width
        width: usize,
        /// Requested height
        height: usize,
        /// Explanation of why the dimensions are invalid
        reason: String,
    },

    /// A single coordinate pair lies outside the grid
    CoordinateOutOfBounds {
        /// Requested column
        x: usize,
        /// Requested row
        y: usize,
        /// Grid dimensions (width, height)
        grid_dimensions: (usize, usize),
    },

    /// A rectangle does not fit inside the grid and was rejected wholesale
    ///
    /// No cell of the rectangle was visited or written.
    RegionOutOfBounds {
        /// The rejected rectangle
        region: Region,
        /// Grid dimensions (width, height)
        grid_dimensions: (usize, usize),
    },

    /// Backing data does not match the requested shape
    ShapeMismatch {
        /// Number of cells implied by the dimensions
        expected: usize,
        /// Number of cells supplied
        actual: usize,
        /// Underlying ndarray shape error, when one was raised
        source: Option<ndarray::ShapeError>,
    },

    /// Parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDimensions {
                width,
                height,
                reason,
            } => {
                write!(f, "Invalid grid dimensions {width}x{height}: {reason}")
            }
            Self::CoordinateOutOfBounds {
                x,
                y,
                grid_dimensions,
            } => {
                write!(
                    f,
                    "Coordinate [{x},{y}] is outside the grid (size {}x{})",
                    grid_dimensions.0, grid_dimensions.1
                )
            }
            Self::RegionOutOfBounds {
                region,
                grid_dimensions,
            } => {
                write!(
                    f,
                    "Region {region} exceeds the grid bounds (size {}x{})",
                    grid_dimensions.0, grid_dimensions.1
                )
            }
            Self::ShapeMismatch {
                expected, actual, ..
            } => {
                write!(
                    f,
                    "Shape mismatch: expected {expected} cells, got {actual}"
                )
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
        }
    }
}

impl std::error::Error for GridError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ShapeMismatch {
                source: Some(source),
                ..
            } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for grid results
pub type Result<T> = std::result::Result<T, GridError>;

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> GridError {
    GridError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create an error for a rejected rectangle
pub const fn region_out_of_bounds(region: Region, grid_dimensions: (usize, usize)) -> GridError {
    GridError::RegionOutOfBounds {
        region,
        grid_dimensions,
    }
}
