//! Spatial data structures and grid addressing
//!
//! This module contains spatial-related functionality including:
//! - The dense grid container and its coordinate/offset addressing
//! - Rectangular region traversal
//! - Conversion between grid coordinates and a host's local space

/// Grid storage, addressing and cell access
pub mod grid;
/// Local-space geometry for grid cells
pub mod local;
/// Rectangular region traversal engine
pub mod region;

pub use grid::Grid;
pub use local::{LocalFrame, PlanarPoint};
pub use region::{Region, RegionCells};
