//! Dense fixed-size 2D grid for procedural content generation
//!
//! The grid stores cells row-major and exposes a single region traversal
//! primitive that fills, transforms and predicate folds are built on, plus
//! the two neighbor-analysis algorithms procedural generators need:
//! out-of-bounds-aware neighbor counting (cellular-automaton caves) and
//! clockwise 8-bit neighbor masks (marching-squares tile selection).

#![forbid(unsafe_code)]

/// Neighbor analysis, bulk mutation, smoothing and cave generation
pub mod algorithm;
/// Error handling and configuration defaults
pub mod io;
/// Grid storage, addressing, regions and local-space geometry
pub mod spatial;

pub use io::error::{GridError, Result};
pub use spatial::{Grid, Region};
