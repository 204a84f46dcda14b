//! Grid constants and runtime configuration defaults

/// Number of cells in a Moore neighborhood (radius 1, center excluded)
pub const NEIGHBORHOOD_SIZE: u8 = 8;

// Count strictly above this flips towards the predicate, strictly below away from it
/// Default neighbor-count threshold for smoothing passes
pub const DEFAULT_SMOOTHING_THRESHOLD: u8 = 4;

// Safety limit to prevent excessive memory allocation
/// Maximum allowed grid dimension
pub const MAX_GRID_DIMENSION: usize = 10_000;

// Default values for cave generation
/// Fixed seed for reproducible generation
pub const DEFAULT_SEED: u64 = 42;

/// Probability that a cell starts as a wall before smoothing
pub const DEFAULT_FILL_PROBABILITY: f64 = 0.45;

/// Number of smoothing passes applied to a freshly filled cave
pub const DEFAULT_SMOOTHING_ITERATIONS: usize = 5;

/// Default cave width in cells
pub const DEFAULT_CAVE_WIDTH: usize = 64;

/// Default cave height in cells
pub const DEFAULT_CAVE_HEIGHT: usize = 48;
