//! Cellular-automaton cave generation
//!
//! Seeds a boolean grid with random walls, walls in the border ring, then
//! smooths it so walls clump into caverns. `true` marks a wall.

use rand::{Rng, SeedableRng, rngs::StdRng};

use crate::algorithm::smoothing::SmoothingRules;
use crate::io::configuration::{
    DEFAULT_CAVE_HEIGHT, DEFAULT_CAVE_WIDTH, DEFAULT_FILL_PROBABILITY, DEFAULT_SEED,
    DEFAULT_SMOOTHING_ITERATIONS, DEFAULT_SMOOTHING_THRESHOLD, NEIGHBORHOOD_SIZE,
};
use crate::io::error::{Result, invalid_parameter};
use crate::spatial::grid::Grid;

/// Parameters controlling cave generation
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CaveConfig {
    /// Cave width in cells
    pub width: usize,
    /// Cave height in cells
    pub height: usize,
    /// Probability that a cell starts as a wall
    pub fill_probability: f64,
    /// Number of smoothing passes
    pub smoothing_iterations: usize,
    /// Neighbor-count threshold for smoothing
    pub threshold: u8,
    /// Seed for the random fill
    pub seed: u64,
}

impl Default for CaveConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_CAVE_WIDTH,
            height: DEFAULT_CAVE_HEIGHT,
            fill_probability: DEFAULT_FILL_PROBABILITY,
            smoothing_iterations: DEFAULT_SMOOTHING_ITERATIONS,
            threshold: DEFAULT_SMOOTHING_THRESHOLD,
            seed: DEFAULT_SEED,
        }
    }
}

impl CaveConfig {
    /// Check parameters that grid construction does not cover
    ///
    /// # Errors
    ///
    /// Returns `GridError::InvalidParameter` if `fill_probability` is not in
    /// `[0, 1]` or `threshold` exceeds the neighborhood size.
    pub fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.fill_probability) {
            return Err(invalid_parameter(
                "fill_probability",
                &self.fill_probability,
                &"must be between 0 and 1",
            ));
        }
        if self.threshold > NEIGHBORHOOD_SIZE {
            return Err(invalid_parameter(
                "threshold",
                &self.threshold,
                &format!("may not exceed {NEIGHBORHOOD_SIZE} neighbors"),
            ));
        }
        Ok(())
    }
}

/// Seeded cave generator
///
/// Successive calls to `generate` continue the same random stream, so a
/// generator produces a reproducible sequence of caves for a given seed.
#[derive(Debug)]
pub struct CaveGenerator {
    config: CaveConfig,
    rng: StdRng,
}

impl CaveGenerator {
    /// Create a generator after validating its configuration
    ///
    /// # Errors
    ///
    /// Returns `GridError::InvalidParameter` for an invalid configuration.
    pub fn new(config: CaveConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            rng: StdRng::seed_from_u64(config.seed),
        })
    }

    /// Configuration in use
    pub const fn config(&self) -> &CaveConfig {
        &self.config
    }

    /// Generate the next cave
    ///
    /// # Errors
    ///
    /// Returns `GridError::InvalidDimensions` if the configured size is
    /// zero or exceeds `MAX_GRID_DIMENSION`.
    pub fn generate(&mut self) -> Result<Grid<bool>> {
        let CaveConfig {
            width,
            height,
            fill_probability,
            smoothing_iterations,
            threshold,
            seed,
        } = self.config;

        let mut cave = Grid::<bool>::new(width, height)?;
        cave.fill_with_fn(|| self.rng.random_bool(fill_probability));
        cave.fill_borders(true);

        let rules = SmoothingRules::new(
            |cell: &bool| *cell,
            |_: &bool| true,
            |_: &bool| false,
            |cell: &bool| *cell,
        )
        .with_threshold(threshold);
        cave.smooth(smoothing_iterations, &rules);

        let walls = cave.iter().filter(|&&wall| wall).count();
        tracing::info!(width, height, seed, walls, "cave generated");

        Ok(cave)
    }
}

/// Marching-squares mask of wall neighbors for every cell of a cave
pub fn tile_masks(cave: &Grid<bool>) -> Grid<u8> {
    cave.neighbor_masks(|wall: &bool| *wall)
}
