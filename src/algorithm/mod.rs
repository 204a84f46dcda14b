/// Seeded cave generation built on smoothing
pub mod caves;
/// Region fills, transforms and predicate folds
pub mod fill;
/// Neighbor counting and marching-squares masks
pub mod neighbors;
/// Threshold-driven cellular-automaton smoothing
pub mod smoothing;

pub use caves::{CaveConfig, CaveGenerator};
pub use neighbors::Direction;
pub use smoothing::SmoothingRules;
