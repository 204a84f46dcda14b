/// Grid constants and configuration defaults
pub mod configuration;
/// Error types for grid operations
pub mod error;
