/// Command-line argument parsing and run orchestration
pub mod cli;
/// Board constants and runtime defaults
pub mod configuration;
/// Error types for configuration and output
pub mod error;
/// Quiet-mode progress spinner
pub mod progress;
/// Text diagrams of tiled boards
pub mod render;
