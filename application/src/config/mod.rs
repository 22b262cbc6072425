//! Application-level configuration.
//!
//! - [`DisplayConfig`] — how chamber grids are drawn (glyphs, marker, legend)

pub mod display_config;

pub use display_config::DisplayConfig;
