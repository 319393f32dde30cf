//! Compile-time parameters for the galaxy scene.
//!
//! The scene has no runtime configuration; everything tunable lives here.

/// Point-cloud generation and animation parameters.
pub mod galaxy;

/// Material presets, camera, lighting and window settings.
pub mod render_settings;
