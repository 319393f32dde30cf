//! Per-frame rotation and shimmer of the galaxy point-sets.
//!
//! Rotation follows session time (`Time<Real>`), shimmer follows the wall
//! clock. Both are evaluated from scratch each frame rather than integrated.

/// Wall-clock source for the shimmer, swappable for a frozen clock in tests.
pub mod clock;

/// Animation system writing rotations and opacities onto the scene.
pub mod driver;

/// Pure per-frame rotation and opacity formulas.
pub mod frame_state;
