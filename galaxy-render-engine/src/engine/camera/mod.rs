//! Orbit camera controls for inspecting the galaxy.
//!
//! Rotation, dolly and pan with inertial damping around a fixed target,
//! updated once per frame after the galaxy animation.

/// Orbit state resource and pointer-driven controller system.
pub mod orbit_camera;
