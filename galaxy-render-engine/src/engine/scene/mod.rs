//! Galaxy scene assembly.
//!
//! Turns generated star positions into point-set entities and spawns the
//! camera and lights around them, once, at startup.

/// Startup system building the point-sets, camera and `GalaxySession`.
pub mod assembler;

/// Ambient and directional lights.
pub mod lighting;
