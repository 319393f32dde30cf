//! Procedural star positions for the galaxy scene.
//!
//! Pure functions over a caller-supplied random source, so seeded runs are
//! reproducible and the sampling can be tested without a renderer.

/// Halo (spherical, centre-biased) and core (unit cube) position sampling.
pub mod point_cloud_generator;
