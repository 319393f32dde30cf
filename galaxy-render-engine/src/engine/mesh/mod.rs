//! Mesh generation for galaxy point rendering.
//!
//! Points are drawn as camera-facing quads expanded in the vertex shader,
//! since WebGPU offers no control over rasterised point size.

/// Quad-per-point mesh built from a position buffer.
pub mod point_sprite_mesh;
