//! Rendering materials for the galaxy point-sets.
//!
//! ## Material Bindings (@group(2))
//!
//! ```wgsl
//! struct GalaxyPointMaterial {
//!     color: vec4<f32>,       // linear RGBA
//!     size: f32,              // world units (attenuated) or pixels
//!     opacity: f32,           // rewritten every frame by the shimmer
//!     size_attenuation: u32,  // 1 = perspective-scaled
//!     additive: u32,          // 1 = premultiplied output for AlphaMode::Add
//! }
//! @group(2) @binding(0) var<uniform> material: GalaxyPointMaterial;
//! ```
//!
//! Views and mesh transforms come from Bevy's mesh pipeline in groups 0 and 1.

/// Point-sprite material, presets and blending modes.
pub mod point_material;
