//! Window resize handling for the galaxy camera and output surface.

/// Resize metrics and the system applying them.
pub mod viewport_adapter;
