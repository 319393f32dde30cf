//! Runtime systems outside the galaxy animation itself.

/// FPS logging and the native FPS overlay.
pub mod fps_tracking;

/// Optional exit after a fixed number of frames.
pub mod frame_budget;
