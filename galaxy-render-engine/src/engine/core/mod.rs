//! Application wiring for native and WASM targets.

/// App construction, the galaxy plugin and the headless test harness.
pub mod app_setup;

/// Resources shared between the galaxy systems.
pub mod session;

/// Platform-specific window configuration.
///
/// Binds to the page canvas on web targets; vsync everywhere.
pub mod window_config;
