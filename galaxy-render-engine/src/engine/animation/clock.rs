use bevy::prelude::*;

/// Wall-clock source for the shimmer oscillators.
///
/// Shimmer follows the host clock, not the session clock that drives rotation,
/// so the two drift apart if the host suspends the app.
#[derive(Resource, Debug, Clone, Copy, PartialEq, Default)]
pub enum WallClock {
    #[default]
    System,
    /// Pinned to a fixed Unix time in milliseconds.
    Frozen { millis: f64 },
}

impl WallClock {
    /// Milliseconds since the Unix epoch.
    pub fn now_millis(&self) -> f64 {
        match self {
            WallClock::System => system_millis(),
            WallClock::Frozen { millis } => *millis,
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn system_millis() -> f64 {
    js_sys::Date::now()
}

#[cfg(not(target_arch = "wasm32"))]
fn system_millis() -> f64 {
    use std::time::{SystemTime, UNIX_EPOCH};

    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_secs_f64() * 1000.0)
        .unwrap_or_default()
}
