use bevy::prelude::*;

use crate::constants::galaxy::{
    CORE_OPACITY_FLOOR, CORE_OPACITY_SWING, CORE_ROTATION_SPEED, CORE_SHIMMER_FREQUENCY,
    SHIMMER_SPEED, STAR_OPACITY_FLOOR, STAR_OPACITY_SWING, STAR_SHIMMER_FREQUENCY,
    STARS_ROTATION_SPEED,
};

/// Rotation and opacity for one frame.
///
/// Recomputed from scratch every frame; the last value is kept as a resource
/// so other systems and tests can read what was applied.
#[derive(Resource, Debug, Clone, Copy, PartialEq, Default)]
pub struct FrameState {
    /// Absolute Y rotation of the halo in radians.
    pub stars_rotation: f32,
    /// Absolute Y rotation of the core in radians.
    pub core_rotation: f32,
    pub star_opacity: f32,
    pub core_opacity: f32,
}

impl FrameState {
    /// `elapsed_secs` is session time; `wall_clock_millis` is Unix time.
    /// Evaluated in f64 because epoch milliseconds overwhelm f32 precision
    /// long before the sine is taken.
    pub fn compute(elapsed_secs: f64, wall_clock_millis: f64) -> Self {
        let shimmer_t = wall_clock_millis * SHIMMER_SPEED;

        Self {
            stars_rotation: (elapsed_secs * STARS_ROTATION_SPEED) as f32,
            core_rotation: (elapsed_secs * CORE_ROTATION_SPEED) as f32,
            star_opacity: shimmer(
                shimmer_t,
                STAR_SHIMMER_FREQUENCY,
                STAR_OPACITY_FLOOR,
                STAR_OPACITY_SWING,
            ),
            core_opacity: shimmer(
                shimmer_t,
                CORE_SHIMMER_FREQUENCY,
                CORE_OPACITY_FLOOR,
                CORE_OPACITY_SWING,
            ),
        }
    }
}

fn shimmer(shimmer_t: f64, frequency: f64, floor: f64, swing: f64) -> f32 {
    ((shimmer_t * frequency).sin().abs() * swing + floor) as f32
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use proptest::prelude::*;
    use std::f64::consts::PI;

    const NOW_MILLIS: f64 = 1_760_659_200_000.0;

    #[test]
    fn session_start_has_no_rotation() {
        let state = FrameState::compute(0.0, NOW_MILLIS);

        assert_eq!(state.stars_rotation, 0.0);
        assert_eq!(state.core_rotation, 0.0);
    }

    #[test]
    fn rotation_is_absolute_in_elapsed_time() {
        let first = FrameState::compute(12.5, NOW_MILLIS);
        let again = FrameState::compute(12.5, NOW_MILLIS + 1000.0);

        assert_eq!(first.stars_rotation, again.stars_rotation);
        assert_relative_eq!(first.stars_rotation, 0.625);
        assert_relative_eq!(first.core_rotation, 1.25);
    }

    #[test]
    fn shimmer_hits_its_floor_and_peak() {
        // shimmer_t * 0.002 = 0 at zero millis: both oscillators sit on their floors.
        let floor = FrameState::compute(0.0, 0.0);
        assert_relative_eq!(floor.star_opacity, 0.2);
        assert_relative_eq!(floor.core_opacity, 0.4);

        // shimmer_t * 0.002 = pi/2 puts the halo at its peak and the core back on its floor.
        let peak_millis = PI / 2.0 / STAR_SHIMMER_FREQUENCY / SHIMMER_SPEED;
        let peak = FrameState::compute(0.0, peak_millis);
        assert_relative_eq!(peak.star_opacity, 1.0, epsilon = 1e-6);
        assert_relative_eq!(peak.core_opacity, 0.4, epsilon = 1e-6);
    }

    #[test]
    fn shimmer_ignores_session_time() {
        let early = FrameState::compute(1.0, NOW_MILLIS);
        let late = FrameState::compute(9000.0, NOW_MILLIS);

        assert_eq!(early.star_opacity, late.star_opacity);
        assert_eq!(early.core_opacity, late.core_opacity);
    }

    proptest! {
        #[test]
        fn opacities_stay_in_designed_ranges(
            elapsed in 0.0f64..1.0e6,
            millis in 0.0f64..4.0e12,
        ) {
            let state = FrameState::compute(elapsed, millis);

            prop_assert!((0.2 - 1e-6..=1.0 + 1e-6).contains(&state.star_opacity));
            prop_assert!((0.4 - 1e-6..=1.0 + 1e-6).contains(&state.core_opacity));
        }

        #[test]
        fn core_spins_twice_as_fast(elapsed in 1.0e-3f64..1.0e6) {
            let state = FrameState::compute(elapsed, NOW_MILLIS);

            prop_assert!((state.core_rotation / state.stars_rotation - 2.0).abs() < 1e-5);
        }
    }
}
