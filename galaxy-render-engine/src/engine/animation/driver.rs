use bevy::prelude::*;

use super::clock::WallClock;
use super::frame_state::FrameState;
use crate::engine::core::session::GalaxySession;
use crate::engine::render::point_material::GalaxyPointMaterial;

/// Per-frame galaxy animation.
///
/// Rotation angles are absolute functions of session time, so re-running the
/// system with the same clock reading writes the same transforms.
pub fn animate_galaxy(
    session: Res<GalaxySession>,
    time: Res<Time<Real>>,
    wall_clock: Res<WallClock>,
    mut frame_state: ResMut<FrameState>,
    mut transforms: Query<&mut Transform>,
    mut materials: ResMut<Assets<GalaxyPointMaterial>>,
) {
    let state = FrameState::compute(time.elapsed_secs_f64(), wall_clock.now_millis());

    for (entity, angle) in [
        (session.stars, state.stars_rotation),
        (session.core, state.core_rotation),
    ] {
        if let Ok(mut transform) = transforms.get_mut(entity) {
            transform.rotation = Quat::from_rotation_y(angle);
        } else {
            warn!("Point-set {:?} missing; rotation skipped", entity);
        }
    }

    for (handle, opacity) in [
        (&session.star_material, state.star_opacity),
        (&session.core_material, state.core_opacity),
    ] {
        if let Some(material) = materials.get_mut(handle) {
            material.set_opacity(opacity);
        }
    }

    *frame_state = state;
}
