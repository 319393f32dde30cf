use bevy::pbr::light_consts;
use bevy::prelude::*;

use crate::constants::render_settings::{
    AMBIENT_LIGHT_BRIGHTNESS, AMBIENT_LIGHT_COLOR, DIRECTIONAL_LIGHT_COLOR,
    DIRECTIONAL_LIGHT_DIRECTION,
};
use crate::engine::render::point_material::srgb_hex;

/// Spawn the scene lights and return the directional light entity.
///
/// The point material is unlit, so these only matter for any lit geometry
/// that shares the scene.
pub fn spawn_lighting(commands: &mut Commands) -> Entity {
    commands.insert_resource(AmbientLight {
        color: srgb_hex(AMBIENT_LIGHT_COLOR),
        brightness: AMBIENT_LIGHT_BRIGHTNESS,
        ..default()
    });

    commands
        .spawn((
            Name::new("galaxy_directional_light"),
            DirectionalLight {
                color: srgb_hex(DIRECTIONAL_LIGHT_COLOR),
                illuminance: light_consts::lux::AMBIENT_DAYLIGHT,
                shadows_enabled: false,
                ..default()
            },
            Transform::from_translation(DIRECTIONAL_LIGHT_DIRECTION.normalize())
                .looking_at(Vec3::ZERO, Vec3::Y),
        ))
        .id()
}
