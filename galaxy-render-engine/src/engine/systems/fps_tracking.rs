use bevy::diagnostic::{DiagnosticsStore, FrameTimeDiagnosticsPlugin};
use bevy::prelude::*;

use crate::constants::render_settings::FPS_LOG_INTERVAL_SECS;

/// Marker for the native FPS readout.
#[cfg(not(target_arch = "wasm32"))]
#[derive(Component)]
pub struct FpsText;

fn smoothed_fps(diagnostics: &DiagnosticsStore) -> Option<f64> {
    diagnostics
        .get(&FrameTimeDiagnosticsPlugin::FPS)
        .and_then(|fps| fps.smoothed())
}

pub fn fps_log_system(
    diagnostics: Res<DiagnosticsStore>,
    mut last_log_time: Local<f32>,
    time: Res<Time>,
) {
    let current_time = time.elapsed_secs();
    if current_time - *last_log_time < FPS_LOG_INTERVAL_SECS {
        return;
    }

    if let Some(fps) = smoothed_fps(&diagnostics) {
        info!("FPS: {fps:.1}");
        *last_log_time = current_time;
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub fn spawn_fps_overlay(mut commands: Commands) {
    commands.spawn((
        Name::new("fps_overlay"),
        Text::new("FPS: "),
        TextFont {
            font_size: 16.0,
            ..default()
        },
        TextColor(Color::srgb(1., 0., 0.)),
        Node {
            position_type: PositionType::Absolute,
            bottom: Val::Px(12.0),
            right: Val::Px(12.0),
            ..default()
        },
        FpsText,
    ));
}

#[cfg(not(target_arch = "wasm32"))]
pub fn fps_text_update_system(
    diagnostics: Res<DiagnosticsStore>,
    mut query: Query<&mut Text, With<FpsText>>,
) {
    let Some(fps) = smoothed_fps(&diagnostics) else {
        return;
    };

    for mut text in &mut query {
        text.0 = format!("FPS: {fps:.1}");
    }
}
