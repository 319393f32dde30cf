use bevy::asset::AssetMetaCheck;
use bevy::diagnostic::FrameTimeDiagnosticsPlugin;
use bevy::log::{Level, LogPlugin};
use bevy::prelude::*;
use bevy::window::WindowResized;

use crate::constants::render_settings::LOG_FILTER;
use crate::engine::animation::{clock::WallClock, driver::animate_galaxy, frame_state::FrameState};
use crate::engine::camera::orbit_camera::orbit_camera_controller;
use crate::engine::core::session::{FrameBudget, GalaxySeed, GalaxySession};
use crate::engine::core::window_config::create_window_config;
use crate::engine::render::point_material::GalaxyPointMaterial;
use crate::engine::scene::assembler::assemble_galaxy_scene;
use crate::engine::systems::fps_tracking::fps_log_system;
use crate::engine::systems::frame_budget::enforce_frame_budget;
use crate::engine::viewport::viewport_adapter::{apply_viewport_resize, fit_primary_viewport};

#[cfg(not(target_arch = "wasm32"))]
use crate::engine::systems::fps_tracking::{fps_text_update_system, spawn_fps_overlay};

pub fn create_app() -> App {
    let mut app = App::new();

    app.add_plugins(create_default_plugins())
        .add_plugins(MaterialPlugin::<GalaxyPointMaterial>::default())
        .add_plugins(FrameTimeDiagnosticsPlugin::default())
        .add_plugins(GalaxyPlugin)
        .add_systems(Update, fps_log_system);

    // Overlay text only for native builds; the web host draws its own chrome.
    #[cfg(not(target_arch = "wasm32"))]
    {
        app.add_systems(Startup, spawn_fps_overlay)
            .add_systems(Update, fps_text_update_system);
    }

    app
}

/// Galaxy scene, animation, camera and viewport systems.
///
/// Depends only on mesh and material asset storage, time and input, so it
/// also runs on top of `MinimalPlugins`.
pub struct GalaxyPlugin;

impl Plugin for GalaxyPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<GalaxySeed>()
            .init_resource::<WallClock>()
            .init_resource::<FrameState>()
            .init_resource::<FrameBudget>()
            .add_event::<WindowResized>()
            .add_systems(Startup, assemble_galaxy_scene)
            .add_systems(
                PostStartup,
                fit_primary_viewport.run_if(resource_exists::<GalaxySession>),
            )
            .add_systems(
                Update,
                (
                    (animate_galaxy, orbit_camera_controller).chain(),
                    apply_viewport_resize,
                )
                    .run_if(resource_exists::<GalaxySession>),
            )
            .add_systems(Last, enforce_frame_budget);
    }
}

fn create_default_plugins() -> impl PluginGroup {
    let window_config = WindowPlugin {
        primary_window: Some(create_window_config()),
        ..default()
    };

    let asset_config = AssetPlugin {
        meta_check: AssetMetaCheck::Never,
        ..default()
    };

    let log_config = LogPlugin {
        level: Level::INFO,
        filter: LOG_FILTER.to_string(),
        ..default()
    };

    DefaultPlugins
        .set(window_config)
        .set(asset_config)
        .set(log_config)
}

/// Windowless app with the galaxy systems, a fixed seed, a frozen wall clock
/// and 100 ms frames.
#[cfg(test)]
pub(crate) fn headless_app(seed: u64) -> App {
    use bevy::time::TimeUpdateStrategy;
    use std::time::Duration;

    let mut app = App::new();
    app.add_plugins((
        MinimalPlugins,
        AssetPlugin::default(),
        bevy::input::InputPlugin,
    ))
    .init_asset::<Mesh>()
    .init_asset::<GalaxyPointMaterial>()
    .add_plugins(GalaxyPlugin)
    .insert_resource(GalaxySeed(seed))
    .insert_resource(WallClock::Frozen {
        millis: TEST_WALL_CLOCK_MILLIS,
    })
    .insert_resource(TimeUpdateStrategy::ManualDuration(Duration::from_millis(100)));
    app
}

#[cfg(test)]
pub(crate) const TEST_WALL_CLOCK_MILLIS: f64 = 1_760_659_200_000.0;
