use bevy::math::Vec3;

use crate::engine::render::point_material::{PointBlending, PointMaterialPreset};

pub const HALO_MATERIAL: PointMaterialPreset = PointMaterialPreset {
    color: 0x6a0dad,
    size: 0.05,
    opacity: 0.8,
    size_attenuation: true,
    blending: PointBlending::Normal,
};

pub const CORE_MATERIAL: PointMaterialPreset = PointMaterialPreset {
    color: 0x8a2be2,
    size: 0.1,
    opacity: 1.0,
    size_attenuation: true,
    blending: PointBlending::Normal,
};

pub const CAMERA_FOV_DEGREES: f32 = 75.0;
pub const CAMERA_NEAR: f32 = 0.1;
pub const CAMERA_FAR: f32 = 200.0;
pub const CAMERA_START_POSITION: Vec3 = Vec3::new(0.0, 0.0, 20.0);

pub const AMBIENT_LIGHT_COLOR: u32 = 0x404040;
pub const AMBIENT_LIGHT_BRIGHTNESS: f32 = 80.0;
pub const DIRECTIONAL_LIGHT_COLOR: u32 = 0xffffff;
/// Un-normalised; the light is placed on the unit vector along this direction.
pub const DIRECTIONAL_LIGHT_DIRECTION: Vec3 = Vec3::ONE;

pub const CLEAR_COLOR: u32 = 0x000000;

/// Upper bound on the device pixel density used for the output surface.
pub const MAX_PIXEL_DENSITY: f32 = 2.0;

pub const ORBIT_DAMPING_FACTOR: f32 = 0.05;
pub const ORBIT_ROTATE_SPEED: f32 = 1.0;
pub const ORBIT_ZOOM_SPEED: f32 = 1.0;
pub const ORBIT_PAN_SPEED: f32 = 1.0;
pub const ORBIT_MIN_RADIUS: f32 = 1.0;
pub const ORBIT_MAX_RADIUS: f32 = 150.0;

pub const WINDOW_TITLE: &str = "Galaxy";
pub const CANVAS_SELECTOR: &str = "canvas.webgl";

pub const LOG_FILTER: &str = "wgpu=error,naga=warn";
pub const FPS_LOG_INTERVAL_SECS: f32 = 5.0;
