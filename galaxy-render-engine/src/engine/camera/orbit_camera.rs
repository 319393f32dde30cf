use std::f32::consts::{FRAC_PI_2, TAU};

use bevy::input::mouse::{MouseMotion, MouseScrollUnit, MouseWheel};
use bevy::{prelude::*, window::PrimaryWindow};

use crate::constants::render_settings::{
    ORBIT_DAMPING_FACTOR, ORBIT_MAX_RADIUS, ORBIT_MIN_RADIUS, ORBIT_PAN_SPEED,
    ORBIT_ROTATE_SPEED, ORBIT_ZOOM_SPEED,
};
use crate::engine::core::session::GalaxySession;

/// Keeps the camera off the poles so `looking_at` has a stable up vector.
const PITCH_LIMIT: f32 = FRAC_PI_2 - 0.001;

/// Per-notch dolly ratio before `zoom_speed` is applied.
const ZOOM_STEP: f32 = 0.95;

/// Pixel scroll deltas are much finer than line deltas.
const PIXELS_PER_LINE: f32 = 20.0;

/// Used when no window is available to normalise drag distances.
const FALLBACK_VIEWPORT_HEIGHT: f32 = 720.0;

/// Damped orbit around a target point.
///
/// Pointer input accumulates into pending deltas; `update` applies a
/// `damping_factor` share of them each frame and decays the rest, so motion
/// coasts to a stop after the pointer is released.
#[derive(Resource, Debug, Clone)]
pub struct OrbitCamera {
    pub target: Vec3,
    pub radius: f32,
    /// Azimuth around +Y, zero looking down -Z from +Z.
    pub yaw: f32,
    /// Elevation above the XZ plane.
    pub pitch: f32,
    pub damping_factor: f32,
    pub rotate_speed: f32,
    pub zoom_speed: f32,
    pub pan_speed: f32,
    pub min_radius: f32,
    pub max_radius: f32,
    pending_yaw: f32,
    pending_pitch: f32,
    pending_pan: Vec3,
    pending_scale: f32,
}

impl OrbitCamera {
    /// Orbit that reproduces a camera placed at `eye` looking at `target`.
    pub fn looking_from(eye: Vec3, target: Vec3) -> Self {
        let offset = eye - target;
        let radius = offset.length();
        let (yaw, pitch) = if radius > f32::EPSILON {
            (
                offset.x.atan2(offset.z),
                (offset.y / radius).clamp(-1.0, 1.0).asin(),
            )
        } else {
            (0.0, 0.0)
        };

        Self {
            target,
            radius,
            yaw,
            pitch: pitch.clamp(-PITCH_LIMIT, PITCH_LIMIT),
            damping_factor: ORBIT_DAMPING_FACTOR,
            rotate_speed: ORBIT_ROTATE_SPEED,
            zoom_speed: ORBIT_ZOOM_SPEED,
            pan_speed: ORBIT_PAN_SPEED,
            min_radius: ORBIT_MIN_RADIUS,
            max_radius: ORBIT_MAX_RADIUS,
            pending_yaw: 0.0,
            pending_pitch: 0.0,
            pending_pan: Vec3::ZERO,
            pending_scale: 1.0,
        }
    }

    pub fn eye(&self) -> Vec3 {
        let horizontal = self.radius * self.pitch.cos();
        self.target
            + Vec3::new(
                horizontal * self.yaw.sin(),
                self.radius * self.pitch.sin(),
                horizontal * self.yaw.cos(),
            )
    }

    pub fn transform(&self) -> Transform {
        Transform::from_translation(self.eye()).looking_at(self.target, Vec3::Y)
    }

    /// A full viewport-height drag turns the camera once around.
    pub fn rotate(&mut self, drag: Vec2, viewport_height: f32) {
        let per_pixel = TAU / viewport_height.max(1.0) * self.rotate_speed;
        self.pending_yaw -= drag.x * per_pixel;
        self.pending_pitch += drag.y * per_pixel;
    }

    /// Positive lines dolly in.
    pub fn zoom(&mut self, lines: f32) {
        self.pending_scale *= ZOOM_STEP.powf(self.zoom_speed * lines);
    }

    /// Drag the target so the point under the cursor follows it at target depth.
    pub fn pan(&mut self, drag: Vec2, viewport_height: f32, vertical_fov: f32) {
        let world_per_pixel =
            2.0 * self.radius * (vertical_fov * 0.5).tan() / viewport_height.max(1.0);
        let rotation = self.transform().rotation;
        let right = rotation * Vec3::X;
        let up = rotation * Vec3::Y;
        self.pending_pan += (-right * drag.x + up * drag.y) * world_per_pixel * self.pan_speed;
    }

    /// Advance one frame of damped motion.
    pub fn update(&mut self) {
        let damping = self.damping_factor;

        self.yaw += self.pending_yaw * damping;
        self.pitch = (self.pitch + self.pending_pitch * damping).clamp(-PITCH_LIMIT, PITCH_LIMIT);
        self.target += self.pending_pan * damping;
        self.radius = (self.radius * self.pending_scale).clamp(self.min_radius, self.max_radius);

        self.pending_yaw *= 1.0 - damping;
        self.pending_pitch *= 1.0 - damping;
        self.pending_pan *= 1.0 - damping;
        self.pending_scale = 1.0;
    }
}

/// Orbit camera controller: left drag rotates, right drag pans, wheel dollies.
pub fn orbit_camera_controller(
    session: Res<GalaxySession>,
    mut orbit: ResMut<OrbitCamera>,
    mut cameras: Query<(&mut Transform, &Projection)>,
    mouse_button: Res<ButtonInput<MouseButton>>,
    mut mouse_motion: EventReader<MouseMotion>,
    mut scroll_events: EventReader<MouseWheel>,
    windows: Query<&Window, With<PrimaryWindow>>,
) {
    let Ok((mut camera_transform, projection)) = cameras.get_mut(session.camera) else {
        return;
    };

    let viewport_height = windows
        .single()
        .map(|window| window.height())
        .unwrap_or(FALLBACK_VIEWPORT_HEIGHT);

    let mouse_delta: Vec2 = mouse_motion.read().map(|m| m.delta).sum();
    if mouse_delta != Vec2::ZERO {
        if mouse_button.pressed(MouseButton::Left) {
            orbit.rotate(mouse_delta, viewport_height);
        } else if mouse_button.pressed(MouseButton::Right) {
            let fov = match projection {
                Projection::Perspective(perspective) => perspective.fov,
                _ => FRAC_PI_2,
            };
            orbit.pan(mouse_delta, viewport_height, fov);
        }
    }

    let scroll_lines: f32 = scroll_events
        .read()
        .map(|ev| match ev.unit {
            MouseScrollUnit::Line => ev.y,
            MouseScrollUnit::Pixel => ev.y / PIXELS_PER_LINE,
        })
        .sum();
    if scroll_lines.abs() > f32::EPSILON {
        orbit.zoom(scroll_lines);
    }

    orbit.update();
    *camera_transform = orbit.transform();
}
