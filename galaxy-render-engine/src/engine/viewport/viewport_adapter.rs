use bevy::prelude::*;
use bevy::window::{PrimaryWindow, WindowResized};

use crate::constants::render_settings::MAX_PIXEL_DENSITY;
use crate::engine::core::session::GalaxySession;

/// Camera and surface parameters derived from one resize.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewportMetrics {
    pub width: f32,
    pub height: f32,
    pub aspect_ratio: f32,
    pub pixel_density: f32,
}

impl ViewportMetrics {
    /// `None` for a collapsed surface (e.g. a minimised window), which has no
    /// meaningful aspect ratio.
    pub fn from_surface(width: f32, height: f32, device_pixel_ratio: f32) -> Option<Self> {
        if width <= 0.0 || height <= 0.0 {
            return None;
        }

        Some(Self {
            width,
            height,
            aspect_ratio: width / height,
            pixel_density: clamp_pixel_density(device_pixel_ratio),
        })
    }
}

/// Cap high-density displays at `MAX_PIXEL_DENSITY`.
pub fn clamp_pixel_density(device_pixel_ratio: f32) -> f32 {
    device_pixel_ratio.min(MAX_PIXEL_DENSITY)
}

/// Apply window resizes to the galaxy camera and the output surface.
pub fn apply_viewport_resize(
    session: Res<GalaxySession>,
    mut resize_events: EventReader<WindowResized>,
    mut windows: Query<&mut Window>,
    mut projections: Query<&mut Projection>,
) {
    for event in resize_events.read() {
        let Ok(mut window) = windows.get_mut(event.window) else {
            continue;
        };
        let Ok(mut projection) = projections.get_mut(session.camera) else {
            continue;
        };

        fit_viewport(&mut window, &mut projection, event.width, event.height);
    }
}

/// Startup pass over the primary window, since no resize event is
/// guaranteed before the first frame.
pub fn fit_primary_viewport(
    session: Res<GalaxySession>,
    mut windows: Query<&mut Window, With<PrimaryWindow>>,
    mut projections: Query<&mut Projection>,
) {
    let Ok(mut window) = windows.single_mut() else {
        debug!("No primary window; viewport left at defaults");
        return;
    };
    let Ok(mut projection) = projections.get_mut(session.camera) else {
        return;
    };

    let (width, height) = (window.width(), window.height());
    fit_viewport(&mut window, &mut projection, width, height);
}

/// `width` and `height` are logical, in the window's current scale factor.
/// The physical surface keeps the size the host gave it; only the pixel
/// density used for logical sizing is capped.
fn fit_viewport(window: &mut Window, projection: &mut Projection, width: f32, height: f32) {
    let device_ratio = window.resolution.base_scale_factor();
    let Some(metrics) = ViewportMetrics::from_surface(width, height, device_ratio) else {
        debug!("Ignoring resize to {}x{}", width, height);
        return;
    };

    if let Projection::Perspective(perspective) = projection {
        perspective.aspect_ratio = metrics.aspect_ratio;
    }

    // Resolve the physical size before the override changes the logical scale.
    let scale_factor = window.resolution.scale_factor();
    let physical_width = (metrics.width * scale_factor).round() as u32;
    let physical_height = (metrics.height * scale_factor).round() as u32;

    if window.resolution.scale_factor_override() != Some(metrics.pixel_density) {
        window
            .resolution
            .set_scale_factor_override(Some(metrics.pixel_density));
    }
    if window.resolution.physical_width() != physical_width
        || window.resolution.physical_height() != physical_height
    {
        window
            .resolution
            .set_physical_resolution(physical_width, physical_height);
    }

    debug!(
        "Viewport fitted to {}x{} px (aspect {:.3}, density {})",
        physical_width, physical_height, metrics.aspect_ratio, metrics.pixel_density
    );
}
