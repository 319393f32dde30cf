use bevy::prelude::*;

use crate::engine::animation::clock::WallClock;
use crate::engine::render::point_material::GalaxyPointMaterial;

/// Everything the scene assembler created that later systems need to reach.
///
/// Inserted once at startup. The animation driver owns point-set rotation and
/// material opacity; the viewport adapter owns the camera projection.
#[derive(Resource, Debug, Clone)]
pub struct GalaxySession {
    pub stars: Entity,
    pub core: Entity,
    pub camera: Entity,
    pub directional_light: Entity,
    pub star_material: Handle<GalaxyPointMaterial>,
    pub core_material: Handle<GalaxyPointMaterial>,
}

/// Seed for the star-position generator.
#[derive(Resource, Debug, Clone, Copy, PartialEq, Eq)]
pub struct GalaxySeed(pub u64);

impl Default for GalaxySeed {
    /// A fresh galaxy per run, seeded from the wall clock.
    fn default() -> Self {
        Self(WallClock::System.now_millis() as u64)
    }
}

/// Optional cap on the number of frames before the app exits.
#[derive(Resource, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FrameBudget {
    pub max_frames: Option<u64>,
    pub frames_elapsed: u64,
}

impl FrameBudget {
    pub fn limited(max_frames: u64) -> Self {
        Self {
            max_frames: Some(max_frames),
            frames_elapsed: 0,
        }
    }

    /// Count one frame; true once the cap is reached.
    pub fn tick(&mut self) -> bool {
        self.frames_elapsed += 1;
        self.max_frames
            .is_some_and(|max_frames| self.frames_elapsed >= max_frames)
    }
}
