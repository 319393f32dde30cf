pub mod animation;
pub mod camera;
pub mod core;
pub mod generation;
pub mod mesh;
pub mod render;
pub mod scene;
pub mod systems;
pub mod viewport;
