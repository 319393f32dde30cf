use bevy::{prelude::*, render::view::NoFrustumCulling, window::PrimaryWindow};
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::constants::galaxy::{
    CORE_COUNT, GALAXY_ARMS, GALAXY_RADIUS, HALO_DISTRIBUTION_SHAPE, STAR_COUNT,
};
use crate::constants::render_settings::{
    CAMERA_FAR, CAMERA_FOV_DEGREES, CAMERA_NEAR, CAMERA_START_POSITION, CLEAR_COLOR,
    CORE_MATERIAL, HALO_MATERIAL,
};
use crate::engine::camera::orbit_camera::OrbitCamera;
use crate::engine::core::session::{GalaxySeed, GalaxySession};
use crate::engine::generation::point_cloud_generator::{
    HaloParams, PositionBuffer, generate_core, generate_halo,
};
use crate::engine::mesh::point_sprite_mesh::create_point_sprite_mesh;
use crate::engine::render::point_material::{GalaxyPointMaterial, PointMaterialPreset, srgb_hex};
use crate::engine::scene::lighting::spawn_lighting;

/// Which population a point-set entity renders.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointSetKind {
    Halo,
    Core,
}

impl PointSetKind {
    fn name(self) -> &'static str {
        match self {
            PointSetKind::Halo => "galaxy_halo",
            PointSetKind::Core => "galaxy_core",
        }
    }
}

/// Startup system: generate both star populations, spawn them with the
/// camera and lights, and record the result in `GalaxySession`.
///
/// Invalid generation parameters abort startup before the first frame.
pub fn assemble_galaxy_scene(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<GalaxyPointMaterial>>,
    seed: Res<GalaxySeed>,
    windows: Query<&Window, With<PrimaryWindow>>,
) -> Result {
    let mut rng = StdRng::seed_from_u64(seed.0);

    // Halo first, then core, from one random stream.
    let halo_params = HaloParams::new(STAR_COUNT, GALAXY_RADIUS, HALO_DISTRIBUTION_SHAPE)?;
    let halo_positions = generate_halo(&halo_params, &mut rng);
    let core_positions = generate_core(CORE_COUNT, &mut rng);

    let (stars, star_material) = spawn_point_set(
        &mut commands,
        &mut meshes,
        &mut materials,
        halo_positions,
        &HALO_MATERIAL,
        PointSetKind::Halo,
    );
    let (core, core_material) = spawn_point_set(
        &mut commands,
        &mut meshes,
        &mut materials,
        core_positions,
        &CORE_MATERIAL,
        PointSetKind::Core,
    );

    let aspect_ratio = windows
        .single()
        .ok()
        .filter(|window| window.height() > 0.0)
        .map(|window| window.width() / window.height());
    let camera = spawn_camera(&mut commands, aspect_ratio);
    let directional_light = spawn_lighting(&mut commands);

    commands.insert_resource(ClearColor(srgb_hex(CLEAR_COLOR)));
    commands.insert_resource(OrbitCamera::looking_from(CAMERA_START_POSITION, Vec3::ZERO));
    commands.insert_resource(GalaxySession {
        stars,
        core,
        camera,
        directional_light,
        star_material,
        core_material,
    });

    info!(
        "Galaxy assembled: {} halo stars (radius {}, {} arms declared), {} core stars, seed {}",
        halo_params.count(),
        halo_params.radius(),
        GALAXY_ARMS,
        CORE_COUNT,
        seed.0
    );

    Ok(())
}

fn spawn_point_set(
    commands: &mut Commands,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<GalaxyPointMaterial>,
    positions: PositionBuffer,
    preset: &PointMaterialPreset,
    kind: PointSetKind,
) -> (Entity, Handle<GalaxyPointMaterial>) {
    let point_count = positions.len();
    let mesh = meshes.add(create_point_sprite_mesh(positions));
    let material = materials.add(GalaxyPointMaterial::from_preset(preset));

    let entity = commands
        .spawn((
            Name::new(kind.name()),
            Mesh3d(mesh),
            MeshMaterial3d(material.clone()),
            Transform::IDENTITY,
            Visibility::Visible,
            kind,
            // Quads are expanded on the GPU, past the CPU-side bounds.
            NoFrustumCulling,
        ))
        .id();

    debug!("Spawned {} with {} points", kind.name(), point_count);

    (entity, material)
}

fn spawn_camera(commands: &mut Commands, aspect_ratio: Option<f32>) -> Entity {
    let mut perspective = PerspectiveProjection {
        fov: CAMERA_FOV_DEGREES.to_radians(),
        near: CAMERA_NEAR,
        far: CAMERA_FAR,
        ..default()
    };
    if let Some(aspect_ratio) = aspect_ratio {
        perspective.aspect_ratio = aspect_ratio;
    }

    commands
        .spawn((
            Name::new("galaxy_camera"),
            Camera3d::default(),
            Projection::Perspective(perspective),
            Transform::from_translation(CAMERA_START_POSITION).looking_at(Vec3::ZERO, Vec3::Y),
        ))
        .id()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::core::app_setup::headless_app;
    use crate::engine::mesh::point_sprite_mesh::VERTICES_PER_POINT;
    use bevy::render::mesh::VertexAttributeValues;

    fn sprite_centres(app: &App, entity: Entity) -> Vec<[f32; 3]> {
        let mesh_handle = app.world().get::<Mesh3d>(entity).unwrap().0.clone();
        let mesh = app.world().resource::<Assets<Mesh>>().get(&mesh_handle).unwrap();
        let Some(VertexAttributeValues::Float32x3(positions)) =
            mesh.attribute(Mesh::ATTRIBUTE_POSITION)
        else {
            panic!("point-set mesh has no float3 positions");
        };
        positions.iter().step_by(VERTICES_PER_POINT).copied().collect()
    }

    #[test]
    fn both_point_sets_are_spawned_with_their_counts() {
        let mut app = headless_app(21);
        app.update();

        let session = app.world().resource::<GalaxySession>().clone();
        let halo = sprite_centres(&app, session.stars);
        let core = sprite_centres(&app, session.core);

        assert_eq!(halo.len(), STAR_COUNT);
        assert_eq!(core.len(), CORE_COUNT);
        assert!(halo.iter().all(|p| Vec3::from_array(*p).length() <= 20.0001));
        assert!(core.iter().flatten().all(|axis| axis.abs() <= 1.0));

        assert_eq!(app.world().get::<PointSetKind>(session.stars), Some(&PointSetKind::Halo));
        assert_eq!(app.world().get::<PointSetKind>(session.core), Some(&PointSetKind::Core));
    }

    #[test]
    fn materials_start_from_presets() {
        let mut app = headless_app(21);
        app.update();

        let session = app.world().resource::<GalaxySession>().clone();
        let materials = app.world().resource::<Assets<GalaxyPointMaterial>>();
        let halo = materials.get(&session.star_material).unwrap();
        let core = materials.get(&session.core_material).unwrap();

        assert_eq!(halo.params.size, HALO_MATERIAL.size);
        assert_eq!(core.params.size, CORE_MATERIAL.size);
        assert_eq!(halo.alpha_mode(), AlphaMode::Blend);
    }

    #[test]
    fn camera_matches_the_configured_perspective() {
        let mut app = headless_app(21);
        app.update();

        let camera = app.world().resource::<GalaxySession>().camera;
        let Some(Projection::Perspective(perspective)) = app.world().get::<Projection>(camera)
        else {
            panic!("galaxy camera should use a perspective projection");
        };
        assert_eq!(perspective.fov, 75f32.to_radians());
        assert_eq!(perspective.near, 0.1);
        assert_eq!(perspective.far, 200.0);

        let transform = app.world().get::<Transform>(camera).unwrap();
        assert!(transform.translation.distance(Vec3::new(0.0, 0.0, 20.0)) < 1e-4);
    }

    #[test]
    fn same_seed_builds_the_same_galaxy() {
        let mut first = headless_app(99);
        first.update();
        let mut second = headless_app(99);
        second.update();

        let first_stars = first.world().resource::<GalaxySession>().stars;
        let second_stars = second.world().resource::<GalaxySession>().stars;
        assert_eq!(
            sprite_centres(&first, first_stars),
            sprite_centres(&second, second_stars)
        );
    }
}
