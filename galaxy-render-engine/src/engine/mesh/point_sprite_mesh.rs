use bevy::prelude::*;
use bevy::render::mesh::{Indices, PrimitiveTopology};
use bevy::render::render_asset::RenderAssetUsages;

use crate::engine::generation::point_cloud_generator::PositionBuffer;

/// Quad corners in sprite space. The vertex shader scales them by the point size.
const QUAD_CORNERS: [[f32; 2]; 4] = [[-1.0, -1.0], [1.0, -1.0], [1.0, 1.0], [-1.0, 1.0]];

const QUAD_INDICES: [u32; 6] = [0, 1, 2, 0, 2, 3];

pub const VERTICES_PER_POINT: usize = QUAD_CORNERS.len();
pub const INDICES_PER_POINT: usize = QUAD_INDICES.len();

/// Build a sprite mesh with one quad per point.
/// Every quad vertex carries the point centre as its position and the corner
/// offset as UV_0; the quad only takes shape in the vertex shader.
pub fn create_point_sprite_mesh(positions: PositionBuffer) -> Mesh {
    let point_count = positions.len();
    let mut centres = Vec::with_capacity(point_count * VERTICES_PER_POINT);
    let mut corners = Vec::with_capacity(point_count * VERTICES_PER_POINT);
    let mut indices = Vec::with_capacity(point_count * INDICES_PER_POINT);

    for (point_index, centre) in positions.iter().enumerate() {
        let base = (point_index * VERTICES_PER_POINT) as u32;

        for corner in QUAD_CORNERS {
            centres.push(centre.to_array());
            corners.push(corner);
        }
        indices.extend(QUAD_INDICES.iter().map(|offset| base + offset));
    }

    Mesh::new(
        PrimitiveTopology::TriangleList,
        RenderAssetUsages::RENDER_WORLD,
    )
    .with_inserted_attribute(Mesh::ATTRIBUTE_POSITION, centres)
    .with_inserted_attribute(Mesh::ATTRIBUTE_UV_0, corners)
    .with_inserted_indices(Indices::U32(indices))
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy::render::mesh::VertexAttributeValues;

    fn buffer(points: &[Vec3]) -> PositionBuffer {
        points.iter().copied().collect()
    }

    #[test]
    fn every_point_becomes_one_quad() {
        let mesh = create_point_sprite_mesh(buffer(&[Vec3::ZERO, Vec3::X, Vec3::new(1.0, 2.0, 3.0)]));

        assert_eq!(mesh.count_vertices(), 12);
        assert_eq!(mesh.indices().map(Indices::len), Some(18));
    }

    #[test]
    fn quad_vertices_share_their_point_centre() {
        let centre = Vec3::new(-4.0, 0.5, 9.0);
        let mesh = create_point_sprite_mesh(buffer(&[Vec3::ZERO, centre]));

        let Some(VertexAttributeValues::Float32x3(positions)) =
            mesh.attribute(Mesh::ATTRIBUTE_POSITION)
        else {
            panic!("sprite mesh is missing float3 positions");
        };
        assert!(positions[4..8].iter().all(|p| *p == centre.to_array()));

        let Some(VertexAttributeValues::Float32x2(corners)) = mesh.attribute(Mesh::ATTRIBUTE_UV_0)
        else {
            panic!("sprite mesh is missing corner offsets");
        };
        assert_eq!(&corners[4..8], &QUAD_CORNERS);
    }

    #[test]
    fn second_quad_indices_are_offset() {
        let mesh = create_point_sprite_mesh(buffer(&[Vec3::ZERO, Vec3::ONE]));

        let Some(Indices::U32(indices)) = mesh.indices() else {
            panic!("sprite mesh should use u32 indices");
        };
        assert_eq!(&indices[6..], &[4, 5, 6, 4, 6, 7]);
    }

    #[test]
    fn empty_buffer_builds_empty_mesh() {
        let mesh = create_point_sprite_mesh(buffer(&[]));

        assert_eq!(mesh.count_vertices(), 0);
        assert_eq!(mesh.indices().map(Indices::len), Some(0));
    }
}
