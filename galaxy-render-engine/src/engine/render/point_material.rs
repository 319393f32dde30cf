use bevy::{
    pbr::{MaterialPipeline, MaterialPipelineKey},
    prelude::*,
    reflect::TypePath,
    render::{
        mesh::MeshVertexBufferLayoutRef,
        render_resource::{
            AsBindGroup, RenderPipelineDescriptor, ShaderRef, ShaderType,
            SpecializedMeshPipelineError,
        },
    },
};

const SHADER_ASSET_PATH: &str = "shaders/galaxy_points.wgsl";

/// How a point-set composites onto what is already drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PointBlending {
    /// Source-over alpha blending.
    #[default]
    Normal,
    /// Colour is added to the target, brightening overlapping points.
    Additive,
}

impl PointBlending {
    pub fn alpha_mode(self) -> AlphaMode {
        match self {
            PointBlending::Normal => AlphaMode::Blend,
            PointBlending::Additive => AlphaMode::Add,
        }
    }
}

/// Fixed material parameters for one point-set.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointMaterialPreset {
    /// sRGB colour as 0xRRGGBB.
    pub color: u32,
    pub size: f32,
    pub opacity: f32,
    pub size_attenuation: bool,
    pub blending: PointBlending,
}

/// Uniform block mirrored by `GalaxyPointMaterial` in the WGSL shader.
#[derive(Debug, Clone, Copy, PartialEq, ShaderType)]
pub struct PointMaterialUniform {
    /// Linear RGBA.
    pub color: Vec4,
    /// World units when attenuated, pixels otherwise.
    pub size: f32,
    pub opacity: f32,
    pub size_attenuation: u32,
    /// 1 when the pipeline blends additively and expects premultiplied colour.
    pub additive: u32,
}

#[derive(Asset, TypePath, AsBindGroup, Debug, Clone)]
pub struct GalaxyPointMaterial {
    #[uniform(0)]
    pub params: PointMaterialUniform,

    pub blending: PointBlending,
}

impl GalaxyPointMaterial {
    pub fn from_preset(preset: &PointMaterialPreset) -> Self {
        let linear = srgb_hex(preset.color).to_linear();

        Self {
            params: PointMaterialUniform {
                color: Vec4::new(linear.red, linear.green, linear.blue, linear.alpha),
                size: preset.size,
                opacity: preset.opacity,
                size_attenuation: u32::from(preset.size_attenuation),
                additive: u32::from(preset.blending == PointBlending::Additive),
            },
            blending: preset.blending,
        }
    }

    pub fn opacity(&self) -> f32 {
        self.params.opacity
    }

    pub fn set_opacity(&mut self, opacity: f32) {
        self.params.opacity = opacity;
    }
}

impl Material for GalaxyPointMaterial {
    fn vertex_shader() -> ShaderRef {
        SHADER_ASSET_PATH.into()
    }

    fn fragment_shader() -> ShaderRef {
        SHADER_ASSET_PATH.into()
    }

    fn alpha_mode(&self) -> AlphaMode {
        self.blending.alpha_mode()
    }

    fn specialize(
        _pipeline: &MaterialPipeline<Self>,
        descriptor: &mut RenderPipelineDescriptor,
        layout: &MeshVertexBufferLayoutRef,
        _key: MaterialPipelineKey<Self>,
    ) -> Result<(), SpecializedMeshPipelineError> {
        // Sprite mesh layout: point centre at location 0, quad corner at location 1.
        let vertex_layout = layout.0.get_layout(&[
            Mesh::ATTRIBUTE_POSITION.at_shader_location(0),
            Mesh::ATTRIBUTE_UV_0.at_shader_location(1),
        ])?;
        descriptor.vertex.buffers = vec![vertex_layout];
        // Quads face the camera in view space; winding depends on the corner order only.
        descriptor.primitive.cull_mode = None;
        Ok(())
    }
}

/// Convert a 0xRRGGBB value into an opaque sRGB colour.
pub fn srgb_hex(hex: u32) -> Color {
    Color::srgb_u8((hex >> 16) as u8, (hex >> 8) as u8, hex as u8)
}
