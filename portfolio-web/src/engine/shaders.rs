use bevy::{
    prelude::*,
    reflect::TypePath,
    render::render_resource::{AsBindGroup, ShaderRef, ShaderType},
};
use constants::render_settings::PARTICLE_SHADER_PATH;

/// Camera-facing square sprites for point clouds. Vertex colours are
/// multiplied by `tint`. `size` follows three.js point sizing with distance
/// attenuation: on screen a sprite covers `size * (height / 2) / depth`
/// pixels, which `world_scale = tan(fov / 2)` turns into a world-space edge.
#[derive(Asset, TypePath, AsBindGroup, Debug, Clone)]
pub struct ParticleSpriteMaterial {
    #[uniform(0)]
    pub params: ParticleSpriteParams,
}

#[derive(ShaderType, Debug, Clone, Copy)]
pub struct ParticleSpriteParams {
    pub tint: Vec4,
    pub size: f32,
    pub opacity: f32,
    pub world_scale: f32,
}

impl ParticleSpriteMaterial {
    pub fn new(tint: Color, size: f32, opacity: f32, fov_degrees: f32) -> Self {
        Self {
            params: ParticleSpriteParams {
                tint: tint.to_linear().to_vec4(),
                size,
                opacity,
                world_scale: (fov_degrees.to_radians() / 2.0).tan(),
            },
        }
    }

    /// Edge length of one sprite in world units.
    pub fn world_size(&self) -> f32 {
        self.params.size * self.params.world_scale
    }
}

impl Material for ParticleSpriteMaterial {
    fn vertex_shader() -> ShaderRef {
        PARTICLE_SHADER_PATH.into()
    }

    fn fragment_shader() -> ShaderRef {
        PARTICLE_SHADER_PATH.into()
    }

    fn alpha_mode(&self) -> AlphaMode {
        AlphaMode::Blend
    }
}
