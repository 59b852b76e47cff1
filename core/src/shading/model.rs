//! Per-fragment lighting
//!
//! CPU reference of the fragment stage: two positional lights, an ambient
//! term, and a specular lobe from the reflected light direction, all
//! modulated by the vertex color and then by a texture sample.

use glam::{Vec2, Vec3, Vec4};

use super::light::{
    FILL_LIGHT_COLOR, FILL_LIGHT_POSITION, KEY_LIGHT_COLOR, KEY_LIGHT_POSITION, LightSnapshot,
};
use crate::texture::TextureSampler;

/// Normal used for every surface
pub const SURFACE_NORMAL: Vec3 = Vec3::NEG_Y;
/// Ambient light color
pub const AMBIENT_COLOR: Vec3 = Vec3::splat(0.3);
/// Specular exponent
pub const SHININESS: f32 = 32.0;

/// Per-draw shading inputs
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShadingParams {
    pub key_light: LightSnapshot,
    pub fill_light: LightSnapshot,
    pub ambient: Vec3,
    pub view_position: Vec3,
    pub shininess: f32,
    /// Draw a flat color, bypassing lighting and texturing (light markers)
    pub use_uniform_color: bool,
    pub uniform_color: Vec3,
}

impl Default for ShadingParams {
    fn default() -> Self {
        Self {
            key_light: LightSnapshot {
                position: KEY_LIGHT_POSITION,
                color: KEY_LIGHT_COLOR,
            },
            fill_light: LightSnapshot {
                position: FILL_LIGHT_POSITION,
                color: FILL_LIGHT_COLOR,
            },
            ambient: AMBIENT_COLOR,
            view_position: Vec3::new(0.0, 0.0, 5.0),
            shininess: SHININESS,
            use_uniform_color: false,
            uniform_color: Vec3::ONE,
        }
    }
}

/// Interpolated inputs of one fragment
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FragmentInput {
    /// World-space position
    pub position: Vec3,
    pub color: Vec4,
    pub uv: Vec2,
}

/// Reflect `incident` about `normal` (GLSL `reflect`)
#[inline]
pub fn reflect(incident: Vec3, normal: Vec3) -> Vec3 {
    incident - 2.0 * normal.dot(incident) * normal
}

/// Diffuse + specular of one light, before the ambient term
fn light_contribution(
    light: &LightSnapshot,
    fragment: Vec3,
    view_dir: Vec3,
    base: Vec3,
    shininess: f32,
) -> Vec3 {
    let light_dir = (light.position - fragment).normalize_or_zero();

    let diff = light_dir.dot(SURFACE_NORMAL).max(0.0);
    let diffuse = light.color * diff * base;

    let reflect_dir = reflect(-light_dir, SURFACE_NORMAL);
    let spec = view_dir.dot(reflect_dir).max(0.0).powf(shininess);
    let specular = light.color * spec * base;

    diffuse + specular
}

/// Shade one fragment.
///
/// Uniform-color mode returns `(uniform_color, 1)`. Otherwise the lit vertex
/// color is multiplied by `sampler.sample(uv)`.
pub fn shade(
    fragment: &FragmentInput,
    params: &ShadingParams,
    sampler: &impl TextureSampler,
) -> Vec4 {
    if params.use_uniform_color {
        return params.uniform_color.extend(1.0);
    }

    let base = fragment.color.truncate();
    let view_dir = (params.view_position - fragment.position).normalize_or_zero();

    let ambient = params.ambient * base;
    let lit = |light: &LightSnapshot| {
        light_contribution(light, fragment.position, view_dir, base, params.shininess)
    };
    let key = lit(&params.key_light);
    let fill = lit(&params.fill_light);

    sampler.sample(fragment.uv) * (ambient + key + fill).extend(1.0)
}
