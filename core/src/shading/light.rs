//! Positional lights and their marker meshes

use glam::{Mat4, Vec3};

use crate::error::MeshError;
use crate::procedural::{Mesh, generate_marker_cube};

/// Key light color (warm orange)
pub const KEY_LIGHT_COLOR: Vec3 = Vec3::new(1.0, 0.6, 0.2);
/// Fill light color (soft white)
pub const FILL_LIGHT_COLOR: Vec3 = Vec3::new(0.9, 0.9, 0.9);
/// Key light start position
pub const KEY_LIGHT_POSITION: Vec3 = Vec3::new(-5.0, 1.5, 1.0);
/// Fill light start position
pub const FILL_LIGHT_POSITION: Vec3 = Vec3::new(5.5, -1.0, 0.0);
/// Uniform scale of the marker cube
pub const MARKER_SCALE: f32 = 0.2;

/// Half size of the marker cube before scaling
const MARKER_HALF_SIZE: f32 = 1.0;

/// A positional light with a cube drawn at its position.
///
/// The model transform is fixed at creation; `position` is re-derived from
/// its translation column every frame.
#[derive(Debug, Clone, PartialEq)]
pub struct LightSource {
    pub position: Vec3,
    pub color: Vec3,
    pub model: Mat4,
    pub mesh: Mesh,
}

/// Position and color of a light as seen by one frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LightSnapshot {
    pub position: Vec3,
    pub color: Vec3,
}

impl LightSource {
    /// Create a light and its marker cube, `model = translate(position) * scale(marker_scale)`.
    pub fn new(position: Vec3, color: Vec3, marker_scale: f32) -> Result<Self, MeshError> {
        let mesh = generate_marker_cube::<Mesh>(MARKER_HALF_SIZE)?.with_label("light_marker");
        let model =
            Mat4::from_translation(position) * Mat4::from_scale(Vec3::splat(marker_scale));
        Ok(Self {
            position,
            color,
            model,
            mesh,
        })
    }

    /// Re-derive the position from the model transform's translation column.
    pub fn refresh_position(&mut self) {
        self.position = self.model.w_axis.truncate();
    }

    pub fn snapshot(&self) -> LightSnapshot {
        LightSnapshot {
            position: self.position,
            color: self.color,
        }
    }
}
