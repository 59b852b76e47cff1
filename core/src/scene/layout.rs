//! Scene layout: which shapes are drawn, where, and with which texture

use glam::{Mat4, Quat, Vec3};
use tracing::debug;

use crate::config::ShapesConfig;
use crate::error::{MeshError, SceneError};
use crate::procedural::{Mesh, MeshBuffers};
use crate::texture::TextureSlot;

/// The lit primitives of the scene
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SceneShape {
    Plane,
    Pyramid,
    Sphere,
    Torus,
    Cube,
    Cylinder,
}

impl SceneShape {
    /// Draw order
    pub const ALL: [SceneShape; 6] = [
        SceneShape::Plane,
        SceneShape::Pyramid,
        SceneShape::Sphere,
        SceneShape::Torus,
        SceneShape::Cube,
        SceneShape::Cylinder,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            SceneShape::Plane => "plane",
            SceneShape::Pyramid => "pyramid",
            SceneShape::Sphere => "sphere",
            SceneShape::Torus => "torus",
            SceneShape::Cube => "cube",
            SceneShape::Cylinder => "cylinder",
        }
    }

    /// Texture bound while drawing this shape
    pub const fn texture(self) -> TextureSlot {
        match self {
            SceneShape::Plane | SceneShape::Torus | SceneShape::Cube => TextureSlot::Wood,
            SceneShape::Pyramid | SceneShape::Sphere => TextureSlot::Sponge,
            SceneShape::Cylinder => TextureSlot::BlueContainer,
        }
    }

    /// Model transform of this shape in the reference scene
    ///
    /// Rotation axes are normalized; angles are in degrees.
    pub fn model(self) -> Mat4 {
        let rotate = |degrees: f32, axis: Vec3| {
            Mat4::from_quat(Quat::from_axis_angle(axis.normalize(), degrees.to_radians()))
        };
        match self {
            SceneShape::Plane => Mat4::from_translation(Vec3::new(0.0, -2.1, 0.0)),
            SceneShape::Pyramid => {
                Mat4::from_translation(Vec3::new(-2.5, 0.1, 0.3))
                    * rotate(180.0, Vec3::new(0.5, 1.0, 0.0))
                    * Mat4::from_scale(Vec3::splat(1.2))
            }
            SceneShape::Sphere => {
                Mat4::from_translation(Vec3::new(-3.6, -1.1, 1.0))
                    * rotate(90.0, Vec3::new(0.0, -1.2, 1.0))
                    * Mat4::from_scale(Vec3::splat(2.0))
            }
            SceneShape::Torus => {
                Mat4::from_translation(Vec3::new(-0.5, -1.8, 4.0))
                    * Mat4::from_scale(Vec3::splat(0.7))
            }
            SceneShape::Cube => {
                Mat4::from_translation(Vec3::new(3.0, -1.8, 2.0))
                    * Mat4::from_scale(Vec3::new(1.5, 0.5, 1.5))
            }
            SceneShape::Cylinder => {
                Mat4::from_translation(Vec3::new(-1.0, -0.8, -1.5))
                    * Mat4::from_scale(Vec3::new(3.5, 2.5, 3.5))
            }
        }
    }
}

/// One draw of the scene
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScenePlacement {
    pub shape: SceneShape,
    pub texture: TextureSlot,
    pub model: Mat4,
}

/// The reference draw list, in draw order
pub fn scene_placements() -> [ScenePlacement; 6] {
    SceneShape::ALL.map(|shape| ScenePlacement {
        shape,
        texture: shape.texture(),
        model: shape.model(),
    })
}

/// Generated meshes for every scene shape
#[derive(Debug, Clone, PartialEq)]
pub struct SceneMeshes {
    meshes: [Mesh; 6],
}

impl SceneMeshes {
    /// Generate every shape. Fails on the first invalid parameter set.
    pub fn generate(shapes: &ShapesConfig) -> Result<Self, SceneError> {
        let build = |shape: SceneShape| -> Result<Mesh, SceneError> {
            let mesh: Result<Mesh, MeshError> = match shape {
                SceneShape::Plane => shapes.plane.generate(),
                SceneShape::Pyramid => shapes.pyramid.generate(),
                SceneShape::Sphere => shapes.sphere.generate(),
                SceneShape::Torus => shapes.torus.generate(),
                SceneShape::Cube => shapes.cube.generate(),
                SceneShape::Cylinder => shapes.cylinder.generate(),
            };
            mesh.map(|m| m.with_label(shape.name()))
                .map_err(|source| SceneError::Mesh {
                    shape: shape.name(),
                    source,
                })
        };

        let meshes = [
            build(SceneShape::Plane)?,
            build(SceneShape::Pyramid)?,
            build(SceneShape::Sphere)?,
            build(SceneShape::Torus)?,
            build(SceneShape::Cube)?,
            build(SceneShape::Cylinder)?,
        ];
        debug!(
            "Generated scene meshes: {} vertices total",
            meshes.iter().map(Mesh::vertex_count).sum::<usize>()
        );
        Ok(Self { meshes })
    }

    pub fn get(&self, shape: SceneShape) -> &Mesh {
        &self.meshes[shape as usize]
    }

    /// Meshes in draw order
    pub fn iter(&self) -> impl Iterator<Item = (SceneShape, &Mesh)> {
        SceneShape::ALL.into_iter().zip(self.meshes.iter())
    }

    /// Upload-ready buffers in draw order
    pub fn buffers(&self) -> Vec<(SceneShape, MeshBuffers)> {
        self.iter().map(|(shape, mesh)| (shape, mesh.to_buffers())).collect()
    }
}
