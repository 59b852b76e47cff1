//! primscene core - Library interface
//!
//! Procedural primitives (pyramid, sphere, plane, torus, cube, cylinder) and
//! the two-light shading model used to render them, plus the camera, scene
//! layout, texture loading, and configuration around them.
//!
//! Nothing here touches a graphics API: meshes come out as
//! [`procedural::MeshBuffers`], and uniform values go out through a
//! [`shading::UniformSink`] implemented by the renderer.

pub mod config;
pub mod error;
pub mod procedural;
pub mod scene;
pub mod shading;
pub mod texture;

pub use error::{ConfigError, MeshError, SceneError, TextureError};
