//! Procedural mesh generation
//!
//! Functions for generating the scene primitives as indexed triangle lists.
//!
//! Every generator is generic over a [`MeshBuilder`] target:
//! - [`Mesh`]: unpacked vertices, inspected by tests and the CPU shading path
//! - [`InterleavedMesh`]: packed f32 bytes, ready for upload
//!
//! Generators validate all parameters up front and return a [`MeshError`]
//! instead of clamping, so the caller gets either a complete mesh or nothing.
//!
//! [`MeshError`]: crate::error::MeshError

mod faceted;
mod parametric;
mod types;
mod validate;

pub use types::{
    InterleavedMesh, LOC_COLOR, LOC_POSITION, LOC_TEX_COORD, Mesh, MeshBuffers, MeshBuilder,
    MeshInvariantError, Vertex, VertexAttribute, VertexLayout,
};

pub use validate::MAX_VERTICES;

pub use faceted::{
    PLANE_HALF_EXTENT, generate_cube, generate_marker_cube, generate_plane, generate_pyramid,
};

pub use parametric::{generate_cylinder, generate_sphere, generate_torus};
