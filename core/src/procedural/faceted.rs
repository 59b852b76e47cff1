//! Faceted primitives built from explicit vertex listings (pyramid, plane, cube, light marker)

use glam::{Vec3, Vec4};
use tracing::debug;

use super::types::MeshBuilder;
use super::validate::{require_finite, require_positive};
use crate::error::MeshError;

/// Half extent of the ground plane
pub const PLANE_HALF_EXTENT: f32 = 5.0;

/// Generate a four-sided pyramid with an unshared apex per face
///
/// # Arguments
/// * `half_base` - Half the side length of the square base
/// * `apex_y` - Height of the apex
/// * `base_y` - Height of the base (must be below `apex_y`)
/// * `color` - Uniform vertex color
///
/// # Returns
/// Mesh with 12 vertices (apex + two base corners per side face) and 18
/// indices. The base is closed by two triangles reusing side-face corners:
/// `(1, 2, 5)` and `(2, 5, 8)`.
///
/// # UV Mapping
/// Apex at `(0.5, 1)`, first base corner at `(0, 0)`, second at `(1, 0)`.
pub fn generate_pyramid<M: MeshBuilder>(
    half_base: f32,
    apex_y: f32,
    base_y: f32,
    color: Vec4,
) -> Result<M, MeshError> {
    let half_base = require_positive("pyramid", "half_base", half_base)?;
    let apex_y = require_finite("pyramid", "apex_y", apex_y)?;
    let base_y = require_finite("pyramid", "base_y", base_y)?;
    require_positive("pyramid", "apex_y - base_y", apex_y - base_y)?;

    let apex = Vec3::new(0.0, apex_y, 0.0);
    let corners = [
        Vec3::new(-half_base, base_y, half_base),
        Vec3::new(half_base, base_y, half_base),
        Vec3::new(half_base, base_y, -half_base),
        Vec3::new(-half_base, base_y, -half_base),
    ];

    let mut mesh = M::default();

    for side in 0..4 {
        let a = mesh.add_vertex_uv(apex, color, (0.5, 1.0));
        let b = mesh.add_vertex_uv(corners[side], color, (0.0, 0.0));
        let c = mesh.add_vertex_uv(corners[(side + 1) % 4], color, (1.0, 0.0));
        mesh.add_triangle(a, b, c);
    }

    // Base
    mesh.add_triangle(1, 2, 5);
    mesh.add_triangle(2, 5, 8);

    debug!("generate_pyramid: 12 vertices, 18 indices");
    Ok(mesh)
}

/// Generate the ground plane: one quad on the XZ plane (Y=0)
///
/// # Returns
/// Mesh with 4 vertices `(+e,+e) (+e,-e) (-e,-e) (-e,+e)` in (x, z) and the
/// triangles `(0, 1, 3)`, `(1, 2, 3)`.
///
/// # UV Mapping
/// U follows X and V follows Z, both 0→1 across the quad.
pub fn generate_plane<M: MeshBuilder>(half_extent: f32, color: Vec4) -> Result<M, MeshError> {
    let e = require_positive("plane", "half_extent", half_extent)?;

    let mut mesh = M::default();
    mesh.add_vertex_uv(Vec3::new(e, 0.0, e), color, (1.0, 1.0));
    mesh.add_vertex_uv(Vec3::new(e, 0.0, -e), color, (1.0, 0.0));
    mesh.add_vertex_uv(Vec3::new(-e, 0.0, -e), color, (0.0, 0.0));
    mesh.add_vertex_uv(Vec3::new(-e, 0.0, e), color, (0.0, 1.0));

    mesh.add_triangle(0, 1, 3);
    mesh.add_triangle(1, 2, 3);

    debug!("generate_plane: 4 vertices, 6 indices");
    Ok(mesh)
}

/// Generate an axis-aligned box from 8 shared corners
///
/// # Arguments
/// * `length` - Extent along X
/// * `width` - Extent along Z
/// * `height` - Extent along Y
///
/// # Returns
/// Mesh with 8 vertices (bottom ring at -height/2, then top ring at
/// +height/2) and 12 triangles.
///
/// # UV Mapping
/// Planar projection from above: `u = x/length + 0.5`, `v = z/width + 0.5`.
pub fn generate_cube<M: MeshBuilder>(
    length: f32,
    width: f32,
    height: f32,
    color: Vec4,
) -> Result<M, MeshError> {
    let hl = require_positive("cube", "length", length)? * 0.5;
    let hw = require_positive("cube", "width", width)? * 0.5;
    let hh = require_positive("cube", "height", height)? * 0.5;

    let ring = [(hl, hw), (hl, -hw), (-hl, -hw), (-hl, hw)];

    let mut mesh = M::default();
    for y in [-hh, hh] {
        for &(x, z) in &ring {
            let uv = (x / length + 0.5, z / width + 0.5);
            mesh.add_vertex_uv(Vec3::new(x, y, z), color, uv);
        }
    }

    const CUBE_INDICES: [[u16; 3]; 12] = [
        [0, 1, 5],
        [0, 5, 4],
        [1, 2, 6],
        [1, 6, 5],
        [2, 3, 7],
        [2, 7, 6],
        [3, 0, 4],
        [3, 4, 7],
        [4, 5, 6],
        [4, 6, 7],
        [3, 2, 1],
        [3, 1, 0],
    ];
    for [a, b, c] in CUBE_INDICES {
        mesh.add_triangle(a, b, c);
    }

    debug!("generate_cube: 8 vertices, 36 indices");
    Ok(mesh)
}

/// Generate the position-only cube drawn at each light position
///
/// # Returns
/// Mesh with 24 vertices (4 per face, faces in the order front, back,
/// right, left, top, bottom) and 36 indices. Each face emits
/// `(a, a+1, a+2)` and `(a+2, a+3, a)`.
pub fn generate_marker_cube<M: MeshBuilder>(half_size: f32) -> Result<M, MeshError> {
    let s = require_positive("marker_cube", "half_size", half_size)?;

    let faces: [[Vec3; 4]; 6] = [
        // Front (+Z)
        [
            Vec3::new(-s, -s, s),
            Vec3::new(s, -s, s),
            Vec3::new(s, s, s),
            Vec3::new(-s, s, s),
        ],
        // Back (-Z)
        [
            Vec3::new(s, -s, -s),
            Vec3::new(-s, -s, -s),
            Vec3::new(-s, s, -s),
            Vec3::new(s, s, -s),
        ],
        // Right (+X)
        [
            Vec3::new(s, -s, s),
            Vec3::new(s, -s, -s),
            Vec3::new(s, s, -s),
            Vec3::new(s, s, s),
        ],
        // Left (-X)
        [
            Vec3::new(-s, -s, -s),
            Vec3::new(-s, -s, s),
            Vec3::new(-s, s, s),
            Vec3::new(-s, s, -s),
        ],
        // Top (+Y)
        [
            Vec3::new(-s, s, s),
            Vec3::new(s, s, s),
            Vec3::new(s, s, -s),
            Vec3::new(-s, s, -s),
        ],
        // Bottom (-Y)
        [
            Vec3::new(-s, -s, -s),
            Vec3::new(s, -s, -s),
            Vec3::new(s, -s, s),
            Vec3::new(-s, -s, s),
        ],
    ];

    let mut mesh = M::default();
    for face in faces {
        let a = mesh.add_position(face[0]);
        mesh.add_position(face[1]);
        mesh.add_position(face[2]);
        mesh.add_position(face[3]);

        mesh.add_triangle(a, a + 1, a + 2);
        mesh.add_triangle(a + 2, a + 3, a);
    }

    debug!("generate_marker_cube: 24 vertices, 36 indices");
    Ok(mesh)
}
