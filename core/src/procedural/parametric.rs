//! Parametric primitives (sphere, torus, cylinder)

use glam::{Vec3, Vec4};
use std::f32::consts::PI;
use tracing::debug;

use super::types::MeshBuilder;
use super::validate::{require_positive, require_subdivisions, require_vertex_budget};
use crate::error::MeshError;

/// Generate a UV sphere
///
/// # Arguments
/// * `radius` - Sphere radius
/// * `stacks` - Polar divisions, pole to pole (min 1)
/// * `slices` - Azimuthal divisions (min 1)
///
/// # Returns
/// Mesh with `(stacks + 1) × (slices + 1)` vertices in row-major order and
/// `6 × stacks × slices` indices.
///
/// Vertex `(i, j)` sits at `phi = π·i/stacks`, `theta = 2π·j/slices`. The
/// seam column (`j = 0` and `j = slices`) is duplicated, and the pole rows
/// produce zero-area triangles.
///
/// # UV Mapping
/// `(j / slices, i / stacks)`: U wraps around the equator, V runs north to south.
pub fn generate_sphere<M: MeshBuilder>(
    radius: f32,
    stacks: u32,
    slices: u32,
    color: Vec4,
) -> Result<M, MeshError> {
    let radius = require_positive("sphere", "radius", radius)?;
    let stacks = require_subdivisions("sphere", "stacks", stacks, 1)?;
    let slices = require_subdivisions("sphere", "slices", slices, 1)?;
    let vertex_total = (stacks as u64 + 1) * (slices as u64 + 1);
    require_vertex_budget("sphere", vertex_total)?;

    let mut mesh = M::default();

    for i in 0..=stacks {
        let v = i as f32 / stacks as f32;
        let phi = PI * v;
        let (sin_phi, cos_phi) = phi.sin_cos();

        for j in 0..=slices {
            let u = j as f32 / slices as f32;
            let theta = 2.0 * PI * u;
            let (sin_theta, cos_theta) = theta.sin_cos();

            let position = radius * Vec3::new(sin_phi * cos_theta, cos_phi, sin_phi * sin_theta);
            mesh.add_vertex_uv(position, color, (u, v));
        }
    }

    let row = slices + 1;
    for i in 0..stacks {
        for j in 0..slices {
            let first = (i * row + j) as u16;
            let second = first + row as u16;

            mesh.add_triangle(first, second, first + 1);
            mesh.add_triangle(second, second + 1, first + 1);
        }
    }

    debug!(
        "generate_sphere: {} vertices, {} indices",
        vertex_total,
        6 * stacks * slices
    );
    Ok(mesh)
}

/// Generate a torus lying in the XZ plane
///
/// # Arguments
/// * `major_radius` - Distance from the torus center to the tube center (R)
/// * `minor_radius` - Tube radius (r)
/// * `circles` - Tube cross-sections around the major circle (min 3)
/// * `circle_points` - Points per cross-section (min 3)
///
/// # Returns
/// Mesh with `circles × circle_points` vertices and
/// `6 × circles × circle_points` indices.
///
/// No seam vertices are duplicated: both parametric axes wrap by index
/// modulo. Each quad emits `(current, below, adjacent)` and
/// `(adjacent, below, diagonal)`.
///
/// # UV Mapping
/// `(i / circles, j / circle_points)`
pub fn generate_torus<M: MeshBuilder>(
    major_radius: f32,
    minor_radius: f32,
    circles: u32,
    circle_points: u32,
    color: Vec4,
) -> Result<M, MeshError> {
    let major_radius = require_positive("torus", "major_radius", major_radius)?;
    let minor_radius = require_positive("torus", "minor_radius", minor_radius)?;
    let circles = require_subdivisions("torus", "circles", circles, 3)?;
    let circle_points = require_subdivisions("torus", "circle_points", circle_points, 3)?;
    let vertex_total = circles as u64 * circle_points as u64;
    require_vertex_budget("torus", vertex_total)?;

    let mut mesh = M::default();

    for i in 0..circles {
        let u = i as f32 / circles as f32;
        let (sin_phi, cos_phi) = (2.0 * PI * u).sin_cos();

        for j in 0..circle_points {
            let v = j as f32 / circle_points as f32;
            let (sin_theta, cos_theta) = (2.0 * PI * v).sin_cos();

            let ring = major_radius + minor_radius * cos_theta;
            let position = Vec3::new(ring * cos_phi, minor_radius * sin_theta, ring * sin_phi);
            mesh.add_vertex_uv(position, color, (u, v));
        }
    }

    for i in 0..circles {
        let next_circle = (i + 1) % circles;
        for j in 0..circle_points {
            let next_point = (j + 1) % circle_points;

            let current = (i * circle_points + j) as u16;
            let adjacent = (i * circle_points + next_point) as u16;
            let below = (next_circle * circle_points + j) as u16;
            let diagonal = (next_circle * circle_points + next_point) as u16;

            mesh.add_triangle(current, below, adjacent);
            mesh.add_triangle(adjacent, below, diagonal);
        }
    }

    debug!(
        "generate_torus: {} vertices, {} indices",
        vertex_total,
        6 * circles * circle_points
    );
    Ok(mesh)
}

/// Generate a capped cylinder centered on the origin, axis along Y
///
/// # Arguments
/// * `segments` - Divisions around the axis (min 3)
/// * `height` - Total height
/// * `radius` - Rim radius
///
/// # Returns
/// Mesh with `2 × segments + 2` vertices: for each segment a top-rim then a
/// bottom-rim vertex, then the top center and the bottom center. Indices
/// are the `2 × segments` side triangles followed by `segments` top-cap and
/// `segments` bottom-cap triangles, `12 × segments` in total.
///
/// # UV Mapping
/// Rim vertices get `(i / segments, 1)` on top and `(i / segments, 0)` at
/// the bottom. Cap centers get `(0.5, 1)` and `(0.5, 0)`.
pub fn generate_cylinder<M: MeshBuilder>(
    segments: u32,
    height: f32,
    radius: f32,
    color: Vec4,
) -> Result<M, MeshError> {
    let segments = require_subdivisions("cylinder", "segments", segments, 3)?;
    let height = require_positive("cylinder", "height", height)?;
    let radius = require_positive("cylinder", "radius", radius)?;
    let vertex_total = 2 * segments as u64 + 2;
    require_vertex_budget("cylinder", vertex_total)?;

    let half_height = height * 0.5;
    let mut mesh = M::default();

    for i in 0..segments {
        let u = i as f32 / segments as f32;
        let (sin_theta, cos_theta) = (2.0 * PI * u).sin_cos();
        let x = radius * cos_theta;
        let z = radius * sin_theta;

        mesh.add_vertex_uv(Vec3::new(x, half_height, z), color, (u, 1.0));
        mesh.add_vertex_uv(Vec3::new(x, -half_height, z), color, (u, 0.0));
    }

    let top_center = mesh.add_vertex_uv(Vec3::new(0.0, half_height, 0.0), color, (0.5, 1.0));
    let bottom_center = mesh.add_vertex_uv(Vec3::new(0.0, -half_height, 0.0), color, (0.5, 0.0));

    let rim = 2 * segments;
    let wrap = |index: u32| (index % rim) as u16;

    // Sides
    for i in 0..segments {
        let top = wrap(2 * i);
        let bottom = wrap(2 * i + 1);
        let next_top = wrap(2 * i + 2);
        let next_bottom = wrap(2 * i + 3);

        mesh.add_triangle(top, bottom, next_top);
        mesh.add_triangle(next_top, bottom, next_bottom);
    }

    // Top cap
    for i in 0..segments {
        mesh.add_triangle(top_center, wrap(2 * i), wrap(2 * i + 2));
    }

    // Bottom cap
    for i in 0..segments {
        mesh.add_triangle(bottom_center, wrap(2 * i + 1), wrap(2 * i + 3));
    }

    debug!(
        "generate_cylinder: {} vertices, {} indices",
        vertex_total,
        12 * segments
    );
    Ok(mesh)
}
