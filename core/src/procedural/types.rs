//! Procedural mesh types
//!
//! Shared types for procedural mesh generation.

use bytemuck::cast_slice;
use glam::{Vec2, Vec3, Vec4};

/// Byte size of one `f32` component
const F32_SIZE: u32 = 4;

/// Shader location of the position attribute
pub const LOC_POSITION: u32 = 0;
/// Shader location of the color attribute
pub const LOC_COLOR: u32 = 1;
/// Shader location of the texture coordinate attribute
pub const LOC_TEX_COORD: u32 = 2;

/// Vertex attribute layout of a mesh.
///
/// Every vertex of a mesh uses the same layout, so the stride is constant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VertexLayout {
    /// Position only (light markers)
    Position,
    /// Position + RGBA color
    PositionColor,
    /// Position + RGBA color + texture coordinate
    PositionColorUv,
}

/// One interleaved vertex attribute (all components are `f32`)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VertexAttribute {
    /// Shader input location
    pub location: u32,
    /// Number of f32 components
    pub components: u32,
    /// Byte offset inside the vertex
    pub offset: u32,
}

const ATTR_POSITION: VertexAttribute = VertexAttribute {
    location: LOC_POSITION,
    components: 3,
    offset: 0,
};

const ATTR_COLOR: VertexAttribute = VertexAttribute {
    location: LOC_COLOR,
    components: 4,
    offset: 3 * F32_SIZE,
};

const ATTR_TEX_COORD: VertexAttribute = VertexAttribute {
    location: LOC_TEX_COORD,
    components: 2,
    offset: 7 * F32_SIZE,
};

impl VertexLayout {
    /// Number of f32 components per vertex
    #[inline]
    pub const fn components(self) -> u32 {
        match self {
            VertexLayout::Position => 3,
            VertexLayout::PositionColor => 7,
            VertexLayout::PositionColorUv => 9,
        }
    }

    /// Stride in bytes
    #[inline]
    pub const fn stride(self) -> u32 {
        self.components() * F32_SIZE
    }

    /// Attributes in buffer order
    pub const fn attributes(self) -> &'static [VertexAttribute] {
        match self {
            VertexLayout::Position => &[ATTR_POSITION],
            VertexLayout::PositionColor => &[ATTR_POSITION, ATTR_COLOR],
            VertexLayout::PositionColorUv => &[ATTR_POSITION, ATTR_COLOR, ATTR_TEX_COORD],
        }
    }

    /// Check if this layout has per-vertex color
    #[inline]
    pub const fn has_color(self) -> bool {
        !matches!(self, VertexLayout::Position)
    }

    /// Check if this layout has texture coordinates
    #[inline]
    pub const fn has_uv(self) -> bool {
        matches!(self, VertexLayout::PositionColorUv)
    }

    /// Human-readable name for debugging
    pub const fn name(self) -> &'static str {
        match self {
            VertexLayout::Position => "POS",
            VertexLayout::PositionColor => "POS_COLOR",
            VertexLayout::PositionColorUv => "POS_COLOR_UV",
        }
    }
}

/// A single mesh vertex
///
/// Fields not covered by the mesh layout are ignored when packing
/// (a `Position` vertex carries white and `uv = 0`).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Vertex {
    pub position: Vec3,
    pub color: Vec4,
    pub uv: Vec2,
}

impl Vertex {
    /// Create a new vertex
    pub fn new(position: Vec3, color: Vec4, uv: Vec2) -> Self {
        Self {
            position,
            color,
            uv,
        }
    }

    /// Append the components covered by `layout` to `out`
    fn write_components(&self, layout: VertexLayout, out: &mut Vec<f32>) {
        out.extend_from_slice(&self.position.to_array());
        if layout.has_color() {
            out.extend_from_slice(&self.color.to_array());
        }
        if layout.has_uv() {
            out.extend_from_slice(&self.uv.to_array());
        }
    }
}

/// Trait for mesh construction - enables generic geometry generation
///
/// This trait allows procedural generation functions to work with both:
/// - `Mesh`: unpacked vertices, for inspection and CPU-side shading
/// - `InterleavedMesh`: packed bytes, ready for buffer upload
pub trait MeshBuilder: Default {
    /// Add a vertex in the given layout, returning its index
    ///
    /// All vertices of one mesh must share a layout.
    fn push_vertex(&mut self, vertex: Vertex, layout: VertexLayout) -> u16;

    /// Add a triangle using three vertex indices
    fn add_triangle(&mut self, i0: u16, i1: u16, i2: u16);

    /// Add a position-only vertex
    fn add_position(&mut self, position: Vec3) -> u16 {
        self.push_vertex(
            Vertex::new(position, Vec4::ONE, Vec2::ZERO),
            VertexLayout::Position,
        )
    }

    /// Add a vertex with position and color
    fn add_vertex(&mut self, position: Vec3, color: Vec4) -> u16 {
        self.push_vertex(
            Vertex::new(position, color, Vec2::ZERO),
            VertexLayout::PositionColor,
        )
    }

    /// Add a vertex with position, color, and texture coordinates
    fn add_vertex_uv(&mut self, position: Vec3, color: Vec4, uv: (f32, f32)) -> u16 {
        self.push_vertex(
            Vertex::new(position, color, Vec2::new(uv.0, uv.1)),
            VertexLayout::PositionColorUv,
        )
    }
}

/// Generated mesh data (unpacked)
///
/// The label names the generator that produced the mesh.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Mesh {
    pub label: &'static str,
    layout: Option<VertexLayout>,
    /// First layout that disagreed with `layout`
    mixed_layout: Option<VertexLayout>,
    /// Vertices in generation order
    pub vertices: Vec<Vertex>,
    /// Triangle indices (u16 for GPU compatibility)
    pub indices: Vec<u16>,
}

/// Index invariant violated by a mesh
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MeshInvariantError {
    #[error("index count {0} is not a multiple of 3")]
    PartialTriangle(usize),
    #[error("vertex layout {other:?} mixed into a {first:?} mesh")]
    MixedLayouts {
        first: VertexLayout,
        other: VertexLayout,
    },
    #[error("index {index} at position {position} is out of range ({vertices} vertices)")]
    IndexOutOfRange {
        position: usize,
        index: u16,
        vertices: usize,
    },
}

impl Mesh {
    /// Create empty mesh data
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the debug label
    pub fn with_label(mut self, label: &'static str) -> Self {
        self.label = label;
        self
    }

    /// Vertex layout, `None` for an empty mesh
    pub fn layout(&self) -> Option<VertexLayout> {
        self.layout
    }

    /// Stride in bytes (0 for an empty mesh)
    pub fn stride(&self) -> u32 {
        self.layout.map_or(0, VertexLayout::stride)
    }

    /// Get vertex count
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Get index count
    pub fn index_count(&self) -> usize {
        self.indices.len()
    }

    /// Get triangle count
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Iterate triangles as index triples
    pub fn triangles(&self) -> impl Iterator<Item = [u16; 3]> + '_ {
        self.indices.chunks_exact(3).map(|t| [t[0], t[1], t[2]])
    }

    /// Check the triangle-list invariants
    pub fn validate(&self) -> Result<(), MeshInvariantError> {
        if let (Some(first), Some(other)) = (self.layout, self.mixed_layout) {
            return Err(MeshInvariantError::MixedLayouts { first, other });
        }
        if self.indices.len() % 3 != 0 {
            return Err(MeshInvariantError::PartialTriangle(self.indices.len()));
        }
        let vertices = self.vertices.len();
        match self
            .indices
            .iter()
            .position(|&index| index as usize >= vertices)
        {
            Some(position) => Err(MeshInvariantError::IndexOutOfRange {
                position,
                index: self.indices[position],
                vertices,
            }),
            None => Ok(()),
        }
    }

    /// Pack the vertices into an interleaved f32 buffer
    pub fn vertex_floats(&self) -> Vec<f32> {
        let Some(layout) = self.layout else {
            return Vec::new();
        };
        let mut out = Vec::with_capacity(self.vertices.len() * layout.components() as usize);
        for vertex in &self.vertices {
            vertex.write_components(layout, &mut out);
        }
        out
    }

    /// Produce the buffers handed to the renderer
    pub fn to_buffers(&self) -> MeshBuffers {
        MeshBuffers {
            label: self.label,
            layout: self.layout.unwrap_or(VertexLayout::Position),
            vertex_data: cast_slice(&self.vertex_floats()).to_vec(),
            indices: self.indices.clone(),
        }
    }
}

impl MeshBuilder for Mesh {
    fn push_vertex(&mut self, vertex: Vertex, layout: VertexLayout) -> u16 {
        match self.layout {
            None => self.layout = Some(layout),
            Some(first) if first != layout && self.mixed_layout.is_none() => {
                self.mixed_layout = Some(layout);
            }
            Some(_) => {}
        }
        let index = self.vertices.len() as u16;
        self.vertices.push(vertex);
        index
    }

    fn add_triangle(&mut self, i0: u16, i1: u16, i2: u16) {
        self.indices.push(i0);
        self.indices.push(i1);
        self.indices.push(i2);
    }
}

/// Generated mesh data (PACKED FORMAT)
///
/// Vertices are written straight into an interleaved little-endian f32
/// buffer as they are generated.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InterleavedMesh {
    layout: Option<VertexLayout>,
    scratch: Vec<f32>,
    /// Packed vertex data, `layout.stride()` bytes per vertex
    pub vertices: Vec<u8>,
    /// Triangle indices (u16 for GPU compatibility)
    pub indices: Vec<u16>,
}

impl InterleavedMesh {
    /// Create empty mesh data
    pub fn new() -> Self {
        Self::default()
    }

    /// Vertex layout, `None` for an empty mesh
    pub fn layout(&self) -> Option<VertexLayout> {
        self.layout
    }

    /// Get vertex count
    pub fn vertex_count(&self) -> usize {
        match self.layout {
            Some(layout) => self.vertices.len() / layout.stride() as usize,
            None => 0,
        }
    }
}

impl MeshBuilder for InterleavedMesh {
    fn push_vertex(&mut self, vertex: Vertex, layout: VertexLayout) -> u16 {
        debug_assert!(
            self.layout.is_none_or(|l| l == layout),
            "mixed vertex layouts in one mesh"
        );
        self.layout = Some(layout);
        let index = (self.vertices.len() / layout.stride() as usize) as u16;

        self.scratch.clear();
        vertex.write_components(layout, &mut self.scratch);
        self.vertices.extend_from_slice(cast_slice(&self.scratch)); // [f32] → &[u8]

        index
    }

    fn add_triangle(&mut self, i0: u16, i1: u16, i2: u16) {
        self.indices.push(i0);
        self.indices.push(i1);
        self.indices.push(i2);
    }
}

/// Buffers handed to the renderer for upload
#[derive(Debug, Clone, PartialEq)]
pub struct MeshBuffers {
    pub label: &'static str,
    pub layout: VertexLayout,
    /// Interleaved vertex bytes
    pub vertex_data: Vec<u8>,
    /// Triangle-list indices
    pub indices: Vec<u16>,
}

impl MeshBuffers {
    /// Number of indices to draw
    pub fn index_count(&self) -> u32 {
        self.indices.len() as u32
    }

    /// Stride in bytes
    pub fn stride(&self) -> u32 {
        self.layout.stride()
    }

    /// Index bytes (little-endian u16)
    pub fn index_data(&self) -> &[u8] {
        cast_slice(&self.indices)
    }
}
