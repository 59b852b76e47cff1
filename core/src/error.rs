//! Error types for mesh generation, texture loading, configuration, and scene setup.

use std::path::PathBuf;

/// Error returned by the procedural mesh generators.
///
/// Generation is all-or-nothing: when a generator returns an error, no
/// partial mesh exists anywhere.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum MeshError {
    /// A subdivision count is too small, or an input is not a finite number.
    #[error("{shape}: invalid parameter `{parameter}` = {value} ({reason})")]
    InvalidParameter {
        shape: &'static str,
        parameter: &'static str,
        value: String,
        reason: &'static str,
    },

    /// A length parameter (radius, height, extent) would collapse the shape.
    #[error("{shape}: `{parameter}` = {value} produces degenerate geometry (must be > 0)")]
    DegenerateGeometry {
        shape: &'static str,
        parameter: &'static str,
        value: f32,
    },

    /// The shape needs more vertices than a u16 index can address.
    #[error("{shape}: {vertices} vertices exceed the u16 index range (max {max})")]
    IndexOverflow {
        shape: &'static str,
        vertices: usize,
        max: usize,
    },
}

/// Error returned when a texture cannot be loaded or built from raw bytes.
#[derive(Debug, thiserror::Error)]
pub enum TextureError {
    #[error("failed to read texture {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to decode texture: {0}")]
    Decode(#[from] image::ImageError),

    #[error("texture data is {actual} bytes, expected {expected} for {width}x{height} RGB")]
    SizeMismatch {
        width: u32,
        height: u32,
        expected: usize,
        actual: usize,
    },

    #[error("texture has zero size ({width}x{height})")]
    Empty { width: u32, height: u32 },
}

/// Error returned when a configuration file cannot be read or parsed.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("invalid shape parameters: {0}")]
    Shape(#[from] MeshError),

    #[error("invalid config value `{field}`: {reason}")]
    Invalid { field: &'static str, reason: String },
}

/// Error returned when the scene meshes cannot be built.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SceneError {
    #[error("failed to build {shape} mesh: {source}")]
    Mesh {
        shape: &'static str,
        #[source]
        source: MeshError,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mesh_error_messages_name_shape_and_parameter() {
        let err = MeshError::DegenerateGeometry {
            shape: "sphere",
            parameter: "radius",
            value: 0.0,
        };
        let msg = err.to_string();
        assert!(msg.contains("sphere"));
        assert!(msg.contains("radius"));

        let err = MeshError::InvalidParameter {
            shape: "torus",
            parameter: "circles",
            value: "2".to_string(),
            reason: "must be >= 3",
        };
        assert!(err.to_string().contains("must be >= 3"));
    }

    #[test]
    fn test_texture_size_mismatch_message() {
        let err = TextureError::SizeMismatch {
            width: 2,
            height: 2,
            expected: 12,
            actual: 5,
        };
        assert!(err.to_string().contains("expected 12"));
    }
}
