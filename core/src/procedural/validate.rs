//! Parameter checks shared by the generators
//!
//! Every check runs before the first vertex is emitted, so a failing
//! generator never leaves a partial mesh behind.

use crate::error::MeshError;

/// Largest vertex count addressable by a u16 index
pub const MAX_VERTICES: usize = u16::MAX as usize + 1;

/// Fail unless `value` is finite
pub(crate) fn require_finite(
    shape: &'static str,
    parameter: &'static str,
    value: f32,
) -> Result<f32, MeshError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(MeshError::InvalidParameter {
            shape,
            parameter,
            value: value.to_string(),
            reason: "must be finite",
        })
    }
}

/// Fail unless `value` is finite and strictly positive
pub(crate) fn require_positive(
    shape: &'static str,
    parameter: &'static str,
    value: f32,
) -> Result<f32, MeshError> {
    let value = require_finite(shape, parameter, value)?;
    if value > 0.0 {
        Ok(value)
    } else {
        Err(MeshError::DegenerateGeometry {
            shape,
            parameter,
            value,
        })
    }
}

/// Fail unless a subdivision count reaches `min`
pub(crate) fn require_subdivisions(
    shape: &'static str,
    parameter: &'static str,
    value: u32,
    min: u32,
) -> Result<u32, MeshError> {
    if value >= min {
        return Ok(value);
    }
    let reason = match min {
        1 => "must be >= 1",
        2 => "must be >= 2",
        3 => "must be >= 3",
        _ => "below the minimum subdivision count",
    };
    Err(MeshError::InvalidParameter {
        shape,
        parameter,
        value: value.to_string(),
        reason,
    })
}

/// Fail if a mesh of `vertices` vertices cannot be indexed with u16
pub(crate) fn require_vertex_budget(shape: &'static str, vertices: u64) -> Result<(), MeshError> {
    if vertices <= MAX_VERTICES as u64 {
        Ok(())
    } else {
        Err(MeshError::IndexOverflow {
            shape,
            vertices: usize::try_from(vertices).unwrap_or(usize::MAX),
            max: MAX_VERTICES,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require_positive_rejects_zero_and_negative() {
        assert!(matches!(
            require_positive("cube", "height", 0.0),
            Err(MeshError::DegenerateGeometry { parameter: "height", .. })
        ));
        assert!(matches!(
            require_positive("cube", "height", -1.0),
            Err(MeshError::DegenerateGeometry { .. })
        ));
        assert_eq!(require_positive("cube", "height", 0.25), Ok(0.25));
    }

    #[test]
    fn test_non_finite_is_invalid_parameter() {
        for value in [f32::NAN, f32::INFINITY, f32::NEG_INFINITY] {
            assert!(matches!(
                require_positive("sphere", "radius", value),
                Err(MeshError::InvalidParameter { reason: "must be finite", .. })
            ));
        }
    }

    #[test]
    fn test_require_subdivisions() {
        assert_eq!(require_subdivisions("sphere", "stacks", 1, 1), Ok(1));
        assert!(matches!(
            require_subdivisions("sphere", "stacks", 0, 1),
            Err(MeshError::InvalidParameter { reason: "must be >= 1", .. })
        ));
        assert!(matches!(
            require_subdivisions("grid", "rows", 1, 2),
            Err(MeshError::InvalidParameter { reason: "must be >= 2", .. })
        ));
        assert!(matches!(
            require_subdivisions("torus", "circles", 0, 3),
            Err(MeshError::InvalidParameter { reason: "must be >= 3", .. })
        ));
        assert!(matches!(
            require_subdivisions("grid", "rows", 3, 4),
            Err(MeshError::InvalidParameter {
                reason: "below the minimum subdivision count",
                ..
            })
        ));
    }

    #[test]
    fn test_vertex_budget_boundary() {
        assert!(require_vertex_budget("sphere", 65536).is_ok());
        assert_eq!(
            require_vertex_budget("sphere", 65537),
            Err(MeshError::IndexOverflow {
                shape: "sphere",
                vertices: 65537,
                max: 65536
            })
        );
    }
}
