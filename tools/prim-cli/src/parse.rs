//! Comma-separated vector arguments (`x,y,z`)

use glam::{Vec2, Vec3, Vec4};

fn parse_components<const N: usize>(s: &str) -> Result<[f32; N], String> {
    let parts: Vec<&str> = s.split(',').map(str::trim).collect();
    if parts.len() != N {
        return Err(format!("expected {N} comma-separated numbers, got {}", parts.len()));
    }
    let mut out = [0.0; N];
    for (slot, part) in out.iter_mut().zip(&parts) {
        let value: f32 = part
            .parse()
            .map_err(|_| format!("'{part}' is not a number"))?;
        if !value.is_finite() {
            return Err(format!("'{part}' is not finite"));
        }
        *slot = value;
    }
    Ok(out)
}

pub fn parse_vec2(s: &str) -> Result<Vec2, String> {
    parse_components::<2>(s).map(Vec2::from_array)
}

pub fn parse_vec3(s: &str) -> Result<Vec3, String> {
    parse_components::<3>(s).map(Vec3::from_array)
}

pub fn parse_vec4(s: &str) -> Result<Vec4, String> {
    parse_components::<4>(s).map(Vec4::from_array)
}
