//! Integration tests for mesh and shading properties
//!
//! Exercises the generators, the shading model, and the per-frame uniform
//! flow through the public API only.

use glam::{Mat4, Vec2, Vec3, Vec4};
use primscene_core::config::{SceneConfig, ShapesConfig};
use primscene_core::procedural::{
    InterleavedMesh, Mesh, generate_cube, generate_cylinder, generate_marker_cube, generate_plane,
    generate_pyramid, generate_sphere, generate_torus,
};
use primscene_core::scene::{FrameInput, SceneMeshes, SceneState, scene_placements};
use primscene_core::shading::{
    FragmentInput, LightSnapshot, ShadingParams, UniformSink, UniformSlot, UniformSlotTable,
    UniformValue, shade,
};
use primscene_core::texture::{TextureImage, TextureSampler};

const EPSILON: f32 = 1e-5;

fn assert_indices_in_range(mesh: &Mesh, what: &str) {
    assert_eq!(mesh.index_count() % 3, 0, "{what}: partial triangle");
    let count = mesh.vertex_count();
    for &index in &mesh.indices {
        assert!((index as usize) < count, "{what}: index {index} >= {count}");
    }
}

#[test]
fn test_every_index_is_in_range() {
    let white = Vec4::ONE;
    for (stacks, slices) in [(2, 3), (4, 4), (7, 13), (20, 20)] {
        let mesh: Mesh = generate_sphere(1.0, stacks, slices, white).unwrap();
        assert_indices_in_range(&mesh, "sphere");
    }
    for (circles, points) in [(3, 3), (10, 10), (5, 17)] {
        let mesh: Mesh = generate_torus(1.0, 0.25, circles, points, white).unwrap();
        assert_indices_in_range(&mesh, "torus");
    }
    for segments in [3, 4, 32, 100] {
        let mesh: Mesh = generate_cylinder(segments, 1.0, 0.5, white).unwrap();
        assert_indices_in_range(&mesh, "cylinder");
    }
    let pyramid: Mesh = generate_pyramid(0.5, 0.5, -1.2, white).unwrap();
    let plane: Mesh = generate_plane(5.0, white).unwrap();
    let cube: Mesh = generate_cube(2.0, 2.0, 1.0, white).unwrap();
    let marker: Mesh = generate_marker_cube(1.0).unwrap();
    assert_indices_in_range(&pyramid, "pyramid");
    assert_indices_in_range(&plane, "plane");
    assert_indices_in_range(&cube, "cube");
    assert_indices_in_range(&marker, "marker");
}

#[test]
fn test_parametric_triangle_counts() {
    let white = Vec4::ONE;
    for (stacks, slices) in [(2, 3), (6, 9), (20, 20)] {
        let mesh: Mesh = generate_sphere(0.5, stacks, slices, white).unwrap();
        assert_eq!(mesh.triangle_count(), (2 * stacks * slices) as usize);
        assert_eq!(
            mesh.vertex_count(),
            ((stacks + 1) * (slices + 1)) as usize
        );
    }
    for (circles, points) in [(3, 4), (10, 10), (12, 7)] {
        let mesh: Mesh = generate_torus(1.0, 0.25, circles, points, white).unwrap();
        assert_eq!(mesh.triangle_count(), (2 * circles * points) as usize);
        assert_eq!(mesh.vertex_count(), (circles * points) as usize);
    }
    for segments in [3, 8, 32] {
        let mesh: Mesh = generate_cylinder(segments, 1.0, 0.5, white).unwrap();
        assert_eq!(mesh.triangle_count(), (2 * segments + 2 * segments) as usize);
    }
}

#[test]
fn test_sphere_four_by_four() {
    let mesh: Mesh = generate_sphere(1.0, 4, 4, Vec4::ONE).unwrap();
    assert_eq!(mesh.vertex_count(), 25);
    assert_eq!(mesh.index_count(), 96);
}

#[test]
fn test_cylinder_four_segments() {
    let mesh: Mesh = generate_cylinder(4, 1.0, 1.0, Vec4::ONE).unwrap();
    assert_eq!(mesh.vertex_count(), 10);
    assert_eq!(mesh.index_count(), 48);
}

#[test]
fn test_packed_and_unpacked_builders_agree() {
    let shapes = ShapesConfig::default();

    let unpacked: Mesh = shapes.torus.generate().unwrap();
    let packed: InterleavedMesh = shapes.torus.generate().unwrap();
    assert_eq!(packed.indices, unpacked.indices);
    assert_eq!(packed.vertices, unpacked.to_buffers().vertex_data);

    let unpacked: Mesh = shapes.sphere.generate().unwrap();
    let packed: InterleavedMesh = shapes.sphere.generate().unwrap();
    assert_eq!(packed.vertex_count(), unpacked.vertex_count());
    assert_eq!(packed.vertices, unpacked.to_buffers().vertex_data);
}

fn fragment() -> FragmentInput {
    FragmentInput {
        position: Vec3::new(0.3, -0.2, 0.1),
        color: Vec4::new(0.8, 0.4, 0.2, 1.0),
        uv: Vec2::new(0.25, 0.75),
    }
}

#[test]
fn test_uniform_mode_returns_flat_color() {
    let tint = TextureImage::from_rgb8(1, 1, vec![10, 20, 30]).unwrap();
    for color in [Vec3::ZERO, Vec3::ONE, Vec3::new(0.1, 0.7, 0.3)] {
        let params = ShadingParams {
            use_uniform_color: true,
            uniform_color: color,
            ..ShadingParams::default()
        };
        assert_eq!(shade(&fragment(), &params, &tint), color.extend(1.0));
    }
}

#[test]
fn test_lights_above_surface_reduce_to_ambient() {
    // The fixed normal points down, so lights above the fragment add no diffuse.
    // Their reflected rays point back up; a viewer level with the fragment
    // sees no specular either.
    let frag = fragment();
    let params = ShadingParams {
        key_light: LightSnapshot {
            position: frag.position + Vec3::new(0.0, 4.0, 0.0),
            color: Vec3::new(1.0, 0.6, 0.2),
        },
        fill_light: LightSnapshot {
            position: frag.position + Vec3::new(0.0, 9.0, 0.0),
            color: Vec3::splat(0.9),
        },
        view_position: frag.position + Vec3::new(3.0, 0.0, 0.0),
        ..ShadingParams::default()
    };

    let tint = TextureImage::from_rgb8(1, 1, vec![255, 128, 64]).unwrap();
    let out = shade(&frag, &params, &tint);
    let expected = (params.ambient * frag.color.truncate()).extend(1.0) * tint.sample(frag.uv);
    assert!((out - expected).abs().max_element() < EPSILON);
}

#[test]
fn test_swapping_lights_gives_same_color() {
    let frag = fragment();
    let params = ShadingParams {
        key_light: LightSnapshot {
            position: Vec3::new(-1.0, -3.0, 2.0),
            color: Vec3::new(1.0, 0.6, 0.2),
        },
        fill_light: LightSnapshot {
            position: Vec3::new(2.0, -1.0, -1.0),
            color: Vec3::splat(0.9),
        },
        view_position: Vec3::new(0.0, -2.0, 4.0),
        ..ShadingParams::default()
    };
    let swapped = ShadingParams {
        key_light: params.fill_light,
        fill_light: params.key_light,
        ..params
    };

    let white = TextureImage::white();
    let a = shade(&frag, &params, &white);
    let b = shade(&frag, &swapped, &white);
    assert!((a - b).abs().max_element() < EPSILON);
}

#[derive(Default)]
struct RecordingSink {
    writes: Vec<(i32, UniformValue)>,
}

impl UniformSink for RecordingSink {
    fn set_uniform(&mut self, location: i32, value: UniformValue) {
        self.writes.push((location, value));
    }
}

/// One frame of the render loop without a GPU: update the state, then
/// write uniforms for every placement and both light markers.
#[test]
fn test_frame_uniform_flow() {
    let config = SceneConfig::default();
    let meshes = SceneMeshes::generate(&config.shapes).unwrap();
    let mut state = SceneState::new(&config).unwrap();
    state.update(&FrameInput {
        dt: 0.016,
        scroll: 1.0,
        ..Default::default()
    });

    // Program without the fill light color uniform
    let table = UniformSlotTable::resolve(|name| {
        UniformSlot::from_name(name)
            .filter(|&slot| slot != UniformSlot::FillLightColor)
            .map(|slot| slot as i32)
    });

    let mut sink = RecordingSink::default();
    let placements = scene_placements();
    for placement in &placements {
        assert!(meshes.get(placement.shape).index_count() > 0);
        let written = state.frame_uniforms(placement.model).write(&table, &mut sink);
        assert_eq!(written, UniformSlot::COUNT - 1);
    }
    for marker in state.marker_uniforms() {
        marker.write(&table, &mut sink);
    }

    assert_eq!(sink.writes.len(), (placements.len() + 2) * (UniformSlot::COUNT - 1));
    let use_uniform = UniformSlot::UseUniformColor as i32;
    let flags: Vec<_> = sink
        .writes
        .iter()
        .filter(|(location, _)| *location == use_uniform)
        .map(|(_, value)| *value)
        .collect();
    assert_eq!(flags.len(), placements.len() + 2);
    assert!(flags[..placements.len()].iter().all(|v| *v == UniformValue::Bool(false)));
    assert!(flags[placements.len()..].iter().all(|v| *v == UniformValue::Bool(true)));

    let first_model = sink.writes[0].1;
    assert_eq!(first_model, UniformValue::Mat4(Mat4::from_translation(Vec3::new(0.0, -2.1, 0.0))));
}
