//! Shader uniforms: name slots resolved once, values written per frame

use bytemuck::{Pod, Zeroable};
use glam::{Mat4, Vec3};
use tracing::{trace, warn};

use super::model::ShadingParams;

/// Every uniform the scene program reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UniformSlot {
    Model,
    View,
    Projection,
    KeyLightPosition,
    KeyLightColor,
    FillLightPosition,
    FillLightColor,
    AmbientLightColor,
    ViewPosition,
    Shininess,
    UseUniformColor,
    UniformColor,
}

impl UniformSlot {
    pub const COUNT: usize = 12;

    pub const ALL: [UniformSlot; Self::COUNT] = [
        UniformSlot::Model,
        UniformSlot::View,
        UniformSlot::Projection,
        UniformSlot::KeyLightPosition,
        UniformSlot::KeyLightColor,
        UniformSlot::FillLightPosition,
        UniformSlot::FillLightColor,
        UniformSlot::AmbientLightColor,
        UniformSlot::ViewPosition,
        UniformSlot::Shininess,
        UniformSlot::UseUniformColor,
        UniformSlot::UniformColor,
    ];

    /// Name of the uniform in the shader source
    pub const fn name(self) -> &'static str {
        match self {
            UniformSlot::Model => "model",
            UniformSlot::View => "view",
            UniformSlot::Projection => "projection",
            UniformSlot::KeyLightPosition => "keyLightPosition",
            UniformSlot::KeyLightColor => "keyLightColor",
            UniformSlot::FillLightPosition => "fillLightPosition",
            UniformSlot::FillLightColor => "fillLightColor",
            UniformSlot::AmbientLightColor => "ambientLightColor",
            UniformSlot::ViewPosition => "viewPosition",
            UniformSlot::Shininess => "shininess",
            UniformSlot::UseUniformColor => "useUniformColor",
            UniformSlot::UniformColor => "uniformColor",
        }
    }

    /// Look a slot up by its shader name
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|slot| slot.name() == name)
    }

    const fn index(self) -> usize {
        self as usize
    }
}

/// A uniform value as handed to the renderer
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum UniformValue {
    Mat4(Mat4),
    Vec3(Vec3),
    Float(f32),
    Bool(bool),
}

/// Receives resolved uniform writes (implemented by the renderer).
pub trait UniformSink {
    fn set_uniform(&mut self, location: i32, value: UniformValue);
}

/// Uniform locations, resolved once after the program is linked.
///
/// Names the program does not expose stay unresolved and their writes are
/// skipped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UniformSlotTable {
    locations: [Option<i32>; UniformSlot::COUNT],
}

impl UniformSlotTable {
    /// Resolve every slot through `lookup`, called once per uniform name.
    pub fn resolve(mut lookup: impl FnMut(&str) -> Option<i32>) -> Self {
        let locations = UniformSlot::ALL.map(|slot| {
            let location = lookup(slot.name());
            if location.is_none() {
                warn!(
                    "Uniform '{}' not found in program; writes will be skipped",
                    slot.name()
                );
            }
            location
        });
        Self { locations }
    }

    pub fn location(&self, slot: UniformSlot) -> Option<i32> {
        self.locations[slot.index()]
    }

    /// Slots that did not resolve
    pub fn missing(&self) -> impl Iterator<Item = UniformSlot> + '_ {
        UniformSlot::ALL
            .into_iter()
            .filter(|&slot| self.location(slot).is_none())
    }

    /// Write one value if its slot resolved. Returns whether it was written.
    pub fn write(
        &self,
        slot: UniformSlot,
        value: UniformValue,
        sink: &mut impl UniformSink,
    ) -> bool {
        match self.location(slot) {
            Some(location) => {
                sink.set_uniform(location, value);
                true
            }
            None => {
                trace!("Skipping unresolved uniform '{}'", slot.name());
                false
            }
        }
    }
}

/// All uniform values of one draw
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameUniforms {
    pub model: Mat4,
    pub view: Mat4,
    pub projection: Mat4,
    pub shading: ShadingParams,
}

impl FrameUniforms {
    /// Value of one slot
    pub fn value(&self, slot: UniformSlot) -> UniformValue {
        let s = &self.shading;
        match slot {
            UniformSlot::Model => UniformValue::Mat4(self.model),
            UniformSlot::View => UniformValue::Mat4(self.view),
            UniformSlot::Projection => UniformValue::Mat4(self.projection),
            UniformSlot::KeyLightPosition => UniformValue::Vec3(s.key_light.position),
            UniformSlot::KeyLightColor => UniformValue::Vec3(s.key_light.color),
            UniformSlot::FillLightPosition => UniformValue::Vec3(s.fill_light.position),
            UniformSlot::FillLightColor => UniformValue::Vec3(s.fill_light.color),
            UniformSlot::AmbientLightColor => UniformValue::Vec3(s.ambient),
            UniformSlot::ViewPosition => UniformValue::Vec3(s.view_position),
            UniformSlot::Shininess => UniformValue::Float(s.shininess),
            UniformSlot::UseUniformColor => UniformValue::Bool(s.use_uniform_color),
            UniformSlot::UniformColor => UniformValue::Vec3(s.uniform_color),
        }
    }

    /// Push every uniform through the slot table. Returns the number written.
    pub fn write(&self, table: &UniformSlotTable, sink: &mut impl UniformSink) -> usize {
        UniformSlot::ALL
            .into_iter()
            .filter(|&slot| table.write(slot, self.value(slot), &mut *sink))
            .count()
    }
}

/// Lighting block for buffer upload (128 bytes, std140 compatible)
///
/// Every vec3 is padded to 16 bytes.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Pod, Zeroable)]
pub struct LightingUniforms {
    pub key_light_position: [f32; 4],
    pub key_light_color: [f32; 4],
    pub fill_light_position: [f32; 4],
    pub fill_light_color: [f32; 4],
    pub ambient_color: [f32; 4],
    pub view_position: [f32; 4],
    pub uniform_color: [f32; 4],
    pub shininess: f32,
    /// 0 = lit, 1 = flat uniform color
    pub use_uniform_color: u32,
    pub _pad: [u32; 2],
}

const _: () = assert!(core::mem::size_of::<LightingUniforms>() == 128);

impl From<&ShadingParams> for LightingUniforms {
    fn from(params: &ShadingParams) -> Self {
        let pad = |v: Vec3| v.extend(0.0).to_array();
        Self {
            key_light_position: pad(params.key_light.position),
            key_light_color: pad(params.key_light.color),
            fill_light_position: pad(params.fill_light.position),
            fill_light_color: pad(params.fill_light.color),
            ambient_color: pad(params.ambient),
            view_position: pad(params.view_position),
            uniform_color: pad(params.uniform_color),
            shininess: params.shininess,
            use_uniform_color: params.use_uniform_color as u32,
            _pad: [0; 2],
        }
    }
}

impl LightingUniforms {
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::bytes_of(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct RecordingSink {
        writes: Vec<(i32, UniformValue)>,
    }

    impl UniformSink for RecordingSink {
        fn set_uniform(&mut self, location: i32, value: UniformValue) {
            self.writes.push((location, value));
        }
    }

    fn uniforms() -> FrameUniforms {
        FrameUniforms {
            model: Mat4::IDENTITY,
            view: Mat4::from_translation(Vec3::new(0.0, 0.0, -5.0)),
            projection: Mat4::IDENTITY,
            shading: ShadingParams::default(),
        }
    }

    #[test]
    fn test_slot_names_are_unique_and_roundtrip() {
        for slot in UniformSlot::ALL {
            assert_eq!(UniformSlot::from_name(slot.name()), Some(slot));
        }
        assert_eq!(UniformSlot::from_name("lightPos"), None);
    }

    #[test]
    fn test_resolve_calls_lookup_once_per_name() {
        let mut calls = Vec::new();
        let table = UniformSlotTable::resolve(|name| {
            calls.push(name.to_string());
            Some(calls.len() as i32 - 1)
        });
        assert_eq!(calls.len(), UniformSlot::COUNT);
        assert_eq!(table.location(UniformSlot::Model), Some(0));
        assert_eq!(table.location(UniformSlot::UniformColor), Some(11));
        assert_eq!(table.missing().count(), 0);
    }

    #[test]
    fn test_unresolved_slots_are_skipped() {
        let table = UniformSlotTable::resolve(|name| match name {
            "shininess" | "fillLightColor" => None,
            other => UniformSlot::from_name(other).map(|s| s.index() as i32 + 10),
        });
        let missing: Vec<_> = table.missing().collect();
        assert_eq!(
            missing,
            vec![UniformSlot::FillLightColor, UniformSlot::Shininess]
        );

        let mut sink = RecordingSink::default();
        let written = uniforms().write(&table, &mut sink);
        assert_eq!(written, UniformSlot::COUNT - 2);
        assert!(
            sink.writes
                .iter()
                .all(|&(location, _)| location != 16 && location != 19)
        );
    }

    #[test]
    fn test_write_sends_values_to_resolved_locations() {
        let table =
            UniformSlotTable::resolve(|name| UniformSlot::from_name(name).map(|s| s.index() as i32));
        let mut sink = RecordingSink::default();
        let frame = uniforms();
        frame.write(&table, &mut sink);

        assert_eq!(sink.writes.len(), UniformSlot::COUNT);
        assert_eq!(sink.writes[1], (1, UniformValue::Mat4(frame.view)));
        assert_eq!(sink.writes[9], (9, UniformValue::Float(32.0)));
        assert_eq!(sink.writes[10], (10, UniformValue::Bool(false)));
    }

    #[test]
    fn test_lighting_uniforms_layout() {
        let params = ShadingParams {
            use_uniform_color: true,
            ..ShadingParams::default()
        };
        let block = LightingUniforms::from(&params);
        assert_eq!(block.as_bytes().len(), 128);
        assert_eq!(block.key_light_color, [1.0, 0.6, 0.2, 0.0]);
        assert_eq!(block.shininess, 32.0);
        assert_eq!(block.use_uniform_color, 1);

        let floats: &[f32] = bytemuck::cast_slice(block.as_bytes());
        // shininess follows the seven padded vec3s
        assert_eq!(floats[28], 32.0);
    }
}
