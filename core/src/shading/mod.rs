//! Two-light shading model
//!
//! - [`light`]: positional lights and their marker cubes
//! - [`model`]: the per-fragment color computation
//! - [`uniforms`]: slot table and per-draw uniform values for the renderer

mod light;
mod model;
mod uniforms;

pub use light::{
    FILL_LIGHT_COLOR, FILL_LIGHT_POSITION, KEY_LIGHT_COLOR, KEY_LIGHT_POSITION, LightSnapshot,
    LightSource, MARKER_SCALE,
};
pub use model::{
    AMBIENT_COLOR, FragmentInput, SHININESS, SURFACE_NORMAL, ShadingParams, reflect, shade,
};
pub use uniforms::{
    FrameUniforms, LightingUniforms, UniformSink, UniformSlot, UniformSlotTable, UniformValue,
};
