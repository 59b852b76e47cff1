//! Per-application scene state: camera, lights, and material constants

use glam::{Mat4, Vec2, Vec3};

use super::camera::{
    CameraState, MovementInput, apply_mouse_delta, apply_movement, apply_projection_key,
    apply_scroll,
};
use crate::config::SceneConfig;
use crate::error::SceneError;
use crate::shading::{FrameUniforms, LightSource, LightingUniforms, ShadingParams};

/// Input gathered by the application loop for one frame
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FrameInput {
    /// Seconds since the previous frame
    pub dt: f32,
    /// Mouse motion in pixels, +y up
    pub mouse_delta: Vec2,
    /// Scroll wheel steps
    pub scroll: f32,
    pub movement: MovementInput,
    /// Projection toggle key held
    pub projection_key: bool,
    /// New aspect ratio after a resize
    pub aspect_ratio: Option<f32>,
}

/// Camera, lights, and shading constants owned by the application loop
#[derive(Debug, Clone, PartialEq)]
pub struct SceneState {
    pub camera: CameraState,
    pub key_light: LightSource,
    pub fill_light: LightSource,
    pub ambient: Vec3,
    pub shininess: f32,
    /// Flat color of the light markers
    pub marker_color: Vec3,
    pub aspect_ratio: f32,
}

impl SceneState {
    pub fn new(config: &SceneConfig) -> Result<Self, SceneError> {
        let lighting = &config.lighting;
        let light = |position: Vec3, color: Vec3| {
            LightSource::new(position, color, lighting.marker_scale).map_err(|source| {
                SceneError::Mesh {
                    shape: "light_marker",
                    source,
                }
            })
        };

        Ok(Self {
            camera: CameraState::from_config(&config.camera),
            key_light: light(lighting.key.position(), lighting.key.color())?,
            fill_light: light(lighting.fill.position(), lighting.fill.color())?,
            ambient: Vec3::from_array(lighting.ambient),
            shininess: lighting.shininess,
            marker_color: Vec3::from_array(lighting.marker_color),
            aspect_ratio: config.aspect_ratio(),
        })
    }

    /// Advance one frame: projection key, mouse look, scroll, movement,
    /// then light positions.
    pub fn update(&mut self, input: &FrameInput) {
        let mut camera = apply_projection_key(self.camera, input.projection_key);
        if input.mouse_delta != Vec2::ZERO {
            camera = apply_mouse_delta(camera, input.mouse_delta.x, input.mouse_delta.y);
        }
        if input.scroll != 0.0 {
            camera = apply_scroll(camera, input.scroll);
        }
        self.camera = apply_movement(camera, input.movement, input.dt);

        if let Some(aspect) = input.aspect_ratio.filter(|a| a.is_finite() && *a > 0.0) {
            self.aspect_ratio = aspect;
        }

        self.key_light.refresh_position();
        self.fill_light.refresh_position();
    }

    /// Parameters for lit, textured draws
    pub fn shading_params(&self) -> ShadingParams {
        ShadingParams {
            key_light: self.key_light.snapshot(),
            fill_light: self.fill_light.snapshot(),
            ambient: self.ambient,
            view_position: self.camera.position,
            shininess: self.shininess,
            use_uniform_color: false,
            uniform_color: Vec3::ONE,
        }
    }

    /// Parameters for flat-colored marker draws
    pub fn marker_params(&self, color: Vec3) -> ShadingParams {
        ShadingParams {
            use_uniform_color: true,
            uniform_color: color,
            ..self.shading_params()
        }
    }

    /// Lighting block for lit draws, ready for buffer upload
    pub fn lighting_block(&self) -> LightingUniforms {
        LightingUniforms::from(&self.shading_params())
    }

    pub fn view(&self) -> Mat4 {
        self.camera.view_matrix()
    }

    pub fn projection(&self) -> Mat4 {
        self.camera.projection_matrix(self.aspect_ratio)
    }

    /// Uniforms for a lit shape drawn with `model`
    pub fn frame_uniforms(&self, model: Mat4) -> FrameUniforms {
        FrameUniforms {
            model,
            view: self.view(),
            projection: self.projection(),
            shading: self.shading_params(),
        }
    }

    /// Uniforms for both light markers, key first
    pub fn marker_uniforms(&self) -> [FrameUniforms; 2] {
        [&self.key_light, &self.fill_light].map(|light| FrameUniforms {
            model: light.model,
            view: self.view(),
            projection: self.projection(),
            shading: self.marker_params(self.marker_color),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::camera::ProjectionMode;
    use crate::shading::{KEY_LIGHT_POSITION, UniformSlot, UniformValue};

    fn state() -> SceneState {
        SceneState::new(&SceneConfig::default()).unwrap()
    }

    #[test]
    fn test_new_uses_config() {
        let state = state();
        assert_eq!(state.key_light.position, KEY_LIGHT_POSITION);
        assert_eq!(state.fill_light.color, Vec3::splat(0.9));
        assert_eq!(state.shininess, 32.0);
        assert!((state.aspect_ratio - 800.0 / 600.0).abs() < 1e-6);
    }

    #[test]
    fn test_update_applies_transitions_in_order() {
        let mut state = state();
        let input = FrameInput {
            dt: 1.0,
            mouse_delta: Vec2::new(1800.0, 0.0),
            projection_key: true,
            movement: MovementInput {
                forward: true,
                ..Default::default()
            },
            ..Default::default()
        };
        state.update(&input);

        assert_eq!(state.camera.projection, ProjectionMode::Orthographic);
        // Turned to +X before moving
        assert!((state.camera.position - Vec3::new(2.5, 0.0, 5.0)).length() < 1e-4);
    }

    #[test]
    fn test_update_keeps_lights_at_model_translation() {
        let mut state = state();
        state.key_light.position = Vec3::ZERO;
        state.update(&FrameInput::default());
        assert!((state.key_light.position - KEY_LIGHT_POSITION).length() < 1e-6);
    }

    #[test]
    fn test_resize_ignores_degenerate_aspect() {
        let mut state = state();
        state.update(&FrameInput {
            aspect_ratio: Some(0.0),
            ..Default::default()
        });
        assert!((state.aspect_ratio - 800.0 / 600.0).abs() < 1e-6);
        state.update(&FrameInput {
            aspect_ratio: Some(2.0),
            ..Default::default()
        });
        assert_eq!(state.aspect_ratio, 2.0);
    }

    #[test]
    fn test_marker_uniforms_use_flat_color() {
        let state = state();
        let [key, fill] = state.marker_uniforms();
        assert_eq!(key.model, state.key_light.model);
        assert_eq!(fill.model, state.fill_light.model);
        assert_eq!(
            key.value(UniformSlot::UseUniformColor),
            UniformValue::Bool(true)
        );
        assert_eq!(key.shading.uniform_color, Vec3::ONE);
    }

    #[test]
    fn test_lighting_block_matches_shading_params() {
        let mut state = state();
        state.update(&FrameInput {
            dt: 0.5,
            movement: MovementInput {
                right: true,
                ..Default::default()
            },
            ..Default::default()
        });

        let block = state.lighting_block();
        let params = state.shading_params();
        assert_eq!(block.key_light_position, KEY_LIGHT_POSITION.extend(0.0).to_array());
        assert_eq!(block.view_position, params.view_position.extend(0.0).to_array());
        assert_eq!(block.shininess, 32.0);
        assert_eq!(block.use_uniform_color, 0);
        assert_eq!(block.as_bytes().len(), 128);
    }

    #[test]
    fn test_shading_params_track_camera() {
        let mut state = state();
        state.update(&FrameInput {
            dt: 1.0,
            movement: MovementInput {
                up: true,
                ..Default::default()
            },
            ..Default::default()
        });
        assert!((state.shading_params().view_position - Vec3::new(0.0, 2.5, 5.0)).length() < 1e-5);
    }
}
