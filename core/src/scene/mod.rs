//! Scene state and layout
//!
//! Replaces global camera/light state with an explicit [`SceneState`]
//! owned by the application loop.

mod camera;
mod layout;
mod state;

pub use camera::{
    CameraState, DEFAULT_CAMERA_FOV, MovementInput, PITCH_LIMIT, ProjectionMode,
    apply_mouse_delta, apply_movement, apply_projection_key, apply_scroll, front_from_angles,
};
pub use layout::{SceneMeshes, ScenePlacement, SceneShape, scene_placements};
pub use state::{FrameInput, SceneState};
