//! Camera state types
//!
//! Free-flying camera with yaw/pitch mouse look, keyboard movement, and a
//! perspective/orthographic toggle. Input handling is a set of pure
//! transitions `CameraState -> CameraState`.

use glam::{Mat4, Vec3};

use crate::config::CameraConfig;

/// Default camera field of view in degrees
pub const DEFAULT_CAMERA_FOV: f32 = 45.0;

/// Pitch limit in degrees, keeps the view from flipping over the poles
pub const PITCH_LIMIT: f32 = 89.0;

/// Projection used for the next frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProjectionMode {
    #[default]
    Perspective,
    Orthographic,
}

impl ProjectionMode {
    pub fn toggled(self) -> Self {
        match self {
            ProjectionMode::Perspective => ProjectionMode::Orthographic,
            ProjectionMode::Orthographic => ProjectionMode::Perspective,
        }
    }
}

/// Movement keys held during a frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MovementInput {
    /// W
    pub forward: bool,
    /// S
    pub backward: bool,
    /// A
    pub left: bool,
    /// D
    pub right: bool,
    /// Q
    pub up: bool,
    /// E
    pub down: bool,
}

/// Camera state for 3D rendering
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraState {
    /// Camera position in world space
    pub position: Vec3,
    /// Unit view direction
    pub front: Vec3,
    pub up: Vec3,
    /// Degrees, -90 looks down -Z
    pub yaw: f32,
    /// Degrees, clamped to ±[`PITCH_LIMIT`]
    pub pitch: f32,
    /// Scroll-adjusted speed
    pub speed: f32,
    /// Degrees per pixel of mouse motion
    pub sensitivity: f32,
    /// Movement step per second
    pub move_speed: f32,
    pub scroll_step: f32,
    pub min_speed: f32,
    pub max_speed: f32,
    pub projection: ProjectionMode,
    /// Whether the projection key was down last frame
    pub projection_key_down: bool,
    /// Field of view in degrees
    pub fov: f32,
    /// Near clipping plane
    pub near: f32,
    /// Far clipping plane
    pub far: f32,
    /// Half height of the orthographic view volume
    pub ortho_half_height: f32,
}

impl Default for CameraState {
    fn default() -> Self {
        Self::from_config(&CameraConfig::default())
    }
}

/// Unit direction for a yaw/pitch pair in degrees
pub fn front_from_angles(yaw: f32, pitch: f32) -> Vec3 {
    let (sin_yaw, cos_yaw) = yaw.to_radians().sin_cos();
    let (sin_pitch, cos_pitch) = pitch.to_radians().sin_cos();
    Vec3::new(cos_yaw * cos_pitch, sin_pitch, sin_yaw * cos_pitch).normalize()
}

impl CameraState {
    pub fn from_config(config: &CameraConfig) -> Self {
        let pitch = config.pitch.clamp(-PITCH_LIMIT, PITCH_LIMIT);
        Self {
            position: Vec3::from_array(config.position),
            front: front_from_angles(config.yaw, pitch),
            up: Vec3::Y,
            yaw: config.yaw,
            pitch,
            speed: config.move_speed,
            sensitivity: config.sensitivity,
            move_speed: config.move_speed,
            scroll_step: config.scroll_step,
            min_speed: config.min_speed,
            max_speed: config.max_speed,
            projection: if config.orthographic {
                ProjectionMode::Orthographic
            } else {
                ProjectionMode::Perspective
            },
            projection_key_down: false,
            fov: config.fov_degrees,
            near: config.near,
            far: config.far,
            ortho_half_height: config.ortho_half_height,
        }
    }

    /// Compute the view matrix (world-to-camera transform)
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.position + self.front, self.up)
    }

    /// Compute the projection matrix for a given aspect ratio
    ///
    /// OpenGL clip space (depth -1..1).
    pub fn projection_matrix(&self, aspect_ratio: f32) -> Mat4 {
        match self.projection {
            ProjectionMode::Perspective => {
                Mat4::perspective_rh_gl(self.fov.to_radians(), aspect_ratio, self.near, self.far)
            }
            ProjectionMode::Orthographic => {
                let half_h = self.ortho_half_height;
                let half_w = half_h * aspect_ratio;
                Mat4::orthographic_rh_gl(-half_w, half_w, -half_h, half_h, self.near, self.far)
            }
        }
    }

    /// Compute the combined view-projection matrix
    pub fn view_projection_matrix(&self, aspect_ratio: f32) -> Mat4 {
        self.projection_matrix(aspect_ratio) * self.view_matrix()
    }
}

/// Mouse look. `dy` is positive when the mouse moves up.
pub fn apply_mouse_delta(state: CameraState, dx: f32, dy: f32) -> CameraState {
    let yaw = state.yaw + dx * state.sensitivity;
    let pitch = (state.pitch + dy * state.sensitivity).clamp(-PITCH_LIMIT, PITCH_LIMIT);
    CameraState {
        yaw,
        pitch,
        front: front_from_angles(yaw, pitch),
        ..state
    }
}

/// Scroll wheel adjusts the speed within `[min_speed, max_speed]`.
pub fn apply_scroll(state: CameraState, dy: f32) -> CameraState {
    CameraState {
        speed: (state.speed + dy * state.scroll_step).clamp(state.min_speed, state.max_speed),
        ..state
    }
}

/// Move along front (W/S), right (A/D), and up (Q/E) by `move_speed * dt`.
pub fn apply_movement(state: CameraState, input: MovementInput, dt: f32) -> CameraState {
    let step = state.move_speed * dt;
    let right = state.front.cross(state.up).normalize_or_zero();

    let mut position = state.position;
    if input.forward {
        position += step * state.front;
    }
    if input.backward {
        position -= step * state.front;
    }
    if input.left {
        position -= right * step;
    }
    if input.right {
        position += right * step;
    }
    if input.up {
        position += step * state.up;
    }
    if input.down {
        position -= step * state.up;
    }

    CameraState { position, ..state }
}

/// Toggle the projection on the frame the key goes down.
pub fn apply_projection_key(state: CameraState, pressed: bool) -> CameraState {
    let projection = if pressed && !state.projection_key_down {
        state.projection.toggled()
    } else {
        state.projection
    };
    CameraState {
        projection,
        projection_key_down: pressed,
        ..state
    }
}
