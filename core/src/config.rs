//! Configuration management (config.toml)
//!
//! Handles loading, saving, and providing defaults for scene settings.
//! Settings are stored in TOML format in the platform-specific config directory.
//! Every value has a default that reproduces the reference scene, so an
//! empty file is a valid configuration.

use std::path::{Path, PathBuf};

use glam::{Vec3, Vec4};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::error::{ConfigError, MeshError};
use crate::procedural::{
    Mesh, MeshBuilder, PLANE_HALF_EXTENT, generate_cube, generate_cylinder, generate_plane,
    generate_pyramid, generate_sphere, generate_torus,
};
use crate::texture::TextureSlot;

/// File name inside [`config_dir`]
pub const CONFIG_FILE: &str = "config.toml";

/// Scene configuration.
///
/// Contains all user-configurable settings organized into sections.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct SceneConfig {
    /// Window settings
    #[serde(default)]
    pub window: WindowConfig,
    /// Camera start state and input response
    #[serde(default)]
    pub camera: CameraConfig,
    /// Key/fill lights and material constants
    #[serde(default)]
    pub lighting: LightingConfig,
    /// Shape parameters and colors
    #[serde(default)]
    pub shapes: ShapesConfig,
    /// Texture file locations
    #[serde(default)]
    pub textures: TextureConfig,
}

/// Window configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WindowConfig {
    /// Width in pixels (default: 800)
    #[serde(default = "default_width")]
    pub width: u32,
    /// Height in pixels (default: 600)
    #[serde(default = "default_height")]
    pub height: u32,
    #[serde(default = "default_title")]
    pub title: String,
}

/// Camera configuration.
///
/// Angles are in degrees.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    pub position: [f32; 3],
    pub yaw: f32,
    pub pitch: f32,
    /// Base movement speed in units per second
    pub move_speed: f32,
    /// Degrees per pixel of mouse motion
    pub sensitivity: f32,
    /// Speed change per scroll step
    pub scroll_step: f32,
    pub min_speed: f32,
    pub max_speed: f32,
    /// Vertical field of view for the perspective projection
    pub fov_degrees: f32,
    pub near: f32,
    pub far: f32,
    /// Half height of the orthographic view volume
    pub ortho_half_height: f32,
    /// Start in orthographic mode
    pub orthographic: bool,
}

/// A positional light.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LightConfig {
    pub position: [f32; 3],
    pub color: [f32; 3],
}

/// Lighting configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LightingConfig {
    pub key: LightConfig,
    pub fill: LightConfig,
    pub ambient: [f32; 3],
    pub shininess: f32,
    /// Uniform scale of the light marker cubes
    pub marker_scale: f32,
    /// Flat color of the light marker cubes
    pub marker_color: [f32; 3],
}

/// Pyramid parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PyramidConfig {
    pub half_base: f32,
    pub apex_y: f32,
    pub base_y: f32,
    pub color: [f32; 4],
}

/// Sphere parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SphereConfig {
    pub radius: f32,
    pub stacks: u32,
    pub slices: u32,
    pub color: [f32; 4],
}

/// Ground plane parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlaneConfig {
    pub half_extent: f32,
    pub color: [f32; 4],
}

/// Torus parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TorusConfig {
    pub major_radius: f32,
    pub minor_radius: f32,
    pub circles: u32,
    pub circle_points: u32,
    pub color: [f32; 4],
}

/// Box parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CubeConfig {
    pub length: f32,
    pub width: f32,
    pub height: f32,
    pub color: [f32; 4],
}

/// Cylinder parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CylinderConfig {
    pub segments: u32,
    pub height: f32,
    pub radius: f32,
    pub color: [f32; 4],
}

/// Shape parameters for every scene primitive.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct ShapesConfig {
    #[serde(default)]
    pub pyramid: PyramidConfig,
    #[serde(default)]
    pub sphere: SphereConfig,
    #[serde(default)]
    pub plane: PlaneConfig,
    #[serde(default)]
    pub torus: TorusConfig,
    #[serde(default)]
    pub cube: CubeConfig,
    #[serde(default)]
    pub cylinder: CylinderConfig,
}

/// Texture file locations.
///
/// File names are resolved relative to `directory`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TextureConfig {
    pub directory: PathBuf,
    pub wood: PathBuf,
    pub sponge: PathBuf,
    pub blue_container: PathBuf,
}

fn default_width() -> u32 {
    800
}
fn default_height() -> u32 {
    600
}
fn default_title() -> String {
    "3D Shapes".to_string()
}

const ORANGE: [f32; 4] = [1.0, 0.5, 0.0, 1.0];

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: default_width(),
            height: default_height(),
            title: default_title(),
        }
    }
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            position: [0.0, 0.0, 5.0],
            yaw: -90.0,
            pitch: 0.0,
            move_speed: 2.5,
            sensitivity: 0.05,
            scroll_step: 0.1,
            min_speed: 0.1,
            max_speed: 5.0,
            fov_degrees: 45.0,
            near: 0.1,
            far: 100.0,
            ortho_half_height: 5.0,
            orthographic: false,
        }
    }
}

impl Default for LightingConfig {
    fn default() -> Self {
        Self {
            key: LightConfig {
                position: [-5.0, 1.5, 1.0],
                color: [1.0, 0.6, 0.2],
            },
            fill: LightConfig {
                position: [5.5, -1.0, 0.0],
                color: [0.9, 0.9, 0.9],
            },
            ambient: [0.3, 0.3, 0.3],
            shininess: 32.0,
            marker_scale: 0.2,
            marker_color: [1.0, 1.0, 1.0],
        }
    }
}

impl Default for PyramidConfig {
    fn default() -> Self {
        Self {
            half_base: 0.5,
            apex_y: 0.5,
            base_y: -1.2,
            color: ORANGE,
        }
    }
}

impl Default for SphereConfig {
    fn default() -> Self {
        Self {
            radius: 0.5,
            stacks: 20,
            slices: 20,
            color: ORANGE,
        }
    }
}

impl Default for PlaneConfig {
    fn default() -> Self {
        Self {
            half_extent: PLANE_HALF_EXTENT,
            color: [1.0, 1.0, 1.0, 1.0],
        }
    }
}

impl Default for TorusConfig {
    fn default() -> Self {
        Self {
            major_radius: 1.0,
            minor_radius: 0.25,
            circles: 10,
            circle_points: 10,
            color: [0.3, 0.3, 0.3, 1.0],
        }
    }
}

impl Default for CubeConfig {
    fn default() -> Self {
        Self {
            length: 2.0,
            width: 2.0,
            height: 1.0,
            color: [0.1, 0.1, 0.3, 1.0],
        }
    }
}

impl Default for CylinderConfig {
    fn default() -> Self {
        Self {
            segments: 32,
            height: 1.0,
            radius: 0.5,
            color: [0.254, 0.412, 0.882, 1.0],
        }
    }
}

impl Default for TextureConfig {
    fn default() -> Self {
        Self {
            directory: PathBuf::from("."),
            wood: PathBuf::from("wood_texture.jpg"),
            sponge: PathBuf::from("sponge_texture.jpg"),
            blue_container: PathBuf::from("bluecontainer_texture.jpg"),
        }
    }
}

impl LightConfig {
    pub fn position(&self) -> Vec3 {
        Vec3::from_array(self.position)
    }

    pub fn color(&self) -> Vec3 {
        Vec3::from_array(self.color)
    }
}

impl PyramidConfig {
    pub fn generate<M: MeshBuilder>(&self) -> Result<M, MeshError> {
        generate_pyramid(
            self.half_base,
            self.apex_y,
            self.base_y,
            Vec4::from_array(self.color),
        )
    }
}

impl SphereConfig {
    pub fn generate<M: MeshBuilder>(&self) -> Result<M, MeshError> {
        generate_sphere(
            self.radius,
            self.stacks,
            self.slices,
            Vec4::from_array(self.color),
        )
    }
}

impl PlaneConfig {
    pub fn generate<M: MeshBuilder>(&self) -> Result<M, MeshError> {
        generate_plane(self.half_extent, Vec4::from_array(self.color))
    }
}

impl TorusConfig {
    pub fn generate<M: MeshBuilder>(&self) -> Result<M, MeshError> {
        generate_torus(
            self.major_radius,
            self.minor_radius,
            self.circles,
            self.circle_points,
            Vec4::from_array(self.color),
        )
    }
}

impl CubeConfig {
    pub fn generate<M: MeshBuilder>(&self) -> Result<M, MeshError> {
        generate_cube(
            self.length,
            self.width,
            self.height,
            Vec4::from_array(self.color),
        )
    }
}

impl CylinderConfig {
    pub fn generate<M: MeshBuilder>(&self) -> Result<M, MeshError> {
        generate_cylinder(
            self.segments,
            self.height,
            self.radius,
            Vec4::from_array(self.color),
        )
    }
}

impl TextureConfig {
    /// Resolved file path for a texture slot
    pub fn path(&self, slot: TextureSlot) -> PathBuf {
        let file = match slot {
            TextureSlot::Wood => &self.wood,
            TextureSlot::Sponge => &self.sponge,
            TextureSlot::BlueContainer => &self.blue_container,
        };
        self.directory.join(file)
    }
}

fn invalid(field: &'static str, reason: impl Into<String>) -> ConfigError {
    ConfigError::Invalid {
        field,
        reason: reason.into(),
    }
}

impl SceneConfig {
    /// Check every value that would otherwise fail later.
    ///
    /// Shape parameters go through the generators' own validation, so a bad
    /// config is rejected before any mesh is built.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.window.width == 0 || self.window.height == 0 {
            return Err(invalid("window", "width and height must be > 0"));
        }

        let camera = &self.camera;
        if !(camera.fov_degrees > 0.0 && camera.fov_degrees < 180.0) {
            return Err(invalid("camera.fov_degrees", "must be in (0, 180)"));
        }
        if !(camera.near > 0.0 && camera.far > camera.near) {
            return Err(invalid("camera.near/far", "need 0 < near < far"));
        }
        if !(camera.min_speed > 0.0 && camera.max_speed >= camera.min_speed) {
            return Err(invalid("camera.min_speed/max_speed", "need 0 < min <= max"));
        }
        if camera.ortho_half_height <= 0.0 {
            return Err(invalid("camera.ortho_half_height", "must be > 0"));
        }
        if self.lighting.marker_scale <= 0.0 {
            return Err(invalid("lighting.marker_scale", "must be > 0"));
        }

        let shapes = &self.shapes;
        shapes.pyramid.generate::<Mesh>()?;
        shapes.sphere.generate::<Mesh>()?;
        shapes.plane.generate::<Mesh>()?;
        shapes.torus.generate::<Mesh>()?;
        shapes.cube.generate::<Mesh>()?;
        shapes.cylinder.generate::<Mesh>()?;
        Ok(())
    }

    /// Window aspect ratio (width / height)
    pub fn aspect_ratio(&self) -> f32 {
        self.window.width as f32 / self.window.height.max(1) as f32
    }
}

/// Returns the platform-specific configuration directory.
///
/// On Windows: `%APPDATA%\primscene\config`
/// On macOS: `~/Library/Application Support/io.primscene.primscene`
/// On Linux: `~/.config/primscene`
///
/// Returns `None` if the home directory cannot be determined.
pub fn config_dir() -> Option<PathBuf> {
    directories::ProjectDirs::from("io.primscene", "", "primscene")
        .map(|dirs| dirs.config_dir().to_path_buf())
}

/// Loads the configuration from the platform config directory.
///
/// Returns default values if the file doesn't exist, cannot be parsed, or
/// fails validation.
pub fn load() -> SceneConfig {
    let Some(path) = config_dir().map(|dir| dir.join(CONFIG_FILE)) else {
        return SceneConfig::default();
    };
    if !path.exists() {
        return SceneConfig::default();
    }
    match load_from(&path) {
        Ok(config) => config,
        Err(e) => {
            warn!("Ignoring {}: {}", path.display(), e);
            SceneConfig::default()
        }
    }
}

/// Loads and validates a configuration file.
///
/// # Errors
///
/// Returns an error if the file cannot be read, is not valid TOML, or
/// holds values that fail [`SceneConfig::validate`].
pub fn load_from(path: &Path) -> Result<SceneConfig, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let config: SceneConfig = toml::from_str(&content)?;
    config.validate()?;
    info!("Loaded config from {}", path.display());
    Ok(config)
}

/// Saves the configuration as pretty TOML.
///
/// Creates the parent directory if it doesn't exist.
pub fn save_to(path: &Path, config: &SceneConfig) -> Result<(), ConfigError> {
    let io_err = |source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    };
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(io_err)?;
    }
    let content = toml::to_string_pretty(config)?;
    std::fs::write(path, content).map_err(io_err)?;
    Ok(())
}
