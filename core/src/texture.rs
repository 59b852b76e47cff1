//! Texture images, sampling, and loading with fallback.
//!
//! Textures are decoded to RGB8. A texture that fails to load is replaced by
//! a 1x1 white image so the surface still renders with its lit vertex color.

use std::path::Path;

use glam::{Vec2, Vec4};
use tracing::{debug, warn};

use crate::config::TextureConfig;
use crate::error::TextureError;

/// Anything the shading model can sample a base color from.
pub trait TextureSampler {
    /// Sample an RGBA color at texture coordinate `uv`.
    fn sample(&self, uv: Vec2) -> Vec4;
}

/// An RGB8 image, row 0 at `v = 0`.
#[derive(Debug, Clone, PartialEq)]
pub struct TextureImage {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl TextureImage {
    /// Build a texture from tightly packed RGB8 bytes.
    pub fn from_rgb8(width: u32, height: u32, data: Vec<u8>) -> Result<Self, TextureError> {
        if width == 0 || height == 0 {
            return Err(TextureError::Empty { width, height });
        }
        let expected = width as usize * height as usize * 3;
        if data.len() != expected {
            return Err(TextureError::SizeMismatch {
                width,
                height,
                expected,
                actual: data.len(),
            });
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// 1x1 white placeholder
    pub fn white() -> Self {
        Self {
            width: 1,
            height: 1,
            data: vec![255, 255, 255],
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Raw RGB8 bytes, row-major
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Check if this is the 1x1 white placeholder
    pub fn is_placeholder(&self) -> bool {
        self.width == 1 && self.height == 1 && self.data == [255, 255, 255]
    }

    /// Fetch one texel with repeat wrapping.
    fn texel(&self, x: i64, y: i64) -> Vec4 {
        let x = x.rem_euclid(self.width as i64) as usize;
        let y = y.rem_euclid(self.height as i64) as usize;
        let i = (y * self.width as usize + x) * 3;
        Vec4::new(
            self.data[i] as f32 / 255.0,
            self.data[i + 1] as f32 / 255.0,
            self.data[i + 2] as f32 / 255.0,
            1.0,
        )
    }
}

impl TextureSampler for TextureImage {
    /// Bilinear filtering with repeat wrapping. Texel centers sit at
    /// `(i + 0.5) / width`.
    fn sample(&self, uv: Vec2) -> Vec4 {
        // Wrap first so huge coordinates stay within i64 texel math
        let x = uv.x.rem_euclid(1.0) * self.width as f32 - 0.5;
        let y = uv.y.rem_euclid(1.0) * self.height as f32 - 0.5;
        let (x0, y0) = (x.floor(), y.floor());
        let (fx, fy) = (x - x0, y - y0);
        let (x0, y0) = (x0 as i64, y0 as i64);

        let top = self.texel(x0, y0).lerp(self.texel(x0 + 1, y0), fx);
        let bottom = self.texel(x0, y0 + 1).lerp(self.texel(x0 + 1, y0 + 1), fx);
        top.lerp(bottom, fy)
    }
}

/// Decode an image file to RGB8.
pub fn load_texture(path: &Path) -> Result<TextureImage, TextureError> {
    let bytes = std::fs::read(path).map_err(|source| TextureError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let rgb = image::load_from_memory(&bytes)?.to_rgb8();
    let (width, height) = rgb.dimensions();
    debug!("Loaded texture {} ({}x{})", path.display(), width, height);
    TextureImage::from_rgb8(width, height, rgb.into_raw())
}

/// Load a texture, substituting the white placeholder on failure.
pub fn load_or_fallback(path: &Path) -> TextureImage {
    load_texture(path).unwrap_or_else(|e| fallback_texture(path, &e))
}

fn fallback_texture(path: &Path, error: &TextureError) -> TextureImage {
    warn!(
        "Failed to load texture {}: {}; using white placeholder",
        path.display(),
        error
    );
    TextureImage::white()
}

/// The three textures bound by the scene.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextureSlot {
    Wood,
    Sponge,
    BlueContainer,
}

impl TextureSlot {
    pub const ALL: [TextureSlot; 3] = [
        TextureSlot::Wood,
        TextureSlot::Sponge,
        TextureSlot::BlueContainer,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            TextureSlot::Wood => "wood",
            TextureSlot::Sponge => "sponge",
            TextureSlot::BlueContainer => "blue_container",
        }
    }

    const fn index(self) -> usize {
        self as usize
    }
}

/// Loaded scene textures, one per slot
#[derive(Debug, Clone)]
pub struct TextureSet {
    textures: [TextureImage; 3],
    fallbacks: Vec<(TextureSlot, String)>,
}

impl TextureSet {
    /// Load every configured texture. Failures never abort: the slot gets
    /// the white placeholder and the reason is kept in [`Self::fallbacks`].
    pub fn load(config: &TextureConfig) -> Self {
        let mut fallbacks = Vec::new();
        let textures = TextureSlot::ALL.map(|slot| {
            let path = config.path(slot);
            load_texture(&path).unwrap_or_else(|e| {
                fallbacks.push((slot, e.to_string()));
                fallback_texture(&path, &e)
            })
        });
        Self {
            textures,
            fallbacks,
        }
    }

    /// A set where every slot holds the white placeholder
    pub fn placeholders() -> Self {
        Self {
            textures: [
                TextureImage::white(),
                TextureImage::white(),
                TextureImage::white(),
            ],
            fallbacks: Vec::new(),
        }
    }

    /// Replace one slot
    pub fn set(&mut self, slot: TextureSlot, texture: TextureImage) {
        self.textures[slot.index()] = texture;
    }

    pub fn get(&self, slot: TextureSlot) -> &TextureImage {
        &self.textures[slot.index()]
    }

    /// Slots that fell back to the placeholder, with the load error
    pub fn fallbacks(&self) -> &[(TextureSlot, String)] {
        &self.fallbacks
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn checker() -> TextureImage {
        // 2x2: black, white / white, black
        TextureImage::from_rgb8(
            2,
            2,
            vec![0, 0, 0, 255, 255, 255, 255, 255, 255, 0, 0, 0],
        )
        .unwrap()
    }

    #[test]
    fn test_white_placeholder_samples_white_everywhere() {
        let white = TextureImage::white();
        for uv in [Vec2::ZERO, Vec2::new(0.3, 0.9), Vec2::new(-4.2, 17.5)] {
            assert_eq!(white.sample(uv), Vec4::ONE);
        }
        assert!(white.is_placeholder());
    }

    #[test]
    fn test_sample_at_texel_centers() {
        let tex = checker();
        assert_eq!(tex.sample(Vec2::new(0.25, 0.25)), Vec4::new(0.0, 0.0, 0.0, 1.0));
        assert_eq!(tex.sample(Vec2::new(0.75, 0.25)), Vec4::ONE);
        assert_eq!(tex.sample(Vec2::new(0.25, 0.75)), Vec4::ONE);
    }

    #[test]
    fn test_sample_blends_between_texels() {
        let tex = checker();
        let mid = tex.sample(Vec2::new(0.5, 0.25));
        assert!((mid.x - 0.5).abs() < 1e-6);
        assert_eq!(mid.w, 1.0);
    }

    #[test]
    fn test_sample_repeats() {
        let tex = checker();
        let a = tex.sample(Vec2::new(0.25, 0.75));
        let b = tex.sample(Vec2::new(1.25, -0.25));
        assert!((a - b).abs().max_element() < 1e-6);
    }

    #[test]
    fn test_sample_huge_coordinates() {
        let white = TextureImage::white();
        for uv in [Vec2::new(1e30, 0.0), Vec2::new(0.0, -1e30), Vec2::splat(f32::MAX)] {
            assert_eq!(white.sample(uv), Vec4::ONE);
        }
        // Large integers are whole periods
        let tex = checker();
        let a = tex.sample(Vec2::new(0.25, 0.75));
        let b = tex.sample(Vec2::new(0.25 + 4096.0, 0.75 - 8192.0));
        assert!((a - b).abs().max_element() < 1e-3);
    }

    #[test]
    fn test_from_rgb8_rejects_bad_sizes() {
        assert!(matches!(
            TextureImage::from_rgb8(2, 2, vec![0; 11]),
            Err(TextureError::SizeMismatch { expected: 12, actual: 11, .. })
        ));
        assert!(matches!(
            TextureImage::from_rgb8(0, 4, vec![]),
            Err(TextureError::Empty { .. })
        ));
    }

    #[test]
    fn test_missing_file_falls_back_to_white() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.jpg");
        assert!(matches!(load_texture(&path), Err(TextureError::Io { .. })));
        assert!(load_or_fallback(&path).is_placeholder());
    }

    #[test]
    fn test_undecodable_file_falls_back_to_white() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("garbage.png");
        std::fs::write(&path, b"not an image").unwrap();
        assert!(matches!(load_texture(&path), Err(TextureError::Decode(_))));
        assert!(load_or_fallback(&path).is_placeholder());
    }

    #[test]
    fn test_load_png_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("red.png");
        let img = image::RgbImage::from_pixel(3, 2, image::Rgb([255, 0, 0]));
        img.save(&path).unwrap();

        let tex = load_texture(&path).unwrap();
        assert_eq!((tex.width(), tex.height()), (3, 2));
        assert_eq!(tex.sample(Vec2::new(0.5, 0.5)), Vec4::new(1.0, 0.0, 0.0, 1.0));
    }

    #[test]
    fn test_texture_set_records_fallbacks() {
        let dir = tempfile::tempdir().unwrap();
        let config = TextureConfig {
            directory: dir.path().to_path_buf(),
            ..TextureConfig::default()
        };
        let set = TextureSet::load(&config);
        assert_eq!(set.fallbacks().len(), 3);
        assert!(TextureSlot::ALL.iter().all(|&s| set.get(s).is_placeholder()));
    }

    #[test]
    fn test_texture_set_keeps_loaded_slots() {
        let dir = tempfile::tempdir().unwrap();
        let config = TextureConfig {
            directory: dir.path().to_path_buf(),
            ..TextureConfig::default()
        };
        let img = image::RgbImage::from_pixel(2, 2, image::Rgb([0, 0, 255]));
        img.save_with_format(config.path(TextureSlot::Sponge), image::ImageFormat::Png)
            .unwrap();

        let set = TextureSet::load(&config);
        assert_eq!(set.fallbacks().len(), 2);
        assert!(set.fallbacks().iter().all(|(slot, _)| *slot != TextureSlot::Sponge));
        assert!(!set.get(TextureSlot::Sponge).is_placeholder());
        assert!(set.get(TextureSlot::Wood).is_placeholder());
    }
}
