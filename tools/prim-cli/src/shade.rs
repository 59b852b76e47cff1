//! Shade command - evaluate the shading model for one fragment
//!
//! Lights, ambient, and shininess come from the config; the viewer sits at
//! the configured camera position unless `--view` is given.

use anyhow::{Context, Result};
use clap::{Args, ValueEnum};
use glam::{Vec2, Vec3, Vec4};
use primscene_core::config::SceneConfig;
use primscene_core::scene::SceneState;
use primscene_core::shading::{FragmentInput, shade};
use primscene_core::texture::{TextureImage, TextureSet, TextureSlot};

use crate::parse::{parse_vec2, parse_vec3, parse_vec4};

/// Texture sampled by the fragment
#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum TextureChoice {
    /// 1x1 white (no texture)
    None,
    Wood,
    Sponge,
    BlueContainer,
}

/// Arguments for the shade command
#[derive(Args)]
pub struct ShadeArgs {
    /// World-space fragment position (x,y,z)
    #[arg(long, value_parser = parse_vec3, allow_hyphen_values = true)]
    pub position: Vec3,

    /// Interpolated vertex color (r,g,b,a)
    #[arg(long, value_parser = parse_vec4, default_value = "1,1,1,1")]
    pub color: Vec4,

    /// Texture coordinate (u,v)
    #[arg(long, value_parser = parse_vec2, allow_hyphen_values = true, default_value = "0,0")]
    pub uv: Vec2,

    /// Viewer position (defaults to the configured camera position)
    #[arg(long, value_parser = parse_vec3, allow_hyphen_values = true)]
    pub view: Option<Vec3>,

    /// Draw in flat uniform-color mode (light marker color)
    #[arg(long)]
    pub uniform: bool,

    /// Texture to sample
    #[arg(long, value_enum, default_value_t = TextureChoice::None)]
    pub texture: TextureChoice,
}

/// Execute the shade command
pub fn execute(args: ShadeArgs, config: &SceneConfig) -> Result<()> {
    let state = SceneState::new(config).context("Failed to create light sources")?;

    let mut params = if args.uniform {
        state.marker_params(state.marker_color)
    } else {
        state.shading_params()
    };
    if let Some(view) = args.view {
        params.view_position = view;
    }

    let slot = match args.texture {
        TextureChoice::None => None,
        TextureChoice::Wood => Some(TextureSlot::Wood),
        TextureChoice::Sponge => Some(TextureSlot::Sponge),
        TextureChoice::BlueContainer => Some(TextureSlot::BlueContainer),
    };
    let texture = match slot {
        Some(slot) => TextureSet::load(&config.textures).get(slot).clone(),
        None => TextureImage::white(),
    };

    let fragment = FragmentInput {
        position: args.position,
        color: args.color,
        uv: args.uv,
    };
    let color = shade(&fragment, &params, &texture);

    println!(
        "{:.4} {:.4} {:.4} {:.4}",
        color.x, color.y, color.z, color.w
    );
    Ok(())
}
