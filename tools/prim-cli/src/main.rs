//! prim - inspect the primscene meshes and shading without a window
//!
//! # Commands
//!
//! - `prim stats` - Generate every scene mesh and print its buffer sizes
//! - `prim shade` - Evaluate the shading model for one fragment
//! - `prim textures` - Load the configured textures and report fallbacks
//! - `prim config` - Print the effective (or default) configuration
//!
//! # Usage
//!
//! ```bash
//! # Vertex/index counts with a custom config
//! prim --config scene.toml stats
//!
//! # Lit color of an orange fragment below the key light
//! prim shade --position -4,0,1 --color 1,0.5,0,1
//!
//! # Light marker color
//! prim shade --position 0,0,0 --uniform
//! ```

mod config_cmd;
mod parse;
mod shade;
mod stats;
mod textures;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use primscene_core::config::{self, SceneConfig};

/// prim - inspect the primscene meshes and shading without a window
#[derive(Parser)]
#[command(name = "prim")]
#[command(about = "Inspect procedural primitives and two-light shading")]
#[command(version)]
struct Cli {
    /// Config file (defaults to config.toml in the platform config directory)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Debug logging (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate all scene meshes and print vertex/index counts and strides
    Stats(stats::StatsArgs),

    /// Evaluate the shading model for one fragment
    Shade(shade::ShadeArgs),

    /// Load the configured textures, reporting fallbacks
    Textures(textures::TexturesArgs),

    /// Print the effective configuration as TOML
    Config(config_cmd::ConfigArgs),
}

/// Load the config named on the command line, or the platform default.
pub(crate) fn load_config(path: Option<&Path>) -> Result<SceneConfig> {
    match path {
        Some(path) => config::load_from(path)
            .with_context(|| format!("Failed to load config: {}", path.display())),
        None => Ok(config::load()),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let default_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level)),
        )
        .init();

    let config_path = cli.config.as_deref();
    match cli.command {
        Commands::Stats(args) => stats::execute(args, &load_config(config_path)?),
        Commands::Shade(args) => shade::execute(args, &load_config(config_path)?),
        Commands::Textures(args) => textures::execute(args, &load_config(config_path)?),
        Commands::Config(args) => config_cmd::execute(args, config_path),
    }
}
