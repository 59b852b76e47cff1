//! Config command - print the effective configuration as TOML

use std::path::Path;

use anyhow::{Context, Result};
use clap::Args;
use primscene_core::config::{self, SceneConfig};

/// Arguments for the config command
#[derive(Args)]
pub struct ConfigArgs {
    /// Print the built-in defaults instead of the loaded config
    #[arg(long)]
    pub default: bool,

    /// Also show where the platform config file lives
    #[arg(long)]
    pub path: bool,
}

/// Execute the config command
pub fn execute(args: ConfigArgs, config_path: Option<&Path>) -> Result<()> {
    if args.path {
        match config::config_dir() {
            Some(dir) => println!("# {}", dir.join(config::CONFIG_FILE).display()),
            None => println!("# no platform config directory"),
        }
    }

    let config = if args.default {
        SceneConfig::default()
    } else {
        crate::load_config(config_path)?
    };

    let content = toml::to_string_pretty(&config).context("Failed to serialize config")?;
    print!("{content}");
    Ok(())
}
