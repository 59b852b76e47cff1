//! Textures command - load the configured textures and report fallbacks

use anyhow::Result;
use clap::Args;
use primscene_core::config::SceneConfig;
use primscene_core::texture::{TextureSet, TextureSlot};
use tracing::info;

/// Arguments for the textures command
#[derive(Args)]
pub struct TexturesArgs {
    /// Exit with an error if any texture fell back to the placeholder
    #[arg(long)]
    pub strict: bool,
}

/// Execute the textures command
pub fn execute(args: TexturesArgs, config: &SceneConfig) -> Result<()> {
    info!(
        "Loading textures from {}",
        config.textures.directory.display()
    );
    let set = TextureSet::load(&config.textures);
    info!(
        "{} of {} textures loaded",
        TextureSlot::ALL.len() - set.fallbacks().len(),
        TextureSlot::ALL.len()
    );

    for slot in TextureSlot::ALL {
        let path = config.textures.path(slot);
        let fallback = set.fallbacks().iter().find(|(s, _)| *s == slot);
        match fallback {
            Some((_, reason)) => {
                println!(
                    "  {:<15} {}  FALLBACK (1x1 white): {}",
                    slot.name(),
                    path.display(),
                    reason
                );
            }
            None => {
                let texture = set.get(slot);
                println!(
                    "  {:<15} {}  {}x{}",
                    slot.name(),
                    path.display(),
                    texture.width(),
                    texture.height()
                );
            }
        }
    }

    if args.strict && !set.fallbacks().is_empty() {
        anyhow::bail!("{} texture(s) failed to load", set.fallbacks().len());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_in(dir: &std::path::Path) -> SceneConfig {
        let mut config = SceneConfig::default();
        config.textures.directory = dir.to_path_buf();
        config
    }

    #[test]
    fn test_missing_textures_only_fail_when_strict() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_in(dir.path());

        assert!(execute(TexturesArgs { strict: false }, &config).is_ok());
        let err = execute(TexturesArgs { strict: true }, &config).unwrap_err();
        assert!(err.to_string().contains("3 texture(s)"));
    }
}
