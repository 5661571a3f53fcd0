use crate::config::Config;
use anyhow::{Context, Result};
use std::path::PathBuf;

pub fn run(path: Option<PathBuf>) -> Result<()> {
    let path = match path.or_else(Config::default_path) {
        Some(path) => path,
        None => anyhow::bail!("Could not determine a config directory; pass --config"),
    };

    if path.exists() {
        anyhow::bail!("{} already exists", path.display());
    }

    Config::default()
        .save(&path)
        .with_context(|| format!("Failed to write {}", path.display()))?;
    println!("Wrote default config to {}", path.display());
    Ok(())
}
