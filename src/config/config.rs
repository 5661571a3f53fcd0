use crate::error::{Error, Result};
use crate::reads::ReadColumns;
use crate::utils::scatter_plotter::ScatterPlotter;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_width")]
    pub width: u32,
    #[serde(default = "default_height")]
    pub height: u32,
    #[serde(default = "default_point_size")]
    pub point_size: u32,
    #[serde(default = "default_quality_column")]
    pub quality_column: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id_column: Option<String>,
}

fn default_width() -> u32 {
    800
}

fn default_height() -> u32 {
    600
}

fn default_point_size() -> u32 {
    3
}

fn default_quality_column() -> String {
    "quals".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            width: default_width(),
            height: default_height(),
            point_size: default_point_size(),
            quality_column: default_quality_column(),
            id_column: None,
        }
    }
}

impl Config {
    pub fn default_path() -> Option<PathBuf> {
        ProjectDirs::from("org", "pore-plotting", "pore-plotting")
            .map(|dirs| dirs.config_dir().join("config.toml"))
    }

    /// Loads the user config, falling back to defaults when it is missing or
    /// unreadable.
    pub fn load() -> Self {
        if let Some(config_path) = Self::default_path() {
            if config_path.exists() {
                match Self::from_path(&config_path) {
                    Ok(config) => return config,
                    Err(e) => log::warn!("Ignoring {}: {}", config_path.display(), e),
                }
            }
        }
        Config::default()
    }

    pub fn from_path(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            Error::Config(format!("cannot read {}: {}", path.display(), e))
        })?;
        toml::from_str(&content)
            .map_err(|e| Error::Config(format!("invalid {}: {}", path.display(), e)))
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)?;
        }
        let content =
            toml::to_string_pretty(self).map_err(|e| Error::Config(e.to_string()))?;
        fs::write(path, content)?;
        Ok(())
    }

    pub fn plotter(&self) -> ScatterPlotter {
        ScatterPlotter::new(self.width, self.height, self.point_size)
    }

    pub fn columns(&self) -> ReadColumns {
        ReadColumns {
            quality_column: self.quality_column.clone(),
            id_column: self.id_column.clone(),
        }
    }
}
