use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::color::Rgba;
use crate::device::DevicePreference;
use crate::error::ConfigError;
use crate::grid::MAX_DIMENSION;

/// Read from the working directory when no `--config` is given.
pub const DEFAULT_CONFIG_FILE: &str = "pixelgrid.json";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub window_width: u32,
    pub window_height: u32,
    /// Initial width/height settings. Zero until the user picks a size.
    pub grid_width: u32,
    pub grid_height: u32,
    /// Upper bound for the width/height settings.
    pub max_dimension: u32,
    pub color: Rgba,
    pub device: DevicePreference,
    pub font_path: Option<PathBuf>,
    pub font_size: f32,
    /// Show invalid-size alerts as native dialogs instead of console lines.
    pub dialog_alerts: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            window_width: 640,
            window_height: 720,
            grid_width: 0,
            grid_height: 0,
            max_dimension: 64,
            color: Rgba::BLACK,
            device: DevicePreference::Auto,
            font_path: None,
            font_size: 14.0,
            dialog_alerts: true,
        }
    }
}

impl AppConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: AppConfig = serde_json::from_str(json)?;
        Ok(config.normalized())
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let json = fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Loads an explicit config file, or the default file when it exists.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => {
                log::info!("Loading config from {}", path.display());
                Self::from_file(path)
            }
            None if Path::new(DEFAULT_CONFIG_FILE).is_file() => {
                log::info!("Loading config from {}", DEFAULT_CONFIG_FILE);
                Self::from_file(Path::new(DEFAULT_CONFIG_FILE))
            }
            None => Ok(Self::default()),
        }
    }

    fn normalized(mut self) -> Self {
        self.max_dimension = self.max_dimension.clamp(1, MAX_DIMENSION);
        self.grid_width = self.grid_width.min(self.max_dimension);
        self.grid_height = self.grid_height.min(self.max_dimension);
        self.font_size = self.font_size.clamp(8.0, 48.0);
        self
    }
}
