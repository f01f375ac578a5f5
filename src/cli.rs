use std::path::PathBuf;

use clap::Parser;

use crate::color::Rgba;
use crate::config::AppConfig;
use crate::device::DevicePreference;

/// Paint pixel art on a grid with the mouse or a touchscreen.
#[derive(Parser, Debug, Default)]
#[command(name = "pixelgrid", version)]
pub struct CliArgs {
    /// JSON config file. Defaults to ./pixelgrid.json when present.
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Pointer input family to bind. `auto` probes for a touchscreen once at startup.
    #[arg(long, value_enum)]
    pub device: Option<DevicePreference>,

    /// Initial grid width setting.
    #[arg(long, value_name = "N")]
    pub width: Option<u32>,

    /// Initial grid height setting.
    #[arg(long, value_name = "N")]
    pub height: Option<u32>,

    /// Initial paint color, e.g. "#ff0000".
    #[arg(long, value_name = "#RRGGBB")]
    pub color: Option<Rgba>,
}

impl CliArgs {
    /// Command-line values win over the config file.
    pub fn apply(&self, config: &mut AppConfig) {
        if let Some(device) = self.device {
            config.device = device;
        }
        if let Some(width) = self.width {
            config.grid_width = width.min(config.max_dimension);
        }
        if let Some(height) = self.height {
            config.grid_height = height.min(config.max_dimension);
        }
        if let Some(color) = self.color {
            config.color = color;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_overrides() {
        let args = CliArgs::try_parse_from([
            "pixelgrid", "--device", "touch", "--width", "12", "--height", "500", "--color", "#00f",
        ])
        .unwrap();

        let mut config = AppConfig::default();
        args.apply(&mut config);
        assert_eq!(config.device, DevicePreference::Touch);
        assert_eq!(config.grid_width, 12);
        assert_eq!(config.grid_height, config.max_dimension);
        assert_eq!(config.color, Rgba::rgb(0, 0, 255));
    }

    #[test]
    fn rejects_bad_color() {
        assert!(CliArgs::try_parse_from(["pixelgrid", "--color", "blue"]).is_err());
    }

    #[test]
    fn no_flags_leave_config_alone() {
        let args = CliArgs::try_parse_from(["pixelgrid"]).unwrap();
        let mut config = AppConfig::default();
        args.apply(&mut config);
        assert_eq!(config, AppConfig::default());
    }
}
