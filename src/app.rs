//! Window-independent application state: the grid container, the paint
//! controller, the width/height settings and the console, wired to commands
//! and pointer events.

use crate::color::Rgba;
use crate::command::{Command, HELP};
use crate::config::AppConfig;
use crate::console::Console;
use crate::device::PointerEvent;
use crate::error::{AppError, GridError};
use crate::grid::{Grid, GridContainer};
use crate::layout::{GridLayout, Viewport};
use crate::notify::Notifier;
use crate::paint::{InteractionState, Mode, PaintController};

/// Pending grid size, like a pair of range sliders.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DimensionSettings {
    width: u32,
    height: u32,
    max: u32,
}

impl DimensionSettings {
    pub fn new(width: u32, height: u32, max: u32) -> Self {
        Self {
            width: width.min(max),
            height: height.min(max),
            max,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn set_width(&mut self, width: u32) -> u32 {
        self.width = width.min(self.max);
        self.width
    }

    pub fn set_height(&mut self, height: u32) -> u32 {
        self.height = height.min(self.max);
        self.height
    }

    /// Two-digit label shown next to a setting.
    pub fn label(value: u32) -> String {
        format!("{:02}", value)
    }
}

pub struct App<N: Notifier> {
    container: GridContainer,
    controller: PaintController,
    settings: DimensionSettings,
    console: Console,
    viewport: Viewport,
    notifier: N,
}

impl<N: Notifier> App<N> {
    pub fn new(config: &AppConfig, notifier: N) -> Self {
        Self {
            container: GridContainer::new(),
            controller: PaintController::new(InteractionState::new(Mode::Paint, config.color)),
            settings: DimensionSettings::new(
                config.grid_width,
                config.grid_height,
                config.max_dimension,
            ),
            console: Console::new(100),
            viewport: Viewport::new(config.window_width, config.window_height, 0),
            notifier,
        }
    }

    /// Parses a console line, runs it and reports the outcome on the console.
    pub fn submit(&mut self, line: String) {
        let line = self.console.execute_command(line);
        match self.execute_line(&line) {
            Ok(output) => self.console.add_output(&output),
            Err(err) => self.console.add_error(&err.to_string()),
        }
    }

    pub fn execute_line(&mut self, line: &str) -> Result<String, AppError> {
        let command = Command::parse(line)?;
        self.execute(command)
    }

    pub fn execute(&mut self, command: Command) -> Result<String, AppError> {
        match command {
            Command::Generate { size } => {
                if let Some((width, height)) = size {
                    self.settings.set_width(width);
                    self.settings.set_height(height);
                }
                self.generate()?;
                Ok(format!(
                    "Built {}x{} grid",
                    self.settings.width(),
                    self.settings.height()
                ))
            }
            Command::SetWidth(width) => {
                let width = self.settings.set_width(width);
                Ok(format!("Width {}", DimensionSettings::label(width)))
            }
            Command::SetHeight(height) => {
                let height = self.settings.set_height(height);
                Ok(format!("Height {}", DimensionSettings::label(height)))
            }
            Command::Clear => {
                self.clear_grid();
                Ok("Grid cleared".to_string())
            }
            Command::SetMode(mode) => {
                self.set_mode(mode);
                Ok(format!("Mode: {}", mode))
            }
            Command::SetColor(color) => {
                self.set_color(color);
                Ok(format!("Color: {}", color))
            }
            Command::Status => Ok(self.status_line()),
            Command::Help => Ok(HELP.to_string()),
        }
    }

    /// Builds a grid from the current width/height settings.
    pub fn generate(&mut self) -> Result<(), GridError> {
        self.build_grid(self.settings.width(), self.settings.height())
    }

    /// Replaces the grid. Rejected sizes raise exactly one alert.
    pub fn build_grid(&mut self, width: u32, height: u32) -> Result<(), GridError> {
        if let Err(err) = self.container.build(width, height) {
            log::warn!("Rejected grid size {}x{}", width, height);
            self.notifier.alert(&err.to_string());
            return Err(err);
        }
        Ok(())
    }

    pub fn clear_grid(&mut self) {
        self.container.clear();
    }

    pub fn set_mode(&mut self, mode: Mode) {
        self.controller.set_mode(mode);
    }

    pub fn set_color(&mut self, color: Rgba) {
        self.controller.set_color(color);
    }

    /// Feeds one pointer event to the controller. Returns true when a cell changed.
    pub fn pointer(&mut self, event: PointerEvent) -> bool {
        let layout = self.layout();
        self.controller
            .handle(self.container.grid_mut(), layout.as_ref(), event)
    }

    pub fn layout(&self) -> Option<GridLayout> {
        self.container
            .grid()
            .map(|grid| GridLayout::compute(self.viewport, grid.width(), grid.height()))
    }

    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn status_line(&self) -> String {
        let state = self.controller.state();
        format!(
            "W {}  H {}  {}  {}",
            DimensionSettings::label(self.settings.width()),
            DimensionSettings::label(self.settings.height()),
            state.mode,
            state.active_color
        )
    }

    pub fn grid(&self) -> Option<&Grid> {
        self.container.grid()
    }

    pub fn controller(&self) -> &PaintController {
        &self.controller
    }

    pub fn settings(&self) -> &DimensionSettings {
        &self.settings
    }

    pub fn console(&self) -> &Console {
        &self.console
    }

    pub fn console_mut(&mut self) -> &mut Console {
        &mut self.console
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notify::RecordingNotifier;

    fn app() -> App<RecordingNotifier> {
        App::new(&AppConfig::default(), RecordingNotifier::default())
    }

    #[test]
    fn labels_are_zero_padded() {
        assert_eq!(DimensionSettings::label(0), "00");
        assert_eq!(DimensionSettings::label(5), "05");
        assert_eq!(DimensionSettings::label(12), "12");
    }

    #[test]
    fn settings_clamp_to_max() {
        let mut settings = DimensionSettings::new(100, 3, 64);
        assert_eq!(settings.width(), 64);
        assert_eq!(settings.set_height(65), 64);
        assert_eq!(settings.set_height(0), 0);
    }

    #[test]
    fn generate_uses_current_settings() {
        let mut app = app();
        app.execute_line("width 4").unwrap();
        app.execute_line("height 2").unwrap();
        assert_eq!(app.execute_line("grid").unwrap(), "Built 4x2 grid");
        let grid = app.grid().unwrap();
        assert_eq!((grid.width(), grid.height()), (4, 2));
        assert!(app.notifier().alerts.is_empty());
    }

    #[test]
    fn default_settings_are_rejected_until_chosen() {
        let mut app = app();
        let err = app.execute_line("generate").unwrap_err();
        assert!(matches!(err, AppError::Grid(GridError::InvalidDimensions { .. })));
        assert_eq!(app.notifier().alerts.len(), 1);
        assert!(app.grid().is_none());
    }

    #[test]
    fn submit_reports_errors_on_console_without_alerting() {
        let mut app = app();
        app.submit("colour nope".to_string());
        let last = app.console().lines().last().unwrap().to_string();
        assert!(last.starts_with("Error: Invalid color"), "{last}");
        assert!(app.notifier().alerts.is_empty());
    }

    #[test]
    fn status_line_reflects_state() {
        let mut app = app();
        app.execute_line("grid 5 12").unwrap();
        app.execute_line("erase").unwrap();
        app.execute_line("color #123456").unwrap();
        assert_eq!(app.status_line(), "W 05  H 12  ERASE  #123456");
        assert_eq!(app.execute_line("status").unwrap(), app.status_line());
    }

    #[test]
    fn clear_empties_container() {
        let mut app = app();
        app.execute_line("grid 2 2").unwrap();
        assert_eq!(app.execute_line("clear").unwrap(), "Grid cleared");
        assert!(app.grid().is_none());
        assert!(app.layout().is_none());
    }
}
