use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    #[error("Please choose a grid width and height greater than 0 (got {width}x{height})")]
    InvalidDimensions { width: u32, height: u32 },
    #[error("Grid {width}x{height} exceeds the maximum of {max} cells per side")]
    TooLarge { width: u32, height: u32, max: u32 },
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CellIdError {
    #[error("Invalid cell id '{0}': expected cell-<row>-<col>")]
    Malformed(String),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ColorError {
    #[error("Invalid color '{0}': expected #rrggbb or #rgb")]
    Invalid(String),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    #[error("Empty command")]
    Empty,
    #[error("Unknown command: {0} (type 'help')")]
    Unknown(String),
    #[error("Missing argument for '{command}': expected {expected}")]
    MissingArgument {
        command: &'static str,
        expected: &'static str,
    },
    #[error("Invalid number '{0}'")]
    InvalidNumber(String),
    #[error(transparent)]
    Color(#[from] ColorError),
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AppError {
    #[error(transparent)]
    Grid(#[from] GridError),
    #[error(transparent)]
    Command(#[from] CommandError),
}
