use std::fmt;
use std::str::FromStr;

use crate::color::Fill;
use crate::error::{CellIdError, GridError};

/// Largest accepted width or height.
pub const MAX_DIMENSION: u32 = 512;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CellId {
    pub row: u32,
    pub col: u32,
}

impl CellId {
    pub fn new(row: u32, col: u32) -> Self {
        Self { row, col }
    }
}

impl fmt::Display for CellId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "cell-{}-{}", self.row, self.col)
    }
}

impl FromStr for CellId {
    type Err = CellIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || CellIdError::Malformed(s.to_string());
        let (row, col) = s
            .strip_prefix("cell-")
            .and_then(|rest| rest.split_once('-'))
            .ok_or_else(malformed)?;
        Ok(Self {
            row: row.parse().map_err(|_| malformed())?,
            col: col.parse().map_err(|_| malformed())?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cell {
    id: CellId,
    fill: Fill,
}

impl Cell {
    fn new(id: CellId) -> Self {
        Self {
            id,
            fill: Fill::Transparent,
        }
    }

    pub fn id(&self) -> CellId {
        self.id
    }

    pub fn fill(&self) -> Fill {
        self.fill
    }

    /// Returns true when the visible state changed.
    pub fn set_fill(&mut self, fill: Fill) -> bool {
        if self.fill == fill {
            return false;
        }
        self.fill = fill;
        true
    }
}

/// A W×H matrix of cells, stored row-major.
#[derive(Debug, Clone)]
pub struct Grid {
    width: u32,
    height: u32,
    rows: Vec<Vec<Cell>>,
}

impl Grid {
    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn rows(&self) -> &[Vec<Cell>] {
        &self.rows
    }

    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.rows.iter().flatten()
    }

    pub fn cell(&self, id: CellId) -> Option<&Cell> {
        self.rows.get(id.row as usize)?.get(id.col as usize)
    }

    pub fn cell_mut(&mut self, id: CellId) -> Option<&mut Cell> {
        self.rows.get_mut(id.row as usize)?.get_mut(id.col as usize)
    }

    pub fn cell_by_id(&self, id: &str) -> Option<&Cell> {
        self.cell(id.parse().ok()?)
    }

    pub fn painted_count(&self) -> usize {
        self.cells().filter(|cell| cell.fill().is_painted()).count()
    }
}

pub fn build_grid(width: u32, height: u32) -> Result<Grid, GridError> {
    if width == 0 || height == 0 {
        return Err(GridError::InvalidDimensions { width, height });
    }
    if width > MAX_DIMENSION || height > MAX_DIMENSION {
        return Err(GridError::TooLarge {
            width,
            height,
            max: MAX_DIMENSION,
        });
    }

    let rows = (0..height)
        .map(|row| (0..width).map(|col| Cell::new(CellId::new(row, col))).collect())
        .collect();

    Ok(Grid {
        width,
        height,
        rows,
    })
}

/// Holds at most one grid at a time.
#[derive(Debug, Default)]
pub struct GridContainer {
    grid: Option<Grid>,
}

impl GridContainer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the current grid with a fresh `width`×`height` one.
    ///
    /// Dimensions are validated first: a rejected request leaves any existing
    /// grid untouched.
    pub fn build(&mut self, width: u32, height: u32) -> Result<&Grid, GridError> {
        let grid = build_grid(width, height)?;
        log::info!("Built {}x{} grid", width, height);
        Ok(&*self.grid.insert(grid))
    }

    pub fn clear(&mut self) {
        if self.grid.take().is_some() {
            log::info!("Cleared grid");
        }
    }

    pub fn grid(&self) -> Option<&Grid> {
        self.grid.as_ref()
    }

    pub fn grid_mut(&mut self) -> Option<&mut Grid> {
        self.grid.as_mut()
    }

    pub fn is_empty(&self) -> bool {
        self.grid.is_none()
    }
}
