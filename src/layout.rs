use crate::grid::CellId;

pub const GRID_PADDING: u32 = 10;

/// Window size in physical pixels, minus the strip reserved for the console.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
    pub reserved_bottom: u32,
}

impl Viewport {
    pub fn new(width: u32, height: u32, reserved_bottom: u32) -> Self {
        Self {
            width,
            height,
            reserved_bottom,
        }
    }
}

/// Placement of the grid inside the viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridLayout {
    pub origin_x: u32,
    pub origin_y: u32,
    pub tile_size: u32,
    pub columns: u32,
    pub rows: u32,
    /// First row of screen pixels covered by the console.
    pub visible_bottom: u32,
}

impl GridLayout {
    /// Fits `columns`×`rows` square tiles into the drawable area and centers them.
    pub fn compute(viewport: Viewport, columns: u32, rows: u32) -> Self {
        let available_width = viewport.width.saturating_sub(GRID_PADDING * 2);
        let available_height = viewport
            .height
            .saturating_sub(viewport.reserved_bottom + GRID_PADDING * 2);

        let max_tile_width = available_width.checked_div(columns).unwrap_or(0);
        let max_tile_height = available_height.checked_div(rows).unwrap_or(0);
        let tile_size = max_tile_width.min(max_tile_height).max(1);

        let pixel_width = columns * tile_size;
        let pixel_height = rows * tile_size;

        Self {
            origin_x: GRID_PADDING + available_width.saturating_sub(pixel_width) / 2,
            origin_y: GRID_PADDING + available_height.saturating_sub(pixel_height) / 2,
            tile_size,
            columns,
            rows,
            visible_bottom: viewport.height.saturating_sub(viewport.reserved_bottom),
        }
    }

    pub fn pixel_width(&self) -> u32 {
        self.columns * self.tile_size
    }

    pub fn pixel_height(&self) -> u32 {
        self.rows * self.tile_size
    }

    /// Resolves the cell under a screen point, if any. Points over the console
    /// strip never resolve, even when the grid extends beneath it.
    pub fn hit_test(&self, x: f64, y: f64) -> Option<CellId> {
        if !x.is_finite() || !y.is_finite() || y >= self.visible_bottom as f64 {
            return None;
        }
        let local_x = x - self.origin_x as f64;
        let local_y = y - self.origin_y as f64;
        if local_x < 0.0 || local_y < 0.0 {
            return None;
        }

        let col = (local_x / self.tile_size as f64).floor() as u64;
        let row = (local_y / self.tile_size as f64).floor() as u64;
        if col >= self.columns as u64 || row >= self.rows as u64 {
            return None;
        }
        Some(CellId::new(row as u32, col as u32))
    }

    /// Top-left pixel of a cell's tile.
    pub fn cell_origin(&self, cell: CellId) -> (u32, u32) {
        (
            self.origin_x + cell.col * self.tile_size,
            self.origin_y + cell.row * self.tile_size,
        )
    }
}
