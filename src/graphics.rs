use pixels::{Pixels, SurfaceTexture};
use winit::window::Window;

use crate::color::Fill;
use crate::font::FontRenderer;
use crate::grid::Grid;
use crate::layout::{GridLayout, Viewport};

const BACKGROUND: [u8; 4] = [32, 32, 32, 255];
const CONSOLE_BACKGROUND: [u8; 4] = [16, 16, 16, 255];
const GRID_LINE: [u8; 4] = [96, 96, 96, 255];
const CHECKER_LIGHT: [u8; 4] = [204, 204, 204, 255];
const CHECKER_DARK: [u8; 4] = [170, 170, 170, 255];
const TEXT: [u8; 3] = [200, 200, 200];
const STATUS_TEXT: [u8; 3] = [255, 220, 120];

/// History lines plus the prompt line.
const CONSOLE_LINES: u32 = 6;
const CONSOLE_PADDING: u32 = 8;
const FALLBACK_LINE_HEIGHT: u32 = 17;
const CHECKER_SIZE: u32 = 6;

pub struct GraphicsRenderer {
    pixels: Pixels,
    width: u32,
    height: u32,
    font: Option<FontRenderer>,
}

impl GraphicsRenderer {
    pub fn new(window: &Window, font: Option<FontRenderer>) -> Result<Self, pixels::Error> {
        let size = window.inner_size();
        let width = size.width.max(1);
        let height = size.height.max(1);
        let surface_texture = SurfaceTexture::new(width, height, window);
        let pixels = Pixels::new(width, height, surface_texture)?;

        Ok(Self {
            pixels,
            width,
            height,
            font,
        })
    }

    /// The buffer tracks the window size so pointer positions map 1:1 to pixels.
    pub fn resize(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        self.width = width;
        self.height = height;

        if let Err(err) = self.pixels.resize_surface(width, height) {
            log::error!("Failed to resize surface: {}", err);
        }
        if let Err(err) = self.pixels.resize_buffer(width, height) {
            log::error!("Failed to resize buffer: {}", err);
        }
    }

    pub fn line_height(&self) -> u32 {
        self.font
            .as_ref()
            .map_or(FALLBACK_LINE_HEIGHT, FontRenderer::line_height)
    }

    /// Height of the console strip (history, prompt and status bar).
    pub fn console_height(&self) -> u32 {
        (CONSOLE_LINES + 1) * self.line_height() + CONSOLE_PADDING * 2
    }

    pub fn viewport(&self) -> Viewport {
        Viewport::new(self.width, self.height, self.console_height())
    }

    pub fn render(
        &mut self,
        grid: Option<&Grid>,
        layout: Option<GridLayout>,
        console_lines: &[String],
        status: &str,
    ) {
        let (width, height) = (self.width, self.height);
        let console_height = self.console_height();
        let line_height = self.line_height();
        let frame = self.pixels.frame_mut();

        for pixel in frame.chunks_exact_mut(4) {
            pixel.copy_from_slice(&BACKGROUND);
        }

        if let (Some(grid), Some(layout)) = (grid, layout) {
            render_grid(frame, width, height, grid, &layout);
        }

        let console_top = height.saturating_sub(console_height);
        fill_rect(frame, width, height, 0, console_top, width, console_height, CONSOLE_BACKGROUND);

        let Some(font) = self.font.as_ref() else {
            return;
        };
        let mut y = console_top + CONSOLE_PADDING;
        font.draw_text(frame, width, height, status, CONSOLE_PADDING, y, STATUS_TEXT);
        y += line_height;

        let start = console_lines.len().saturating_sub(CONSOLE_LINES as usize);
        for line in &console_lines[start..] {
            font.draw_text(frame, width, height, line, CONSOLE_PADDING, y, TEXT);
            y += line_height;
        }
    }

    pub fn present(&mut self) -> Result<(), pixels::Error> {
        self.pixels.render()
    }
}

fn render_grid(frame: &mut [u8], width: u32, height: u32, grid: &Grid, layout: &GridLayout) {
    let tile = layout.tile_size;
    // Rows that spill under the console are neither drawn nor hit-tested.
    let height = height.min(layout.visible_bottom);

    for cell in grid.cells() {
        let (x, y) = layout.cell_origin(cell.id());
        match cell.fill() {
            Fill::Painted(color) => {
                fill_rect(frame, width, height, x, y, tile, tile, color.to_array());
            }
            Fill::Transparent => draw_checker(frame, width, height, x, y, tile),
        }
    }

    // Lines are skipped once tiles get too small to show color between them.
    if tile < 4 {
        return;
    }
    for col in 0..=layout.columns {
        let x = layout.origin_x + col * tile;
        fill_rect(frame, width, height, x, layout.origin_y, 1, layout.pixel_height(), GRID_LINE);
    }
    for row in 0..=layout.rows {
        let y = layout.origin_y + row * tile;
        fill_rect(frame, width, height, layout.origin_x, y, layout.pixel_width(), 1, GRID_LINE);
    }
}

/// Two-tone pattern standing in for a fully transparent cell.
fn draw_checker(frame: &mut [u8], width: u32, height: u32, x: u32, y: u32, size: u32) {
    for py in y..(y + size).min(height) {
        for px in x..(x + size).min(width) {
            let light = ((px - x) / CHECKER_SIZE + (py - y) / CHECKER_SIZE) % 2 == 0;
            let color = if light { CHECKER_LIGHT } else { CHECKER_DARK };
            put_pixel(frame, width, px, py, color);
        }
    }
}

#[allow(clippy::too_many_arguments)]
fn fill_rect(
    frame: &mut [u8],
    width: u32,
    height: u32,
    x: u32,
    y: u32,
    rect_width: u32,
    rect_height: u32,
    color: [u8; 4],
) {
    for py in y..y.saturating_add(rect_height).min(height) {
        for px in x..x.saturating_add(rect_width).min(width) {
            put_pixel(frame, width, px, py, color);
        }
    }
}

fn put_pixel(frame: &mut [u8], width: u32, x: u32, y: u32, color: [u8; 4]) {
    let index = ((y * width + x) * 4) as usize;
    if let Some(pixel) = frame.get_mut(index..index + 4) {
        pixel.copy_from_slice(&color);
    }
}
