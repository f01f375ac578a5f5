//! Text rendering into the RGBA frame using ab_glyph.

use std::fs;
use std::path::{Path, PathBuf};

use ab_glyph::{point, Font, FontVec, PxScale, ScaleFont};

/// Monospace fonts tried when no font is configured.
const SYSTEM_FONTS: &[&str] = &[
    "/usr/share/fonts/truetype/dejavu/DejaVuSansMono.ttf",
    "/usr/share/fonts/TTF/DejaVuSansMono.ttf",
    "/usr/share/fonts/dejavu/DejaVuSansMono.ttf",
    "/usr/share/fonts/truetype/liberation/LiberationMono-Regular.ttf",
    "C:\\Windows\\Fonts\\consola.ttf",
    "C:\\Windows\\Fonts\\cour.ttf",
    "/Library/Fonts/Courier New.ttf",
];

pub struct FontRenderer {
    font: FontVec,
    size: f32,
}

impl FontRenderer {
    pub fn from_file(path: &Path, size: f32) -> Option<Self> {
        let bytes = fs::read(path)
            .map_err(|err| log::debug!("Cannot read font {}: {}", path.display(), err))
            .ok()?;
        let font = FontVec::try_from_vec(bytes)
            .map_err(|err| log::warn!("Invalid font {}: {}", path.display(), err))
            .ok()?;
        log::info!("Using font {}", path.display());
        Some(Self { font, size })
    }

    /// Tries the configured font, then the known system fonts.
    pub fn load(configured: Option<&Path>, size: f32) -> Option<Self> {
        let fallback = SYSTEM_FONTS.iter().map(PathBuf::from);
        let found = configured
            .map(Path::to_path_buf)
            .into_iter()
            .chain(fallback)
            .find_map(|path| Self::from_file(&path, size));
        if found.is_none() {
            log::warn!("No usable font found; console text will not be drawn");
        }
        found
    }

    pub fn line_height(&self) -> u32 {
        let scaled = self.font.as_scaled(PxScale::from(self.size));
        (scaled.height() * 1.2).ceil() as u32
    }

    /// Draws `text` with its top-left corner at (x, y), clipped to the frame.
    pub fn draw_text(
        &self,
        frame: &mut [u8],
        frame_width: u32,
        frame_height: u32,
        text: &str,
        x: u32,
        y: u32,
        color: [u8; 3],
    ) {
        let scale = PxScale::from(self.size);
        let scaled = self.font.as_scaled(scale);
        let baseline = y as f32 + scaled.ascent();
        let mut caret = x as f32;

        for ch in text.chars() {
            let glyph_id = self.font.glyph_id(ch);
            let glyph = glyph_id.with_scale_and_position(scale, point(caret, baseline));
            caret += scaled.h_advance(glyph_id);
            if caret > frame_width as f32 {
                break;
            }

            let Some(outlined) = self.font.outline_glyph(glyph) else {
                continue;
            };
            let bounds = outlined.px_bounds();
            outlined.draw(|gx, gy, coverage| {
                let px = bounds.min.x as i32 + gx as i32;
                let py = bounds.min.y as i32 + gy as i32;
                if px < 0 || py < 0 || px as u32 >= frame_width || py as u32 >= frame_height {
                    return;
                }
                let index = ((py as u32 * frame_width + px as u32) * 4) as usize;
                blend(&mut frame[index..index + 4], color, coverage);
            });
        }
    }
}

fn blend(pixel: &mut [u8], color: [u8; 3], coverage: f32) {
    let alpha = (coverage.clamp(0.0, 1.0) * 255.0) as u16;
    let inv_alpha = 255 - alpha;
    for (channel, value) in pixel.iter_mut().zip(color) {
        *channel = ((*channel as u16 * inv_alpha + value as u16 * alpha) / 255) as u8;
    }
    pixel[3] = 255;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blend_mixes_by_coverage() {
        let mut pixel = [0, 0, 0, 0];
        blend(&mut pixel, [255, 100, 0], 1.0);
        assert_eq!(pixel, [255, 100, 0, 255]);

        let mut pixel = [200, 200, 200, 255];
        blend(&mut pixel, [0, 0, 0], 0.0);
        assert_eq!(pixel, [200, 200, 200, 255]);
    }

    #[test]
    fn missing_font_file_is_not_fatal() {
        assert!(FontRenderer::from_file(Path::new("/nonexistent/font.ttf"), 14.0).is_none());
    }
}
