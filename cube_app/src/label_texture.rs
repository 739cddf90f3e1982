//! Procedural label texture provider
//!
//! Fills the renderer's texture-provider contract ({label, width,
//! height, color} -> RGBA pixels) without pulling in a font stack: the
//! label's first character is drawn as a chunky 5x7 block glyph, scaled
//! to about five sixths of the texture height and centered, on a
//! transparent background.

use cube_render::prelude::TextureProvider;
use image::{Rgba, RgbaImage};

/// Texture provider that rasterizes a single colored letter
pub struct LabelTexture {
    label: String,
    width: u32,
    height: u32,
    color: [u8; 4],
}

impl LabelTexture {
    pub fn new(label: impl Into<String>, width: u32, height: u32, color: [u8; 4]) -> Self {
        Self {
            label: label.into(),
            width,
            height,
            color,
        }
    }
}

impl TextureProvider for LabelTexture {
    fn rgba_image(&self) -> RgbaImage {
        let mut image = RgbaImage::new(self.width, self.height);

        let glyph = self
            .label
            .chars()
            .next()
            .map(|c| glyph_rows(c.to_ascii_uppercase()))
            .unwrap_or(FALLBACK_GLYPH);

        // Scale the 5x7 cell to ~5/6 of the texture height, centered.
        let glyph_height = self.height * 5 / 6;
        let cell = (glyph_height / 7).max(1);
        let glyph_width = cell * 5;
        let x0 = (self.width.saturating_sub(glyph_width)) / 2;
        let y0 = (self.height.saturating_sub(cell * 7)) / 2;

        let color = Rgba(self.color);
        for (row, bits) in glyph.iter().enumerate() {
            for col in 0..5u32 {
                if bits & (0b1_0000 >> col) == 0 {
                    continue;
                }
                for dy in 0..cell {
                    for dx in 0..cell {
                        let x = x0 + col * cell + dx;
                        let y = y0 + row as u32 * cell + dy;
                        if x < self.width && y < self.height {
                            image.put_pixel(x, y, color);
                        }
                    }
                }
            }
        }

        image
    }
}

/// Solid block shown for characters outside the tiny built-in set
const FALLBACK_GLYPH: [u8; 7] = [0b11111; 7];

/// 5x7 bitmap rows for the supported letters, most significant bit left
fn glyph_rows(c: char) -> [u8; 7] {
    match c {
        'L' => [
            0b10000, 0b10000, 0b10000, 0b10000, 0b10000, 0b10000, 0b11111,
        ],
        'C' => [
            0b01110, 0b10001, 0b10000, 0b10000, 0b10000, 0b10001, 0b01110,
        ],
        'U' => [
            0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01110,
        ],
        'B' => [
            0b11110, 0b10001, 0b10001, 0b11110, 0b10001, 0b10001, 0b11110,
        ],
        'E' => [
            0b11111, 0b10000, 0b10000, 0b11110, 0b10000, 0b10000, 0b11111,
        ],
        _ => FALLBACK_GLYPH,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn image_has_exactly_the_requested_dimensions() {
        let provider = LabelTexture::new("L", 128, 128, [0, 0, 255, 255]);
        let image = provider.rgba_image();
        assert_eq!(image.dimensions(), (128, 128));
        assert_eq!(image.as_raw().len(), 128 * 128 * 4);
    }

    #[test]
    fn glyph_pixels_use_the_requested_color() {
        let provider = LabelTexture::new("L", 128, 128, [0, 0, 255, 255]);
        let image = provider.rgba_image();

        let lit: Vec<_> = image.pixels().filter(|p| p.0 == [0, 0, 255, 255]).collect();
        assert!(!lit.is_empty(), "no glyph pixels were drawn");

        // Background stays transparent.
        assert!(image
            .pixels()
            .all(|p| p.0 == [0, 0, 255, 255] || p.0 == [0, 0, 0, 0]));
    }

    #[test]
    fn unknown_characters_fall_back_to_a_solid_block() {
        let provider = LabelTexture::new("?", 32, 32, [255, 0, 0, 255]);
        let image = provider.rgba_image();
        assert!(image.pixels().any(|p| p.0 == [255, 0, 0, 255]));
    }
}
