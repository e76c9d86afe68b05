//! Tiny built-in pixel font for the score and timer labels

use super::frame::{FrameBuffer, Rgba};

const GLYPH_W: i32 = 3;
const GLYPH_H: i32 = 5;
/// Each font pixel covers a SCALE x SCALE block
const SCALE: i32 = 2;
const SPACING: i32 = 1;

/// Rows of a glyph, three low bits each (MSB = leftmost column)
fn glyph(c: char) -> Option<[u8; 5]> {
    Some(match c {
        '0' => [0b111, 0b101, 0b101, 0b101, 0b111],
        '1' => [0b010, 0b110, 0b010, 0b010, 0b111],
        '2' => [0b111, 0b001, 0b111, 0b100, 0b111],
        '3' => [0b111, 0b001, 0b111, 0b001, 0b111],
        '4' => [0b101, 0b101, 0b111, 0b001, 0b001],
        '5' => [0b111, 0b100, 0b111, 0b001, 0b111],
        '6' => [0b111, 0b100, 0b111, 0b101, 0b111],
        '7' => [0b111, 0b001, 0b010, 0b010, 0b010],
        '8' => [0b111, 0b101, 0b111, 0b101, 0b111],
        '9' => [0b111, 0b101, 0b111, 0b001, 0b111],
        's' => [0b000, 0b011, 0b110, 0b011, 0b110],
        _ => return None,
    })
}

/// Width in pixels of `text` when drawn
pub fn text_width(text: &str) -> i32 {
    let n = text.chars().count() as i32;
    if n == 0 {
        return 0;
    }
    n * GLYPH_W * SCALE + (n - 1) * SPACING * SCALE
}

/// Height in pixels of any line of text
pub const fn text_height() -> i32 {
    GLYPH_H * SCALE
}

/// Draw `text` with its top-left corner at (x, y). Unknown characters
/// leave a blank cell.
pub fn draw_text(frame: &mut FrameBuffer, text: &str, x: i32, y: i32, color: Rgba) {
    let advance = (GLYPH_W + SPACING) * SCALE;
    for (i, c) in text.chars().enumerate() {
        let Some(rows) = glyph(c) else { continue };
        let gx = x + i as i32 * advance;
        for (row, bits) in rows.iter().enumerate() {
            for col in 0..GLYPH_W {
                if bits & (1 << (GLYPH_W - 1 - col)) != 0 {
                    frame.fill_rect(
                        gx + col * SCALE,
                        y + row as i32 * SCALE,
                        SCALE as u32,
                        SCALE as u32,
                        color,
                    );
                }
            }
        }
    }
}
