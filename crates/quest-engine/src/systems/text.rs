//! Fixed-advance glyph text.
//!
//! Each printable ASCII character becomes one glyph shape record carrying
//! its character code; the host rasterizes glyphs from a font atlas.
//! Characters outside the printable range are skipped but still advance
//! the cursor, so spacing survives.

use crate::renderer::instance::{Paint, ShapeBuffer, Space};

/// Horizontal advance per character, as a fraction of the font size.
pub const GLYPH_ADVANCE: f32 = 0.55;

fn is_printable(c: char) -> bool {
    ('!'..='~').contains(&c)
}

/// Width of a laid-out string at the given font size.
pub fn text_width(text: &str, size: f32) -> f32 {
    text.chars().count() as f32 * size * GLYPH_ADVANCE
}

/// Lay `text` out left-to-right from (x, y) top-left at the given font
/// size. Returns the total advance.
pub fn push_text(
    buf: &mut ShapeBuffer,
    text: &str,
    x: f32,
    y: f32,
    size: f32,
    paint: Paint,
    space: Space,
) -> f32 {
    let mut cursor = x;
    for c in text.chars() {
        if is_printable(c) {
            buf.push_glyph(cursor, y, size, c, paint, space);
        }
        cursor += size * GLYPH_ADVANCE;
    }
    cursor - x
}
