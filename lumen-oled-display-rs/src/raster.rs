//! Glyph rasterizer, line writer and multi-line render.
//!
//! Text is placed on a grid of **rows**, each one font cell tall
//! (`cell_height_pages` pages). Row `r` covers pages
//! `r * cell_height_pages ..`; columns are addressed in pixels.
//!
//! Placement is best-effort: a character the font does not map, a row
//! below the panel or a glyph that would run past the right edge stops the
//! line silently. Nothing is written for the rejected character.

use lumen_glyphs::GlyphTable;

use crate::framebuffer::{Framebuffer, PAGES, WIDTH};

/// Draw one character with its top-left corner at pixel column `col` of
/// text row `row`.
///
/// Writes the glyph's bytes followed by `font.spacing()` zeroed columns
/// across the glyph's page range, and returns the columns consumed
/// (`width + spacing`).
///
/// Returns `0`, leaving `fb` untouched, if the character is not in `font`,
/// if `row` is beyond the last full text row, or if the glyph plus its
/// spacing would not fit before the right edge.
pub fn draw_char(fb: &mut Framebuffer, font: &GlyphTable, ch: char, col: usize, row: usize) -> u32 {
    let Some(glyph) = font.lookup(ch) else {
        return 0;
    };

    if row >= font.rows_in(PAGES) {
        return 0;
    }

    let advance = glyph.width() + font.spacing();
    match col.checked_add(advance) {
        Some(end) if end <= WIDTH => {}
        _ => return 0,
    }

    let first_page = row * font.cell_height_pages();

    // Glyph body, in the same page-then-column order the data is stored.
    for page in 0..glyph.height_pages() {
        for x in 0..glyph.width() {
            fb.set(col + x, first_page + page, glyph.byte(x, page));
        }
    }

    // Spacing columns.
    for page in 0..glyph.height_pages() {
        for x in glyph.width()..advance {
            fb.set(col + x, first_page + page, 0);
        }
    }

    advance as u32
}

/// Draw `text` on text row `row`, starting at pixel column `start_col`.
///
/// Stops at the first character [`draw_char`] rejects; the rest of the
/// line is dropped. Returns the column cursor after the last glyph drawn.
pub fn draw_line(fb: &mut Framebuffer, font: &GlyphTable, text: &str, start_col: usize, row: usize) -> usize {
    let mut col = start_col;
    for ch in text.chars() {
        let consumed = draw_char(fb, font, ch, col, row);
        if consumed == 0 {
            break;
        }
        col += consumed as usize;
    }
    col
}

/// Clear `fb`, then draw line `i` of `lines` on text row `i` from column 0.
///
/// Lines past the panel's row capacity draw nothing.
pub fn render_lines<I>(fb: &mut Framebuffer, font: &GlyphTable, lines: I)
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    fb.clear();
    for (row, line) in lines.into_iter().enumerate() {
        draw_line(fb, font, line.as_ref(), 0, row);
    }
}
