//! Built-in font assets.

use crate::glyph::Glyph;
use crate::table::GlyphTable;

/// Printable ASCII (`' '..='~'`) in a 16 px cell with 1 px spacing.
///
/// Derived from the IBM VGA 8×16 ROM font, transposed into page-major
/// column bytes with blank columns trimmed, so glyph widths vary from 2 to
/// 8 px. The space glyph is 4 px wide.
pub const FONT_16PX: GlyphTable = match GlyphTable::new(FONT_16PX_GLYPHS, 2, 1) {
    Ok(table) => table,
    Err(_) => panic!("FONT_16PX glyph data is malformed"),
};

const FONT_16PX_GLYPHS: &[Glyph] = &[
    Glyph::new(' ', 4, 2, &[
        0x00, 0x00, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00,
    ]),
    Glyph::new('!', 4, 2, &[
        0x38, 0xFC, 0xFC, 0x38,
        0x00, 0x0D, 0x0D, 0x00,
    ]),
    Glyph::new('"', 6, 2, &[
        0x0E, 0x1E, 0x00, 0x00, 0x1E, 0x0E,
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    ]),
    Glyph::new('#', 7, 2, &[
        0x20, 0xF8, 0xF8, 0x20, 0xF8, 0xF8, 0x20,
        0x02, 0x0F, 0x0F, 0x02, 0x0F, 0x0F, 0x02,
    ]),
    Glyph::new('$', 7, 2, &[
        0x38, 0x7C, 0x44, 0x47, 0x47, 0xCC, 0x98,
        0x06, 0x0C, 0x08, 0x38, 0x38, 0x0F, 0x07,
    ]),
    Glyph::new('%', 7, 2, &[
        0x30, 0x30, 0x00, 0x80, 0xC0, 0x60, 0x30,
        0x0C, 0x06, 0x03, 0x01, 0x00, 0x0C, 0x0C,
    ]),
    Glyph::new('&', 7, 2, &[
        0x80, 0xD8, 0x7C, 0xE4, 0xBC, 0xD8, 0x40,
        0x07, 0x0F, 0x08, 0x08, 0x07, 0x0F, 0x08,
    ]),
    Glyph::new('\'', 3, 2, &[
        0x10, 0x1E, 0x0E,
        0x00, 0x00, 0x00,
    ]),
    Glyph::new('(', 4, 2, &[
        0xF0, 0xF8, 0x0C, 0x04,
        0x03, 0x07, 0x0C, 0x08,
    ]),
    Glyph::new(')', 4, 2, &[
        0x04, 0x0C, 0xF8, 0xF0,
        0x08, 0x0C, 0x07, 0x03,
    ]),
    Glyph::new('*', 8, 2, &[
        0x80, 0xA0, 0xE0, 0xC0, 0xC0, 0xE0, 0xA0, 0x80,
        0x00, 0x02, 0x03, 0x01, 0x01, 0x03, 0x02, 0x00,
    ]),
    Glyph::new('+', 6, 2, &[
        0x80, 0x80, 0xE0, 0xE0, 0x80, 0x80,
        0x00, 0x00, 0x03, 0x03, 0x00, 0x00,
    ]),
    Glyph::new(',', 3, 2, &[
        0x00, 0x00, 0x00,
        0x10, 0x1E, 0x0E,
    ]),
    Glyph::new('-', 7, 2, &[
        0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80,
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    ]),
    Glyph::new('.', 2, 2, &[
        0x00, 0x00,
        0x0C, 0x0C,
    ]),
    Glyph::new('/', 7, 2, &[
        0x00, 0x00, 0x00, 0x80, 0xC0, 0x60, 0x30,
        0x0C, 0x06, 0x03, 0x01, 0x00, 0x00, 0x00,
    ]),
    Glyph::new('0', 7, 2, &[
        0xF0, 0xF8, 0x0C, 0xC4, 0x0C, 0xF8, 0xF0,
        0x03, 0x07, 0x0C, 0x08, 0x0C, 0x07, 0x03,
    ]),
    Glyph::new('1', 6, 2, &[
        0x10, 0x18, 0xFC, 0xFC, 0x00, 0x00,
        0x08, 0x08, 0x0F, 0x0F, 0x08, 0x08,
    ]),
    Glyph::new('2', 7, 2, &[
        0x08, 0x0C, 0x84, 0xC4, 0x64, 0x3C, 0x18,
        0x0E, 0x0F, 0x09, 0x08, 0x08, 0x0C, 0x0C,
    ]),
    Glyph::new('3', 7, 2, &[
        0x08, 0x0C, 0x44, 0x44, 0x44, 0xFC, 0xB8,
        0x04, 0x0C, 0x08, 0x08, 0x08, 0x0F, 0x07,
    ]),
    Glyph::new('4', 7, 2, &[
        0xC0, 0xE0, 0xB0, 0x98, 0xFC, 0xFC, 0x80,
        0x00, 0x00, 0x00, 0x08, 0x0F, 0x0F, 0x08,
    ]),
    Glyph::new('5', 7, 2, &[
        0x7C, 0x7C, 0x44, 0x44, 0x44, 0xC4, 0x84,
        0x04, 0x0C, 0x08, 0x08, 0x08, 0x0F, 0x07,
    ]),
    Glyph::new('6', 7, 2, &[
        0xF0, 0xF8, 0x4C, 0x44, 0x44, 0xC0, 0x80,
        0x07, 0x0F, 0x08, 0x08, 0x08, 0x0F, 0x07,
    ]),
    Glyph::new('7', 7, 2, &[
        0x0C, 0x0C, 0x04, 0x84, 0xC4, 0x7C, 0x3C,
        0x00, 0x00, 0x0F, 0x0F, 0x00, 0x00, 0x00,
    ]),
    Glyph::new('8', 7, 2, &[
        0xB8, 0xFC, 0x44, 0x44, 0x44, 0xFC, 0xB8,
        0x07, 0x0F, 0x08, 0x08, 0x08, 0x0F, 0x07,
    ]),
    Glyph::new('9', 7, 2, &[
        0x38, 0x7C, 0x44, 0x44, 0x44, 0xFC, 0xF8,
        0x00, 0x08, 0x08, 0x08, 0x0C, 0x07, 0x03,
    ]),
    Glyph::new(':', 2, 2, &[
        0x30, 0x30,
        0x06, 0x06,
    ]),
    Glyph::new(';', 3, 2, &[
        0x00, 0x30, 0x30,
        0x08, 0x0E, 0x06,
    ]),
    Glyph::new('<', 6, 2, &[
        0x80, 0xC0, 0x60, 0x30, 0x18, 0x08,
        0x00, 0x01, 0x03, 0x06, 0x0C, 0x08,
    ]),
    Glyph::new('=', 6, 2, &[
        0x20, 0x20, 0x20, 0x20, 0x20, 0x20,
        0x01, 0x01, 0x01, 0x01, 0x01, 0x01,
    ]),
    Glyph::new('>', 6, 2, &[
        0x08, 0x18, 0x30, 0x60, 0xC0, 0x80,
        0x08, 0x0C, 0x06, 0x03, 0x01, 0x00,
    ]),
    Glyph::new('?', 7, 2, &[
        0x18, 0x1C, 0x04, 0xC4, 0xE4, 0x3C, 0x18,
        0x00, 0x00, 0x00, 0x0D, 0x0D, 0x00, 0x00,
    ]),
    Glyph::new('@', 7, 2, &[
        0xF0, 0xF8, 0x08, 0xC8, 0xC8, 0xF8, 0xF0,
        0x07, 0x0F, 0x08, 0x0B, 0x0B, 0x0B, 0x01,
    ]),
    Glyph::new('A', 7, 2, &[
        0xE0, 0xF0, 0x98, 0x8C, 0x98, 0xF0, 0xE0,
        0x0F, 0x0F, 0x00, 0x00, 0x00, 0x0F, 0x0F,
    ]),
    Glyph::new('B', 7, 2, &[
        0x04, 0xFC, 0xFC, 0x44, 0x44, 0xFC, 0xB8,
        0x08, 0x0F, 0x0F, 0x08, 0x08, 0x0F, 0x07,
    ]),
    Glyph::new('C', 7, 2, &[
        0xF0, 0xF8, 0x0C, 0x04, 0x04, 0x0C, 0x18,
        0x03, 0x07, 0x0C, 0x08, 0x08, 0x0C, 0x06,
    ]),
    Glyph::new('D', 7, 2, &[
        0x04, 0xFC, 0xFC, 0x04, 0x0C, 0xF8, 0xF0,
        0x08, 0x0F, 0x0F, 0x08, 0x0C, 0x07, 0x03,
    ]),
    Glyph::new('E', 7, 2, &[
        0x04, 0xFC, 0xFC, 0x44, 0xE4, 0x0C, 0x1C,
        0x08, 0x0F, 0x0F, 0x08, 0x08, 0x0C, 0x0E,
    ]),
    Glyph::new('F', 7, 2, &[
        0x04, 0xFC, 0xFC, 0x44, 0xE4, 0x0C, 0x1C,
        0x08, 0x0F, 0x0F, 0x08, 0x00, 0x00, 0x00,
    ]),
    Glyph::new('G', 7, 2, &[
        0xF0, 0xF8, 0x0C, 0x84, 0x84, 0x8C, 0x98,
        0x03, 0x07, 0x0C, 0x08, 0x08, 0x07, 0x0F,
    ]),
    Glyph::new('H', 7, 2, &[
        0xFC, 0xFC, 0x40, 0x40, 0x40, 0xFC, 0xFC,
        0x0F, 0x0F, 0x00, 0x00, 0x00, 0x0F, 0x0F,
    ]),
    Glyph::new('I', 4, 2, &[
        0x04, 0xFC, 0xFC, 0x04,
        0x08, 0x0F, 0x0F, 0x08,
    ]),
    Glyph::new('J', 7, 2, &[
        0x00, 0x00, 0x00, 0x04, 0xFC, 0xFC, 0x04,
        0x07, 0x0F, 0x08, 0x08, 0x0F, 0x07, 0x00,
    ]),
    Glyph::new('K', 7, 2, &[
        0x04, 0xFC, 0xFC, 0xC0, 0xE0, 0x3C, 0x1C,
        0x08, 0x0F, 0x0F, 0x00, 0x01, 0x0F, 0x0E,
    ]),
    Glyph::new('L', 7, 2, &[
        0x04, 0xFC, 0xFC, 0x04, 0x00, 0x00, 0x00,
        0x08, 0x0F, 0x0F, 0x08, 0x08, 0x0C, 0x0E,
    ]),
    Glyph::new('M', 7, 2, &[
        0xFC, 0xFC, 0x38, 0x70, 0x38, 0xFC, 0xFC,
        0x0F, 0x0F, 0x00, 0x00, 0x00, 0x0F, 0x0F,
    ]),
    Glyph::new('N', 7, 2, &[
        0xFC, 0xFC, 0x38, 0x70, 0xE0, 0xFC, 0xFC,
        0x0F, 0x0F, 0x00, 0x00, 0x00, 0x0F, 0x0F,
    ]),
    Glyph::new('O', 7, 2, &[
        0xF8, 0xFC, 0x04, 0x04, 0x04, 0xFC, 0xF8,
        0x07, 0x0F, 0x08, 0x08, 0x08, 0x0F, 0x07,
    ]),
    Glyph::new('P', 7, 2, &[
        0x04, 0xFC, 0xFC, 0x44, 0x44, 0x7C, 0x38,
        0x08, 0x0F, 0x0F, 0x08, 0x00, 0x00, 0x00,
    ]),
    Glyph::new('Q', 7, 2, &[
        0xF8, 0xFC, 0x04, 0x04, 0x04, 0xFC, 0xF8,
        0x07, 0x0F, 0x08, 0x0E, 0x3C, 0x3F, 0x27,
    ]),
    Glyph::new('R', 7, 2, &[
        0x04, 0xFC, 0xFC, 0x44, 0xC4, 0xFC, 0x38,
        0x08, 0x0F, 0x0F, 0x00, 0x00, 0x0F, 0x0F,
    ]),
    Glyph::new('S', 7, 2, &[
        0x18, 0x3C, 0x64, 0x44, 0xC4, 0x9C, 0x18,
        0x06, 0x0E, 0x08, 0x08, 0x08, 0x0F, 0x07,
    ]),
    Glyph::new('T', 6, 2, &[
        0x1C, 0x0C, 0xFC, 0xFC, 0x0C, 0x1C,
        0x00, 0x08, 0x0F, 0x0F, 0x08, 0x00,
    ]),
    Glyph::new('U', 7, 2, &[
        0xFC, 0xFC, 0x00, 0x00, 0x00, 0xFC, 0xFC,
        0x07, 0x0F, 0x08, 0x08, 0x08, 0x0F, 0x07,
    ]),
    Glyph::new('V', 7, 2, &[
        0xFC, 0xFC, 0x00, 0x00, 0x00, 0xFC, 0xFC,
        0x01, 0x03, 0x06, 0x0C, 0x06, 0x03, 0x01,
    ]),
    Glyph::new('W', 7, 2, &[
        0xFC, 0xFC, 0x00, 0xC0, 0x00, 0xFC, 0xFC,
        0x07, 0x0F, 0x0E, 0x03, 0x0E, 0x0F, 0x07,
    ]),
    Glyph::new('X', 7, 2, &[
        0x0C, 0x3C, 0xF0, 0xE0, 0xF0, 0x3C, 0x0C,
        0x0C, 0x0F, 0x03, 0x01, 0x03, 0x0F, 0x0C,
    ]),
    Glyph::new('Y', 6, 2, &[
        0x3C, 0x7C, 0xC0, 0xC0, 0x7C, 0x3C,
        0x00, 0x08, 0x0F, 0x0F, 0x08, 0x00,
    ]),
    Glyph::new('Z', 7, 2, &[
        0x1C, 0x0C, 0x84, 0xC4, 0x64, 0x3C, 0x1C,
        0x0E, 0x0F, 0x09, 0x08, 0x08, 0x0C, 0x0E,
    ]),
    Glyph::new('[', 4, 2, &[
        0xFC, 0xFC, 0x04, 0x04,
        0x0F, 0x0F, 0x08, 0x08,
    ]),
    Glyph::new('\\', 7, 2, &[
        0x18, 0x30, 0x60, 0xC0, 0x80, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00, 0x01, 0x03, 0x06,
    ]),
    Glyph::new(']', 4, 2, &[
        0x04, 0x04, 0xFC, 0xFC,
        0x08, 0x08, 0x0F, 0x0F,
    ]),
    Glyph::new('^', 7, 2, &[
        0x08, 0x0C, 0x06, 0x03, 0x06, 0x0C, 0x08,
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    ]),
    Glyph::new('_', 8, 2, &[
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        0x20, 0x20, 0x20, 0x20, 0x20, 0x20, 0x20, 0x20,
    ]),
    Glyph::new('`', 4, 2, &[
        0x02, 0x06, 0x0C, 0x08,
        0x00, 0x00, 0x00, 0x00,
    ]),
    Glyph::new('a', 7, 2, &[
        0x00, 0xA0, 0xA0, 0xA0, 0xE0, 0xC0, 0x00,
        0x07, 0x0F, 0x08, 0x08, 0x07, 0x0F, 0x08,
    ]),
    Glyph::new('b', 7, 2, &[
        0x04, 0xFC, 0xFC, 0x20, 0x60, 0xC0, 0x80,
        0x00, 0x0F, 0x0F, 0x08, 0x08, 0x0F, 0x07,
    ]),
    Glyph::new('c', 7, 2, &[
        0xC0, 0xE0, 0x20, 0x20, 0x20, 0x60, 0x40,
        0x07, 0x0F, 0x08, 0x08, 0x08, 0x0C, 0x04,
    ]),
    Glyph::new('d', 7, 2, &[
        0x80, 0xC0, 0x60, 0x24, 0xFC, 0xFC, 0x00,
        0x07, 0x0F, 0x08, 0x08, 0x07, 0x0F, 0x08,
    ]),
    Glyph::new('e', 7, 2, &[
        0xC0, 0xE0, 0xA0, 0xA0, 0xA0, 0xE0, 0xC0,
        0x07, 0x0F, 0x08, 0x08, 0x08, 0x0C, 0x04,
    ]),
    Glyph::new('f', 6, 2, &[
        0x40, 0xF8, 0xFC, 0x44, 0x0C, 0x18,
        0x08, 0x0F, 0x0F, 0x08, 0x00, 0x00,
    ]),
    Glyph::new('g', 7, 2, &[
        0xC0, 0xE0, 0x20, 0x20, 0xC0, 0xE0, 0x20,
        0x27, 0x6F, 0x48, 0x48, 0x7F, 0x3F, 0x00,
    ]),
    Glyph::new('h', 7, 2, &[
        0x04, 0xFC, 0xFC, 0x40, 0x20, 0xE0, 0xC0,
        0x08, 0x0F, 0x0F, 0x00, 0x00, 0x0F, 0x0F,
    ]),
    Glyph::new('i', 4, 2, &[
        0x20, 0xEC, 0xEC, 0x00,
        0x08, 0x0F, 0x0F, 0x08,
    ]),
    Glyph::new('j', 6, 2, &[
        0x00, 0x00, 0x00, 0x20, 0xEC, 0xEC,
        0x30, 0x70, 0x40, 0x40, 0x7F, 0x3F,
    ]),
    Glyph::new('k', 7, 2, &[
        0x04, 0xFC, 0xFC, 0x80, 0xC0, 0x60, 0x20,
        0x08, 0x0F, 0x0F, 0x01, 0x03, 0x0E, 0x0C,
    ]),
    Glyph::new('l', 4, 2, &[
        0x04, 0xFC, 0xFC, 0x00,
        0x08, 0x0F, 0x0F, 0x08,
    ]),
    Glyph::new('m', 7, 2, &[
        0xE0, 0xE0, 0x60, 0xC0, 0x60, 0xE0, 0xC0,
        0x0F, 0x0F, 0x00, 0x07, 0x00, 0x0F, 0x0F,
    ]),
    Glyph::new('n', 7, 2, &[
        0x20, 0xE0, 0xC0, 0x20, 0x20, 0xE0, 0xC0,
        0x00, 0x0F, 0x0F, 0x00, 0x00, 0x0F, 0x0F,
    ]),
    Glyph::new('o', 7, 2, &[
        0xC0, 0xE0, 0x20, 0x20, 0x20, 0xE0, 0xC0,
        0x07, 0x0F, 0x08, 0x08, 0x08, 0x0F, 0x07,
    ]),
    Glyph::new('p', 7, 2, &[
        0x20, 0xE0, 0xC0, 0x20, 0x20, 0xE0, 0xC0,
        0x40, 0x7F, 0x7F, 0x48, 0x08, 0x0F, 0x07,
    ]),
    Glyph::new('q', 7, 2, &[
        0xC0, 0xE0, 0x20, 0x20, 0xC0, 0xE0, 0x20,
        0x07, 0x0F, 0x08, 0x48, 0x7F, 0x7F, 0x40,
    ]),
    Glyph::new('r', 7, 2, &[
        0x20, 0xE0, 0xC0, 0x60, 0x20, 0xE0, 0xC0,
        0x08, 0x0F, 0x0F, 0x08, 0x00, 0x00, 0x00,
    ]),
    Glyph::new('s', 7, 2, &[
        0x40, 0xE0, 0xA0, 0x20, 0x20, 0x60, 0x40,
        0x04, 0x0C, 0x09, 0x09, 0x0B, 0x0E, 0x04,
    ]),
    Glyph::new('t', 7, 2, &[
        0x20, 0x20, 0xF8, 0xFC, 0x20, 0x20, 0x00,
        0x00, 0x00, 0x07, 0x0F, 0x08, 0x0C, 0x04,
    ]),
    Glyph::new('u', 7, 2, &[
        0xE0, 0xE0, 0x00, 0x00, 0xE0, 0xE0, 0x00,
        0x07, 0x0F, 0x08, 0x08, 0x07, 0x0F, 0x08,
    ]),
    Glyph::new('v', 6, 2, &[
        0xE0, 0xE0, 0x00, 0x00, 0xE0, 0xE0,
        0x03, 0x07, 0x0C, 0x0C, 0x07, 0x03,
    ]),
    Glyph::new('w', 7, 2, &[
        0xE0, 0xE0, 0x00, 0x80, 0x00, 0xE0, 0xE0,
        0x07, 0x0F, 0x0C, 0x07, 0x0C, 0x0F, 0x07,
    ]),
    Glyph::new('x', 7, 2, &[
        0x20, 0x60, 0xC0, 0x80, 0xC0, 0x60, 0x20,
        0x08, 0x0C, 0x07, 0x03, 0x07, 0x0C, 0x08,
    ]),
    Glyph::new('y', 7, 2, &[
        0xE0, 0xE0, 0x00, 0x00, 0x00, 0xE0, 0xE0,
        0x47, 0x4F, 0x48, 0x48, 0x68, 0x3F, 0x1F,
    ]),
    Glyph::new('z', 7, 2, &[
        0x60, 0x60, 0x20, 0xA0, 0xE0, 0x60, 0x20,
        0x0C, 0x0E, 0x0B, 0x09, 0x08, 0x0C, 0x0C,
    ]),
    Glyph::new('{', 6, 2, &[
        0x40, 0x40, 0xF8, 0xBC, 0x04, 0x04,
        0x00, 0x00, 0x07, 0x0F, 0x08, 0x08,
    ]),
    Glyph::new('|', 2, 2, &[
        0xBC, 0xBC,
        0x0F, 0x0F,
    ]),
    Glyph::new('}', 6, 2, &[
        0x04, 0x04, 0xBC, 0xF8, 0x40, 0x40,
        0x08, 0x08, 0x0F, 0x07, 0x00, 0x00,
    ]),
    Glyph::new('~', 7, 2, &[
        0x08, 0x0C, 0x04, 0x0C, 0x08, 0x0C, 0x04,
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    ]),
];
