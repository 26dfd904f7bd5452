use core::fmt;

/// Reasons a set of glyphs cannot form a [`GlyphTable`](crate::GlyphTable).
///
/// Each variant names the offending character.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum GlyphError {
    /// `data.len()` is not `width * height_pages`.
    DataLengthMismatch(char),
    /// Glyph is zero pixels wide.
    ZeroWidth(char),
    /// Glyph is zero pages tall or taller than the table's cell.
    HeightOutOfRange(char),
    /// Entries are not strictly ascending by character (includes duplicates).
    Unsorted(char),
    /// The table's cell height is zero pages.
    EmptyCell,
}

impl fmt::Display for GlyphError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            GlyphError::DataLengthMismatch(c) => {
                write!(f, "glyph {:?}: data length is not width * height", c)
            }
            GlyphError::ZeroWidth(c) => write!(f, "glyph {:?}: zero width", c),
            GlyphError::HeightOutOfRange(c) => {
                write!(f, "glyph {:?}: height does not fit the font cell", c)
            }
            GlyphError::Unsorted(c) => write!(f, "glyph {:?}: out of order or duplicated", c),
            GlyphError::EmptyCell => write!(f, "font cell height is zero"),
        }
    }
}
