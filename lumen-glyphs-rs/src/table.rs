use crate::error::GlyphError;
use crate::glyph::Glyph;

/// An immutable, validated set of glyphs sharing one cell height and one
/// inter-glyph spacing.
///
/// Entries are kept sorted by character so [`lookup()`](Self::lookup) is a
/// binary search. The table is `Copy` (a slice reference plus two bytes) and
/// safe to read from any number of places at once.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GlyphTable {
    glyphs: &'static [Glyph],
    cell_height_pages: u8,
    spacing: u8,
}

impl GlyphTable {
    /// Build a table, rejecting any malformed descriptor.
    ///
    /// Usable in `const` items, which turns a bad font asset into a build
    /// error:
    ///
    /// ```
    /// use lumen_glyphs::{Glyph, GlyphTable};
    ///
    /// const DOTS: GlyphTable = match GlyphTable::new(&[Glyph::new('.', 1, 1, &[0x80])], 1, 1) {
    ///     Ok(table) => table,
    ///     Err(_) => panic!("bad font"),
    /// };
    /// assert!(DOTS.lookup('.').is_some());
    /// ```
    ///
    /// # Errors
    ///
    /// * [`GlyphError::EmptyCell`] if `cell_height_pages` is zero.
    /// * [`GlyphError::ZeroWidth`], [`GlyphError::HeightOutOfRange`] or
    ///   [`GlyphError::DataLengthMismatch`] for the first bad descriptor.
    /// * [`GlyphError::Unsorted`] if characters are not strictly ascending.
    pub const fn new(
        glyphs: &'static [Glyph],
        cell_height_pages: u8,
        spacing: u8,
    ) -> Result<Self, GlyphError> {
        if cell_height_pages == 0 {
            return Err(GlyphError::EmptyCell);
        }

        let mut i = 0;
        while i < glyphs.len() {
            let glyph = &glyphs[i];
            if glyph.width() == 0 {
                return Err(GlyphError::ZeroWidth(glyph.ch()));
            }
            if glyph.height_pages() == 0 || glyph.height_pages() > cell_height_pages as usize {
                return Err(GlyphError::HeightOutOfRange(glyph.ch()));
            }
            if !glyph.is_well_formed() {
                return Err(GlyphError::DataLengthMismatch(glyph.ch()));
            }
            if i > 0 && glyphs[i - 1].ch() as u32 >= glyph.ch() as u32 {
                return Err(GlyphError::Unsorted(glyph.ch()));
            }
            i += 1;
        }

        Ok(Self {
            glyphs,
            cell_height_pages,
            spacing,
        })
    }

    /// Find the glyph for `ch`. Absent characters yield `None`, never a
    /// fallback glyph.
    pub fn lookup(&self, ch: char) -> Option<&'static Glyph> {
        let glyphs = self.glyphs;
        glyphs
            .binary_search_by_key(&ch, Glyph::ch)
            .ok()
            .map(|i| &glyphs[i])
    }

    /// Height of one text row in pages.
    pub const fn cell_height_pages(&self) -> usize {
        self.cell_height_pages as usize
    }

    /// Blank columns inserted after every glyph.
    pub const fn spacing(&self) -> usize {
        self.spacing as usize
    }

    /// Columns consumed by `ch` including spacing, or `None` if unmapped.
    pub fn advance(&self, ch: char) -> Option<usize> {
        self.lookup(ch).map(|g| g.width() + self.spacing())
    }

    /// Number of text rows that fit into `pages` display pages.
    pub const fn rows_in(&self, pages: usize) -> usize {
        pages / self.cell_height_pages()
    }

    /// Width in pixels `text` would occupy, stopping at the first unmapped
    /// character the same way a line renderer does.
    pub fn measure(&self, text: &str) -> usize {
        text.chars().map_while(|c| self.advance(c)).sum()
    }

    /// Number of glyphs.
    pub const fn len(&self) -> usize {
        self.glyphs.len()
    }

    /// `true` if the table maps no characters.
    pub const fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }

    /// All glyphs in ascending character order.
    pub fn iter(&self) -> impl Iterator<Item = &'static Glyph> {
        self.glyphs.iter()
    }
}
