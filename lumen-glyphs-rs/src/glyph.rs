/// Bitmap descriptor for a single character.
///
/// Construction is unchecked and `const`; the length invariant is enforced
/// when the glyph is placed into a [`GlyphTable`](crate::GlyphTable).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Glyph {
    ch: char,
    width: u8,
    height_pages: u8,
    data: &'static [u8],
}

impl Glyph {
    /// Describe `ch` as a `width` × `height_pages` bitmap.
    ///
    /// `data` is page-row-major: all columns of page 0, then page 1, ...
    pub const fn new(ch: char, width: u8, height_pages: u8, data: &'static [u8]) -> Self {
        Self {
            ch,
            width,
            height_pages,
            data,
        }
    }

    /// The character this glyph draws.
    pub const fn ch(&self) -> char {
        self.ch
    }

    /// Width in pixels.
    pub const fn width(&self) -> usize {
        self.width as usize
    }

    /// Height in 8-pixel pages.
    pub const fn height_pages(&self) -> usize {
        self.height_pages as usize
    }

    /// Packed pixel data.
    pub const fn data(&self) -> &'static [u8] {
        self.data
    }

    /// `true` when `data.len() == width * height_pages`.
    pub const fn is_well_formed(&self) -> bool {
        self.data.len() == self.width() * self.height_pages()
    }

    /// The page byte at glyph-local (`column`, `page`).
    ///
    /// # Panics
    ///
    /// Panics if the position lies outside the glyph.
    pub fn byte(&self, column: usize, page: usize) -> u8 {
        assert!(column < self.width() && page < self.height_pages());
        self.data[page * self.width() + column]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn byte_reads_page_row_major() {
        // 3 wide, 2 pages: page 0 = [1, 2, 3], page 1 = [4, 5, 6]
        let glyph = Glyph::new('x', 3, 2, &[1, 2, 3, 4, 5, 6]);
        assert_eq!(glyph.byte(0, 0), 1);
        assert_eq!(glyph.byte(2, 0), 3);
        assert_eq!(glyph.byte(0, 1), 4);
        assert_eq!(glyph.byte(2, 1), 6);
    }

    #[test]
    fn well_formed_checks_length() {
        assert!(Glyph::new('a', 2, 2, &[0; 4]).is_well_formed());
        assert!(!Glyph::new('a', 2, 2, &[0; 3]).is_well_formed());
        assert!(!Glyph::new('a', 2, 1, &[0; 4]).is_well_formed());
    }

    #[test]
    #[should_panic]
    fn byte_outside_glyph_panics() {
        let glyph = Glyph::new('x', 1, 1, &[0xFF]);
        glyph.byte(1, 0);
    }
}
