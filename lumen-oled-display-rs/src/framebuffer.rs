//! In-memory page-packed frame buffer.
//!
//! One byte per column per page, bit 0 at the top of the page. Cells are
//! stored flat in page-major order (`page * WIDTH + column`), which is also
//! the order the controller expects in horizontal addressing mode, so the
//! backing array *is* the flush payload.

/// Panel width in pixels.
pub const WIDTH: usize = 128;
/// Panel height in pixels.
pub const HEIGHT: usize = 64;
/// Panel height in 8-pixel pages.
pub const PAGES: usize = HEIGHT / 8;
/// Bytes in one full frame.
pub const BUFFER_SIZE: usize = WIDTH * PAGES;

/// A fixed 128 × 8-page byte grid.
///
/// Outside this crate the buffer is read-only apart from [`clear()`](Self::clear);
/// glyph placement goes through [`crate::raster`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Framebuffer {
    cells: [u8; BUFFER_SIZE],
}

impl Default for Framebuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl Framebuffer {
    /// An all-dark frame.
    pub const fn new() -> Self {
        Self {
            cells: [0; BUFFER_SIZE],
        }
    }

    /// Rebuild a frame from a page-major payload, the inverse of
    /// [`as_bytes()`](Self::as_bytes).
    pub fn from_bytes(bytes: &[u8; BUFFER_SIZE]) -> Self {
        Self { cells: *bytes }
    }

    /// Width in pixel columns.
    pub const fn width(&self) -> usize {
        WIDTH
    }

    /// Height in pages.
    pub const fn pages(&self) -> usize {
        PAGES
    }

    const fn index(column: usize, page: usize) -> usize {
        page * WIDTH + column
    }

    /// Cell at (`column`, `page`), or `None` outside the panel.
    pub fn get(&self, column: usize, page: usize) -> Option<u8> {
        if column < WIDTH && page < PAGES {
            Some(self.cells[Self::index(column, page)])
        } else {
            None
        }
    }

    /// Write one cell. Callers bounds-check before writing.
    pub(crate) fn set(&mut self, column: usize, page: usize, value: u8) {
        debug_assert!(column < WIDTH && page < PAGES);
        self.cells[Self::index(column, page)] = value;
    }

    /// All columns of one page, or `None` if `page` is off the panel.
    pub fn page_row(&self, page: usize) -> Option<&[u8]> {
        if page >= PAGES {
            return None;
        }
        self.cells.get(Self::index(0, page)..Self::index(0, page + 1))
    }

    /// Whether the pixel at (`x`, `y`) is lit. Off-panel pixels read as dark.
    pub fn pixel(&self, x: usize, y: usize) -> bool {
        self.get(x, y / 8).is_some_and(|cell| cell & (1 << (y % 8)) != 0)
    }

    /// Set every cell to zero.
    pub fn clear(&mut self) {
        self.cells.fill(0);
    }

    /// `true` if no pixel is lit.
    pub fn is_blank(&self) -> bool {
        self.cells.iter().all(|&b| b == 0)
    }

    /// The serialized frame: page 0's columns, then page 1's, and so on.
    pub fn as_bytes(&self) -> &[u8; BUFFER_SIZE] {
        &self.cells
    }
}
