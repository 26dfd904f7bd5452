//! Bitmap glyph tables for page-addressed monochrome displays.
//!
//! Controllers such as the SSD1306 address their memory in **pages**: one
//! byte covers an 8-pixel vertical strip of a single column, bit 0 at the
//! top. Glyphs in this crate are stored in exactly that shape so a renderer
//! can copy them into a framebuffer byte-for-byte.
//!
//! # Layout of a glyph
//!
//! A [`Glyph`] that is `width` pixels wide and `height_pages` pages tall
//! carries `width * height_pages` bytes, page-row-major:
//!
//! ```text
//! data = [ page 0: col 0, col 1, .. col w-1 | page 1: col 0, .. col w-1 | .. ]
//! ```
//!
//! # Tables
//!
//! A [`GlyphTable`] groups glyphs that share a cell height and an
//! inter-glyph spacing. Every entry is checked when the table is built, so a
//! malformed descriptor can never reach a renderer. The built-in
//! [`FONT_16PX`] is validated at compile time.
//!
//! # Crate Features
//!
//! - **`defmt`**: [`defmt::Format`] on [`GlyphError`].

#![cfg_attr(not(test), no_std)]

mod error;
mod fonts;
mod glyph;
mod table;

pub use error::GlyphError;
pub use fonts::FONT_16PX;
pub use glyph::Glyph;
pub use table::GlyphTable;

/// Height of one display page in pixels.
pub const PAGE_HEIGHT_PX: usize = 8;
