//! SSD1306 command bytes and SPI bus parameters.
//!
//! Every command is sent with its parameter bytes as one bus write while
//! the D/C line is low.

use embedded_hal::spi::{Mode, MODE_3};

use crate::framebuffer::{PAGES, WIDTH};

// ---------------------------------------------------------------------------
// Bus parameters
// ---------------------------------------------------------------------------

/// Maximum serial clock per the SSD1306 datasheet.
pub const SPI_MAX_FREQUENCY_HZ: u32 = 10_000_000;

/// Clock idles high, data captured on the rising edge.
pub const SPI_MODE: Mode = MODE_3;

// ---------------------------------------------------------------------------
// Fundamental / hardware configuration commands
// ---------------------------------------------------------------------------

/// Charge pump setting; followed by [`CHARGE_PUMP_ENABLE`].
pub const CHARGE_PUMP: u8 = 0x8D;
/// Parameter for [`CHARGE_PUMP`]: enable the internal DC-DC converter.
pub const CHARGE_PUMP_ENABLE: u8 = 0x14;

/// Memory addressing mode; followed by [`ADDRESSING_HORIZONTAL`].
pub const MEMORY_MODE: u8 = 0x20;
/// Parameter for [`MEMORY_MODE`]: column pointer wraps into the next page.
pub const ADDRESSING_HORIZONTAL: u8 = 0x00;

/// Map column 127 to SEG0 (mirror horizontally).
pub const SEGMENT_REMAP: u8 = 0xA1;
/// Scan COM[N-1] to COM0 (mirror vertically).
pub const COM_SCAN_DEC: u8 = 0xC8;

/// Contrast control; followed by one level byte.
pub const SET_CONTRAST: u8 = 0x81;

/// Panel on, showing display RAM.
pub const DISPLAY_ON: u8 = 0xAF;
/// Panel off (sleep); display RAM is kept.
pub const DISPLAY_OFF: u8 = 0xAE;

// ---------------------------------------------------------------------------
// Addressing commands
// ---------------------------------------------------------------------------

/// Column address window; followed by start and end column.
pub const COLUMN_ADDRESS: u8 = 0x21;
/// Page address window; followed by start and end page.
pub const PAGE_ADDRESS: u8 = 0x22;

/// Reset the column window to the full panel width.
pub const RESET_COLUMN_ADDRESS: [u8; 3] = [COLUMN_ADDRESS, 0x00, (WIDTH - 1) as u8];
/// Reset the page window to the full panel height.
pub const RESET_PAGE_ADDRESS: [u8; 3] = [PAGE_ADDRESS, 0x00, (PAGES - 1) as u8];

// ---------------------------------------------------------------------------
// Sequences
// ---------------------------------------------------------------------------

/// Power-up configuration, sent in this order once the reset has settled.
pub const INIT_SEQUENCE: [&[u8]; 5] = [
    &[CHARGE_PUMP, CHARGE_PUMP_ENABLE],
    &[MEMORY_MODE, ADDRESSING_HORIZONTAL],
    &[SEGMENT_REMAP],
    &[COM_SCAN_DEC],
    &[DISPLAY_ON],
];
