//! Async SPI text driver for the SSD1306 (128×64) OLED.
//!
//! This crate provides [`OledDriver`], which owns the panel's SPI device and
//! its D/C and RST lines, keeps a page-packed [`Framebuffer`] in RAM and
//! redraws the whole panel from a list of text lines using a
//! [`lumen_glyphs::GlyphTable`]. With the `task` feature,
//! [`display_update_task`] drives it from a [`StatusSignal`].
//!
//! # Quick Start
//!
//! ```ignore
//! use lumen_oled_display_rs::{display_update_task, DisplayConfig, OledDriver, StatusLines, StatusSignal};
//!
//! static STATUS: StatusSignal = StatusSignal::new();
//!
//! // In your Embassy main:
//! let oled = OledDriver::new(spi_device, dc, rst, DisplayConfig::default());
//! spawner.spawn(oled_task(oled)).unwrap();
//! STATUS.signal(StatusLines::from_classification("cat", 0.875));
//!
//! // Thin task wrapper (Embassy tasks cannot be generic):
//! #[embassy_executor::task]
//! async fn oled_task(driver: OledDriver<MySpi, Output<'static>, Output<'static>>) {
//!     display_update_task(driver, embassy_time::Delay, &STATUS).await;
//! }
//! ```
//!
//! # Crate Features
//!
//! - **`defmt`**: structured logging via [`defmt`].
//! - **`task`**: [`display_update_task`] and [`StatusSignal`] (Embassy).

#![cfg_attr(not(test), no_std)]

pub mod commands;
#[cfg(any(feature = "task", test))]
pub mod display_task;
pub mod driver;
pub mod error;
pub mod framebuffer;
mod interface;
pub mod layout;
#[cfg(test)]
mod mock;
pub mod raster;
pub mod state;
mod transmit;

// ── Re-exports for convenience ───────────────────────────────────────────

#[cfg(any(feature = "task", test))]
pub use display_task::{display_update_task, StatusSignal};
pub use driver::OledDriver;
pub use error::OledError;
pub use framebuffer::Framebuffer;
pub use layout::{status_changed, DisplayConfig, StatusChanges, StatusLines};
pub use raster::{draw_char, draw_line, render_lines};
pub use state::{DeviceEvent, DeviceStatus};
