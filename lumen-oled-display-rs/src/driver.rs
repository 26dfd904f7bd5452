//! Core OLED driver: SSD1306 lifecycle, framebuffer ownership and flush.
//!
//! [`OledDriver`] manages the display lifecycle: construction without bus
//! traffic, explicit async initialisation (reset + configuration), text
//! rendering and full-frame flushes.

use core::mem;

use embedded_hal::digital::OutputPin;
use embedded_hal_async::delay::DelayNs;
use embedded_hal_async::spi::SpiDevice;
use lumen_glyphs::{GlyphTable, FONT_16PX};

use crate::commands::{DISPLAY_OFF, DISPLAY_ON, INIT_SEQUENCE, SET_CONTRAST};
use crate::error::OledError;
use crate::framebuffer::Framebuffer;
use crate::interface::SpiInterface;
use crate::layout::DisplayConfig;
use crate::raster;
use crate::state::{DeviceEvent, DeviceStatus};
use crate::transmit::transmit;

/// The driver's whole lifecycle: the hardware (if any) and where it is in
/// bring-up. Only `Attached` with status `Ready` reaches the render path.
enum Device<SPI, DC, RST> {
    Attached {
        interface: SpiInterface<SPI, DC, RST>,
        status: DeviceStatus,
    },
    /// The platform could not provide the bus or lines.
    Absent { acquisition_reported: bool },
}

impl<SPI, DC, RST> Device<SPI, DC, RST> {
    fn status(&self) -> DeviceStatus {
        match self {
            Device::Attached { status, .. } => *status,
            Device::Absent { .. } => DeviceStatus::Unavailable,
        }
    }

    fn ready(&mut self) -> Result<&mut SpiInterface<SPI, DC, RST>, OledError> {
        match self {
            Device::Attached {
                interface,
                status: DeviceStatus::Ready,
            } => Ok(interface),
            Device::Attached {
                status: DeviceStatus::Uninitialized,
                ..
            } => Err(OledError::NotInitialized),
            _ => Err(OledError::Unavailable),
        }
    }
}

fn advance(status: &mut DeviceStatus, event: DeviceEvent) {
    let next = status.transition(event);
    #[cfg(feature = "defmt")]
    if next != *status {
        defmt::debug!("OLED {} -> {} on {}", *status, next, event);
    }
    *status = next;
}

/// Walks the status through bring-up. Unless [`finish()`](Self::finish) is
/// reached, dropping it marks the display unavailable; this covers both an
/// early error return and a cancelled `init()` future.
struct BringUp<'a> {
    status: &'a mut DeviceStatus,
    finished: bool,
}

impl<'a> BringUp<'a> {
    fn new(status: &'a mut DeviceStatus) -> Self {
        Self {
            status,
            finished: false,
        }
    }

    fn advance(&mut self, event: DeviceEvent) {
        advance(self.status, event);
    }

    fn finish(mut self) {
        self.advance(DeviceEvent::ConfigurationAccepted);
        self.finished = true;
    }
}

impl Drop for BringUp<'_> {
    fn drop(&mut self) {
        if !self.finished {
            #[cfg(feature = "defmt")]
            defmt::error!("OLED bring-up abandoned in {}", *self.status);
            self.advance(DeviceEvent::Failed);
        }
    }
}

/// Async driver for an SSD1306 128×64 OLED on SPI with D/C and RST lines.
///
/// # Lifecycle
///
/// 1. [`OledDriver::new()`]: takes ownership of the bus and lines, no traffic.
/// 2. [`OledDriver::init()`]: acquires the lines, pulses reset, waits for
///    the panel to settle and sends the configuration sequence.
/// 3. [`OledDriver::render_lines()`]: redraws the whole panel.
/// 4. [`OledDriver::release()`]: hands the hardware back.
///
/// If bring-up fails, or the `init()` future is dropped before it
/// completes, the driver becomes [`DeviceStatus::Unavailable`] for good and
/// every render is a silent no-op, so the application keeps running
/// without a display.
///
/// # Concurrency
///
/// Rendering takes `&mut self`: the framebuffer and both control lines are
/// shared mutable state with no internal locking, and a render must not
/// interleave with another render or flush. Callers with several producers
/// serialise them outside the driver, e.g. through the display task's
/// status signal (`task` feature) or a mutex around the driver.
///
/// # Example
///
/// ```no_run
/// use lumen_oled_display_rs::{DisplayConfig, OledDriver};
///
/// # async fn example(
/// #     spi: impl embedded_hal_async::spi::SpiDevice,
/// #     dc: impl embedded_hal::digital::OutputPin,
/// #     rst: impl embedded_hal::digital::OutputPin,
/// #     mut delay: impl embedded_hal_async::delay::DelayNs,
/// # ) {
/// let mut oled = OledDriver::new(spi, dc, rst, DisplayConfig::default());
/// if oled.init(&mut delay).await.is_ok() {
///     oled.render_lines(["cat", "87.5%"]).await.ok();
/// }
/// # }
/// ```
pub struct OledDriver<SPI, DC, RST> {
    device: Device<SPI, DC, RST>,
    framebuffer: Framebuffer,
    font: GlyphTable,
    config: DisplayConfig,
}

impl<SPI, DC, RST> OledDriver<SPI, DC, RST> {
    /// Construct an uninitialised driver around already-acquired hardware.
    ///
    /// No pin or bus traffic is generated. You **must** call
    /// [`init()`](Self::init) before rendering.
    ///
    /// # Arguments
    /// * `spi`: SPI device (takes ownership; chip select is its concern).
    /// * `dc`: data/command select line.
    /// * `rst`: active-low reset line.
    /// * `config`: bring-up timing and task settings.
    pub fn new(spi: SPI, dc: DC, rst: RST, config: DisplayConfig) -> Self {
        Self::with_device(
            Device::Attached {
                interface: SpiInterface::new(spi, dc, rst),
                status: DeviceStatus::Uninitialized,
            },
            config,
        )
    }

    /// A driver for a platform that could not provide the bus or lines.
    ///
    /// Starts [`Unavailable`](DeviceStatus::Unavailable); the first
    /// [`init()`](Self::init) reports [`OledError::AcquisitionFailed`].
    pub fn absent(config: DisplayConfig) -> Self {
        Self::with_device(
            Device::Absent {
                acquisition_reported: false,
            },
            config,
        )
    }

    fn with_device(device: Device<SPI, DC, RST>, config: DisplayConfig) -> Self {
        Self {
            device,
            framebuffer: Framebuffer::new(),
            font: FONT_16PX,
            config,
        }
    }

    /// Render with `font` instead of the built-in 16 px font.
    pub fn with_font(mut self, font: GlyphTable) -> Self {
        self.font = font;
        self
    }

    /// Current lifecycle state. No bus traffic.
    pub fn status(&self) -> DeviceStatus {
        self.device.status()
    }

    /// `true` once [`init()`](Self::init) has succeeded.
    pub fn is_ready(&self) -> bool {
        self.status().accepts_frames()
    }

    /// Bring-up timing and update rate this driver was built with.
    pub fn config(&self) -> &DisplayConfig {
        &self.config
    }

    /// Glyphs used by [`render_lines()`](Self::render_lines).
    pub fn font(&self) -> &GlyphTable {
        &self.font
    }

    /// The last rendered frame.
    pub fn framebuffer(&self) -> &Framebuffer {
        &self.framebuffer
    }

    /// Clear the in-memory frame buffer.
    ///
    /// Does **not** touch the bus; the panel is unchanged until
    /// [`flush()`](Self::flush).
    pub fn clear_buffer(&mut self) {
        self.framebuffer.clear();
    }

    /// Tear down: return the bus and both lines, or `None` if the driver
    /// never owned hardware.
    pub fn release(self) -> Option<(SPI, DC, RST)> {
        match self.device {
            Device::Attached { interface, .. } => Some(interface.release()),
            Device::Absent { .. } => None,
        }
    }
}

impl<SPI, DC, RST> OledDriver<SPI, DC, RST>
where
    SPI: SpiDevice,
    DC: OutputPin,
    RST: OutputPin,
{
    /// Bring the display up.
    ///
    /// Drives D/C low and RST high, pulses RST low for
    /// `config.reset_pulse_us`, waits `config.reset_settle_ms`, then sends
    /// charge pump on, horizontal addressing, segment remap, reversed COM
    /// scan and display on (plus contrast if configured), each in command
    /// mode.
    ///
    /// Any failure leaves the driver
    /// [`Unavailable`](DeviceStatus::Unavailable); later renders are
    /// no-ops. So does dropping the returned future before it completes,
    /// e.g. under a timeout.
    ///
    /// # Errors
    ///
    /// * [`OledError::AcquisitionFailed`] if a control line cannot be driven,
    ///   or (once) for a driver built with [`absent()`](Self::absent).
    /// * [`OledError::InitializationFailed`] on a bus or line failure during
    ///   reset or configuration.
    /// * [`OledError::AlreadyInitialized`] if the display is already ready.
    /// * [`OledError::Unavailable`] on any later call after a failure.
    pub async fn init<D: DelayNs>(&mut self, delay: &mut D) -> Result<(), OledError> {
        let (interface, status) = match &mut self.device {
            Device::Absent {
                acquisition_reported,
            } => {
                return Err(if mem::replace(acquisition_reported, true) {
                    OledError::Unavailable
                } else {
                    OledError::AcquisitionFailed
                });
            }
            Device::Attached { interface, status } => {
                let current = *status;
                match current {
                    DeviceStatus::Uninitialized => (interface, status),
                    DeviceStatus::Ready => return Err(OledError::AlreadyInitialized),
                    _ => return Err(OledError::Unavailable),
                }
            }
        };
        let config = &self.config;
        let mut bring_up = BringUp::new(status);

        if interface.acquire().is_err() {
            #[cfg(feature = "defmt")]
            defmt::error!("OLED control lines unavailable");
            return Err(OledError::AcquisitionFailed);
        }
        bring_up.advance(DeviceEvent::LinesAcquired);

        interface
            .reset(delay, config.reset_pulse_us, config.reset_settle_ms)
            .await
            .map_err(OledError::InitializationFailed)?;
        bring_up.advance(DeviceEvent::ResetSettled);

        for command in INIT_SEQUENCE {
            interface
                .command(command)
                .await
                .map_err(OledError::InitializationFailed)?;
        }
        if let Some(level) = config.contrast {
            interface
                .command(&[SET_CONTRAST, level])
                .await
                .map_err(OledError::InitializationFailed)?;
        }

        bring_up.finish();
        Ok(())
    }

    /// Replace the panel contents with `lines`, one per text row.
    ///
    /// Clears the frame buffer, draws line `i` on row `i` from column 0
    /// (silently truncating at the first unmapped character or the right
    /// edge; rows past the bottom draw nothing), then flushes.
    ///
    /// **Not safe for concurrent invocation**; see the type-level docs.
    ///
    /// # Errors
    ///
    /// * [`OledError::NotInitialized`] before [`init()`](Self::init); the
    ///   frame buffer is left as it was.
    /// * [`OledError::Display`] if the flush fails. The display stays ready
    ///   and the next call is attempted normally.
    ///
    /// An unavailable display returns `Ok(())` without doing anything.
    pub async fn render_lines<I>(&mut self, lines: I) -> Result<(), OledError>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        match self.status() {
            DeviceStatus::Ready => {}
            DeviceStatus::Unavailable => return Ok(()),
            _ => {
                #[cfg(feature = "defmt")]
                defmt::warn!("OLED render before init");
                return Err(OledError::NotInitialized);
            }
        }

        raster::render_lines(&mut self.framebuffer, &self.font, lines);
        self.flush().await
    }

    /// Transfer the frame buffer to the panel.
    ///
    /// At 10 MHz a full 1024-byte frame takes roughly 1 ms.
    ///
    /// # Errors
    ///
    /// [`OledError::NotInitialized`] or [`OledError::Unavailable`] outside
    /// the ready state, [`OledError::Display`] on a bus-level failure (the
    /// display stays ready).
    pub async fn flush(&mut self) -> Result<(), OledError> {
        let interface = self.device.ready()?;
        transmit(interface, &self.framebuffer).await.map_err(|e| {
            #[cfg(feature = "defmt")]
            defmt::warn!("OLED flush failed");
            OledError::Display(e)
        })
    }

    /// Switch the panel on or off without touching its memory.
    ///
    /// # Errors
    ///
    /// As for [`flush()`](Self::flush).
    pub async fn set_display_on(&mut self, on: bool) -> Result<(), OledError> {
        let command = if on { DISPLAY_ON } else { DISPLAY_OFF };
        self.device.ready()?.command(&[command]).await?;
        Ok(())
    }

    /// Set panel contrast (0–255).
    ///
    /// # Errors
    ///
    /// As for [`flush()`](Self::flush).
    pub async fn set_contrast(&mut self, level: u8) -> Result<(), OledError> {
        self.device.ready()?.command(&[SET_CONTRAST, level]).await?;
        Ok(())
    }
}
