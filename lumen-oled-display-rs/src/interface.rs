//! Low-level SPI + D/C + RST primitives.
//!
//! The D/C line is driven before **every** bus write, so the controller's
//! command/data interpretation never depends on what the previous call left
//! behind.
//!
//! This module is crate-private; consumers go through
//! [`OledDriver`](crate::OledDriver).

use display_interface::DisplayError;
use embedded_hal::digital::OutputPin;
use embedded_hal_async::delay::DelayNs;
use embedded_hal_async::spi::SpiDevice;

/// Owns the serial bus and both control lines.
pub(crate) struct SpiInterface<SPI, DC, RST> {
    spi: SPI,
    /// Data/command select: low for commands, high for data.
    dc: DC,
    /// Active-low hardware reset.
    rst: RST,
}

impl<SPI, DC, RST> SpiInterface<SPI, DC, RST> {
    pub fn new(spi: SPI, dc: DC, rst: RST) -> Self {
        Self { spi, dc, rst }
    }

    /// Hand the bus and lines back to the caller.
    pub fn release(self) -> (SPI, DC, RST) {
        (self.spi, self.dc, self.rst)
    }
}

impl<SPI, DC, RST> SpiInterface<SPI, DC, RST>
where
    SPI: SpiDevice,
    DC: OutputPin,
    RST: OutputPin,
{
    /// Drive both control lines to their idle levels (command mode, reset
    /// released). Fails if either line refuses the change.
    pub fn acquire(&mut self) -> Result<(), DisplayError> {
        self.dc.set_low().map_err(|_| DisplayError::DCError)?;
        self.rst.set_high().map_err(|_| DisplayError::RSError)
    }

    /// Pulse RST low for `pulse_us`, release it, then wait `settle_ms`.
    ///
    /// The controller ignores commands until the settle time has elapsed.
    pub async fn reset<D: DelayNs>(
        &mut self,
        delay: &mut D,
        pulse_us: u32,
        settle_ms: u32,
    ) -> Result<(), DisplayError> {
        self.rst.set_low().map_err(|_| DisplayError::RSError)?;
        delay.delay_us(pulse_us).await;
        self.rst.set_high().map_err(|_| DisplayError::RSError)?;
        delay.delay_ms(settle_ms).await;
        Ok(())
    }

    /// Send one command with its parameters in command mode.
    pub async fn command(&mut self, bytes: &[u8]) -> Result<(), DisplayError> {
        self.dc.set_low().map_err(|_| DisplayError::DCError)?;
        self.spi
            .write(bytes)
            .await
            .map_err(|_| DisplayError::BusWriteError)
    }

    /// Send a data burst in data mode.
    pub async fn data(&mut self, bytes: &[u8]) -> Result<(), DisplayError> {
        self.dc.set_high().map_err(|_| DisplayError::DCError)?;
        self.spi
            .write(bytes)
            .await
            .map_err(|_| DisplayError::BusWriteError)
    }
}
