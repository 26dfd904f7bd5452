//! Frame transmission.
//!
//! A flush always rewrites the whole panel: the address windows are reset in
//! command mode, then the page-major frame goes out as one data burst.

use display_interface::DisplayError;
use embedded_hal::digital::OutputPin;
use embedded_hal_async::spi::SpiDevice;

use crate::commands::{RESET_COLUMN_ADDRESS, RESET_PAGE_ADDRESS};
use crate::framebuffer::Framebuffer;
use crate::interface::SpiInterface;

/// Send `frame` to the panel.
pub(crate) async fn transmit<SPI, DC, RST>(
    interface: &mut SpiInterface<SPI, DC, RST>,
    frame: &Framebuffer,
) -> Result<(), DisplayError>
where
    SPI: SpiDevice,
    DC: OutputPin,
    RST: OutputPin,
{
    interface.command(&RESET_COLUMN_ADDRESS).await?;
    interface.command(&RESET_PAGE_ADDRESS).await?;
    interface.data(frame.as_bytes()).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::framebuffer::{BUFFER_SIZE, PAGES, WIDTH};
    use crate::mock::bench;
    use crate::raster::render_lines;
    use embassy_futures::block_on;
    use lumen_glyphs::FONT_16PX;

    #[test]
    fn resets_address_windows_then_sends_frame() {
        let (log, spi, dc, rst, _delay) = bench();
        let mut iface = SpiInterface::new(spi, dc, rst);
        let mut fb = Framebuffer::new();
        render_lines(&mut fb, &FONT_16PX, ["AB"]);

        block_on(transmit(&mut iface, &fb)).unwrap();

        let writes = log.writes();
        assert_eq!(writes.len(), 3);
        assert_eq!(writes[0], (false, vec![0x21, 0x00, 0x7F]));
        assert_eq!(writes[1], (false, vec![0x22, 0x00, 0x07]));
        assert!(writes[2].0);
        assert_eq!(writes[2].1.len(), WIDTH * PAGES);
        assert_eq!(writes[2].1.as_slice(), fb.as_bytes().as_slice());
    }

    #[test]
    fn payload_unpacks_to_the_same_grid() {
        let (log, spi, dc, rst, _delay) = bench();
        let mut iface = SpiInterface::new(spi, dc, rst);
        let mut fb = Framebuffer::new();
        render_lines(&mut fb, &FONT_16PX, ["Hello", "world", "42.0%"]);

        block_on(transmit(&mut iface, &fb)).unwrap();

        let payload = log.writes().pop().unwrap().1;
        let mut bytes = [0u8; BUFFER_SIZE];
        bytes.copy_from_slice(&payload);
        assert_eq!(Framebuffer::from_bytes(&bytes), fb);
    }

    #[test]
    fn failed_address_reset_sends_no_data() {
        let (log, spi, dc, rst, _delay) = bench();
        let mut iface = SpiInterface::new(spi, dc, rst);

        log.fail_after_writes(1);
        let err = block_on(transmit(&mut iface, &Framebuffer::new())).unwrap_err();
        assert!(matches!(err, DisplayError::BusWriteError));
        assert_eq!(log.writes().len(), 1);
    }
}
