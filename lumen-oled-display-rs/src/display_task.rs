//! Display update task.
//!
//! [`display_update_task`] owns the driver and redraws the panel whenever a
//! producer signals new [`StatusLines`]. Producers never wait on the panel:
//! a newer snapshot simply replaces an undrawn one in the [`StatusSignal`].

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::signal::Signal;
use embassy_time::{Duration, Timer};
use embedded_hal::digital::OutputPin;
use embedded_hal_async::delay::DelayNs;
use embedded_hal_async::spi::SpiDevice;

use crate::driver::OledDriver;
use crate::layout::{status_changed, StatusLines};

/// Latest-value mailbox between status producers and the display task.
pub type StatusSignal = Signal<CriticalSectionRawMutex, StatusLines>;

/// Initialise `driver`, then draw every snapshot signalled on `status`.
///
/// This is a regular `async fn`, **not** an Embassy `#[task]`. Wrap it in
/// a thin concrete task, since Embassy tasks cannot be generic:
///
/// ```ignore
/// static STATUS: StatusSignal = StatusSignal::new();
///
/// #[embassy_executor::task]
/// async fn oled_task(driver: OledDriver<MySpi, Output<'static>, Output<'static>>) {
///     display_update_task(driver, embassy_time::Delay, &STATUS).await;
/// }
/// ```
///
/// # Control flow
///
/// 1. Initialise the display hardware.
/// 2. Loop:
///    - wait for the next snapshot;
///    - skip it if it matches the last frame drawn;
///    - render and flush;
///    - sleep for the driver's update period, so bursts of updates are
///      coalesced into at most `update_frequency_hz` redraws (no sleep when
///      the frequency is 0).
///
/// # Errors
///
/// * Initialisation failure: logged. The loop still runs so producers
///   keep draining into the signal; every render is a no-op.
/// * Render / flush failure: logged, and the same snapshot is retried on
///   the next signal.
pub async fn display_update_task<SPI, DC, RST, D>(
    mut driver: OledDriver<SPI, DC, RST>,
    mut delay: D,
    status: &'static StatusSignal,
) where
    SPI: SpiDevice,
    DC: OutputPin,
    RST: OutputPin,
    D: DelayNs,
{
    match driver.init(&mut delay).await {
        Ok(()) => {
            #[cfg(feature = "defmt")]
            defmt::info!("OLED initialised");
        }
        Err(_e) => {
            #[cfg(feature = "defmt")]
            defmt::error!("OLED init failed: {}", _e);
        }
    }

    let period = Duration::from_millis(driver.config().update_period_ms());
    let mut last_drawn: Option<StatusLines> = None;

    loop {
        let next = status.wait().await;

        if last_drawn
            .as_ref()
            .is_some_and(|last| !status_changed(last, &next))
        {
            continue;
        }

        match driver.render_lines(next.lines()).await {
            Ok(()) => last_drawn = Some(next),
            Err(_e) => {
                #[cfg(feature = "defmt")]
                defmt::warn!("OLED update failed: {}", _e);
            }
        }

        if period > Duration::from_ticks(0) {
            Timer::after(period).await;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::framebuffer::Framebuffer;
    use crate::layout::DisplayConfig;
    use crate::mock::{bench, Log};
    use crate::raster::render_lines;
    use embassy_futures::select::select;
    use embassy_futures::{block_on, yield_now};
    use lumen_glyphs::FONT_16PX;

    /// Redraw as fast as snapshots arrive.
    fn unthrottled() -> DisplayConfig {
        DisplayConfig {
            update_frequency_hz: 0,
            ..DisplayConfig::default()
        }
    }

    /// Let the task catch up with whatever was just signalled.
    async fn settle() {
        for _ in 0..8 {
            yield_now().await;
        }
    }

    fn frames(log: &Log) -> std::vec::Vec<std::vec::Vec<u8>> {
        log.writes()
            .into_iter()
            .filter(|(data, _)| *data)
            .map(|(_, bytes)| bytes)
            .collect()
    }

    fn frame_of(lines: &[&str]) -> std::vec::Vec<u8> {
        let mut fb = Framebuffer::new();
        render_lines(&mut fb, &FONT_16PX, lines);
        fb.as_bytes().to_vec()
    }

    #[test]
    fn identical_snapshots_are_drawn_once() {
        static STATUS: StatusSignal = StatusSignal::new();
        let (log, spi, dc, rst, delay) = bench();
        let oled = OledDriver::new(spi, dc, rst, unthrottled());

        let script = async {
            STATUS.signal(StatusLines::from_lines(&["cat"]));
            settle().await;
            STATUS.signal(StatusLines::from_lines(&["cat"]));
            settle().await;
            STATUS.signal(StatusLines::from_classification("dog", 0.5));
            settle().await;
        };
        block_on(select(display_update_task(oled, delay, &STATUS), script));

        let drawn = frames(&log);
        assert_eq!(drawn.len(), 2);
        assert_eq!(drawn[0], frame_of(&["cat"]));
        assert_eq!(drawn[1], frame_of(&["dog", "50.0%"]));
    }

    #[test]
    fn failed_render_is_retried_on_next_signal() {
        static STATUS: StatusSignal = StatusSignal::new();
        let (log, spi, dc, rst, delay) = bench();
        let oled = OledDriver::new(spi, dc, rst, unthrottled());

        let script = async {
            // Init completed on the task's first poll.
            log.fail_next_writes(1);
            STATUS.signal(StatusLines::from_lines(&["retry"]));
            settle().await;
            assert!(frames(&log).is_empty());

            STATUS.signal(StatusLines::from_lines(&["retry"]));
            settle().await;
        };
        block_on(select(display_update_task(oled, delay, &STATUS), script));

        assert_eq!(frames(&log), vec![frame_of(&["retry"])]);
    }

    #[test]
    fn failed_init_keeps_draining_without_traffic() {
        static STATUS: StatusSignal = StatusSignal::new();
        let (log, spi, dc, rst, delay) = bench();
        log.fail_pins(true);
        let oled = OledDriver::new(spi, dc, rst, unthrottled());

        let script = async {
            STATUS.signal(StatusLines::from_lines(&["one"]));
            settle().await;
            assert!(!STATUS.signaled());
            STATUS.signal(StatusLines::from_lines(&["two"]));
            settle().await;
            assert!(!STATUS.signaled());
        };
        block_on(select(display_update_task(oled, delay, &STATUS), script));

        assert!(log.events().is_empty());
    }

    #[test]
    fn redraws_are_rate_limited() {
        static STATUS: StatusSignal = StatusSignal::new();
        let (log, spi, dc, rst, delay) = bench();
        let oled = OledDriver::new(spi, dc, rst, DisplayConfig::default());

        let script = async {
            STATUS.signal(StatusLines::from_lines(&["first"]));
            settle().await;
            STATUS.signal(StatusLines::from_lines(&["second"]));
            settle().await;
            assert_eq!(frames(&log).len(), 1);

            embassy_time::MockDriver::get().advance(Duration::from_millis(34));
            settle().await;
        };
        block_on(select(display_update_task(oled, delay, &STATUS), script));

        assert_eq!(
            frames(&log),
            vec![frame_of(&["first"]), frame_of(&["second"])]
        );
    }
}
