//! Classifier status example
//!
//! Standalone hardware demonstration for the Raspberry Pi Pico 2: an SSD1306
//! on SPI0 shows the latest result of a (simulated) image classifier. Two
//! producers write into one [`StatusSignal`]; the display task draws only
//! the newest snapshot, at most 30 times a second.
//!
//! # Wiring
//!
//! | Signal    | Pico 2 Pin | Notes                  |
//! |-----------|------------|------------------------|
//! | SPI0 SCK  | GP18       |                        |
//! | SPI0 MOSI | GP19       |                        |
//! | OLED CS   | GP17       | active-low             |
//! | OLED DC   | GP16       | low = command          |
//! | OLED RST  | GP20       | active-low             |
//! | OLED VCC  | 3V3        |                        |
//! | OLED GND  | GND        |                        |

#![no_std]
#![no_main]

use defmt::*;
use embassy_embedded_hal::shared_bus::asynch::spi::SpiDevice;
use embassy_executor::Spawner;
use embassy_rp::block::ImageDef;
use embassy_rp::gpio::{Level, Output};
use embassy_rp::peripherals::SPI0;
use embassy_rp::spi::{self, Phase, Polarity, Spi};
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::mutex::Mutex;
use embassy_time::{Delay, Duration, Timer};
use static_cell::StaticCell;
use {defmt_rtt as _, panic_probe as _};

use lumen_oled_display_rs::commands::SPI_MAX_FREQUENCY_HZ;
use lumen_oled_display_rs::{display_update_task, DisplayConfig, OledDriver, StatusLines, StatusSignal};

/// Tell the RP2350 Boot ROM about our application.
#[link_section = ".start_block"]
#[used]
pub static IMAGE_DEF: ImageDef = embassy_rp::block::ImageDef::secure_exe();

// ---------------------------------------------------------------------------
// Static storage
// ---------------------------------------------------------------------------

/// SPI0 bus. The OLED reaches it through a SpiDevice that owns CS.
static SPI_BUS: StaticCell<Mutex<CriticalSectionRawMutex, Spi<'static, SPI0, spi::Async>>> =
    StaticCell::new();

/// Latest text for the panel. Written by the producer tasks, drained by
/// the display task.
static STATUS: StatusSignal = StatusSignal::new();

// ---------------------------------------------------------------------------
// Type aliases
// ---------------------------------------------------------------------------

type OledSpi = SpiDevice<'static, CriticalSectionRawMutex, Spi<'static, SPI0, spi::Async>, Output<'static>>;

type Oled = OledDriver<OledSpi, Output<'static>, Output<'static>>;

// ---------------------------------------------------------------------------
// Tasks
// ---------------------------------------------------------------------------

/// Thin wrapper that monomorphises the generic `display_update_task` so it can
/// be spawned as a concrete Embassy task.
#[embassy_executor::task]
async fn oled_task(driver: Oled) {
    display_update_task(driver, Delay, &STATUS).await;
}

/// Stands in for the inference loop: publishes a new result every 400 ms.
#[embassy_executor::task]
async fn classifier_task() {
    const RESULTS: [(&str, f32); 4] = [("cat", 0.875), ("dog", 0.61), ("bird", 0.932), ("person", 0.448)];

    let mut n = 0usize;
    loop {
        let (label, confidence) = RESULTS[n % RESULTS.len()];
        STATUS.signal(StatusLines::from_classification(label, confidence));
        n = n.wrapping_add(1);
        Timer::after(Duration::from_millis(400)).await;
    }
}

/// Occasional manual status line, racing the classifier.
#[embassy_executor::task]
async fn heartbeat_task() {
    let mut beats = 0u32;
    loop {
        Timer::after(Duration::from_secs(5)).await;
        beats = beats.wrapping_add(1);
        let mut lines = StatusLines::from_lines(&["status", "camera ok"]);
        if beats % 2 == 0 {
            lines.push("tick");
        }
        STATUS.signal(lines);
    }
}

// ---------------------------------------------------------------------------
// Main
// ---------------------------------------------------------------------------

#[embassy_executor::main]
async fn main(spawner: Spawner) {
    let p = embassy_rp::init(Default::default());
    info!("classifier-status starting");

    // —— SPI0, mode 3 ———————————————————————————————————————————————————————
    let mut config = spi::Config::default();
    config.frequency = SPI_MAX_FREQUENCY_HZ;
    config.polarity = Polarity::IdleHigh;
    config.phase = Phase::CaptureOnSecondTransition;

    let spi = Spi::new_txonly(p.SPI0, p.PIN_18, p.PIN_19, p.DMA_CH0, config);
    let spi_bus = SPI_BUS.init(Mutex::new(spi));

    let cs = Output::new(p.PIN_17, Level::High);
    let dc = Output::new(p.PIN_16, Level::Low);
    let rst = Output::new(p.PIN_20, Level::High);

    let oled = OledDriver::new(SpiDevice::new(spi_bus, cs), dc, rst, DisplayConfig::default());

    STATUS.signal(StatusLines::from_lines(&["booting"]));

    // —— Spawn tasks ————————————————————————————————————————————————————————
    spawner.spawn(oled_task(oled)).unwrap();
    spawner.spawn(classifier_task()).unwrap();
    spawner.spawn(heartbeat_task()).unwrap();

    info!("All tasks spawned");
}
