//! Recording stand-ins for the SPI bus, the two control lines and the delay
//! provider. All of them append to one shared, ordered event log so tests
//! can check the exact interleaving the panel would see.

use std::cell::RefCell;
use std::rc::Rc;
use std::vec::Vec;

use embedded_hal::digital;
use embedded_hal::spi::{self, Operation};

/// One observable hardware action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// D/C line driven (`true` = high = data mode).
    Dc(bool),
    /// RST line driven.
    Rst(bool),
    /// Bytes written on the bus, tagged with the D/C level at write time.
    Write { data: bool, bytes: Vec<u8> },
    /// Delay requested, in nanoseconds.
    Delay(u64),
}

#[derive(Default)]
struct State {
    events: Vec<Event>,
    dc_high: bool,
    /// Upcoming bus writes that fail.
    failing_writes: usize,
    /// Fail once this many writes have succeeded.
    fail_after: Option<usize>,
    successful_writes: usize,
    pins_fail: bool,
}

/// Shared handle onto the event log and fault injection switches.
#[derive(Clone, Default)]
pub struct Log(Rc<RefCell<State>>);

impl Log {
    pub fn events(&self) -> Vec<Event> {
        self.0.borrow().events.clone()
    }

    /// Only the bus writes, as `(data_mode, bytes)`.
    pub fn writes(&self) -> Vec<(bool, Vec<u8>)> {
        self.0
            .borrow()
            .events
            .iter()
            .filter_map(|e| match e {
                Event::Write { data, bytes } => Some((*data, bytes.clone())),
                _ => None,
            })
            .collect()
    }

    pub fn clear(&self) {
        self.0.borrow_mut().events.clear();
    }

    pub fn fail_next_writes(&self, count: usize) {
        self.0.borrow_mut().failing_writes = count;
    }

    pub fn fail_after_writes(&self, count: usize) {
        self.0.borrow_mut().fail_after = Some(count);
    }

    pub fn fail_pins(&self, fail: bool) {
        self.0.borrow_mut().pins_fail = fail;
    }
}

pub struct MockSpi(Log);

impl spi::ErrorType for MockSpi {
    type Error = spi::ErrorKind;
}

impl embedded_hal_async::spi::SpiDevice for MockSpi {
    async fn transaction(&mut self, operations: &mut [Operation<'_, u8>]) -> Result<(), Self::Error> {
        let mut state = self.0 .0.borrow_mut();
        for op in operations.iter() {
            if let Operation::Write(bytes) = op {
                if state.failing_writes > 0 {
                    state.failing_writes -= 1;
                    return Err(spi::ErrorKind::Other);
                }
                if state.fail_after == Some(state.successful_writes) {
                    state.fail_after = None;
                    return Err(spi::ErrorKind::Other);
                }
                state.successful_writes += 1;
                let data = state.dc_high;
                state.events.push(Event::Write {
                    data,
                    bytes: bytes.to_vec(),
                });
            }
        }
        Ok(())
    }
}

#[derive(Clone, Copy)]
enum Line {
    Dc,
    Rst,
}

pub struct MockPin {
    log: Log,
    line: Line,
}

impl MockPin {
    fn drive(&mut self, high: bool) -> Result<(), digital::ErrorKind> {
        let mut state = self.log.0.borrow_mut();
        if state.pins_fail {
            return Err(digital::ErrorKind::Other);
        }
        match self.line {
            Line::Dc => {
                state.dc_high = high;
                state.events.push(Event::Dc(high));
            }
            Line::Rst => state.events.push(Event::Rst(high)),
        }
        Ok(())
    }
}

impl digital::ErrorType for MockPin {
    type Error = digital::ErrorKind;
}

impl digital::OutputPin for MockPin {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.drive(false)
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.drive(true)
    }
}

pub struct MockDelay(Log);

impl MockDelay {
    fn record(&mut self, ns: u64) {
        self.0 .0.borrow_mut().events.push(Event::Delay(ns));
    }
}

impl embedded_hal_async::delay::DelayNs for MockDelay {
    async fn delay_ns(&mut self, ns: u32) {
        self.record(u64::from(ns));
    }

    async fn delay_us(&mut self, us: u32) {
        self.record(u64::from(us) * 1_000);
    }

    async fn delay_ms(&mut self, ms: u32) {
        self.record(u64::from(ms) * 1_000_000);
    }
}

/// A fresh bus, D/C pin, RST pin and delay sharing one log.
pub fn bench() -> (Log, MockSpi, MockPin, MockPin, MockDelay) {
    let log = Log::default();
    (
        log.clone(),
        MockSpi(log.clone()),
        MockPin {
            log: log.clone(),
            line: Line::Dc,
        },
        MockPin {
            log: log.clone(),
            line: Line::Rst,
        },
        MockDelay(log),
    )
}

/// A delay that never elapses, for abandoning a bring-up mid-way.
pub struct StuckDelay;

impl embedded_hal_async::delay::DelayNs for StuckDelay {
    async fn delay_ns(&mut self, _ns: u32) {
        core::future::pending::<()>().await
    }
}
