//! Error types for the OLED display driver.

use core::fmt;

use display_interface::DisplayError;

/// Errors that can occur during OLED display operations.
///
/// Bus and control-line failures are carried as [`DisplayError`]
/// (`BusWriteError`, `DCError`, `RSError`), so this enum is non-generic
/// over the SPI and pin error types.
#[derive(Debug)]
pub enum OledError {
    /// A bus write or control-line change failed after initialisation.
    Display(DisplayError),
    /// The bus or control lines could not be acquired.
    AcquisitionFailed,
    /// Reset or the configuration sequence failed; the display is now
    /// unavailable.
    InitializationFailed(DisplayError),
    /// An operation was attempted before [`OledDriver::init()`](crate::OledDriver::init).
    NotInitialized,
    /// [`OledDriver::init()`](crate::OledDriver::init) was called on a ready display.
    AlreadyInitialized,
    /// The display is unavailable and ignores requests.
    Unavailable,
}

impl From<DisplayError> for OledError {
    fn from(e: DisplayError) -> Self {
        OledError::Display(e)
    }
}

impl fmt::Display for OledError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            OledError::Display(e) => write!(f, "display interface error: {:?}", e),
            OledError::AcquisitionFailed => write!(f, "display bus or control lines unavailable"),
            OledError::InitializationFailed(e) => {
                write!(f, "display initialisation failed: {:?}", e)
            }
            OledError::NotInitialized => write!(f, "display not initialised"),
            OledError::AlreadyInitialized => write!(f, "display already initialised"),
            OledError::Unavailable => write!(f, "display unavailable"),
        }
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for OledError {
    fn format(&self, f: defmt::Formatter) {
        match self {
            OledError::Display(_e) => defmt::write!(f, "Display interface error"),
            OledError::AcquisitionFailed => defmt::write!(f, "Acquisition failed"),
            OledError::InitializationFailed(_e) => defmt::write!(f, "Initialization failed"),
            OledError::NotInitialized => defmt::write!(f, "Not initialized"),
            OledError::AlreadyInitialized => defmt::write!(f, "Already initialized"),
            OledError::Unavailable => defmt::write!(f, "Unavailable"),
        }
    }
}
