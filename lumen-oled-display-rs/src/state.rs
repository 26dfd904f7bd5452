//! Display lifecycle states.
//!
//! The driver's observable status is a function of the current state and a
//! lifecycle event; [`DeviceStatus::transition`] is the single place the
//! rules live.

/// Where the display is in its bring-up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DeviceStatus {
    /// Constructed; no line or bus traffic yet.
    Uninitialized,
    /// Control lines acquired, hardware reset in progress.
    Resetting,
    /// Reset settled, configuration commands being sent.
    Configuring,
    /// Accepting renders and flushes.
    Ready,
    /// Bring-up failed or no hardware attached. Terminal.
    Unavailable,
}

/// Lifecycle events reported by the driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DeviceEvent {
    /// Bus and both control lines are usable.
    LinesAcquired,
    /// Reset pulse done and settle time elapsed.
    ResetSettled,
    /// Every configuration command was accepted by the bus.
    ConfigurationAccepted,
    /// Acquisition, reset or configuration failed.
    Failed,
}

impl DeviceStatus {
    /// Only a ready display accepts frames.
    pub fn accepts_frames(&self) -> bool {
        matches!(self, DeviceStatus::Ready)
    }

    /// `true` for the sink state.
    pub fn is_terminal(&self) -> bool {
        matches!(self, DeviceStatus::Unavailable)
    }

    /// Process an event and return the next state.
    pub fn transition(self, event: DeviceEvent) -> Self {
        use DeviceEvent::*;
        use DeviceStatus::*;

        match (self, event) {
            (Uninitialized, LinesAcquired) => Resetting,
            (Resetting, ResetSettled) => Configuring,
            (Configuring, ConfigurationAccepted) => Ready,

            (Uninitialized | Resetting | Configuring, Failed) => Unavailable,

            // Bus errors after bring-up are local to the failing call.
            (Ready, Failed) => Ready,

            // Default: stay in current state
            _ => self,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn happy_path_reaches_ready() {
        let state = DeviceStatus::Uninitialized
            .transition(DeviceEvent::LinesAcquired)
            .transition(DeviceEvent::ResetSettled)
            .transition(DeviceEvent::ConfigurationAccepted);
        assert_eq!(state, DeviceStatus::Ready);
        assert!(state.accepts_frames());
    }

    #[test]
    fn failure_during_bring_up_is_terminal() {
        let states = [
            DeviceStatus::Uninitialized,
            DeviceStatus::Resetting,
            DeviceStatus::Configuring,
        ];

        for state in states {
            let next = state.transition(DeviceEvent::Failed);
            assert_eq!(next, DeviceStatus::Unavailable);
            assert!(next.is_terminal());
        }
    }

    #[test]
    fn unavailable_ignores_every_event() {
        let events = [
            DeviceEvent::LinesAcquired,
            DeviceEvent::ResetSettled,
            DeviceEvent::ConfigurationAccepted,
            DeviceEvent::Failed,
        ];

        for event in events {
            assert_eq!(
                DeviceStatus::Unavailable.transition(event),
                DeviceStatus::Unavailable
            );
        }
    }

    #[test]
    fn ready_survives_failures() {
        assert_eq!(
            DeviceStatus::Ready.transition(DeviceEvent::Failed),
            DeviceStatus::Ready
        );
    }

    #[test]
    fn out_of_order_events_are_ignored() {
        assert_eq!(
            DeviceStatus::Uninitialized.transition(DeviceEvent::ConfigurationAccepted),
            DeviceStatus::Uninitialized
        );
        assert_eq!(
            DeviceStatus::Resetting.transition(DeviceEvent::LinesAcquired),
            DeviceStatus::Resetting
        );
        assert!(!DeviceStatus::Configuring.accepts_frames());
    }
}
