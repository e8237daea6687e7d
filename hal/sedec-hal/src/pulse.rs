//! Pulse-width measurement

use crate::gpio::{Level, PinId};

/// Pulse-width measurement by pin id
pub trait PulseReader {
    /// Wait for a pulse of `level` on `pin` and measure its width
    ///
    /// Returns the pulse duration in microseconds, or 0 if no pulse
    /// completed within the host's measurement timeout. This is the only
    /// HAL primitive that may block for a noticeable time.
    fn pulse_in(&mut self, pin: PinId, level: Level) -> u32;
}
