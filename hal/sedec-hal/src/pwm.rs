//! PWM output

use crate::gpio::PinId;

/// PWM duty-cycle output by pin id
pub trait PwmWriter {
    /// Drive `pin` with a PWM waveform of the given duty
    ///
    /// `duty` is a full-scale byte: 0 is always-low, 255 is always-high.
    fn pwm_write(&mut self, pin: PinId, duty: u8);
}
