//! Analog sampling

use crate::gpio::PinId;

/// Analog-to-digital conversion by pin id
pub trait AdcReader {
    /// Sample the analog level on `pin`
    ///
    /// Returns the raw conversion result, from 0 to the converter's
    /// maximum (1023 on 10-bit hosts, 4095 on 12-bit hosts). The
    /// conversion blocks for the few microseconds the hardware needs.
    fn analog_read(&mut self, pin: PinId) -> u16;
}
