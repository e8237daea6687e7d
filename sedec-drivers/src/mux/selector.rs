//! Channel selection
//!
//! Owns the chip's active-low enable line and its 1-4 address lines, and
//! keeps the driver's view of both consistent with the levels actually
//! driven. Selection always de-asserts the enable line before the address
//! lines move, so a settling address never reaches the shared signal line.

use heapless::Vec;
use sedec_hal::{Direction, Gpio, Level, PinId};

use super::MuxError;

/// Logical state of the chip's enable line
///
/// `Enabled` means the output stage is connected to the selected channel,
/// i.e. the active-low enable pin is driven low.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum EnableState {
    Disabled,
    Enabled,
}

/// Snapshot of the selector, taken before a temporary channel override
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Selection {
    pub channel: u8,
    pub enable_state: EnableState,
}

/// The selector half of the driver: enable line plus address lines
pub struct ChannelSelector {
    enable_pin: PinId,
    control_pins: Vec<PinId, 4>,
    enable_state: EnableState,
    current_channel: u8,
}

impl ChannelSelector {
    /// Take ownership of the enable pin and 1-4 control pins
    ///
    /// All pins are configured as outputs. The enable line starts
    /// de-asserted (chip disconnected) and the address lines are driven to
    /// channel 0.
    pub fn new(
        hal: &mut impl Gpio,
        enable_pin: PinId,
        control_pins: &[PinId],
    ) -> Result<Self, MuxError> {
        if control_pins.is_empty() {
            return Err(MuxError::InvalidControlPins);
        }
        let control_pins =
            Vec::from_slice(control_pins).map_err(|_| MuxError::InvalidControlPins)?;

        hal.set_direction(enable_pin, Direction::Output);
        hal.write(enable_pin, Level::High);

        for &pin in &control_pins {
            hal.set_direction(pin, Direction::Output);
            hal.write(pin, Level::Low);
        }

        Ok(Self {
            enable_pin,
            control_pins,
            enable_state: EnableState::Disabled,
            current_channel: 0,
        })
    }

    /// Select `channel`, then leave the chip in the `then` state
    ///
    /// The enable line is de-asserted first, the low k address bits are
    /// written LSB-first onto the control pins, and only then is the enable
    /// line re-asserted (when `then` is `Enabled`). Channel bits above the
    /// configured control pins are ignored.
    pub fn select(&mut self, hal: &mut impl Gpio, channel: u8, then: EnableState) {
        hal.write(self.enable_pin, Level::High);

        let channel = channel & self.channel_mask();
        self.current_channel = channel;

        for (bit, &pin) in self.control_pins.iter().enumerate() {
            hal.write(pin, Level::from(channel & (1 << bit) != 0));
        }

        self.enable_state = then;
        if then == EnableState::Enabled {
            hal.write(self.enable_pin, Level::Low);
        }
    }

    /// Connect the selected channel to the signal line. Idempotent.
    pub fn enable(&mut self, hal: &mut impl Gpio) {
        self.enable_state = EnableState::Enabled;
        hal.write(self.enable_pin, Level::Low);
    }

    /// Disconnect every channel from the signal line. Idempotent.
    pub fn disable(&mut self, hal: &mut impl Gpio) {
        self.enable_state = EnableState::Disabled;
        hal.write(self.enable_pin, Level::High);
    }

    /// Snapshot the current channel and enable state
    pub fn selection(&self) -> Selection {
        Selection {
            channel: self.current_channel,
            enable_state: self.enable_state,
        }
    }

    /// Re-apply a previously taken snapshot
    pub fn restore(&mut self, hal: &mut impl Gpio, saved: Selection) {
        self.select(hal, saved.channel, saved.enable_state);
    }

    /// Channel currently on the address lines
    pub fn current_channel(&self) -> u8 {
        self.current_channel
    }

    /// Logical state of the enable line
    pub fn enable_state(&self) -> EnableState {
        self.enable_state
    }

    /// Number of addressable channels (2^k for k control pins)
    pub fn channel_count(&self) -> u8 {
        1 << self.control_pins.len()
    }

    fn channel_mask(&self) -> u8 {
        self.channel_count() - 1
    }
}
