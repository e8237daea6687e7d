//! Signal-pin policy
//!
//! Records how the shared signal line is interpreted (direction and kind)
//! and applies that choice to the underlying GPIO.

use sedec_hal::{Direction, Gpio, Level, PinId};

/// Default debounce window in milliseconds
pub const DEFAULT_DEBOUNCE_MS: u32 = 50;

/// How the shared signal line is interpreted on read and write
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SignalKind {
    /// ADC on read, PWM duty on write
    Analog,
    /// Logic level on read and write
    Digital,
    /// Width of a low pulse in microseconds on read
    DigitalPulse,
}

/// Configured direction of the shared signal line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SignalDirection {
    Input,
    InputPullup,
    Output,
}

impl SignalDirection {
    /// Check if this is one of the input directions
    pub fn is_input(self) -> bool {
        matches!(self, SignalDirection::Input | SignalDirection::InputPullup)
    }
}

/// Configuration for the shared signal line
///
/// Kind defaults to [`SignalKind::Digital`] and the debounce window to
/// [`DEFAULT_DEBOUNCE_MS`].
#[derive(Debug, Clone)]
pub struct SignalConfig {
    pub pin: PinId,
    pub direction: SignalDirection,
    pub kind: SignalKind,
    pub debounce_ms: u32,
}

impl SignalConfig {
    pub fn new(pin: PinId, direction: SignalDirection) -> Self {
        Self {
            pin,
            direction,
            kind: SignalKind::Digital,
            debounce_ms: DEFAULT_DEBOUNCE_MS,
        }
    }

    /// Override the signal kind
    pub fn kind(mut self, kind: SignalKind) -> Self {
        self.kind = kind;
        self
    }

    /// Override the debounce window
    pub fn debounce_ms(mut self, ms: u32) -> Self {
        self.debounce_ms = ms;
        self
    }
}

/// The recorded interpretation of the signal line
///
/// Everything is unset until the first [`SignalPolicy::apply`];
/// reconfiguration is allowed at any time.
#[derive(Debug, Default)]
pub struct SignalPolicy {
    pin: Option<PinId>,
    direction: Option<SignalDirection>,
    kind: Option<SignalKind>,
}

impl SignalPolicy {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `config` and configure the pin direction accordingly
    ///
    /// For an input direction, returns the pin's current level so the
    /// caller can seed its debouncer.
    pub fn apply(&mut self, hal: &mut impl Gpio, config: &SignalConfig) -> Option<Level> {
        self.pin = Some(config.pin);
        self.direction = Some(config.direction);
        self.kind = Some(config.kind);

        match config.direction {
            SignalDirection::InputPullup => {
                hal.set_direction(config.pin, Direction::InputPullup);
                Some(hal.read(config.pin))
            }
            SignalDirection::Input => {
                // A LOW write before switching direction releases any
                // internal pull-up still latched on the line.
                hal.write(config.pin, Level::Low);
                hal.set_direction(config.pin, Direction::Input);
                Some(hal.read(config.pin))
            }
            SignalDirection::Output => {
                hal.set_direction(config.pin, Direction::Output);
                None
            }
        }
    }

    pub fn pin(&self) -> Option<PinId> {
        self.pin
    }

    pub fn direction(&self) -> Option<SignalDirection> {
        self.direction
    }

    pub fn kind(&self) -> Option<SignalKind> {
        self.kind
    }
}
