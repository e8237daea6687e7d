//! 74HC4067 driver facade
//!
//! [`Hc4067`] aggregates the channel selector, the signal-pin policy, and
//! the debounced-button sampler over one HAL instance. The host's main
//! loop drives all progress by calling [`Hc4067::poll`] and the I/O
//! operations; nothing here schedules or suspends.
//!
//! # Usage
//!
//! ```ignore
//! let mut mux = Hc4067::new(hal, EN_PIN, &[S0, S1, S2, S3])?;
//! mux.configure_signal(SignalConfig::new(SIG_PIN, SignalDirection::InputPullup));
//!
//! // In the main loop:
//! mux.poll();
//! if mux.is_pressed(None) {
//!     // button on the selected channel went down
//! }
//! ```

pub mod button;
pub mod pin;
pub mod selector;
pub mod signal;

pub use button::Debouncer;
pub use pin::ChannelPin;
pub use selector::{ChannelSelector, EnableState, Selection};
pub use signal::{SignalConfig, SignalDirection, SignalKind, SignalPolicy, DEFAULT_DEBOUNCE_MS};

use sedec_hal::{Hal, Level, PinId};

/// Errors reported by the multiplexer driver
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MuxError {
    /// Constructed with zero or more than four control pins
    InvalidControlPins,
    /// The signal pin has not been configured yet
    SignalUnconfigured,
    /// The operation requires the opposite signal direction
    DirectionMismatch,
}

/// Driver for one 74HC4067 multiplexer/demultiplexer
///
/// Generic over any [`Hal`] implementation; all sixteen channels share the
/// single signal line the chip's common pin is wired to. Every operation
/// takes `&mut self`, which also enforces the single-context rule the chip
/// requires.
pub struct Hc4067<H> {
    hal: H,
    selector: ChannelSelector,
    signal: SignalPolicy,
    button: Option<Debouncer>,
}

impl<H: Hal> Hc4067<H> {
    /// Take ownership of the HAL, the enable pin, and 1-4 control pins
    ///
    /// The chip starts disconnected with channel 0 on the address lines.
    /// The signal line stays untouched until [`Hc4067::configure_signal`].
    pub fn new(mut hal: H, enable_pin: PinId, control_pins: &[PinId]) -> Result<Self, MuxError> {
        let selector = ChannelSelector::new(&mut hal, enable_pin, control_pins)?;
        Ok(Self {
            hal,
            selector,
            signal: SignalPolicy::new(),
            button: None,
        })
    }

    /// Select `channel`, then leave the chip in the `then` state
    ///
    /// See [`ChannelSelector::select`] for the glitch-free ordering
    /// guarantee.
    pub fn select(&mut self, channel: u8, then: EnableState) {
        self.selector.select(&mut self.hal, channel, then);
    }

    /// Connect the selected channel to the signal line. Idempotent.
    pub fn enable(&mut self) {
        self.selector.enable(&mut self.hal);
    }

    /// Disconnect every channel from the signal line. Idempotent.
    pub fn disable(&mut self) {
        self.selector.disable(&mut self.hal);
    }

    /// Configure how the shared signal line is interpreted
    ///
    /// May be called again at any time; reconfiguration re-applies the pin
    /// direction and re-seeds the debounce state for input directions.
    pub fn configure_signal(&mut self, config: SignalConfig) {
        let seed = self.signal.apply(&mut self.hal, &config);
        self.button = seed.map(|level| Debouncer::new(config.debounce_ms, level));
    }

    /// Read the signal line, optionally through a temporary channel
    ///
    /// With `Some(channel)` the previous selection (channel and enable
    /// state) is saved, the override selected and enabled, and the
    /// selection restored afterwards on every path. The value read depends
    /// on the configured [`SignalKind`]: the raw ADC sample, the digital
    /// level as 0/1, or a low-pulse width in microseconds (0 on timeout).
    pub fn read(&mut self, channel: Option<u8>) -> Result<u32, MuxError> {
        self.with_selection(channel, |mux| {
            let pin = mux.signal.pin().ok_or(MuxError::SignalUnconfigured)?;
            if mux.signal.direction() == Some(SignalDirection::Output) {
                return Err(MuxError::DirectionMismatch);
            }
            match mux.signal.kind().ok_or(MuxError::SignalUnconfigured)? {
                SignalKind::Analog => Ok(u32::from(mux.hal.analog_read(pin))),
                SignalKind::Digital => Ok(u32::from(mux.hal.read(pin).is_high())),
                SignalKind::DigitalPulse => Ok(mux.hal.pulse_in(pin, Level::Low)),
            }
        })
    }

    /// Like [`Hc4067::read`], but yielding `default` on any error
    pub fn read_or(&mut self, default: u32, channel: Option<u8>) -> u32 {
        self.read(channel).unwrap_or(default)
    }

    /// Drive `value` out through `channel`
    ///
    /// Fails without touching any pin while the signal line is configured
    /// as an input (or not configured at all). Otherwise the chip is
    /// disconnected, the value driven onto the signal line (PWM duty for
    /// an analog kind, logic level for a digital kind), and the channel
    /// selected and enabled - in that order, so the previously selected
    /// channel never sees the new value while the line settles.
    ///
    /// `kind` overrides the configured [`SignalKind`] for this call.
    pub fn write(&mut self, channel: u8, value: u8, kind: Option<SignalKind>) -> Result<(), MuxError> {
        let pin = self.signal.pin().ok_or(MuxError::SignalUnconfigured)?;
        match self.signal.direction() {
            Some(SignalDirection::Output) => {}
            Some(_) => return Err(MuxError::DirectionMismatch),
            None => return Err(MuxError::SignalUnconfigured),
        }
        let kind = kind
            .or_else(|| self.signal.kind())
            .ok_or(MuxError::SignalUnconfigured)?;

        self.selector.disable(&mut self.hal);
        match kind {
            SignalKind::Analog => self.hal.pwm_write(pin, value),
            SignalKind::Digital | SignalKind::DigitalPulse => {
                self.hal.write(pin, Level::from(value != 0));
            }
        }
        self.selector.select(&mut self.hal, channel, EnableState::Enabled);
        Ok(())
    }

    /// Feed the button sampler one poll cycle
    ///
    /// Samples the signal line and the clock and advances the debounce
    /// state machine. Only meaningful while the signal line is configured
    /// as a digital input; otherwise a no-op. The sampler sees whichever
    /// channel is currently selected - scanning several buttons means
    /// alternating [`Hc4067::select`] and `poll`, allowing a debounce
    /// window's worth of polls per channel before trusting its edges.
    pub fn poll(&mut self) {
        if self.signal.kind() != Some(SignalKind::Digital) {
            return;
        }
        let Some(pin) = self.signal.pin() else { return };
        let Some(button) = self.button.as_mut() else { return };

        let level = self.hal.read(pin);
        let now = self.hal.millis();
        button.update(level, now);
    }

    /// Check for a debounced press (steady High-to-Low edge)
    ///
    /// With `Some(channel)` the selection is temporarily overridden and
    /// restored, as in [`Hc4067::read`]. The edge stays observable until
    /// the next [`Hc4067::poll`] advances the steady states.
    pub fn is_pressed(&mut self, channel: Option<u8>) -> bool {
        self.with_selection(channel, |mux| {
            mux.signal.kind() == Some(SignalKind::Digital)
                && mux.button.as_ref().is_some_and(Debouncer::is_pressed)
        })
    }

    /// Check for a debounced release (steady Low-to-High edge)
    pub fn is_released(&mut self, channel: Option<u8>) -> bool {
        self.with_selection(channel, |mux| {
            mux.signal.kind() == Some(SignalKind::Digital)
                && mux.button.as_ref().is_some_and(Debouncer::is_released)
        })
    }

    /// Channel currently on the address lines
    pub fn current_channel(&self) -> u8 {
        self.selector.current_channel()
    }

    /// Logical state of the enable line
    pub fn enable_state(&self) -> EnableState {
        self.selector.enable_state()
    }

    /// Number of addressable channels (2^k for k control pins)
    pub fn channel_count(&self) -> u8 {
        self.selector.channel_count()
    }

    /// Configured signal kind, if any
    pub fn signal_kind(&self) -> Option<SignalKind> {
        self.signal.kind()
    }

    /// Configured signal direction, if any
    pub fn signal_direction(&self) -> Option<SignalDirection> {
        self.signal.direction()
    }

    /// View `channel` as an `embedded-hal` digital input pin
    pub fn channel_pin(&mut self, channel: u8) -> ChannelPin<'_, H> {
        ChannelPin::new(self, channel)
    }

    /// Borrow the underlying HAL
    pub fn hal(&self) -> &H {
        &self.hal
    }

    /// Mutably borrow the underlying HAL
    pub fn hal_mut(&mut self) -> &mut H {
        &mut self.hal
    }

    /// Consume the driver and hand the HAL back
    pub fn release(self) -> H {
        self.hal
    }

    /// Run `f` with `channel` temporarily selected and enabled
    ///
    /// `None` runs `f` against the current selection. The prior selection
    /// is restored after `f` on every return path.
    fn with_selection<R>(&mut self, channel: Option<u8>, f: impl FnOnce(&mut Self) -> R) -> R {
        let Some(channel) = channel else {
            return f(self);
        };
        let saved = self.selector.selection();
        self.selector.select(&mut self.hal, channel, EnableState::Enabled);
        let result = f(self);
        self.selector.restore(&mut self.hal, saved);
        result
    }
}
