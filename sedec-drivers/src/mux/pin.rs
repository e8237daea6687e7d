//! `embedded-hal` adapter
//!
//! Exposes one multiplexer channel as a digital input pin, so a channel
//! can be handed to any `embedded-hal` consumer.

use embedded_hal::digital::{Error, ErrorKind, ErrorType, InputPin};
use sedec_hal::Hal;

use super::{Hc4067, MuxError};

impl Error for MuxError {
    fn kind(&self) -> ErrorKind {
        ErrorKind::Other
    }
}

/// One multiplexer channel viewed as an `embedded-hal` input pin
///
/// Each read temporarily selects the channel, samples the shared line,
/// and restores the previous selection, so holding a `ChannelPin` does not
/// disturb the rest of the driver. The signal line must be configured as a
/// digital input for the levels to be meaningful.
pub struct ChannelPin<'a, H> {
    mux: &'a mut Hc4067<H>,
    channel: u8,
}

impl<'a, H: Hal> ChannelPin<'a, H> {
    pub(crate) fn new(mux: &'a mut Hc4067<H>, channel: u8) -> Self {
        Self { mux, channel }
    }

    /// The channel this pin reads
    pub fn channel(&self) -> u8 {
        self.channel
    }
}

impl<H: Hal> ErrorType for ChannelPin<'_, H> {
    type Error = MuxError;
}

impl<H: Hal> InputPin for ChannelPin<'_, H> {
    fn is_high(&mut self) -> Result<bool, Self::Error> {
        self.mux.read(Some(self.channel)).map(|value| value != 0)
    }

    fn is_low(&mut self) -> Result<bool, Self::Error> {
        self.is_high().map(|high| !high)
    }
}
