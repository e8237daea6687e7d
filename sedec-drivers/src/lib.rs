//! Driver for the 74HC4067 16-channel multiplexer/demultiplexer
//!
//! The 74HC4067 routes one of sixteen external signals onto a single
//! shared line. This crate owns the chip's enable and address pins through
//! the traits in `sedec-hal` and layers channel selection, signal-pin
//! interpretation (digital, analog, pulse), and a debounced push-button
//! sampler on top:
//!
//! - Channel selection with glitch-free enable sequencing
//! - Digital/analog/pulse reads and digital/PWM writes on the shared line
//! - Per-call channel overrides with save/restore of the prior selection
//! - Debounced edge detection for push-buttons on the selected channel
//! - `embedded-hal` input-pin adapter for individual channels

#![no_std]
#![deny(unsafe_code)]

#[cfg(test)]
extern crate std;

pub mod mux;

#[cfg(test)]
pub(crate) mod mockhal;
