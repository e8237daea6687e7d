//! Monotonic time

/// Millisecond clock
pub trait Clock {
    /// Milliseconds since an arbitrary epoch
    ///
    /// The counter is monotonic and wraps at `u32::MAX`; consumers must
    /// compare timestamps with wrapping arithmetic.
    fn millis(&mut self) -> u32;
}
