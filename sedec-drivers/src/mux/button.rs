//! Debounced push-button sampling
//!
//! A two-sample edge detector over a time-based debounce filter. The
//! caller feeds one level sample per poll together with the current
//! millisecond clock; a level change only reaches the steady pair after it
//! has held for the full debounce window, and an edge is reported while
//! the two steady samples still straddle it.

use sedec_hal::Level;

/// Debounce filter and edge detector for one input line
///
/// Buttons are assumed active-low (wired to ground through the switch,
/// pulled up when open), so a press is a High-to-Low steady transition.
#[derive(Debug, Clone)]
pub struct Debouncer {
    window_ms: u32,
    previous_steady: Level,
    last_steady: Level,
    last_flickerable: Level,
    last_debounce_ms: u32,
}

impl Debouncer {
    /// New debouncer with all latched states seeded from the line's level
    pub fn new(window_ms: u32, seed: Level) -> Self {
        Self {
            window_ms,
            previous_steady: seed,
            last_steady: seed,
            last_flickerable: seed,
            last_debounce_ms: 0,
        }
    }

    /// Feed one level sample taken at `now_ms`
    ///
    /// Any change restarts the debounce deadline; once the level has held
    /// for the full window, the steady pair advances. Timestamps wrap at
    /// `u32::MAX`.
    pub fn update(&mut self, level: Level, now_ms: u32) {
        if level != self.last_flickerable {
            self.last_debounce_ms = now_ms;
            self.last_flickerable = level;
        }

        if now_ms.wrapping_sub(self.last_debounce_ms) >= self.window_ms {
            self.previous_steady = self.last_steady;
            self.last_steady = level;
        }
    }

    /// Falling edge across the steady pair (button went down)
    pub fn is_pressed(&self) -> bool {
        self.previous_steady == Level::High && self.last_steady == Level::Low
    }

    /// Rising edge across the steady pair (button came up)
    pub fn is_released(&self) -> bool {
        self.previous_steady == Level::Low && self.last_steady == Level::High
    }

    /// The accepted (debounced) level
    pub fn last_steady(&self) -> Level {
        self.last_steady
    }

    /// Configured debounce window
    pub fn window_ms(&self) -> u32 {
        self.window_ms
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_held_transition_accepted_once() {
        let mut d = Debouncer::new(50, Level::High);

        // Press at t=10, held through t=70
        d.update(Level::High, 0);
        assert!(!d.is_pressed());
        d.update(Level::Low, 10);
        assert!(!d.is_pressed());
        d.update(Level::Low, 30);
        assert!(!d.is_pressed());

        // 50 ms after the transition the press is reported
        d.update(Level::Low, 60);
        assert!(d.is_pressed());
        assert_eq!(d.last_steady(), Level::Low);

        // The next poll advances the steady pair and clears the edge
        d.update(Level::Low, 70);
        assert!(!d.is_pressed());
        assert_eq!(d.last_steady(), Level::Low);
    }

    #[test]
    fn test_fast_bounce_never_reaches_steady() {
        let mut d = Debouncer::new(50, Level::High);

        for (level, t) in [
            (Level::High, 0),
            (Level::Low, 10),
            (Level::High, 20),
            (Level::Low, 30),
            (Level::High, 40),
        ] {
            d.update(level, t);
            assert_eq!(d.last_steady(), Level::High);
            assert!(!d.is_pressed());
            assert!(!d.is_released());
        }
    }

    #[test]
    fn test_edge_latched_until_next_advance() {
        let mut d = Debouncer::new(50, Level::Low);

        d.update(Level::High, 0);
        d.update(Level::High, 60);
        assert!(d.is_released());

        // Queries do not consume the edge
        assert!(d.is_released());
        assert!(d.is_released());

        // Only the next steady advance clears it
        d.update(Level::High, 70);
        assert!(!d.is_released());
    }

    #[test]
    fn test_release_after_press() {
        let mut d = Debouncer::new(20, Level::High);

        d.update(Level::Low, 5);
        d.update(Level::Low, 30);
        assert!(d.is_pressed());

        d.update(Level::High, 40);
        d.update(Level::High, 65);
        assert!(d.is_released());
        assert!(!d.is_pressed());
    }

    #[test]
    fn test_clock_wraparound() {
        let mut d = Debouncer::new(50, Level::High);

        // Transition just before the u32 clock wraps
        d.update(Level::Low, u32::MAX - 10);
        assert!(!d.is_pressed());

        // 41 ms later (clock has wrapped to 30): window not yet elapsed
        d.update(Level::Low, 30);
        assert!(!d.is_pressed());

        // 56 ms after the transition: accepted
        d.update(Level::Low, 45);
        assert!(d.is_pressed());
    }
}
