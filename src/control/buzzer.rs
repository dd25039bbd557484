//! Buzzer pattern engine for the disabled-controller alert.
//!
//! While temperature holding is off, the relay output drives a piezo buzzer
//! instead of the relay coil. The pattern is a long idle window with a short
//! audible burst, repeating:
//!
//! | phase    | counter range | output              |
//! |----------|---------------|---------------------|
//! | settle   | 1..=6000      | idle level          |
//! | buzz     | 6001..=6010   | toggles every tick  |
//! | cooldown | 6011..=6070   | idle level          |
//!
//! After the cooldown the counter resets and the cycle repeats. The counter
//! advances once per controller evaluation and is reset whenever the
//! controller is re-enabled, so a fresh disable always starts with the full
//! settle window and a clean output baseline.

const SETTLE_END: u32 = 6000;
const BUZZ_END: u32 = 6010;
const CYCLE_END: u32 = 6070;

/// Pulse-pattern state. Stack-allocated, no heap.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuzzerPattern {
    pulse_count: u32,
}

impl BuzzerPattern {
    pub const fn new() -> Self {
        Self { pulse_count: 0 }
    }

    /// Restart the cycle from the settle phase.
    pub fn reset(&mut self) {
        self.pulse_count = 0;
    }

    /// Advance one tick and return the output level to drive, given the
    /// configured idle level.
    pub fn tick(&mut self, idle: bool) -> bool {
        self.pulse_count += 1;
        let n = self.pulse_count;

        if n <= SETTLE_END {
            idle
        } else if n <= BUZZ_END {
            // Audible burst: alternate the output on every tick.
            if n & 1 == 1 { !idle } else { idle }
        } else {
            if n >= CYCLE_END {
                self.pulse_count = 0;
            }
            idle
        }
    }
}
