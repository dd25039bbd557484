//! Packed uptime timebase.
//!
//! Uptime since the last reset lives in a single `u32` with five adjacent
//! bit fields:
//!
//! ```text
//! |--Days--|--Hours--|--Minutes--|--Seconds--|--Ticks--|
//! 31       26        21          15          9         0
//! ```
//!
//! [`Uptime::advance`] runs once per hardware tick (500 Hz on the reference
//! board) and carries ticks into seconds, seconds into minutes, minutes into
//! hours and hours into days with plain bit arithmetic — no division, no
//! floating point. Days overflow their 6-bit field silently.
//!
//! The counter has a single writer (the tick path); everything else reads
//! through the copy accessors.

/// Hardware tick rate: ticks per second.
pub const TICKS_PER_SECOND: u32 = 500;

const TICKS_BITS: u32 = 9;
const SECONDS_BITS: u32 = 6;
const MINUTES_BITS: u32 = 6;
const HOURS_BITS: u32 = 5;
const DAYS_BITS: u32 = 6;

const SECONDS_SHIFT: u32 = TICKS_BITS;
const MINUTES_SHIFT: u32 = SECONDS_SHIFT + SECONDS_BITS;
const HOURS_SHIFT: u32 = MINUTES_SHIFT + MINUTES_BITS;
const DAYS_SHIFT: u32 = HOURS_SHIFT + HOURS_BITS;

const fn mask(bits: u32) -> u32 {
    !(u32::MAX << bits)
}

/// Packed uptime counter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Uptime(u32);

impl Uptime {
    pub const fn new() -> Self {
        Self(0)
    }

    /// Advance by one hardware tick.
    ///
    /// Returns `true` when a second boundary was crossed, so the caller can
    /// gate once-per-second work without re-deriving the edge.
    pub fn advance(&mut self) -> bool {
        self.0 += 1;

        if (self.0 & mask(TICKS_BITS)) < TICKS_PER_SECOND {
            return false;
        }

        // Ticks reached one full second: clear them and carry upward.
        self.0 &= !mask(SECONDS_SHIFT);
        self.0 += 1 << SECONDS_SHIFT;

        if self.seconds() == 60 {
            self.0 &= !mask(MINUTES_SHIFT);
            self.0 += 1 << MINUTES_SHIFT;

            if self.minutes() == 60 {
                self.0 &= !mask(HOURS_SHIFT);
                self.0 += 1 << HOURS_SHIFT;

                if self.hours() == 24 {
                    self.0 &= !mask(DAYS_SHIFT);
                    // Day 63 + 1 overflows the u32; the field wraps silently.
                    self.0 = self.0.wrapping_add(1 << DAYS_SHIFT);
                }
            }
        }

        true
    }

    /// Zero the whole counter.
    pub fn reset(&mut self) {
        self.0 = 0;
    }

    /// Raw packed value.
    pub fn raw(&self) -> u32 {
        self.0
    }

    /// Ticks within the current second (0..500).
    pub fn ticks(&self) -> u32 {
        self.0 & mask(TICKS_BITS)
    }

    pub fn seconds(&self) -> u8 {
        ((self.0 >> SECONDS_SHIFT) & mask(SECONDS_BITS)) as u8
    }

    pub fn minutes(&self) -> u8 {
        ((self.0 >> MINUTES_SHIFT) & mask(MINUTES_BITS)) as u8
    }

    pub fn hours(&self) -> u8 {
        ((self.0 >> HOURS_SHIFT) & mask(HOURS_BITS)) as u8
    }

    pub fn days(&self) -> u8 {
        ((self.0 >> DAYS_SHIFT) & mask(DAYS_BITS)) as u8
    }

    /// Build a counter from individual fields. Test hook only.
    #[cfg(test)]
    fn with_fields(days: u32, hours: u32, minutes: u32, seconds: u32, ticks: u32) -> Self {
        Self(
            (days << DAYS_SHIFT)
                | (hours << HOURS_SHIFT)
                | (minutes << MINUTES_SHIFT)
                | (seconds << SECONDS_SHIFT)
                | ticks,
        )
    }
}
