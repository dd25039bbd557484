//! Fermentation countdown timer.
//!
//! Remaining time is packed into a `u16` — hours in the upper bits, minutes
//! in the low 6 bits — and zero means "not running". The timer is loaded
//! with `(duration - 1)` hours and 59 minutes, so an 8 hour run shows
//! `7:59` on the first refresh and expires exactly 8 x 60 - 1 minute
//! boundaries later.
//!
//! Decrements are keyed to the second-of-minute captured at start: the tick
//! path calls [`FermentationTimer::tick`] on every second edge, and only the
//! edge whose second matches the captured phase counts a minute down.

use log::info;

const MINUTES_BITS: u16 = 6;
const MINUTES_MASK: u16 = (1 << MINUTES_BITS) - 1;

/// Countdown timer for the fermentation cycle.
#[derive(Debug, Clone, Copy, Default)]
pub struct FermentationTimer {
    /// `hours << 6 | minutes`; zero when inactive.
    value: u16,
    /// Second-of-minute on which a decrement fires.
    trigger_second: u8,
}

impl FermentationTimer {
    pub const fn new() -> Self {
        Self {
            value: 0,
            trigger_second: 0,
        }
    }

    /// Arm the timer for `duration_hours`, anchoring the minute boundary to
    /// `current_second` (the clock's second-of-minute right now).
    pub fn start(&mut self, duration_hours: u16, current_second: u8) {
        self.value = (duration_hours.saturating_sub(1) << MINUTES_BITS) | 59;
        self.trigger_second = current_second;
        info!(
            "ferment: started {}h (phase @ second {})",
            duration_hours, current_second
        );
    }

    /// Clear the timer without firing completion.
    pub fn stop(&mut self) {
        if self.is_active() {
            info!("ferment: stopped with {}:{:02} remaining", self.hours(), self.minutes());
        }
        self.value = 0;
    }

    /// True while the countdown is running.
    pub fn is_active(&self) -> bool {
        self.value != 0
    }

    /// Remaining full hours.
    pub fn hours(&self) -> u16 {
        self.value >> MINUTES_BITS
    }

    /// Remaining minutes within the current hour.
    pub fn minutes(&self) -> u16 {
        self.value & MINUTES_MASK
    }

    /// Process one second edge. Only the edge matching the captured trigger
    /// phase decrements, i.e. once per minute.
    ///
    /// Returns `true` exactly once, on the decrement that empties the timer.
    #[must_use]
    pub fn tick(&mut self, current_second: u8) -> bool {
        if !self.is_active() || current_second != self.trigger_second {
            return false;
        }

        if self.minutes() > 0 {
            self.value -= 1;
            if self.value == 0 {
                info!("ferment: complete");
                return true;
            }
        } else {
            // Minute underflow: borrow an hour. hours() > 0 here, because
            // value != 0 and minutes() == 0.
            self.value = ((self.hours() - 1) << MINUTES_BITS) | 59;
        }

        false
    }
}
