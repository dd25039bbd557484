//! Hysteresis relay controller with hold-off delay.
//!
//! One evaluation per controller tick, no blocking, no state beyond three
//! words:
//!
//! - `active` — the last committed demand decision. While demand is
//!   committed the output drives the configured `mode` level; otherwise the
//!   complement.
//! - `hold_ticks` — consecutive evaluations spent on the wrong side of the
//!   hysteresis band. A flip commits only after the hold-off window of
//!   `delay << 7` evaluations, which keeps a noisy probe from chattering
//!   the relay coil.
//! - `enabled` — gates the whole algorithm. Disabled, the output rests at
//!   the idle level `mode`, or runs the buzzer pattern when one is fitted.
//!
//! The hysteresis half-band is `hysteresis >> 3` and the hold-off window is
//! `delay << 7`; both are exact shifts of the stored parameters. Comparisons
//! widen to `i32`, so any parameter values the store hands over are accepted
//! as-is.

use log::info;

use crate::config::RunParams;
use crate::control::buzzer::BuzzerPattern;

/// Hysteresis thermostat for the relay output.
#[derive(Debug, Clone, Default)]
pub struct RelayController {
    enabled: bool,
    active: bool,
    hold_ticks: u32,
    buzzer: Option<BuzzerPattern>,
}

impl RelayController {
    /// Controller without the audible alert: disabled state rests the
    /// output at the idle level.
    pub const fn new() -> Self {
        Self {
            enabled: false,
            active: false,
            hold_ticks: 0,
            buzzer: None,
        }
    }

    /// Controller variant that runs the buzzer pattern while disabled.
    pub const fn with_buzzer() -> Self {
        Self {
            enabled: false,
            active: false,
            hold_ticks: 0,
            buzzer: Some(BuzzerPattern::new()),
        }
    }

    /// Gate the hysteresis algorithm on or off.
    ///
    /// Re-enabling clears the hold-off counter and restarts the buzzer
    /// cycle; the committed demand decision carries over.
    pub fn set_enabled(&mut self, on: bool) {
        if self.enabled == on {
            return;
        }
        self.enabled = on;
        self.hold_ticks = 0;
        if let Some(b) = &mut self.buzzer {
            b.reset();
        }
        info!("relay: {}", if on { "enabled" } else { "disabled" });
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Last committed demand decision.
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Evaluate once and return the output level to drive.
    pub fn tick(&mut self, temperature: i16, params: &RunParams) -> bool {
        let mode = params.relay_mode;

        if !self.enabled {
            return match &mut self.buzzer {
                Some(b) => b.tick(mode),
                None => mode,
            };
        }

        let temp = i32::from(temperature);
        let threshold = i32::from(params.threshold);
        let band = i32::from(params.hysteresis >> 3);
        let window = u32::from(params.relay_delay) << 7;

        if self.active {
            // Demand is on; sustained overshoot above the band releases it.
            if temp > threshold + band {
                self.hold_ticks += 1;
                if self.hold_ticks >= window {
                    self.commit(false);
                    return !mode;
                }
            } else {
                self.hold_ticks = 0;
            }
            mode
        } else {
            // Demand is off; sustained undershoot below the band commits it.
            if temp < threshold - band {
                self.hold_ticks += 1;
                if self.hold_ticks >= window {
                    self.commit(true);
                    return mode;
                }
            } else {
                self.hold_ticks = 0;
            }
            !mode
        }
    }

    fn commit(&mut self, active: bool) {
        self.active = active;
        self.hold_ticks = 0;
        info!(
            "relay: committed {} after hold-off",
            if active { "on" } else { "off" }
        );
    }
}
