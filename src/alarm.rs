//! Overheat indication monitor.
//!
//! Watches the probe reading against the configured low/high bounds and
//! exposes the current alert so the UI can flash its `LLL`/`HHH` banner.
//! Purely indicative — the relay algorithm keeps running regardless; the
//! hysteresis band, not this monitor, decides the output.
//!
//! Transitions are logged once on set and once on clear, never on the
//! steady path.

use log::{info, warn};

use crate::config::RunParams;

/// Out-of-bounds temperature indication.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemperatureAlert {
    /// Reading below the configured minimum.
    Low,
    /// Reading above the configured maximum.
    High,
}

/// Tracks the indication state across evaluations.
#[derive(Debug, Clone, Copy, Default)]
pub struct OverheatMonitor {
    current: Option<TemperatureAlert>,
}

impl OverheatMonitor {
    pub const fn new() -> Self {
        Self { current: None }
    }

    /// Evaluate one probe reading. Returns the (possibly unchanged) alert.
    pub fn evaluate(&mut self, temperature: i16, params: &RunParams) -> Option<TemperatureAlert> {
        let next = if !params.overheat_alert {
            None
        } else if temperature < params.min_temperature {
            Some(TemperatureAlert::Low)
        } else if temperature > params.max_temperature {
            Some(TemperatureAlert::High)
        } else {
            None
        };

        if next != self.current {
            match next {
                Some(alert) => warn!("alarm: temperature {:?} ({})", alert, temperature),
                None => info!("alarm: cleared ({})", temperature),
            }
            self.current = next;
        }

        self.current
    }

    /// Current alert without re-evaluating.
    pub fn alert(&self) -> Option<TemperatureAlert> {
        self.current
    }
}
