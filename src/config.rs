//! Run parameters for the appliance controller.
//!
//! All tunable parameters for a FermaStat unit. The core treats these as
//! externally owned and read-only; the menu UI edits them and the parameter
//! store persists them between power cycles.
//!
//! Temperatures are fixed-point tenths of a degree Celsius (`420` = 42.0 C),
//! the same units the temperature probe reports.

use serde::{Deserialize, Serialize};

/// Controller run parameters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunParams {
    // --- Relay ---
    /// Output level driven while demand is committed. `true` suits a relay
    /// energised to heat; `false` inverts the output for cooling appliances.
    pub relay_mode: bool,
    /// Setpoint temperature (tenths of a degree).
    pub threshold: i16,
    /// Hysteresis parameter (tenths of a degree). The controller uses
    /// `hysteresis >> 3` as the half-band around the setpoint.
    pub hysteresis: i16,
    /// Hold-off delay parameter. The controller requires `delay << 7`
    /// consecutive out-of-band evaluations before committing a flip.
    pub relay_delay: u16,

    // --- Fermentation ---
    /// Fermentation timer duration (hours).
    pub ferment_hours: u16,

    // --- Overheat indication ---
    /// Whether the low/high temperature indication is enabled.
    pub overheat_alert: bool,
    /// Lower indication bound (tenths of a degree).
    pub min_temperature: i16,
    /// Upper indication bound (tenths of a degree).
    pub max_temperature: i16,
}

impl Default for RunParams {
    fn default() -> Self {
        Self {
            // Relay: hold 42.0 C with a +/-0.2 C band, heating polarity.
            relay_mode: true,
            threshold: 420,
            hysteresis: 16,
            relay_delay: 1,

            // Fermentation: 8 hours suits most yoghurt cultures.
            ferment_hours: 8,

            // Overheat indication: warn outside 10.0-60.0 C.
            overheat_alert: true,
            min_temperature: 100,
            max_temperature: 600,
        }
    }
}
