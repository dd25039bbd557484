//! Relay/buzzer output pin driver.
//!
//! A dumb actuator over any [`embedded_hal::digital::OutputPin`]: the
//! control core decides the level, this driver writes it. The pin is
//! driven on every call (a stuck driver stage must not survive a missed
//! edge), but level changes are logged only on transitions.

use embedded_hal::digital::OutputPin;
use log::{debug, error};

use crate::app::ports::SwitchOutput;

/// Output driver for the relay (or buzzer) pin.
pub struct RelayDriver<P: OutputPin> {
    pin: P,
    level: Option<bool>,
}

impl<P: OutputPin> RelayDriver<P> {
    pub fn new(pin: P) -> Self {
        Self { pin, level: None }
    }

    /// Last level written, `None` before the first write.
    pub fn level(&self) -> Option<bool> {
        self.level
    }

    /// Give the pin back (e.g. for low-power reconfiguration).
    pub fn release(self) -> P {
        self.pin
    }
}

impl<P: OutputPin> SwitchOutput for RelayDriver<P> {
    fn set_output(&mut self, on: bool) {
        let result = if on {
            self.pin.set_high()
        } else {
            self.pin.set_low()
        };
        if result.is_err() {
            error!("relay pin: write failed");
            return;
        }

        if self.level != Some(on) {
            debug!("relay pin: {}", if on { "high" } else { "low" });
            self.level = Some(on);
        }
    }
}
