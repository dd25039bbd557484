//! Mock hardware adapters for integration tests.
//!
//! Records every output level and every delegate trigger so tests can
//! assert on full histories without touching real GPIO.

use fermastat::app::events::AppEvent;
use fermastat::app::ports::{DispatchDelegate, EventSink, SwitchOutput, TemperatureProbe};

// ── Probe + output pin in one board ───────────────────────────

pub struct MockHardware {
    /// Reading returned by the probe (tenths of a degree); tests move it.
    pub temperature: i16,
    /// Every level the core drove, in order.
    pub levels: Vec<bool>,
}

#[allow(dead_code)]
impl MockHardware {
    pub fn new(temperature: i16) -> Self {
        Self {
            temperature,
            levels: Vec::new(),
        }
    }

    pub fn last_level(&self) -> Option<bool> {
        self.levels.last().copied()
    }
}

impl TemperatureProbe for MockHardware {
    fn read_temperature(&mut self) -> i16 {
        self.temperature
    }
}

impl SwitchOutput for MockHardware {
    fn set_output(&mut self, on: bool) {
        self.levels.push(on);
    }
}

// ── Delegate recorder ─────────────────────────────────────────

#[derive(Default)]
pub struct RecordingDelegate {
    pub ui_refreshes: u32,
    pub sensor_kickoffs: u32,
    pub completions: u32,
}

impl DispatchDelegate for RecordingDelegate {
    fn on_ui_refresh(&mut self) {
        self.ui_refreshes += 1;
    }

    fn on_sensor_kickoff(&mut self) {
        self.sensor_kickoffs += 1;
    }

    fn on_fermentation_complete(&mut self) {
        self.completions += 1;
    }
}

// ── Event recorder ────────────────────────────────────────────

#[derive(Default)]
pub struct RecordingSink {
    pub events: Vec<AppEvent>,
}

#[allow(dead_code)]
impl RecordingSink {
    pub fn count(&self, event: &AppEvent) -> usize {
        self.events.iter().filter(|&&e| e == *event).count()
    }
}

impl EventSink for RecordingSink {
    fn emit(&mut self, event: &AppEvent) {
        self.events.push(*event);
    }
}
