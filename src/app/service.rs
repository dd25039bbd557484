//! Application service — the tick orchestrator.
//!
//! [`AppService`] owns every piece of mutable runtime state: the packed
//! uptime counter, the fermentation timer, the relay/buzzer controller and
//! the overheat monitor. [`AppService::tick`] is the interrupt body — the
//! hardware tick source calls it once per tick (500 Hz on the reference
//! board), it runs to completion, and nothing else ever writes the state.
//! The display/menu side reads through cloned [`Snapshot`]s, which is the
//! whole concurrency story: one writer, any number of readers.
//!
//! ```text
//! TemperatureProbe ──▶ ┌─────────────────────────────┐ ──▶ SwitchOutput
//!                      │         AppService          │
//!                      │ Uptime · Ferment · Relay    │ ──▶ DispatchDelegate
//!                      │ Buzzer · OverheatMonitor    │ ──▶ EventSink
//!                      └─────────────────────────────┘
//! ```
//!
//! Per-tick order: advance the clock; on a second edge run the fermentation
//! countdown (expiry force-disables the relay); then fire at most one
//! fan-out action per the [`dispatcher`](crate::dispatcher) policy table.
//! The tick body is branch-shallow and allocation-free — it must fit well
//! inside one 2 ms tick period.

use log::info;

use crate::alarm::OverheatMonitor;
use crate::clock::Uptime;
use crate::config::RunParams;
use crate::control::relay::RelayController;
use crate::dispatcher::{self, FanoutAction};
use crate::ferment::FermentationTimer;
use crate::format;

use super::events::AppEvent;
use super::ports::{DispatchDelegate, EventSink, SwitchOutput, TemperatureProbe};

// ───────────────────────────────────────────────────────────────
// Read snapshot
// ───────────────────────────────────────────────────────────────

/// Point-in-time copy of the controller state for the display/menu side.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Snapshot {
    pub uptime_raw: u32,
    pub days: u8,
    pub hours: u8,
    pub minutes: u8,
    pub seconds: u8,
    pub ticks: u32,
    pub relay_enabled: bool,
    pub relay_active: bool,
    pub ferment_active: bool,
    pub ferment_hours: u16,
    pub ferment_minutes: u16,
    /// Last probe reading seen by the relay slot (tenths of a degree).
    pub temperature: i16,
    pub alert: Option<crate::alarm::TemperatureAlert>,
}

// ───────────────────────────────────────────────────────────────
// AppService
// ───────────────────────────────────────────────────────────────

/// The control core. Sole owner of all mutable runtime state.
#[derive(Debug)]
pub struct AppService {
    clock: Uptime,
    ferment: FermentationTimer,
    relay: RelayController,
    overheat: OverheatMonitor,
    params: RunParams,
    last_temperature: i16,
}

impl AppService {
    /// Core without the audible alert (relay-only variant).
    pub fn new(params: RunParams) -> Self {
        Self::build(params, RelayController::new())
    }

    /// Core with the buzzer pattern active while the relay is disabled.
    pub fn with_buzzer(params: RunParams) -> Self {
        Self::build(params, RelayController::with_buzzer())
    }

    fn build(params: RunParams, relay: RelayController) -> Self {
        Self {
            clock: Uptime::new(),
            ferment: FermentationTimer::new(),
            relay,
            overheat: OverheatMonitor::new(),
            params,
            last_temperature: 0,
        }
    }

    // ── Lifecycle ─────────────────────────────────────────────

    /// Announce startup. Call once before the first `tick()`.
    pub fn start(&mut self, sink: &mut impl EventSink) {
        info!(
            "service: starting (threshold {} delay {})",
            self.params.threshold, self.params.relay_delay
        );
        sink.emit(&AppEvent::Started);
    }

    // ── Per-tick orchestration ────────────────────────────────

    /// Run one interrupt body.
    ///
    /// The `hw` parameter satisfies **both** [`TemperatureProbe`] and
    /// [`SwitchOutput`] — the probe and the output pin belong to one board.
    /// The tick source has already cleared its interrupt flag by the time
    /// this runs.
    pub fn tick(
        &mut self,
        hw: &mut (impl TemperatureProbe + SwitchOutput),
        delegate: &mut impl DispatchDelegate,
        sink: &mut impl EventSink,
    ) {
        // 1. Timebase, with cascaded carries.
        let second_edge = self.clock.advance();

        // 2. Fermentation countdown, once per second edge. Expiry turns the
        //    temperature holding off.
        if second_edge && self.ferment.tick(self.clock.seconds()) {
            self.relay.set_enabled(false);
            delegate.on_fermentation_complete();
            sink.emit(&AppEvent::FermentationComplete);
            sink.emit(&AppEvent::RelayEnabled(false));
        }

        // 3. At most one expensive job per tick.
        match dispatcher::select(self.clock.ticks()) {
            Some(FanoutAction::UiRefresh) => delegate.on_ui_refresh(),
            Some(FanoutAction::SensorKickoff) => delegate.on_sensor_kickoff(),
            Some(FanoutAction::RelayRefresh) => self.refresh_relay(hw, sink),
            None => {}
        }
    }

    fn refresh_relay(
        &mut self,
        hw: &mut (impl TemperatureProbe + SwitchOutput),
        sink: &mut impl EventSink,
    ) {
        let temperature = hw.read_temperature();
        self.last_temperature = temperature;

        let before = self.overheat.alert();
        let alert = self.overheat.evaluate(temperature, &self.params);
        if alert != before {
            sink.emit(&AppEvent::AlertChanged(alert));
        }

        let was_active = self.relay.is_active();
        let level = self.relay.tick(temperature, &self.params);
        hw.set_output(level);

        if self.relay.is_active() != was_active {
            sink.emit(&AppEvent::RelayCommitted {
                active: self.relay.is_active(),
            });
        }
    }

    // ── Commands (from the menu UI) ───────────────────────────

    /// Gate the hysteresis controller on or off.
    pub fn set_relay_enabled(&mut self, on: bool, sink: &mut impl EventSink) {
        if self.relay.is_enabled() == on {
            return;
        }
        self.relay.set_enabled(on);
        sink.emit(&AppEvent::RelayEnabled(on));
    }

    /// Arm the fermentation countdown for the configured duration and
    /// enable temperature holding for the run.
    pub fn start_fermentation(&mut self, sink: &mut impl EventSink) {
        let hours = self.params.ferment_hours;
        self.ferment.start(hours, self.clock.seconds());
        sink.emit(&AppEvent::FermentationStarted { hours });
        self.set_relay_enabled(true, sink);
    }

    /// Clear the countdown without touching the relay.
    pub fn stop_fermentation(&mut self) {
        self.ferment.stop();
    }

    /// Replace the run parameters (the menu UI owns edits; the core only
    /// reads them).
    pub fn apply_params(&mut self, params: RunParams) {
        self.params = params;
    }

    pub fn params(&self) -> &RunParams {
        &self.params
    }

    /// Zero the uptime counter.
    pub fn reset_clock(&mut self) {
        self.clock.reset();
    }

    // ── Read side ─────────────────────────────────────────────

    /// Cloned state for the display/menu side.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            uptime_raw: self.clock.raw(),
            days: self.clock.days(),
            hours: self.clock.hours(),
            minutes: self.clock.minutes(),
            seconds: self.clock.seconds(),
            ticks: self.clock.ticks(),
            relay_enabled: self.relay.is_enabled(),
            relay_active: self.relay.is_active(),
            ferment_active: self.ferment.is_active(),
            ferment_hours: self.ferment.hours(),
            ferment_minutes: self.ferment.minutes(),
            temperature: self.last_temperature,
            alert: self.overheat.alert(),
        }
    }

    /// Render a display template against the current clock and countdown.
    pub fn render_display(&self, template: &str) -> heapless::String<{ format::DISPLAY_CAPACITY }> {
        format::render(&self.clock, &self.ferment, template)
    }
}
