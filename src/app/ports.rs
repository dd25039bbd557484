//! Port traits — the hexagonal boundary between the control core and the
//! outside world.
//!
//! ```text
//!   Adapter ──▶ Port trait ──▶ AppService (domain)
//! ```
//!
//! Driven adapters (the temperature probe, the relay/buzzer pin, the
//! display/menu side, the parameter store) implement these traits. The
//! [`AppService`](super::service::AppService) consumes them via generics,
//! so the core never touches a register directly and the whole tick path
//! runs unchanged under a virtual clock in tests.

use crate::config::RunParams;
use crate::error::ParamError;

// ───────────────────────────────────────────────────────────────
// Temperature probe (driven adapter: hardware → domain)
// ───────────────────────────────────────────────────────────────

/// Read-side port for the temperature sensing pipeline.
///
/// Readings are fixed-point tenths of a degree, the same units as the
/// threshold and hysteresis parameters. The conversion pipeline (ADC
/// sampling, averaging, calibration) lives entirely behind this trait.
pub trait TemperatureProbe {
    /// Latest converted reading.
    fn read_temperature(&mut self) -> i16;
}

// ───────────────────────────────────────────────────────────────
// Switch output (driven adapter: domain → hardware)
// ───────────────────────────────────────────────────────────────

/// Write-side port for the relay/buzzer output.
pub trait SwitchOutput {
    /// Drive the physical output level.
    fn set_output(&mut self, on: bool);
}

// ───────────────────────────────────────────────────────────────
// Dispatch delegate (tick fan-out notifications)
// ───────────────────────────────────────────────────────────────

/// Callbacks the tick path fires for work that lives outside the core.
///
/// All three are no-argument triggers: the receiving side reads whatever
/// state it needs through [`Snapshot`](super::service::Snapshot) — the
/// core never pushes data into them.
pub trait DispatchDelegate {
    /// Redraw the menu/display.
    fn on_ui_refresh(&mut self);

    /// Start the next temperature conversion.
    fn on_sensor_kickoff(&mut self);

    /// The fermentation countdown just expired.
    fn on_fermentation_complete(&mut self);
}

// ───────────────────────────────────────────────────────────────
// Parameter store (driven adapter: domain ↔ persistent params)
// ───────────────────────────────────────────────────────────────

/// Loads and persists run parameters.
///
/// Implementations MUST validate before persisting — the core accepts any
/// parameter values as-is, so the store is the only place garbage can be
/// refused. Returns defaults when nothing is stored yet.
pub trait ParamPort {
    /// Load parameters, or defaults if none are stored.
    fn load(&self) -> Result<RunParams, ParamError>;

    /// Validate and persist parameters.
    fn save(&mut self, params: &RunParams) -> Result<(), ParamError>;
}

// ───────────────────────────────────────────────────────────────
// Event sink (domain → logging / telemetry)
// ───────────────────────────────────────────────────────────────

/// The core emits structured [`AppEvent`](super::events::AppEvent)s through
/// this port. Adapters decide where they go — serial log, display banner,
/// test recorder.
pub trait EventSink {
    fn emit(&mut self, event: &super::events::AppEvent);
}
