//! Outbound application events.
//!
//! The [`AppService`](super::service::AppService) emits these through the
//! [`EventSink`](super::ports::EventSink) port on state transitions only —
//! never on the steady tick path.

use crate::alarm::TemperatureAlert;

/// Structured events emitted by the control core.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEvent {
    /// The service has started ticking.
    Started,

    /// The hysteresis controller was gated on or off.
    RelayEnabled(bool),

    /// The controller committed a demand flip after its hold-off window.
    RelayCommitted { active: bool },

    /// The fermentation countdown was armed.
    FermentationStarted { hours: u16 },

    /// The fermentation countdown ran out (and force-disabled the relay).
    FermentationComplete,

    /// The overheat indication changed (`None` = back in bounds).
    AlertChanged(Option<TemperatureAlert>),
}
