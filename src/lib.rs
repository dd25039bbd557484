//! FermaStat firmware core.
//!
//! The control logic for a fermentation appliance: a 500 Hz tick-driven
//! timebase with a packed uptime counter, a fermentation countdown, and a
//! hysteresis relay controller (with an optional buzzer pattern while
//! holding is off). Hardware lives behind the port traits in
//! [`app::ports`]; the same tick path runs under a real timer interrupt on
//! the target and under a virtual clock in the test suite.

#![deny(unused_must_use)]

pub mod alarm;
pub mod app;
pub mod clock;
pub mod config;
pub mod control;
pub mod dispatcher;
pub mod drivers;
pub mod ferment;
pub mod format;

pub mod adapters;
pub mod error;
