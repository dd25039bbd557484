//! Relay and buzzer control.

pub mod buzzer;
pub mod relay;
