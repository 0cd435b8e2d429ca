//! PowerSwitch library.
//!
//! A power switch that toggles a device through the
//! [`Switchable`](app::ports::Switchable) port.  The switch never names a
//! concrete device; devices in [`drivers`] implement the port.

#![deny(unused_must_use)]

pub mod app;
pub mod config;
pub mod drivers;
pub mod error;

pub use app::ports::Switchable;
pub use app::switch::{ElectricPowerSwitch, SwitchState};
pub use drivers::light_bulb::LightBulb;
