//! Application core — the switch and the port it drives, zero I/O.
//!
//! [`switch::ElectricPowerSwitch`] depends only on the
//! [`ports::Switchable`] trait, so the same switch works with any device
//! in [`drivers`](crate::drivers) or a test double.

pub mod ports;
pub mod switch;
