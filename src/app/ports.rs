//! Port traits — the boundary between the switch and the devices it drives.
//!
//! ```text
//!   ElectricPowerSwitch ──▶ Switchable ◀── LightBulb / GpioSwitch
//! ```
//!
//! The switch depends only on [`Switchable`]; concrete devices live in
//! [`drivers`](crate::drivers) and implement it.  Neither side knows the
//! other's concrete type.

use crate::error::ActuatorError;

// ───────────────────────────────────────────────────────────────
// Switchable port (driven adapter: domain → device)
// ───────────────────────────────────────────────────────────────

/// A device that can be turned on and off.
///
/// Implementations are free to keep state, but the switch never reads it:
/// calling `activate` twice simply performs the side effect twice.
pub trait Switchable {
    /// Energise the device.
    fn activate(&mut self) -> Result<(), ActuatorError>;

    /// De-energise the device.
    fn deactivate(&mut self) -> Result<(), ActuatorError>;
}

impl<T: Switchable + ?Sized> Switchable for &mut T {
    fn activate(&mut self) -> Result<(), ActuatorError> {
        (**self).activate()
    }

    fn deactivate(&mut self) -> Result<(), ActuatorError> {
        (**self).deactivate()
    }
}

impl<T: Switchable + ?Sized> Switchable for Box<T> {
    fn activate(&mut self) -> Result<(), ActuatorError> {
        (**self).activate()
    }

    fn deactivate(&mut self) -> Result<(), ActuatorError> {
        (**self).deactivate()
    }
}
