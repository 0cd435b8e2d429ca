//! GPIO-driven lamp (relay or MOSFET on a digital output).
//!
//! Drives any [`embedded_hal::digital::OutputPin`]: high to energise,
//! low to de-energise.  Boards that wire the relay coil to sink current
//! use [`GpioSwitch::active_low`] to invert the polarity.

use embedded_hal::digital::{Error as _, OutputPin};
use log::warn;

use crate::app::ports::Switchable;
use crate::error::ActuatorError;

pub struct GpioSwitch<P: OutputPin> {
    pin: P,
    active_low: bool,
}

impl<P: OutputPin> GpioSwitch<P> {
    pub fn new(pin: P) -> Self {
        Self {
            pin,
            active_low: false,
        }
    }

    pub fn active_low(pin: P) -> Self {
        Self {
            pin,
            active_low: true,
        }
    }

    pub fn is_active_low(&self) -> bool {
        self.active_low
    }

    pub fn release(self) -> P {
        self.pin
    }

    fn drive(&mut self, energise: bool) -> Result<(), ActuatorError> {
        let high = energise != self.active_low;
        let res = if high {
            self.pin.set_high()
        } else {
            self.pin.set_low()
        };
        res.map_err(|e| {
            warn!("gpio: set {} failed ({:?})", if high { "high" } else { "low" }, e.kind());
            ActuatorError::GpioWriteFailed
        })
    }
}

impl<P: OutputPin> Switchable for GpioSwitch<P> {
    fn activate(&mut self) -> Result<(), ActuatorError> {
        self.drive(true)
    }

    fn deactivate(&mut self) -> Result<(), ActuatorError> {
        self.drive(false)
    }
}
