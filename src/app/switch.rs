//! Electric power switch — the toggle controller.
//!
//! [`ElectricPowerSwitch`] borrows any [`Switchable`] device and keeps a
//! single bookkeeping flag.  It never queries the device; `is_on` only
//! records the last transition the switch itself requested.
//!
//! ```text
//!   press()          press()
//!  ┌─────┐ activate ┌────┐ deactivate ┌─────┐
//!  │ OFF │ ───────▶ │ ON │ ─────────▶ │ OFF │ ...
//!  └─────┘          └────┘            └─────┘
//! ```

use log::{debug, warn};

use crate::error::Result;

use super::ports::Switchable;

// ───────────────────────────────────────────────────────────────
// SwitchState
// ───────────────────────────────────────────────────────────────

/// Position of the switch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SwitchState {
    #[default]
    Off,
    On,
}

impl SwitchState {
    pub fn from_on(on: bool) -> Self {
        if on { Self::On } else { Self::Off }
    }

    /// The state a press moves to from `self`.
    pub fn toggled(self) -> Self {
        match self {
            Self::Off => Self::On,
            Self::On => Self::Off,
        }
    }

    pub fn is_on(self) -> bool {
        matches!(self, Self::On)
    }
}

// ───────────────────────────────────────────────────────────────
// ElectricPowerSwitch
// ───────────────────────────────────────────────────────────────

/// Toggle controller bound to a borrowed device.
pub struct ElectricPowerSwitch<'a, D: Switchable + ?Sized> {
    device: &'a mut D,
    is_on: bool,
}

impl<'a, D: Switchable + ?Sized> ElectricPowerSwitch<'a, D> {
    /// Bind a switch to `device`.  Starts in the OFF position without
    /// touching the device.
    pub fn new(device: &'a mut D) -> Self {
        Self {
            device,
            is_on: false,
        }
    }

    /// Flip the device and the switch position together.
    ///
    /// Exactly one device call is made.  The position is updated only once
    /// that call succeeds; on error the switch keeps its previous position
    /// and the error is returned.
    pub fn press(&mut self) -> Result<()> {
        let from = self.state();
        let to = from.toggled();

        let outcome = match to {
            SwitchState::On => self.device.activate(),
            SwitchState::Off => self.device.deactivate(),
        };
        if let Err(e) = outcome {
            warn!("switch: {:?} -> {:?} failed: {}", from, to, e);
            return Err(e.into());
        }

        self.is_on = to.is_on();
        debug!("switch: {:?} -> {:?}", from, to);
        Ok(())
    }

    pub fn is_on(&self) -> bool {
        self.is_on
    }

    pub fn state(&self) -> SwitchState {
        SwitchState::from_on(self.is_on)
    }

    pub fn device(&self) -> &D {
        self.device
    }

    /// Release the borrow on the device.
    pub fn into_inner(self) -> &'a mut D {
        self.device
    }
}
