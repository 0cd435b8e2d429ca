//! Light bulb driver.
//!
//! Reports every transition as one line on its notification sink
//! (`"LightBulb: turned on..."` / `"LightBulb: turned off..."`).  The bulb
//! keeps no on/off state of its own; repeated calls repeat the line.
//!
//! ## Dual-target design
//!
//! In the binary the sink is process stdout.  In tests any
//! [`std::io::Write`] (usually a `Vec<u8>`) captures the output.

use std::io::{self, Write};

use log::warn;

use crate::app::ports::Switchable;
use crate::config::DeviceConfig;
use crate::error::ActuatorError;

pub struct LightBulb<W: Write = io::Stdout> {
    sink: W,
    config: DeviceConfig,
}

impl LightBulb {
    /// Bulb that announces its transitions on stdout.
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> LightBulb<W> {
    pub fn new(sink: W) -> Self {
        Self::with_config(sink, DeviceConfig::default())
    }

    pub fn with_config(sink: W, config: DeviceConfig) -> Self {
        Self { sink, config }
    }

    pub fn config(&self) -> &DeviceConfig {
        &self.config
    }

    pub fn sink(&self) -> &W {
        &self.sink
    }

    pub fn into_sink(self) -> W {
        self.sink
    }

    /// The transition counts as done once the line is written; a failed
    /// flush afterwards is only logged.
    fn notify(&mut self, on: bool) -> Result<(), ActuatorError> {
        let message = if on {
            &self.config.on_message
        } else {
            &self.config.off_message
        };
        let line = format!("{}: {}\n", self.config.label, message);
        if let Err(e) = self.sink.write_all(line.as_bytes()) {
            warn!("{}: notification failed: {}", self.config.label, e);
            return Err(ActuatorError::WriteFailed);
        }
        if let Err(e) = self.sink.flush() {
            warn!("{}: flush failed: {}", self.config.label, e);
        }
        Ok(())
    }
}

impl<W: Write> Switchable for LightBulb<W> {
    fn activate(&mut self) -> Result<(), ActuatorError> {
        self.notify(true)
    }

    fn deactivate(&mut self) -> Result<(), ActuatorError> {
        self.notify(false)
    }
}
