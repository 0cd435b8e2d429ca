//! Device configuration
//!
//! Label and notification texts for a switched device.  Built from
//! [`Default`] at start-up; the serde derives let a host application
//! embed it in its own configuration.

use serde::{Deserialize, Serialize};

/// Presentation settings for a notifying device.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeviceConfig {
    /// Name printed in front of every notification
    pub label: String,
    /// Text emitted on activation
    pub on_message: String,
    /// Text emitted on deactivation
    pub off_message: String,
}

impl DeviceConfig {
    /// Configuration with a custom label and the default messages.
    pub fn labelled(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            ..Self::default()
        }
    }
}

impl Default for DeviceConfig {
    fn default() -> Self {
        Self {
            label: "LightBulb".into(),
            on_message: "turned on...".into(),
            off_message: "turned off...".into(),
        }
    }
}
