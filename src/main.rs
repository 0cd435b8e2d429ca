//! PowerSwitch — Main Entry Point
//!
//! ```text
//!  ElectricPowerSwitch ──▶ Switchable ◀── LightBulb (stdout)
//! ```
//!
//! Builds a bulb, binds a switch to it and presses the switch twice:
//! one "turned on" line, then one "turned off" line.
#![deny(unused_must_use)]

use anyhow::Result;
use log::info;

use powerswitch::{ElectricPowerSwitch, LightBulb};

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    info!("PowerSwitch v{}", env!("CARGO_PKG_VERSION"));

    let mut bulb = LightBulb::stdout();
    let mut switch = ElectricPowerSwitch::new(&mut bulb);

    switch.press()?;
    switch.press()?;

    info!("switch finished {:?}", switch.state());
    Ok(())
}
