//! Concrete devices implementing [`Switchable`](crate::app::ports::Switchable).

pub mod gpio_switch;
pub mod light_bulb;
