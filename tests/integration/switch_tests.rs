//! Integration tests for the switch → Switchable → device chain.

use super::mock_hw::{DeviceCall, MockDevice};

use powerswitch::error::{ActuatorError, Error};
use powerswitch::{ElectricPowerSwitch, SwitchState, Switchable};

#[test]
fn fresh_switch_is_off() {
    let mut dev = MockDevice::new();
    let sw = ElectricPowerSwitch::new(&mut dev);
    assert!(!sw.is_on());
    assert_eq!(sw.state(), SwitchState::Off);
    assert!(sw.device().calls.is_empty(), "binding must not touch the device");
}

#[test]
fn one_press_activates_once() {
    let mut dev = MockDevice::new();
    let mut sw = ElectricPowerSwitch::new(&mut dev);
    sw.press().unwrap();

    assert!(sw.is_on());
    assert_eq!(sw.device().count(DeviceCall::Activate), 1);
    assert_eq!(sw.device().count(DeviceCall::Deactivate), 0);
}

#[test]
fn two_presses_activate_then_deactivate() {
    let mut dev = MockDevice::new();
    let mut sw = ElectricPowerSwitch::new(&mut dev);
    sw.press().unwrap();
    sw.press().unwrap();
    assert!(!sw.is_on());

    assert_eq!(dev.calls, vec![DeviceCall::Activate, DeviceCall::Deactivate]);
}

#[test]
fn failure_propagates_and_position_is_kept() {
    let mut dev = MockDevice::failing_from(1);
    let mut sw = ElectricPowerSwitch::new(&mut dev);
    sw.press().unwrap();

    let err = sw.press().unwrap_err();
    assert_eq!(err, Error::Actuator(ActuatorError::WriteFailed));
    assert_eq!(sw.state(), SwitchState::On);

    // Retrying repeats the same request rather than skipping ahead.
    assert!(sw.press().is_err());
    assert_eq!(sw.device().calls, vec![DeviceCall::Activate]);
}

#[test]
fn dyn_device_through_mut_reference() {
    let mut dev = MockDevice::new();
    let erased: &mut dyn Switchable = &mut dev;
    let mut sw = ElectricPowerSwitch::new(erased);
    sw.press().unwrap();
    assert!(sw.is_on());
    drop(sw);
    assert_eq!(dev.calls, vec![DeviceCall::Activate]);
}
