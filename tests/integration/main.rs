//! Integration test driver for `tests/integration/` submodule.
//!
//! Each `mod` below maps to a file that exercises the switch against
//! mock or captured devices.  Everything runs on the host.

mod switch_tests;
