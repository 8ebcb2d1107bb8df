#![cfg(feature = "serial")]

//! Helpers for tests against a real module.
//!
//! The port is taken from `GMSCAN_PORT`. When it is unset (CI etc.) the
//! helpers return `Ok(None)` so the tests pass without hardware.

use libgmscan::device::{Device, Ready};
use libgmscan::{DeviceType, Error, Result};

pub fn open_and_configure_device() -> Result<Option<Device<Ready>>> {
    let Ok(port) = std::env::var("GMSCAN_PORT") else {
        return Ok(None);
    };
    match Device::connect(&port, DeviceType::Gm65) {
        Ok(device) => device.configure().map(Some),
        Err(Error::DeviceNotFound) => Ok(None),
        Err(e) => Err(e),
    }
}
