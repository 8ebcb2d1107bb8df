// libgmscan/src/device/mod.rs

pub mod builder;
pub mod handle;
pub mod models;

pub use builder::DeviceBuilder;
pub use handle::{Configuring, Device, DeviceOptions, DeviceState, Ready, SharedDevice, State};
pub use models::{DeviceProfile, profile_for};
