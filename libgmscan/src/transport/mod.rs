// libgmscan/src/transport/mod.rs

pub mod config;
pub mod mock;
#[cfg(feature = "serial")]
pub mod serial;
pub mod traits;

pub use config::SerialConfig;
pub use mock::MockTransport;
#[cfg(feature = "serial")]
pub use serial::SerialTransport;
pub use traits::Transport;
