//! Small helpers shared by the protocol, transport and device layers.

pub mod hex;
pub mod timeout;

pub use self::hex::*;
pub use self::timeout::*;
