// libgmscan/src/prelude.rs

pub use crate::device::{Configuring, Device, DeviceBuilder, DeviceState, Ready, SharedDevice};
pub use crate::protocol::{
    Ack, AckPolicy, Command, ScanResult, compute_crc16, crc16_bytes, encode_command,
};
pub use crate::transport::{SerialConfig, Transport};
pub use crate::{
    Address, CodeFormat, CommandType, DeviceType, Error, ErrorKind, Payload, Register, Result,
};

pub use crate::utils::{bytes_to_hex, bytes_to_hex_spaced, default_read_timeout, ms};
