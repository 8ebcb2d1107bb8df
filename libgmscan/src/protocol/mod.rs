// libgmscan/src/protocol/mod.rs

pub mod checksum;
pub mod codec;
pub mod command;
pub mod frame;
pub mod parser;
pub mod registers;
pub mod response;

pub use checksum::{compute_crc16, crc16_bytes, crc16_with_init};
pub use codec::{decode_ack, decode_command_frame, decode_scan_result, encode_command};
pub use command::Command;
pub use frame::Frame;
pub use response::{Ack, AckPolicy, ScanResult};
