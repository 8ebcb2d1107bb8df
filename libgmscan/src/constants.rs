// libgmscan/src/constants.rs
//! Common protocol constants used across the crate

/// Host->module command header: 0x7E 0x00
pub const COMMAND_HEADER: [u8; 2] = [0x7E, 0x00];

/// Module->host response header: 0x02 0x00
pub const RESPONSE_HEADER: [u8; 2] = [0x02, 0x00];

/// Command type codes
pub const CMD_TYPE_READ: u8 = 0x07;
pub const CMD_TYPE_WRITE: u8 = 0x08;
pub const CMD_TYPE_CONFIG: u8 = 0x09;

/// Response status reported by the module on success
pub const RESPONSE_STATUS_SUCCESS: u8 = 0x00;

/// Header(2) + type(1) + len(1) + address(2) + crc(2), i.e. a frame without payload
pub const COMMAND_OVERHEAD_LEN: usize = 8;

/// Maximum payload length representable by the 1-byte length field
pub const MAX_PAYLOAD_LEN: usize = 255;

/// Fixed acknowledgement length: header(2) status(1) len(1) data(1) crc(2)
pub const ACK_FRAME_LEN: usize = 7;

/// Scan results are terminated by CR
pub const SCAN_TERMINATOR: u8 = 0x0D;

/// NAK, sent as the body of the read-fail message
pub const READ_FAIL_MARKER: u8 = 0x15;

/// Serial defaults of the modules (factory setting)
pub const DEFAULT_BAUD_RATE: u32 = 9600;
pub const DEFAULT_READ_TIMEOUT_MS: u64 = 10_000;
pub const DEFAULT_WRITE_TIMEOUT_MS: u64 = 1_000;
