// libgmscan/src/protocol/registers.rs
//! Register table shared by the GM-series modules.

use crate::types::Register;

/// Decode LED on, mute off, laser and illumination on while scanning,
/// command trigger mode.
pub const SCAN_MODE: Register = Register::new(0x0000, 0b1101_0101);

/// Writing 1 starts a single scan in command trigger mode.
pub const TRIGGER_SCANNING: Register = Register::new(0x0002, 0b0000_0001);

/// Disable all symbologies, full-range decoding.
pub const DISABLE_ALL_FORMATS: Register = Register::new(0x002C, 0b0000_0000);

/// Raw data over serial, CR terminator, read-fail return enabled,
/// no prefix, code ID or suffix.
pub const SERIAL_PROTOCOL_CONFIG: Register = Register::new(0x0060, 0b0001_0001);

/// Length of the read-fail message.
pub const READ_FAIL_MSG_LENGTH: Register = Register::new(0x0081, 0x02);

/// Read-fail message: NAK CR.
pub const READ_FAIL_MESSAGE: Register = Register::new(0x0082, 0x150D);

/// Written with the CONFIG verb to persist settings to flash.
pub const SAVE_CONFIG: Register = Register::new(0x0000, 0x00);
