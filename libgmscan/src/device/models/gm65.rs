//! GM65 configuration

use super::DeviceProfile;
use crate::protocol::registers::{
    READ_FAIL_MESSAGE, READ_FAIL_MSG_LENGTH, SCAN_MODE, SERIAL_PROTOCOL_CONFIG,
};
use crate::types::{CodeFormat, DeviceType, Register};

/// Acknowledgements arrive well within a second at 9600 baud
pub const ACK_TIMEOUT_MS: u64 = 1_000;

/// A triggered scan lasts until a code is decoded or the module gives up
pub const SCAN_TIMEOUT_MS: u64 = 10_000;

/// Scan mode must be set first: it switches the module to command trigger mode.
pub const INIT_SEQUENCE: &[Register] = &[
    SCAN_MODE,
    SERIAL_PROTOCOL_CONFIG,
    READ_FAIL_MSG_LENGTH,
    READ_FAIL_MESSAGE,
];

pub const PROFILE: DeviceProfile = DeviceProfile {
    device_type: DeviceType::Gm65,
    init_sequence: INIT_SEQUENCE,
    formats: &CodeFormat::ALL,
    ack_timeout_ms: ACK_TIMEOUT_MS,
    scan_timeout_ms: SCAN_TIMEOUT_MS,
};
