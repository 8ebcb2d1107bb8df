//! GM812 configuration

use super::DeviceProfile;
use crate::protocol::registers::{SCAN_MODE, SERIAL_PROTOCOL_CONFIG};
use crate::types::{CodeFormat, DeviceType, Register};

pub const ACK_TIMEOUT_MS: u64 = 1_000;
pub const SCAN_TIMEOUT_MS: u64 = 10_000;

/// The GM812 has no read-fail message registers (0x81/0x82); set those up
/// with the vendor's configuration codes instead.
pub const INIT_SEQUENCE: &[Register] = &[SCAN_MODE, SERIAL_PROTOCOL_CONFIG];

pub const PROFILE: DeviceProfile = DeviceProfile {
    device_type: DeviceType::Gm812,
    init_sequence: INIT_SEQUENCE,
    formats: &CodeFormat::ALL,
    ack_timeout_ms: ACK_TIMEOUT_MS,
    scan_timeout_ms: SCAN_TIMEOUT_MS,
};
