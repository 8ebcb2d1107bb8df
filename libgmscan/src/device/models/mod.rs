// libgmscan/src/device/models/mod.rs

use crate::types::{CodeFormat, DeviceType, Register};

pub mod gm65;
pub mod gm812;

/// Capability descriptor for one module variant. Variants differ only in
/// data (which registers exist, timing), so they are described rather than
/// subclassed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeviceProfile {
    pub device_type: DeviceType,
    /// WRITE commands issued, in order, by `configure`
    pub init_sequence: &'static [Register],
    /// Symbologies with an enable register on this module
    pub formats: &'static [CodeFormat],
    /// Timeout for the fixed-size acknowledgement read
    pub ack_timeout_ms: u64,
    /// Timeout for the scan-result read after a trigger
    pub scan_timeout_ms: u64,
}

impl DeviceProfile {
    pub fn supports_format(&self, format: CodeFormat) -> bool {
        self.formats.contains(&format)
    }

    /// Whether the module has the read-fail message registers.
    pub fn supports_read_fail_message(&self) -> bool {
        self.init_sequence
            .contains(&crate::protocol::registers::READ_FAIL_MESSAGE)
    }
}

/// Look up the profile for a DeviceType.
pub fn profile_for(device_type: DeviceType) -> &'static DeviceProfile {
    match device_type {
        DeviceType::Gm65 => &gm65::PROFILE,
        DeviceType::Gm812 => &gm812::PROFILE,
    }
}
