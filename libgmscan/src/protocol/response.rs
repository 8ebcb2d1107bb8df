// libgmscan/src/protocol/response.rs

use crate::constants::{ACK_FRAME_LEN, READ_FAIL_MARKER, RESPONSE_HEADER, RESPONSE_STATUS_SUCCESS};
use crate::protocol::parser::{expect_crc, expect_header};
use crate::{Error, Result};

/// How strictly acknowledgement frames are checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AckPolicy {
    /// Header, CRC and status must all be valid.
    #[default]
    Strict,
    /// Only the byte count is enforced; the contents are logged and accepted.
    Lenient,
}

/// Acknowledgement frame sent by the module after a WRITE or CONFIG command.
///
/// Layout: `02 00 | STATUS | LEN(=1) | DATA | CRC(2, BE)`, CRC over STATUS..DATA.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ack([u8; ACK_FRAME_LEN]);

impl Ack {
    /// Decode a raw acknowledgement according to `policy`.
    pub fn decode(raw: &[u8], policy: AckPolicy) -> Result<Self> {
        if raw.len() != ACK_FRAME_LEN {
            return Err(Error::InvalidLength {
                expected: ACK_FRAME_LEN,
                actual: raw.len(),
            });
        }
        let mut bytes = [0u8; ACK_FRAME_LEN];
        bytes.copy_from_slice(raw);
        let ack = Self(bytes);

        if policy == AckPolicy::Strict {
            ack.validate()?;
        }
        Ok(ack)
    }

    /// Check header, length byte, CRC and status.
    pub fn validate(&self) -> Result<()> {
        expect_header(&self.0, RESPONSE_HEADER)?;
        if self.0[3] != 0x01 {
            return Err(Error::FrameFormat(format!(
                "acknowledgement length byte {:#04x}, expected 0x01",
                self.0[3]
            )));
        }
        expect_crc(&self.0, 5, &self.0[2..5])?;
        if !self.is_success() {
            return Err(Error::DeviceStatus {
                status: self.status(),
            });
        }
        Ok(())
    }

    pub fn as_bytes(&self) -> &[u8; ACK_FRAME_LEN] {
        &self.0
    }

    pub fn status(&self) -> u8 {
        self.0[2]
    }

    pub fn data(&self) -> u8 {
        self.0[4]
    }

    pub fn crc(&self) -> u16 {
        u16::from_be_bytes([self.0[5], self.0[6]])
    }

    pub fn is_success(&self) -> bool {
        self.status() == RESPONSE_STATUS_SUCCESS
    }

    pub fn to_hex(&self) -> String {
        crate::utils::bytes_to_hex(&self.0)
    }
}

/// Interpreted scan-result frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScanResult {
    /// Decoded barcode data, terminator stripped.
    Data(Vec<u8>),
    /// The module answered with its configured read-fail message.
    NoRead,
}

impl ScanResult {
    pub fn from_bytes(data: Vec<u8>) -> Self {
        if data == [READ_FAIL_MARKER] {
            Self::NoRead
        } else {
            Self::Data(data)
        }
    }

    pub fn data(&self) -> Option<&[u8]> {
        match self {
            Self::Data(d) => Some(d),
            Self::NoRead => None,
        }
    }

    /// Lossy UTF-8 rendering of the barcode contents.
    pub fn to_string_lossy(&self) -> Option<String> {
        self.data().map(|d| String::from_utf8_lossy(d).into_owned())
    }
}
