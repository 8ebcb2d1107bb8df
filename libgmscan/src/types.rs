// libgmscan/src/types.rs

use crate::Error;
use crate::constants::{CMD_TYPE_CONFIG, CMD_TYPE_READ, CMD_TYPE_WRITE};
use derive_more::Display;
use std::convert::TryFrom;

/// Command verb carried in the TYPE byte of an outbound frame.
#[repr(u8)]
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CommandType {
    #[display(fmt = "READ")]
    Read = CMD_TYPE_READ,
    #[display(fmt = "WRITE")]
    Write = CMD_TYPE_WRITE,
    #[display(fmt = "CONFIG")]
    Config = CMD_TYPE_CONFIG,
}

impl CommandType {
    pub fn code(self) -> u8 {
        self as u8
    }

    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            CMD_TYPE_READ => Some(Self::Read),
            CMD_TYPE_WRITE => Some(Self::Write),
            CMD_TYPE_CONFIG => Some(Self::Config),
            _ => None,
        }
    }
}

/// Register address (u16, big-endian on the wire)
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[display(fmt = "{:#06x}", _0)]
pub struct Address(u16);

impl Address {
    pub const fn new(address: u16) -> Self {
        Self(address)
    }

    pub fn as_u16(&self) -> u16 {
        self.0
    }

    pub fn to_be_bytes(&self) -> [u8; 2] {
        self.0.to_be_bytes()
    }

    pub fn from_be_bytes(bytes: [u8; 2]) -> Self {
        Self(u16::from_be_bytes(bytes))
    }
}

impl From<u16> for Address {
    fn from(address: u16) -> Self {
        Self(address)
    }
}

impl TryFrom<u32> for Address {
    type Error = Error;

    fn try_from(address: u32) -> Result<Self, Self::Error> {
        u16::try_from(address)
            .map(Self)
            .map_err(|_| Error::AddressOutOfRange { address })
    }
}

/// Unsigned payload value stored as its minimal big-endian byte encoding.
///
/// The encoded length is `ceil(bit_length / 8)`, but never less than one
/// byte: zero is carried as a single `0x00`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Payload(Vec<u8>);

impl Payload {
    /// Build a payload from big-endian magnitude bytes. Leading zero bytes
    /// are dropped.
    pub fn from_be_bytes(bytes: &[u8]) -> Self {
        let start = bytes.iter().position(|&b| b != 0).unwrap_or(bytes.len());
        let mut out = bytes[start..].to_vec();
        if out.is_empty() {
            out.push(0);
        }
        Self(out)
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false: even zero occupies one byte.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Numeric value, if it fits in a u64.
    pub fn to_u64(&self) -> Option<u64> {
        if self.0.len() > 8 {
            return None;
        }
        Some(self.0.iter().fold(0u64, |acc, &b| (acc << 8) | b as u64))
    }

    pub fn to_hex(&self) -> String {
        crate::utils::bytes_to_hex(self.as_bytes())
    }
}

macro_rules! payload_from_uint {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Payload {
                fn from(value: $t) -> Self {
                    Self::from_be_bytes(&value.to_be_bytes())
                }
            }
        )*
    };
}

payload_from_uint!(u8, u16, u32, u64, u128);

impl From<bool> for Payload {
    fn from(value: bool) -> Self {
        Self(vec![value as u8])
    }
}

impl From<&[u8]> for Payload {
    fn from(bytes: &[u8]) -> Self {
        Self::from_be_bytes(bytes)
    }
}

/// A known device setting: fixed address plus the value written to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Register {
    pub address: Address,
    pub value: u32,
}

impl Register {
    pub const fn new(address: u16, value: u32) -> Self {
        Self {
            address: Address::new(address),
            value,
        }
    }

    pub fn payload(&self) -> Payload {
        Payload::from(self.value)
    }
}

/// Barcode symbologies with a dedicated enable register.
#[repr(u16)]
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CodeFormat {
    #[display(fmt = "QR")]
    Qr = 0x3F,
    #[display(fmt = "DataMatrix")]
    DataMatrix = 0x54,
    #[display(fmt = "PDF417")]
    Pdf417 = 0x55,
}

impl CodeFormat {
    pub const ALL: [CodeFormat; 3] = [Self::Qr, Self::DataMatrix, Self::Pdf417];

    pub fn address(self) -> Address {
        Address::new(self as u16)
    }
}

/// DeviceType
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DeviceType {
    #[default]
    #[display(fmt = "GM65")]
    Gm65,
    #[display(fmt = "GM812")]
    Gm812,
}

impl DeviceType {
    /// Parse a model name as printed on the module ("GM65", "gm812", ...).
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_uppercase().as_str() {
            "GM65" => Some(Self::Gm65),
            "GM812" => Some(Self::Gm812),
            _ => None,
        }
    }
}
