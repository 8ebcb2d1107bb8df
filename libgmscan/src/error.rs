// libgmscan/src/error.rs

use thiserror::Error;

/// 共通エラー型
#[derive(Error, Debug)]
pub enum Error {
    #[error("device not found")]
    DeviceNotFound,

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    // serialport はオプション依存なので feature を有効にした時だけ変換を提供する
    #[cfg(feature = "serial")]
    #[error("serial error: {0}")]
    Serial(#[from] serialport::Error),

    #[error("transport already closed")]
    TransportClosed,

    #[error("operation timed out")]
    Timeout,

    #[error("address out of range: {address:#x} does not fit in 16 bits")]
    AddressOutOfRange { address: u32 },

    #[error("payload too large: {len} bytes, at most {max} fit the length field")]
    PayloadTooLarge { len: usize, max: usize },

    #[error("invalid frame length: expected {expected}, got {actual}")]
    InvalidLength { expected: usize, actual: usize },

    #[error("checksum mismatch: expected {expected:#06x}, got {actual:#06x}")]
    ChecksumMismatch { expected: u16, actual: u16 },

    #[error("frame format error: {0}")]
    FrameFormat(String),

    #[error("device reported failure: status={status:#04x}")]
    DeviceStatus { status: u8 },

    #[error("unsupported operation: {0}")]
    UnsupportedOperation(String),
}

/// Coarse classification of [`Error`] values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The connection failed to open, write or read.
    Transport,
    /// A blocking read ran out of time.
    Timeout,
    /// A command was rejected before any bytes were sent.
    Encoding,
    /// A response did not match the protocol.
    Protocol,
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::DeviceNotFound | Self::Io(_) | Self::TransportClosed => ErrorKind::Transport,
            #[cfg(feature = "serial")]
            Self::Serial(_) => ErrorKind::Transport,
            Self::Timeout => ErrorKind::Timeout,
            Self::AddressOutOfRange { .. } | Self::PayloadTooLarge { .. } => ErrorKind::Encoding,
            Self::InvalidLength { .. }
            | Self::ChecksumMismatch { .. }
            | Self::FrameFormat(_)
            | Self::DeviceStatus { .. }
            | Self::UnsupportedOperation(_) => ErrorKind::Protocol,
        }
    }

    pub fn is_timeout(&self) -> bool {
        self.kind() == ErrorKind::Timeout
    }
}

pub type Result<T> = std::result::Result<T, Error>;
