// libgmscan/src/protocol/parser.rs

use crate::{Error, Result};

/// Ensure the slice has at least `min` bytes.
pub fn ensure_len(data: &[u8], min: usize) -> Result<()> {
    if data.len() < min {
        return Err(Error::InvalidLength {
            expected: min,
            actual: data.len(),
        });
    }
    Ok(())
}

/// Read a big-endian u16 at given index, with bounds checking.
pub fn be_u16_at(data: &[u8], idx: usize) -> Result<u16> {
    ensure_len(data, idx + 2)?;
    Ok(u16::from_be_bytes([data[idx], data[idx + 1]]))
}

/// Return a subslice with bounds checking.
pub fn slice_at(data: &[u8], idx: usize, len: usize) -> Result<&[u8]> {
    ensure_len(data, idx + len)?;
    Ok(&data[idx..idx + len])
}

/// Read a single byte at `idx` with bounds checking.
pub fn byte_at(data: &[u8], idx: usize) -> Result<u8> {
    ensure_len(data, idx + 1)?;
    Ok(data[idx])
}

/// Ensure `data` starts with the two header bytes.
pub fn expect_header(data: &[u8], header: [u8; 2]) -> Result<()> {
    let actual = slice_at(data, 0, 2)?;
    if actual != &header[..] {
        return Err(Error::FrameFormat(format!(
            "invalid header: expected {}, got {}",
            crate::utils::bytes_to_hex(&header),
            crate::utils::bytes_to_hex(actual)
        )));
    }
    Ok(())
}

/// Compare a received big-endian CRC at `idx` against the one computed over `body`.
pub fn expect_crc(data: &[u8], idx: usize, body: &[u8]) -> Result<()> {
    let actual = be_u16_at(data, idx)?;
    let expected = super::checksum::compute_crc16(body);
    if actual != expected {
        return Err(Error::ChecksumMismatch { expected, actual });
    }
    Ok(())
}
