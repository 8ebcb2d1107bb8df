// libgmscan/src/protocol/frame.rs

use crate::constants::{COMMAND_HEADER, COMMAND_OVERHEAD_LEN};
use crate::protocol::checksum::crc16_bytes;
use crate::protocol::command::Command;
use crate::protocol::parser::{be_u16_at, byte_at, ensure_len, expect_crc, expect_header, slice_at};
use crate::types::{Address, CommandType, Payload};
use crate::{Error, Result};

/// Outbound frame helper. Provides encode/decode of the wire frame
/// Format: [Header(2)] [Type(1)] [Len(1)] [Addr(2)] [Payload(n)] [CRC(2)]
/// Header: 0x7E 0x00
/// CRC: CRC-16 over Type..Payload, big-endian
pub struct Frame;

impl Frame {
    /// Encode a command into a full frame
    pub fn encode(cmd: &Command) -> Result<Vec<u8>> {
        let body = cmd.encode_body()?;
        let mut out = Vec::with_capacity(COMMAND_HEADER.len() + body.len() + 2);
        out.extend_from_slice(&COMMAND_HEADER);
        out.extend_from_slice(&body);
        out.extend_from_slice(&crc16_bytes(&body));
        Ok(out)
    }

    /// Decode a full outbound frame back into the command it carries
    pub fn decode(frame: &[u8]) -> Result<Command> {
        // Minimal frame: header(2) + type(1) + len(1) + addr(2) + crc(2)
        ensure_len(frame, COMMAND_OVERHEAD_LEN)?;
        expect_header(frame, COMMAND_HEADER)?;

        let code = byte_at(frame, 2)?;
        let cmd_type = CommandType::from_code(code)
            .ok_or_else(|| Error::FrameFormat(format!("unknown command type {:#04x}", code)))?;

        let len = byte_at(frame, 3)? as usize;
        let required_len = COMMAND_OVERHEAD_LEN + len;
        if frame.len() != required_len {
            return Err(Error::InvalidLength {
                expected: required_len,
                actual: frame.len(),
            });
        }

        let body_end = 6 + len;
        expect_crc(frame, body_end, &frame[2..body_end])?;

        let address = Address::new(be_u16_at(frame, 4)?);
        let payload = Payload::from_be_bytes(slice_at(frame, 6, len)?);
        Ok(Command::new(cmd_type, address, payload))
    }
}
