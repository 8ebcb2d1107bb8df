// libgmscan/src/protocol/codec.rs

use crate::constants::SCAN_TERMINATOR;
use crate::types::{CommandType, Payload};
use crate::{Error, Result};

use super::Frame;
use super::command::Command;
use super::response::{Ack, AckPolicy};

/// Encode a command description into wire bytes. Both fields are checked
/// against their widths before anything is produced.
pub fn encode_command(
    cmd_type: CommandType,
    address: u32,
    value: impl Into<Payload>,
) -> Result<Vec<u8>> {
    let cmd = Command::try_new(cmd_type, address, value)?;
    encode_command_frame(&cmd)
}

/// Encode a Command into a full wire frame (header, body, CRC).
pub fn encode_command_frame(cmd: &Command) -> Result<Vec<u8>> {
    Frame::encode(cmd)
}

/// Parse an outbound frame back into its Command.
pub fn decode_command_frame(frame: &[u8]) -> Result<Command> {
    Frame::decode(frame)
}

/// Decode the fixed-size acknowledgement read after a WRITE/CONFIG command.
pub fn decode_ack(raw: &[u8], policy: AckPolicy) -> Result<Ack> {
    Ack::decode(raw, policy)
}

/// Strip the CR terminator from a scan-result frame. Unterminated input is
/// rejected rather than returned as partial data.
pub fn decode_scan_result(raw: &[u8]) -> Result<Vec<u8>> {
    match raw.split_last() {
        Some((&SCAN_TERMINATOR, data)) => Ok(data.to_vec()),
        _ => Err(Error::FrameFormat(
            "scan result is not terminated by CR".into(),
        )),
    }
}
