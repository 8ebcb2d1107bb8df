use crate::common::fixtures;

use libgmscan::protocol::{Command, Frame, decode_command_frame, registers};
use libgmscan::{Address, CommandType};

#[test]
fn golden_frames_decode_to_their_commands() {
    let cmd = decode_command_frame(&fixtures::read_fail_message_frame()).unwrap();
    assert_eq!(cmd, Command::write(registers::READ_FAIL_MESSAGE));

    let cmd = decode_command_frame(&fixtures::save_config_frame()).unwrap();
    assert_eq!(cmd.cmd_type, CommandType::Config);
    assert_eq!(cmd.address, Address::new(0x0000));
    assert_eq!(cmd.payload.as_bytes(), &[0x00]);
}

#[test]
fn enable_qr_roundtrip() {
    let cmd = Command::new(CommandType::Write, Address::new(0x3F), true);
    let frame = Frame::encode(&cmd).unwrap();
    assert_eq!(frame, fixtures::enable_qr_frame());
    assert_eq!(Frame::decode(&frame).unwrap(), cmd);
}
