use crate::common::fixtures;

use libgmscan::protocol::{compute_crc16, encode_command};
use libgmscan::{CommandType, Error, ErrorKind};

#[test]
fn scan_mode_golden_frame() {
    let frame = encode_command(CommandType::Write, 0x00, 0xD5u8).unwrap();
    assert_eq!(frame, fixtures::scan_mode_frame());

    let crc = compute_crc16(&[0x08, 0x01, 0x00, 0x00, 0xD5]);
    assert_eq!(&frame[7..], &crc.to_be_bytes());
}

#[test]
fn zero_payload_is_one_byte() {
    let frame = encode_command(CommandType::Write, 0x2C, 0u8).unwrap();
    assert_eq!(frame, fixtures::disable_all_frame());
    assert_eq!(frame[3], 0x01);
}

#[test]
fn two_byte_payload() {
    let frame = encode_command(CommandType::Write, 0x82, 0x150Du32).unwrap();
    assert_eq!(frame, fixtures::read_fail_message_frame());
}

#[test]
fn save_config_uses_config_type() {
    let frame = encode_command(CommandType::Config, 0x00, 0u8).unwrap();
    assert_eq!(frame, fixtures::save_config_frame());
}

#[test]
fn field_overflow_rejected_before_encoding() {
    let err = encode_command(CommandType::Write, 0x1_0000, 1u8).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Encoding);

    let huge = vec![0x01u8; 256];
    match encode_command(CommandType::Write, 0x00, &huge[..]) {
        Err(Error::PayloadTooLarge { len, .. }) => assert_eq!(len, 256),
        other => panic!("expected PayloadTooLarge, got {:?}", other),
    }
}
