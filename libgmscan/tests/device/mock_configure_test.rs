use crate::common::fixtures;

use libgmscan::protocol::AckPolicy;
use libgmscan::test_support::{SharedMock, ack_with_status, configured_mock_device};
use libgmscan::{CodeFormat, DeviceBuilder, DeviceType, Error};

#[test]
fn gm65_init_sequence_matches_golden_frames() {
    let (_dev, mock) = configured_mock_device(DeviceType::Gm65, vec![]).unwrap();
    assert_eq!(
        mock.sent(),
        vec![
            fixtures::scan_mode_frame(),
            fixtures::serial_protocol_frame(),
            fixtures::read_fail_length_frame(),
            fixtures::read_fail_message_frame(),
        ]
    );
}

#[test]
fn negative_ack_fails_strict_configure() {
    let mock = SharedMock::default();
    mock.push_response(fixtures::ack_ok());
    mock.push_response(ack_with_status(0x01));

    let result = DeviceBuilder::new()
        .with_transport(Box::new(mock.clone()))
        .build_configured();
    assert!(matches!(result, Err(Error::DeviceStatus { status: 0x01 })));
    assert_eq!(mock.sent().len(), 2);
}

#[test]
fn negative_ack_tolerated_when_lenient() {
    let mock = SharedMock::default();
    mock.push_response(fixtures::ack_ok());
    mock.push_response(ack_with_status(0x01));
    mock.push_response(fixtures::ack_ok());
    mock.push_response(fixtures::ack_ok());

    let dev = DeviceBuilder::new()
        .with_transport(Box::new(mock.clone()))
        .with_ack_policy(AckPolicy::Lenient)
        .build_configured();
    assert!(dev.is_ok());
    assert_eq!(mock.sent().len(), 4);
}

#[test]
fn format_and_save_commands() {
    let acks = vec![fixtures::ack_ok(); 3];
    let (mut dev, mock) = configured_mock_device(DeviceType::Gm812, acks).unwrap();

    dev.disable_all_formats().unwrap();
    dev.enable_format(CodeFormat::Qr, true).unwrap();
    dev.save_config().unwrap();

    let sent = mock.sent();
    assert_eq!(
        &sent[2..],
        &[
            fixtures::disable_all_frame(),
            fixtures::enable_qr_frame(),
            fixtures::save_config_frame(),
        ]
    );
}

#[test]
fn enable_all_formats_writes_every_register() {
    let acks = vec![fixtures::ack_ok(); 3];
    let (mut dev, mock) = configured_mock_device(DeviceType::Gm65, acks).unwrap();
    dev.enable_all_formats().unwrap();

    let addresses: Vec<u8> = mock.sent()[4..].iter().map(|f| f[5]).collect();
    assert_eq!(addresses, vec![0x3F, 0x54, 0x55]);
}
