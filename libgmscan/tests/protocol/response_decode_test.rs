use crate::common::fixtures;

use libgmscan::protocol::{AckPolicy, ScanResult, decode_ack, decode_scan_result};
use libgmscan::{Error, ErrorKind};

#[test]
fn module_success_ack() {
    let ack = decode_ack(&fixtures::ack_ok(), AckPolicy::Strict).unwrap();
    assert!(ack.is_success());
    assert_eq!(ack.as_bytes().to_vec(), fixtures::ack_ok());
}

#[test]
fn short_ack_is_protocol_error() {
    let ack = fixtures::ack_ok();
    let err = decode_ack(&ack[..5], AckPolicy::Lenient).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Protocol);
    assert!(matches!(
        err,
        Error::InvalidLength {
            expected: 7,
            actual: 5
        }
    ));
}

#[test]
fn scan_frame_terminator_stripped() {
    let data = decode_scan_result(&fixtures::barcode_frame()).unwrap();
    assert_eq!(data, fixtures::barcode());
    assert_eq!(
        ScanResult::from_bytes(data).to_string_lossy().as_deref(),
        Some("4006381333931")
    );
}
