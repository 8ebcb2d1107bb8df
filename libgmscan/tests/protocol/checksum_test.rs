use libgmscan::protocol::{compute_crc16, crc16_bytes, crc16_with_init};

#[test]
fn xmodem_check_value() {
    assert_eq!(compute_crc16(b"123456789"), 0x31C3);
}

#[test]
fn same_table_seeded_with_ffff_gives_ccitt_false() {
    assert_eq!(crc16_with_init(0xFFFF, b"123456789"), 0x29B1);
}

#[test]
fn empty_input() {
    assert_eq!(compute_crc16(&[]), 0x0000);
}

#[test]
fn scan_mode_body() {
    let body = [0x08, 0x01, 0x00, 0x00, 0xD5];
    assert_eq!(crc16_bytes(&body), [0xEF, 0x41]);
}
