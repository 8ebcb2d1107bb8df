// fixtures.rs — golden frames captured from a GM65 module

use libgmscan::protocol::{Command, registers};

fn frame(s: &str) -> Vec<u8> {
    hex::decode(s.replace(' ', "")).unwrap()
}

pub fn scan_mode_frame() -> Vec<u8> {
    frame("7e00 08 01 0000 d5 ef41")
}

pub fn serial_protocol_frame() -> Vec<u8> {
    libgmscan::protocol::codec::encode_command_frame(&Command::write(
        registers::SERIAL_PROTOCOL_CONFIG,
    ))
    .unwrap()
}

pub fn read_fail_length_frame() -> Vec<u8> {
    libgmscan::protocol::codec::encode_command_frame(&Command::write(
        registers::READ_FAIL_MSG_LENGTH,
    ))
    .unwrap()
}

pub fn read_fail_message_frame() -> Vec<u8> {
    frame("7e00 08 02 0082 150d 31d0")
}

pub fn trigger_frame() -> Vec<u8> {
    frame("7e00 08 01 0002 01 02da")
}

pub fn disable_all_frame() -> Vec<u8> {
    frame("7e00 08 01 002c 00 3712")
}

pub fn enable_qr_frame() -> Vec<u8> {
    frame("7e00 08 01 003f 01 7113")
}

pub fn save_config_frame() -> Vec<u8> {
    frame("7e00 09 01 0000 00 dec8")
}

pub fn ack_ok() -> Vec<u8> {
    frame("0200 00 01 00 3331")
}

pub fn barcode() -> &'static [u8] {
    b"4006381333931"
}

pub fn barcode_frame() -> Vec<u8> {
    let mut v = barcode().to_vec();
    v.push(0x0D);
    v
}
