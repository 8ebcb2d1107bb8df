use libgmscan::transport::Transport;
use libgmscan::transport::mock::MockTransport;

#[test]
fn mock_transport_write_and_read() {
    let mut m = MockTransport::new();
    m.push_response(vec![0x02, 0x00, 0x00, 0x01, 0x00, 0x33, 0x31]);
    m.write(&[0x7E, 0x00], 1000).unwrap();
    assert_eq!(m.sent.len(), 1);
    let r = m.read_exact(7, 1000).unwrap();
    assert_eq!(r.len(), 7);
}

#[test]
fn read_until_keeps_following_bytes() {
    let mut m = MockTransport::new();
    m.push_response(b"ABC\rrest".to_vec());
    assert_eq!(m.read_until(0x0D, 1000).unwrap(), b"ABC\r".to_vec());
    assert_eq!(m.read_exact(4, 1000).unwrap(), b"rest".to_vec());
}
