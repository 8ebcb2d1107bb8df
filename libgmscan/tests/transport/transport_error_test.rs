use libgmscan::transport::Transport;
use libgmscan::transport::mock::MockTransport;
use libgmscan::{Error, ErrorKind};

#[test]
fn write_failure_and_recovery() {
    let mut m = MockTransport::new();
    m.set_write_failures(1);

    // First write fails (simulated)
    let err = m.write(&[0x7E], 1000).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Transport);

    // Second write goes through
    m.write(&[0x7E], 1000).unwrap();
    assert_eq!(m.sent.len(), 1);
}

#[test]
fn empty_receive_buffer_times_out() {
    let mut m = MockTransport::new();
    assert!(matches!(m.read_exact(7, 10), Err(Error::Timeout)));
    assert!(matches!(m.read_until(0x0D, 10), Err(Error::Timeout)));
}

#[test]
fn closed_transport_rejects_io() {
    let mut m = MockTransport::new();
    m.close().unwrap();
    assert!(matches!(m.read_exact(1, 10), Err(Error::TransportClosed)));
}
