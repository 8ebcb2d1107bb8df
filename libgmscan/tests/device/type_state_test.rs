use libgmscan::device::{Device, DeviceBuilder, DeviceState};
use libgmscan::test_support::{SharedMock, seed_init_and_frames};
use libgmscan::types::DeviceType;

#[test]
fn configure_transitions_to_ready() {
    let mock = SharedMock::default();
    seed_init_and_frames(&mock, DeviceType::Gm65, vec![]);

    let device = Device::new_with_transport(Box::new(mock.clone()), DeviceType::Gm65);

    // A fresh handle is configuring and already knows its model
    assert_eq!(device.state(), DeviceState::Configuring);
    assert_eq!(device.device_type(), DeviceType::Gm65);

    let ready = device.configure().unwrap();
    assert_eq!(ready.state(), DeviceState::Ready);
    assert_eq!(ready.device_type(), DeviceType::Gm65);
}

#[test]
fn failed_configure_releases_transport() {
    // No acks queued: the first read times out
    let mock = SharedMock::default();
    let result = DeviceBuilder::new()
        .with_transport(Box::new(mock.clone()))
        .build_configured();

    assert!(matches!(result, Err(libgmscan::Error::Timeout)));
    assert!(mock.is_closed());
}
