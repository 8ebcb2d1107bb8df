use crate::common::fixtures;

use libgmscan::protocol::ScanResult;
use libgmscan::test_support::configured_mock_device;
use libgmscan::{DeviceState, DeviceType, Error};

#[test]
fn trigger_scan_returns_barcode() {
    let (mut dev, mock) =
        configured_mock_device(DeviceType::Gm65, vec![fixtures::barcode_frame()]).unwrap();

    let data = dev.trigger_scan().unwrap();
    assert_eq!(data, fixtures::barcode());
    assert_eq!(mock.sent().last(), Some(&fixtures::trigger_frame()));
    assert_eq!(dev.state(), DeviceState::Ready);
}

#[test]
fn trigger_scan_times_out_without_terminator() {
    let (mut dev, _mock) =
        configured_mock_device(DeviceType::Gm65, vec![fixtures::barcode().to_vec()]).unwrap();

    match dev.trigger_scan() {
        Err(e) => assert!(e.is_timeout()),
        Ok(data) => panic!("partial data returned: {:?}", data),
    }
}

#[test]
fn consecutive_scans() {
    let frames = vec![fixtures::barcode_frame(), vec![0x15, 0x0D]];
    let (mut dev, _mock) = configured_mock_device(DeviceType::Gm65, frames).unwrap();

    assert_eq!(
        dev.scan().unwrap(),
        ScanResult::Data(fixtures::barcode().to_vec())
    );
    assert_eq!(dev.scan().unwrap(), ScanResult::NoRead);
    assert!(matches!(dev.scan(), Err(Error::Timeout)));
}

#[test]
fn shared_device_scans_from_threads() {
    let frames = vec![fixtures::barcode_frame(); 4];
    let (dev, _mock) = configured_mock_device(DeviceType::Gm65, frames).unwrap();
    let shared = dev.into_shared();

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let shared = shared.clone();
            std::thread::spawn(move || shared.trigger_scan().unwrap())
        })
        .collect();
    for h in handles {
        assert_eq!(h.join().unwrap(), fixtures::barcode());
    }
}
