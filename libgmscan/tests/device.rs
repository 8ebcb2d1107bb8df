// Aggregator for device integration tests in `tests/device/`.

mod common;

#[path = "device/type_state_test.rs"]
mod type_state_test;

#[path = "device/mock_configure_test.rs"]
mod mock_configure_test;

#[path = "device/mock_scan_test.rs"]
mod mock_scan_test;
