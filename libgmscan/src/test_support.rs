//! Test support helpers intended for use by unit and integration tests.
//!
//! These helpers centralize common MockTransport setup so tests across the
//! crate and tests/ directory can reuse the same logic.
#![allow(dead_code)]

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::constants::RESPONSE_HEADER;
use crate::protocol::checksum::crc16_bytes;
use crate::transport::mock::MockTransport;
use crate::transport::traits::Transport;
use crate::{device, types, Result};

/// Successful acknowledgement as sent by the module: `02 00 00 01 00 33 31`.
#[doc(hidden)]
pub fn ack_ok() -> Vec<u8> {
    ack_with_status(0x00)
}

/// Well-formed acknowledgement carrying `status`.
#[doc(hidden)]
pub fn ack_with_status(status: u8) -> Vec<u8> {
    let body = [status, 0x01, 0x00];
    let mut out = RESPONSE_HEADER.to_vec();
    out.extend_from_slice(&body);
    out.extend_from_slice(&crc16_bytes(&body));
    out
}

/// MockTransport behind a shared handle, so a test can inspect traffic
/// after handing the transport to a Device.
#[doc(hidden)]
#[derive(Clone, Default)]
pub struct SharedMock {
    inner: Arc<Mutex<MockTransport>>,
}

impl SharedMock {
    pub fn new(mock: MockTransport) -> Self {
        Self {
            inner: Arc::new(Mutex::new(mock)),
        }
    }

    fn lock(&self) -> MutexGuard<'_, MockTransport> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn with<T>(&self, f: impl FnOnce(&mut MockTransport) -> T) -> T {
        f(&mut *self.lock())
    }

    pub fn push_response(&self, resp: Vec<u8>) {
        self.lock().push_response(resp);
    }

    pub fn sent(&self) -> Vec<Vec<u8>> {
        self.lock().sent.clone()
    }

    pub fn write_timeouts(&self) -> Vec<u64> {
        self.lock().write_timeouts.clone()
    }

    pub fn read_timeouts(&self) -> Vec<u64> {
        self.lock().read_timeouts.clone()
    }

    pub fn is_closed(&self) -> bool {
        self.lock().closed
    }
}

impl Transport for SharedMock {
    fn write(&mut self, data: &[u8], timeout_ms: u64) -> Result<()> {
        self.lock().write(data, timeout_ms)
    }
    fn read_exact(&mut self, len: usize, timeout_ms: u64) -> Result<Vec<u8>> {
        self.lock().read_exact(len, timeout_ms)
    }
    fn read_until(&mut self, delimiter: u8, timeout_ms: u64) -> Result<Vec<u8>> {
        self.lock().read_until(delimiter, timeout_ms)
    }
    fn flush(&mut self) -> Result<()> {
        self.lock().flush()
    }
    fn close(&mut self) -> Result<()> {
        self.lock().close()
    }
}

/// Convenience: create and configure a Device<Ready> backed by a
/// MockTransport. One success ack per init register is queued first,
/// followed by `responses`.
#[doc(hidden)]
pub fn configured_mock_device(
    device_type: types::DeviceType,
    responses: Vec<Vec<u8>>,
) -> Result<(device::Device<device::Ready>, SharedMock)> {
    let mock = SharedMock::default();
    seed_init_and_frames(&mock, device_type, responses);
    let dev = device::Device::new_with_transport(Box::new(mock.clone()), device_type).configure()?;
    Ok((dev, mock))
}

/// Push init acks for `device_type` then additional frames onto the mock.
#[doc(hidden)]
pub fn seed_init_and_frames(
    mock: &SharedMock,
    device_type: types::DeviceType,
    frames: Vec<Vec<u8>>,
) {
    for _ in device::profile_for(device_type).init_sequence {
        mock.push_response(ack_ok());
    }
    for f in frames {
        mock.push_response(f);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ack_ok_matches_module_bytes() {
        assert_eq!(ack_ok(), vec![0x02, 0x00, 0x00, 0x01, 0x00, 0x33, 0x31]);
    }

    #[test]
    fn configured_mock_device_consumes_init_acks() {
        let (_dev, mock) =
            configured_mock_device(types::DeviceType::Gm65, vec![b"X\r".to_vec()]).unwrap();
        assert_eq!(mock.sent().len(), 4);
        assert_eq!(mock.with(|m| m.rx.len()), 2);
    }
}
