// libgmscan/src/transport/mock.rs

use std::collections::VecDeque;

use crate::transport::traits::Transport;
use crate::{Error, Result};

/// Mock transport for unit tests. It records written frames and serves reads
/// from a queue of bytes, the way a serial port's receive buffer would.
#[derive(Debug, Default)]
pub struct MockTransport {
    pub sent: Vec<Vec<u8>>,
    pub rx: VecDeque<u8>,
    /// Testing hook: number of subsequent writes that should fail
    pub write_failures: usize,
    /// Timeouts passed to each write call, in call order
    pub write_timeouts: Vec<u64>,
    /// Timeouts passed to each read call, in call order
    pub read_timeouts: Vec<u64>,
    pub flushes: usize,
    pub closed: bool,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue bytes that the "module" will send back.
    pub fn push_response(&mut self, resp: Vec<u8>) {
        self.rx.extend(resp);
    }

    /// Set how many subsequent write calls should fail (for tests).
    pub fn set_write_failures(&mut self, n: usize) {
        self.write_failures = n;
    }

    pub fn pop_sent(&mut self) -> Option<Vec<u8>> {
        self.sent.pop()
    }

    fn ensure_open(&self) -> Result<()> {
        if self.closed {
            return Err(Error::TransportClosed);
        }
        Ok(())
    }
}

impl Transport for MockTransport {
    fn write(&mut self, data: &[u8], timeout_ms: u64) -> Result<()> {
        self.ensure_open()?;
        self.write_timeouts.push(timeout_ms);
        if self.write_failures > 0 {
            self.write_failures -= 1;
            return Err(Error::Io(std::io::Error::new(
                std::io::ErrorKind::BrokenPipe,
                "simulated write failure",
            )));
        }
        self.sent.push(data.to_vec());
        Ok(())
    }

    fn read_exact(&mut self, len: usize, timeout_ms: u64) -> Result<Vec<u8>> {
        self.ensure_open()?;
        self.read_timeouts.push(timeout_ms);
        if self.rx.is_empty() {
            return Err(Error::Timeout);
        }
        let n = len.min(self.rx.len());
        Ok(self.rx.drain(..n).collect())
    }

    fn read_until(&mut self, delimiter: u8, timeout_ms: u64) -> Result<Vec<u8>> {
        self.ensure_open()?;
        self.read_timeouts.push(timeout_ms);
        match self.rx.iter().position(|&b| b == delimiter) {
            Some(idx) => Ok(self.rx.drain(..=idx).collect()),
            None => {
                // Pending input is dropped, matching SerialTransport.
                self.rx.clear();
                Err(Error::Timeout)
            }
        }
    }

    fn flush(&mut self) -> Result<()> {
        self.ensure_open()?;
        self.flushes += 1;
        self.rx.clear();
        Ok(())
    }

    fn close(&mut self) -> Result<()> {
        if self.closed {
            return Ok(());
        }
        self.flush()?;
        self.closed = true;
        Ok(())
    }
}
