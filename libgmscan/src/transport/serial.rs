// libgmscan/src/transport/serial.rs

#![cfg(feature = "serial")]

use std::io::{ErrorKind, Read, Write};
use std::time::Duration;

use log::{debug, info};
use serialport::{ClearBuffer, SerialPort};

use crate::transport::config::SerialConfig;
use crate::transport::traits::Transport;
use crate::utils::Deadline;
use crate::{Error, Result};

/// Serial transport backed by the `serialport` crate. It is feature-gated
/// behind `--features serial`.
pub struct SerialTransport {
    port: Option<Box<dyn SerialPort>>,
    name: String,
}

impl SerialTransport {
    /// Open `port_name` (e.g. `/dev/ttyUSB0`, `COM3`) with the given settings.
    pub fn open(port_name: &str, config: &SerialConfig) -> Result<Self> {
        info!(
            "Connecting to serial port {} at {} baud",
            port_name, config.baud_rate
        );
        let port = serialport::new(port_name, config.baud_rate)
            .timeout(config.read_timeout())
            .open()
            .map_err(|e| match e.kind() {
                serialport::ErrorKind::NoDevice => Error::DeviceNotFound,
                _ => Error::Serial(e),
            })?;

        Ok(Self {
            port: Some(port),
            name: port_name.to_string(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    fn port(&mut self) -> Result<&mut Box<dyn SerialPort>> {
        self.port.as_mut().ok_or(Error::TransportClosed)
    }
}

impl Transport for SerialTransport {
    fn write(&mut self, data: &[u8], timeout_ms: u64) -> Result<()> {
        let port = self.port()?;
        port.set_timeout(Duration::from_millis(timeout_ms))?;
        port.write_all(data).map_err(|e| match e.kind() {
            ErrorKind::TimedOut => Error::Timeout,
            _ => Error::Io(e),
        })?;
        port.flush()?;
        Ok(())
    }

    fn read_exact(&mut self, len: usize, timeout_ms: u64) -> Result<Vec<u8>> {
        let port = self.port()?;
        let deadline = Deadline::after_ms(timeout_ms);
        let mut out = vec![0u8; len];
        let mut filled = 0usize;

        while filled < len {
            let Some(left) = deadline.remaining() else {
                break;
            };
            port.set_timeout(left)?;
            match port.read(&mut out[filled..]) {
                Ok(0) => break,
                Ok(n) => filled += n,
                Err(e) if e.kind() == ErrorKind::TimedOut => break,
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => return Err(Error::Io(e)),
            }
        }

        if filled == 0 && len > 0 {
            return Err(Error::Timeout);
        }
        out.truncate(filled);
        Ok(out)
    }

    fn read_until(&mut self, delimiter: u8, timeout_ms: u64) -> Result<Vec<u8>> {
        let port = self.port()?;
        let deadline = Deadline::after_ms(timeout_ms);
        let mut out = Vec::new();
        let mut byte = [0u8; 1];

        // Byte-wise so nothing after the delimiter is consumed.
        loop {
            let Some(left) = deadline.remaining() else {
                debug!("read_until timed out after {} bytes", out.len());
                // Drop the late tail so the next ack read starts on a frame boundary.
                port.clear(ClearBuffer::Input)?;
                return Err(Error::Timeout);
            };
            port.set_timeout(left)?;
            match port.read(&mut byte) {
                Ok(1) => {
                    out.push(byte[0]);
                    if byte[0] == delimiter {
                        return Ok(out);
                    }
                }
                Ok(_) => {}
                Err(e) if e.kind() == ErrorKind::TimedOut => {}
                Err(e) if e.kind() == ErrorKind::Interrupted => {}
                Err(e) => return Err(Error::Io(e)),
            }
        }
    }

    fn flush(&mut self) -> Result<()> {
        let port = self.port()?;
        port.flush()?;
        port.clear(ClearBuffer::All)?;
        Ok(())
    }

    fn close(&mut self) -> Result<()> {
        if self.port.is_none() {
            return Ok(());
        }
        let flushed = self.flush();
        // The port is released even if the flush failed.
        self.port = None;
        debug!("Closed serial port {}", self.name);
        flushed
    }
}
