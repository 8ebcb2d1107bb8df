// libgmscan/src/transport/traits.rs

use crate::Result;

/// Transport trait abstracts the serial link away from protocol/device logic.
///
/// Every blocking call takes its timeout explicitly so fake transports can
/// exercise timeout paths without real hardware.
pub trait Transport: Send {
    /// Write raw bytes to the module
    fn write(&mut self, data: &[u8], timeout_ms: u64) -> Result<()>;

    /// Read up to `len` bytes. Returns fewer bytes when the timeout expires
    /// after a partial read, and `Error::Timeout` when nothing arrived.
    fn read_exact(&mut self, len: usize, timeout_ms: u64) -> Result<Vec<u8>>;

    /// Read until `delimiter` is received. The returned bytes include the
    /// delimiter. Returns `Error::Timeout` if it does not arrive in time;
    /// partial data and any input still pending are discarded.
    fn read_until(&mut self, delimiter: u8, timeout_ms: u64) -> Result<Vec<u8>>;

    /// Flush pending output and discard buffered input
    fn flush(&mut self) -> Result<()>;

    /// Flush and release the underlying connection. Calling it twice is
    /// allowed; the second call is a no-op.
    fn close(&mut self) -> Result<()> {
        self.flush()
    }
}
