// libgmscan/src/device/handle.rs

use std::marker::PhantomData;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use derive_more::Display;
use log::{debug, info, trace, warn};

use crate::constants::{ACK_FRAME_LEN, DEFAULT_WRITE_TIMEOUT_MS, SCAN_TERMINATOR};
use crate::device::models::DeviceProfile;
use crate::protocol::registers;
use crate::protocol::{Ack, AckPolicy, Command, ScanResult, codec};
use crate::transport::{SerialConfig, Transport};
use crate::types::{CodeFormat, CommandType, DeviceType};
use crate::utils::{bytes_to_hex, printable};
use crate::{Error, ErrorKind, Result};

/// Runtime view of where a handle is in its lifecycle.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq)]
pub enum DeviceState {
    Disconnected,
    Configuring,
    Ready,
    Scanning,
}

/// Type-state markers
pub struct Configuring;
pub struct Ready;

pub trait State {
    const STATE: DeviceState;
}

impl State for Configuring {
    const STATE: DeviceState = DeviceState::Configuring;
}

impl State for Ready {
    const STATE: DeviceState = DeviceState::Ready;
}

/// Per-handle I/O settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeviceOptions {
    pub ack_policy: AckPolicy,
    pub ack_timeout_ms: u64,
    pub scan_timeout_ms: u64,
    pub write_timeout_ms: u64,
}

impl DeviceOptions {
    /// Profile timeouts with strict acknowledgement checking.
    pub fn for_profile(profile: &DeviceProfile) -> Self {
        Self {
            ack_policy: AckPolicy::Strict,
            ack_timeout_ms: profile.ack_timeout_ms,
            scan_timeout_ms: profile.scan_timeout_ms,
            write_timeout_ms: DEFAULT_WRITE_TIMEOUT_MS,
        }
    }

    /// Take the scan-result read timeout and the write timeout from the
    /// serial link settings. The ack timeout stays with the profile.
    pub fn with_serial_config(self, config: &SerialConfig) -> Self {
        Self {
            scan_timeout_ms: config.read_timeout_ms,
            write_timeout_ms: config.write_timeout_ms,
            ..self
        }
    }
}

/// Owns the transport; flushes and closes it when dropped.
struct Connection {
    transport: Box<dyn Transport>,
    closed: bool,
}

impl Connection {
    fn new(transport: Box<dyn Transport>) -> Self {
        Self {
            transport,
            closed: false,
        }
    }

    fn transport(&mut self) -> Result<&mut dyn Transport> {
        if self.closed {
            return Err(Error::TransportClosed);
        }
        Ok(&mut *self.transport)
    }

    fn close(&mut self) -> Result<()> {
        if self.closed {
            return Ok(());
        }
        self.closed = true;
        self.transport.close()
    }
}

impl Drop for Connection {
    fn drop(&mut self) {
        if let Err(e) = self.close() {
            warn!("failed to close transport: {}", e);
        }
    }
}

/// Device handle that enforces configuration state at compile time.
pub struct Device<S = Configuring> {
    conn: Connection,
    profile: &'static DeviceProfile,
    options: DeviceOptions,
    _state: PhantomData<S>,
}

impl Device<Configuring> {
    /// Create a Device from an existing Transport instance. This is the
    /// entry point for tests where a MockTransport is provided.
    pub fn new_with_transport(transport: Box<dyn Transport>, device_type: DeviceType) -> Self {
        let profile = crate::device::models::profile_for(device_type);
        Self::with_options(transport, profile, DeviceOptions::for_profile(profile))
    }

    pub(crate) fn with_options(
        transport: Box<dyn Transport>,
        profile: &'static DeviceProfile,
        options: DeviceOptions,
    ) -> Self {
        trace!(
            "{}: {} -> {}",
            profile.device_type,
            DeviceState::Disconnected,
            DeviceState::Configuring
        );
        Self {
            conn: Connection::new(transport),
            profile,
            options,
            _state: PhantomData,
        }
    }

    /// Open a serial port with the factory link settings.
    #[cfg(feature = "serial")]
    pub fn connect(port: &str, device_type: DeviceType) -> Result<Self> {
        Self::connect_with(port, device_type, &SerialConfig::default())
    }

    #[cfg(feature = "serial")]
    pub fn connect_with(
        port: &str,
        device_type: DeviceType,
        config: &SerialConfig,
    ) -> Result<Self> {
        let transport = crate::transport::SerialTransport::open(port, config)?;
        let profile = crate::device::models::profile_for(device_type);
        let options = DeviceOptions::for_profile(profile).with_serial_config(config);
        Ok(Self::with_options(Box::new(transport), profile, options))
    }

    /// Run the profile's initialization sequence. Order matters: the scan
    /// mode write switches the module into command trigger mode.
    ///
    /// With [`AckPolicy::Strict`] the first failed acknowledgement aborts the
    /// sequence. With [`AckPolicy::Lenient`] malformed or negative
    /// acknowledgements are logged and the sequence continues; transport
    /// errors and timeouts abort under both policies. On error the handle
    /// is dropped, which closes the transport.
    pub fn configure(mut self) -> Result<Device<Ready>> {
        info!("Configuring {}", self.profile.device_type);

        for register in self.profile.init_sequence {
            match self.execute(&Command::write(*register)) {
                Ok(_) => {}
                Err(e)
                    if self.options.ack_policy == AckPolicy::Lenient
                        && e.kind() == ErrorKind::Protocol =>
                {
                    warn!(
                        "register {} not acknowledged, continuing: {}",
                        register.address, e
                    );
                }
                Err(e) => return Err(e),
            }
        }

        trace!(
            "{}: {} -> {}",
            self.profile.device_type,
            DeviceState::Configuring,
            DeviceState::Ready
        );
        Ok(Device {
            conn: self.conn,
            profile: self.profile,
            options: self.options,
            _state: PhantomData,
        })
    }
}

impl<S: State> Device<S> {
    /// Send one command and read its acknowledgement.
    pub fn execute(&mut self, cmd: &Command) -> Result<Ack> {
        let frame = codec::encode_command_frame(cmd)?;
        debug!("Sending command: {}", bytes_to_hex(&frame));

        let options = self.options;
        let transport = self.conn.transport()?;
        transport.write(&frame, options.write_timeout_ms)?;

        let raw = transport.read_exact(ACK_FRAME_LEN, options.ack_timeout_ms)?;
        debug!("Received response: {}", bytes_to_hex(&raw));

        let ack = codec::decode_ack(&raw, options.ack_policy)?;
        if !ack.is_success() {
            // Only reachable under the lenient policy
            warn!("module reported status {:#04x}", ack.status());
        }
        Ok(ack)
    }

    pub fn disable_all_formats(&mut self) -> Result<Ack> {
        info!("Disabling all formats on {}", self.profile.device_type);
        self.execute(&Command::write(registers::DISABLE_ALL_FORMATS))
    }

    pub fn enable_format(&mut self, format: CodeFormat, enable: bool) -> Result<Ack> {
        if !self.profile.supports_format(format) {
            return Err(Error::UnsupportedOperation(format!(
                "{} has no {} register",
                self.profile.device_type, format
            )));
        }
        info!(
            "{} format {} on {}",
            if enable { "Enabling" } else { "Disabling" },
            format,
            self.profile.device_type
        );
        self.execute(&Command::new(CommandType::Write, format.address(), enable))
    }

    /// Enable every format the profile has a register for.
    pub fn enable_all_formats(&mut self) -> Result<()> {
        for &format in self.profile.formats {
            self.enable_format(format, true)?;
        }
        Ok(())
    }

    /// Persist the current settings to the module's flash.
    pub fn save_config(&mut self) -> Result<Ack> {
        info!("Saving configuration to flash on {}", self.profile.device_type);
        self.execute(&Command::config(registers::SAVE_CONFIG))
    }

    pub fn state(&self) -> DeviceState {
        S::STATE
    }

    pub fn device_type(&self) -> DeviceType {
        self.profile.device_type
    }

    pub fn profile(&self) -> &'static DeviceProfile {
        self.profile
    }

    pub fn options(&self) -> &DeviceOptions {
        &self.options
    }

    /// Flush and close the transport, surfacing any error. Dropping the
    /// handle does the same but only logs failures.
    pub fn close(mut self) -> Result<()> {
        self.conn.close()
    }
}

impl Device<Ready> {
    /// Trigger one scan and return the barcode bytes without the CR
    /// terminator. The module answers a trigger with scan data, so no
    /// acknowledgement is read.
    pub fn trigger_scan(&mut self) -> Result<Vec<u8>> {
        info!("Triggering a scan on {}", self.profile.device_type);
        let frame = codec::encode_command_frame(&Command::write(registers::TRIGGER_SCANNING))?;
        debug!("Sending command: {}", bytes_to_hex(&frame));

        let device_type = self.profile.device_type;
        let options = self.options;
        let transport = self.conn.transport()?;
        transport.write(&frame, options.write_timeout_ms)?;

        trace!("{}: {} -> {}", device_type, DeviceState::Ready, DeviceState::Scanning);
        let raw = transport.read_until(SCAN_TERMINATOR, options.scan_timeout_ms);
        trace!("{}: {} -> {}", device_type, DeviceState::Scanning, DeviceState::Ready);

        let data = codec::decode_scan_result(&raw?)?;
        debug!("Received data: {}", printable(&data));
        Ok(data)
    }

    /// Like [`Device::trigger_scan`] but recognizes the read-fail message.
    pub fn scan(&mut self) -> Result<ScanResult> {
        self.trigger_scan().map(ScanResult::from_bytes)
    }

    /// Wrap the handle so several threads can share it. Each operation holds
    /// the lock for its whole write/read round trip.
    pub fn into_shared(self) -> SharedDevice {
        SharedDevice {
            inner: Arc::new(Mutex::new(self)),
        }
    }
}

/// Cloneable, thread-safe handle around a configured Device.
#[derive(Clone)]
pub struct SharedDevice {
    inner: Arc<Mutex<Device<Ready>>>,
}

impl SharedDevice {
    fn lock(&self) -> MutexGuard<'_, Device<Ready>> {
        // A panic in another caller leaves no partial frame state behind.
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Run `f` with exclusive access to the device.
    pub fn with<T>(&self, f: impl FnOnce(&mut Device<Ready>) -> T) -> T {
        f(&mut *self.lock())
    }

    pub fn trigger_scan(&self) -> Result<Vec<u8>> {
        self.lock().trigger_scan()
    }

    pub fn scan(&self) -> Result<ScanResult> {
        self.lock().scan()
    }

    pub fn disable_all_formats(&self) -> Result<Ack> {
        self.lock().disable_all_formats()
    }

    pub fn enable_format(&self, format: CodeFormat, enable: bool) -> Result<Ack> {
        self.lock().enable_format(format, enable)
    }

    pub fn save_config(&self) -> Result<Ack> {
        self.lock().save_config()
    }

    pub fn device_type(&self) -> DeviceType {
        self.lock().device_type()
    }
}
