// libgmscan/src/device/builder.rs

use crate::device::handle::{Configuring, Device, DeviceOptions, Ready};
use crate::device::models::profile_for;
use crate::protocol::AckPolicy;
use crate::transport::{SerialConfig, Transport};
use crate::types::DeviceType;
use crate::{Error, Result};

/// Helper to construct a Device with optional configuration.
#[derive(Default)]
pub struct DeviceBuilder {
    transport: Option<Box<dyn Transport>>,
    device_type: DeviceType,
    ack_policy: Option<AckPolicy>,
    ack_timeout_ms: Option<u64>,
    scan_timeout_ms: Option<u64>,
    write_timeout_ms: Option<u64>,
}

impl DeviceBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Provide an already-created transport instance (e.g. MockTransport)
    pub fn with_transport(mut self, transport: Box<dyn Transport>) -> Self {
        self.transport = Some(transport);
        self
    }

    /// Open a serial port as the transport.
    #[cfg(feature = "serial")]
    pub fn with_serial_port(mut self, port: &str, config: &SerialConfig) -> Result<Self> {
        let transport = crate::transport::SerialTransport::open(port, config)?;
        self.transport = Some(Box::new(transport));
        Ok(self.with_serial_config(config))
    }

    /// Use the link's read timeout for scan results and its write timeout
    /// for commands.
    pub fn with_serial_config(mut self, config: &SerialConfig) -> Self {
        self.scan_timeout_ms = Some(config.read_timeout_ms);
        self.write_timeout_ms = Some(config.write_timeout_ms);
        self
    }

    pub fn with_device_type(mut self, device_type: DeviceType) -> Self {
        self.device_type = device_type;
        self
    }

    pub fn with_ack_policy(mut self, policy: AckPolicy) -> Self {
        self.ack_policy = Some(policy);
        self
    }

    pub fn with_ack_timeout_ms(mut self, ms: u64) -> Self {
        self.ack_timeout_ms = Some(ms);
        self
    }

    pub fn with_scan_timeout_ms(mut self, ms: u64) -> Self {
        self.scan_timeout_ms = Some(ms);
        self
    }

    pub fn with_write_timeout_ms(mut self, ms: u64) -> Self {
        self.write_timeout_ms = Some(ms);
        self
    }

    /// Consume the builder and return a Device awaiting `configure`.
    /// Requires a transport to be provided; otherwise returns DeviceNotFound.
    pub fn build(self) -> Result<Device<Configuring>> {
        let transport = self.transport.ok_or(Error::DeviceNotFound)?;
        let profile = profile_for(self.device_type);
        let defaults = DeviceOptions::for_profile(profile);
        let options = DeviceOptions {
            ack_policy: self.ack_policy.unwrap_or(defaults.ack_policy),
            ack_timeout_ms: self.ack_timeout_ms.unwrap_or(defaults.ack_timeout_ms),
            scan_timeout_ms: self.scan_timeout_ms.unwrap_or(defaults.scan_timeout_ms),
            write_timeout_ms: self.write_timeout_ms.unwrap_or(defaults.write_timeout_ms),
        };
        Ok(Device::with_options(transport, profile, options))
    }

    /// Build and run the initialization sequence in one step.
    pub fn build_configured(self) -> Result<Device<Ready>> {
        self.build()?.configure()
    }
}
