// libgmscan/src/protocol/command.rs

use crate::constants::MAX_PAYLOAD_LEN;
use crate::types::{Address, CommandType, Payload, Register};
use crate::{Error, Result};

/// A logical request to the module: one verb, one register, one value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Command {
    pub cmd_type: CommandType,
    pub address: Address,
    pub payload: Payload,
}

impl Command {
    pub fn new(cmd_type: CommandType, address: Address, payload: impl Into<Payload>) -> Self {
        Self {
            cmd_type,
            address,
            payload: payload.into(),
        }
    }

    /// Like [`Command::new`] but validates a wide address first.
    pub fn try_new(cmd_type: CommandType, address: u32, payload: impl Into<Payload>) -> Result<Self> {
        let address = Address::try_from(address)?;
        Ok(Self::new(cmd_type, address, payload))
    }

    pub fn write(register: Register) -> Self {
        Self::new(CommandType::Write, register.address, register.payload())
    }

    pub fn config(register: Register) -> Self {
        Self::new(CommandType::Config, register.address, register.payload())
    }

    /// Encode the command body: TYPE | LEN | ADDR(2, BE) | PAYLOAD(LEN, BE).
    /// This is the part of the frame covered by the CRC.
    pub fn encode_body(&self) -> Result<Vec<u8>> {
        let payload = self.payload.as_bytes();
        if payload.len() > MAX_PAYLOAD_LEN {
            return Err(Error::PayloadTooLarge {
                len: payload.len(),
                max: MAX_PAYLOAD_LEN,
            });
        }

        let mut body = Vec::with_capacity(1 + 1 + 2 + payload.len());
        body.push(self.cmd_type.code());
        body.push(payload.len() as u8);
        body.extend_from_slice(&self.address.to_be_bytes());
        body.extend_from_slice(payload);
        Ok(body)
    }
}
