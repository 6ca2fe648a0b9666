//! APDU response parsing and status words
//!
//! Every response from the device ends with a 2-byte big-endian status
//! word; the bytes before it are the command-specific payload. Responses
//! shorter than the status word itself are malformed.

use std::fmt;

use bytes::Bytes;

/// Errors raised while interpreting response bytes.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ResponseError {
    /// The response was too short to carry a status word.
    #[error("response of {len} bytes is too short to carry a status word")]
    Truncated {
        /// Number of bytes actually received.
        len: usize,
    },

    /// The response payload did not have the shape the command expects.
    #[error("failed to parse response: {0}")]
    Parse(&'static str),
}

/// A 2-byte status word trailing every response.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct StatusWord {
    /// High status byte (SW1)
    pub sw1: u8,
    /// Low status byte (SW2)
    pub sw2: u8,
}

impl StatusWord {
    /// Status word reported by the device when a command succeeds.
    pub const SUCCESS: Self = Self::from_u16(0x9000);

    /// Create a status word from its two bytes
    pub const fn new(sw1: u8, sw2: u8) -> Self {
        Self { sw1, sw2 }
    }

    /// Create a status word from a 16-bit value
    pub const fn from_u16(sw: u16) -> Self {
        Self {
            sw1: (sw >> 8) as u8,
            sw2: (sw & 0xFF) as u8,
        }
    }

    /// The status word as a big-endian 16-bit value
    pub const fn to_u16(self) -> u16 {
        ((self.sw1 as u16) << 8) | (self.sw2 as u16)
    }

    /// Whether this is the success status word
    pub const fn is_success(self) -> bool {
        self.to_u16() == Self::SUCCESS.to_u16()
    }
}

impl fmt::Debug for StatusWord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StatusWord({:#06X})", self.to_u16())
    }
}

impl fmt::Display for StatusWord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#06X}", self.to_u16())
    }
}

impl From<u16> for StatusWord {
    fn from(sw: u16) -> Self {
        Self::from_u16(sw)
    }
}

impl From<StatusWord> for u16 {
    fn from(sw: StatusWord) -> Self {
        sw.to_u16()
    }
}

/// A parsed APDU response: payload plus trailing status word.
#[derive(Clone, PartialEq, Eq)]
pub struct Response {
    payload: Bytes,
    status: StatusWord,
}

impl Response {
    /// Split raw response bytes into payload and status word.
    ///
    /// Fails with [`ResponseError::Truncated`] when fewer than 2 bytes
    /// were received.
    pub fn from_bytes(raw: &[u8]) -> Result<Self, ResponseError> {
        if raw.len() < 2 {
            return Err(ResponseError::Truncated { len: raw.len() });
        }

        let (payload, status) = raw.split_at(raw.len() - 2);
        Ok(Self {
            payload: Bytes::copy_from_slice(payload),
            status: StatusWord::new(status[0], status[1]),
        })
    }

    /// The command-specific payload bytes, without the status word
    pub fn payload(&self) -> &[u8] {
        &self.payload
    }

    /// Consume the response and return the payload
    pub fn into_payload(self) -> Bytes {
        self.payload
    }

    /// The trailing status word
    pub const fn status(&self) -> StatusWord {
        self.status
    }
}

impl fmt::Debug for Response {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Response")
            .field("payload", &hex::encode(&self.payload))
            .field("status", &self.status)
            .finish()
    }
}
