//! Transport abstraction for frame exchanges
//!
//! A transport performs one blocking frame exchange at a time: hand the
//! serialized command to the device, wait, return the raw response bytes
//! (payload plus status suffix). The device holds exactly one in-flight
//! command/response session, so the trait takes `&mut self` and offers no
//! way to interleave exchanges on one channel.
//!
//! The transport owns the accept/reject contract for status words: a
//! response whose status is outside the caller-supplied accepted set is
//! reported as [`TransportError::UnacceptedStatus`] instead of being
//! returned. Connection lifecycle (open/close, enumeration) belongs to the
//! concrete transport, not to this trait.

use std::collections::VecDeque;

use bytes::Bytes;
use tracing::debug;

use crate::command::Command;
use crate::response::StatusWord;

/// Errors raised by a transport during a frame exchange.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TransportError {
    /// The device answered with a status word outside the accepted set.
    #[error("device returned status {status}")]
    UnacceptedStatus {
        /// The offending status word.
        status: StatusWord,
    },

    /// The response was too short to carry a status word.
    #[error("device response of {len} bytes is too short to carry a status word")]
    Truncated {
        /// Number of bytes actually received.
        len: usize,
    },

    /// The underlying byte pipe failed.
    #[error("frame exchange failed: {0}")]
    Channel(String),
}

/// One blocking frame exchange with the device.
pub trait Transport {
    /// Send `command` and return the raw response bytes.
    ///
    /// The returned bytes always include the trailing status word, and the
    /// status is guaranteed to be one of `accepted`; any other status fails
    /// the exchange with [`TransportError::UnacceptedStatus`].
    fn send(
        &mut self,
        command: &Command,
        accepted: &[StatusWord],
    ) -> Result<Bytes, TransportError>;
}

/// Scripted transport used in tests and examples.
///
/// Responses are replayed in the order they were queued; every sent command
/// is recorded so tests can assert on headers, payloads and ordering.
#[derive(Debug, Default)]
pub struct MockTransport {
    responses: VecDeque<Bytes>,
    sent: Vec<Command>,
}

impl MockTransport {
    /// Create an empty mock with no scripted responses
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a mock that will answer with a single response
    pub fn with_response(raw: impl Into<Bytes>) -> Self {
        let mut transport = Self::new();
        transport.push_response(raw);
        transport
    }

    /// Create a mock that will answer with `responses` in order
    pub fn with_responses<I, B>(responses: I) -> Self
    where
        I: IntoIterator<Item = B>,
        B: Into<Bytes>,
    {
        let mut transport = Self::new();
        for raw in responses {
            transport.push_response(raw);
        }
        transport
    }

    /// Queue one more scripted response
    pub fn push_response(&mut self, raw: impl Into<Bytes>) {
        self.responses.push_back(raw.into());
    }

    /// Commands sent so far, in order
    pub fn sent(&self) -> &[Command] {
        &self.sent
    }
}

impl Transport for MockTransport {
    fn send(
        &mut self,
        command: &Command,
        accepted: &[StatusWord],
    ) -> Result<Bytes, TransportError> {
        self.sent.push(command.clone());

        let raw = self
            .responses
            .pop_front()
            .ok_or_else(|| TransportError::Channel("no scripted response left".to_string()))?;

        if raw.len() < 2 {
            return Err(TransportError::Truncated { len: raw.len() });
        }

        let status = StatusWord::new(raw[raw.len() - 2], raw[raw.len() - 1]);
        debug!(cla = command.cla, ins = command.ins, %status, "mock exchange");

        if !accepted.contains(&status) {
            return Err(TransportError::UnacceptedStatus { status });
        }

        Ok(raw)
    }
}
