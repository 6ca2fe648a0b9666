//! APDU command definitions and traits
//!
//! This module provides types and traits for building the command half of
//! an APDU exchange: a 4-byte header (CLA, INS, P1, P2) optionally followed
//! by a length-prefixed payload. The device protocol served here never uses
//! an expected-length (Le) trailer; the transport owns any further framing.

use std::fmt;

use bytes::{BufMut, Bytes, BytesMut};

use crate::response::{Response, StatusWord};

/// Status words accepted when a command does not declare its own set.
const ACCEPT_SUCCESS_ONLY: &[StatusWord] = &[StatusWord::SUCCESS];

/// Core trait for typed APDU commands
///
/// A typed command knows its header bytes and payload, which status words
/// the caller treats as non-error, and how to turn the raw response into a
/// domain value.
pub trait ApduCommand {
    /// Success response type
    type Success;

    /// Error response type
    type Error: fmt::Debug;

    /// Command class (CLA)
    fn class(&self) -> u8;

    /// Instruction code (INS)
    fn instruction(&self) -> u8;

    /// First parameter (P1)
    fn p1(&self) -> u8;

    /// Second parameter (P2)
    fn p2(&self) -> u8;

    /// Command payload data (optional)
    fn data(&self) -> Option<&[u8]>;

    /// Status words the caller accepts as non-error for this command.
    ///
    /// Anything outside this set is rejected by the transport before the
    /// response ever reaches [`parse_response`](Self::parse_response).
    fn accepted_status(&self) -> &[StatusWord] {
        ACCEPT_SUCCESS_ONLY
    }

    /// Convert to a generic [`Command`]
    fn to_command(&self) -> Command {
        Command {
            cla: self.class(),
            ins: self.instruction(),
            p1: self.p1(),
            p2: self.p2(),
            data: self.data().map(Bytes::copy_from_slice),
        }
    }

    /// Parse response into the command's response type
    fn parse_response(response: Response) -> Result<Self::Success, Self::Error>;
}

/// Generic APDU command structure
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Command {
    /// Command class byte
    pub cla: u8,
    /// Instruction byte
    pub ins: u8,
    /// Parameter 1
    pub p1: u8,
    /// Parameter 2
    pub p2: u8,
    /// Command data (optional)
    pub data: Option<Bytes>,
}

impl Command {
    /// Create a new command with just the header bytes
    pub const fn new(cla: u8, ins: u8, p1: u8, p2: u8) -> Self {
        Self {
            cla,
            ins,
            p1,
            p2,
            data: None,
        }
    }

    /// Create a new command with data payload
    pub fn new_with_data<T: Into<Bytes>>(cla: u8, ins: u8, p1: u8, p2: u8, data: T) -> Self {
        Self {
            cla,
            ins,
            p1,
            p2,
            data: Some(data.into()),
        }
    }

    /// Set the data field
    pub fn with_data<T: Into<Bytes>>(mut self, data: T) -> Self {
        self.data = Some(data.into());
        self
    }

    /// Serialize to raw frame bytes: header, then Lc and payload if present
    pub fn to_bytes(&self) -> Bytes {
        let mut buffer = BytesMut::with_capacity(self.serialized_length());

        // Header: CLA, INS, P1, P2
        buffer.put_u8(self.cla);
        buffer.put_u8(self.ins);
        buffer.put_u8(self.p1);
        buffer.put_u8(self.p2);

        // Add Lc and data if present
        if let Some(data) = &self.data {
            buffer.put_u8(data.len() as u8);
            buffer.put_slice(data);
        }

        buffer.freeze()
    }

    /// Length of the serialized command
    pub fn serialized_length(&self) -> usize {
        // Header (CLA, INS, P1, P2) is always 4 bytes
        match &self.data {
            Some(data) => 4 + 1 + data.len(),
            None => 4,
        }
    }
}

impl ApduCommand for Command {
    type Success = Response;
    type Error = crate::response::ResponseError;

    fn class(&self) -> u8 {
        self.cla
    }

    fn instruction(&self) -> u8 {
        self.ins
    }

    fn p1(&self) -> u8 {
        self.p1
    }

    fn p2(&self) -> u8 {
        self.p2
    }

    fn data(&self) -> Option<&[u8]> {
        self.data.as_deref()
    }

    fn parse_response(response: Response) -> Result<Self::Success, Self::Error> {
        Ok(response)
    }
}
