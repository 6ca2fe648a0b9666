//! Core traits and types for APDU (Application Protocol Data Unit) exchanges
//!
//! This crate provides the foundational types for talking to a hardware
//! signing device over a narrow command channel:
//!
//! - Building APDU commands (class, instruction, parameters, payload)
//! - Splitting raw responses into payload and trailing status word
//! - A blocking [`Transport`] abstraction performing one frame exchange
//!   at a time, with per-command sets of accepted status words
//!
//! The crate knows nothing about any particular device application; typed
//! commands and their response parsers live in the application crates that
//! build on top of it.
#![cfg_attr(not(test), warn(unused_crate_dependencies))]
#![forbid(unsafe_code)]
#![warn(missing_docs, rustdoc::missing_crate_level_docs)]

// Re-export bytes for convenience
pub use bytes::{Bytes, BytesMut};

// Main modules
pub mod command;
pub mod response;
pub mod transport;

pub use command::{ApduCommand, Command};
pub use response::{Response, ResponseError, StatusWord};
pub use transport::{MockTransport, Transport, TransportError};

/// Prelude module containing commonly used traits and types
pub mod prelude {
    // Core types
    pub use crate::{Bytes, BytesMut};

    // Command related
    pub use crate::command::{ApduCommand, Command};

    // Response related
    pub use crate::response::{Response, ResponseError, StatusWord};

    // Transport layer
    pub use crate::transport::{MockTransport, Transport, TransportError};
}

#[cfg(test)]
mod tests {
    use super::*;

    // Test the basic types are re-exported correctly
    #[test]
    fn test_reexports() {
        let cmd = Command::new(0xFF, 0x00, 0x00, 0x00);
        assert_eq!(cmd.class(), 0xFF);
        assert_eq!(cmd.instruction(), 0x00);

        let resp = Response::from_bytes(&[0x01, 0x02, 0x90, 0x00]).unwrap();
        assert!(resp.status().is_success());
        assert_eq!(resp.payload(), &[0x01, 0x02]);
        assert_eq!(resp.status(), StatusWord::new(0x90, 0x00));
    }
}
