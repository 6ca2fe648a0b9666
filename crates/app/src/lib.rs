//! Host-side client for the Signet hardware signing app
//!
//! The device derives keys and signs on behalf of the host; this crate
//! owns everything that happens on the wire between the two. It encodes
//! derivation paths into the fixed layout the firmware expects, splits
//! oversized payloads into position-tagged protocol frames, and parses
//! every response type the app produces, including the status-code
//! taxonomy shared by all commands.
//!
//! No cryptography happens here: payloads are opaque bytes on their way to
//! a device that does the signing. The byte pipe itself is behind the
//! [`Transport`](signet_apdu_core::Transport) trait from
//! `signet-apdu-core`; this crate only issues blocking exchanges over an
//! already-opened channel.
//!
//! ```
//! use signet_app::{Bip32Path, SignetApp};
//! use signet_apdu_core::MockTransport;
//!
//! let transport = MockTransport::with_response(vec![0x00, 1, 2, 3, 0x00, 0x90, 0x00]);
//! let mut app = SignetApp::new(transport);
//!
//! let version = app.get_version().unwrap();
//! assert_eq!(version.to_string(), "1.2.3");
//!
//! let path: Bip32Path = "m/44'/5757'/5'/0".parse().unwrap();
//! assert_eq!(path.serialize().len(), 17);
//! ```

#![cfg_attr(not(test), warn(unused_crate_dependencies))]
#![forbid(unsafe_code)]

mod application;
mod chunks;
mod commands;
mod constants;
mod error;
mod path;
mod types;

pub use application::SignetApp;
pub use chunks::{ChunkType, prepare_chunks};
pub use commands::*;
pub use error::{Error, ErrorCode, PathError, Result, error_code_to_string};
pub use path::Bip32Path;
pub use types::{AppFlags, AppInfo, PublicKey, Signature, Version};

pub use constants::*;
