//! Protocol constants shared by every command
//!
//! Everything the wire format fixes lives here by name: class bytes,
//! instruction codes, frame and path sizes, and the byte offsets of the
//! signature response. None of these are configurable at runtime; they are
//! the contract the device firmware implements.

/// Class byte for the signing app's command family.
pub const CLA: u8 = 0xFF;

/// Class byte for the device-wide app-info command family.
pub const CLA_APP_INFO: u8 = 0xB0;

pub(crate) mod instructions {
    /// GET VERSION: device metadata, no payload.
    pub const INS_GET_VERSION: u8 = 0x00;
    /// GET PUBLIC KEY: derive and return the key at a path.
    pub const INS_GET_PUBLIC_KEY: u8 = 0x01;
    /// SIGN: multi-frame upload of path and message.
    pub const INS_SIGN: u8 = 0x02;
    /// APP INFO, under the device-wide class byte.
    pub const INS_APP_INFO: u8 = 0x01;
}

pub use instructions::*;

/// Maximum payload bytes carried by a single protocol frame.
pub const CHUNK_SIZE: usize = 250;

/// Hardening bit added to a derivation component marked with an apostrophe.
pub const HARDENED: u32 = 0x8000_0000;

/// Number of non-root components in a derivation path.
pub const PATH_COMPONENTS: usize = 4;

/// Serialized path length: a count byte plus four 32-bit words.
pub const PATH_SERIALIZED_LEN: usize = 1 + PATH_COMPONENTS * 4;

/// P1 values selecting how GET PUBLIC KEY behaves.
pub mod p1 {
    /// Return the key silently.
    pub const RETRIEVE_ONLY: u8 = 0x00;
    /// Show the key on the device and wait for user confirmation.
    pub const SHOW_ON_DEVICE: u8 = 0x01;
}

/// The only app-info response format this client understands, carried in
/// the first payload byte.
pub const APP_INFO_FORMAT_ID: u8 = 1;

/// Byte offsets of the signature response payload.
///
/// The device writes each component at a fixed position; nothing in the
/// response is length-prefixed. These offsets are wire contract, including
/// the gap after the hash and the one-byte overlap between `R` and `S`.
pub mod signature {
    use core::ops::Range;

    /// Message hash echoed back by the device.
    pub const HASH: Range<usize> = 0..32;
    /// Signature `r` component.
    pub const R: Range<usize> = 33..65;
    /// Signature `s` component.
    pub const S: Range<usize> = 64..96;
    /// Smallest payload able to carry every component.
    pub const MIN_PAYLOAD_LEN: usize = 96;
}
