use signet_apdu_core::response::ResponseError;

use crate::constants::signature as offsets;

/// Signature material returned by the final frame of a signing exchange.
///
/// The device writes each component at a fixed payload offset (see
/// [`crate::constants::signature`]); there are no length prefixes to
/// consult and none may be invented.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Signature {
    /// Hash of the signed message, echoed back by the device.
    pub hash: [u8; 32],
    /// Signature `r` component.
    pub r: [u8; 32],
    /// Signature `s` component.
    pub s: [u8; 32],
}

impl std::fmt::Debug for Signature {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Signature")
            .field("hash", &hex::encode(self.hash))
            .field("r", &hex::encode(self.r))
            .field("s", &hex::encode(self.s))
            .finish()
    }
}

impl TryFrom<&[u8]> for Signature {
    type Error = ResponseError;

    fn try_from(payload: &[u8]) -> Result<Self, Self::Error> {
        if payload.len() < offsets::MIN_PAYLOAD_LEN {
            return Err(ResponseError::Parse("signature payload too short"));
        }

        let mut hash = [0u8; 32];
        hash.copy_from_slice(&payload[offsets::HASH]);
        let mut r = [0u8; 32];
        r.copy_from_slice(&payload[offsets::R]);
        let mut s = [0u8; 32];
        s.copy_from_slice(&payload[offsets::S]);

        Ok(Self { hash, r, s })
    }
}
