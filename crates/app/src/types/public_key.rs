use bytes::Bytes;
use signet_apdu_core::response::ResponseError;

/// Raw public key bytes returned by GET PUBLIC KEY.
///
/// The response carries a length byte followed by that many key bytes; the
/// encoding of the key itself is the device's business and is passed
/// through opaquely.
#[derive(Clone, PartialEq, Eq)]
pub struct PublicKey(Bytes);

impl PublicKey {
    /// The key bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Length of the key in bytes.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the device returned an empty key.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl AsRef<[u8]> for PublicKey {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl std::fmt::Debug for PublicKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("PublicKey").field(&hex::encode(&self.0)).finish()
    }
}

impl TryFrom<&[u8]> for PublicKey {
    type Error = ResponseError;

    fn try_from(payload: &[u8]) -> Result<Self, Self::Error> {
        let (len, rest) = payload
            .split_first()
            .ok_or(ResponseError::Parse("public key payload is empty"))?;

        let len = usize::from(*len);
        if rest.len() < len {
            return Err(ResponseError::Parse(
                "public key shorter than its length byte",
            ));
        }

        Ok(Self(Bytes::copy_from_slice(&rest[..len])))
    }
}
