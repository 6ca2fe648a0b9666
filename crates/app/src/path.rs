//! Derivation path parsing and serialization
//!
//! The device expects a fixed five-component path of the form
//! `m/44'/5757'/5'/0/3`: the literal root marker `m` followed by exactly
//! four indices, each optionally suffixed with an apostrophe to request
//! hardened derivation. The serialized layout is one count byte (always 4)
//! followed by each component as a big-endian 32-bit word, with the
//! hardening bit already applied.

use std::str::FromStr;

use bytes::{BufMut, Bytes, BytesMut};

use crate::constants::{HARDENED, PATH_COMPONENTS, PATH_SERIALIZED_LEN};
use crate::error::PathError;

/// A parsed derivation path: the root marker plus four indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bip32Path {
    components: [u32; PATH_COMPONENTS],
}

impl Bip32Path {
    /// Component values, hardening bit included.
    pub const fn components(&self) -> &[u32; PATH_COMPONENTS] {
        &self.components
    }

    /// Serialize to the device layout.
    pub fn serialize(&self) -> Bytes {
        let mut buf = BytesMut::with_capacity(PATH_SERIALIZED_LEN);
        buf.put_u8(PATH_COMPONENTS as u8);
        for component in self.components {
            buf.put_u32(component);
        }
        buf.freeze()
    }
}

impl FromStr for Bip32Path {
    type Err = PathError;

    fn from_str(path: &str) -> Result<Self, Self::Err> {
        if !path.starts_with('m') {
            return Err(PathError::MalformedPath(
                "path should start with \"m\"",
            ));
        }

        let parts: Vec<&str> = path.split('/').collect();
        if parts.len() != 1 + PATH_COMPONENTS {
            return Err(PathError::MalformedPath(
                "path must have exactly four components after the root",
            ));
        }

        let mut components = [0u32; PATH_COMPONENTS];
        for (slot, part) in components.iter_mut().zip(&parts[1..]) {
            let (digits, hardened) = match part.strip_suffix('\'') {
                Some(digits) => (digits, true),
                None => (*part, false),
            };

            let value: u64 = digits
                .parse()
                .map_err(|_| PathError::InvalidComponent((*part).to_string()))?;

            if value >= u64::from(HARDENED) {
                return Err(PathError::ComponentOutOfRange((*part).to_string()));
            }

            let mut component = value as u32;
            if hardened {
                component += HARDENED;
            }
            *slot = component;
        }

        Ok(Self { components })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Test-only decoder: reads the count byte and the big-endian words
    /// back out of the serialized layout.
    fn decode(raw: &[u8]) -> Vec<u32> {
        assert_eq!(raw[0] as usize, PATH_COMPONENTS);
        raw[1..]
            .chunks(4)
            .map(|word| u32::from_be_bytes([word[0], word[1], word[2], word[3]]))
            .collect()
    }

    #[test]
    fn serializes_to_seventeen_bytes() {
        let path: Bip32Path = "m/44'/5757'/5'/0".parse().unwrap();
        let raw = path.serialize();
        assert_eq!(raw.len(), PATH_SERIALIZED_LEN);
        assert_eq!(raw.len(), 17);
        assert_eq!(raw[0], 4);
    }

    #[test]
    fn roundtrips_components_and_hardening() {
        let path: Bip32Path = "m/44'/5757/5'/3".parse().unwrap();
        let decoded = decode(&path.serialize());

        assert_eq!(decoded, vec![44 + HARDENED, 5757, 5 + HARDENED, 3]);
        assert_eq!(decoded, path.components());
    }

    #[test]
    fn hardened_zero_is_distinct_from_zero() {
        let path: Bip32Path = "m/0'/0/0'/0".parse().unwrap();
        let decoded = decode(&path.serialize());
        assert_eq!(decoded, vec![HARDENED, 0, HARDENED, 0]);
    }

    #[test]
    fn serializes_big_endian_words() {
        let path: Bip32Path = "m/1/2/3/4".parse().unwrap();
        let raw = path.serialize();
        assert_eq!(
            raw.as_ref(),
            &[
                4, //
                0, 0, 0, 1, //
                0, 0, 0, 2, //
                0, 0, 0, 3, //
                0, 0, 0, 4,
            ]
        );
    }

    #[test]
    fn rejects_missing_root_marker() {
        let err = "44'/5'/0/3".parse::<Bip32Path>().unwrap_err();
        assert!(matches!(err, PathError::MalformedPath(_)));
    }

    #[test]
    fn rejects_wrong_component_count() {
        let err = "m/44'/5'/0".parse::<Bip32Path>().unwrap_err();
        assert!(matches!(err, PathError::MalformedPath(_)));

        let err = "m/44'/5'/0/1/2".parse::<Bip32Path>().unwrap_err();
        assert!(matches!(err, PathError::MalformedPath(_)));
    }

    #[test]
    fn rejects_non_numeric_component() {
        let err = "m/abc/5'/0/3".parse::<Bip32Path>().unwrap_err();
        assert_eq!(err, PathError::InvalidComponent("abc".to_string()));
    }

    #[test]
    fn rejects_component_at_hardening_threshold() {
        let err = "m/2147483648/5/0/3".parse::<Bip32Path>().unwrap_err();
        assert_eq!(
            err,
            PathError::ComponentOutOfRange("2147483648".to_string())
        );
    }

    #[test]
    fn accepts_component_just_below_threshold() {
        let path: Bip32Path = "m/2147483647/0/0/0".parse().unwrap();
        assert_eq!(path.components()[0], 0x7FFF_FFFF);
    }
}
