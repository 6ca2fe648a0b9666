use derive_more::Display;
use signet_apdu_core::response::ResponseError;

/// Device metadata returned by GET VERSION.
///
/// Payload layout: a test-mode flag byte, the semantic version triple, a
/// lock-state byte, then a big-endian 32-bit target id when the device
/// provides one (older firmware omits it).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[display("{}.{}.{}", major, minor, patch)]
pub struct Version {
    /// Whether the app was built in test mode.
    pub test_mode: bool,
    /// Major version.
    pub major: u8,
    /// Minor version.
    pub minor: u8,
    /// Patch version.
    pub patch: u8,
    /// Whether the device is currently locked.
    pub device_locked: bool,
    /// Hardware target identifier, zero when not reported.
    pub target_id: u32,
}

impl TryFrom<&[u8]> for Version {
    type Error = ResponseError;

    fn try_from(payload: &[u8]) -> Result<Self, Self::Error> {
        let [test_mode, major, minor, patch, locked, ..] = payload else {
            return Err(ResponseError::Parse("version payload too short"));
        };

        let target_id = match payload.get(5..9) {
            Some([a, b, c, d]) => u32::from_be_bytes([*a, *b, *c, *d]),
            _ => 0,
        };

        Ok(Self {
            test_mode: *test_mode != 0,
            major: *major,
            minor: *minor,
            patch: *patch,
            device_locked: *locked == 1,
            target_id,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_full_payload() {
        let payload = [0x01, 1, 4, 7, 0x01, 0x12, 0x34, 0x56, 0x78];
        let version = Version::try_from(&payload[..]).unwrap();

        assert!(version.test_mode);
        assert_eq!((version.major, version.minor, version.patch), (1, 4, 7));
        assert!(version.device_locked);
        assert_eq!(version.target_id, 0x1234_5678);
        assert_eq!(version.to_string(), "1.4.7");
    }

    #[test]
    fn target_id_defaults_to_zero_when_absent() {
        let payload = [0x00, 0, 9, 2, 0x00];
        let version = Version::try_from(&payload[..]).unwrap();

        assert!(!version.test_mode);
        assert!(!version.device_locked);
        assert_eq!(version.target_id, 0);
    }

    #[test]
    fn rejects_short_payload() {
        assert!(Version::try_from(&[1, 2, 3][..]).is_err());
    }
}
