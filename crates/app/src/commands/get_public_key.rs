use bytes::Bytes;
use signet_apdu_core::{ApduCommand, Response};

use crate::constants::{CLA, INS_GET_PUBLIC_KEY, p1};
use crate::error::Error;
use crate::path::Bip32Path;
use crate::types::PublicKey;

/// GET PUBLIC KEY command: derive and return the key at a path.
///
/// P1 selects silent retrieval or on-device display with user
/// confirmation; the payload is the serialized derivation path.
#[derive(Debug, Clone)]
pub struct GetPublicKeyCommand {
    path_data: Bytes,
    confirm: bool,
}

impl GetPublicKeyCommand {
    /// Build the command for `path`; with `confirm` the device shows the
    /// key and waits for the user before answering.
    pub fn with(path: &Bip32Path, confirm: bool) -> Self {
        Self {
            path_data: path.serialize(),
            confirm,
        }
    }
}

impl ApduCommand for GetPublicKeyCommand {
    type Success = PublicKey;
    type Error = Error;

    fn class(&self) -> u8 {
        CLA
    }

    fn instruction(&self) -> u8 {
        INS_GET_PUBLIC_KEY
    }

    fn p1(&self) -> u8 {
        if self.confirm {
            p1::SHOW_ON_DEVICE
        } else {
            p1::RETRIEVE_ONLY
        }
    }

    fn p2(&self) -> u8 {
        0x00
    }

    fn data(&self) -> Option<&[u8]> {
        Some(&self.path_data)
    }

    fn parse_response(response: Response) -> Result<Self::Success, Self::Error> {
        Ok(PublicKey::try_from(response.payload())?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn path() -> Bip32Path {
        "m/44'/5757'/5'/0".parse().unwrap()
    }

    #[test]
    fn silent_retrieval_uses_p1_zero() {
        let command = GetPublicKeyCommand::with(&path(), false);
        assert_eq!(command.p1(), p1::RETRIEVE_ONLY);
    }

    #[test]
    fn confirmation_uses_p1_one() {
        let command = GetPublicKeyCommand::with(&path(), true);
        assert_eq!(command.p1(), p1::SHOW_ON_DEVICE);
    }

    #[test]
    fn payload_is_the_serialized_path() {
        let command = GetPublicKeyCommand::with(&path(), false);
        assert_eq!(command.data(), Some(path().serialize().as_ref()));

        let frame = command.to_command().to_bytes();
        assert_eq!(frame[0], CLA);
        assert_eq!(frame[1], INS_GET_PUBLIC_KEY);
        assert_eq!(frame[4], 17); // Lc
        assert_eq!(frame.len(), 4 + 1 + 17);
    }
}
