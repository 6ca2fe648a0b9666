use signet_apdu_core::{ApduCommand, Response};

use crate::constants::{CLA, INS_GET_VERSION};
use crate::error::Error;
use crate::types::Version;

/// GET VERSION command: device metadata, no payload.
#[derive(Debug, Default, Clone, Copy)]
pub struct GetVersionCommand;

impl ApduCommand for GetVersionCommand {
    type Success = Version;
    type Error = Error;

    fn class(&self) -> u8 {
        CLA
    }

    fn instruction(&self) -> u8 {
        INS_GET_VERSION
    }

    fn p1(&self) -> u8 {
        0x00
    }

    fn p2(&self) -> u8 {
        0x00
    }

    fn data(&self) -> Option<&[u8]> {
        None
    }

    fn parse_response(response: Response) -> Result<Self::Success, Self::Error> {
        Ok(Version::try_from(response.payload())?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_bare_header() {
        let command = GetVersionCommand.to_command();
        assert_eq!(
            command.to_bytes().as_ref(),
            &[CLA, INS_GET_VERSION, 0x00, 0x00]
        );
    }
}
