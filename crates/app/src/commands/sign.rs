use bytes::Bytes;
use signet_apdu_core::{ApduCommand, Response, StatusWord};

use crate::chunks::ChunkType;
use crate::constants::{CLA, INS_SIGN};
use crate::error::{Error, ErrorCode};
use crate::types::Signature;

/// One frame of the chunked SIGN exchange.
///
/// The chunk's position travels as P1. Besides success, three rejection
/// statuses are accepted at the transport layer because the device pairs
/// them with a textual diagnostic in the payload; every other status is a
/// plain transport error.
#[derive(Debug, Clone)]
pub struct SignChunkCommand {
    chunk_type: ChunkType,
    data: Bytes,
}

impl SignChunkCommand {
    const ACCEPTED: [StatusWord; 4] = [
        StatusWord::SUCCESS,
        ErrorCode::DataIsInvalid.status_word(),
        ErrorCode::BadKeyHandle.status_word(),
        ErrorCode::SignVerifyError.status_word(),
    ];

    /// Build the frame carrying `data` at position `chunk_type`.
    pub const fn with(chunk_type: ChunkType, data: Bytes) -> Self {
        Self { chunk_type, data }
    }
}

impl ApduCommand for SignChunkCommand {
    /// `None` for an accepted intermediate chunk; the signature once the
    /// final chunk has been processed.
    type Success = Option<Signature>;
    type Error = Error;

    fn class(&self) -> u8 {
        CLA
    }

    fn instruction(&self) -> u8 {
        INS_SIGN
    }

    fn p1(&self) -> u8 {
        self.chunk_type as u8
    }

    fn p2(&self) -> u8 {
        0x00
    }

    fn data(&self) -> Option<&[u8]> {
        Some(&self.data)
    }

    fn accepted_status(&self) -> &[StatusWord] {
        &Self::ACCEPTED
    }

    fn parse_response(response: Response) -> Result<Self::Success, Self::Error> {
        let status = response.status();

        if !status.is_success() {
            return Err(match ErrorCode::from_status(status.to_u16()) {
                Some(
                    ErrorCode::DataIsInvalid | ErrorCode::BadKeyHandle | ErrorCode::SignVerifyError,
                ) => Error::device_with_detail(status, response.payload()),
                _ => Error::device(status),
            });
        }

        if response.payload().is_empty() {
            return Ok(None);
        }

        Ok(Some(Signature::try_from(response.payload())?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn p1_carries_the_chunk_position() {
        let init = SignChunkCommand::with(ChunkType::Init, Bytes::from_static(&[0x01]));
        let add = SignChunkCommand::with(ChunkType::Add, Bytes::from_static(&[0x02]));
        let last = SignChunkCommand::with(ChunkType::Last, Bytes::from_static(&[0x03]));

        assert_eq!(init.p1(), 0);
        assert_eq!(add.p1(), 1);
        assert_eq!(last.p1(), 2);
    }

    #[test]
    fn accepts_the_documented_rejection_statuses() {
        let command = SignChunkCommand::with(ChunkType::Init, Bytes::new());
        let accepted = command.accepted_status();

        assert!(accepted.contains(&StatusWord::SUCCESS));
        assert!(accepted.contains(&StatusWord::from_u16(0x6984)));
        assert!(accepted.contains(&StatusWord::from_u16(0x6A80)));
        assert!(accepted.contains(&StatusWord::from_u16(0x6F01)));
        assert!(!accepted.contains(&StatusWord::from_u16(0x6985)));
    }

    #[test]
    fn status_only_success_parses_as_pending() {
        let response = Response::from_bytes(&[0x90, 0x00]).unwrap();
        assert_eq!(SignChunkCommand::parse_response(response).unwrap(), None);
    }

    #[test]
    fn rejection_with_detail_appends_ascii_payload() {
        let mut raw = b"Invalid message data".to_vec();
        raw.extend_from_slice(&[0x69, 0x84]);
        let response = Response::from_bytes(&raw).unwrap();

        let err = SignChunkCommand::parse_response(response).unwrap_err();
        assert_eq!(err.to_string(), "Data is invalid : Invalid message data");
        assert_eq!(err.error_code(), Some(ErrorCode::DataIsInvalid));
    }
}
