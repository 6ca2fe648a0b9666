//! Device client driving the protocol operations
//!
//! [`SignetApp`] owns the transport and issues one blocking exchange at a
//! time. Multi-frame operations are strictly sequential: the device holds a
//! single accumulation buffer, so the chunks of one signing exchange must
//! arrive as Init, Add*, Last with nothing interleaved. Nothing is retried
//! here; a failed frame abandons the exchange and the caller decides.

use signet_apdu_core::response::ResponseError;
use signet_apdu_core::{ApduCommand, Response, Transport};
use tracing::debug;

use crate::chunks::{ChunkType, prepare_chunks};
use crate::commands::{
    GetAppInfoCommand, GetPublicKeyCommand, GetVersionCommand, SignChunkCommand,
};
use crate::error::{Error, Result};
use crate::path::Bip32Path;
use crate::types::{AppInfo, PublicKey, Signature, Version};

/// Client for the signing app on a hardware device.
///
/// Construct it over an already-opened transport; connection lifecycle is
/// the transport's business. Operations take `&mut self`, so the borrow
/// checker enforces the one-exchange-at-a-time rule of the device.
#[derive(Debug)]
pub struct SignetApp<T: Transport> {
    transport: T,
}

impl<T: Transport> SignetApp<T> {
    /// Create a client over an already-opened transport.
    pub const fn new(transport: T) -> Self {
        Self { transport }
    }

    /// Consume the client and hand the transport back.
    pub fn into_transport(self) -> T {
        self.transport
    }

    fn execute<C>(&mut self, command: &C) -> Result<C::Success>
    where
        C: ApduCommand<Error = Error>,
    {
        let raw = self
            .transport
            .send(&command.to_command(), command.accepted_status())?;
        C::parse_response(Response::from_bytes(&raw)?)
    }

    /// Query device metadata: test mode, version triple, lock state and
    /// target id.
    pub fn get_version(&mut self) -> Result<Version> {
        debug!("requesting device version");
        self.execute(&GetVersionCommand)
    }

    /// Query name, version and flags of the app currently open on the
    /// device.
    pub fn get_app_info(&mut self) -> Result<AppInfo> {
        debug!("requesting app info");
        self.execute(&GetAppInfoCommand)
    }

    /// Retrieve the public key derived at `path`.
    ///
    /// With `confirm` the device displays the key and waits for the user
    /// to acknowledge it before answering.
    pub fn get_public_key(&mut self, path: &Bip32Path, confirm: bool) -> Result<PublicKey> {
        debug!(confirm, "requesting public key");
        self.execute(&GetPublicKeyCommand::with(path, confirm))
    }

    /// Sign `message` with the key derived at `path`.
    ///
    /// The path travels alone in the first frame, then the message in
    /// frame-sized chunks. The exchange stops at the first rejected frame
    /// and surfaces exactly that frame's status; the device abandons its
    /// partial state, so a retry means a fresh call, not a resume.
    pub fn sign(&mut self, path: &Bip32Path, message: &[u8]) -> Result<Signature> {
        let chunks = prepare_chunks(message, Some(path.serialize()));
        let total = chunks.len();

        let mut outcome = None;
        for (index, chunk) in chunks.into_iter().enumerate() {
            let chunk_type = ChunkType::for_index(index, total);
            debug!(
                chunk = index + 1,
                total,
                ?chunk_type,
                len = chunk.len(),
                "sending sign chunk"
            );
            outcome = self.execute(&SignChunkCommand::with(chunk_type, chunk))?;
        }

        outcome.ok_or_else(|| {
            ResponseError::Parse("signing response carried no signature payload").into()
        })
    }
}
