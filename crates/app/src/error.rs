//! Error taxonomy and the canonical status-code table
//!
//! Three kinds of failure reach callers: input validation (a bad path,
//! caught before any device traffic), transport/device rejection (a status
//! word outside the accepted set, or a rejection the operation reports
//! itself), and protocol-format surprises (a response shaped in a way this
//! client does not understand). Callers branch on the error variant or the
//! canonical status code, never on message text.

use signet_apdu_core::StatusWord;
use signet_apdu_core::response::ResponseError;
use signet_apdu_core::transport::TransportError;

/// Result type for app operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors from parsing a derivation path string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PathError {
    /// The path is missing the root marker or has the wrong number of
    /// components.
    #[error("malformed path: {0} (e.g. \"m/44'/5757'/5'/0/3\")")]
    MalformedPath(&'static str),

    /// A component is not a non-negative integer.
    #[error("invalid path: `{0}` is not a number")]
    InvalidComponent(String),

    /// A component value does not fit in 31 bits.
    #[error("incorrect component value `{0}` (bigger or equal to 0x80000000)")]
    ComponentOutOfRange(String),
}

/// Canonical status codes reported by the device.
///
/// The low codes (1-14) are relayed by U2F-style transports rather than
/// produced by the app itself, but they share the same 16-bit space.
#[repr(u16)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// U2F: unknown error
    U2fUnknown = 1,
    /// U2F: bad request
    U2fBadRequest = 2,
    /// U2F: configuration unsupported
    U2fConfigurationUnsupported = 3,
    /// U2F: device ineligible
    U2fDeviceIneligible = 4,
    /// U2F: timeout
    U2fTimeout = 5,
    /// Transport timeout
    Timeout = 14,
    /// Command executed successfully
    NoErrors = 0x9000,
    /// The device cannot take another command right now
    DeviceIsBusy = 0x9001,
    /// Key derivation failed on the device
    ErrorDerivingKeys = 0x6802,
    /// Generic execution failure
    ExecutionError = 0x6400,
    /// Wrong frame length
    WrongLength = 0x6700,
    /// Upload buffer is empty
    EmptyBuffer = 0x6982,
    /// Response does not fit the device's output buffer
    OutputBufferTooSmall = 0x6983,
    /// Uploaded data failed validation
    DataIsInvalid = 0x6984,
    /// Preconditions not satisfied
    ConditionsNotSatisfied = 0x6985,
    /// The user rejected the transaction on the device
    TransactionRejected = 0x6986,
    /// The referenced key handle is unusable
    BadKeyHandle = 0x6A80,
    /// P1/P2 combination not supported
    InvalidP1P2 = 0x6B00,
    /// Instruction byte not recognized by the app
    InsNotSupported = 0x6D00,
    /// Class byte not recognized; the app is probably not open
    AppDoesNotSeemToBeOpen = 0x6E00,
    /// Unclassified device failure
    UnknownError = 0x6F00,
    /// The device could not verify its own signature
    SignVerifyError = 0x6F01,
}

impl ErrorCode {
    /// Map a raw 16-bit status value to its canonical code, if known.
    pub const fn from_status(value: u16) -> Option<Self> {
        match value {
            1 => Some(Self::U2fUnknown),
            2 => Some(Self::U2fBadRequest),
            3 => Some(Self::U2fConfigurationUnsupported),
            4 => Some(Self::U2fDeviceIneligible),
            5 => Some(Self::U2fTimeout),
            14 => Some(Self::Timeout),
            0x9000 => Some(Self::NoErrors),
            0x9001 => Some(Self::DeviceIsBusy),
            0x6802 => Some(Self::ErrorDerivingKeys),
            0x6400 => Some(Self::ExecutionError),
            0x6700 => Some(Self::WrongLength),
            0x6982 => Some(Self::EmptyBuffer),
            0x6983 => Some(Self::OutputBufferTooSmall),
            0x6984 => Some(Self::DataIsInvalid),
            0x6985 => Some(Self::ConditionsNotSatisfied),
            0x6986 => Some(Self::TransactionRejected),
            0x6A80 => Some(Self::BadKeyHandle),
            0x6B00 => Some(Self::InvalidP1P2),
            0x6D00 => Some(Self::InsNotSupported),
            0x6E00 => Some(Self::AppDoesNotSeemToBeOpen),
            0x6F00 => Some(Self::UnknownError),
            0x6F01 => Some(Self::SignVerifyError),
            _ => None,
        }
    }

    /// The status word carrying this code.
    pub const fn status_word(self) -> StatusWord {
        StatusWord::from_u16(self as u16)
    }

    /// Canonical human-readable description.
    pub const fn description(self) -> &'static str {
        match self {
            Self::U2fUnknown => "U2F: Unknown",
            Self::U2fBadRequest => "U2F: Bad request",
            Self::U2fConfigurationUnsupported => "U2F: Configuration unsupported",
            Self::U2fDeviceIneligible => "U2F: Device Ineligible",
            Self::U2fTimeout => "U2F: Timeout",
            Self::Timeout => "Timeout",
            Self::NoErrors => "No errors",
            Self::DeviceIsBusy => "Device is busy",
            Self::ErrorDerivingKeys => "Error deriving keys",
            Self::ExecutionError => "Execution Error",
            Self::WrongLength => "Wrong Length",
            Self::EmptyBuffer => "Empty Buffer",
            Self::OutputBufferTooSmall => "Output buffer too small",
            Self::DataIsInvalid => "Data is invalid",
            Self::ConditionsNotSatisfied => "Conditions not satisfied",
            Self::TransactionRejected => "Transaction rejected",
            Self::BadKeyHandle => "Bad key handle",
            Self::InvalidP1P2 => "Invalid P1/P2",
            Self::InsNotSupported => "Instruction not supported",
            Self::AppDoesNotSeemToBeOpen => "App does not seem to be open",
            Self::UnknownError => "Unknown error",
            Self::SignVerifyError => "Sign/verify error",
        }
    }
}

impl core::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.description())
    }
}

/// Canonical message for a raw status value; codes outside the table get a
/// fixed fallback.
pub const fn error_code_to_string(value: u16) -> &'static str {
    match ErrorCode::from_status(value) {
        Some(code) => code.description(),
        None => "Unknown error code",
    }
}

/// Error type for app operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Derivation path rejected before any device interaction.
    #[error(transparent)]
    Path(#[from] PathError),

    /// Transport-level failure, including unaccepted status words.
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// Malformed response framing or payload.
    #[error(transparent)]
    Response(#[from] ResponseError),

    /// The device answered the request with a rejection status.
    #[error("{message}")]
    Device {
        /// The raw status word of the failing response.
        status: StatusWord,
        /// Canonical message, with device-supplied detail appended when
        /// the status carries one.
        message: String,
    },

    /// The device responded in a wire format this client does not
    /// recognize.
    #[error("response format ID not recognized")]
    UnrecognizedResponseFormat,
}

impl Error {
    /// Canonical classification of device-originated failures.
    ///
    /// An unrecognized response format is classified as
    /// [`ErrorCode::DeviceIsBusy`]; validation errors have no device code.
    pub const fn error_code(&self) -> Option<ErrorCode> {
        match self {
            Self::Device { status, .. }
            | Self::Transport(TransportError::UnacceptedStatus { status }) => {
                ErrorCode::from_status(status.to_u16())
            }
            Self::UnrecognizedResponseFormat => Some(ErrorCode::DeviceIsBusy),
            _ => None,
        }
    }

    /// Rejection carrying only the canonical message for `status`.
    pub(crate) fn device(status: StatusWord) -> Self {
        Self::Device {
            status,
            message: error_code_to_string(status.to_u16()).to_string(),
        }
    }

    /// Rejection whose response payload is a textual diagnostic; the text
    /// is appended to the canonical message.
    pub(crate) fn device_with_detail(status: StatusWord, detail: &[u8]) -> Self {
        let canonical = error_code_to_string(status.to_u16());
        Self::Device {
            status,
            message: format!("{canonical} : {}", String::from_utf8_lossy(detail)),
        }
    }
}
