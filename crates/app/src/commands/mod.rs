//! Typed commands for the device protocol
//!
//! Each command knows its header bytes, the status words the caller
//! accepts, and how to turn the raw response into a typed value.

mod get_app_info;
mod get_public_key;
mod get_version;
mod sign;

pub use get_app_info::GetAppInfoCommand;
pub use get_public_key::GetPublicKeyCommand;
pub use get_version::GetVersionCommand;
pub use sign::SignChunkCommand;
