//! Typed values parsed out of device responses

mod app_info;
mod public_key;
mod signature;
mod version;

pub use app_info::{AppFlags, AppInfo};
pub use public_key::PublicKey;
pub use signature::Signature;
pub use version::Version;
