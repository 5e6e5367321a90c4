//! Streaming SHA-256 digests of files for content-addressed blob uploads.
//!
//! The entry point is [`compute_digest`]; [`DigestEngine`] adds a configurable
//! block size, reader input, and cooperative cancellation.

pub mod config;
pub mod logging;

pub mod cancel;
pub mod digest;
pub mod error;
pub mod range;
pub mod reference;
pub mod result;
pub mod session;
pub mod verify;

pub use cancel::CancelToken;
pub use digest::{compute_digest, DigestAlgorithm, DigestEngine, DigestOptions, DEFAULT_BLOCK_SIZE};
pub use error::DigestError;
pub use range::ByteRange;
pub use reference::ContentDigest;
pub use result::{FileDigestResult, UploadHeaders};
pub use session::Session;
