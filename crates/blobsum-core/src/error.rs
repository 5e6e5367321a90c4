//! Error taxonomy for digest scans.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Why a scan did not produce a result. Every variant is terminal for the
/// invocation; the engine never retries.
#[derive(Debug, Error)]
pub enum DigestError {
    /// The target path does not exist at call time.
    #[error("file not found: {}", path.display())]
    NotFound { path: PathBuf },

    /// The path exists but is not a regular readable file.
    #[error("not a readable regular file: {} ({reason})", path.display())]
    InvalidTarget { path: PathBuf, reason: String },

    /// An I/O error occurred after reading began.
    #[error("read failed for {target}: {source}")]
    ReadFailure {
        target: String,
        #[source]
        source: io::Error,
    },

    /// A cancel token was observed between block reads.
    #[error("scan of {target} cancelled")]
    Cancelled { target: String },

    /// Engine constructed with a block size that cannot make progress.
    #[error("invalid block size: {0} (must be at least 1 byte)")]
    InvalidBlockSize(usize),
}

impl DigestError {
    /// Short machine-friendly name of the failure kind. Carried by
    /// `Session::Failed`, the CLI's JSON failure lines and scan logs.
    pub fn kind(&self) -> &'static str {
        match self {
            DigestError::NotFound { .. } => "not_found",
            DigestError::InvalidTarget { .. } => "invalid_target",
            DigestError::ReadFailure { .. } => "read_failure",
            DigestError::Cancelled { .. } => "cancelled",
            DigestError::InvalidBlockSize(_) => "invalid_block_size",
        }
    }
}
