//! Streaming digest engine.
//!
//! Opens a file, reads it in fixed-size blocks, folds each block into a
//! running SHA-256 state, and emits the digest with the exact number of bytes
//! read. The metadata size is only used for logging. Scans are synchronous
//! and blocking; callers with a UI or an async runtime should run them on a
//! worker thread.

mod fold;
mod target;

use crate::cancel::CancelToken;
use crate::error::DigestError;
use crate::result::FileDigestResult;
use fold::{fold_blocks, FoldError};
use serde::Serialize;
use std::io::Read;
use std::path::Path;

/// Block size used when none is configured.
pub const DEFAULT_BLOCK_SIZE: usize = 64 * 1024;

/// Hash algorithm of a digest. Only SHA-256 is supported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DigestAlgorithm {
    #[default]
    Sha256,
}

impl DigestAlgorithm {
    /// Prefix used in formatted digests (`sha256:<hex>`).
    pub fn prefix(self) -> &'static str {
        match self {
            DigestAlgorithm::Sha256 => "sha256",
        }
    }

    pub fn output_len(self) -> usize {
        match self {
            DigestAlgorithm::Sha256 => 32,
        }
    }

    /// Length of the lowercase hex encoding.
    pub fn hex_len(self) -> usize {
        self.output_len() * 2
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DigestOptions {
    /// Bytes requested per read. Does not affect the digest.
    pub block_size: usize,
}

impl Default for DigestOptions {
    fn default() -> Self {
        Self {
            block_size: DEFAULT_BLOCK_SIZE,
        }
    }
}

/// Validated scan settings. Cheap to copy; holds no per-scan state.
#[derive(Debug, Clone, Copy, Default)]
pub struct DigestEngine {
    options: DigestOptions,
}

impl DigestEngine {
    pub fn new(options: DigestOptions) -> Result<Self, DigestError> {
        if options.block_size == 0 {
            return Err(DigestError::InvalidBlockSize(options.block_size));
        }
        Ok(Self { options })
    }

    pub fn block_size(&self) -> usize {
        self.options.block_size
    }

    /// Digest the regular file at `path`.
    ///
    /// The file handle lives only for the duration of this call and is
    /// released on every return path, including errors and cancellation.
    pub fn compute(
        &self,
        path: &Path,
        cancel: Option<&CancelToken>,
    ) -> Result<FileDigestResult, DigestError> {
        let (file, meta) = match target::open_regular(path) {
            Ok(opened) => opened,
            Err(e) => {
                tracing::warn!(path = %path.display(), kind = e.kind(), "cannot scan: {}", e);
                return Err(e);
            }
        };
        let expected_len = meta.len();
        tracing::debug!(
            path = %path.display(),
            expected_len,
            block_size = self.options.block_size,
            "scan started"
        );

        let label = path.display().to_string();
        let result = self.compute_reader(file, &label, cancel)?;

        if result.byte_length() != expected_len {
            tracing::warn!(
                path = %path.display(),
                expected_len,
                bytes_read = result.byte_length(),
                "file size changed during scan"
            );
        }
        tracing::info!(
            path = %path.display(),
            bytes = result.byte_length(),
            digest = %result.formatted_digest(),
            "scan complete"
        );
        Ok(result)
    }

    /// Digest an already-open stream of unknown length. `label` names the
    /// source in errors.
    pub fn compute_reader<R: Read>(
        &self,
        reader: R,
        label: &str,
        cancel: Option<&CancelToken>,
    ) -> Result<FileDigestResult, DigestError> {
        match fold_blocks(reader, self.options.block_size, cancel) {
            Ok(folded) => Ok(FileDigestResult::new(
                DigestAlgorithm::Sha256,
                folded.digest_hex,
                folded.bytes_read,
            )),
            Err(FoldError::Io(source)) => {
                tracing::warn!(input = label, "read failed: {}", source);
                Err(DigestError::ReadFailure {
                    target: label.to_string(),
                    source,
                })
            }
            Err(FoldError::Cancelled) => {
                tracing::info!(input = label, "scan cancelled");
                Err(DigestError::Cancelled {
                    target: label.to_string(),
                })
            }
        }
    }
}

/// Digest the file at `path` with the default block size.
pub fn compute_digest(path: impl AsRef<Path>) -> Result<FileDigestResult, DigestError> {
    DigestEngine::default().compute(path.as_ref(), None)
}
