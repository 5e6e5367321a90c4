//! The value produced by a successful scan, and its upload-header projection.

use crate::digest::DigestAlgorithm;
use crate::range::ByteRange;
use crate::reference::ContentDigest;
use serde::Serialize;

pub const DIGEST_HEADER: &str = "X-File-SHA256";
pub const SIZE_HEADER: &str = "X-File-Size";
pub const RANGE_HEADER: &str = "Content-Range";

/// Digest and exact length of one scanned source. Immutable once built.
///
/// `content_range` is `None` for an empty source: there is no byte range
/// that covers zero bytes, so no `Content-Range` is ever derived from it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileDigestResult {
    algorithm: DigestAlgorithm,
    digest_hex: String,
    byte_length: u64,
    formatted_digest: String,
    content_range: Option<ByteRange>,
}

impl FileDigestResult {
    pub(crate) fn new(algorithm: DigestAlgorithm, digest_hex: String, byte_length: u64) -> Self {
        debug_assert_eq!(digest_hex.len(), algorithm.hex_len());
        let formatted_digest = format!("{}:{}", algorithm.prefix(), digest_hex);
        Self {
            algorithm,
            digest_hex,
            byte_length,
            formatted_digest,
            content_range: ByteRange::for_length(byte_length),
        }
    }

    pub fn algorithm(&self) -> DigestAlgorithm {
        self.algorithm
    }

    /// Lowercase hex digest, exactly `algorithm().hex_len()` characters.
    pub fn digest_hex(&self) -> &str {
        &self.digest_hex
    }

    /// Bytes actually read during the scan.
    pub fn byte_length(&self) -> u64 {
        self.byte_length
    }

    /// `sha256:<hex>`.
    pub fn formatted_digest(&self) -> &str {
        &self.formatted_digest
    }

    pub fn content_range(&self) -> Option<ByteRange> {
        self.content_range
    }

    pub fn content_digest(&self) -> ContentDigest {
        ContentDigest::from_engine(self.algorithm, self.digest_hex.clone())
    }

    pub fn upload_headers(&self) -> UploadHeaders {
        UploadHeaders {
            digest: self.formatted_digest.clone(),
            size: self.byte_length.to_string(),
            content_range: self.content_range.map(|r| r.to_string()),
        }
    }
}

/// Header values for a single-chunk upload of the scanned file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadHeaders {
    pub digest: String,
    pub size: String,
    /// Absent for an empty file.
    pub content_range: Option<String>,
}

impl UploadHeaders {
    /// `(name, value)` pairs in send order; `Content-Range` is skipped when absent.
    pub fn pairs(&self) -> Vec<(&'static str, &str)> {
        let mut out = vec![
            (DIGEST_HEADER, self.digest.as_str()),
            (SIZE_HEADER, self.size.as_str()),
        ];
        if let Some(range) = &self.content_range {
            out.push((RANGE_HEADER, range.as_str()));
        }
        out
    }
}
