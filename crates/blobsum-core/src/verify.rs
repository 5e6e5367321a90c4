//! Check a file against an expected digest reference.

use crate::cancel::CancelToken;
use crate::digest::DigestEngine;
use crate::error::DigestError;
use crate::reference::ContentDigest;
use crate::result::FileDigestResult;
use std::path::Path;

/// Outcome of a verification scan. A mismatch is reported here, not as an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Verification {
    pub result: FileDigestResult,
    pub expected: ContentDigest,
    pub matches: bool,
}

pub fn verify_file(
    engine: &DigestEngine,
    path: &Path,
    expected: &ContentDigest,
    cancel: Option<&CancelToken>,
) -> Result<Verification, DigestError> {
    let result = engine.compute(path, cancel)?;
    let matches = result.content_digest() == *expected;
    if !matches {
        tracing::warn!(
            path = %path.display(),
            expected = %expected,
            actual = %result.formatted_digest(),
            "digest mismatch"
        );
    }
    Ok(Verification {
        result,
        expected: expected.clone(),
        matches,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn abc_file() -> tempfile::NamedTempFile {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        f.write_all(b"abc").unwrap();
        f.flush().unwrap();
        f
    }

    #[test]
    fn matching_digest() {
        let f = abc_file();
        let expected: ContentDigest =
            "sha256:ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
                .parse()
                .unwrap();
        let v = verify_file(&DigestEngine::default(), f.path(), &expected, None).unwrap();
        assert!(v.matches);
        assert_eq!(v.result.byte_length(), 3);
    }

    #[test]
    fn mismatching_digest() {
        let f = abc_file();
        let expected: ContentDigest =
            "sha256:e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
                .parse()
                .unwrap();
        let v = verify_file(&DigestEngine::default(), f.path(), &expected, None).unwrap();
        assert!(!v.matches);
        assert_eq!(v.expected, expected);
    }

    #[test]
    fn missing_file_propagates() {
        let expected = ContentDigest::from_hex(&"0".repeat(64)).unwrap();
        let err = verify_file(
            &DigestEngine::default(),
            Path::new("/nonexistent/path"),
            &expected,
            None,
        )
        .unwrap_err();
        assert!(matches!(err, DigestError::NotFound { .. }));
    }
}
