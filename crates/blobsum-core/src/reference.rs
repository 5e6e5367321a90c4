//! Content-addressed digest references (`sha256:<hex>`).

use crate::digest::DigestAlgorithm;
use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
#[error("invalid digest format: {0:?}")]
pub struct InvalidDigest(pub String);

/// A validated digest reference: algorithm plus lowercase hex of the exact length.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ContentDigest {
    algorithm: DigestAlgorithm,
    hex: String,
}

fn is_lower_hex_of_len(s: &str, len: usize) -> bool {
    s.len() == len && s.bytes().all(|b| matches!(b, b'0'..=b'9' | b'a'..=b'f'))
}

impl ContentDigest {
    /// Build from bare hex (no prefix). Uppercase hex is rejected so that
    /// equal digests always compare equal as strings.
    pub fn from_hex(hex: &str) -> Result<Self, InvalidDigest> {
        let algorithm = DigestAlgorithm::Sha256;
        if !is_lower_hex_of_len(hex, algorithm.hex_len()) {
            return Err(InvalidDigest(hex.to_string()));
        }
        Ok(Self {
            algorithm,
            hex: hex.to_string(),
        })
    }

    /// Hex straight from a finished hash; already the right length and case.
    pub(crate) fn from_engine(algorithm: DigestAlgorithm, hex: String) -> Self {
        Self { algorithm, hex }
    }

    pub fn algorithm(&self) -> DigestAlgorithm {
        self.algorithm
    }

    /// Bare hex, without the algorithm prefix.
    pub fn hex(&self) -> &str {
        &self.hex
    }
}

impl FromStr for ContentDigest {
    type Err = InvalidDigest;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let algorithm = DigestAlgorithm::Sha256;
        let hex = s
            .strip_prefix(algorithm.prefix())
            .and_then(|rest| rest.strip_prefix(':'))
            .ok_or_else(|| InvalidDigest(s.to_string()))?;
        Self::from_hex(hex).map_err(|_| InvalidDigest(s.to_string()))
    }
}

impl fmt::Display for ContentDigest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.algorithm.prefix(), self.hex)
    }
}

impl Serialize for ContentDigest {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// True if `s` is exactly `sha256:` followed by 64 lowercase hex characters.
pub fn is_valid_digest(s: &str) -> bool {
    s.parse::<ContentDigest>().is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    const ABC: &str = "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad";

    #[test]
    fn parse_formatted_digest() {
        let d: ContentDigest = format!("sha256:{ABC}").parse().unwrap();
        assert_eq!(d.hex(), ABC);
        assert_eq!(d.algorithm(), DigestAlgorithm::Sha256);
        assert_eq!(d.to_string(), format!("sha256:{ABC}"));
    }

    #[test]
    fn from_hex_builds_prefixed_form() {
        let d = ContentDigest::from_hex(ABC).unwrap();
        assert_eq!(d.to_string(), format!("sha256:{ABC}"));
    }

    #[test]
    fn rejects_malformed() {
        assert!(!is_valid_digest(ABC));
        assert!(!is_valid_digest(&format!("sha512:{ABC}")));
        assert!(!is_valid_digest(&format!("sha256:{}", ABC.to_uppercase())));
        assert!(!is_valid_digest(&format!("sha256:{}", &ABC[..63])));
        assert!(!is_valid_digest(&format!("sha256:{ABC}0")));
        assert!(!is_valid_digest(&format!(" sha256:{ABC}")));
        assert!(!is_valid_digest("sha256:"));
        assert!(ContentDigest::from_hex("xyz").is_err());
    }

    #[test]
    fn error_echoes_input() {
        let err = "sha256:nope".parse::<ContentDigest>().unwrap_err();
        assert_eq!(err, InvalidDigest("sha256:nope".to_string()));
    }
}
