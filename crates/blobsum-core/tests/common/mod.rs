//! Shared helpers: scratch files and an independent one-shot SHA-256 oracle.

#![allow(dead_code)]

use sha2::{Digest, Sha256};
use std::io::Write;
use tempfile::NamedTempFile;

/// Write `bytes` to a fresh temp file (removed on drop).
pub fn file_with(bytes: &[u8]) -> NamedTempFile {
    let mut f = NamedTempFile::new().unwrap();
    f.write_all(bytes).unwrap();
    f.flush().unwrap();
    f
}

/// Reference digest computed in one shot over the whole buffer.
pub fn oracle_hex(bytes: &[u8]) -> String {
    hex::encode(Sha256::digest(bytes))
}

/// Deterministic non-repeating-looking payload of `len` bytes.
pub fn payload(len: usize) -> Vec<u8> {
    let mut state = 0x2545_f491_u32;
    (0..len)
        .map(|_| {
            state ^= state << 13;
            state ^= state >> 17;
            state ^= state << 5;
            (state >> 24) as u8
        })
        .collect()
}
