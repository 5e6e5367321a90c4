//! The streaming fold: read fixed-size blocks and feed them, in order, into SHA-256.

use crate::cancel::CancelToken;
use sha2::{Digest, Sha256};
use std::io::{self, Read};

/// Outcome of a completed fold.
#[derive(Debug)]
pub(crate) struct Folded {
    pub digest_hex: String,
    pub bytes_read: u64,
}

#[derive(Debug)]
pub(crate) enum FoldError {
    Io(io::Error),
    Cancelled,
}

/// Hash everything `reader` yields until end-of-stream. Peak buffer memory is
/// one block. The token, if any, is checked before every read.
pub(crate) fn fold_blocks<R: Read>(
    mut reader: R,
    block_size: usize,
    cancel: Option<&CancelToken>,
) -> Result<Folded, FoldError> {
    let mut hasher = Sha256::new();
    let mut buf = vec![0u8; block_size];
    let mut bytes_read = 0u64;
    loop {
        if cancel.is_some_and(CancelToken::is_cancelled) {
            return Err(FoldError::Cancelled);
        }
        let n = match reader.read(&mut buf) {
            Ok(0) => break,
            Ok(n) => n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(FoldError::Io(e)),
        };
        hasher.update(&buf[..n]);
        bytes_read += n as u64;
    }
    Ok(Folded {
        digest_hex: hex::encode(hasher.finalize()),
        bytes_read,
    })
}
