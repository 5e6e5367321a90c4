//! `blobsum verify <path> <digest>` – compare a file against an expected digest.

use super::scan::{engine_for, run_blocking};
use anyhow::{bail, Context, Result};
use blobsum_core::config::BlobsumConfig;
use blobsum_core::verify::verify_file;
use blobsum_core::{CancelToken, ContentDigest};
use std::path::PathBuf;

pub async fn run_verify(
    cfg: &BlobsumConfig,
    path: PathBuf,
    digest: &str,
    block_size: Option<usize>,
) -> Result<()> {
    // Reject a malformed reference before spending time on the scan.
    let expected: ContentDigest = digest.parse().context("expected digest")?;
    let engine = engine_for(cfg, block_size)?;
    let token = CancelToken::new();
    let verification = run_blocking(&token, {
        let path = path.clone();
        move |token| verify_file(&engine, &path, &expected, Some(&token))
    })
    .await??;

    if !verification.matches {
        bail!(
            "digest mismatch for {}: expected {}, got {}",
            path.display(),
            verification.expected,
            verification.result.formatted_digest()
        );
    }
    println!("OK  {}  {}", verification.expected, path.display());
    Ok(())
}
