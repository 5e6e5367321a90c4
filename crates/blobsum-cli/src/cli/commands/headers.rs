//! `blobsum headers <path>` – upload request headers, ready to paste.

use super::scan::{engine_for, run_blocking};
use anyhow::Result;
use blobsum_core::config::BlobsumConfig;
use blobsum_core::CancelToken;
use std::path::PathBuf;

pub async fn run_headers(
    cfg: &BlobsumConfig,
    path: PathBuf,
    block_size: Option<usize>,
) -> Result<()> {
    let engine = engine_for(cfg, block_size)?;
    let token = CancelToken::new();
    let result = run_blocking(&token, move |token| engine.compute(&path, Some(&token))).await??;

    let headers = result.upload_headers();
    for (name, value) in headers.pairs() {
        println!("{}: {}", name, value);
    }
    if headers.content_range.is_none() {
        eprintln!("note: file is empty, no Content-Range applies");
    }
    Ok(())
}
