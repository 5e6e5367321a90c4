//! Runs blocking scans off the async runtime, with Ctrl-C wired to cancellation.

use anyhow::{Context, Result};
use blobsum_core::config::BlobsumConfig;
use blobsum_core::{CancelToken, DigestEngine, DigestOptions};

/// Engine from config, with an optional command-line block size override.
pub(super) fn engine_for(cfg: &BlobsumConfig, block_size: Option<usize>) -> Result<DigestEngine> {
    let options = match block_size {
        Some(block_size) => DigestOptions { block_size },
        None => cfg.digest_options(),
    };
    Ok(DigestEngine::new(options)?)
}

/// Run `scan` on the blocking pool. Ctrl-C while it runs sets `token`; the
/// scan stops at its next block boundary and this still waits for it, so the
/// file handle is closed before returning.
pub(super) async fn run_blocking<T, F>(token: &CancelToken, scan: F) -> Result<T>
where
    F: FnOnce(CancelToken) -> T + Send + 'static,
    T: Send + 'static,
{
    let mut task = tokio::task::spawn_blocking({
        let token = token.clone();
        move || scan(token)
    });
    tokio::select! {
        joined = &mut task => joined.context("scan task join"),
        Ok(()) = tokio::signal::ctrl_c() => {
            tracing::info!("interrupt received, cancelling scan");
            token.cancel();
            task.await.context("scan task join")
        }
    }
}
