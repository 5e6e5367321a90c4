//! `blobsum digest <path>...` – scan files one after another.

use super::scan::{engine_for, run_blocking};
use crate::cli::output;
use anyhow::{bail, Result};
use blobsum_core::config::{BlobsumConfig, OutputFormat};
use blobsum_core::{CancelToken, Session};
use std::path::PathBuf;

pub async fn run_digest(
    cfg: &BlobsumConfig,
    paths: Vec<PathBuf>,
    block_size: Option<usize>,
    json: bool,
) -> Result<()> {
    let engine = engine_for(cfg, block_size)?;
    let json = json || cfg.output == OutputFormat::Json;
    let token = CancelToken::new();
    let total = paths.len();
    let mut failed = 0usize;
    let mut session = Session::new();

    for (i, path) in paths.into_iter().enumerate() {
        session = run_blocking(&token, move |token| {
            session.scan(&engine, &path, Some(&token))
        })
        .await?;

        match &session {
            Session::Completed { path, result } => {
                if json {
                    println!("{}", output::json_line(path, result)?);
                } else {
                    if i > 0 {
                        println!();
                    }
                    print!("{}", output::render_text(path, result));
                }
            }
            Session::Failed {
                path,
                kind,
                message,
            } => {
                failed += 1;
                if json {
                    println!("{}", output::json_error_line(path, kind, message)?);
                } else {
                    eprintln!("{}: {}", path.display(), message);
                }
            }
            Session::Idle => {}
        }

        if token.is_cancelled() {
            bail!("interrupted");
        }
    }

    if failed > 0 {
        bail!("{} of {} files could not be scanned", failed, total);
    }
    Ok(())
}
