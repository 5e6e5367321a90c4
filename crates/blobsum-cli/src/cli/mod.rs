//! CLI for blobsum.

mod commands;
mod output;

use anyhow::Result;
use blobsum_core::config;
use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

use commands::{run_completions, run_digest, run_headers, run_manpage, run_verify};

/// Top-level CLI for blobsum.
#[derive(Debug, Parser)]
#[command(name = "blobsum", version)]
#[command(about = "blobsum: SHA-256 digest, size and Content-Range for chunked blob uploads", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Compute digest, size and content range of one or more files (scanned one at a time).
    Digest {
        /// Files to scan.
        #[arg(required = true)]
        paths: Vec<PathBuf>,
        /// Read block size in bytes (overrides config).
        #[arg(long, value_name = "BYTES")]
        block_size: Option<usize>,
        /// Print one JSON object per file instead of text.
        #[arg(long)]
        json: bool,
    },

    /// Print the upload request headers for a file.
    Headers {
        /// File to scan.
        path: PathBuf,
        /// Read block size in bytes (overrides config).
        #[arg(long, value_name = "BYTES")]
        block_size: Option<usize>,
    },

    /// Check a file against an expected `sha256:<hex>` digest.
    Verify {
        /// File to scan.
        path: PathBuf,
        /// Expected digest, e.g. sha256:ba7816bf...
        digest: String,
        /// Read block size in bytes (overrides config).
        #[arg(long, value_name = "BYTES")]
        block_size: Option<usize>,
    },

    /// Generate shell completions on stdout.
    Completions {
        /// Target shell.
        #[arg(value_enum)]
        shell: Shell,
    },

    /// Print the man page (roff) on stdout.
    Manpage,
}

impl CliCommand {
    pub async fn run_from_args() -> Result<()> {
        let cli = Cli::parse();

        match cli.command {
            CliCommand::Digest {
                paths,
                block_size,
                json,
            } => {
                let cfg = config::load_or_init()?;
                tracing::debug!("loaded config: {:?}", cfg);
                run_digest(&cfg, paths, block_size, json).await?;
            }
            CliCommand::Headers { path, block_size } => {
                let cfg = config::load_or_init()?;
                run_headers(&cfg, path, block_size).await?;
            }
            CliCommand::Verify {
                path,
                digest,
                block_size,
            } => {
                let cfg = config::load_or_init()?;
                run_verify(&cfg, path, &digest, block_size).await?;
            }
            CliCommand::Completions { shell } => run_completions(shell)?,
            CliCommand::Manpage => run_manpage()?,
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
