use crate::digest::{DigestOptions, DEFAULT_BLOCK_SIZE};
use anyhow::{ensure, Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Output style for the CLI: human-readable lines or one JSON object per file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Global configuration loaded from `~/.config/blobsum/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BlobsumConfig {
    /// Read block size in bytes. Larger blocks mean fewer syscalls; memory use is one block.
    #[serde(default = "default_block_size")]
    pub block_size: usize,
    /// Default output style; `--json` on the command line overrides it.
    #[serde(default)]
    pub output: OutputFormat,
}

fn default_block_size() -> usize {
    DEFAULT_BLOCK_SIZE
}

impl Default for BlobsumConfig {
    fn default() -> Self {
        Self {
            block_size: DEFAULT_BLOCK_SIZE,
            output: OutputFormat::Text,
        }
    }
}

impl BlobsumConfig {
    pub fn digest_options(&self) -> DigestOptions {
        DigestOptions {
            block_size: self.block_size,
        }
    }

    fn validate(&self) -> Result<()> {
        ensure!(self.block_size > 0, "block_size must be at least 1 byte");
        Ok(())
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("blobsum")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Parse and validate a config file.
pub fn load_from(path: &Path) -> Result<BlobsumConfig> {
    let data =
        fs::read_to_string(path).with_context(|| format!("read config {}", path.display()))?;
    let cfg: BlobsumConfig =
        toml::from_str(&data).with_context(|| format!("parse config {}", path.display()))?;
    cfg.validate()
        .with_context(|| format!("invalid config {}", path.display()))?;
    Ok(cfg)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<BlobsumConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = BlobsumConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }
    load_from(&path)
}
