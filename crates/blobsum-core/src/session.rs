//! Caller-owned scan state: what was scanned last and how it went.
//!
//! A front end keeps one `Session` value and threads it through successive
//! scans; nothing is stored process-wide.

use crate::cancel::CancelToken;
use crate::digest::DigestEngine;
use crate::result::FileDigestResult;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Session {
    /// Nothing scanned yet.
    #[default]
    Idle,
    Completed {
        path: PathBuf,
        result: FileDigestResult,
    },
    /// Last scan failed; the session can be used again right away.
    Failed {
        path: PathBuf,
        /// `DigestError::kind()` of the failure.
        kind: &'static str,
        message: String,
    },
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Scan `path` and return the next state. The previous state is consumed
    /// whatever the outcome; only the latest scan is remembered.
    pub fn scan(
        self,
        engine: &DigestEngine,
        path: &Path,
        cancel: Option<&CancelToken>,
    ) -> Session {
        match engine.compute(path, cancel) {
            Ok(result) => Session::Completed {
                path: path.to_path_buf(),
                result,
            },
            Err(e) => Session::Failed {
                path: path.to_path_buf(),
                kind: e.kind(),
                message: e.to_string(),
            },
        }
    }

    pub fn current_file(&self) -> Option<&Path> {
        match self {
            Session::Idle => None,
            Session::Completed { path, .. } | Session::Failed { path, .. } => Some(path),
        }
    }

    pub fn last_result(&self) -> Option<&FileDigestResult> {
        match self {
            Session::Completed { result, .. } => Some(result),
            _ => None,
        }
    }

    pub fn failure(&self) -> Option<&str> {
        match self {
            Session::Failed { message, .. } => Some(message),
            _ => None,
        }
    }
}
