//! Text and JSON rendering of scan results.

use anyhow::Result;
use blobsum_core::FileDigestResult;
use humansize::{format_size, BINARY};
use serde::Serialize;
use std::fmt::Write;
use std::path::Path;

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// Labelled block for one file, newline-terminated.
pub fn render_text(path: &Path, result: &FileDigestResult) -> String {
    let range = result
        .content_range()
        .map(|r| r.to_string())
        .unwrap_or_else(|| "(empty)".to_string());
    let mut out = String::new();
    let _ = writeln!(out, "File:          {}", file_name(path));
    let _ = writeln!(
        out,
        "Size:          {} ({} bytes)",
        format_size(result.byte_length(), BINARY),
        result.byte_length()
    );
    let _ = writeln!(out, "Digest:        {}", result.formatted_digest());
    let _ = writeln!(out, "Content-Range: {}", range);
    out
}

#[derive(Serialize)]
struct JsonReport<'a> {
    path: String,
    #[serde(flatten)]
    result: &'a FileDigestResult,
}

#[derive(Serialize)]
struct JsonFailure<'a> {
    path: String,
    kind: &'a str,
    error: &'a str,
}

pub fn json_line(path: &Path, result: &FileDigestResult) -> Result<String> {
    Ok(serde_json::to_string(&JsonReport {
        path: path.display().to_string(),
        result,
    })?)
}

pub fn json_error_line(path: &Path, kind: &str, message: &str) -> Result<String> {
    Ok(serde_json::to_string(&JsonFailure {
        path: path.display().to_string(),
        kind,
        error: message,
    })?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use blobsum_core::compute_digest;
    use std::io::Write as _;

    fn scanned(bytes: &[u8]) -> (tempfile::NamedTempFile, FileDigestResult) {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        f.write_all(bytes).unwrap();
        f.flush().unwrap();
        let r = compute_digest(f.path()).unwrap();
        (f, r)
    }

    #[test]
    fn text_lists_digest_and_range() {
        let (f, r) = scanned(b"abc");
        let text = render_text(f.path(), &r);
        assert!(text.contains(
            "Digest:        sha256:ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        ));
        assert!(text.contains("(3 bytes)"));
        assert!(text.contains("Content-Range: 0-2\n"));
    }

    #[test]
    fn text_marks_empty_file() {
        let (f, r) = scanned(b"");
        let text = render_text(f.path(), &r);
        assert!(text.contains("Content-Range: (empty)"));
        assert!(!text.contains("0--1"));
    }

    #[test]
    fn json_line_is_flat() {
        let (f, r) = scanned(b"abc");
        let line = json_line(f.path(), &r).unwrap();
        let v: serde_json::Value = serde_json::from_str(&line).unwrap();
        assert_eq!(v["byte_length"], 3);
        assert_eq!(v["content_range"], "0-2");
        assert_eq!(v["path"], f.path().display().to_string());
        assert!(!line.contains('\n'));
    }

    #[test]
    fn json_error_line_carries_message() {
        let line =
            json_error_line(Path::new("/nope"), "not_found", "file not found: /nope").unwrap();
        let v: serde_json::Value = serde_json::from_str(&line).unwrap();
        assert_eq!(v["kind"], "not_found");
        assert_eq!(v["error"], "file not found: /nope");
    }
}
