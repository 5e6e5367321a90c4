//! Resolve a path to an open regular file, classifying failures before any read.

use crate::error::DigestError;
use std::fs::{self, File, FileType, Metadata};
use std::io;
use std::path::Path;

fn describe(file_type: FileType) -> &'static str {
    #[cfg(unix)]
    {
        use std::os::unix::fs::FileTypeExt;
        if file_type.is_block_device() || file_type.is_char_device() {
            return "is a device";
        }
        if file_type.is_fifo() {
            return "is a fifo";
        }
        if file_type.is_socket() {
            return "is a socket";
        }
    }
    if file_type.is_dir() {
        "is a directory"
    } else {
        "not a regular file"
    }
}

/// True when the lookup failed because the path does not resolve at all: a
/// missing entry, a regular file used as a directory component, or a symlink loop.
fn is_missing(err: &io::Error) -> bool {
    if err.kind() == io::ErrorKind::NotFound {
        return true;
    }
    #[cfg(unix)]
    {
        matches!(err.raw_os_error(), Some(libc::ENOTDIR) | Some(libc::ELOOP))
    }
    #[cfg(not(unix))]
    {
        false
    }
}

fn classify_open_error(path: &Path, err: io::Error) -> DigestError {
    if is_missing(&err) {
        DigestError::NotFound {
            path: path.to_path_buf(),
        }
    } else {
        DigestError::InvalidTarget {
            path: path.to_path_buf(),
            reason: err.to_string(),
        }
    }
}

/// Check that `path` names an existing regular file and open it read-only.
/// Metadata is looked up first so that fifos and devices are rejected without
/// being opened.
pub(crate) fn open_regular(path: &Path) -> Result<(File, Metadata), DigestError> {
    let meta = fs::metadata(path).map_err(|e| classify_open_error(path, e))?;
    if !meta.is_file() {
        return Err(DigestError::InvalidTarget {
            path: path.to_path_buf(),
            reason: describe(meta.file_type()).to_string(),
        });
    }
    let file = File::open(path).map_err(|e| classify_open_error(path, e))?;
    Ok((file, meta))
}
