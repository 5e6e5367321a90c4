//! Byte-range math for chunked uploads.
//!
//! A chunk is described by an inclusive, zero-indexed `start-end` pair. An
//! empty blob has no valid range, so `ByteRange::for_length(0)` is `None`.

use serde::{Serialize, Serializer};
use std::fmt;
use thiserror::Error;

/// Inclusive byte range `[start, end]`. Always `start <= end < u64::MAX`, so
/// the length fits in a `u64`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ByteRange {
    start: u64,
    end: u64,
}

impl ByteRange {
    /// Returns `None` if `start > end` or `end == u64::MAX`.
    pub fn new(start: u64, end: u64) -> Option<Self> {
        (start <= end && end < u64::MAX).then_some(Self { start, end })
    }

    /// Range covering a whole blob of `len` bytes: `0-(len-1)`.
    pub fn for_length(len: u64) -> Option<Self> {
        len.checked_sub(1).map(|end| Self { start: 0, end })
    }

    pub fn start(&self) -> u64 {
        self.start
    }

    /// Last byte offset (inclusive).
    pub fn end(&self) -> u64 {
        self.end
    }

    /// Number of bytes covered. Never zero.
    pub fn len(&self) -> u64 {
        self.end - self.start + 1
    }

    /// HTTP response form: `bytes start-end/total`.
    pub fn content_range_header(&self, total: u64) -> String {
        format!("bytes {}-{}/{}", self.start, self.end, total)
    }
}

impl fmt::Display for ByteRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.start, self.end)
    }
}

/// Serialized in its header form (`"0-2"`).
impl Serialize for ByteRange {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Parsed `Content-Range` request value: `start-end` with an optional `/total`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContentRange {
    pub range: ByteRange,
    pub total: Option<u64>,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RangeError {
    #[error("malformed range: {0:?}")]
    Malformed(String),
    #[error("range start {start} is after end {end}")]
    Inverted { start: u64, end: u64 },
    #[error("range {range} exceeds total length {total}")]
    PastEnd { range: ByteRange, total: u64 },
    #[error("range end {0} is too large")]
    TooLarge(u64),
    #[error("range start {start} is not satisfiable for length {len}")]
    Unsatisfiable { start: u64, len: u64 },
}

/// Strict decimal: ASCII digits only (no sign, no whitespace).
fn parse_decimal(s: &str) -> Option<u64> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}

/// Parse a `Content-Range` request value (`0-1023` or `0-1023/2048`).
pub fn parse_content_range(value: &str) -> Result<ContentRange, RangeError> {
    let trimmed = value.trim();
    let malformed = || RangeError::Malformed(value.to_string());

    let (span, total) = match trimmed.split_once('/') {
        Some((span, total)) => (span, Some(parse_decimal(total).ok_or_else(malformed)?)),
        None => (trimmed, None),
    };
    let (start, end) = span.split_once('-').ok_or_else(malformed)?;
    let start = parse_decimal(start).ok_or_else(malformed)?;
    let end = parse_decimal(end).ok_or_else(malformed)?;

    if start > end {
        return Err(RangeError::Inverted { start, end });
    }
    let range = ByteRange::new(start, end).ok_or(RangeError::TooLarge(end))?;
    if let Some(total) = total {
        if end >= total {
            return Err(RangeError::PastEnd { range, total });
        }
    }
    Ok(ContentRange { range, total })
}

/// Parse a `Range` request header (`bytes=start-end` or `bytes=start-`) against
/// a resource of `content_length` bytes. An end past the resource is clamped.
pub fn parse_range_header(value: &str, content_length: u64) -> Result<ByteRange, RangeError> {
    let malformed = || RangeError::Malformed(value.to_string());
    let spec = value.trim().strip_prefix("bytes=").ok_or_else(malformed)?;
    let (start, end) = spec.split_once('-').ok_or_else(malformed)?;
    let start = parse_decimal(start).ok_or_else(malformed)?;

    if start >= content_length {
        return Err(RangeError::Unsatisfiable {
            start,
            len: content_length,
        });
    }
    let last = content_length - 1;
    let end = if end.is_empty() {
        last
    } else {
        parse_decimal(end).ok_or_else(malformed)?
    };
    if start > end {
        return Err(RangeError::Inverted { start, end });
    }
    Ok(ByteRange {
        start,
        end: end.min(last),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn for_length_covers_whole_blob() {
        let r = ByteRange::for_length(3).unwrap();
        assert_eq!(r.to_string(), "0-2");
        assert_eq!(r.len(), 3);
    }

    #[test]
    fn for_length_single_byte() {
        let r = ByteRange::for_length(1).unwrap();
        assert_eq!(r.to_string(), "0-0");
        assert_eq!(r.len(), 1);
    }

    #[test]
    fn for_length_empty_has_no_range() {
        assert!(ByteRange::for_length(0).is_none());
    }

    #[test]
    fn new_rejects_inverted() {
        assert!(ByteRange::new(5, 4).is_none());
        assert_eq!(ByteRange::new(4, 4).unwrap().len(), 1);
    }

    #[test]
    fn full_u64_span_is_rejected() {
        assert!(ByteRange::new(0, u64::MAX).is_none());
        let widest = ByteRange::new(0, u64::MAX - 1).unwrap();
        assert_eq!(widest.len(), u64::MAX);
        assert_eq!(ByteRange::for_length(u64::MAX), Some(widest));
        assert_eq!(
            parse_content_range("0-18446744073709551615"),
            Err(RangeError::TooLarge(u64::MAX))
        );
        assert_eq!(
            parse_range_header("bytes=0-18446744073709551615", 10).unwrap(),
            ByteRange::new(0, 9).unwrap()
        );
    }

    #[test]
    fn content_range_header_form() {
        let r = ByteRange::new(0, 1023).unwrap();
        assert_eq!(r.content_range_header(2048), "bytes 0-1023/2048");
    }

    #[test]
    fn parse_content_range_plain() {
        let cr = parse_content_range("0-1023").unwrap();
        assert_eq!(cr.range, ByteRange::new(0, 1023).unwrap());
        assert_eq!(cr.total, None);
    }

    #[test]
    fn parse_content_range_with_total() {
        let cr = parse_content_range(" 1024-2047/4096 ").unwrap();
        assert_eq!(cr.range.start(), 1024);
        assert_eq!(cr.range.end(), 2047);
        assert_eq!(cr.total, Some(4096));
    }

    #[test]
    fn parse_content_range_rejects_bad_input() {
        assert!(matches!(
            parse_content_range("0--1"),
            Err(RangeError::Malformed(_))
        ));
        assert!(matches!(
            parse_content_range("abc"),
            Err(RangeError::Malformed(_))
        ));
        assert!(matches!(
            parse_content_range("+1-2"),
            Err(RangeError::Malformed(_))
        ));
        assert_eq!(
            parse_content_range("10-5"),
            Err(RangeError::Inverted { start: 10, end: 5 })
        );
        assert!(matches!(
            parse_content_range("0-100/100"),
            Err(RangeError::PastEnd { total: 100, .. })
        ));
    }

    #[test]
    fn parse_range_header_closed_and_open() {
        assert_eq!(
            parse_range_header("bytes=0-99", 1000).unwrap(),
            ByteRange::new(0, 99).unwrap()
        );
        assert_eq!(
            parse_range_header("bytes=900-", 1000).unwrap(),
            ByteRange::new(900, 999).unwrap()
        );
    }

    #[test]
    fn parse_range_header_clamps_end() {
        assert_eq!(
            parse_range_header("bytes=500-5000", 1000).unwrap(),
            ByteRange::new(500, 999).unwrap()
        );
    }

    #[test]
    fn parse_range_header_unsatisfiable() {
        assert_eq!(
            parse_range_header("bytes=1000-", 1000),
            Err(RangeError::Unsatisfiable {
                start: 1000,
                len: 1000
            })
        );
        assert!(matches!(
            parse_range_header("bytes=0-", 0),
            Err(RangeError::Unsatisfiable { .. })
        ));
        assert!(matches!(
            parse_range_header("0-10", 100),
            Err(RangeError::Malformed(_))
        ));
    }
}
