//! Line Source
//!
//! A line is the maximal run of bytes ending in `\n`, with the terminator
//! removed. A trailing partial line counts as a line. Nothing else is
//! stripped: a `\r` before the `\n` stays part of the line.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{PatchError, PatchResult};

/// Split text into lines.
pub fn split_lines(text: &str) -> Vec<&str> {
    text.split_inclusive('\n')
        .map(|line| line.strip_suffix('\n').unwrap_or(line))
        .collect()
}

/// Split raw bytes into owned lines, rejecting invalid UTF-8.
pub fn decode_lines(bytes: &[u8]) -> PatchResult<Vec<String>> {
    bytes
        .split_inclusive(|&b| b == b'\n')
        .enumerate()
        .map(|(index, line)| {
            let line = line.strip_suffix(b"\n").unwrap_or(line);
            std::str::from_utf8(line)
                .map(str::to_owned)
                .map_err(|_| PatchError::InvalidUtf8 { line: index + 1 })
        })
        .collect()
}

/// Read a file into lines.
pub fn read_lines(path: impl AsRef<Path>) -> PatchResult<Vec<String>> {
    let path = path.as_ref();
    let bytes = fs::read(path)?;
    let lines = decode_lines(&bytes)?;
    debug!(path = %path.display(), lines = lines.len(), "read input");
    Ok(lines)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_split_terminated_lines() {
        assert_eq!(split_lines("a\nb\n"), vec!["a", "b"]);
    }

    #[test]
    fn test_split_keeps_trailing_partial_line() {
        assert_eq!(split_lines("a\nb"), vec!["a", "b"]);
    }

    #[test]
    fn test_split_empty_and_blank() {
        assert!(split_lines("").is_empty());
        assert_eq!(split_lines("\n"), vec![""]);
        assert_eq!(split_lines("a\n\nb\n"), vec!["a", "", "b"]);
    }

    #[test]
    fn test_split_keeps_carriage_return() {
        assert_eq!(split_lines("a\r\nb\r\n"), vec!["a\r", "b\r"]);
    }

    #[test]
    fn test_decode_rejects_invalid_utf8() {
        let err = decode_lines(b"ok\n\xff\xfe\n").unwrap_err();
        assert!(matches!(err, PatchError::InvalidUtf8 { line: 2 }));
    }

    #[test]
    fn test_decode_matches_split() {
        let text = "one\ntwo\n\nthree";
        assert_eq!(decode_lines(text.as_bytes()).unwrap(), split_lines(text));
    }

    #[test]
    fn test_read_lines_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"first\nsecond\nlast").unwrap();
        assert_eq!(read_lines(file.path()).unwrap(), vec!["first", "second", "last"]);
    }

    #[test]
    fn test_read_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_lines(dir.path().join("missing.txt")).unwrap_err();
        assert!(matches!(err, PatchError::Io(_)));
    }
}
