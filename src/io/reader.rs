//! Export file reader
//!
//! Loads a whole SAHAL export into memory as text. The engine needs the full
//! text before splitting, so there is no streaming interface here.

use crate::types::AnalysisError;
use std::path::Path;
use tracing::debug;

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Read an export file and decode it as UTF-8
///
/// # Errors
///
/// - `FileNotFound` if nothing exists at `path`
/// - `IoError` for any other read failure
/// - `InvalidInput` if the bytes are not valid UTF-8
pub fn read_input(path: &Path) -> Result<String, AnalysisError> {
    let bytes = std::fs::read(path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => AnalysisError::file_not_found(&path.display().to_string()),
        _ => AnalysisError::from(e),
    })?;
    debug!(path = %path.display(), bytes = bytes.len(), "read export file");
    decode_input(bytes)
}

/// Decode raw export bytes, dropping a leading byte order mark
///
/// Reported offsets are relative to the content after the mark.
pub fn decode_input(mut bytes: Vec<u8>) -> Result<String, AnalysisError> {
    if bytes.starts_with(UTF8_BOM) {
        bytes.drain(..UTF8_BOM.len());
    }
    Ok(String::from_utf8(bytes)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[rstest]
    #[case::plain(b"[SAHAL]\nhello".to_vec(), "[SAHAL]\nhello")]
    #[case::bom(b"\xEF\xBB\xBF[SAHAL]".to_vec(), "[SAHAL]")]
    #[case::empty(Vec::new(), "")]
    #[case::multibyte("Tuesday · 11:17".as_bytes().to_vec(), "Tuesday · 11:17")]
    fn test_decode_input(#[case] bytes: Vec<u8>, #[case] expected: &str) {
        assert_eq!(decode_input(bytes).unwrap(), expected);
    }

    #[test]
    fn test_decode_input_rejects_invalid_utf8() {
        let err = decode_input(vec![b'a', b'b', b'c', 0xFF]).unwrap_err();
        assert!(matches!(err, AnalysisError::InvalidInput { offset: 3, .. }));
    }

    #[test]
    fn test_read_input_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"\xEF\xBB\xBFWaxaad $1.00 ka heshay Ali(").unwrap();
        file.flush().unwrap();

        assert_eq!(
            read_input(file.path()).unwrap(),
            "Waxaad $1.00 ka heshay Ali("
        );
    }

    #[test]
    fn test_read_input_missing_file() {
        let err = read_input(Path::new("does/not/exist.txt")).unwrap_err();
        assert_eq!(
            err,
            AnalysisError::FileNotFound {
                path: "does/not/exist.txt".to_string()
            }
        );
    }
}
