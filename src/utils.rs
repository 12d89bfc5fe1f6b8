use std::path::Path;

/// UTF-8 byte order mark
const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Encoding a byte buffer was decoded with
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextEncoding {
    Utf8,
    Latin1,
}

/// Get the lowercased extension of a file name (without the dot)
///
/// Only the final path segment is considered, so a dot in a directory
/// name never counts. Names without a dot, or ending in one, have none.
pub fn get_extension(name: &str) -> Option<String> {
    let file_name = name.rsplit(['/', '\\']).next().unwrap_or(name);
    let (_, ext) = file_name.rsplit_once('.')?;
    if ext.is_empty() {
        None
    } else {
        Some(ext.to_lowercase())
    }
}

/// Decode bytes as UTF-8, falling back to Latin-1 (ISO-8859-1)
///
/// Latin-1 maps every byte to the code point of the same value, so the
/// fallback cannot fail.
pub fn decode_text(bytes: &[u8]) -> (String, TextEncoding) {
    let bytes = bytes.strip_prefix(UTF8_BOM).unwrap_or(bytes);
    match std::str::from_utf8(bytes) {
        Ok(text) => (text.to_string(), TextEncoding::Utf8),
        Err(_) => (bytes.iter().map(|&b| b as char).collect(), TextEncoding::Latin1),
    }
}

/// Name of `path` relative to `root`, with `/` separators
pub fn relative_name(root: &Path, path: &Path) -> String {
    let relative = path.strip_prefix(root).unwrap_or(path);
    relative
        .components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}

/// Whether a path component is hidden (dot-prefixed)
pub fn is_hidden(name: &str) -> bool {
    name.starts_with('.') && name != "." && name != ".."
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_extension_with_txt() {
        assert_eq!(get_extension("file.txt"), Some("txt".to_string()));
    }

    #[test]
    fn test_get_extension_lowercase() {
        assert_eq!(get_extension("REPORT.DOCX"), Some("docx".to_string()));
    }

    #[test]
    fn test_get_extension_no_extension() {
        assert_eq!(get_extension("Makefile"), None);
        assert_eq!(get_extension("trailing."), None);
    }

    #[test]
    fn test_get_extension_multiple_dots() {
        assert_eq!(get_extension("archive.tar.gz"), Some("gz".to_string()));
    }

    #[test]
    fn test_get_extension_ignores_directory_dots() {
        assert_eq!(get_extension("v1.2/README"), None);
        assert_eq!(get_extension("v1.2\\notes.csv"), Some("csv".to_string()));
    }

    #[test]
    fn test_decode_text_utf8() {
        let (text, encoding) = decode_text("héllo".as_bytes());
        assert_eq!(text, "héllo");
        assert_eq!(encoding, TextEncoding::Utf8);
    }

    #[test]
    fn test_decode_text_strips_bom() {
        let (text, _) = decode_text(b"\xEF\xBB\xBFname,age");
        assert_eq!(text, "name,age");
    }

    #[test]
    fn test_decode_text_latin1_fallback() {
        // "café" in Latin-1: 0xE9 alone is invalid UTF-8
        let (text, encoding) = decode_text(b"caf\xE9");
        assert_eq!(text, "café");
        assert_eq!(encoding, TextEncoding::Latin1);
    }

    #[test]
    fn test_relative_name() {
        let root = Path::new("/data/docs");
        let path = Path::new("/data/docs/2024/q1/report.docx");
        assert_eq!(relative_name(root, path), "2024/q1/report.docx");
    }

    #[test]
    fn test_is_hidden() {
        assert!(is_hidden(".git"));
        assert!(!is_hidden("notes.txt"));
        assert!(!is_hidden("."));
    }
}
