/// Constants used throughout corpusify
/// This module centralizes the container part names and output delimiters

/// Main document part of a Word file
pub const DOCX_DOCUMENT_PART: &str = "word/document.xml";

/// Shared string table of an Excel workbook
pub const XLSX_SHARED_STRINGS_PART: &str = "xl/sharedStrings.xml";

/// Prefix of PowerPoint slide parts (followed by the slide number and `.xml`)
pub const PPTX_SLIDE_PREFIX: &str = "ppt/slides/slide";

/// Default cap on the decompressed size of one container part (zip-bomb protection)
pub const DEFAULT_MAX_ENTRY_BYTES: u64 = 50 * 1024 * 1024;

/// Separator placed between CSV fields of one row
pub const CSV_FIELD_SEPARATOR: &str = " | ";

/// Number of characters shown by `--preview`
pub const PREVIEW_CHARS: usize = 5000;

/// Default tracing filter when RUST_LOG is unset
pub const DEFAULT_LOG_FILTER: &str = "corpusify=info";

/// Opening delimiter of a file block in plain-text output
pub fn begin_marker(name: &str) -> String {
    format!("\n\n==== BEGIN FILE: {} ====\n\n", name)
}

/// Closing delimiter of a file block in plain-text output
pub fn end_marker(name: &str) -> String {
    format!("\n\n==== END FILE: {} ====\n\n", name)
}
