use crate::constants::{DEFAULT_MAX_ENTRY_BYTES, XLSX_SHARED_STRINGS_PART};
use crate::error::ExtractError;
use crate::extractor::ooxml::{self, OoxmlPackage, XmlText};
use crate::extractor::{Format, TextExtractor};
use tracing::debug;

/// Excel workbook handler (.xlsx)
///
/// Dumps the shared string table, one entry per line with rich-text runs
/// joined. Cell layout, numbers and formulas are not reconstructed.
#[derive(Debug, Clone, Copy)]
pub struct XlsxExtractor {
    max_entry_bytes: u64,
}

impl XlsxExtractor {
    pub fn new() -> Self {
        Self::with_limit(DEFAULT_MAX_ENTRY_BYTES)
    }

    pub fn with_limit(max_entry_bytes: u64) -> Self {
        Self { max_entry_bytes }
    }
}

impl Default for XlsxExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl TextExtractor for XlsxExtractor {
    fn format(&self) -> Format {
        Format::Xlsx
    }

    fn extract(&self, bytes: &[u8]) -> Result<String, ExtractError> {
        let mut package = OoxmlPackage::open(bytes, self.max_entry_bytes)?;

        // Workbooks holding only numbers have no shared strings
        if !package.contains(XLSX_SHARED_STRINGS_PART) {
            debug!("workbook has no shared string table");
            return Ok(String::new());
        }

        let xml = package.read_part(XLSX_SHARED_STRINGS_PART)?;
        let mut text = String::new();
        let mut entry = String::new();
        ooxml::walk_text(&xml, |event| match event {
            // Rich-text items hold several runs; they make up one string
            XmlText::Run(run) => entry.push_str(&run),
            XmlText::EntryEnd => {
                if !entry.is_empty() {
                    text.push_str(&entry);
                    text.push('\n');
                    entry.clear();
                }
            }
            _ => {}
        })?;

        Ok(text)
    }
}
