use crate::constants::{DEFAULT_MAX_ENTRY_BYTES, DOCX_DOCUMENT_PART};
use crate::error::ExtractError;
use crate::extractor::ooxml::{self, OoxmlPackage, XmlText};
use crate::extractor::{Format, TextExtractor};

/// Word document handler (.docx)
///
/// Reads `word/document.xml` and emits one line per paragraph, runs joined
/// as they appear.
#[derive(Debug, Clone, Copy)]
pub struct DocxExtractor {
    max_entry_bytes: u64,
}

impl DocxExtractor {
    pub fn new() -> Self {
        Self::with_limit(DEFAULT_MAX_ENTRY_BYTES)
    }

    pub fn with_limit(max_entry_bytes: u64) -> Self {
        Self { max_entry_bytes }
    }
}

impl Default for DocxExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl TextExtractor for DocxExtractor {
    fn format(&self) -> Format {
        Format::Docx
    }

    fn extract(&self, bytes: &[u8]) -> Result<String, ExtractError> {
        let mut package = OoxmlPackage::open(bytes, self.max_entry_bytes)?;
        let xml = package.read_part(DOCX_DOCUMENT_PART)?;

        let mut text = String::new();
        ooxml::walk_text(&xml, |event| match event {
            XmlText::Run(run) => text.push_str(&run),
            XmlText::Tab => text.push('\t'),
            XmlText::Break | XmlText::ParagraphEnd => text.push('\n'),
            XmlText::EntryEnd => {}
        })?;

        Ok(text)
    }
}
