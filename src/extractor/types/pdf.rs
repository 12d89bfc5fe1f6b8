use crate::error::ExtractError;
use crate::extractor::{Format, TextExtractor};
use lopdf::Document;
use std::panic;
use tracing::{debug, warn};

/// PDF file handler
///
/// Text comes from lopdf page by page. When no page yields anything,
/// pdf-extract gets a second try over the same bytes.
#[derive(Debug, Default, Clone, Copy)]
pub struct PdfExtractor;

impl PdfExtractor {
    pub fn new() -> Self {
        Self
    }

    /// Run pdf-extract, which panics on some malformed inputs
    fn fallback_extract(bytes: &[u8]) -> Option<String> {
        match panic::catch_unwind(|| pdf_extract::extract_text_from_mem(bytes)) {
            Ok(Ok(text)) if !text.trim().is_empty() => Some(text),
            Ok(Ok(_)) => None,
            Ok(Err(e)) => {
                debug!(error = %e, "pdf-extract fallback failed");
                None
            }
            Err(_) => {
                warn!("pdf-extract panicked, keeping lopdf output");
                None
            }
        }
    }
}

impl TextExtractor for PdfExtractor {
    fn format(&self) -> Format {
        Format::Pdf
    }

    fn extract(&self, bytes: &[u8]) -> Result<String, ExtractError> {
        let doc = Document::load_mem(bytes)?;

        let mut text = String::new();
        // get_pages is keyed by page number, so iteration is page order
        for page_num in doc.get_pages().keys() {
            match doc.extract_text(&[*page_num]) {
                Ok(page_text) => text.push_str(&page_text),
                Err(e) => debug!(page = page_num, error = %e, "no extractable text on page"),
            }
        }

        if text.trim().is_empty() {
            if let Some(fallback) = Self::fallback_extract(bytes) {
                return Ok(fallback);
            }
        }

        Ok(text)
    }
}
