use crate::constants::DEFAULT_MAX_ENTRY_BYTES;
use crate::error::ExtractError;
use crate::extractor::types::{
    CsvExtractor, DocxExtractor, PdfExtractor, PptxExtractor, TxtExtractor, XlsxExtractor,
};
use crate::extractor::{Format, TextExtractor};
use crate::utils;
use std::sync::Arc;

/// Resolve the format of a file from its name
///
/// Pure: looks only at the lowercased text after the last dot of the final
/// path segment. Unknown or missing extensions are reported as
/// `ExtractError::Unsupported` so the caller can record a placeholder.
pub fn detect_format(name: &str) -> Result<Format, ExtractError> {
    let extension = utils::get_extension(name).unwrap_or_default();
    Format::from_extension(&extension).ok_or(ExtractError::Unsupported { extension })
}

/// Registry mapping formats to their extractors
pub struct ExtractorRegistry {
    handlers: Vec<Arc<dyn TextExtractor>>,
}

impl ExtractorRegistry {
    /// Create a new registry with every built-in extractor
    pub fn new() -> Self {
        Self::with_max_entry_bytes(DEFAULT_MAX_ENTRY_BYTES)
    }

    /// Built-in extractors with a custom cap on decompressed container parts
    pub fn with_max_entry_bytes(max_entry_bytes: u64) -> Self {
        let mut registry = Self::empty();

        registry.register(Arc::new(DocxExtractor::with_limit(max_entry_bytes)));
        registry.register(Arc::new(XlsxExtractor::with_limit(max_entry_bytes)));
        registry.register(Arc::new(PptxExtractor::with_limit(max_entry_bytes)));
        registry.register(Arc::new(PdfExtractor::new()));
        registry.register(Arc::new(CsvExtractor::new()));
        registry.register(Arc::new(TxtExtractor::new()));

        registry
    }

    /// Registry with no extractors at all
    pub fn empty() -> Self {
        Self {
            handlers: Vec::new(),
        }
    }

    /// Register a new handler; earlier registrations win for the same format
    pub fn register(&mut self, handler: Arc<dyn TextExtractor>) {
        self.handlers.push(handler);
    }

    /// Find the handler for a format
    pub fn get_handler(&self, format: Format) -> Option<Arc<dyn TextExtractor>> {
        self.handlers
            .iter()
            .find(|h| h.supports_extension(format.extension()))
            .cloned()
    }

    /// Formats with a registered handler, in registration order
    pub fn formats(&self) -> Vec<Format> {
        let mut formats: Vec<Format> = Vec::new();
        for handler in &self.handlers {
            if !formats.contains(&handler.format()) {
                formats.push(handler.format());
            }
        }
        formats
    }

    /// Detect the format of `name` and extract `bytes` with its handler
    pub fn extract(&self, name: &str, bytes: &[u8]) -> Result<String, ExtractError> {
        let format = detect_format(name)?;
        let handler = self
            .get_handler(format)
            .ok_or_else(|| ExtractError::Unsupported {
                extension: format.extension().to_string(),
            })?;
        handler.extract(bytes)
    }
}

impl Default for ExtractorRegistry {
    fn default() -> Self {
        Self::new()
    }
}
