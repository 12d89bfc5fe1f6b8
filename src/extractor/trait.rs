use crate::error::ExtractError;
use crate::extractor::Format;

/// Trait for text extractors that turn the raw bytes of one format into plain text
///
/// Implementations hold no per-call state: extracting the same bytes twice
/// yields the same text.
pub trait TextExtractor: Send + Sync {
    /// Format this extractor handles
    fn format(&self) -> Format;

    /// Extract text content from file bytes
    fn extract(&self, bytes: &[u8]) -> Result<String, ExtractError>;

    /// Check if this extractor supports the given (lowercased) file extension
    fn supports_extension(&self, ext: &str) -> bool {
        self.format().extension() == ext
    }
}
