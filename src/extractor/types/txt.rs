use crate::error::ExtractError;
use crate::extractor::{Format, TextExtractor};
use crate::utils::{self, TextEncoding};
use tracing::debug;

/// Plain text handler (.txt)
#[derive(Debug, Default, Clone, Copy)]
pub struct TxtExtractor;

impl TxtExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl TextExtractor for TxtExtractor {
    fn format(&self) -> Format {
        Format::Txt
    }

    fn extract(&self, bytes: &[u8]) -> Result<String, ExtractError> {
        let (text, encoding) = utils::decode_text(bytes);
        if encoding == TextEncoding::Latin1 {
            debug!("text is not valid UTF-8, decoded as Latin-1");
        }
        Ok(text)
    }
}
