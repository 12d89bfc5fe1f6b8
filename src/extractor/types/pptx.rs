use crate::constants::{DEFAULT_MAX_ENTRY_BYTES, PPTX_SLIDE_PREFIX};
use crate::error::ExtractError;
use crate::extractor::ooxml::{self, OoxmlPackage};
use crate::extractor::{Format, TextExtractor};

/// PowerPoint presentation handler (.pptx)
#[derive(Debug, Clone, Copy)]
pub struct PptxExtractor {
    max_entry_bytes: u64,
}

impl PptxExtractor {
    pub fn new() -> Self {
        Self::with_limit(DEFAULT_MAX_ENTRY_BYTES)
    }

    pub fn with_limit(max_entry_bytes: u64) -> Self {
        Self { max_entry_bytes }
    }

    /// Slide number embedded in a part name like `ppt/slides/slide12.xml`
    fn slide_number(part: &str) -> Option<u32> {
        part.strip_prefix(PPTX_SLIDE_PREFIX)?
            .strip_suffix(".xml")?
            .parse()
            .ok()
    }
}

impl Default for PptxExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl TextExtractor for PptxExtractor {
    fn format(&self) -> Format {
        Format::Pptx
    }

    fn extract(&self, bytes: &[u8]) -> Result<String, ExtractError> {
        let mut package = OoxmlPackage::open(bytes, self.max_entry_bytes)?;

        let mut slides: Vec<(u32, String)> = package
            .part_names()
            .filter_map(|name| Self::slide_number(name).map(|n| (n, name.to_string())))
            .collect();
        slides.sort();

        let mut text = String::new();
        for (position, (_, part)) in slides.iter().enumerate() {
            text.push_str(&format!("--- Slide {} ---\n", position + 1));
            let xml = package.read_part(part)?;
            for run in ooxml::text_runs(&xml)? {
                text.push_str(&run);
                text.push('\n');
            }
            text.push('\n');
        }

        Ok(text)
    }
}
