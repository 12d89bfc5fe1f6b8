pub mod format;
pub mod ooxml;
pub mod registry;
pub mod r#trait;
pub mod types;

#[cfg(test)]
pub(crate) mod fixtures;

pub use format::Format;
pub use registry::{detect_format, ExtractorRegistry};
pub use r#trait::TextExtractor;
