use std::path::PathBuf;
use thiserror::Error;

/// Per-file extraction failure.
///
/// These never abort a batch: the pipeline stores them in the file's
/// `ExtractionResult` and they are rendered inline as bracketed text.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ExtractError {
    /// The file extension has no registered extractor
    #[error("Unsupported file type: {extension}")]
    Unsupported { extension: String },

    /// Bytes could not be decoded under any attempted text encoding
    #[error("could not decode text: {0}")]
    Decode(String),

    /// The zip container could not be opened or read
    #[error("invalid container: {0}")]
    Container(String),

    /// A part the format requires is absent from the container
    #[error("missing part: {0}")]
    MissingPart(String),

    /// A container part decompresses past the configured limit
    #[error("part {part} exceeds size limit ({limit} bytes)")]
    EntryTooLarge { part: String, limit: u64 },

    #[error("malformed XML: {0}")]
    Xml(String),

    #[error("malformed CSV: {0}")]
    Csv(String),

    #[error("malformed PDF: {0}")]
    Pdf(String),

    /// A parser panicked; caught at the pipeline boundary
    #[error("parser crashed: {0}")]
    Panicked(String),
}

impl ExtractError {
    /// Render the error as the inline placeholder stored in the output.
    pub fn placeholder(&self) -> String {
        match self {
            ExtractError::Unsupported { extension } => {
                let extension = if extension.is_empty() { "(none)" } else { extension };
                format!("[Unsupported file type: {}]", extension)
            }
            other => format!("[Error extracting text: {}]", other),
        }
    }
}

impl From<zip::result::ZipError> for ExtractError {
    fn from(err: zip::result::ZipError) -> Self {
        ExtractError::Container(err.to_string())
    }
}

impl From<quick_xml::Error> for ExtractError {
    fn from(err: quick_xml::Error) -> Self {
        ExtractError::Xml(err.to_string())
    }
}

impl From<csv::Error> for ExtractError {
    fn from(err: csv::Error) -> Self {
        ExtractError::Csv(err.to_string())
    }
}

impl From<lopdf::Error> for ExtractError {
    fn from(err: lopdf::Error) -> Self {
        ExtractError::Pdf(err.to_string())
    }
}

/// Batch-fatal failure while producing the combined artifact.
#[derive(Error, Debug)]
pub enum OutputError {
    #[error("failed to serialize record for {filename}: {source}")]
    Serialize {
        filename: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to write output {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
