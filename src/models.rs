use crate::error::{ExtractError, OutputError};
use crate::output;
use crate::utils;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

/// A named blob of bytes handed to the pipeline
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputFile {
    /// Display name; also used to detect the format
    pub name: String,
    /// Raw file contents
    pub bytes: Vec<u8>,
}

impl InputFile {
    /// Create a new InputFile instance
    pub fn new(name: impl Into<String>, bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            name: name.into(),
            bytes: bytes.into(),
        }
    }

    /// Lowercased extension of the name (without the dot)
    pub fn extension(&self) -> Option<String> {
        utils::get_extension(&self.name)
    }
}

/// Outcome of extracting one input file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractionResult {
    /// Name of the InputFile this result was produced from
    pub source_name: String,
    /// Extracted text, or the reason there is none
    pub outcome: Result<String, ExtractError>,
}

impl ExtractionResult {
    pub fn new(source_name: impl Into<String>, outcome: Result<String, ExtractError>) -> Self {
        Self {
            source_name: source_name.into(),
            outcome,
        }
    }

    pub fn succeeded(&self) -> bool {
        self.outcome.is_ok()
    }

    /// Text as it appears in the output: the extraction, or the bracketed placeholder
    pub fn text(&self) -> Cow<'_, str> {
        match &self.outcome {
            Ok(text) => Cow::Borrowed(text.as_str()),
            Err(err) => Cow::Owned(err.placeholder()),
        }
    }

    pub fn error(&self) -> Option<&ExtractError> {
        self.outcome.as_ref().err()
    }
}

/// How the combined artifact is rendered
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportMode {
    /// Concatenated text with BEGIN/END delimiter blocks
    #[default]
    #[serde(alias = "plaintext", alias = "txt")]
    Text,
    /// One `{filename, content}` JSON object per line
    #[serde(alias = "json")]
    Jsonl,
}

impl ExportMode {
    /// File name used when no output path is configured
    pub fn default_file_name(&self) -> &'static str {
        match self {
            ExportMode::Text => "all_content.txt",
            ExportMode::Jsonl => "all_content.jsonl",
        }
    }

    pub fn mime_type(&self) -> &'static str {
        match self {
            ExportMode::Text => "text/plain",
            ExportMode::Jsonl => "application/jsonl",
        }
    }
}

impl fmt::Display for ExportMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExportMode::Text => write!(f, "text"),
            ExportMode::Jsonl => write!(f, "jsonl"),
        }
    }
}

impl FromStr for ExportMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "txt" | "plain" | "plaintext" => Ok(ExportMode::Text),
            "jsonl" | "json" => Ok(ExportMode::Jsonl),
            other => Err(format!("unknown export mode '{}' (expected text or jsonl)", other)),
        }
    }
}

/// Ordered results of one batch plus the mode they are rendered in
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchOutput {
    pub records: Vec<ExtractionResult>,
    pub mode: ExportMode,
}

impl BatchOutput {
    pub fn new(records: Vec<ExtractionResult>, mode: ExportMode) -> Self {
        Self { records, mode }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Number of records that carry a placeholder instead of text
    pub fn failed_count(&self) -> usize {
        self.records.iter().filter(|r| !r.succeeded()).count()
    }

    /// Render the whole batch in its export mode
    pub fn render(&self) -> Result<String, OutputError> {
        match self.mode {
            ExportMode::Text => Ok(output::render_plain_text(&self.records)),
            ExportMode::Jsonl => output::render_jsonl(&self.records),
        }
    }
}
