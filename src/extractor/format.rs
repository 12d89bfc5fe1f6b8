use std::fmt;

/// Document formats with a registered extractor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Format {
    Txt,
    Csv,
    Docx,
    Xlsx,
    Pptx,
    Pdf,
}

impl Format {
    /// Every supported format, in listing order
    pub const ALL: [Format; 6] = [
        Format::Docx,
        Format::Xlsx,
        Format::Pptx,
        Format::Pdf,
        Format::Csv,
        Format::Txt,
    ];

    /// Lowercased file extension (without the dot)
    pub fn extension(&self) -> &'static str {
        match self {
            Format::Txt => "txt",
            Format::Csv => "csv",
            Format::Docx => "docx",
            Format::Xlsx => "xlsx",
            Format::Pptx => "pptx",
            Format::Pdf => "pdf",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Format::Txt => "Text files",
            Format::Csv => "CSV files",
            Format::Docx => "Microsoft Word",
            Format::Xlsx => "Microsoft Excel",
            Format::Pptx => "Microsoft PowerPoint",
            Format::Pdf => "PDF documents",
        }
    }

    /// Map a lowercased extension to its format
    pub fn from_extension(ext: &str) -> Option<Format> {
        Self::ALL.into_iter().find(|f| f.extension() == ext)
    }

    /// Whether a (lowercased) extension belongs to any supported format
    pub fn is_supported(ext: &str) -> bool {
        Self::from_extension(ext).is_some()
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (.{})", self.description(), self.extension())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_extension() {
        assert_eq!(Format::from_extension("docx"), Some(Format::Docx));
        assert_eq!(Format::from_extension("pdf"), Some(Format::Pdf));
        assert_eq!(Format::from_extension("doc"), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(Format::Xlsx.to_string(), "Microsoft Excel (.xlsx)");
    }
}
