use crate::constants::CSV_FIELD_SEPARATOR;
use crate::error::ExtractError;
use crate::extractor::{Format, TextExtractor};
use crate::utils;

/// CSV file handler
///
/// Rows come out one per line with their fields joined by ` | `; blank
/// lines stay as empty lines. There is no header handling: the first row is
/// data like any other.
#[derive(Debug, Default, Clone, Copy)]
pub struct CsvExtractor;

impl CsvExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl TextExtractor for CsvExtractor {
    fn format(&self) -> Format {
        Format::Csv
    }

    fn extract(&self, bytes: &[u8]) -> Result<String, ExtractError> {
        let (content, _) = utils::decode_text(bytes);

        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_reader(content.as_bytes());

        let mut text = String::new();
        let mut record = csv::StringRecord::new();
        // Byte offset where the previous record's data ended
        let mut data_end = 0usize;
        let mut first = true;

        // The parser skips blank lines; they are recovered from the gap between records
        while rdr.read_record(&mut record)? {
            let end = rdr.position().byte() as usize;
            let chunk = content.get(data_end..end).unwrap_or("");
            let data_start = chunk
                .find(|c: char| c != '\r' && c != '\n')
                .unwrap_or(chunk.len());
            push_blank_lines(&mut text, &chunk[..data_start], first);

            let fields: Vec<&str> = record.iter().collect();
            text.push_str(&fields.join(CSV_FIELD_SEPARATOR));
            text.push('\n');

            data_end += chunk.trim_end_matches(|c: char| c == '\r' || c == '\n').len();
            first = false;
        }

        let tail = content.get(data_end..).unwrap_or("");
        push_blank_lines(&mut text, tail, first);

        Ok(text)
    }
}

/// Emit one empty line per line break in `gap`, except the break ending the previous row
fn push_blank_lines(text: &mut String, gap: &str, first: bool) {
    let breaks = gap.replace("\r\n", "\n").chars().count();
    let blanks = if first { breaks } else { breaks.saturating_sub(1) };
    for _ in 0..blanks {
        text.push('\n');
    }
}
