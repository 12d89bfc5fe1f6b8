use crate::constants::{begin_marker, end_marker};
use crate::error::OutputError;
use crate::models::ExtractionResult;
use serde::Serialize;
use std::borrow::Cow;
use std::path::Path;
use tracing::info;

/// One line of JSONL output
#[derive(Debug, Serialize)]
struct JsonlRecord<'a> {
    filename: &'a str,
    content: Cow<'a, str>,
}

/// Concatenate records, each wrapped in BEGIN/END FILE delimiters
pub fn render_plain_text(records: &[ExtractionResult]) -> String {
    let mut out = String::new();
    for record in records {
        out.push_str(&begin_marker(&record.source_name));
        out.push_str(&record.text());
        out.push_str(&end_marker(&record.source_name));
    }
    out
}

/// One compact `{filename, content}` object per record, each line newline-terminated
pub fn render_jsonl(records: &[ExtractionResult]) -> Result<String, OutputError> {
    let mut out = String::new();
    for record in records {
        let line = serde_json::to_string(&JsonlRecord {
            filename: &record.source_name,
            content: record.text(),
        })
        .map_err(|source| OutputError::Serialize {
            filename: record.source_name.clone(),
            source,
        })?;
        out.push_str(&line);
        out.push('\n');
    }
    Ok(out)
}

/// Write the rendered artifact, creating parent directories as needed
pub async fn write_output(path: &Path, content: &str) -> Result<(), OutputError> {
    let write_err = |source| OutputError::Write {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        tokio::fs::create_dir_all(parent).await.map_err(write_err)?;
    }
    tokio::fs::write(path, content).await.map_err(write_err)?;

    info!(path = %path.display(), bytes = content.len(), "output written");
    Ok(())
}

/// First `max_chars` characters of `content`
pub fn preview(content: &str, max_chars: usize) -> &str {
    match content.char_indices().nth(max_chars) {
        Some((idx, _)) => &content[..idx],
        None => content,
    }
}
