use crate::error::ExtractError;
use quick_xml::events::Event;
use quick_xml::Reader;
use std::io::{Cursor, Read};
use zip::result::ZipError;
use zip::ZipArchive;

/// Zip-based OOXML package (docx, xlsx, pptx) opened from memory
pub struct OoxmlPackage<'a> {
    archive: ZipArchive<Cursor<&'a [u8]>>,
    max_entry_bytes: u64,
}

impl<'a> OoxmlPackage<'a> {
    /// Open a package; parts larger than `max_entry_bytes` once decompressed are refused
    pub fn open(bytes: &'a [u8], max_entry_bytes: u64) -> Result<Self, ExtractError> {
        let archive = ZipArchive::new(Cursor::new(bytes))?;
        Ok(Self {
            archive,
            max_entry_bytes,
        })
    }

    /// Names of every part in the package, in central-directory order
    pub fn part_names(&self) -> impl Iterator<Item = &str> {
        self.archive.file_names()
    }

    pub fn contains(&self, part: &str) -> bool {
        self.part_names().any(|name| name == part)
    }

    /// Read one part fully, bounded by the size limit
    pub fn read_part(&mut self, part: &str) -> Result<Vec<u8>, ExtractError> {
        let limit = self.max_entry_bytes;
        let entry = match self.archive.by_name(part) {
            Ok(entry) => entry,
            Err(ZipError::FileNotFound) => return Err(ExtractError::MissingPart(part.to_string())),
            Err(err) => return Err(err.into()),
        };

        // One byte past the limit tells "exactly at the limit" apart from "over it"
        let mut data = Vec::new();
        entry
            .take(limit.saturating_add(1))
            .read_to_end(&mut data)
            .map_err(|e| ExtractError::Container(format!("failed to read {}: {}", part, e)))?;

        if data.len() as u64 > limit {
            return Err(ExtractError::EntryTooLarge {
                part: part.to_string(),
                limit,
            });
        }
        Ok(data)
    }
}

/// Text-bearing events found while streaming an OOXML part
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum XmlText {
    /// Content of one `t` element (`w:t`, `a:t`, or a shared-string `t`)
    Run(String),
    /// A paragraph (`p`) closed
    ParagraphEnd,
    /// A shared-string item (`si`) closed
    EntryEnd,
    /// A tab inside a run
    Tab,
    /// A line break inside a run
    Break,
}

/// Stream `xml` and hand every text-bearing event to `visit`, in document order
///
/// Elements are matched on local name so the namespace prefix does not matter.
pub fn walk_text(xml: &[u8], mut visit: impl FnMut(XmlText)) -> Result<(), ExtractError> {
    let mut reader = Reader::from_reader(xml);
    let mut buf = Vec::new();
    let mut run: Option<String> = None;
    // Tabs and breaks only count inside `r`; `w:tabs/w:tab` in paragraph properties are tab stops
    let mut run_depth = 0usize;

    loop {
        match reader.read_event_into(&mut buf)? {
            Event::Start(e) => match e.local_name().as_ref() {
                b"t" => run = Some(String::new()),
                b"r" => run_depth += 1,
                _ => {}
            },
            Event::Text(e) => {
                if let Some(run) = run.as_mut() {
                    run.push_str(&e.unescape()?);
                }
            }
            Event::CData(e) => {
                if let Some(run) = run.as_mut() {
                    run.push_str(&String::from_utf8_lossy(&e));
                }
            }
            Event::End(e) => match e.local_name().as_ref() {
                b"t" => {
                    if let Some(text) = run.take() {
                        visit(XmlText::Run(text));
                    }
                }
                b"r" => run_depth = run_depth.saturating_sub(1),
                b"p" => visit(XmlText::ParagraphEnd),
                b"si" => visit(XmlText::EntryEnd),
                _ => {}
            },
            Event::Empty(e) => match e.local_name().as_ref() {
                b"tab" if run_depth > 0 => visit(XmlText::Tab),
                b"br" | b"cr" if run_depth > 0 => visit(XmlText::Break),
                b"p" => visit(XmlText::ParagraphEnd),
                b"si" => visit(XmlText::EntryEnd),
                _ => {}
            },
            Event::Eof => break,
            _ => {}
        }
        buf.clear();
    }

    Ok(())
}

/// Collect every non-empty `t` run, one per element
pub fn text_runs(xml: &[u8]) -> Result<Vec<String>, ExtractError> {
    let mut runs = Vec::new();
    walk_text(xml, |event| {
        if let XmlText::Run(text) = event {
            if !text.is_empty() {
                runs.push(text);
            }
        }
    })?;
    Ok(runs)
}
