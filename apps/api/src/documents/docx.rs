//! DOCX text extraction. Walks `word/document.xml` and keeps headings and table rows
//! visible as line structure for the section locator.

use std::io::{Cursor, Read};

use quick_xml::events::Event;
use quick_xml::Reader;
use zip::ZipArchive;

use crate::documents::models::DocumentFormat;
use crate::documents::ParseError;

const DOCUMENT_PART: &str = "word/document.xml";
const CELL_SEPARATOR: &str = " | ";
/// Text boxes and their VML fallbacks are anchored inside a run of the host paragraph.
const SKIPPED_SUBTREES: &[&[u8]] = &[b"w:txbxContent", b"mc:Fallback"];

/// Extracts paragraph and table text from a DOCX container.
///
/// Output layout:
/// - body paragraphs in document order, empty ones skipped
/// - an upper-case paragraph is followed by a blank line (likely section heading)
/// - then every table row, non-empty cells joined by `" | "`
pub fn extract_docx_text(bytes: &[u8]) -> Result<String, ParseError> {
    let mut archive = ZipArchive::new(Cursor::new(bytes)).map_err(docx_error)?;
    let mut xml = String::new();
    archive
        .by_name(DOCUMENT_PART)
        .map_err(docx_error)?
        .read_to_string(&mut xml)
        .map_err(docx_error)?;

    let body = walk_document(&xml)?;
    Ok(render(&body))
}

fn docx_error(e: impl std::error::Error + Send + Sync + 'static) -> ParseError {
    ParseError::extraction(DocumentFormat::Docx, e)
}

#[derive(Debug, Default)]
struct DocumentBody {
    paragraphs: Vec<String>,
    rows: Vec<Vec<String>>,
}

#[derive(Default)]
struct Walker {
    body: DocumentBody,
    table_depth: usize,
    skipped: usize,
    in_text: bool,
    paragraph: Option<String>,
    row: Option<Vec<String>>,
    cell: Option<Vec<String>>,
}

impl Walker {
    fn start(&mut self, name: &[u8]) {
        if is_skipped_subtree(name) {
            self.skipped += 1;
            return;
        }
        if self.skipped > 0 {
            return;
        }
        match name {
            b"w:p" => self.paragraph = Some(String::new()),
            b"w:t" => self.in_text = true,
            b"w:tbl" => self.table_depth += 1,
            b"w:tr" if self.table_depth == 1 => self.row = Some(Vec::new()),
            b"w:tc" if self.table_depth == 1 => self.cell = Some(Vec::new()),
            _ => {}
        }
    }

    fn end(&mut self, name: &[u8]) {
        if is_skipped_subtree(name) {
            self.skipped = self.skipped.saturating_sub(1);
            return;
        }
        if self.skipped > 0 {
            return;
        }
        match name {
            b"w:p" => {
                let text = self.paragraph.take().unwrap_or_default();
                self.finish_paragraph(text);
            }
            b"w:t" => self.in_text = false,
            b"w:tbl" => self.table_depth = self.table_depth.saturating_sub(1),
            b"w:tc" if self.table_depth == 1 => {
                if let (Some(cell), Some(row)) = (self.cell.take(), self.row.as_mut()) {
                    row.push(cell.join("\n"));
                }
            }
            b"w:tr" if self.table_depth == 1 => {
                if let Some(row) = self.row.take() {
                    self.body.rows.push(row);
                }
            }
            _ => {}
        }
    }

    fn empty(&mut self, name: &[u8]) {
        if self.skipped > 0 {
            return;
        }
        match name {
            b"w:p" => self.finish_paragraph(String::new()),
            b"w:tab" => self.push_text("\t"),
            b"w:br" | b"w:cr" => self.push_text("\n"),
            _ => {}
        }
    }

    fn push_text(&mut self, text: &str) {
        if let Some(p) = self.paragraph.as_mut() {
            p.push_str(text);
        }
    }

    fn finish_paragraph(&mut self, text: String) {
        if self.table_depth == 0 {
            self.body.paragraphs.push(text);
        } else if let Some(cell) = self.cell.as_mut() {
            cell.push(text);
        }
    }
}

fn is_skipped_subtree(name: &[u8]) -> bool {
    SKIPPED_SUBTREES.iter().any(|skipped| *skipped == name)
}

fn walk_document(xml: &str) -> Result<DocumentBody, ParseError> {
    let mut reader = Reader::from_str(xml);
    let mut walker = Walker::default();

    loop {
        match reader.read_event().map_err(docx_error)? {
            Event::Start(e) => walker.start(e.name().as_ref()),
            Event::End(e) => walker.end(e.name().as_ref()),
            Event::Empty(e) => walker.empty(e.name().as_ref()),
            Event::Text(e) if walker.in_text => {
                let text = e.unescape().map_err(docx_error)?;
                walker.push_text(&text);
            }
            Event::Eof => break,
            _ => {}
        }
    }

    Ok(walker.body)
}

fn render(body: &DocumentBody) -> String {
    let mut lines = Vec::new();

    for paragraph in &body.paragraphs {
        let text = paragraph.trim();
        if text.is_empty() {
            continue;
        }
        if is_heading(text) {
            lines.push(format!("{text}\n"));
        } else {
            lines.push(text.to_string());
        }
    }

    for row in &body.rows {
        let cells: Vec<&str> = row
            .iter()
            .map(|c| c.trim())
            .filter(|c| !c.is_empty())
            .collect();
        if !cells.is_empty() {
            lines.push(cells.join(CELL_SEPARATOR));
        }
    }

    lines.join("\n")
}

/// At least one cased letter and no lower-case ones.
fn is_heading(text: &str) -> bool {
    text.chars().any(char::is_uppercase) && !text.chars().any(char::is_lowercase)
}
