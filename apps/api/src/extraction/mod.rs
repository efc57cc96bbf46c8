//! Resume file text extraction.
//!
//! Supported uploads: `.pdf` (via `pdf-extract`), legacy `.doc` (printable
//! ASCII runs), and plain `.txt` / `.md`. Everything else is rejected with 422.

pub mod handlers;

use serde::Serialize;
use tracing::debug;

use crate::errors::AppError;

/// Shortest printable run kept when scraping a binary `.doc`.
const MIN_DOC_RUN: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentKind {
    Pdf,
    Doc,
    Text,
}

impl DocumentKind {
    /// Picks the extractor from the file extension, case-insensitively.
    pub fn from_file_name(file_name: &str) -> Option<Self> {
        let (_, ext) = file_name.rsplit_once('.')?;
        match ext.to_ascii_lowercase().as_str() {
            "pdf" => Some(DocumentKind::Pdf),
            "doc" => Some(DocumentKind::Doc),
            "txt" | "md" => Some(DocumentKind::Text),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ExtractedDocument {
    pub file_name: String,
    pub kind: DocumentKind,
    pub text: String,
    pub word_count: usize,
}

/// Extracts normalised plain text from an uploaded resume file.
pub fn extract_text(file_name: &str, bytes: &[u8]) -> Result<ExtractedDocument, AppError> {
    let kind = DocumentKind::from_file_name(file_name).ok_or_else(|| {
        AppError::UnprocessableEntity(format!(
            "unsupported file type for '{file_name}'; upload a PDF, DOC, or TXT file"
        ))
    })?;
    if bytes.is_empty() {
        return Err(AppError::UnprocessableEntity(format!("'{file_name}' is empty")));
    }

    let raw = match kind {
        DocumentKind::Pdf => pdf_extract::extract_text_from_mem(bytes).map_err(|e| {
            AppError::UnprocessableEntity(format!("could not read PDF '{file_name}': {e}"))
        })?,
        DocumentKind::Doc => printable_runs(bytes, MIN_DOC_RUN),
        DocumentKind::Text => String::from_utf8_lossy(bytes).into_owned(),
    };

    let text = normalize_whitespace(&raw);
    if text.is_empty() {
        return Err(AppError::UnprocessableEntity(format!(
            "no readable text found in '{file_name}'"
        )));
    }

    let word_count = text.split_whitespace().count();
    debug!("Extracted {word_count} words from {file_name} ({kind:?})");
    Ok(ExtractedDocument {
        file_name: file_name.to_string(),
        kind,
        text,
        word_count,
    })
}

/// Joins runs of printable ASCII at least `min_len` long with single spaces.
fn printable_runs(bytes: &[u8], min_len: usize) -> String {
    bytes
        .split(|b| !(b.is_ascii_graphic() || *b == b' '))
        .filter(|run| run.len() >= min_len)
        .filter_map(|run| std::str::from_utf8(run).ok())
        .map(str::trim)
        .filter(|run| !run.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Collapses inner whitespace, trims every line, and keeps at most one blank
/// line between paragraphs.
pub fn normalize_whitespace(raw: &str) -> String {
    let mut lines: Vec<String> = Vec::new();
    for line in raw.lines() {
        let collapsed = line.split_whitespace().collect::<Vec<_>>().join(" ");
        if collapsed.is_empty() && lines.last().map_or(true, |l| l.is_empty()) {
            continue;
        }
        lines.push(collapsed);
    }
    while lines.last().is_some_and(|l| l.is_empty()) {
        lines.pop();
    }
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_from_extension() {
        assert_eq!(DocumentKind::from_file_name("cv.PDF"), Some(DocumentKind::Pdf));
        assert_eq!(DocumentKind::from_file_name("resume.doc"), Some(DocumentKind::Doc));
        assert_eq!(DocumentKind::from_file_name("notes.md"), Some(DocumentKind::Text));
        assert_eq!(DocumentKind::from_file_name("resume.docx"), None);
        assert_eq!(DocumentKind::from_file_name("resume"), None);
    }

    #[test]
    fn test_text_file_is_normalised() {
        let doc = extract_text("cv.txt", b"  Jane   Doe \r\n\n\n\nEXPERIENCE\t\t\n- Built APIs  \n\n").unwrap();
        assert_eq!(doc.text, "Jane Doe\n\nEXPERIENCE\n- Built APIs");
        assert_eq!(doc.kind, DocumentKind::Text);
        assert_eq!(doc.word_count, 6);
    }

    #[test]
    fn test_invalid_utf8_is_decoded_lossily() {
        let doc = extract_text("cv.txt", b"Jane \xff Doe").unwrap();
        assert!(doc.text.starts_with("Jane"));
        assert!(doc.text.ends_with("Doe"));
    }

    #[test]
    fn test_doc_keeps_printable_runs() {
        let mut bytes = vec![0xD0, 0xCF, 0x11, 0xE0, 0x00];
        bytes.extend_from_slice(b"Jane Doe Resume");
        bytes.extend_from_slice(&[0x00, 0x01, b'a', b'b', 0x02]);
        bytes.extend_from_slice(b"Python developer");
        bytes.push(0x00);

        let doc = extract_text("old.doc", &bytes).unwrap();
        assert_eq!(doc.text, "Jane Doe Resume Python developer");
        assert_eq!(doc.kind, DocumentKind::Doc);
    }

    #[test]
    fn test_docx_is_rejected() {
        let result = extract_text("resume.docx", b"PK\x03\x04");
        assert!(matches!(result, Err(AppError::UnprocessableEntity(_))));
    }

    #[test]
    fn test_empty_and_blank_files_are_rejected() {
        assert!(matches!(
            extract_text("cv.txt", b""),
            Err(AppError::UnprocessableEntity(_))
        ));
        assert!(matches!(
            extract_text("cv.txt", b" \n\t \n"),
            Err(AppError::UnprocessableEntity(_))
        ));
        assert!(matches!(
            extract_text("cv.doc", &[0u8, 1, 2, b'a', 0]),
            Err(AppError::UnprocessableEntity(_))
        ));
    }

    #[test]
    fn test_corrupt_pdf_is_unprocessable() {
        let result = extract_text("cv.pdf", b"this is not a pdf at all");
        assert!(matches!(result, Err(AppError::UnprocessableEntity(_))));
    }
}
