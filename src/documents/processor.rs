//! Document Processor
//!
//! Turns uploaded PDF and DOCX bytes into plain text. Parsing is CPU-bound
//! and runs on the blocking pool.

use std::io::Cursor;

use docx_rust::document::{BodyContent, Table, TableCellContent, TableRowContent};
use docx_rust::DocxFile;
use lopdf::Document;
use tracing::{debug, info};

use crate::types::{AppError, AppResult};

/// Formats the extractor understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Pdf,
    Docx,
}

impl DocumentFormat {
    pub fn from_extension(extension: &str) -> Option<Self> {
        match extension {
            "pdf" => Some(DocumentFormat::Pdf),
            "docx" => Some(DocumentFormat::Docx),
            _ => None,
        }
    }
}

/// A file received from the caller, held in memory for one request.
#[derive(Debug, Clone)]
pub struct UploadedDocument {
    pub bytes: Vec<u8>,
    /// Lowercased text after the last `.` of the original filename.
    pub extension: String,
}

impl UploadedDocument {
    pub fn new(bytes: Vec<u8>, extension: impl Into<String>) -> Self {
        Self {
            bytes,
            extension: extension.into(),
        }
    }

    pub fn from_filename(filename: &str, bytes: Vec<u8>) -> Self {
        Self::new(bytes, extension_of(filename))
    }
}

/// `"Resume.Final.PDF"` -> `"pdf"`. A name without a dot is returned whole.
pub fn extension_of(filename: &str) -> String {
    filename
        .rsplit('.')
        .next()
        .unwrap_or_default()
        .to_lowercase()
}

pub struct DocumentProcessor;

impl DocumentProcessor {
    /// Extract the document's text, rejecting unknown formats before any parsing.
    pub async fn extract_text(document: UploadedDocument) -> AppResult<String> {
        let format = DocumentFormat::from_extension(&document.extension)
            .ok_or_else(|| AppError::UnsupportedFileType(document.extension.clone()))?;

        debug!(format = ?format, bytes = document.bytes.len(), "Extracting document text");

        let text = tokio::task::spawn_blocking(move || match format {
            DocumentFormat::Pdf => Self::extract_pdf(&document.bytes),
            DocumentFormat::Docx => Self::extract_docx(&document.bytes),
        })
        .await
        .map_err(|e| AppError::Internal(format!("extraction task failed: {}", e)))??;

        info!(format = ?format, chars = text.len(), "Document text extracted");
        Ok(text)
    }

    pub fn extract_pdf(bytes: &[u8]) -> AppResult<String> {
        let doc = Document::load_mem(bytes)
            .map_err(|e| AppError::Extraction(format!("failed to parse PDF: {}", e)))?;

        let pages: Vec<u32> = doc.get_pages().keys().copied().collect();
        if pages.is_empty() {
            return Ok(String::new());
        }

        doc.extract_text(&pages)
            .map_err(|e| AppError::Extraction(format!("failed to extract PDF text: {}", e)))
    }

    pub fn extract_docx(bytes: &[u8]) -> AppResult<String> {
        let file = DocxFile::from_reader(Cursor::new(bytes))
            .map_err(|e| AppError::Extraction(format!("failed to open DOCX: {}", e)))?;
        let docx = file
            .parse()
            .map_err(|e| AppError::Extraction(format!("failed to parse DOCX: {}", e)))?;

        let blocks: Vec<String> = docx
            .document
            .body
            .content
            .iter()
            .filter_map(|content| match content {
                BodyContent::Paragraph(paragraph) => Some(paragraph.text()),
                BodyContent::Table(table) => Some(Self::table_text(table)),
                _ => None,
            })
            .collect();

        Ok(blocks.join("\n"))
    }

    /// Cell text in row order, one line per paragraph.
    fn table_text(table: &Table) -> String {
        let mut lines = Vec::new();
        for row in &table.rows {
            for cell in &row.cells {
                let TableRowContent::TableCell(cell) = cell else {
                    continue;
                };
                for content in &cell.content {
                    match content {
                        TableCellContent::Paragraph(paragraph) => lines.push(paragraph.text()),
                    }
                }
            }
        }
        lines.join("\n")
    }
}
