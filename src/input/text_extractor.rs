//! Text extraction from PDF and DOCX byte streams

use crate::error::{Result, ResumeAtsError};
use crate::input::file_detector::FileType;
use docx_rs::{DocumentChild, Paragraph, ParagraphChild, RunChild};
use log::{debug, warn};
use std::panic;

pub trait TextExtractor {
    fn extract(&self, bytes: &[u8]) -> Result<String>;
}

pub struct PdfExtractor;

impl TextExtractor for PdfExtractor {
    fn extract(&self, bytes: &[u8]) -> Result<String> {
        // pdf-extract panics on some malformed content streams
        let pages = panic::catch_unwind(|| pdf_extract::extract_text_from_mem_by_pages(bytes))
            .map_err(|payload| {
                let message = panic_message(payload.as_ref());
                warn!("PDF parser panicked: {}", message);
                ResumeAtsError::ExtractionFailure(format!("PDF parser aborted: {}", message))
            })?
            .map_err(|e| {
                ResumeAtsError::ExtractionFailure(format!("Failed to extract text from PDF: {}", e))
            })?;

        let total = pages.len();
        let texts: Vec<&str> = pages
            .iter()
            .map(|page| page.as_str())
            .filter(|page| !page.trim().is_empty())
            .collect();

        if texts.len() < total {
            warn!("Skipped {} PDF page(s) without extractable text", total - texts.len());
        }
        debug!("Extracted text from {} of {} PDF pages", texts.len(), total);

        Ok(texts.join("\n").trim().to_string())
    }
}

pub struct DocxExtractor;

impl TextExtractor for DocxExtractor {
    fn extract(&self, bytes: &[u8]) -> Result<String> {
        let docx = docx_rs::read_docx(bytes).map_err(|e| {
            ResumeAtsError::ExtractionFailure(format!("Failed to read DOCX document: {}", e))
        })?;

        let paragraphs: Vec<String> = docx
            .document
            .children
            .iter()
            .filter_map(|child| match child {
                DocumentChild::Paragraph(para) => Some(paragraph_text(para)),
                _ => None,
            })
            .collect();

        debug!("Extracted {} DOCX paragraphs", paragraphs.len());

        Ok(paragraphs.join("\n").trim().to_string())
    }
}

fn paragraph_text(para: &Paragraph) -> String {
    let mut text = String::new();
    for child in &para.children {
        if let ParagraphChild::Run(run) = child {
            for run_child in &run.children {
                match run_child {
                    RunChild::Text(t) => text.push_str(&t.text),
                    RunChild::Tab(_) => text.push('\t'),
                    _ => {}
                }
            }
        }
    }
    text
}

fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(msg) = payload.downcast_ref::<&str>() {
        msg.to_string()
    } else if let Some(msg) = payload.downcast_ref::<String>() {
        msg.clone()
    } else {
        "unknown panic".to_string()
    }
}

/// Extract normalized text from a document given its declared format.
///
/// The format is validated before any bytes are inspected, so an unsupported
/// extension never reaches a parser.
pub fn extract_text(bytes: &[u8], format: &str) -> Result<String> {
    let file_type = FileType::from_extension(format)?;
    extract_text_as(bytes, file_type)
}

/// Extract normalized text from a document of a known format.
pub fn extract_text_as(bytes: &[u8], file_type: FileType) -> Result<String> {
    match file_type {
        FileType::Pdf => PdfExtractor.extract(bytes),
        FileType::Docx => DocxExtractor.extract(bytes),
    }
}
