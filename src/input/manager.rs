//! Input manager for reading resume files from disk

use crate::error::{Result, ResumeAtsError};
use crate::input::file_detector::FileType;
use crate::input::text_extractor::extract_text_as;
use log::info;
use std::path::Path;
use tokio::fs;

#[derive(Debug, Default)]
pub struct InputManager;

impl InputManager {
    pub fn new() -> Self {
        Self
    }

    /// Read a resume file and return its normalized text.
    ///
    /// The extension is checked before the file is read.
    pub async fn extract_text(&self, path: &Path) -> Result<String> {
        let file_type = self.detect_file_type(path)?;

        if !path.exists() {
            return Err(ResumeAtsError::InvalidInput(format!(
                "File does not exist: {}",
                path.display()
            )));
        }

        let bytes = fs::read(path).await?;
        info!(
            "Extracting text from {} ({}, {} bytes)",
            path.display(),
            file_type,
            bytes.len()
        );

        extract_text_as(&bytes, file_type).map_err(|e| match e {
            ResumeAtsError::ExtractionFailure(msg) => {
                ResumeAtsError::ExtractionFailure(format!("{}: {}", path.display(), msg))
            }
            other => other,
        })
    }

    pub fn detect_file_type(&self, path: &Path) -> Result<FileType> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .ok_or_else(|| {
                ResumeAtsError::UnsupportedFormat(format!(
                    "File has no extension: {}",
                    path.display()
                ))
            })?;

        FileType::from_extension(extension)
    }
}
