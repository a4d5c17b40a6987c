//! File type detection

use crate::error::{Result, ResumeAtsError};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Document formats the text extractor understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileType {
    Pdf,
    Docx,
}

impl FileType {
    /// Map a declared extension (with or without the leading dot) to a format.
    pub fn from_extension(ext: &str) -> Result<Self> {
        let normalized = ext.trim().trim_start_matches('.').to_lowercase();
        match normalized.as_str() {
            "pdf" => Ok(FileType::Pdf),
            "docx" => Ok(FileType::Docx),
            _ => Err(ResumeAtsError::UnsupportedFormat(format!(
                "'{}' (only pdf and docx are accepted)",
                ext
            ))),
        }
    }

    pub fn extension(&self) -> &'static str {
        match self {
            FileType::Pdf => "pdf",
            FileType::Docx => "docx",
        }
    }
}

impl fmt::Display for FileType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_extensions() {
        assert_eq!(FileType::from_extension("pdf").unwrap(), FileType::Pdf);
        assert_eq!(FileType::from_extension("DOCX").unwrap(), FileType::Docx);
        assert_eq!(FileType::from_extension(".Pdf").unwrap(), FileType::Pdf);
    }

    #[test]
    fn test_unknown_extensions() {
        for ext in ["txt", "doc", "md", ""] {
            assert!(matches!(
                FileType::from_extension(ext),
                Err(ResumeAtsError::UnsupportedFormat(_))
            ));
        }
    }
}
