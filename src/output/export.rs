//! Append-only CSV export of analysis records

use crate::error::Result;
use crate::output::report::AnalysisRecord;
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::fs::OpenOptions;
use std::path::{Path, PathBuf};

/// One exported analysis. `analysis` holds the full result as JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportRow {
    pub resume_id: String,
    pub user_id: String,
    pub job_role: String,
    pub source_file: String,
    pub document_type: String,
    pub ats_score: u8,
    pub content: String,
    pub analysis: String,
    pub created_at: String,
}

impl ExportRow {
    pub fn from_record(record: &AnalysisRecord, content: &str) -> Result<Self> {
        Ok(Self {
            resume_id: record.resume_id.to_string(),
            user_id: record.user_id.clone(),
            job_role: record.job_role.clone(),
            source_file: record.source_file.clone(),
            document_type: record.analysis.document_type.as_str().to_string(),
            ats_score: record.analysis.ats_score,
            content: content.to_string(),
            analysis: serde_json::to_string(&record.analysis)?,
            created_at: record.created_at.format("%Y-%m-%d %H:%M:%S").to_string(),
        })
    }
}

/// CSV file that grows by one row per analysis.
pub struct CsvExporter {
    path: PathBuf,
}

impl CsvExporter {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append one row, creating the file and its header on first use.
    pub fn append(&self, record: &AnalysisRecord, content: &str) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let is_new = std::fs::metadata(&self.path).map_or(true, |m| m.len() == 0);
        let file = OpenOptions::new().create(true).append(true).open(&self.path)?;
        let mut writer = csv::WriterBuilder::new()
            .has_headers(is_new)
            .from_writer(file);

        writer.serialize(ExportRow::from_record(record, content)?)?;
        writer.flush()?;

        info!("Exported analysis {} to {}", record.resume_id, self.path.display());
        Ok(())
    }

    /// Every exported row in file order. A missing file has no rows.
    pub fn read_all(&self) -> Result<Vec<ExportRow>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let mut reader = csv::Reader::from_path(&self.path)?;
        let rows = reader
            .deserialize()
            .collect::<std::result::Result<Vec<ExportRow>, _>>()?;

        debug!("Read {} exported rows from {}", rows.len(), self.path.display());
        Ok(rows)
    }

    pub fn rows_for_user(&self, user_id: &str) -> Result<Vec<ExportRow>> {
        Ok(self
            .read_all()?
            .into_iter()
            .filter(|row| row.user_id == user_id)
            .collect())
    }
}
