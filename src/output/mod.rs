//! Report records and their rendering

pub mod export;
pub mod formatter;
pub mod report;

pub use export::{CsvExporter, ExportRow};
pub use formatter::{OutputFormatter, ReportGenerator};
pub use report::{AnalysisRecord, ScoreBand};
