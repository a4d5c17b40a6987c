//! Resume ATS library: text extraction, document classification and ATS scoring

pub mod cli;
pub mod config;
pub mod error;
pub mod input;
pub mod processing;
pub mod output;

pub use config::Config;
pub use error::{Result, ResumeAtsError};
pub use input::extract_text;
pub use processing::{analyze, AnalysisResult};
