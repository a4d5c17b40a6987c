//! Text processing and analysis module

pub mod vocabulary;
pub mod document;
pub mod text_processor;
pub mod skill_matcher;
pub mod classifier;
pub mod formatting;
pub mod scoring;
pub mod suggestions;
pub mod analyzer;

pub use analyzer::{analyze, ResumeAnalyzer};
pub use document::{AnalysisResult, DocumentType, Section};
pub use skill_matcher::{MatcherKind, SkillMatcher};
