//! Document structures produced by the analysis pipeline

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Coarse content category of an uploaded document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentType {
    Resume,
    Marksheet,
    Certificate,
    IdCard,
    Unknown,
}

impl DocumentType {
    pub fn as_str(&self) -> &'static str {
        match self {
            DocumentType::Resume => "resume",
            DocumentType::Marksheet => "marksheet",
            DocumentType::Certificate => "certificate",
            DocumentType::IdCard => "id_card",
            DocumentType::Unknown => "unknown",
        }
    }
}

impl fmt::Display for DocumentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Major resume sections tracked for coverage and extraction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    Education,
    Experience,
    Skills,
    Projects,
}

impl Section {
    pub const ALL: [Section; 4] = [
        Section::Education,
        Section::Experience,
        Section::Skills,
        Section::Projects,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Section::Education => "education",
            Section::Experience => "experience",
            Section::Skills => "skills",
            Section::Projects => "projects",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Section name to the slice of text judged to belong to it (empty if absent).
pub type SectionMap = BTreeMap<Section, String>;

/// Contact fields pulled from the resume text. Missing values are empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonalInfo {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub linkedin: String,
    pub github: String,
}

/// Outcome of matching a caller-supplied skill list against the text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeywordMatch {
    /// Percentage of required skills found, 0-100.
    pub score: u8,
    pub found_skills: Vec<String>,
    pub missing_skills: Vec<String>,
}

/// Surface formatting evaluation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormattingReport {
    pub score: u8,
    pub issues: Vec<String>,
}

/// Descriptive statistics that do not feed into the ATS score.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResumeMetrics {
    pub word_count: usize,
    pub sentence_count: usize,
    pub character_count: usize,
    pub experience_years: u32,
}

/// Component scores feeding the composite ATS score.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub section_score: u8,
    pub keyword_score: u8,
    pub format_score: u8,
}

/// Complete result of analyzing one document.
///
/// `ats_score` is only meaningful for resumes; every other document type
/// carries a zero score, zeroed components and a single corrective suggestion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub document_type: DocumentType,
    pub ats_score: u8,
    pub scores: ScoreBreakdown,
    pub found_skills: Vec<String>,
    pub missing_skills: Vec<String>,
    /// Skills from the built-in vocabulary, sorted.
    pub extracted_skills: Vec<String>,
    pub suggestions: Vec<String>,
    pub personal_info: PersonalInfo,
    pub sections: SectionMap,
    pub metrics: ResumeMetrics,
    /// Strategy used for vocabulary skill extraction.
    pub matcher: String,
}

impl AnalysisResult {
    pub fn is_resume(&self) -> bool {
        self.document_type == DocumentType::Resume
    }
}
