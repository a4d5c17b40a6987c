//! Read-only keyword tables shared by every analysis

use crate::processing::document::{DocumentType, Section};

/// Technical skills recognized by fixed-vocabulary extraction.
pub const SKILL_VOCABULARY: &[&str] = &[
    // Languages and web
    "python", "java", "javascript", "html", "css", "sql",
    "react", "angular", "vue", "node", "express",
    // Frameworks and infrastructure
    "django", "flask", "spring", "docker", "kubernetes",
    "aws", "azure", "gcp", "git", "jenkins", "jira",
    // Data
    "machine learning", "data science", "tensorflow",
    "pandas", "numpy", "power bi", "tableau",
];

/// Keyword variants that mark each resume section as present.
pub const SECTION_KEYWORDS: &[(Section, &[&str])] = &[
    (Section::Education, &["education", "university", "college", "degree"]),
    (Section::Experience, &["experience", "employment", "internship"]),
    (Section::Skills, &["skills", "technologies", "tools"]),
    (Section::Projects, &["projects", "academic projects"]),
];

/// Candidate document types in tie-break order: earlier entries win ties.
pub const DOCUMENT_TYPE_KEYWORDS: &[(DocumentType, &[&str])] = &[
    (DocumentType::Resume, &["experience", "education", "skills", "project"]),
    (DocumentType::Marksheet, &["cgpa", "semester", "grade"]),
    (DocumentType::Certificate, &["certificate", "completed", "training"]),
    (DocumentType::IdCard, &["id", "identity", "valid until"]),
];

/// Keywords for a single section.
pub fn section_keywords(section: Section) -> &'static [&'static str] {
    SECTION_KEYWORDS
        .iter()
        .find(|(s, _)| *s == section)
        .map(|(_, keywords)| *keywords)
        .unwrap_or(&[])
}
