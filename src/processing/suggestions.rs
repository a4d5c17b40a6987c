//! Improvement suggestions derived from component scores

use crate::processing::document::FormattingReport;

pub const KEYWORD_THRESHOLD: u8 = 70;
pub const SECTION_THRESHOLD: u8 = 75;

pub const ADD_SKILLS: &str = "Add more job-relevant skills";
pub const INCLUDE_SECTIONS: &str = "Include all major sections";
pub const ALL_GOOD: &str = "Excellent ATS-ready resume!";
pub const NOT_A_RESUME: &str = "Please upload a proper resume.";

/// Suggestions in rule order: formatting issues, skills, sections.
/// Falls back to a single positive message when nothing fires.
pub fn generate_suggestions(
    formatting: &FormattingReport,
    keyword_score: u8,
    section_score: u8,
) -> Vec<String> {
    let mut suggestions = formatting.issues.clone();

    if keyword_score < KEYWORD_THRESHOLD {
        suggestions.push(ADD_SKILLS.to_string());
    }

    if section_score < SECTION_THRESHOLD {
        suggestions.push(INCLUDE_SECTIONS.to_string());
    }

    if suggestions.is_empty() {
        suggestions.push(ALL_GOOD.to_string());
    }

    suggestions
}
