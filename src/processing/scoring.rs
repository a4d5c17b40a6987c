//! Composite ATS scoring

use crate::processing::document::{ScoreBreakdown, Section};
use crate::processing::vocabulary::section_keywords;

pub const SECTION_WEIGHT: f64 = 0.3;
pub const KEYWORD_WEIGHT: f64 = 0.4;
pub const FORMAT_WEIGHT: f64 = 0.3;

const POINTS_PER_SECTION: u8 = 25;

/// Sections with at least one keyword variant anywhere in the text.
pub fn covered_sections(text: &str) -> Vec<Section> {
    let text_lower = text.to_lowercase();
    Section::ALL
        .iter()
        .copied()
        .filter(|&section| {
            section_keywords(section)
                .iter()
                .any(|keyword| text_lower.contains(keyword))
        })
        .collect()
}

/// 25 points per covered section, 0-100.
pub fn section_score(text: &str) -> u8 {
    covered_sections(text).len() as u8 * POINTS_PER_SECTION
}

/// Weighted combination of the component scores, rounded to 0-100.
pub fn ats_score(scores: &ScoreBreakdown) -> u8 {
    let weighted = f64::from(scores.section_score) * SECTION_WEIGHT
        + f64::from(scores.keyword_score) * KEYWORD_WEIGHT
        + f64::from(scores.format_score) * FORMAT_WEIGHT;
    weighted.round().clamp(0.0, 100.0) as u8
}
