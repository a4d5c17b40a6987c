//! Field extraction: contact details, named sections and text statistics

use crate::processing::document::{PersonalInfo, ResumeMetrics, Section, SectionMap};
use once_cell::sync::Lazy;
use regex::Regex;
use unicode_segmentation::UnicodeSegmentation;

pub(crate) static EMAIL_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[\w.-]+@[\w.-]+\.\w+").expect("Invalid email regex"));

static PHONE_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?:\+[0-9]{1,3}[-.\s]?)?[0-9]{10}").expect("Invalid phone regex"));

static LINKEDIN_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"linkedin\.com/in/[\w-]+").expect("Invalid LinkedIn regex"));

static GITHUB_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"github\.com/[\w-]+").expect("Invalid GitHub regex"));

static HEADING_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Z][A-Z ]{2,}").expect("Invalid heading regex"));

static EXPERIENCE_YEARS_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b([0-9]{1,3})\+?[\s-]*(?:years?|yrs?)\b").expect("Invalid experience regex")
});

pub struct TextProcessor;

impl Default for TextProcessor {
    fn default() -> Self {
        Self::new()
    }
}

impl TextProcessor {
    pub fn new() -> Self {
        Self
    }

    /// Extract contact fields. Each field takes the first match in the text.
    pub fn extract_personal_info(&self, text: &str) -> PersonalInfo {
        let first_match = |re: &Regex| {
            re.find(text)
                .map(|m| m.as_str().to_string())
                .unwrap_or_default()
        };

        let name = if text.is_empty() {
            "Unknown".to_string()
        } else {
            text.split('\n').next().unwrap_or_default().trim().to_string()
        };

        PersonalInfo {
            name,
            email: first_match(&EMAIL_REGEX),
            phone: first_match(&PHONE_REGEX),
            linkedin: first_match(&LINKEDIN_REGEX),
            github: first_match(&GITHUB_REGEX),
        }
    }

    /// Split the text into the four tracked sections.
    pub fn extract_sections(&self, text: &str) -> SectionMap {
        Section::ALL
            .iter()
            .map(|&section| (section, self.extract_section(text, section)))
            .collect()
    }

    /// Text from the first occurrence of the section name up to the next heading.
    pub fn extract_section(&self, text: &str, section: Section) -> String {
        let pattern = format!("(?i){}", regex::escape(section.as_str()));
        let Ok(name_regex) = Regex::new(&pattern) else {
            return String::new();
        };
        let Some(start) = name_regex.find(text) else {
            return String::new();
        };

        let rest = &text[start.end()..];
        let mut end = text.len();
        for (idx, _) in rest.match_indices('\n') {
            let line = rest[idx + 1..].split('\n').next().unwrap_or_default();
            if Self::is_heading(line, section) {
                end = start.end() + idx;
                break;
            }
        }

        text[start.start()..end].trim().to_string()
    }

    fn is_heading(line: &str, current: Section) -> bool {
        if HEADING_REGEX.is_match(line) {
            return true;
        }
        let lowered = line.trim_start().to_lowercase();
        Section::ALL
            .iter()
            .filter(|&&s| s != current)
            .any(|s| lowered.starts_with(s.as_str()))
    }

    /// Word, sentence and experience statistics.
    pub fn compute_metrics(&self, text: &str) -> ResumeMetrics {
        let word_count = text.unicode_words().count();
        let sentence_count = text
            .unicode_sentences()
            .filter(|s| !s.trim().is_empty())
            .count();
        let experience_years = EXPERIENCE_YEARS_REGEX
            .captures_iter(text)
            .filter_map(|cap| cap.get(1).and_then(|m| m.as_str().parse::<u32>().ok()))
            .max()
            .unwrap_or(0);

        ResumeMetrics {
            word_count,
            sentence_count,
            character_count: text.chars().count(),
            experience_years,
        }
    }
}
