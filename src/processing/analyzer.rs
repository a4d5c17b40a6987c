//! Analysis pipeline: classification, field extraction, skill matching, scoring and suggestions

use crate::config::Config;
use crate::error::Result;
use crate::processing::classifier::classify;
use crate::processing::document::{AnalysisResult, DocumentType, ScoreBreakdown};
use crate::processing::formatting::check_formatting;
use crate::processing::scoring::{ats_score, section_score};
use crate::processing::skill_matcher::{match_required_skills, RegexSkillMatcher, SkillMatcher};
use crate::processing::suggestions::{generate_suggestions, NOT_A_RESUME};
use crate::processing::text_processor::TextProcessor;
use log::debug;
use once_cell::sync::Lazy;

static DEFAULT_ANALYZER: Lazy<ResumeAnalyzer> = Lazy::new(ResumeAnalyzer::default);

/// Runs every analysis stage over extracted text.
///
/// Holds only read-only state, so one analyzer can serve concurrent calls.
pub struct ResumeAnalyzer {
    matcher: Box<dyn SkillMatcher>,
    text_processor: TextProcessor,
}

impl ResumeAnalyzer {
    /// Create an analyzer using regex vocabulary matching
    pub fn new() -> Result<Self> {
        Ok(Self::with_matcher(Box::new(RegexSkillMatcher::new()?)))
    }

    pub fn with_matcher(matcher: Box<dyn SkillMatcher>) -> Self {
        debug!(
            "Using {} skill matcher over {} vocabulary terms",
            matcher.name(),
            matcher.skill_count()
        );
        Self {
            matcher,
            text_processor: TextProcessor::new(),
        }
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        Ok(Self::with_matcher(config.analysis.matcher.build()?))
    }

    pub fn matcher_name(&self) -> &'static str {
        self.matcher.name()
    }

    /// Analyze extracted text against a list of required skills.
    ///
    /// Never fails: empty text classifies as `unknown` with a zero score.
    pub fn analyze(&self, text: &str, required_skills: &[String]) -> AnalysisResult {
        let personal_info = self.text_processor.extract_personal_info(text);
        let sections = self.text_processor.extract_sections(text);
        let metrics = self.text_processor.compute_metrics(text);
        let extracted_skills: Vec<String> = self.matcher.extract_skills(text).into_iter().collect();
        let document_type = classify(text);

        debug!(
            "Classified document as {} ({} characters, {} vocabulary skills)",
            document_type,
            metrics.character_count,
            extracted_skills.len()
        );

        if document_type != DocumentType::Resume {
            return AnalysisResult {
                document_type,
                ats_score: 0,
                scores: ScoreBreakdown::default(),
                found_skills: Vec::new(),
                missing_skills: Vec::new(),
                extracted_skills,
                suggestions: vec![NOT_A_RESUME.to_string()],
                personal_info,
                sections,
                metrics,
                matcher: self.matcher.name().to_string(),
            };
        }

        let keyword_match = match_required_skills(text, required_skills);
        let formatting = check_formatting(text);
        let scores = ScoreBreakdown {
            section_score: section_score(text),
            keyword_score: keyword_match.score,
            format_score: formatting.score,
        };
        let ats_score = ats_score(&scores);

        debug!(
            "Scores: section={} keyword={} format={} -> ats={}",
            scores.section_score, scores.keyword_score, scores.format_score, ats_score
        );

        let suggestions =
            generate_suggestions(&formatting, scores.keyword_score, scores.section_score);

        AnalysisResult {
            document_type,
            ats_score,
            scores,
            found_skills: keyword_match.found_skills,
            missing_skills: keyword_match.missing_skills,
            extracted_skills,
            suggestions,
            personal_info,
            sections,
            metrics,
            matcher: self.matcher.name().to_string(),
        }
    }
}

impl Default for ResumeAnalyzer {
    fn default() -> Self {
        Self::new().expect("Failed to create default resume analyzer")
    }
}

/// Analyze text with the default regex matcher.
pub fn analyze(text: &str, required_skills: &[String]) -> AnalysisResult {
    DEFAULT_ANALYZER.analyze(text, required_skills)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::processing::document::Section;
    use crate::processing::skill_matcher::MatcherKind;
    use crate::processing::suggestions::{ADD_SKILLS, ALL_GOOD, INCLUDE_SECTIONS};

    fn skills(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    fn scenario_text() -> String {
        let mut text = String::from(
            "John Doe\njohn@x.com\n• Experience: built APIs\nEducation: BS CS\nSkills: Python, SQL",
        );
        while text.chars().count() < 300 {
            text.push_str("\nReliable backend engineer focused on clean code.");
        }
        text
    }

    #[test]
    fn test_reference_scenario() {
        let result = analyze(&scenario_text(), &skills(&["python", "sql", "java"]));

        assert_eq!(result.document_type, DocumentType::Resume);
        assert_eq!(result.found_skills, skills(&["python", "sql"]));
        assert_eq!(result.missing_skills, skills(&["java"]));
        assert_eq!(result.scores.keyword_score, 67);
        assert_eq!(result.scores.section_score, 75);
        assert_eq!(result.scores.format_score, 100);
        assert_eq!(result.ats_score, 79);
        assert_eq!(result.suggestions, vec![ADD_SKILLS]);
        assert_eq!(result.personal_info.name, "John Doe");
        assert_eq!(result.personal_info.email, "john@x.com");
        assert_eq!(result.extracted_skills, skills(&["python", "sql"]));
        assert_eq!(result.sections[&Section::Education], "Education: BS CS");
    }

    #[test]
    fn test_empty_text_is_unknown() {
        let result = analyze("", &skills(&["python"]));

        assert_eq!(result.document_type, DocumentType::Unknown);
        assert_eq!(result.ats_score, 0);
        assert_eq!(result.suggestions, vec![NOT_A_RESUME]);
        assert_eq!(result.personal_info.name, "Unknown");
    }

    #[test]
    fn test_non_resume_short_circuits() {
        let text = "Semester 6 marksheet. CGPA 9.1. Grade: A+. john@x.com";
        let result = analyze(text, &skills(&["python"]));

        assert_eq!(result.document_type, DocumentType::Marksheet);
        assert_eq!(result.ats_score, 0);
        assert_eq!(result.scores, ScoreBreakdown::default());
        assert!(result.found_skills.is_empty());
        assert!(result.missing_skills.is_empty());
        assert_eq!(result.suggestions, vec![NOT_A_RESUME]);
    }

    #[test]
    fn test_empty_required_skills() {
        let result = analyze(&scenario_text(), &[]);

        assert_eq!(result.scores.keyword_score, 0);
        // 75 * 0.3 + 0 + 100 * 0.3 = 52.5
        assert_eq!(result.ats_score, 53);
        assert_eq!(result.suggestions, vec![ADD_SKILLS]);
    }

    #[test]
    fn test_full_coverage_is_positive() {
        let text = format!("{}\nProjects: resume parser", scenario_text());
        let result = analyze(&text, &skills(&["python", "sql"]));

        assert_eq!(result.scores.section_score, 100);
        assert_eq!(result.ats_score, 100);
        assert_eq!(result.suggestions, vec![ALL_GOOD]);
    }

    #[test]
    fn test_weak_resume_collects_all_suggestions() {
        let text = "Experience and education, little else";
        let result = analyze(text, &skills(&["rust"]));

        assert_eq!(result.document_type, DocumentType::Resume);
        assert_eq!(result.scores.format_score, 40);
        assert_eq!(result.scores.section_score, 50);
        assert_eq!(result.suggestions.len(), 5);
        assert_eq!(result.suggestions[3], ADD_SKILLS);
        assert_eq!(result.suggestions[4], INCLUDE_SECTIONS);
    }

    #[test]
    fn test_strategies_produce_same_result() {
        let text = scenario_text();
        let required = skills(&["python", "sql", "java"]);
        let regex = ResumeAnalyzer::with_matcher(MatcherKind::Regex.build().unwrap());
        let phrase = ResumeAnalyzer::with_matcher(MatcherKind::Phrase.build().unwrap());

        let a = regex.analyze(&text, &required);
        let b = phrase.analyze(&text, &required);

        assert_eq!(a.ats_score, b.ats_score);
        assert_eq!(a.extracted_skills, b.extracted_skills);
        assert_eq!(b.matcher, "phrase");
    }

    #[test]
    fn test_from_config() {
        let mut config = Config::default();
        config.analysis.matcher = MatcherKind::Phrase;
        let analyzer = ResumeAnalyzer::from_config(&config).unwrap();
        assert_eq!(analyzer.matcher_name(), "phrase");
    }
}
