//! Skill matching against the built-in vocabulary and caller-supplied requirements

use crate::error::{Result, ResumeAtsError};
use crate::processing::document::KeywordMatch;
use crate::processing::vocabulary::SKILL_VOCABULARY;
use aho_corasick::AhoCorasick;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashSet};
use std::fmt;

// Unicode `\w`, the class regex `\b` is defined over.
static WORD_CHAR: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\A\w\z").expect("Invalid word character regex"));

/// Fixed-vocabulary skill extraction strategy.
///
/// Implementations must match each vocabulary entry as a whole token or
/// phrase, so `java` never matches inside `javascript`.
pub trait SkillMatcher: Send + Sync {
    fn name(&self) -> &'static str;

    /// Lower-cased vocabulary entries present in `text`.
    fn extract_skills(&self, text: &str) -> BTreeSet<String>;

    fn skill_count(&self) -> usize;
}

/// Available matching strategies.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatcherKind {
    #[default]
    Regex,
    Phrase,
}

impl MatcherKind {
    pub fn build(&self) -> Result<Box<dyn SkillMatcher>> {
        Ok(match self {
            MatcherKind::Regex => Box::new(RegexSkillMatcher::new()?),
            MatcherKind::Phrase => Box::new(PhraseSkillMatcher::new()?),
        })
    }

    pub fn parse(value: &str) -> std::result::Result<Self, String> {
        match value.to_lowercase().as_str() {
            "regex" => Ok(MatcherKind::Regex),
            "phrase" => Ok(MatcherKind::Phrase),
            _ => Err(format!("Invalid matcher: {}. Supported: regex, phrase", value)),
        }
    }
}

impl fmt::Display for MatcherKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatcherKind::Regex => f.write_str("regex"),
            MatcherKind::Phrase => f.write_str("phrase"),
        }
    }
}

fn normalized_vocabulary(skills: Vec<String>) -> Vec<String> {
    let mut seen = HashSet::new();
    skills
        .into_iter()
        .map(|s| s.trim().to_lowercase())
        .filter(|s| !s.is_empty() && seen.insert(s.clone()))
        .collect()
}

fn default_vocabulary() -> Vec<String> {
    SKILL_VOCABULARY.iter().map(|s| s.to_string()).collect()
}

/// One `\b<term>\b` regex per vocabulary entry.
pub struct RegexSkillMatcher {
    patterns: Vec<(String, Regex)>,
}

impl RegexSkillMatcher {
    pub fn new() -> Result<Self> {
        Self::with_vocabulary(default_vocabulary())
    }

    pub fn with_vocabulary(skills: Vec<String>) -> Result<Self> {
        let patterns = normalized_vocabulary(skills)
            .into_iter()
            .map(|skill| {
                let re = Regex::new(&format!(r"\b{}\b", regex::escape(&skill))).map_err(|e| {
                    ResumeAtsError::Configuration(format!("Invalid skill pattern '{}': {}", skill, e))
                })?;
                Ok((skill, re))
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { patterns })
    }
}

impl SkillMatcher for RegexSkillMatcher {
    fn name(&self) -> &'static str {
        "regex"
    }

    fn extract_skills(&self, text: &str) -> BTreeSet<String> {
        let text_lower = text.to_lowercase();
        self.patterns
            .iter()
            .filter(|(_, re)| re.is_match(&text_lower))
            .map(|(skill, _)| skill.clone())
            .collect()
    }

    fn skill_count(&self) -> usize {
        self.patterns.len()
    }
}

/// Single Aho-Corasick automaton over the vocabulary with boundary checks on each hit.
pub struct PhraseSkillMatcher {
    automaton: AhoCorasick,
    skills: Vec<String>,
}

impl PhraseSkillMatcher {
    pub fn new() -> Result<Self> {
        Self::with_vocabulary(default_vocabulary())
    }

    pub fn with_vocabulary(skills: Vec<String>) -> Result<Self> {
        let skills = normalized_vocabulary(skills);
        // Overlapping search needs the standard match kind.
        let automaton = AhoCorasick::builder()
            .match_kind(aho_corasick::MatchKind::Standard)
            .build(&skills)
            .map_err(|e| {
                ResumeAtsError::Configuration(format!("Failed to build phrase matcher: {}", e))
            })?;

        Ok(Self { automaton, skills })
    }

    fn is_word_char(c: char) -> bool {
        let mut buf = [0u8; 4];
        WORD_CHAR.is_match(c.encode_utf8(&mut buf))
    }

    /// Same rule as regex `\b` on both edges of `text[start..end]`.
    fn on_word_boundaries(text: &str, start: usize, end: usize) -> bool {
        let matched = &text[start..end];
        let (Some(first), Some(last)) = (matched.chars().next(), matched.chars().last()) else {
            return false;
        };
        let before = text[..start].chars().next_back();
        let after = text[end..].chars().next();

        let leading = before.map_or(false, Self::is_word_char) != Self::is_word_char(first);
        let trailing = after.map_or(false, Self::is_word_char) != Self::is_word_char(last);
        leading && trailing
    }
}

impl SkillMatcher for PhraseSkillMatcher {
    fn name(&self) -> &'static str {
        "phrase"
    }

    fn extract_skills(&self, text: &str) -> BTreeSet<String> {
        let text_lower = text.to_lowercase();
        self.automaton
            .find_overlapping_iter(&text_lower)
            .filter(|m| Self::on_word_boundaries(&text_lower, m.start(), m.end()))
            .map(|m| self.skills[m.pattern().as_usize()].clone())
            .collect()
    }

    fn skill_count(&self) -> usize {
        self.skills.len()
    }
}

/// Case-insensitive substring presence of each required skill.
///
/// Blank entries are dropped and repeats collapse to their first occurrence,
/// so the score is computed over distinct skills. Reported skills are
/// lower-cased. An empty requirement list scores 0.
pub fn match_required_skills(text: &str, required_skills: &[String]) -> KeywordMatch {
    let text_lower = text.to_lowercase();
    let required = normalized_vocabulary(required_skills.to_vec());

    let (found_skills, missing_skills): (Vec<String>, Vec<String>) = required
        .iter()
        .cloned()
        .partition(|skill| text_lower.contains(skill.as_str()));

    KeywordMatch {
        score: percentage(found_skills.len(), required.len()),
        found_skills,
        missing_skills,
    }
}

/// `round(100 * part / whole)`, 0 when `whole` is 0.
pub(crate) fn percentage(part: usize, whole: usize) -> u8 {
    if whole == 0 {
        return 0;
    }
    (100.0 * part as f64 / whole as f64).round().clamp(0.0, 100.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    fn skills(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    fn set(values: &[&str]) -> BTreeSet<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_regex_matcher_uses_word_boundaries() {
        let matcher = RegexSkillMatcher::new().unwrap();
        let found = matcher.extract_skills("Built SPAs in JavaScript and React.");

        assert!(found.contains("javascript"));
        assert!(found.contains("react"));
        assert!(!found.contains("java"));
    }

    #[test]
    fn test_multi_word_skills() {
        let matcher = RegexSkillMatcher::new().unwrap();
        let found = matcher.extract_skills("Dashboards in Power BI; Machine Learning with pandas");

        assert_eq!(found, set(&["machine learning", "pandas", "power bi"]));
    }

    #[test]
    fn test_extraction_is_idempotent_and_order_independent() {
        let text = "python, docker, aws and sql. Python again. git";
        let forward = RegexSkillMatcher::new().unwrap();
        let mut reversed_vocab = default_vocabulary();
        reversed_vocab.reverse();
        let reversed = RegexSkillMatcher::with_vocabulary(reversed_vocab).unwrap();

        let first = forward.extract_skills(text);
        assert_eq!(first, forward.extract_skills(text));
        assert_eq!(first, reversed.extract_skills(text));
        assert_eq!(first, set(&["aws", "docker", "git", "python", "sql"]));
    }

    #[test]
    fn test_phrase_matcher_agrees_with_regex_matcher() {
        let regex = RegexSkillMatcher::new().unwrap();
        let phrase = PhraseSkillMatcher::new().unwrap();
        let samples = [
            "JavaScript, Java and Node.js on AWS",
            "numpy/pandas; tensorflow-based data science work",
            "gitlab is not git? git is git.",
            "expressive angularity vuejs",
            "python\u{b2} and sql",
            "python\u{301} expert",
            "git\u{200d}hub",
            "",
        ];

        for sample in samples {
            assert_eq!(regex.extract_skills(sample), phrase.extract_skills(sample), "{}", sample);
        }
    }

    #[test]
    fn test_phrase_matcher_uses_unicode_word_class() {
        let phrase = PhraseSkillMatcher::new().unwrap();

        // Superscript digits are not word characters; marks and joiners are.
        assert_eq!(phrase.extract_skills("python\u{b2} and sql"), set(&["python", "sql"]));
        assert!(phrase.extract_skills("python\u{301} expert").is_empty());
        assert!(phrase.extract_skills("git\u{200d}hub").is_empty());
    }

    #[test]
    fn test_phrase_matcher_rejects_embedded_terms() {
        let phrase = PhraseSkillMatcher::new().unwrap();
        let found = phrase.extract_skills("javascript gitlab expressive");
        assert_eq!(found, set(&["javascript"]));
    }

    #[test]
    fn test_matcher_kind_build() {
        assert_eq!(MatcherKind::Regex.build().unwrap().name(), "regex");
        assert_eq!(MatcherKind::Phrase.build().unwrap().name(), "phrase");
        assert_eq!(
            MatcherKind::Phrase.build().unwrap().skill_count(),
            SKILL_VOCABULARY.len()
        );
        assert_eq!(MatcherKind::parse("Phrase").unwrap(), MatcherKind::Phrase);
        assert!(MatcherKind::parse("fuzzy").is_err());
    }

    #[test]
    fn test_required_skill_matching() {
        let result = match_required_skills(
            "Skills: Python, SQL",
            &skills(&["python", "sql", "java"]),
        );

        assert_eq!(result.found_skills, skills(&["python", "sql"]));
        assert_eq!(result.missing_skills, skills(&["java"]));
        assert_eq!(result.score, 67);
    }

    #[test]
    fn test_required_skill_matching_is_substring_based() {
        // "java" is found inside "javascript" for required skills.
        let result = match_required_skills("JavaScript developer", &skills(&["Java"]));
        assert_eq!(result.found_skills, skills(&["java"]));
        assert_eq!(result.score, 100);
    }

    #[test]
    fn test_empty_required_skills_scores_zero() {
        let result = match_required_skills("anything at all", &[]);
        assert_eq!(result.score, 0);
        assert!(result.found_skills.is_empty());
        assert!(result.missing_skills.is_empty());

        let blanks = match_required_skills("anything", &skills(&["", "  "]));
        assert_eq!(blanks.score, 0);
    }

    #[test]
    fn test_duplicate_required_skills_collapse() {
        let result = match_required_skills("rust", &skills(&["Rust", "rust", "go"]));
        assert_eq!(result.found_skills, skills(&["rust"]));
        assert_eq!(result.missing_skills, skills(&["go"]));
        assert_eq!(result.score, 50);
    }

    #[test]
    fn test_percentage() {
        assert_eq!(percentage(0, 0), 0);
        assert_eq!(percentage(1, 3), 33);
        assert_eq!(percentage(2, 3), 67);
        assert_eq!(percentage(1, 2), 50);
        assert_eq!(percentage(3, 3), 100);
    }
}
