//! Report records handed to presentation, persistence and export layers

use crate::processing::document::AnalysisResult;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Display band for a 0-100 ATS score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScoreBand {
    Excellent,
    Moderate,
    Low,
}

impl ScoreBand {
    pub const EXCELLENT_THRESHOLD: u8 = 80;
    pub const MODERATE_THRESHOLD: u8 = 60;

    pub fn from_score(score: u8) -> Self {
        if score >= Self::EXCELLENT_THRESHOLD {
            ScoreBand::Excellent
        } else if score >= Self::MODERATE_THRESHOLD {
            ScoreBand::Moderate
        } else {
            ScoreBand::Low
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ScoreBand::Excellent => "Excellent",
            ScoreBand::Moderate => "Moderate",
            ScoreBand::Low => "Low",
        }
    }
}

/// One stored analysis: the result plus who asked, for which role, and when.
///
/// `resume_id` is the opaque key stores and exports index records by.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisRecord {
    pub resume_id: Uuid,
    pub user_id: String,
    pub job_role: String,
    pub source_file: String,
    pub required_skills: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub band: ScoreBand,
    pub analysis: AnalysisResult,
}

impl AnalysisRecord {
    pub fn new(
        analysis: AnalysisResult,
        user_id: impl Into<String>,
        job_role: impl Into<String>,
        source_file: impl Into<String>,
        required_skills: Vec<String>,
    ) -> Self {
        Self {
            resume_id: Uuid::new_v4(),
            user_id: user_id.into(),
            job_role: job_role.into(),
            source_file: source_file.into(),
            required_skills,
            created_at: Utc::now(),
            band: ScoreBand::from_score(analysis.ats_score),
            analysis,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::processing::analyzer::analyze;

    #[test]
    fn test_score_bands() {
        assert_eq!(ScoreBand::from_score(100), ScoreBand::Excellent);
        assert_eq!(ScoreBand::from_score(80), ScoreBand::Excellent);
        assert_eq!(ScoreBand::from_score(79), ScoreBand::Moderate);
        assert_eq!(ScoreBand::from_score(60), ScoreBand::Moderate);
        assert_eq!(ScoreBand::from_score(59), ScoreBand::Low);
        assert_eq!(ScoreBand::from_score(0), ScoreBand::Low);
    }

    #[test]
    fn test_record_serializes() {
        let analysis = analyze("", &[]);
        let record = AnalysisRecord::new(analysis, "user-1", "Data Scientist", "cv.pdf", vec![]);

        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["resume_id"], record.resume_id.to_string());
        assert_eq!(json["user_id"], "user-1");
        assert_eq!(json["band"], "Low");
        assert_eq!(json["analysis"]["document_type"], "unknown");
        assert_eq!(json["analysis"]["ats_score"], 0);
    }

    #[test]
    fn test_resume_ids_are_unique() {
        let first = AnalysisRecord::new(analyze("", &[]), "u", "", "a.pdf", vec![]);
        let second = AnalysisRecord::new(analyze("", &[]), "u", "", "a.pdf", vec![]);

        assert!(!first.resume_id.is_nil());
        assert_ne!(first.resume_id, second.resume_id);
    }
}
