//! Surface formatting checks

use crate::processing::document::FormattingReport;
use crate::processing::text_processor::EMAIL_REGEX;

pub const MIN_RESUME_LENGTH: usize = 300;

const SHORT_PENALTY: u8 = 25;
const NO_BULLETS_PENALTY: u8 = 15;
const NO_EMAIL_PENALTY: u8 = 20;

pub const ISSUE_TOO_SHORT: &str = "Resume is too short";
pub const ISSUE_NO_BULLETS: &str = "Use bullet points";
pub const ISSUE_NO_CONTACT: &str = "Add contact information";

const BULLET_CHARS: [char; 3] = ['•', '-', '*'];

/// Score formatting from 100 down. Deductions stack and issues keep check order.
pub fn check_formatting(text: &str) -> FormattingReport {
    let checks: [(bool, u8, &str); 3] = [
        (text.chars().count() < MIN_RESUME_LENGTH, SHORT_PENALTY, ISSUE_TOO_SHORT),
        (!text.contains(&BULLET_CHARS[..]), NO_BULLETS_PENALTY, ISSUE_NO_BULLETS),
        (!EMAIL_REGEX.is_match(text), NO_EMAIL_PENALTY, ISSUE_NO_CONTACT),
    ];

    let mut score: u8 = 100;
    let mut issues = Vec::new();
    for (failed, penalty, issue) in checks {
        if failed {
            score = score.saturating_sub(penalty);
            issues.push(issue.to_string());
        }
    }

    FormattingReport { score, issues }
}
