//! Keyword-overlap document type classification

use crate::processing::document::DocumentType;
use crate::processing::vocabulary::DOCUMENT_TYPE_KEYWORDS;
use log::debug;

/// A winning type needs at least this many keyword hits.
pub const MIN_CLASSIFICATION_HITS: usize = 2;

/// Per-type keyword hit counts in declaration order.
pub fn keyword_hits(text: &str) -> Vec<(DocumentType, usize)> {
    let text_lower = text.to_lowercase();
    DOCUMENT_TYPE_KEYWORDS
        .iter()
        .map(|(doc_type, keywords)| {
            let hits = keywords
                .iter()
                .filter(|keyword| text_lower.contains(*keyword))
                .count();
            (*doc_type, hits)
        })
        .collect()
}

/// Classify a document by keyword overlap.
///
/// Ties go to the type declared first (resume, marksheet, certificate,
/// id_card). A best score below [`MIN_CLASSIFICATION_HITS`] yields
/// `Unknown`.
pub fn classify(text: &str) -> DocumentType {
    let hits = keyword_hits(text);

    let mut best: Option<(DocumentType, usize)> = None;
    for (doc_type, count) in hits.iter().copied() {
        // Strictly greater keeps the earlier type on ties.
        if best.map_or(true, |(_, best_count)| count > best_count) {
            best = Some((doc_type, count));
        }
    }

    let result = match best {
        Some((doc_type, count)) if count >= MIN_CLASSIFICATION_HITS => doc_type,
        _ => DocumentType::Unknown,
    };
    debug!("Document keyword hits {:?} -> {}", hits, result);
    result
}
