//! Severity classification.
//!
//! One place owns the mapping from scanner-native severity vocabulary to
//! the canonical scale. Both scanners funnel through here so the rest of
//! the pipeline never sees a raw token.

use crate::models::Severity;

/// Maps a native severity token onto the canonical scale, or `None` when
/// the token is outside both scanners' known vocabularies.
///
/// Matching is case-insensitive and ignores surrounding whitespace. The
/// image scanner's own "unknown" rating is part of the vocabulary, so it
/// classifies cleanly rather than counting as an anomaly.
pub fn lookup(token: &str) -> Option<Severity> {
    match token.trim().to_lowercase().as_str() {
        "critical" => Some(Severity::Critical),
        "high" => Some(Severity::High),
        "medium" | "moderate" => Some(Severity::Medium),
        "low" => Some(Severity::Low),
        "informational" | "info" => Some(Severity::Informational),
        "unknown" => Some(Severity::Unknown),
        _ => None,
    }
}

/// Total classification: never fails. Tokens `lookup` does not recognize
/// degrade to `Unknown`; the caller decides whether that is worth a
/// warning count.
pub fn classify(token: &str) -> Severity {
    lookup(token).unwrap_or(Severity::Unknown)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_vocabulary_maps_exhaustively() {
        let table = [
            ("critical", Severity::Critical),
            ("high", Severity::High),
            ("medium", Severity::Medium),
            ("moderate", Severity::Medium),
            ("low", Severity::Low),
            ("informational", Severity::Informational),
            ("info", Severity::Informational),
            ("unknown", Severity::Unknown),
        ];
        for (token, expected) in table {
            assert_eq!(lookup(token), Some(expected), "token {:?}", token);
        }
    }

    #[test]
    fn test_lookup_is_case_insensitive_and_trims() {
        assert_eq!(lookup("CRITICAL"), Some(Severity::Critical));
        assert_eq!(lookup("  High "), Some(Severity::High));
        assert_eq!(lookup("Moderate"), Some(Severity::Medium));
        assert_eq!(lookup("INFO"), Some(Severity::Informational));
    }

    #[test]
    fn test_lookup_rejects_out_of_vocabulary_tokens() {
        assert_eq!(lookup(""), None);
        assert_eq!(lookup("   "), None);
        assert_eq!(lookup("severe"), None);
        assert_eq!(lookup("p1"), None);
        assert_eq!(lookup("negligible"), None);
    }

    #[test]
    fn test_classify_degrades_to_unknown() {
        assert_eq!(classify("severe"), Severity::Unknown);
        assert_eq!(classify(""), Severity::Unknown);
        assert_eq!(classify("HIGH"), Severity::High);
    }
}
