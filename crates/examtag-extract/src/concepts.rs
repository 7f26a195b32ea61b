//! Keyword-based concept extraction.

use std::collections::HashSet;

use examtag_core::{Subject, GENERIC_FALLBACK_LABEL};
use tracing::debug;

use crate::catalog::{self, KeywordCatalog};

/// Separator used when joining extracted concepts.
pub const CONCEPT_JOINER: &str = "; ";

/// Matched keywords are only traced when there are at most this many.
const MAX_TRACED_KEYWORDS: usize = 3;

/// Concepts extracted from one question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConceptExtraction {
    /// Unique concept labels in first-occurrence order. Never empty.
    pub concepts: Vec<String>,
    /// Catalog keywords found in the text, in catalog order.
    pub matched_keywords: Vec<&'static str>,
    /// True when no keyword matched and the fallback label was used.
    pub used_fallback: bool,
}

impl std::fmt::Display for ConceptExtraction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.concepts.join(CONCEPT_JOINER))
    }
}

/// Extract concepts for a question, joined with `"; "`.
///
/// Matching is case-insensitive substring containment of each catalog keyword
/// in the question text; there is no word-boundary check.
pub fn extract(question_text: &str, subject: Subject) -> String {
    extract_detailed(question_text, subject).to_string()
}

/// Like [`extract`], for a subject given by name. Unknown names fall back to
/// `"General Knowledge"`.
pub fn extract_for_name(question_text: &str, subject_name: &str) -> String {
    extract_with(
        catalog::lookup(),
        question_text,
        Subject::fallback_label_for(subject_name),
    )
    .to_string()
}

/// Extract concepts along with the keywords that produced them.
pub fn extract_detailed(question_text: &str, subject: Subject) -> ConceptExtraction {
    extract_with(catalog::lookup(), question_text, subject.fallback_label())
}

/// Run extraction against an explicit catalog.
pub fn extract_with(
    catalog: &KeywordCatalog,
    question_text: &str,
    fallback_label: &str,
) -> ConceptExtraction {
    let text_lower = question_text.to_lowercase();

    let mut matched_keywords = Vec::new();
    let mut seen: HashSet<&str> = HashSet::new();
    let mut concepts = Vec::new();

    for entry in catalog.iter() {
        if !text_lower.contains(entry.keyword) {
            continue;
        }
        matched_keywords.push(entry.keyword);
        for &label in &entry.labels {
            if seen.insert(label) {
                concepts.push(label.to_string());
            }
        }
    }

    if !matched_keywords.is_empty() && matched_keywords.len() <= MAX_TRACED_KEYWORDS {
        debug!("Detected keywords: {}", matched_keywords.join(", "));
    }

    let used_fallback = concepts.is_empty();
    if used_fallback {
        let label = if fallback_label.trim().is_empty() {
            GENERIC_FALLBACK_LABEL
        } else {
            fallback_label
        };
        concepts.push(label.to_string());
    }

    ConceptExtraction {
        concepts,
        matched_keywords,
        used_fallback,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_harappan_trade() {
        let text = "What caused the decline of the Harappan civilization and its trade with Mesopotamia?";
        let result = extract_detailed(text, Subject::AncientHistory);
        assert_eq!(result.matched_keywords, vec!["harappan", "trade"]);
        assert_eq!(result.to_string(), "Harappan Civilization; International Trade");
        assert!(!result.concepts.iter().any(|c| c == "Indus Valley Civilization"));
        assert!(!result.used_fallback);
    }

    #[test]
    fn test_multi_label_keyword() {
        let text = "Which site is known for its water reservoirs: Dholavira or Lothal?";
        assert_eq!(
            extract(text, Subject::AncientHistory),
            "Harappan Civilization; Water Management"
        );
    }

    #[test]
    fn test_dedup_keeps_first_occurrence() {
        // "maurya" and "mauryan" both map to Mauryan Empire; "edict" repeats Ashokan Edicts.
        let text = "The Mauryan emperor Ashoka issued edicts";
        let result = extract_detailed(text, Subject::AncientHistory);
        assert_eq!(result.matched_keywords, vec!["maurya", "mauryan", "ashoka", "edict"]);
        assert_eq!(
            result.to_string(),
            "Mauryan Empire; Ashokan Edicts; Mauryan Inscriptions"
        );
    }

    #[test]
    fn test_math_question() {
        assert_eq!(
            extract("Find the derivative of the polynomial function", Subject::Math),
            "Polynomial Functions; Differential Calculus; Functions"
        );
    }

    #[test]
    fn test_substring_matching_false_positive() {
        // "tan" and "import" both fire inside "important".
        assert_eq!(
            extract("This is important", Subject::Economics),
            "Trigonometric Functions; International Trade"
        );
    }

    #[test]
    fn test_fallback_per_subject() {
        assert_eq!(extract("Lorem ipsum dolor sit amet", Subject::AncientHistory), "Ancient History");
        assert_eq!(extract("", Subject::Math), "Mathematics");
        assert_eq!(extract("", Subject::Physics), "Physics");
        assert_eq!(extract("", Subject::Economics), "Economics");

        let result = extract_detailed("", Subject::Math);
        assert!(result.used_fallback);
        assert!(result.matched_keywords.is_empty());
    }

    #[test]
    fn test_unknown_subject_name() {
        assert_eq!(extract_for_name("Who built the stupa?", "chemistry"), "General Knowledge");
        assert_eq!(extract_for_name("Who built the stupa?", "physics"), "Physics");
        assert_eq!(extract_for_name("Describe monetary policy", "chemistry"), "Monetary Policy");
    }

    #[test]
    fn test_case_insensitive_and_idempotent() {
        let text = "What is the GDP DEFLATOR?";
        let first = extract(text, Subject::Economics);
        assert_eq!(first, "National Income");
        assert_eq!(extract(text, Subject::Economics), first);
    }

    #[test]
    fn test_custom_catalog() {
        let catalog = KeywordCatalog::from_pairs(&[("alpha", "A; B"), ("beta", "B; C")]);
        let result = extract_with(&catalog, "alpha beta", "X");
        assert_eq!(result.concepts, vec!["A", "B", "C"]);

        let result = extract_with(&catalog, "gamma", "");
        assert_eq!(result.concepts, vec![GENERIC_FALLBACK_LABEL]);
    }
}
