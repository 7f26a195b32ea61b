//! Concept frequency analysis over a tagged result set.

use std::collections::HashMap;

use examtag_core::{Subject, GENERIC_FALLBACK_LABEL};
use serde::Serialize;

use crate::catalog::split_labels;

/// How many concepts the report lists.
pub const TOP_CONCEPTS: usize = 5;

/// One concept and how many results mention it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConceptFrequency {
    pub concept: String,
    pub count: usize,
    /// `count / total_results * 100`.
    pub percentage: f64,
}

/// Concept distribution for one subject.
#[derive(Debug, Clone, Serialize)]
pub struct DistributionReport {
    pub subject: Subject,
    pub total_results: usize,
    /// Distinct concepts counted, excluding fallback labels.
    pub unique_concepts: usize,
    /// Most frequent concepts, highest count first.
    pub top: Vec<ConceptFrequency>,
}

/// Count concepts across results and keep the most frequent.
///
/// Each item is one result's `"; "`-joined concept string. The subject's
/// fallback label and `"General Knowledge"` are not counted, but every
/// result counts toward the percentage denominator. Equal counts keep the
/// order in which the concepts were first seen.
pub fn analyze<'a, I>(concept_strings: I, subject: Subject) -> DistributionReport
where
    I: IntoIterator<Item = &'a str>,
{
    let excluded = [subject.fallback_label(), GENERIC_FALLBACK_LABEL];

    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut counts: Vec<(&str, usize)> = Vec::new();
    let mut total_results = 0;

    for concepts in concept_strings {
        total_results += 1;
        for label in split_labels(concepts) {
            if excluded.iter().any(|e| *e == label) {
                continue;
            }
            match index.get(label) {
                Some(&i) => counts[i].1 += 1,
                None => {
                    index.insert(label, counts.len());
                    counts.push((label, 1));
                }
            }
        }
    }

    let unique_concepts = counts.len();
    // Stable sort keeps first-seen order among equal counts.
    counts.sort_by(|a, b| b.1.cmp(&a.1));

    let top = counts
        .into_iter()
        .take(TOP_CONCEPTS)
        .map(|(concept, count)| ConceptFrequency {
            concept: concept.to_string(),
            count,
            percentage: count as f64 / total_results as f64 * 100.0,
        })
        .collect();

    DistributionReport {
        subject,
        total_results,
        unique_concepts,
        top,
    }
}

impl std::fmt::Display for DistributionReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(
            f,
            "CONCEPT DISTRIBUTION ANALYSIS - {}",
            self.subject.as_str().to_uppercase()
        )?;
        writeln!(f, "{}", "=".repeat(50))?;
        writeln!(f, "Total unique concepts found: {}", self.unique_concepts)?;

        if self.top.is_empty() {
            return write!(
                f,
                "No specific concepts detected - may need API or enhanced keywords"
            );
        }

        write!(f, "Top {} most tested concepts:", TOP_CONCEPTS)?;
        for (i, entry) in self.top.iter().enumerate() {
            write!(
                f,
                "\n  {}. {}: {} questions ({:.1}%)",
                i + 1,
                entry.concept,
                entry.count,
                entry.percentage
            )?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_and_percentages() {
        let results = [
            "Harappan Civilization; International Trade",
            "Harappan Civilization; Water Management",
            "Mauryan Empire",
            "Ancient History",
        ];
        let report = analyze(results, Subject::AncientHistory);

        assert_eq!(report.total_results, 4);
        assert_eq!(report.unique_concepts, 4);
        assert_eq!(report.top[0].concept, "Harappan Civilization");
        assert_eq!(report.top[0].count, 2);
        assert!((report.top[0].percentage - 50.0).abs() < 1e-9);
        assert!((report.top[1].percentage - 25.0).abs() < 1e-9);
    }

    #[test]
    fn test_excludes_fallback_labels() {
        let results = ["Mathematics", "General Knowledge", "Algebra; Mathematics"];
        let report = analyze(results, Subject::Math);
        assert_eq!(report.unique_concepts, 1);
        assert_eq!(report.top.len(), 1);
        assert_eq!(report.top[0].concept, "Algebra");
    }

    #[test]
    fn test_ties_keep_first_seen_order() {
        let results = ["B; A", "C; A", "D; E; F; G"];
        let report = analyze(results, Subject::Physics);
        let names: Vec<_> = report.top.iter().map(|c| c.concept.as_str()).collect();
        assert_eq!(names, vec!["A", "B", "C", "D", "E"]);
        assert_eq!(report.unique_concepts, 7);
    }

    #[test]
    fn test_empty_results() {
        let report = analyze(Vec::<&str>::new(), Subject::Economics);
        assert_eq!(report.total_results, 0);
        assert!(report.top.is_empty());
        assert!(report.to_string().contains("No specific concepts detected"));
    }

    #[test]
    fn test_display() {
        let report = analyze(["Algebra", "Algebra; Geometry"], Subject::Math);
        let text = report.to_string();
        assert!(text.starts_with("CONCEPT DISTRIBUTION ANALYSIS - MATH"));
        assert!(text.contains("Total unique concepts found: 2"));
        assert!(text.contains("  1. Algebra: 2 questions (100.0%)"));
        assert!(text.contains("  2. Geometry: 1 questions (50.0%)"));
    }
}
