//! Subject detection from question and option text.
//!
//! Uses a small curated keyword list per subject, separate from the concept
//! catalog. Each keyword present in the text scores one point for its subject,
//! however often it occurs.

use examtag_core::Subject;
use tracing::debug;

/// High-signal keywords per subject, in detection order.
const SUBJECT_KEYWORDS: &[(Subject, &[&str])] = &[
    (Subject::AncientHistory, &[
        "harappan", "maurya", "gupta", "ashoka", "vedic",
        "buddhism", "inscription", "dynasty", "archaeology",
    ]),
    (Subject::Math, &[
        "algebra", "geometry", "calculus", "equation", "triangle",
        "theorem", "probability", "statistics", "derivative",
    ]),
    (Subject::Physics, &[
        "force", "energy", "velocity", "acceleration", "quantum",
        "thermodynamics", "electric", "magnetic", "wave",
    ]),
    (Subject::Economics, &[
        "demand", "supply", "market", "price", "gdp",
        "inflation", "trade", "tax", "employment",
    ]),
];

/// Keyword hit count per subject, in detection order.
pub fn score(combined_text: &str) -> Vec<(Subject, usize)> {
    let text_lower = combined_text.to_lowercase();

    SUBJECT_KEYWORDS
        .iter()
        .map(|&(subject, keywords)| {
            let hits = keywords.iter().filter(|kw| text_lower.contains(**kw)).count();
            (subject, hits)
        })
        .collect()
}

/// Most likely subject for the text.
///
/// Ties go to the subject listed first. Text with no hits at all is
/// `ancient_history`.
pub fn detect(combined_text: &str) -> Subject {
    let scores = score(combined_text);

    let mut best_subject = Subject::default();
    let mut best_score = 0;

    for &(subject, hits) in &scores {
        if hits > best_score {
            best_score = hits;
            best_subject = subject;
        }
    }

    debug!(?scores, "Detected subject {}", best_subject);
    best_subject
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_math() {
        assert_eq!(detect("Find the derivative of the polynomial function"), Subject::Math);
    }

    #[test]
    fn test_detect_default() {
        assert_eq!(detect("Lorem ipsum dolor sit amet"), Subject::AncientHistory);
        assert_eq!(detect(""), Subject::AncientHistory);
    }

    #[test]
    fn test_detect_physics_from_options() {
        let text = "A body moves with constant velocity. Kinetic energy Potential energy Force Momentum";
        assert_eq!(detect(text), Subject::Physics);
    }

    #[test]
    fn test_tie_goes_to_earlier_subject() {
        // One math hit (algebra) and one economics hit (tax).
        assert_eq!(detect("algebra of tax"), Subject::Math);
        // One ancient history hit (gupta) and one physics hit (wave).
        assert_eq!(detect("gupta wave"), Subject::AncientHistory);
    }

    #[test]
    fn test_repeats_count_once() {
        let scores = score("price price price demand");
        assert_eq!(scores[3], (Subject::Economics, 2));

        // Two distinct physics keywords beat one economics keyword repeated.
        assert_eq!(detect("tax tax tax force energy"), Subject::Physics);
    }

    #[test]
    fn test_score_order() {
        let subjects: Vec<_> = score("").into_iter().map(|(s, _)| s).collect();
        assert_eq!(subjects, Subject::ALL.to_vec());
    }
}
