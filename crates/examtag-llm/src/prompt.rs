//! Prompt construction for concept extraction.

use examtag_core::Subject;

/// What the exam covers for each subject, to steer the model.
fn subject_context(subject: Subject) -> &'static str {
    match subject {
        Subject::AncientHistory => {
            "ancient Indian history, archaeology, dynasties, literature, and culture"
        }
        Subject::Math => {
            "mathematics including algebra, geometry, calculus, statistics, and mathematical theorems"
        }
        Subject::Physics => {
            "physics including mechanics, thermodynamics, electromagnetism, optics, and modern physics"
        }
        Subject::Economics => {
            "economics including microeconomics, macroeconomics, public finance, and international trade"
        }
    }
}

/// Build the extraction prompt. The model is asked for `;`-separated concept
/// names only, which matches the keyword extractor's output shape.
pub fn build_prompt(question_text: &str, subject: Subject) -> String {
    format!(
        "This is a competitive exam question from {} focusing on {}. \
         Identify the main academic concepts being tested in this question. \
         Be specific and precise. Return only the concept names separated by semicolons.\n\n\
         Question: {}\n\n\
         Concepts:",
        subject.as_str().replace('_', " "),
        subject_context(subject),
        question_text
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_shape() {
        let prompt = build_prompt("What is entropy?", Subject::Physics);
        assert!(prompt.starts_with("This is a competitive exam question from physics focusing on physics including mechanics"));
        assert!(prompt.contains("separated by semicolons.\n\nQuestion: What is entropy?\n\nConcepts:"));
    }

    #[test]
    fn test_subject_name_spacing() {
        let prompt = build_prompt("Who was Ashoka?", Subject::AncientHistory);
        assert!(prompt.contains("question from ancient history focusing on ancient Indian history"));
    }
}
