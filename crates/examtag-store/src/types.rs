//! Store record types.

use serde::{Deserialize, Serialize};

/// Column holding the question number in every file.
pub const QUESTION_NUMBER_COLUMN: &str = "Question Number";
/// Column holding the question text in every file.
pub const QUESTION_COLUMN: &str = "Question";

/// A question loaded from a subject's input file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionRow {
    /// `Question Number` cell, or the 1-based row index when absent.
    pub number: String,
    /// Trimmed question text. May be empty.
    pub question: String,
}

/// One batch output row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConceptRecord {
    #[serde(rename = "Question Number")]
    pub question_number: String,
    #[serde(rename = "Question")]
    pub question: String,
    #[serde(rename = "Concepts")]
    pub concepts: String,
}

/// One interactively entered question, with options and answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InteractiveRecord {
    #[serde(rename = "Question Number")]
    pub question_number: u64,
    #[serde(rename = "Question")]
    pub question: String,
    #[serde(rename = "Option A")]
    pub option_a: String,
    #[serde(rename = "Option B")]
    pub option_b: String,
    #[serde(rename = "Option C")]
    pub option_c: String,
    #[serde(rename = "Option D")]
    pub option_d: String,
    #[serde(rename = "Ans.?")]
    pub answer: String,
    #[serde(rename = "Concepts")]
    pub concepts: String,
}
