//! Runtime types.

use std::path::PathBuf;

use examtag_core::Subject;
use examtag_extract::DistributionReport;
use serde::Serialize;

/// How concepts were produced for a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ExtractionMethod {
    Keyword,
    Api,
}

impl std::fmt::Display for ExtractionMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Keyword => write!(f, "Keyword-based"),
            Self::Api => write!(f, "API-based"),
        }
    }
}

/// Outcome of a batch run over one subject's question file.
#[derive(Debug, Clone, Serialize)]
pub struct BatchReport {
    pub subject: Subject,
    pub method: ExtractionMethod,
    /// Questions tagged and written.
    pub processed: usize,
    /// Rows skipped for empty question text.
    pub skipped: usize,
    /// Questions where the LLM failed and keywords were used instead.
    pub llm_fallbacks: usize,
    pub output_path: PathBuf,
    pub distribution: Option<DistributionReport>,
}

/// A parsed interactive line: question, four options, answer letter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionEntry {
    pub question: String,
    pub options: [String; 4],
    /// One of `A`..`D`, uppercased.
    pub answer: String,
}

impl QuestionEntry {
    /// Question and options joined by spaces, used for subject detection
    /// and keyword extraction.
    pub fn combined_text(&self) -> String {
        let mut text = self.question.clone();
        for option in &self.options {
            text.push(' ');
            text.push_str(option);
        }
        text
    }
}
