//! Batch pipeline: question file → concepts → output file → optional analysis.

use std::sync::Arc;

use examtag_core::{Result, Subject};
use examtag_llm::{build_prompt, CompletionProvider};
use examtag_store::{ConceptRecord, CsvStore};
use tracing::{info, warn};

use crate::types::*;

/// Longest question prefix shown in progress logs.
const PREVIEW_CHARS: usize = 100;

/// Concept extraction over a CSV store, optionally LLM-first.
pub struct ConceptPipeline {
    store: CsvStore,
    llm: Option<Arc<dyn CompletionProvider>>,
}

impl ConceptPipeline {
    /// Create a pipeline. With `llm` set, each question goes to the LLM
    /// first and falls back to keywords on failure.
    pub fn new(store: CsvStore, llm: Option<Arc<dyn CompletionProvider>>) -> Self {
        Self { store, llm }
    }

    pub fn store(&self) -> &CsvStore {
        &self.store
    }

    pub fn method(&self) -> ExtractionMethod {
        if self.llm.is_some() {
            ExtractionMethod::Api
        } else {
            ExtractionMethod::Keyword
        }
    }

    /// Concepts for one question, `"; "`-joined and never empty.
    pub async fn extract_concepts(&self, question: &str, subject: Subject) -> String {
        self.extract_tracked(question, subject).await.0
    }

    /// Like [`extract_concepts`](Self::extract_concepts), also reporting
    /// whether an LLM failure forced the keyword fallback.
    async fn extract_tracked(&self, question: &str, subject: Subject) -> (String, bool) {
        let Some(llm) = &self.llm else {
            return (examtag_extract::extract(question, subject), false);
        };

        let prompt = build_prompt(question, subject);
        match llm.complete(&prompt).await {
            Ok(response) if !response.trim().is_empty() => (response.trim().to_string(), false),
            Ok(_) => {
                warn!("{} returned an empty response, falling back to keyword extraction", llm.name());
                (examtag_extract::extract(question, subject), true)
            }
            Err(e) => {
                warn!("API call failed: {}. Falling back to keyword extraction", e);
                (examtag_extract::extract(question, subject), true)
            }
        }
    }

    /// Tag every question in the subject's file and overwrite its output file.
    ///
    /// Rows with empty question text are skipped with a warning. Read and
    /// write failures end the run.
    pub async fn run_batch(&self, subject: Subject, analyze: bool) -> Result<BatchReport> {
        let rows = self.store.read_questions(subject)?;

        let mut records = Vec::with_capacity(rows.len());
        let mut skipped = 0;
        let mut llm_fallbacks = 0;

        for row in rows {
            if row.question.is_empty() {
                warn!("Question {}: empty question text, skipping", row.number);
                skipped += 1;
                continue;
            }

            info!("Question {}: {}", row.number, preview(&row.question));

            let (concepts, fell_back) = self.extract_tracked(&row.question, subject).await;
            if fell_back {
                llm_fallbacks += 1;
            }
            info!("Question {} concepts: {}", row.number, concepts);

            records.push(ConceptRecord {
                question_number: row.number,
                question: row.question,
                concepts,
            });
        }

        let output_path = self.store.write_results(subject, &records)?;

        let distribution = analyze.then(|| {
            examtag_extract::analyze(records.iter().map(|r| r.concepts.as_str()), subject)
        });

        Ok(BatchReport {
            subject,
            method: self.method(),
            processed: records.len(),
            skipped,
            llm_fallbacks,
            output_path,
            distribution,
        })
    }
}

fn preview(question: &str) -> String {
    if question.chars().count() > PREVIEW_CHARS {
        let head: String = question.chars().take(PREVIEW_CHARS).collect();
        format!("{}...", head)
    } else {
        question.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use examtag_core::{DataPaths, Error};

    struct FixedLlm(Result<String>);

    #[async_trait]
    impl CompletionProvider for FixedLlm {
        fn name(&self) -> String {
            "fixed".into()
        }

        async fn complete(&self, _prompt: &str) -> Result<String> {
            match &self.0 {
                Ok(s) => Ok(s.clone()),
                Err(e) => Err(Error::Llm(e.to_string())),
            }
        }
    }

    fn test_pipeline(llm: Option<Arc<dyn CompletionProvider>>) -> (ConceptPipeline, tempfile::TempDir) {
        let dir = tempfile::tempdir().unwrap();
        let paths = DataPaths::new(dir.path(), dir.path()).unwrap();
        (ConceptPipeline::new(CsvStore::new(paths), llm), dir)
    }

    #[tokio::test]
    async fn test_keyword_only() {
        let (pipeline, _dir) = test_pipeline(None);
        assert_eq!(pipeline.method(), ExtractionMethod::Keyword);
        assert_eq!(
            pipeline.extract_concepts("Describe monetary policy", Subject::Economics).await,
            "Monetary Policy"
        );
    }

    #[tokio::test]
    async fn test_llm_response_trimmed() {
        let llm: Arc<dyn CompletionProvider> =
            Arc::new(FixedLlm(Ok("  Fiscal Policy; Public Debt \n".into())));
        let (pipeline, _dir) = test_pipeline(Some(llm));
        assert_eq!(pipeline.method(), ExtractionMethod::Api);
        assert_eq!(
            pipeline.extract_concepts("Describe monetary policy", Subject::Economics).await,
            "Fiscal Policy; Public Debt"
        );
    }

    #[tokio::test]
    async fn test_llm_failure_falls_back() {
        let llm: Arc<dyn CompletionProvider> =
            Arc::new(FixedLlm(Err(Error::Llm("timeout".into()))));
        let (pipeline, _dir) = test_pipeline(Some(llm));
        let (concepts, fell_back) = pipeline
            .extract_tracked("Describe monetary policy", Subject::Economics)
            .await;
        assert_eq!(concepts, "Monetary Policy");
        assert!(fell_back);
    }

    #[tokio::test]
    async fn test_llm_empty_response_falls_back() {
        let llm: Arc<dyn CompletionProvider> = Arc::new(FixedLlm(Ok("   ".into())));
        let (pipeline, _dir) = test_pipeline(Some(llm));
        assert_eq!(pipeline.extract_concepts("", Subject::Physics).await, "Physics");
    }

    #[tokio::test]
    async fn test_run_batch_missing_file() {
        let (pipeline, _dir) = test_pipeline(None);
        assert!(matches!(
            pipeline.run_batch(Subject::Math, false).await,
            Err(Error::NotFound(_))
        ));
    }

    #[test]
    fn test_preview() {
        assert_eq!(preview("short"), "short");
        let long = "x".repeat(150);
        let p = preview(&long);
        assert_eq!(p.len(), 103);
        assert!(p.ends_with("..."));
    }
}
