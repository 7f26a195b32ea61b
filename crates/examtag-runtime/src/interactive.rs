//! Interactive question entry.
//!
//! Each line is one CSV record: `Question,Option A,Option B,Option C,Option D,Ans.?`.
//! The subject is detected from the text, duplicates are skipped, and new
//! questions are appended to the subject's output file with keyword concepts.

use std::path::PathBuf;

use csv::{ReaderBuilder, Trim};
use examtag_core::{Error, Result, Subject};
use examtag_store::{CsvStore, InteractiveRecord};
use tracing::{debug, info};

use crate::types::QuestionEntry;

const QUIT_COMMANDS: &[&str] = &["quit", "exit", "q"];
const ANSWERS: &[&str] = &["A", "B", "C", "D"];

/// What happened to one submitted line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InteractiveOutcome {
    Quit,
    Empty,
    Invalid(String),
    Duplicate {
        subject: Subject,
    },
    Saved {
        subject: Subject,
        question_number: u64,
        concepts: String,
        path: PathBuf,
    },
}

/// Parse one entry line into a question, four options, and an answer letter.
pub fn parse_entry(line: &str) -> Result<QuestionEntry> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(line.as_bytes());

    let record = rdr
        .records()
        .next()
        .ok_or_else(|| Error::InvalidEntry("empty input".into()))??;

    if record.len() != 6 {
        return Err(Error::InvalidEntry(format!(
            "Incorrect number of fields: expected 6, got {}",
            record.len()
        )));
    }

    let answer = record[5].to_uppercase();
    if !ANSWERS.contains(&answer.as_str()) {
        return Err(Error::InvalidEntry(
            "Correct answer must be A, B, C, or D".into(),
        ));
    }

    Ok(QuestionEntry {
        question: record[0].to_string(),
        options: [
            record[1].to_string(),
            record[2].to_string(),
            record[3].to_string(),
            record[4].to_string(),
        ],
        answer,
    })
}

/// Interactive session writing into a store.
pub struct InteractiveSession<'a> {
    store: &'a CsvStore,
}

impl<'a> InteractiveSession<'a> {
    pub fn new(store: &'a CsvStore) -> Self {
        Self { store }
    }

    /// Handle one input line.
    pub fn submit(&self, line: &str) -> Result<InteractiveOutcome> {
        let line = line.trim();
        if QUIT_COMMANDS.contains(&line.to_lowercase().as_str()) {
            return Ok(InteractiveOutcome::Quit);
        }
        if line.is_empty() {
            return Ok(InteractiveOutcome::Empty);
        }

        let entry = match parse_entry(line) {
            Ok(entry) => entry,
            Err(e) => return Ok(InteractiveOutcome::Invalid(e.to_string())),
        };

        let combined = entry.combined_text();
        let subject = examtag_extract::detect(&combined);
        debug!("Detected subject: {}", subject.title());

        if self.store.is_duplicate(&entry.question, subject) {
            info!("Duplicate question detected for {}, skipping save", subject);
            return Ok(InteractiveOutcome::Duplicate { subject });
        }

        let question_number = self.store.next_question_number(subject);
        let concepts = examtag_extract::extract(&combined, subject);

        let [option_a, option_b, option_c, option_d] = entry.options;
        let record = InteractiveRecord {
            question_number,
            question: entry.question,
            option_a,
            option_b,
            option_c,
            option_d,
            answer: entry.answer,
            concepts: concepts.clone(),
        };
        let path = self.store.append_interactive(subject, &record)?;

        info!("Saved as question {} in {}", question_number, path.display());
        Ok(InteractiveOutcome::Saved {
            subject,
            question_number,
            concepts,
            path,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use examtag_core::DataPaths;

    const MAGADHA: &str =
        r#""What was the capital of Magadha?","Patliputra","Taxila","Ujjain","Kashi",a"#;

    fn test_store() -> (CsvStore, tempfile::TempDir) {
        let dir = tempfile::tempdir().unwrap();
        let paths = DataPaths::new(dir.path(), dir.path()).unwrap();
        (CsvStore::new(paths), dir)
    }

    #[test]
    fn test_parse_entry() {
        let entry = parse_entry(MAGADHA).unwrap();
        assert_eq!(entry.question, "What was the capital of Magadha?");
        assert_eq!(entry.options[3], "Kashi");
        assert_eq!(entry.answer, "A");
        assert_eq!(
            entry.combined_text(),
            "What was the capital of Magadha? Patliputra Taxila Ujjain Kashi"
        );
    }

    #[test]
    fn test_parse_entry_quoted_commas() {
        let entry = parse_entry(r#""Solve x, given 2x = 4","1","2","3","4",B"#).unwrap();
        assert_eq!(entry.question, "Solve x, given 2x = 4");
        assert_eq!(entry.answer, "B");
    }

    #[test]
    fn test_parse_entry_errors() {
        assert!(matches!(
            parse_entry("Only,three,fields"),
            Err(Error::InvalidEntry(_))
        ));
        assert!(matches!(
            parse_entry("Q,a,b,c,d,E"),
            Err(Error::InvalidEntry(_))
        ));
    }

    #[test]
    fn test_session_commands() {
        let (store, _dir) = test_store();
        let session = InteractiveSession::new(&store);
        assert_eq!(session.submit("QUIT").unwrap(), InteractiveOutcome::Quit);
        assert_eq!(session.submit(" q ").unwrap(), InteractiveOutcome::Quit);
        assert_eq!(session.submit("   ").unwrap(), InteractiveOutcome::Empty);
        assert!(matches!(
            session.submit("no commas here").unwrap(),
            InteractiveOutcome::Invalid(_)
        ));
    }

    #[test]
    fn test_session_saves_then_detects_duplicate() {
        let (store, _dir) = test_store();
        let session = InteractiveSession::new(&store);
        let line = r#""Which Mauryan ruler issued the rock edicts?","Ashoka","Bindusara","Chandragupta","Kunala",A"#;

        match session.submit(line).unwrap() {
            InteractiveOutcome::Saved {
                subject,
                question_number,
                concepts,
                ..
            } => {
                assert_eq!(subject, Subject::AncientHistory);
                assert_eq!(question_number, 1);
                // "indus" fires inside "Bindusara".
                assert_eq!(
                    concepts,
                    "Indus Valley Civilization; Mauryan Empire; Ashokan Edicts; \
                     Gupta Period; Political History; Mauryan Inscriptions"
                );
            }
            other => panic!("unexpected outcome: {:?}", other),
        }

        assert_eq!(
            session.submit(line).unwrap(),
            InteractiveOutcome::Duplicate {
                subject: Subject::AncientHistory
            }
        );
    }

    #[test]
    fn test_session_substring_detection() {
        let (store, _dir) = test_store();
        let session = InteractiveSession::new(&store);

        // "tax" inside "Taxila" is the only subject keyword hit.
        match session.submit(MAGADHA).unwrap() {
            InteractiveOutcome::Saved { subject, path, .. } => {
                assert_eq!(subject, Subject::Economics);
                assert!(path.ends_with("output_concepts_economics.csv"));
            }
            other => panic!("unexpected outcome: {:?}", other),
        }
    }

    #[test]
    fn test_session_numbers_per_subject() {
        let (store, _dir) = test_store();
        let session = InteractiveSession::new(&store);

        session
            .submit(r#""Find the derivative of x^2","x","2x","x^2","2",B"#)
            .unwrap();
        let second = session
            .submit(r#""State the Pythagoras theorem for a right triangle","a","b","c","d",C"#)
            .unwrap();

        match second {
            InteractiveOutcome::Saved {
                subject,
                question_number,
                ..
            } => {
                assert_eq!(subject, Subject::Math);
                assert_eq!(question_number, 2);
            }
            other => panic!("unexpected outcome: {:?}", other),
        }
    }
}
