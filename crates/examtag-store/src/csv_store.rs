//! CSV-backed question source and concept sink.
//!
//! Input: `<input_dir>/<subject>.csv`, any columns, `Question Number` and
//! `Question` looked up by header name.
//! Output: `<output_dir>/output_concepts_<subject>.csv`, overwritten by batch
//! runs and appended to by interactive entry.

use std::fs::OpenOptions;
use std::path::{Path, PathBuf};

use csv::{ReaderBuilder, StringRecord, WriterBuilder};
use examtag_core::{DataPaths, Error, Result, Subject};
use tracing::{debug, info, warn};

use crate::types::*;

const RESULT_HEADERS: [&str; 3] = [QUESTION_NUMBER_COLUMN, QUESTION_COLUMN, "Concepts"];

const INTERACTIVE_HEADERS: [&str; 8] = [
    QUESTION_NUMBER_COLUMN,
    QUESTION_COLUMN,
    "Option A",
    "Option B",
    "Option C",
    "Option D",
    "Ans.?",
    "Concepts",
];

/// File-per-subject CSV store.
#[derive(Debug, Clone)]
pub struct CsvStore {
    paths: DataPaths,
}

impl CsvStore {
    pub fn new(paths: DataPaths) -> Self {
        Self { paths }
    }

    /// Path of the subject's question file.
    pub fn question_file(&self, subject: Subject) -> PathBuf {
        self.paths.question_file(subject)
    }

    /// Path of the subject's concept output file.
    pub fn output_file(&self, subject: Subject) -> PathBuf {
        self.paths.output_file(subject)
    }

    /// Load all questions for a subject.
    ///
    /// Without a `Question Number` column, rows are numbered by their 1-based
    /// index; a blank cell in that column stays blank. Rows without question
    /// text are returned with an empty `question`.
    pub fn read_questions(&self, subject: Subject) -> Result<Vec<QuestionRow>> {
        let path = self.question_file(subject);
        if !path.exists() {
            return Err(Error::NotFound(format!(
                "Question file not found: {}",
                path.display()
            )));
        }

        let mut rdr = open_reader(&path)?;
        let headers = clean_headers(rdr.headers()?);
        let number_idx = column_index(&headers, QUESTION_NUMBER_COLUMN);
        let question_idx = column_index(&headers, QUESTION_COLUMN);
        if question_idx.is_none() {
            warn!("{} has no '{}' column", path.display(), QUESTION_COLUMN);
        }

        let mut rows = Vec::new();
        for (i, record) in rdr.records().enumerate() {
            let record = record?;
            let number = match number_idx {
                Some(idx) => record.get(idx).unwrap_or("").trim().to_string(),
                None => (i + 1).to_string(),
            };
            let question = question_idx
                .and_then(|idx| record.get(idx))
                .unwrap_or("")
                .trim()
                .to_string();
            rows.push(QuestionRow { number, question });
        }

        info!("Loaded {} questions from {}", rows.len(), path.display());
        Ok(rows)
    }

    /// Write batch results, replacing any existing output file.
    pub fn write_results(&self, subject: Subject, records: &[ConceptRecord]) -> Result<PathBuf> {
        let path = self.output_file(subject);
        let mut wtr = WriterBuilder::new().has_headers(false).from_path(&path)?;

        wtr.write_record(RESULT_HEADERS)?;
        for record in records {
            wtr.serialize(record)?;
        }
        wtr.flush()?;

        info!("Saved {} results to {}", records.len(), path.display());
        Ok(path)
    }

    /// Read back the subject's output file as batch records.
    ///
    /// Files started by interactive entry are read too; their option and
    /// answer columns are ignored.
    pub fn read_results(&self, subject: Subject) -> Result<Vec<ConceptRecord>> {
        let path = self.output_file(subject);
        if !path.exists() {
            return Err(Error::NotFound(format!(
                "Output file not found: {}",
                path.display()
            )));
        }

        let mut rdr = open_reader(&path)?;
        let mut records = Vec::new();
        for record in rdr.deserialize() {
            records.push(record?);
        }
        Ok(records)
    }

    /// Append one interactive record, writing the header when the file is new.
    ///
    /// A file written by a batch run keeps its three columns: the record's
    /// options and answer are dropped so every row matches the header.
    pub fn append_interactive(
        &self,
        subject: Subject,
        record: &InteractiveRecord,
    ) -> Result<PathBuf> {
        let path = self.output_file(subject);
        let has_content = std::fs::metadata(&path)
            .map(|m| m.len() > 0)
            .unwrap_or(false);

        let full_layout = !has_content || has_option_columns(&path)?;

        let file = OpenOptions::new().create(true).append(true).open(&path)?;
        let mut wtr = WriterBuilder::new().has_headers(false).from_writer(file);

        if !has_content {
            wtr.write_record(INTERACTIVE_HEADERS)?;
        }
        if full_layout {
            wtr.serialize(record)?;
        } else {
            debug!("{} has batch columns, writing concepts only", path.display());
            wtr.serialize(ConceptRecord {
                question_number: record.question_number.to_string(),
                question: record.question.clone(),
                concepts: record.concepts.clone(),
            })?;
        }
        wtr.flush()?;

        debug!(
            "Appended question {} to {}",
            record.question_number,
            path.display()
        );
        Ok(path)
    }

    /// Whether the subject's output already holds this question.
    ///
    /// Comparison ignores case and surrounding whitespace. A missing or
    /// unreadable file counts as "not a duplicate".
    pub fn is_duplicate(&self, question: &str, subject: Subject) -> bool {
        let path = self.output_file(subject);
        if !path.exists() {
            return false;
        }

        let needle = question.trim().to_lowercase();
        match self.scan_column(&path, QUESTION_COLUMN, |cell| {
            cell.trim().to_lowercase() == needle
        }) {
            Ok(found) => found,
            Err(e) => {
                warn!("Error checking for duplicates in {}: {}", path.display(), e);
                false
            }
        }
    }

    /// Number for the next interactive question: last row's number + 1.
    ///
    /// Starts at 1 when the file is missing, empty, or unreadable.
    pub fn next_question_number(&self, subject: Subject) -> u64 {
        let path = self.output_file(subject);
        if !path.exists() {
            return 1;
        }

        match last_question_number(&path) {
            Ok(Some(n)) => n + 1,
            Ok(None) => 1,
            Err(e) => {
                warn!("Error reading existing file {}: {}", path.display(), e);
                1
            }
        }
    }

    /// True if any cell of `column` satisfies `pred`.
    fn scan_column(
        &self,
        path: &Path,
        column: &str,
        pred: impl Fn(&str) -> bool,
    ) -> Result<bool> {
        let mut rdr = open_reader(path)?;
        let headers = clean_headers(rdr.headers()?);
        let Some(idx) = column_index(&headers, column) else {
            return Ok(false);
        };

        for record in rdr.records() {
            let record = record?;
            if record.get(idx).map(&pred).unwrap_or(false) {
                return Ok(true);
            }
        }
        Ok(false)
    }
}

fn open_reader(path: &Path) -> Result<csv::Reader<std::fs::File>> {
    Ok(ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(path)?)
}

fn clean_headers(headers: &StringRecord) -> Vec<String> {
    headers
        .iter()
        .map(|h| h.trim_start_matches('\u{feff}').trim().to_string())
        .collect()
}

fn column_index(headers: &[String], name: &str) -> Option<usize> {
    headers.iter().position(|h| h == name)
}

/// Whether the file's header carries the interactive option columns.
fn has_option_columns(path: &Path) -> Result<bool> {
    let mut rdr = open_reader(path)?;
    let headers = clean_headers(rdr.headers()?);
    Ok(column_index(&headers, INTERACTIVE_HEADERS[2]).is_some())
}

fn last_question_number(path: &Path) -> Result<Option<u64>> {
    let mut rdr = open_reader(path)?;
    let headers = clean_headers(rdr.headers()?);
    let idx = column_index(&headers, QUESTION_NUMBER_COLUMN).ok_or_else(|| {
        Error::InvalidEntry(format!("missing '{}' column", QUESTION_NUMBER_COLUMN))
    })?;

    let mut last = None;
    for record in rdr.records() {
        last = Some(record?);
    }

    match last {
        None => Ok(None),
        Some(record) => {
            let cell = record.get(idx).unwrap_or("").trim();
            cell.parse::<u64>().map(Some).map_err(|_| {
                Error::InvalidEntry(format!("invalid question number {:?}", cell))
            })
        }
    }
}
