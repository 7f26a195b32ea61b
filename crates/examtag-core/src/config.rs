//! Configuration and data directory management.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::Subject;

/// Paths to question inputs, concept outputs, and LLM settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataPaths {
    /// Directory holding the `<subject>.csv` question files.
    pub input_dir: PathBuf,
    /// Directory receiving `output_concepts_<subject>.csv`.
    pub output_dir: PathBuf,
    /// LLM configuration (`<input_dir>/llm-config.json`).
    pub llm_config_file: PathBuf,
}

impl DataPaths {
    /// Create data paths. Creates the output directory if needed.
    pub fn new(input_dir: impl AsRef<Path>, output_dir: impl AsRef<Path>) -> std::io::Result<Self> {
        let input_dir = input_dir.as_ref().to_path_buf();
        let paths = Self {
            output_dir: output_dir.as_ref().to_path_buf(),
            llm_config_file: input_dir.join("llm-config.json"),
            input_dir,
        };
        std::fs::create_dir_all(&paths.output_dir)?;
        Ok(paths)
    }

    /// Question file for a subject.
    pub fn question_file(&self, subject: Subject) -> PathBuf {
        self.input_dir.join(format!("{}.csv", subject.as_str()))
    }

    /// Concept output file for a subject.
    pub fn output_file(&self, subject: Subject) -> PathBuf {
        self.output_dir
            .join(format!("output_concepts_{}.csv", subject.as_str()))
    }
}

/// Top-level examtag configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExamtagConfig {
    /// Data directory paths.
    pub data_paths: DataPaths,
    /// Timeout for a single LLM request, in seconds.
    pub llm_timeout_secs: u64,
}

impl ExamtagConfig {
    /// Create configuration from environment and defaults.
    ///
    /// `EXAMTAG_OUTPUT_DIR` overrides the output directory, which otherwise
    /// defaults to the current directory.
    pub fn from_env(data_dir: impl AsRef<Path>) -> std::io::Result<Self> {
        let output_dir = std::env::var("EXAMTAG_OUTPUT_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("."));
        Self::with_output_dir(data_dir, output_dir)
    }

    /// Create configuration with explicit directories.
    pub fn with_output_dir(
        data_dir: impl AsRef<Path>,
        output_dir: impl AsRef<Path>,
    ) -> std::io::Result<Self> {
        let llm_timeout_secs = std::env::var("EXAMTAG_LLM_TIMEOUT")
            .ok()
            .and_then(|t| t.parse().ok())
            .unwrap_or(30);

        Ok(Self {
            data_paths: DataPaths::new(data_dir, output_dir)?,
            llm_timeout_secs,
        })
    }
}
