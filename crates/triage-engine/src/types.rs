//! Engine-specific error and configuration types.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while building or loading a knowledge base.
///
/// End-user input (symptom text, vitals strings) never produces these:
/// bad input degrades inside the relevant component. These errors are
/// configuration failures and are fatal at process start.
#[derive(Error, Debug)]
pub enum TriageError {
    /// I/O error reading a knowledge-base file.
    #[error("IO error reading knowledge base file: {0}")]
    Io(#[from] std::io::Error),

    /// CSV parsing error.
    #[error("CSV parsing error: {0}")]
    Csv(#[from] csv::Error),

    /// The synonym map contains no entries.
    #[error("Synonym map is empty; the engine cannot operate without a symptom vocabulary")]
    EmptySynonymMap,

    /// The disease profile list contains no entries.
    #[error("Disease profile list is empty; the engine cannot operate without a knowledge base")]
    EmptyDiseaseProfiles,

    /// A symptom token has no synonym phrases.
    #[error("Symptom '{token}' has no synonym phrases")]
    EmptySynonyms {
        /// The token with no phrases.
        token: String,
    },

    /// A disease profile has an empty required-symptom set.
    #[error("Disease profile '{disease}' has no required symptoms")]
    EmptyProfile {
        /// The disease with an empty profile.
        disease: String,
    },

    /// A disease profile references a token absent from the vocabulary.
    #[error("Disease profile '{disease}' references unknown symptom '{token}'")]
    UnknownSymptom {
        /// The disease whose profile is invalid.
        disease: String,
        /// The unknown token.
        token: String,
    },

    /// The same disease name appears twice in the profile list.
    #[error("Duplicate disease profile: {disease}")]
    DuplicateDisease {
        /// The duplicated disease name.
        disease: String,
    },

    /// File not found.
    #[error("File not found: {path}")]
    FileNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Directory not found.
    #[error("Directory not found: {path}")]
    DirectoryNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Required knowledge-base file missing from the directory.
    #[error("Required knowledge base file not found: {file_type} in {directory}")]
    RequiredFileMissing {
        /// The type of file that was missing.
        file_type: String,
        /// The directory that was searched.
        directory: String,
    },

    /// Unexpected column name in a knowledge-base CSV header.
    #[error("Unexpected column '{found}' at position {position}, expected '{expected}'")]
    UnexpectedColumn {
        /// The column position.
        position: usize,
        /// Expected column name.
        expected: String,
        /// Found column name.
        found: String,
    },

    /// Invalid header - column count mismatch.
    #[error("Invalid header: expected {expected} columns, found {found}")]
    InvalidHeader {
        /// Expected column count.
        expected: usize,
        /// Found column count.
        found: usize,
    },
}

/// Result type for knowledge-base operations.
pub type TriageResult<T> = Result<T, TriageError>;

/// Configuration for disease ranking.
#[derive(Debug, Clone)]
pub struct RankConfig {
    /// Minimum symptom overlap a profile needs to appear in the result.
    pub min_score: usize,
}

impl Default for RankConfig {
    fn default() -> Self {
        Self { min_score: 1 }
    }
}

impl RankConfig {
    /// Creates a config with the given minimum overlap score.
    pub fn with_min_score(min_score: usize) -> Self {
        Self { min_score }
    }
}

/// Discovered knowledge-base files in a directory.
#[derive(Debug, Clone, Default)]
pub struct KbFiles {
    /// Path to the synonym map file (`synonyms.csv`).
    pub synonyms_file: Option<PathBuf>,
    /// Path to the disease profile file (`diseases.csv`).
    pub diseases_file: Option<PathBuf>,
    /// Path to the specialist mapping file (`specialists.csv`), optional.
    pub specialists_file: Option<PathBuf>,
}

impl KbFiles {
    /// Creates a new empty KbFiles.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if all required files (synonyms, diseases) are present.
    ///
    /// The specialist mapping is optional: without it every disease falls
    /// back to the General Physician recommendation.
    pub fn has_required_files(&self) -> bool {
        self.synonyms_file.is_some() && self.diseases_file.is_some()
    }

    /// Returns a list of missing required files.
    pub fn missing_files(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.synonyms_file.is_none() {
            missing.push("synonyms.csv");
        }
        if self.diseases_file.is_none() {
            missing.push("diseases.csv");
        }
        missing
    }
}
