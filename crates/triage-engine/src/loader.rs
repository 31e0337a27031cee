//! Knowledge-base file discovery and loading.
//!
//! A knowledge base can be loaded from a directory of CSV files instead of
//! the built-in tables, so deployments can swap the vocabulary and disease
//! profiles without recompiling:
//!
//! - `synonyms.csv` with header `token,phrase` (one phrase per row),
//! - `diseases.csv` with header `disease,symptom` (one symptom per row),
//! - `specialists.csv` with header `disease,speciality` (optional).
//!
//! Row order defines declaration order, which the ranker uses as its
//! stable tie-break. The loaded tables pass the same validation as the
//! built-in ones; a directory that fails validation is rejected at load
//! time.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use csv::{Reader, ReaderBuilder};

use crate::kb::{DiseaseProfile, KnowledgeBase, SymptomSynonyms};
use crate::types::{KbFiles, TriageError, TriageResult};

const SYNONYMS_FILE: &str = "synonyms.csv";
const DISEASES_FILE: &str = "diseases.csv";
const SPECIALISTS_FILE: &str = "specialists.csv";

const SYNONYM_COLUMNS: &[&str] = &["token", "phrase"];
const DISEASE_COLUMNS: &[&str] = &["disease", "symptom"];
const SPECIALIST_COLUMNS: &[&str] = &["disease", "speciality"];

/// Discovers knowledge-base files in a directory.
///
/// # Errors
///
/// Returns an error if the directory does not exist or a required file
/// (`synonyms.csv`, `diseases.csv`) is missing.
pub fn discover_kb_files<P: AsRef<Path>>(path: P) -> TriageResult<KbFiles> {
    let path = path.as_ref();

    if !path.is_dir() {
        return Err(TriageError::DirectoryNotFound {
            path: path.display().to_string(),
        });
    }

    let mut files = KbFiles::new();

    for entry in fs::read_dir(path)? {
        let entry = entry?;
        let filename = entry.file_name();

        match filename.to_string_lossy().as_ref() {
            SYNONYMS_FILE => files.synonyms_file = Some(entry.path()),
            DISEASES_FILE => files.diseases_file = Some(entry.path()),
            SPECIALISTS_FILE => files.specialists_file = Some(entry.path()),
            _ => {}
        }
    }

    if !files.has_required_files() {
        return Err(TriageError::RequiredFileMissing {
            file_type: files.missing_files().join(", "),
            directory: path.display().to_string(),
        });
    }

    Ok(files)
}

/// Loads and validates a knowledge base from a directory of CSV files.
///
/// # Example
///
/// ```ignore
/// use triage_engine::load_kb;
///
/// let kb = load_kb("/etc/triage/kb")?;
/// println!("loaded {} diseases", kb.disease_count());
/// ```
pub fn load_kb<P: AsRef<Path>>(path: P) -> TriageResult<KnowledgeBase> {
    let files = discover_kb_files(path)?;

    // has_required_files above guarantees both paths are present.
    let synonyms = files
        .synonyms_file
        .as_deref()
        .map(load_synonyms)
        .transpose()?
        .unwrap_or_default();
    let profiles = files
        .diseases_file
        .as_deref()
        .map(load_profiles)
        .transpose()?
        .unwrap_or_default();

    let specialists = match files.specialists_file.as_deref() {
        Some(path) => load_specialists(path)?,
        // Without a mapping file every disease falls back to the
        // General Physician recommendation.
        None => HashMap::new(),
    };

    KnowledgeBase::new(synonyms, profiles, specialists)
}

/// Loads the synonym map, grouping phrases by token in first-seen order.
fn load_synonyms(path: &Path) -> TriageResult<Vec<SymptomSynonyms>> {
    let mut reader = open_csv(path, SYNONYM_COLUMNS)?;

    let mut order: Vec<SymptomSynonyms> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for record in reader.records() {
        let record = record?;
        let token = record.get(0).unwrap_or("").trim().to_lowercase();
        let phrase = record.get(1).unwrap_or("").trim().to_lowercase();
        if token.is_empty() || phrase.is_empty() {
            continue;
        }

        let slot = *index.entry(token.clone()).or_insert_with(|| {
            order.push(SymptomSynonyms {
                token,
                phrases: Vec::new(),
            });
            order.len() - 1
        });
        if !order[slot].phrases.contains(&phrase) {
            order[slot].phrases.push(phrase);
        }
    }

    Ok(order)
}

/// Loads disease profiles, grouping symptoms by disease in first-seen order.
fn load_profiles(path: &Path) -> TriageResult<Vec<DiseaseProfile>> {
    let mut reader = open_csv(path, DISEASE_COLUMNS)?;

    let mut order: Vec<DiseaseProfile> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for record in reader.records() {
        let record = record?;
        let disease = record.get(0).unwrap_or("").trim().to_string();
        let symptom = record.get(1).unwrap_or("").trim().to_lowercase();
        if disease.is_empty() || symptom.is_empty() {
            continue;
        }

        let slot = *index.entry(disease.clone()).or_insert_with(|| {
            order.push(DiseaseProfile {
                name: disease,
                symptoms: Default::default(),
            });
            order.len() - 1
        });
        order[slot].symptoms.insert(symptom);
    }

    Ok(order)
}

/// Loads the disease-to-speciality mapping.
fn load_specialists(path: &Path) -> TriageResult<HashMap<String, Vec<String>>> {
    let mut reader = open_csv(path, SPECIALIST_COLUMNS)?;

    let mut specialists: HashMap<String, Vec<String>> = HashMap::new();

    for record in reader.records() {
        let record = record?;
        let disease = record.get(0).unwrap_or("").trim().to_string();
        let speciality = record.get(1).unwrap_or("").trim().to_string();
        if disease.is_empty() || speciality.is_empty() {
            continue;
        }

        let entry = specialists.entry(disease).or_default();
        if !entry.contains(&speciality) {
            entry.push(speciality);
        }
    }

    Ok(specialists)
}

/// Opens a CSV file and validates its header columns.
fn open_csv(path: &Path, expected: &[&str]) -> TriageResult<Reader<fs::File>> {
    if !path.exists() {
        return Err(TriageError::FileNotFound {
            path: path.display().to_string(),
        });
    }

    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(false)
        .trim(csv::Trim::All)
        .from_path(path)?;

    validate_headers(&mut reader, expected)?;
    Ok(reader)
}

/// Validates that the file has the expected column headers.
fn validate_headers(reader: &mut Reader<fs::File>, expected: &[&str]) -> TriageResult<()> {
    let headers = reader.headers()?;

    if headers.len() < expected.len() {
        return Err(TriageError::InvalidHeader {
            expected: expected.len(),
            found: headers.len(),
        });
    }

    for (i, expected_col) in expected.iter().enumerate() {
        let found = headers.get(i).unwrap_or("");
        // Handle UTF-8 BOM at start of file
        let found = found.trim_start_matches('\u{feff}');
        if found != *expected_col {
            return Err(TriageError::UnexpectedColumn {
                position: i,
                expected: expected_col.to_string(),
                found: found.to_string(),
            });
        }
    }

    Ok(())
}
