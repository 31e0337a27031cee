//! In-memory triage knowledge base.
//!
//! Holds the three static tables the engine operates over: the symptom
//! synonym map, the disease profiles, and the disease-to-speciality
//! mapping. A `KnowledgeBase` is built once at process start, validated,
//! and never mutated afterwards; every engine operation is a pure function
//! over it.

use std::collections::{BTreeSet, HashMap};

use triage_types::{tokens, SymptomToken, GENERAL_PHYSICIAN};

use crate::types::{TriageError, TriageResult};

/// A symptom token together with the surface-form phrases that indicate it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SymptomSynonyms {
    /// The canonical token.
    pub token: SymptomToken,
    /// Phrases whose presence in lower-cased input indicates the token.
    pub phrases: Vec<String>,
}

/// A disease with its required symptom set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiseaseProfile {
    /// Disease name.
    pub name: String,
    /// Required symptoms; never empty in a validated knowledge base.
    pub symptoms: BTreeSet<SymptomToken>,
}

/// In-memory store for the triage knowledge base.
///
/// # Example
///
/// ```
/// use triage_engine::KnowledgeBase;
///
/// let kb = KnowledgeBase::builtin();
/// assert!(kb.disease_count() > 0);
/// assert!(kb.specialities_for("Stomach Infection").is_some());
/// ```
pub struct KnowledgeBase {
    /// Synonym map in declaration order.
    synonyms: Vec<SymptomSynonyms>,
    /// Disease profiles in declaration order; this order is the stable
    /// tie-break for ranking.
    profiles: Vec<DiseaseProfile>,
    /// Disease name to ordered speciality labels.
    specialists: HashMap<String, Vec<String>>,
}

impl std::fmt::Debug for KnowledgeBase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("KnowledgeBase")
            .field("symptoms", &self.synonyms.len())
            .field("diseases", &self.profiles.len())
            .field("specialist_mappings", &self.specialists.len())
            .finish()
    }
}

// Built-in symptom vocabulary with surface-form synonyms.
const BUILTIN_SYNONYMS: &[(&str, &[&str])] = &[
    (tokens::FEVER, &["fever", "high temperature", "temperature high"]),
    (tokens::COUGH, &["cough", "coughing"]),
    (tokens::COLD, &["cold", "common cold"]),
    (tokens::HEADACHE, &["headache", "head pain"]),
    (tokens::FATIGUE, &["fatigue", "tired", "tiredness", "exhausted"]),
    (tokens::VOMITING, &["vomit", "vomiting", "throwing up"]),
    (tokens::DIARRHEA, &["diarrhea", "loose motion", "loose motions"]),
    (tokens::BODY_PAIN, &["body pain", "body ache"]),
    (tokens::JOINT_PAIN, &["joint pain", "joint ache"]),
    (tokens::DIZZINESS, &["dizzy", "dizziness", "lightheaded"]),
    (tokens::RASH, &["rash", "rashes"]),
    (tokens::ITCHING, &["itching", "itchy"]),
    (tokens::SNEEZING, &["sneeze", "sneezing"]),
    (tokens::RUNNING_NOSE, &["runny nose", "running nose"]),
    (
        tokens::ABDOMINAL_PAIN,
        &["abdominal pain", "stomach pain", "belly pain"],
    ),
    (tokens::CONSTIPATION, &["constipation"]),
    (tokens::SWEATING, &["sweating", "excess sweat"]),
    (tokens::WEAKNESS, &["weakness", "weak"]),
    (tokens::HEARTBURN, &["heartburn", "acidity", "acid reflux"]),
    (tokens::CHILLS, &["chills", "shivering"]),
    (tokens::NAUSEA, &["nausea", "nauseous", "feeling sick"]),
    (
        tokens::LOSS_OF_APPETITE,
        &["loss of appetite", "not eating", "no appetite"],
    ),
    (
        tokens::HIGH_BP,
        &["high bp", "bp high", "high blood pressure", "hypertension"],
    ),
    (
        tokens::LOW_BP,
        &["low bp", "bp low", "low blood pressure", "hypotension"],
    ),
    (
        tokens::CHEST_PAIN,
        &["chest pain", "pain in chest", "chest discomfort"],
    ),
    (
        tokens::BREATHLESSNESS,
        &["breathlessness", "shortness of breath", "difficulty breathing"],
    ),
];

// Built-in disease profiles. Declaration order is the ranking tie-break.
const BUILTIN_PROFILES: &[(&str, &[&str])] = &[
    (
        "Common Cold",
        &[
            tokens::COLD,
            tokens::SNEEZING,
            tokens::RUNNING_NOSE,
            tokens::COUGH,
            tokens::HEADACHE,
        ],
    ),
    (
        "Viral Fever",
        &[
            tokens::FEVER,
            tokens::CHILLS,
            tokens::BODY_PAIN,
            tokens::HEADACHE,
            tokens::FATIGUE,
        ],
    ),
    (
        "Dengue (suspected)",
        &[
            tokens::FEVER,
            tokens::CHILLS,
            tokens::BODY_PAIN,
            tokens::VOMITING,
            tokens::RASH,
        ],
    ),
    (
        "Hypertension (High BP)",
        &[
            tokens::HIGH_BP,
            tokens::HEADACHE,
            tokens::DIZZINESS,
            tokens::CHEST_PAIN,
        ],
    ),
    (
        "Hypotension (Low BP)",
        &[
            tokens::LOW_BP,
            tokens::DIZZINESS,
            tokens::WEAKNESS,
            tokens::FATIGUE,
        ],
    ),
    (
        "Acid Reflux / Gastritis",
        &[
            tokens::HEARTBURN,
            tokens::ABDOMINAL_PAIN,
            tokens::VOMITING,
            tokens::NAUSEA,
        ],
    ),
    (
        "Asthma / Breathing Issue",
        &[tokens::BREATHLESSNESS, tokens::COUGH, tokens::CHEST_PAIN],
    ),
    (
        "Stomach Infection",
        &[
            tokens::VOMITING,
            tokens::DIARRHEA,
            tokens::ABDOMINAL_PAIN,
            tokens::FEVER,
        ],
    ),
    (
        "Allergic Reaction",
        &[
            tokens::RASH,
            tokens::ITCHING,
            tokens::SNEEZING,
            tokens::RUNNING_NOSE,
        ],
    ),
];

// Built-in disease to speciality mapping, keyed by canonical disease names.
const BUILTIN_SPECIALISTS: &[(&str, &[&str])] = &[
    ("Common Cold", &[GENERAL_PHYSICIAN]),
    ("Viral Fever", &[GENERAL_PHYSICIAN]),
    ("Dengue (suspected)", &[GENERAL_PHYSICIAN]),
    ("Hypertension (High BP)", &["Cardiologist", GENERAL_PHYSICIAN]),
    ("Hypotension (Low BP)", &[GENERAL_PHYSICIAN]),
    ("Acid Reflux / Gastritis", &["Gastroenterologist"]),
    (
        "Asthma / Breathing Issue",
        &["Pulmonologist", GENERAL_PHYSICIAN],
    ),
    ("Stomach Infection", &["Gastroenterologist"]),
    ("Allergic Reaction", &["Dermatologist"]),
];

impl KnowledgeBase {
    /// Creates a knowledge base from its three tables, validating the
    /// invariants the engine depends on.
    ///
    /// # Errors
    ///
    /// Returns an error if the synonym map or profile list is empty, a
    /// token has no phrases, a profile has no symptoms or references a
    /// token absent from the vocabulary, or a disease name is duplicated.
    pub fn new(
        synonyms: Vec<SymptomSynonyms>,
        profiles: Vec<DiseaseProfile>,
        specialists: HashMap<String, Vec<String>>,
    ) -> TriageResult<Self> {
        let kb = Self {
            synonyms,
            profiles,
            specialists,
        };
        kb.validate()?;
        Ok(kb)
    }

    /// Creates the built-in canonical knowledge base.
    ///
    /// The compiled-in tables satisfy `validate` by construction; the
    /// `builtin_kb_validates` unit test keeps that true.
    pub fn builtin() -> Self {
        let synonyms = BUILTIN_SYNONYMS
            .iter()
            .map(|(token, phrases)| SymptomSynonyms {
                token: (*token).to_string(),
                phrases: phrases.iter().map(|p| (*p).to_string()).collect(),
            })
            .collect();

        let profiles = BUILTIN_PROFILES
            .iter()
            .map(|(name, symptoms)| DiseaseProfile {
                name: (*name).to_string(),
                symptoms: symptoms.iter().map(|s| (*s).to_string()).collect(),
            })
            .collect();

        let specialists = BUILTIN_SPECIALISTS
            .iter()
            .map(|(disease, specs)| {
                (
                    (*disease).to_string(),
                    specs.iter().map(|s| (*s).to_string()).collect(),
                )
            })
            .collect();

        Self {
            synonyms,
            profiles,
            specialists,
        }
    }

    /// Checks the structural invariants of the knowledge base.
    pub fn validate(&self) -> TriageResult<()> {
        if self.synonyms.is_empty() {
            return Err(TriageError::EmptySynonymMap);
        }
        if self.profiles.is_empty() {
            return Err(TriageError::EmptyDiseaseProfiles);
        }

        for entry in &self.synonyms {
            if entry.phrases.is_empty() {
                return Err(TriageError::EmptySynonyms {
                    token: entry.token.clone(),
                });
            }
        }

        let vocabulary: BTreeSet<&str> =
            self.synonyms.iter().map(|s| s.token.as_str()).collect();

        let mut seen = BTreeSet::new();
        for profile in &self.profiles {
            if !seen.insert(profile.name.as_str()) {
                return Err(TriageError::DuplicateDisease {
                    disease: profile.name.clone(),
                });
            }
            if profile.symptoms.is_empty() {
                return Err(TriageError::EmptyProfile {
                    disease: profile.name.clone(),
                });
            }
            for symptom in &profile.symptoms {
                if !vocabulary.contains(symptom.as_str()) {
                    return Err(TriageError::UnknownSymptom {
                        disease: profile.name.clone(),
                        token: symptom.clone(),
                    });
                }
            }
        }

        Ok(())
    }

    /// The synonym map, in declaration order.
    pub fn synonyms(&self) -> &[SymptomSynonyms] {
        &self.synonyms
    }

    /// The disease profiles, in declaration order.
    pub fn profiles(&self) -> &[DiseaseProfile] {
        &self.profiles
    }

    /// Looks up the speciality labels mapped to a disease.
    ///
    /// Returns `None` when the disease has no mapping; callers fall back
    /// to the General Physician recommendation.
    pub fn specialities_for(&self, disease: &str) -> Option<&[String]> {
        self.specialists.get(disease).map(Vec::as_slice)
    }

    /// Number of tokens in the symptom vocabulary.
    pub fn symptom_count(&self) -> usize {
        self.synonyms.len()
    }

    /// Number of disease profiles.
    pub fn disease_count(&self) -> usize {
        self.profiles.len()
    }

    /// Number of disease-to-speciality mappings.
    pub fn specialist_mapping_count(&self) -> usize {
        self.specialists.len()
    }
}
