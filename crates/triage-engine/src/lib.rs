//! # triage-engine
//!
//! Symptom-to-condition ranking and risk-scoring engine over a static
//! knowledge base.
//!
//! The engine normalizes free-text symptom descriptions into canonical
//! tokens, scores them against disease profiles by set overlap, derives
//! two independent risk tiers (one from vitals, one from symptom flags),
//! and attaches a specialist recommendation, a follow-up plan, and care
//! tips. Every operation is a pure function over the immutable
//! [`KnowledgeBase`]; there is no I/O and no shared mutable state, so one
//! engine can serve concurrent callers without locking.
//!
//! The knowledge base is either the built-in canonical one or loaded from
//! a directory of CSV files at process start; either way it is validated
//! once and never mutated afterwards.
//!
//! ## Usage
//!
//! ```rust
//! use triage_engine::TriageEngine;
//!
//! let engine = TriageEngine::with_builtin_kb();
//! let report = engine.analyze(
//!     "high fever with chills and headache",
//!     "120/80",
//!     "88",
//!     "38.5",
//! );
//!
//! assert_eq!(report.ranked[0].disease, "Viral Fever");
//! ```

#![warn(missing_docs)]

mod engine;
mod explain;
mod followup;
mod kb;
mod loader;
mod normalize;
mod rank;
mod specialist;
mod tips;
mod types;
mod vitals;

pub use engine::TriageEngine;
pub use explain::explain_symptoms;
pub use followup::{estimate_symptom_risk, plan_followup, plan_followup_from};
pub use kb::{DiseaseProfile, KnowledgeBase, SymptomSynonyms};
pub use loader::{discover_kb_files, load_kb};
pub use tips::care_tips;
pub use types::{KbFiles, RankConfig, TriageError, TriageResult};
pub use vitals::assess_vitals;
