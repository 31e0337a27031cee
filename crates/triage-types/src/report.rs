//! Triage result types.
//!
//! This module provides the derived value types the engine produces:
//! ranked disease matches, the vitals assessment, the specialist
//! recommendation, the follow-up plan, and the `TriageReport` record that
//! bundles them for the storage/report/UI collaborators.

use std::collections::BTreeSet;

use chrono::NaiveDate;

use crate::{RiskTier, SymptomToken};

/// Fallback speciality used whenever no disease-specific mapping exists.
pub const GENERAL_PHYSICIAN: &str = "General Physician";

/// A disease candidate ranked against an extracted symptom set.
///
/// # Examples
///
/// ```
/// use std::collections::BTreeSet;
/// use triage_types::RankedMatch;
///
/// let m = RankedMatch {
///     disease: "Viral Fever".to_string(),
///     score: 3,
///     coverage: 0.6,
///     matched: BTreeSet::from(["fever".to_string(), "chills".to_string()]),
/// };
/// assert!(m.coverage > 0.0 && m.coverage <= 1.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RankedMatch {
    /// Name of the candidate disease.
    pub disease: String,
    /// Number of profile symptoms present in the input set.
    pub score: usize,
    /// Fraction of the profile's required symptoms that matched, in (0, 1].
    pub coverage: f64,
    /// The tokens that matched the profile.
    pub matched: BTreeSet<SymptomToken>,
}

/// Result of scoring a set of vital-sign readings.
///
/// `issues` holds one human-readable line per vital sign evaluated, in the
/// fixed order blood pressure, heart rate, temperature.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VitalsAssessment {
    /// Risk tier derived from the accumulated vitals points.
    pub tier: RiskTier,
    /// One explanatory line per vital sign, in evaluation order.
    pub issues: Vec<String>,
}

/// Recommended specialities for the top-ranked disease.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SpecialistRecommendation {
    /// The top-ranked disease, or `None` when no disease was identified.
    pub disease: Option<String>,
    /// Specialities to consult, most relevant first.
    pub specialities: Vec<String>,
}

impl SpecialistRecommendation {
    /// The fallback recommendation when no disease is identified or mapped.
    pub fn general_physician() -> Self {
        Self {
            disease: None,
            specialities: vec![GENERAL_PHYSICIAN.to_string()],
        }
    }
}

/// A suggested follow-up visit.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FollowupPlan {
    /// Suggested follow-up date.
    pub date: NaiveDate,
    /// Advisory message matching the urgency of the risk tier.
    pub message: String,
}

/// The complete structured triage result.
///
/// This is the record handed verbatim to the storage, report, and UI
/// collaborators. The vitals-based tier (`vitals.tier`) and the
/// symptom-flag-based tier (`symptom_risk`) are independent signals and are
/// deliberately kept as separate fields.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TriageReport {
    /// Canonical symptoms extracted from the free-text description.
    pub symptoms: BTreeSet<SymptomToken>,
    /// Vitals-based risk assessment with per-vital issue lines.
    pub vitals: VitalsAssessment,
    /// Risk tier estimated from symptom flags alone.
    pub symptom_risk: RiskTier,
    /// Candidate diseases, best match first.
    pub ranked: Vec<RankedMatch>,
    /// Speciality referral for the top-ranked disease.
    pub recommendation: SpecialistRecommendation,
    /// Suggested follow-up date and message, keyed by `symptom_risk`.
    pub followup: FollowupPlan,
    /// Static advisory strings keyed by symptoms and top disease.
    pub care_tips: Vec<String>,
    /// Explanations for extracted symptoms that have one.
    pub explanations: Vec<String>,
}
