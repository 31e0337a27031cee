//! Triage engine facade.
//!
//! Wires the pipeline together: normalize text, score vitals, rank
//! diseases, pick specialists, plan the follow-up, and collect care tips
//! into a single `TriageReport` for downstream collaborators.

use std::collections::BTreeSet;

use chrono::NaiveDate;
use triage_types::{SymptomToken, TriageReport};

use crate::explain::explain_symptoms;
use crate::followup::{estimate_symptom_risk, plan_followup, plan_followup_from};
use crate::kb::KnowledgeBase;
use crate::tips::care_tips;
use crate::types::RankConfig;
use crate::vitals::assess_vitals;

/// The triage engine: an immutable knowledge base plus the analysis
/// pipeline over it.
///
/// The engine holds no mutable state and performs no I/O; concurrent
/// callers can share one instance freely (e.g. behind an `Arc`).
///
/// # Example
///
/// ```
/// use triage_engine::TriageEngine;
/// use triage_types::RiskTier;
///
/// let engine = TriageEngine::with_builtin_kb();
/// let report = engine.analyze(
///     "fever with chills and body ache since yesterday",
///     "120/80",
///     "76",
///     "38.4",
/// );
///
/// assert_eq!(report.ranked[0].disease, "Viral Fever");
/// assert_eq!(report.symptom_risk, RiskTier::Moderate);
/// ```
#[derive(Debug)]
pub struct TriageEngine {
    kb: KnowledgeBase,
    rank_config: RankConfig,
}

impl TriageEngine {
    /// Creates an engine over the given knowledge base.
    pub fn new(kb: KnowledgeBase) -> Self {
        Self {
            kb,
            rank_config: RankConfig::default(),
        }
    }

    /// Creates an engine over the built-in canonical knowledge base.
    pub fn with_builtin_kb() -> Self {
        Self::new(KnowledgeBase::builtin())
    }

    /// Sets the ranking configuration.
    pub fn with_rank_config(mut self, rank_config: RankConfig) -> Self {
        self.rank_config = rank_config;
        self
    }

    /// The engine's knowledge base.
    pub fn kb(&self) -> &KnowledgeBase {
        &self.kb
    }

    /// Runs the full pipeline, planning the follow-up relative to the
    /// local date at call time.
    pub fn analyze(
        &self,
        symptom_text: &str,
        bp: &str,
        heart_rate: &str,
        temperature: &str,
    ) -> TriageReport {
        let symptoms = self.kb.extract_symptoms(symptom_text);
        let symptom_risk = estimate_symptom_risk(&symptoms);
        self.report(symptoms, symptom_risk, bp, heart_rate, temperature, None)
    }

    /// Runs the full pipeline with an explicit "today" for the follow-up
    /// date, keeping the result reproducible.
    pub fn analyze_at(
        &self,
        symptom_text: &str,
        bp: &str,
        heart_rate: &str,
        temperature: &str,
        today: NaiveDate,
    ) -> TriageReport {
        let symptoms = self.kb.extract_symptoms(symptom_text);
        let symptom_risk = estimate_symptom_risk(&symptoms);
        self.report(
            symptoms,
            symptom_risk,
            bp,
            heart_rate,
            temperature,
            Some(today),
        )
    }

    fn report(
        &self,
        symptoms: BTreeSet<SymptomToken>,
        symptom_risk: triage_types::RiskTier,
        bp: &str,
        heart_rate: &str,
        temperature: &str,
        today: Option<NaiveDate>,
    ) -> TriageReport {
        let vitals = assess_vitals(bp, heart_rate, temperature);
        let ranked = self.kb.rank_diseases(&symptoms, &self.rank_config);
        let recommendation = self.kb.recommend_specialists(&ranked);
        let followup = match today {
            Some(date) => plan_followup_from(symptom_risk, date),
            None => plan_followup(symptom_risk),
        };
        let care_tips = care_tips(&symptoms, recommendation.disease.as_deref());
        let explanations = explain_symptoms(&symptoms);

        TriageReport {
            symptoms,
            vitals,
            symptom_risk,
            ranked,
            recommendation,
            followup,
            care_tips,
            explanations,
        }
    }
}

#[cfg(test)]
mod tests {
    use triage_types::{RiskTier, GENERAL_PHYSICIAN};

    use super::*;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_full_pipeline() {
        let engine = TriageEngine::with_builtin_kb();
        let report = engine.analyze_at(
            "vomiting and loose motions with stomach pain and mild fever",
            "120/80",
            "95",
            "37.6",
            day(2026, 8, 30),
        );

        assert_eq!(report.symptoms.len(), 4);
        assert_eq!(report.ranked[0].disease, "Stomach Infection");
        assert!((report.ranked[0].coverage - 1.0).abs() < f64::EPSILON);
        assert_eq!(
            report.recommendation.specialities,
            vec!["Gastroenterologist".to_string()]
        );
        // Vomiting/diarrhea are moderate flags.
        assert_eq!(report.symptom_risk, RiskTier::Moderate);
        assert_eq!(report.followup.date, day(2026, 9, 2));
        assert!(report.care_tips.iter().any(|t| t.contains("ORS")));
        assert!(report
            .explanations
            .iter()
            .any(|line| line.starts_with("vomiting:")));
    }

    #[test]
    fn test_risk_signals_are_independent() {
        let engine = TriageEngine::with_builtin_kb();
        // Alarming vitals but harmless symptom text.
        let report = engine.analyze("mild headache", "180/110", "130", "39.5");

        assert_eq!(report.vitals.tier, RiskTier::High);
        assert_eq!(report.symptom_risk, RiskTier::Low);
    }

    #[test]
    fn test_no_symptoms_detected() {
        let engine = TriageEngine::with_builtin_kb();
        let report = engine.analyze_at("feeling fine", "120/80", "70", "36.5", day(2026, 8, 30));

        assert!(report.symptoms.is_empty());
        assert!(report.ranked.is_empty());
        assert_eq!(report.recommendation.disease, None);
        assert_eq!(
            report.recommendation.specialities,
            vec![GENERAL_PHYSICIAN.to_string()]
        );
        assert_eq!(report.symptom_risk, RiskTier::Low);
        assert_eq!(report.followup.date, day(2026, 9, 6));
        assert_eq!(report.care_tips.len(), 2);
    }

    #[test]
    fn test_deterministic_for_same_input() {
        let engine = TriageEngine::with_builtin_kb();
        let today = day(2026, 8, 30);
        let a = engine.analyze_at("fever and chills", "150/95", "88", "38.2", today);
        let b = engine.analyze_at("fever and chills", "150/95", "88", "38.2", today);
        assert_eq!(a, b);
    }

    #[test]
    fn test_report_serializes_for_storage() {
        // The storage collaborator persists the report verbatim; field
        // names and the two separate risk signals must survive the trip.
        let engine = TriageEngine::with_builtin_kb();
        let report = engine.analyze_at("fever", "120/80", "70", "36.5", day(2026, 8, 30));

        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["symptom_risk"], "Moderate");
        assert_eq!(json["vitals"]["tier"], "Low");
        assert_eq!(json["followup"]["date"], "2026-09-02");
        assert!(json["vitals"]["issues"].is_array());
    }

    #[test]
    fn test_custom_rank_config() {
        let engine =
            TriageEngine::with_builtin_kb().with_rank_config(RankConfig::with_min_score(3));
        let report = engine.analyze("fever and headache", "120/80", "70", "36.5");
        // Two-symptom overlap is below the configured minimum.
        assert!(report.ranked.is_empty());
    }
}
