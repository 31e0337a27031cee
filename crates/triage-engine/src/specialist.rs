//! Specialist selector.
//!
//! Maps the top-ranked disease to its speciality labels via the static
//! disease-to-speciality table.

use triage_types::{RankedMatch, SpecialistRecommendation};

use crate::kb::KnowledgeBase;

impl KnowledgeBase {
    /// Recommends specialities for the top-ranked disease.
    ///
    /// Only the first entry of `ranked` is considered; ties at the top are
    /// already broken by the ranker's stable order. An empty ranking or a
    /// disease without a mapping falls back to the General Physician
    /// recommendation.
    ///
    /// # Examples
    ///
    /// ```
    /// use triage_engine::KnowledgeBase;
    /// use triage_types::GENERAL_PHYSICIAN;
    ///
    /// let kb = KnowledgeBase::builtin();
    /// let rec = kb.recommend_specialists(&[]);
    /// assert_eq!(rec.disease, None);
    /// assert_eq!(rec.specialities, vec![GENERAL_PHYSICIAN.to_string()]);
    /// ```
    pub fn recommend_specialists(&self, ranked: &[RankedMatch]) -> SpecialistRecommendation {
        let Some(top) = ranked.first() else {
            return SpecialistRecommendation::general_physician();
        };

        let specialities = match self.specialities_for(&top.disease) {
            Some(specs) => specs.to_vec(),
            None => SpecialistRecommendation::general_physician().specialities,
        };

        SpecialistRecommendation {
            disease: Some(top.disease.clone()),
            specialities,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use triage_types::GENERAL_PHYSICIAN;

    use super::*;

    fn ranked(disease: &str) -> Vec<RankedMatch> {
        vec![RankedMatch {
            disease: disease.to_string(),
            score: 2,
            coverage: 0.5,
            matched: BTreeSet::new(),
        }]
    }

    #[test]
    fn test_empty_ranking_falls_back() {
        let rec = KnowledgeBase::builtin().recommend_specialists(&[]);
        assert_eq!(rec, SpecialistRecommendation::general_physician());
    }

    #[test]
    fn test_mapped_disease() {
        let rec = KnowledgeBase::builtin().recommend_specialists(&ranked("Hypertension (High BP)"));
        assert_eq!(rec.disease.as_deref(), Some("Hypertension (High BP)"));
        assert_eq!(
            rec.specialities,
            vec!["Cardiologist".to_string(), GENERAL_PHYSICIAN.to_string()]
        );
    }

    #[test]
    fn test_unmapped_disease_falls_back_but_keeps_name() {
        let rec = KnowledgeBase::builtin().recommend_specialists(&ranked("Martian Flu"));
        assert_eq!(rec.disease.as_deref(), Some("Martian Flu"));
        assert_eq!(rec.specialities, vec![GENERAL_PHYSICIAN.to_string()]);
    }

    #[test]
    fn test_only_top_match_considered() {
        let mut matches = ranked("Stomach Infection");
        matches.extend(ranked("Hypertension (High BP)"));
        let rec = KnowledgeBase::builtin().recommend_specialists(&matches);
        assert_eq!(rec.disease.as_deref(), Some("Stomach Infection"));
        assert_eq!(rec.specialities, vec!["Gastroenterologist".to_string()]);
    }
}
