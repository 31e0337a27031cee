//! Disease ranker.
//!
//! Scores an extracted symptom set against every disease profile by set
//! overlap and returns the candidates ordered by match quality.

use std::collections::BTreeSet;

use triage_types::{RankedMatch, SymptomToken};

use crate::kb::KnowledgeBase;
use crate::types::RankConfig;

impl KnowledgeBase {
    /// Ranks diseases by overlap with the given symptom set.
    ///
    /// For every profile, `score` is the number of its required symptoms
    /// present in the input and `coverage` is that count divided by the
    /// profile size. Profiles below `config.min_score` are excluded. The
    /// result is sorted by score descending, then coverage descending;
    /// exact ties keep knowledge-base declaration order (the sort is
    /// stable). An empty input set yields an empty result, never an error.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::collections::BTreeSet;
    /// use triage_engine::{KnowledgeBase, RankConfig};
    ///
    /// let kb = KnowledgeBase::builtin();
    /// let symptoms: BTreeSet<String> = ["fever", "chills", "body pain"]
    ///     .iter()
    ///     .map(|s| s.to_string())
    ///     .collect();
    ///
    /// let ranked = kb.rank_diseases(&symptoms, &RankConfig::default());
    /// assert_eq!(ranked[0].score, 3);
    /// ```
    pub fn rank_diseases(
        &self,
        symptoms: &BTreeSet<SymptomToken>,
        config: &RankConfig,
    ) -> Vec<RankedMatch> {
        let mut matches: Vec<RankedMatch> = self
            .profiles()
            .iter()
            .filter_map(|profile| {
                let matched: BTreeSet<SymptomToken> = profile
                    .symptoms
                    .intersection(symptoms)
                    .cloned()
                    .collect();
                let score = matched.len();

                if score >= config.min_score.max(1) {
                    Some(RankedMatch {
                        disease: profile.name.clone(),
                        score,
                        coverage: score as f64 / profile.symptoms.len() as f64,
                        matched,
                    })
                } else {
                    None
                }
            })
            .collect();

        // Stable sort keeps declaration order on exact ties.
        matches.sort_by(|a, b| {
            b.score
                .cmp(&a.score)
                .then(b.coverage.total_cmp(&a.coverage))
        });

        matches
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use crate::kb::{DiseaseProfile, SymptomSynonyms};

    use super::*;

    fn kb() -> KnowledgeBase {
        KnowledgeBase::builtin()
    }

    fn symptom_set(tokens: &[&str]) -> BTreeSet<SymptomToken> {
        tokens.iter().map(|t| t.to_string()).collect()
    }

    #[test]
    fn test_empty_set_ranks_nothing() {
        for min_score in 1..4 {
            let ranked = kb().rank_diseases(
                &BTreeSet::new(),
                &RankConfig::with_min_score(min_score),
            );
            assert!(ranked.is_empty());
        }
    }

    #[test]
    fn test_viral_fever_partial_match() {
        let ranked = kb().rank_diseases(
            &symptom_set(&["fever", "chills", "body pain"]),
            &RankConfig::default(),
        );

        let top = &ranked[0];
        assert_eq!(top.disease, "Viral Fever");
        assert_eq!(top.score, 3);
        assert!((top.coverage - 0.6).abs() < f64::EPSILON);
        assert_eq!(top.matched, symptom_set(&["fever", "chills", "body pain"]));
    }

    #[test]
    fn test_sorted_by_score_then_coverage() {
        let ranked = kb().rank_diseases(
            &symptom_set(&["fever", "chills", "body pain", "vomiting"]),
            &RankConfig::default(),
        );

        for pair in ranked.windows(2) {
            let (a, b) = (&pair[0], &pair[1]);
            assert!(
                a.score > b.score || (a.score == b.score && a.coverage >= b.coverage),
                "{} before {} violates ordering",
                a.disease,
                b.disease
            );
        }
    }

    #[test]
    fn test_exact_ties_keep_declaration_order() {
        let synonyms = vec![SymptomSynonyms {
            token: "fever".to_string(),
            phrases: vec!["fever".to_string()],
        }];
        let profiles = vec![
            DiseaseProfile {
                name: "First".to_string(),
                symptoms: symptom_set(&["fever"]),
            },
            DiseaseProfile {
                name: "Second".to_string(),
                symptoms: symptom_set(&["fever"]),
            },
        ];
        let kb = KnowledgeBase::new(synonyms, profiles, HashMap::new()).unwrap();

        let ranked = kb.rank_diseases(&symptom_set(&["fever"]), &RankConfig::default());
        assert_eq!(ranked[0].disease, "First");
        assert_eq!(ranked[1].disease, "Second");
    }

    #[test]
    fn test_min_score_filters() {
        let symptoms = symptom_set(&["fever"]);
        let ranked = kb().rank_diseases(&symptoms, &RankConfig::with_min_score(2));
        assert!(ranked.is_empty());

        let ranked = kb().rank_diseases(&symptoms, &RankConfig::default());
        assert!(!ranked.is_empty());
    }

    #[test]
    fn test_min_score_zero_behaves_as_one() {
        // min_score of 0 would admit every profile with no overlap at all;
        // clamp to 1 so zero-overlap profiles never appear.
        let ranked = kb().rank_diseases(
            &symptom_set(&["fever"]),
            &RankConfig::with_min_score(0),
        );
        assert!(ranked.iter().all(|m| m.score >= 1));
    }

    #[test]
    fn test_coverage_in_unit_interval() {
        let ranked = kb().rank_diseases(
            &symptom_set(&["fever", "headache", "vomiting", "rash", "cough"]),
            &RankConfig::default(),
        );
        assert!(!ranked.is_empty());
        for m in &ranked {
            assert!(m.coverage > 0.0 && m.coverage <= 1.0, "{}", m.disease);
        }
    }

    #[test]
    fn test_full_profile_round_trip() {
        // Feeding a profile's exact symptom set back in puts that profile
        // at full coverage with the maximum score in the result.
        let kb = kb();
        for profile in kb.profiles() {
            let ranked = kb.rank_diseases(&profile.symptoms, &RankConfig::default());
            let own = ranked
                .iter()
                .find(|m| m.disease == profile.name)
                .expect("profile must match itself");
            assert!((own.coverage - 1.0).abs() < f64::EPSILON);
            let max_score = ranked.iter().map(|m| m.score).max().unwrap();
            assert_eq!(own.score, max_score);
        }
    }
}
