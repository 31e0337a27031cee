//! Symptom explanations.
//!
//! Maps selected symptom tokens to a short educational explanation line.
//! Not every token has one; tokens without an entry are skipped.

use std::collections::BTreeSet;

use triage_types::{tokens, SymptomToken};

/// Explanation table for the tokens that carry one.
const EXPLANATIONS: &[(&str, &str)] = &[
    (tokens::FEVER, "Often indicates infection or viral illness."),
    (tokens::HIGH_BP, "Indicates hypertension. Monitor immediately."),
    (tokens::LOW_BP, "May indicate dehydration or weakness."),
    (tokens::VOMITING, "Common in gastritis or food poisoning."),
    (tokens::DIARRHEA, "Often caused by infection."),
    (tokens::HEADACHE, "Stress, migraine, or fever may cause this."),
    (tokens::BODY_PAIN, "Common with viral fever or fatigue."),
    (tokens::FATIGUE, "Can indicate infection or anemia."),
    (tokens::BREATHLESSNESS, "Could indicate asthma or heart issue."),
    (tokens::CHEST_PAIN, "Serious - check immediately if severe."),
];

/// Produces `"token: explanation"` lines for the extracted symptoms that
/// have an explanation, in table order.
///
/// # Examples
///
/// ```
/// use std::collections::BTreeSet;
/// use triage_engine::explain_symptoms;
///
/// let symptoms = BTreeSet::from(["fever".to_string(), "rash".to_string()]);
/// let lines = explain_symptoms(&symptoms);
/// assert_eq!(lines, vec!["fever: Often indicates infection or viral illness.".to_string()]);
/// ```
pub fn explain_symptoms(symptoms: &BTreeSet<SymptomToken>) -> Vec<String> {
    EXPLANATIONS
        .iter()
        .filter(|(token, _)| symptoms.contains(*token))
        .map(|(token, explanation)| format!("{token}: {explanation}"))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn symptom_set(tokens: &[&str]) -> BTreeSet<SymptomToken> {
        tokens.iter().map(|t| t.to_string()).collect()
    }

    #[test]
    fn test_known_tokens_explained_in_table_order() {
        let lines = explain_symptoms(&symptom_set(&["chest pain", "fever"]));
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("fever:"));
        assert!(lines[1].starts_with("chest pain:"));
    }

    #[test]
    fn test_tokens_without_entry_skipped() {
        let lines = explain_symptoms(&symptom_set(&["rash", "itching"]));
        assert!(lines.is_empty());
    }

    #[test]
    fn test_empty_input() {
        assert!(explain_symptoms(&BTreeSet::new()).is_empty());
    }
}
