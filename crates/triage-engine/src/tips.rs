//! Care-tip generator.
//!
//! Produces static, non-prescriptive advisory strings keyed by detected
//! symptoms and the top-ranked disease name. The check order is fixed:
//! symptom-keyed tips first, disease-keyed tips second, and a generic
//! fallback pair only when both produced nothing.

use std::collections::BTreeSet;

use triage_types::{tokens, SymptomToken};

/// Generates care tips for the given symptoms and optional top disease.
///
/// Disease-keyed tips match by substring on the disease name, so e.g.
/// both "Stomach Infection" and "Acid Reflux / Gastritis" trigger the
/// food-safety advice.
///
/// # Examples
///
/// ```
/// use std::collections::BTreeSet;
/// use triage_engine::care_tips;
///
/// let symptoms = BTreeSet::from(["fever".to_string()]);
/// let tips = care_tips(&symptoms, None);
/// assert!(tips[0].contains("water"));
///
/// // Nothing detected: generic fallback pair.
/// let tips = care_tips(&BTreeSet::new(), None);
/// assert_eq!(tips.len(), 2);
/// ```
pub fn care_tips(symptoms: &BTreeSet<SymptomToken>, top_disease: Option<&str>) -> Vec<String> {
    let mut tips = Vec::new();

    if symptoms.contains(tokens::FEVER) {
        tips.push("Drink plenty of water and rest in a cool, comfortable room.".to_string());
        tips.push("Use a clean cloth dipped in cool water on the forehead if needed.".to_string());
    }

    if symptoms.contains(tokens::COUGH) {
        tips.push("Avoid cold drinks and ice cream.".to_string());
        tips.push("You may try warm water and steam inhalation.".to_string());
    }

    if symptoms.contains(tokens::VOMITING) || symptoms.contains(tokens::DIARRHEA) {
        tips.push("Take frequent small sips of ORS or electrolyte solution.".to_string());
        tips.push("Avoid oily, spicy and outside food.".to_string());
    }

    if symptoms.contains(tokens::HEADACHE) {
        tips.push("Rest in a quiet, dark room and avoid screen time.".to_string());
    }

    if symptoms.contains(tokens::CHEST_PAIN) || symptoms.contains(tokens::BREATHLESSNESS) {
        tips.push("Avoid physical exertion and sit upright.".to_string());
        tips.push("Seek urgent medical attention if symptoms worsen.".to_string());
    }

    if let Some(disease) = top_disease {
        if disease.contains("Hypertension") {
            tips.push("Reduce salt intake and avoid stress where possible.".to_string());
        }
        if disease.contains("Stomach Infection") || disease.contains("Gastritis") {
            tips.push("Avoid street food and drink only clean, safe water.".to_string());
        }
        if disease.contains("Allergic") {
            tips.push(
                "Try to identify and avoid known triggers like dust or certain foods.".to_string(),
            );
        }
    }

    if tips.is_empty() {
        tips.push("Maintain good hydration and take adequate rest.".to_string());
        tips.push("If symptoms worsen or do not improve, consult a doctor.".to_string());
    }

    tips
}
