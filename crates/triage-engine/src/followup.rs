//! Follow-up planner.
//!
//! Estimates a risk tier from symptom flags alone and maps it to a
//! suggested follow-up date and advisory message. This tier is computed
//! independently of the vitals-based tier; collaborators receive both.

use std::collections::BTreeSet;

use chrono::{Days, Local, NaiveDate};
use triage_types::{tokens, FollowupPlan, RiskTier, SymptomToken};

/// Tokens whose presence alone marks high symptom risk.
const HIGH_FLAGS: &[&str] = &[tokens::CHEST_PAIN, tokens::BREATHLESSNESS, tokens::HIGH_BP];

/// Tokens whose presence marks moderate symptom risk.
const MODERATE_FLAGS: &[&str] = &[
    tokens::FEVER,
    tokens::VOMITING,
    tokens::DIARRHEA,
    tokens::LOW_BP,
    tokens::DIZZINESS,
];

/// Follow-up offset in days per tier.
const HIGH_OFFSET_DAYS: u64 = 1;
const MODERATE_OFFSET_DAYS: u64 = 3;
const LOW_OFFSET_DAYS: u64 = 7;

const HIGH_MESSAGE: &str = "Follow-up strongly recommended within 24 hours.";
const MODERATE_MESSAGE: &str = "Follow-up suggested in 2-3 days if symptoms persist.";
const LOW_MESSAGE: &str = "Routine follow-up after a week is sufficient if no worsening.";

/// Estimates a risk tier from symptom flags.
///
/// Any high flag (chest pain, breathlessness, high bp) makes the tier
/// High; otherwise any moderate flag (fever, vomiting, diarrhea, low bp,
/// dizziness) makes it Moderate; otherwise Low.
///
/// # Examples
///
/// ```
/// use std::collections::BTreeSet;
/// use triage_engine::estimate_symptom_risk;
/// use triage_types::RiskTier;
///
/// let symptoms = BTreeSet::from(["chest pain".to_string()]);
/// assert_eq!(estimate_symptom_risk(&symptoms), RiskTier::High);
/// ```
pub fn estimate_symptom_risk(symptoms: &BTreeSet<SymptomToken>) -> RiskTier {
    if HIGH_FLAGS.iter().any(|flag| symptoms.contains(*flag)) {
        RiskTier::High
    } else if MODERATE_FLAGS.iter().any(|flag| symptoms.contains(*flag)) {
        RiskTier::Moderate
    } else {
        RiskTier::Low
    }
}

/// Plans a follow-up relative to the given date.
///
/// High risk schedules one day out, moderate three days, low seven days,
/// each with a fixed advisory message.
pub fn plan_followup_from(symptom_risk: RiskTier, today: NaiveDate) -> FollowupPlan {
    let (offset_days, message) = match symptom_risk {
        RiskTier::High => (HIGH_OFFSET_DAYS, HIGH_MESSAGE),
        RiskTier::Moderate => (MODERATE_OFFSET_DAYS, MODERATE_MESSAGE),
        RiskTier::Low => (LOW_OFFSET_DAYS, LOW_MESSAGE),
    };

    FollowupPlan {
        // NaiveDate::MAX is centuries away; a 1-7 day offset cannot overflow.
        date: today.checked_add_days(Days::new(offset_days)).unwrap_or(today),
        message: message.to_string(),
    }
}

/// Plans a follow-up relative to the local date at call time.
pub fn plan_followup(symptom_risk: RiskTier) -> FollowupPlan {
    plan_followup_from(symptom_risk, Local::now().date_naive())
}
