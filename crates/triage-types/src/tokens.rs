//! Canonical symptom vocabulary.
//!
//! This module provides constants for every token in the fixed symptom
//! vocabulary. The set is closed: the normalizer only ever emits tokens
//! defined here, and every disease profile in the built-in knowledge base
//! references these constants.
//!
//! # Examples
//!
//! ```
//! use triage_types::tokens;
//!
//! assert_eq!(tokens::FEVER, "fever");
//! assert_eq!(tokens::HIGH_BP, "high bp");
//! assert!(tokens::ALL.contains(&tokens::CHEST_PAIN));
//! ```

// =============================================================================
// General / constitutional
// =============================================================================

/// Elevated body temperature.
pub const FEVER: &str = "fever";

/// Shivering or chills, commonly accompanying fever.
pub const CHILLS: &str = "chills";

/// Generalized muscle or body ache.
pub const BODY_PAIN: &str = "body pain";

/// Tiredness or exhaustion.
pub const FATIGUE: &str = "fatigue";

/// General weakness.
pub const WEAKNESS: &str = "weakness";

/// Excessive sweating.
pub const SWEATING: &str = "sweating";

/// Reduced desire to eat.
pub const LOSS_OF_APPETITE: &str = "loss of appetite";

// =============================================================================
// Head / neurological
// =============================================================================

/// Head pain of any kind.
pub const HEADACHE: &str = "headache";

/// Lightheadedness or vertigo.
pub const DIZZINESS: &str = "dizziness";

// =============================================================================
// Respiratory / ENT
// =============================================================================

/// Cough, dry or productive.
pub const COUGH: &str = "cough";

/// Common cold.
pub const COLD: &str = "cold";

/// Sneezing.
pub const SNEEZING: &str = "sneezing";

/// Nasal discharge.
pub const RUNNING_NOSE: &str = "running nose";

/// Shortness of breath or difficulty breathing.
pub const BREATHLESSNESS: &str = "breathlessness";

// =============================================================================
// Cardiovascular
// =============================================================================

/// Self-reported or measured high blood pressure.
pub const HIGH_BP: &str = "high bp";

/// Self-reported or measured low blood pressure.
pub const LOW_BP: &str = "low bp";

/// Pain or discomfort in the chest.
pub const CHEST_PAIN: &str = "chest pain";

// =============================================================================
// Digestive
// =============================================================================

/// Vomiting.
pub const VOMITING: &str = "vomiting";

/// Nausea without vomiting.
pub const NAUSEA: &str = "nausea";

/// Loose or frequent stools.
pub const DIARRHEA: &str = "diarrhea";

/// Pain in the abdomen or stomach.
pub const ABDOMINAL_PAIN: &str = "abdominal pain";

/// Acid reflux or burning sensation behind the sternum.
pub const HEARTBURN: &str = "heartburn";

/// Difficulty passing stools.
pub const CONSTIPATION: &str = "constipation";

// =============================================================================
// Skin / musculoskeletal
// =============================================================================

/// Skin rash.
pub const RASH: &str = "rash";

/// Itchy skin.
pub const ITCHING: &str = "itching";

/// Pain localized to joints.
pub const JOINT_PAIN: &str = "joint pain";

/// Every token in the canonical vocabulary, in declaration order.
pub const ALL: &[&str] = &[
    FEVER,
    CHILLS,
    BODY_PAIN,
    FATIGUE,
    WEAKNESS,
    SWEATING,
    LOSS_OF_APPETITE,
    HEADACHE,
    DIZZINESS,
    COUGH,
    COLD,
    SNEEZING,
    RUNNING_NOSE,
    BREATHLESSNESS,
    HIGH_BP,
    LOW_BP,
    CHEST_PAIN,
    VOMITING,
    NAUSEA,
    DIARRHEA,
    ABDOMINAL_PAIN,
    HEARTBURN,
    CONSTIPATION,
    RASH,
    ITCHING,
    JOINT_PAIN,
];
