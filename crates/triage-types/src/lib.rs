//! # triage-types
//!
//! Type definitions for the symptom triage engine.
//!
//! This crate provides the plain data types shared between the triage
//! engine and its service surface: canonical symptom tokens, risk tiers,
//! vital-sign readings and categories, and the structured result types
//! consumed by storage/report/UI collaborators.
//!
//! ## Features
//!
//! - `serde` (default): Enables serialization/deserialization support via
//!   serde for the collaborator-facing result types.
//!
//! ## Usage
//!
//! ```rust
//! use triage_types::{tokens, BloodPressureCategory, RiskTier, VitalsReading};
//!
//! let vitals = VitalsReading {
//!     systolic: 150,
//!     diastolic: 95,
//!     heart_rate: 110,
//!     temperature: 39.0,
//! };
//!
//! let bp = BloodPressureCategory::classify(vitals.systolic, vitals.diastolic);
//! assert_eq!(bp.risk_points(), 3);
//! assert_eq!(tokens::FEVER, "fever");
//! assert!(RiskTier::High > RiskTier::Low);
//! ```

#![warn(missing_docs)]

mod report;
mod risk;
mod symptom;
pub mod tokens;
mod vitals;

// Re-export all public types at crate root
pub use report::{
    FollowupPlan, RankedMatch, SpecialistRecommendation, TriageReport, VitalsAssessment,
    GENERAL_PHYSICIAN,
};
pub use risk::RiskTier;
pub use symptom::SymptomToken;
pub use vitals::{BloodPressureCategory, HeartRateCategory, TemperatureCategory, VitalsReading};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_types_are_exported() {
        // Verify all types are accessible from crate root
        let _token: SymptomToken = tokens::FEVER.to_string();
        let _tier = RiskTier::Moderate;
        let _bp = BloodPressureCategory::Normal;
        let _hr = HeartRateCategory::Normal;
        let _temp = TemperatureCategory::Normal;
        let _rec = SpecialistRecommendation::general_physician();
    }

    #[test]
    fn test_vocabulary_accessible() {
        assert!(tokens::ALL.contains(&tokens::BREATHLESSNESS));
        assert_eq!(tokens::HIGH_BP, "high bp");
    }
}
