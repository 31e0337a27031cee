//! Risk tier classification.
//!
//! This module provides the `RiskTier` enum used by both risk signals the
//! engine produces: the vitals-based tier and the symptom-flag-based tier.
//! The two signals are computed independently and are never merged.

/// A discrete risk tier, totally ordered by severity.
///
/// # Examples
///
/// ```
/// use triage_types::RiskTier;
///
/// assert!(RiskTier::High > RiskTier::Moderate);
/// assert!(RiskTier::Moderate > RiskTier::Low);
/// assert_eq!(RiskTier::from_label("High"), Some(RiskTier::High));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RiskTier {
    /// Routine risk; no concerning findings.
    Low,
    /// Elevated risk; worth monitoring.
    Moderate,
    /// High risk; prompt attention recommended.
    High,
}

impl RiskTier {
    /// Returns the human-readable label for this tier.
    pub fn label(self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Moderate => "Moderate",
            Self::High => "High",
        }
    }

    /// Creates a RiskTier from its human-readable label.
    ///
    /// Returns `None` if the label doesn't match a known tier.
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "Low" => Some(Self::Low),
            "Moderate" => Some(Self::Moderate),
            "High" => Some(Self::High),
            _ => None,
        }
    }
}

impl std::fmt::Display for RiskTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tier_ordering() {
        assert!(RiskTier::Low < RiskTier::Moderate);
        assert!(RiskTier::Moderate < RiskTier::High);
        assert_eq!(
            [RiskTier::High, RiskTier::Low, RiskTier::Moderate]
                .iter()
                .max(),
            Some(&RiskTier::High)
        );
    }

    #[test]
    fn test_label_conversion() {
        assert_eq!(RiskTier::Low.label(), "Low");
        assert_eq!(RiskTier::from_label("Moderate"), Some(RiskTier::Moderate));
        assert_eq!(RiskTier::from_label("severe"), None);
    }

    #[test]
    fn test_display_matches_label() {
        assert_eq!(RiskTier::High.to_string(), "High");
    }
}
