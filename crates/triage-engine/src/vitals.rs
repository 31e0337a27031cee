//! Vitals risk scorer.
//!
//! Accumulates risk points over blood pressure, heart rate, and temperature
//! readings and maps the total to a `RiskTier`. Malformed input never fails
//! the scorer: each unparseable field contributes a one-point fallback
//! penalty and an explanatory issue line, and evaluation continues.
//!
//! Tier cutoffs: totals of at most 4 are Low, at most 7 Moderate, above
//! that High.

use triage_types::{
    BloodPressureCategory, HeartRateCategory, RiskTier, TemperatureCategory, VitalsAssessment,
};

/// Issue line appended when the blood pressure field cannot be parsed.
const INVALID_BP: &str = "Invalid BP format";
/// Issue line appended when the heart rate field cannot be parsed.
const INVALID_HEART_RATE: &str = "Invalid heart rate value";
/// Issue line appended when the temperature field cannot be parsed.
const INVALID_TEMPERATURE: &str = "Invalid temperature value";

/// Penalty points for a field that failed to parse.
const FALLBACK_POINTS: u8 = 1;

/// Highest point total still classified as low risk.
const LOW_MAX_POINTS: u8 = 4;
/// Highest point total still classified as moderate risk.
const MODERATE_MAX_POINTS: u8 = 7;

/// Scores raw vitals text into a risk tier plus issue lines.
///
/// Blood pressure is expected as `"systolic/diastolic"`; heart rate as an
/// integer; temperature as a decimal in Celsius. Fields are trimmed before
/// parsing. The issue list always holds exactly one line per vital sign,
/// in the order blood pressure, heart rate, temperature.
///
/// # Examples
///
/// ```
/// use triage_engine::assess_vitals;
/// use triage_types::RiskTier;
///
/// let assessment = assess_vitals("150/95", "110", "39.0");
/// assert_eq!(assessment.tier, RiskTier::High);
/// assert_eq!(assessment.issues.len(), 3);
///
/// // Malformed input degrades instead of failing.
/// let assessment = assess_vitals("bad", "70", "36.5");
/// assert_eq!(assessment.tier, RiskTier::Low);
/// assert!(assessment.issues.contains(&"Invalid BP format".to_string()));
/// ```
pub fn assess_vitals(bp: &str, heart_rate: &str, temperature: &str) -> VitalsAssessment {
    let mut issues = Vec::with_capacity(3);
    let mut points = 0u8;

    match parse_bp(bp) {
        Some((systolic, diastolic)) => {
            let category = BloodPressureCategory::classify(systolic, diastolic);
            issues.push(category.issue().to_string());
            points += category.risk_points();
        }
        None => {
            issues.push(INVALID_BP.to_string());
            points += FALLBACK_POINTS;
        }
    }

    match heart_rate.trim().parse::<u16>() {
        Ok(bpm) => {
            let category = HeartRateCategory::classify(bpm);
            issues.push(category.issue().to_string());
            points += category.risk_points();
        }
        Err(_) => {
            issues.push(INVALID_HEART_RATE.to_string());
            points += FALLBACK_POINTS;
        }
    }

    match temperature.trim().parse::<f64>() {
        Ok(celsius) => {
            let category = TemperatureCategory::classify(celsius);
            issues.push(category.issue().to_string());
            points += category.risk_points();
        }
        Err(_) => {
            issues.push(INVALID_TEMPERATURE.to_string());
            points += FALLBACK_POINTS;
        }
    }

    VitalsAssessment {
        tier: tier_from_points(points),
        issues,
    }
}

/// Parses a `"systolic/diastolic"` blood pressure string.
fn parse_bp(bp: &str) -> Option<(u16, u16)> {
    let (systolic, diastolic) = bp.split_once('/')?;
    let systolic = systolic.trim().parse().ok()?;
    let diastolic = diastolic.trim().parse().ok()?;
    Some((systolic, diastolic))
}

/// Maps an accumulated point total to a risk tier.
fn tier_from_points(points: u8) -> RiskTier {
    if points <= LOW_MAX_POINTS {
        RiskTier::Low
    } else if points <= MODERATE_MAX_POINTS {
        RiskTier::Moderate
    } else {
        RiskTier::High
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_abnormal_is_high() {
        let assessment = assess_vitals("150/95", "110", "39.0");
        assert_eq!(assessment.tier, RiskTier::High);
        assert_eq!(
            assessment.issues,
            vec![
                "High blood pressure detected".to_string(),
                "High heart rate (tachycardia)".to_string(),
                "High fever detected".to_string(),
            ]
        );
    }

    #[test]
    fn test_all_normal_is_low() {
        let assessment = assess_vitals("120/80", "72", "36.6");
        assert_eq!(assessment.tier, RiskTier::Low);
        assert_eq!(
            assessment.issues,
            vec![
                "Blood pressure normal".to_string(),
                "Normal heart rate".to_string(),
                "Normal temperature".to_string(),
            ]
        );
    }

    #[test]
    fn test_invalid_bp_degrades_to_penalty() {
        // 1 (fallback) + 1 (normal HR) + 1 (normal temp) = 3 points: Low.
        let assessment = assess_vitals("bad", "70", "36.5");
        assert_eq!(assessment.tier, RiskTier::Low);
        assert_eq!(assessment.issues[0], INVALID_BP);
        assert_eq!(assessment.issues.len(), 3);
    }

    #[test]
    fn test_invalid_heart_rate_and_temperature() {
        let assessment = assess_vitals("120/80", "fast", "warm");
        assert_eq!(assessment.tier, RiskTier::Low);
        assert_eq!(assessment.issues[1], INVALID_HEART_RATE);
        assert_eq!(assessment.issues[2], INVALID_TEMPERATURE);
    }

    #[test]
    fn test_moderate_band() {
        // 3 (high BP) + 1 (normal HR) + 2 (mild fever) = 6 points: Moderate.
        let assessment = assess_vitals("150/95", "80", "37.5");
        assert_eq!(assessment.tier, RiskTier::Moderate);
    }

    #[test]
    fn test_low_bp_and_bradycardia() {
        // 2 + 2 + 1 = 5 points: Moderate.
        let assessment = assess_vitals("85/55", "50", "36.8");
        assert_eq!(assessment.tier, RiskTier::Moderate);
        assert_eq!(assessment.issues[0], "Low blood pressure detected");
        assert_eq!(assessment.issues[1], "Low heart rate (bradycardia)");
    }

    #[test]
    fn test_cutoff_boundaries() {
        // Exactly 4 points stays Low: low BP + normal HR + normal temp.
        let assessment = assess_vitals("85/55", "70", "36.5");
        assert_eq!(assessment.tier, RiskTier::Low);

        // Exactly 7 points stays Moderate: high BP + tachycardia + normal temp.
        let assessment = assess_vitals("160/100", "120", "36.5");
        assert_eq!(assessment.tier, RiskTier::Moderate);

        // 8 points is High: high BP + tachycardia + mild fever.
        let assessment = assess_vitals("160/100", "120", "37.5");
        assert_eq!(assessment.tier, RiskTier::High);
    }

    #[test]
    fn test_whitespace_tolerated() {
        let assessment = assess_vitals(" 150 / 95 ", " 110 ", " 39.0 ");
        assert_eq!(assessment.tier, RiskTier::High);
    }

    #[test]
    fn test_never_fails_on_garbage() {
        let assessment = assess_vitals("", "", "");
        assert_eq!(assessment.tier, RiskTier::Low);
        assert_eq!(assessment.issues.len(), 3);
    }
}
