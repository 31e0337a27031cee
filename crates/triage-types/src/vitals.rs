//! Vital-sign readings and their classification.
//!
//! This module provides the `VitalsReading` struct and the category enums
//! for blood pressure, heart rate, and temperature. Each category carries
//! its clinical thresholds as associated constants, plus the risk points
//! and human-readable issue string the scorer attaches to it.

/// A parsed set of vital-sign readings.
///
/// # Examples
///
/// ```
/// use triage_types::{BloodPressureCategory, VitalsReading};
///
/// let vitals = VitalsReading {
///     systolic: 150,
///     diastolic: 95,
///     heart_rate: 110,
///     temperature: 39.0,
/// };
///
/// let bp = BloodPressureCategory::classify(vitals.systolic, vitals.diastolic);
/// assert_eq!(bp, BloodPressureCategory::High);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VitalsReading {
    /// Systolic blood pressure in mmHg.
    pub systolic: u16,
    /// Diastolic blood pressure in mmHg.
    pub diastolic: u16,
    /// Heart rate in beats per minute.
    pub heart_rate: u16,
    /// Body temperature in degrees Celsius.
    pub temperature: f64,
}

/// Blood pressure category.
///
/// # Examples
///
/// ```
/// use triage_types::BloodPressureCategory;
///
/// assert_eq!(BloodPressureCategory::classify(150, 95), BloodPressureCategory::High);
/// assert_eq!(BloodPressureCategory::classify(120, 80), BloodPressureCategory::Normal);
/// assert_eq!(BloodPressureCategory::classify(85, 55), BloodPressureCategory::Low);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BloodPressureCategory {
    /// Hypotension: systolic below 90 or diastolic below 60.
    Low,
    /// Within normal range.
    Normal,
    /// Hypertension: systolic above 140 or diastolic above 90.
    High,
}

impl BloodPressureCategory {
    /// Systolic value above which BP is classified as high (exclusive).
    pub const HIGH_SYSTOLIC: u16 = 140;
    /// Diastolic value above which BP is classified as high (exclusive).
    pub const HIGH_DIASTOLIC: u16 = 90;
    /// Systolic value below which BP is classified as low (exclusive).
    pub const LOW_SYSTOLIC: u16 = 90;
    /// Diastolic value below which BP is classified as low (exclusive).
    pub const LOW_DIASTOLIC: u16 = 60;

    /// Classifies a blood pressure reading. High takes precedence over low.
    pub fn classify(systolic: u16, diastolic: u16) -> Self {
        if systolic > Self::HIGH_SYSTOLIC || diastolic > Self::HIGH_DIASTOLIC {
            Self::High
        } else if systolic < Self::LOW_SYSTOLIC || diastolic < Self::LOW_DIASTOLIC {
            Self::Low
        } else {
            Self::Normal
        }
    }

    /// Risk points this category contributes to the vitals score.
    pub fn risk_points(self) -> u8 {
        match self {
            Self::High => 3,
            Self::Low => 2,
            Self::Normal => 1,
        }
    }

    /// Human-readable issue string for this category.
    pub fn issue(self) -> &'static str {
        match self {
            Self::High => "High blood pressure detected",
            Self::Low => "Low blood pressure detected",
            Self::Normal => "Blood pressure normal",
        }
    }
}

/// Heart rate category.
///
/// # Examples
///
/// ```
/// use triage_types::HeartRateCategory;
///
/// assert_eq!(HeartRateCategory::classify(110), HeartRateCategory::Tachycardia);
/// assert_eq!(HeartRateCategory::classify(72), HeartRateCategory::Normal);
/// assert_eq!(HeartRateCategory::classify(50), HeartRateCategory::Bradycardia);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum HeartRateCategory {
    /// Below 60 bpm.
    Bradycardia,
    /// Within 60-100 bpm.
    Normal,
    /// Above 100 bpm.
    Tachycardia,
}

impl HeartRateCategory {
    /// Heart rate above which the reading is tachycardic (exclusive), in bpm.
    pub const TACHYCARDIA_BPM: u16 = 100;
    /// Heart rate below which the reading is bradycardic (exclusive), in bpm.
    pub const BRADYCARDIA_BPM: u16 = 60;

    /// Classifies a heart rate reading.
    pub fn classify(bpm: u16) -> Self {
        if bpm > Self::TACHYCARDIA_BPM {
            Self::Tachycardia
        } else if bpm < Self::BRADYCARDIA_BPM {
            Self::Bradycardia
        } else {
            Self::Normal
        }
    }

    /// Risk points this category contributes to the vitals score.
    pub fn risk_points(self) -> u8 {
        match self {
            Self::Tachycardia => 3,
            Self::Bradycardia => 2,
            Self::Normal => 1,
        }
    }

    /// Human-readable issue string for this category.
    pub fn issue(self) -> &'static str {
        match self {
            Self::Tachycardia => "High heart rate (tachycardia)",
            Self::Bradycardia => "Low heart rate (bradycardia)",
            Self::Normal => "Normal heart rate",
        }
    }
}

/// Body temperature category.
///
/// # Examples
///
/// ```
/// use triage_types::TemperatureCategory;
///
/// assert_eq!(TemperatureCategory::classify(39.0), TemperatureCategory::HighFever);
/// assert_eq!(TemperatureCategory::classify(37.5), TemperatureCategory::MildFever);
/// assert_eq!(TemperatureCategory::classify(36.5), TemperatureCategory::Normal);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TemperatureCategory {
    /// At or below 37°C.
    Normal,
    /// Above 37°C up to 38°C.
    MildFever,
    /// Above 38°C.
    HighFever,
}

impl TemperatureCategory {
    /// Temperature above which the reading is a high fever (exclusive), in °C.
    pub const HIGH_FEVER_CELSIUS: f64 = 38.0;
    /// Temperature above which the reading is a mild fever (exclusive), in °C.
    pub const MILD_FEVER_CELSIUS: f64 = 37.0;

    /// Classifies a temperature reading.
    pub fn classify(celsius: f64) -> Self {
        if celsius > Self::HIGH_FEVER_CELSIUS {
            Self::HighFever
        } else if celsius > Self::MILD_FEVER_CELSIUS {
            Self::MildFever
        } else {
            Self::Normal
        }
    }

    /// Risk points this category contributes to the vitals score.
    pub fn risk_points(self) -> u8 {
        match self {
            Self::HighFever => 3,
            Self::MildFever => 2,
            Self::Normal => 1,
        }
    }

    /// Human-readable issue string for this category.
    pub fn issue(self) -> &'static str {
        match self {
            Self::HighFever => "High fever detected",
            Self::MildFever => "Mild fever",
            Self::Normal => "Normal temperature",
        }
    }
}
