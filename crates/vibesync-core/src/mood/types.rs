//! Mood questionnaire inputs and classifier output.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Upper bound of the stress scale. Inputs above it are clamped.
pub const MAX_STRESS: u8 = 10;

/// Self-reported energy level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EnergyLevel {
    Low,
    Medium,
    High,
}

impl EnergyLevel {
    pub const ALL: [EnergyLevel; 3] = [EnergyLevel::Low, EnergyLevel::Medium, EnergyLevel::High];

    pub fn as_str(&self) -> &'static str {
        match self {
            EnergyLevel::Low => "low",
            EnergyLevel::Medium => "medium",
            EnergyLevel::High => "high",
        }
    }

    /// Parse a label, falling back to `Medium` for anything unrecognised.
    pub fn parse_or_default(s: &str) -> Self {
        s.parse().unwrap_or_else(|err: ValidationError| {
            tracing::warn!(%err, "falling back to medium energy");
            EnergyLevel::Medium
        })
    }
}

impl fmt::Display for EnergyLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EnergyLevel {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "low" => Ok(EnergyLevel::Low),
            "medium" => Ok(EnergyLevel::Medium),
            "high" => Ok(EnergyLevel::High),
            _ => Err(ValidationError::UnknownLabel {
                kind: "energy level",
                value: s.to_string(),
            }),
        }
    }
}

/// What the user is doing right now.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Activity {
    Studying,
    Working,
    Relaxing,
    Exercising,
    Socializing,
    Creative,
    Commuting,
    Cooking,
    Cleaning,
    Reading,
}

impl Activity {
    pub const ALL: [Activity; 10] = [
        Activity::Studying,
        Activity::Working,
        Activity::Relaxing,
        Activity::Exercising,
        Activity::Socializing,
        Activity::Creative,
        Activity::Commuting,
        Activity::Cooking,
        Activity::Cleaning,
        Activity::Reading,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Activity::Studying => "studying",
            Activity::Working => "working",
            Activity::Relaxing => "relaxing",
            Activity::Exercising => "exercising",
            Activity::Socializing => "socializing",
            Activity::Creative => "creative",
            Activity::Commuting => "commuting",
            Activity::Cooking => "cooking",
            Activity::Cleaning => "cleaning",
            Activity::Reading => "reading",
        }
    }

    /// Parse a label, falling back to `Relaxing` for anything unrecognised.
    pub fn parse_or_default(s: &str) -> Self {
        s.parse().unwrap_or_else(|err: ValidationError| {
            tracing::warn!(%err, "falling back to relaxing activity");
            Activity::Relaxing
        })
    }
}

impl fmt::Display for Activity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Activity {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_lowercase();
        Activity::ALL
            .into_iter()
            .find(|a| a.as_str() == lower)
            .ok_or_else(|| ValidationError::UnknownLabel {
                kind: "activity",
                value: s.to_string(),
            })
    }
}

/// The five mood labels the classifier can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MoodKind {
    Stressed,
    Calm,
    Energetic,
    Focused,
    Creative,
}

impl MoodKind {
    pub const ALL: [MoodKind; 5] = [
        MoodKind::Stressed,
        MoodKind::Calm,
        MoodKind::Energetic,
        MoodKind::Focused,
        MoodKind::Creative,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            MoodKind::Stressed => "stressed",
            MoodKind::Calm => "calm",
            MoodKind::Energetic => "energetic",
            MoodKind::Focused => "focused",
            MoodKind::Creative => "creative",
        }
    }

    pub fn emoji(&self) -> &'static str {
        match self {
            MoodKind::Stressed => "😓",
            MoodKind::Calm => "😌",
            MoodKind::Energetic => "⚡",
            MoodKind::Focused => "🎯",
            MoodKind::Creative => "🎨",
        }
    }

    /// One-sentence reading of the mood shown on the result card.
    pub fn description(&self) -> &'static str {
        match self {
            MoodKind::Stressed => {
                "You're experiencing some tension. Let's help you find your center with calming activities."
            }
            MoodKind::Calm => {
                "You're in a peaceful state. Perfect time for mindful activities and gentle wellness practices."
            }
            MoodKind::Energetic => {
                "You're feeling vibrant and ready to take on the world! Let's channel that energy positively."
            }
            MoodKind::Focused => {
                "You're in a concentrated mindset. Great time for deep work and productive activities."
            }
            MoodKind::Creative => {
                "Your creative energy is flowing! Perfect time for artistic expression and innovative thinking."
            }
        }
    }

    /// Parse a label, falling back to `Calm` for anything unrecognised.
    pub fn parse_or_default(s: &str) -> Self {
        s.parse().unwrap_or_else(|err: ValidationError| {
            tracing::warn!(%err, "falling back to calm");
            MoodKind::Calm
        })
    }
}

impl fmt::Display for MoodKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MoodKind {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_lowercase();
        MoodKind::ALL
            .into_iter()
            .find(|m| m.as_str() == lower)
            .ok_or_else(|| ValidationError::UnknownLabel {
                kind: "mood",
                value: s.to_string(),
            })
    }
}

/// One questionnaire answer. Built fresh per submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MoodInput {
    /// Stress on a 0-10 scale
    #[serde(deserialize_with = "deserialize_stress")]
    pub stress_level: u8,
    pub energy_level: EnergyLevel,
    pub current_activity: Activity,
    /// Informational only; classification ignores it
    pub timestamp: DateTime<Utc>,
}

impl MoodInput {
    /// Build an input stamped with the current time.
    ///
    /// `stress_level` is clamped into `0..=MAX_STRESS`.
    pub fn new(stress_level: i64, energy_level: EnergyLevel, current_activity: Activity) -> Self {
        Self::at(stress_level, energy_level, current_activity, Utc::now())
    }

    /// Build an input with an explicit timestamp.
    pub fn at(
        stress_level: i64,
        energy_level: EnergyLevel,
        current_activity: Activity,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            stress_level: clamp_stress(stress_level),
            energy_level,
            current_activity,
            timestamp,
        }
    }
}

fn clamp_stress(raw: i64) -> u8 {
    raw.clamp(0, i64::from(MAX_STRESS)) as u8
}

fn deserialize_stress<'de, D>(deserializer: D) -> Result<u8, D::Error>
where
    D: serde::Deserializer<'de>,
{
    i64::deserialize(deserializer).map(clamp_stress)
}

/// Classifier verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoodCategory {
    pub category: MoodKind,
    /// Self-reported certainty, 0-100
    pub confidence: u8,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stress_is_clamped_into_scale() {
        assert_eq!(MoodInput::new(-4, EnergyLevel::Low, Activity::Reading).stress_level, 0);
        assert_eq!(MoodInput::new(42, EnergyLevel::Low, Activity::Reading).stress_level, 10);
        assert_eq!(MoodInput::new(6, EnergyLevel::Low, Activity::Reading).stress_level, 6);
    }

    #[test]
    fn labels_parse_case_insensitively() {
        assert_eq!("HIGH".parse::<EnergyLevel>(), Ok(EnergyLevel::High));
        assert_eq!(" Reading ".parse::<Activity>(), Ok(Activity::Reading));
        assert_eq!("Focused".parse::<MoodKind>(), Ok(MoodKind::Focused));
    }

    #[test]
    fn unknown_labels_are_rejected_by_from_str() {
        let err = "sleepy".parse::<EnergyLevel>().unwrap_err();
        assert_eq!(
            err,
            ValidationError::UnknownLabel {
                kind: "energy level",
                value: "sleepy".to_string()
            }
        );
        assert!("gardening".parse::<Activity>().is_err());
        assert!("grumpy".parse::<MoodKind>().is_err());
    }

    #[test]
    fn lenient_parsing_falls_back() {
        assert_eq!(EnergyLevel::parse_or_default("sleepy"), EnergyLevel::Medium);
        assert_eq!(Activity::parse_or_default("gardening"), Activity::Relaxing);
        assert_eq!(MoodKind::parse_or_default("grumpy"), MoodKind::Calm);
        assert_eq!(MoodKind::parse_or_default("creative"), MoodKind::Creative);
    }

    #[test]
    fn display_matches_serde_label() {
        for kind in MoodKind::ALL {
            let json = serde_json::to_string(&kind).unwrap();
            assert_eq!(json, format!("\"{}\"", kind));
        }
        for activity in Activity::ALL {
            let json = serde_json::to_string(&activity).unwrap();
            assert_eq!(json, format!("\"{}\"", activity));
        }
    }

    #[test]
    fn input_serializes_in_camel_case() {
        let input = MoodInput::new(5, EnergyLevel::Medium, Activity::Cooking);
        let value = serde_json::to_value(&input).unwrap();
        assert_eq!(value["stressLevel"], 5);
        assert_eq!(value["energyLevel"], "medium");
        assert_eq!(value["currentActivity"], "cooking");
    }

    #[test]
    fn deserialized_stress_is_clamped_into_scale() {
        let parse = |stress: &str| -> MoodInput {
            serde_json::from_str(&format!(
                r#"{{"stressLevel":{stress},"energyLevel":"low","currentActivity":"reading","timestamp":"2024-01-01T00:00:00Z"}}"#
            ))
            .unwrap()
        };
        assert_eq!(parse("42").stress_level, 10);
        assert_eq!(parse("-3").stress_level, 0);
        assert_eq!(parse("7").stress_level, 7);
    }
}
