//! Rule-based mood classifier.
//!
//! The classifier walks a fixed, ordered table of rules and returns the first
//! one whose predicate matches. Rules never blend: precedence alone decides
//! ties. When nothing matches the input is read as calm at the policy's
//! baseline confidence.
//!
//! Thresholds live in [`ClassifierPolicy`] so they can be tuned from config
//! without touching the rule table.

use serde::{Deserialize, Serialize};

use super::types::{Activity, EnergyLevel, MoodCategory, MoodInput, MoodKind, MAX_STRESS};
use crate::error::ValidationError;

/// Tunable thresholds for the rule table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassifierPolicy {
    /// Stress at or above this reads as stressed
    #[serde(default = "default_high_stress_threshold")]
    pub high_stress_threshold: u8,
    /// Highest stress still compatible with calm
    #[serde(default = "default_calm_max_stress")]
    pub calm_max_stress: u8,
    /// Minimum stress for study/work to read as focused
    #[serde(default = "default_focus_min_stress")]
    pub focus_min_stress: u8,
    /// Confidence reported when no rule matches
    #[serde(default = "default_baseline_confidence")]
    pub baseline_confidence: u8,
    /// Ceiling applied to every confidence score
    #[serde(default = "default_max_confidence")]
    pub max_confidence: u8,
}

fn default_high_stress_threshold() -> u8 {
    7
}
fn default_calm_max_stress() -> u8 {
    3
}
fn default_focus_min_stress() -> u8 {
    3
}
fn default_baseline_confidence() -> u8 {
    60
}
fn default_max_confidence() -> u8 {
    95
}

impl Default for ClassifierPolicy {
    fn default() -> Self {
        Self {
            high_stress_threshold: default_high_stress_threshold(),
            calm_max_stress: default_calm_max_stress(),
            focus_min_stress: default_focus_min_stress(),
            baseline_confidence: default_baseline_confidence(),
            max_confidence: default_max_confidence(),
        }
    }
}

impl ClassifierPolicy {
    /// Check that the thresholds are internally consistent.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidPolicy`] describing the first
    /// contradiction found.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.high_stress_threshold > MAX_STRESS {
            return Err(ValidationError::InvalidPolicy(format!(
                "high_stress_threshold ({}) exceeds the stress scale ({MAX_STRESS})",
                self.high_stress_threshold
            )));
        }
        if self.calm_max_stress >= self.high_stress_threshold {
            return Err(ValidationError::InvalidPolicy(format!(
                "calm_max_stress ({}) must be below high_stress_threshold ({})",
                self.calm_max_stress, self.high_stress_threshold
            )));
        }
        if self.focus_min_stress >= self.high_stress_threshold {
            return Err(ValidationError::InvalidPolicy(format!(
                "focus_min_stress ({}) must be below high_stress_threshold ({})",
                self.focus_min_stress, self.high_stress_threshold
            )));
        }
        if self.max_confidence > 100 {
            return Err(ValidationError::InvalidPolicy(format!(
                "max_confidence ({}) exceeds 100",
                self.max_confidence
            )));
        }
        if self.baseline_confidence > self.max_confidence {
            return Err(ValidationError::InvalidPolicy(format!(
                "baseline_confidence ({}) exceeds max_confidence ({})",
                self.baseline_confidence, self.max_confidence
            )));
        }
        Ok(())
    }
}

/// One entry of the ordered rule table.
#[derive(Clone, Copy)]
pub struct ClassifierRule {
    /// Stable identifier, surfaced in logs and by [`Classifier::explain`]
    pub name: &'static str,
    pub category: MoodKind,
    pub matches: fn(&MoodInput, &ClassifierPolicy) -> bool,
    /// Raw score before clamping; may fall outside 0-100
    pub confidence: fn(&MoodInput, &ClassifierPolicy) -> i32,
}

impl std::fmt::Debug for ClassifierRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClassifierRule")
            .field("name", &self.name)
            .field("category", &self.category)
            .finish()
    }
}

/// Stress on the 0-10 scale, whatever the field holds.
fn stress_level(input: &MoodInput) -> u8 {
    input.stress_level.min(MAX_STRESS)
}

fn stress(input: &MoodInput) -> i32 {
    i32::from(stress_level(input))
}

/// Rules in precedence order. First match wins.
pub static RULES: [ClassifierRule; 5] = [
    ClassifierRule {
        name: "high-stress",
        category: MoodKind::Stressed,
        matches: |input, policy| stress_level(input) >= policy.high_stress_threshold,
        confidence: |input, policy| {
            70 + 8 * (stress(input) - i32::from(policy.high_stress_threshold))
        },
    },
    ClassifierRule {
        name: "calm-unwind",
        category: MoodKind::Calm,
        matches: |input, policy| {
            stress_level(input) <= policy.calm_max_stress
                && matches!(input.energy_level, EnergyLevel::Low | EnergyLevel::Medium)
                && matches!(input.current_activity, Activity::Relaxing | Activity::Reading)
        },
        confidence: |input, policy| {
            let low_energy_bonus = if input.energy_level == EnergyLevel::Low { 5 } else { 0 };
            75 + 5 * (i32::from(policy.calm_max_stress) - stress(input)) + low_energy_bonus
        },
    },
    ClassifierRule {
        name: "high-energy",
        category: MoodKind::Energetic,
        matches: |input, _| input.energy_level == EnergyLevel::High,
        confidence: |input, policy| {
            let active_bonus = match input.current_activity {
                Activity::Exercising | Activity::Socializing => 10,
                _ => 0,
            };
            70 + 3 * (i32::from(policy.high_stress_threshold) - stress(input)) + active_bonus
        },
    },
    ClassifierRule {
        name: "deep-work",
        category: MoodKind::Focused,
        matches: |input, policy| {
            matches!(input.current_activity, Activity::Studying | Activity::Working)
                && stress_level(input) >= policy.focus_min_stress
        },
        confidence: |input, policy| {
            let study_bonus = if input.current_activity == Activity::Studying { 5 } else { 0 };
            72 + 3 * (stress(input) - i32::from(policy.focus_min_stress)) + study_bonus
        },
    },
    ClassifierRule {
        name: "creative-flow",
        category: MoodKind::Creative,
        matches: |input, _| input.current_activity == Activity::Creative,
        confidence: |input, _| {
            let energy_boost = match input.energy_level {
                EnergyLevel::Low => 0,
                EnergyLevel::Medium => 5,
                EnergyLevel::High => 8,
            };
            82 + energy_boost
        },
    },
];

/// Category returned when no rule matches.
pub const FALLBACK_CATEGORY: MoodKind = MoodKind::Calm;

/// Stateless classifier bound to a policy.
#[derive(Debug, Clone, Default)]
pub struct Classifier {
    policy: ClassifierPolicy,
}

impl Classifier {
    /// Create a classifier with the default policy.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a classifier with a custom policy.
    ///
    /// # Errors
    ///
    /// Returns an error if the policy fails [`ClassifierPolicy::validate`].
    pub fn with_policy(policy: ClassifierPolicy) -> Result<Self, ValidationError> {
        policy.validate()?;
        Ok(Self { policy })
    }

    pub fn policy(&self) -> &ClassifierPolicy {
        &self.policy
    }

    /// The rule that decides `input`, or `None` when the fallback applies.
    pub fn explain(&self, input: &MoodInput) -> Option<&'static ClassifierRule> {
        RULES.iter().find(|rule| (rule.matches)(input, &self.policy))
    }

    /// Classify a questionnaire answer. Total and deterministic.
    pub fn classify(&self, input: &MoodInput) -> MoodCategory {
        let rule = self.explain(input);
        let result = match rule {
            Some(rule) => MoodCategory {
                category: rule.category,
                confidence: self.clamp_confidence((rule.confidence)(input, &self.policy)),
            },
            None => MoodCategory {
                category: FALLBACK_CATEGORY,
                confidence: self.clamp_confidence(i32::from(self.policy.baseline_confidence)),
            },
        };

        tracing::debug!(
            rule = rule.map_or("fallback", |r| r.name),
            stress = stress_level(input),
            energy = %input.energy_level,
            activity = %input.current_activity,
            category = %result.category,
            confidence = result.confidence,
            "classified mood"
        );

        result
    }

    fn clamp_confidence(&self, raw: i32) -> u8 {
        let ceiling = i32::from(self.policy.max_confidence.min(100));
        raw.clamp(0, ceiling) as u8
    }
}

/// Classify with the default policy.
pub fn classify(input: &MoodInput) -> MoodCategory {
    Classifier::new().classify(input)
}
