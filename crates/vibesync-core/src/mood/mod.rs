//! Mood questionnaire model and classifier.
//!
//! A [`MoodInput`] goes in, a [`MoodCategory`] comes out. Nothing here keeps
//! state between calls.

mod classifier;
mod types;

pub use classifier::{
    classify, Classifier, ClassifierPolicy, ClassifierRule, FALLBACK_CATEGORY, RULES,
};
pub use types::{Activity, EnergyLevel, MoodCategory, MoodInput, MoodKind, MAX_STRESS};
