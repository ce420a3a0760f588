//! # VibeSync Core Library
//!
//! Business logic for the VibeSync wellness companion. A user answers a short
//! questionnaire (stress, energy, current activity); the answer is classified
//! into one of five moods and paired with an authored bundle of playlists,
//! aromatherapy blends and micro-movements.
//!
//! ## Architecture
//!
//! - **Mood**: questionnaire types and a first-match-wins rule classifier
//!   whose thresholds are configurable policy
//! - **Recommendations**: an immutable catalog built once per process and a
//!   pure lookup from mood to bundle
//! - **Session**: in-memory profile counters and simulated actions (playback,
//!   kit orders) for front ends
//! - **Storage**: TOML-based configuration
//!
//! ## Key Components
//!
//! - [`classify`] / [`Classifier`]: mood classification
//! - [`recommend`]: mood to bundle lookup
//! - [`WellnessSession`]: per-user session bookkeeping
//! - [`Config`]: application configuration management

pub mod error;
pub mod mood;
pub mod profile;
pub mod recommendations;
pub mod session;
pub mod storage;

pub use error::{ConfigError, CoreError, ValidationError};
pub use mood::{
    classify, Activity, Classifier, ClassifierPolicy, EnergyLevel, MoodCategory, MoodInput,
    MoodKind,
};
pub use profile::{Rewards, UserProfile};
pub use recommendations::{
    find_playlist, recommend, recommend_label, DiyRecipe, MovementRecommendation, Playlist,
    RecommendationBundle, ScentRecommendation,
};
pub use session::{Notification, NotificationKind, Submission, WellnessSession};
pub use storage::Config;
