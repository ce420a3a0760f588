//! Single-user wellness session.
//!
//! Glues the pure pieces together the way the front end uses them: classify
//! an answer, look up its bundle, and keep the profile counters current.
//! Playback and kit orders are simulated; they only produce notifications.

use serde::{Deserialize, Serialize};

use crate::mood::{Classifier, MoodCategory, MoodInput};
use crate::profile::{Rewards, UserProfile};
use crate::recommendations::{find_playlist, recommend, Playlist, RecommendationBundle};

/// Severity of a user-facing notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    Success,
    Info,
    Warning,
}

/// A short message for the front end to display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub kind: NotificationKind,
    pub message: String,
}

impl Notification {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Success,
            message: message.into(),
        }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Info,
            message: message.into(),
        }
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Warning,
            message: message.into(),
        }
    }
}

/// Result of one questionnaire submission.
#[derive(Debug, Clone, Serialize)]
pub struct Submission {
    pub mood: MoodCategory,
    pub recommendations: &'static RecommendationBundle,
    pub points_awarded: u64,
    pub notification: Notification,
}

/// In-memory session state for one user.
#[derive(Debug, Clone)]
pub struct WellnessSession {
    classifier: Classifier,
    rewards: Rewards,
    profile: UserProfile,
    current: Option<MoodCategory>,
}

impl Default for WellnessSession {
    fn default() -> Self {
        Self::new(Classifier::new(), Rewards::default(), UserProfile::default())
    }
}

impl WellnessSession {
    pub fn new(classifier: Classifier, rewards: Rewards, profile: UserProfile) -> Self {
        Self {
            classifier,
            rewards,
            profile,
            current: None,
        }
    }

    pub fn profile(&self) -> &UserProfile {
        &self.profile
    }

    /// The most recent classification, cleared by [`reset`](Self::reset).
    pub fn current(&self) -> Option<MoodCategory> {
        self.current
    }

    /// Classify an answer, pick its bundle and award submission points.
    pub fn submit(&mut self, input: &MoodInput) -> Submission {
        let mood = self.classifier.classify(input);
        let recommendations = recommend(mood.category);
        let points = self.rewards.submission_points;

        self.profile.record_submission(points);
        self.current = Some(mood);

        tracing::info!(
            category = %mood.category,
            confidence = mood.confidence,
            points,
            total_points = self.profile.vibe_points,
            streak = self.profile.current_streak,
            "submission recorded"
        );

        Submission {
            mood,
            recommendations,
            points_awarded: points,
            notification: Notification::success(format!(
                "🎉 Mood analyzed! +{points} Vibe Points earned!"
            )),
        }
    }

    /// Simulated playback. Nothing is sent to a music service.
    pub fn play(&self, playlist: &Playlist) -> Notification {
        tracing::debug!(playlist = %playlist.id, "simulated playback");
        Notification::info(format!("🎵 Now playing: {}", playlist.name))
    }

    /// Simulated playback by catalog id. Unknown ids yield a warning.
    pub fn play_by_id(&self, id: &str) -> Notification {
        match find_playlist(id) {
            Some((_, playlist)) => self.play(playlist),
            None => {
                tracing::warn!(playlist = id, "playlist not in catalog");
                Notification::warning(format!("unknown playlist: '{id}'"))
            }
        }
    }

    /// Simulated wellness-kit order. Awards kit points.
    pub fn order_kit(&mut self) -> Notification {
        let points = self.rewards.kit_order_points;
        self.profile.award(points);
        tracing::info!(points, total_points = self.profile.vibe_points, "wellness kit ordered");
        Notification::success(
            "🎁 Your wellness kit has been ordered! Delivery in 2-3 business days.",
        )
    }

    /// Forget the current result so a new analysis can start. The profile is kept.
    pub fn reset(&mut self) {
        self.current = None;
    }
}
