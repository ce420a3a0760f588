//! Gamified profile counters.
//!
//! The profile lives only in memory for the length of a session. It is
//! bookkeeping for the front end and never feeds back into classification.

use serde::{Deserialize, Serialize};

/// Points, submissions and streak.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    #[serde(default = "default_vibe_points")]
    pub vibe_points: u64,
    #[serde(default = "default_total_submissions")]
    pub total_submissions: u64,
    #[serde(default = "default_current_streak")]
    pub current_streak: u64,
}

fn default_vibe_points() -> u64 {
    150
}
fn default_total_submissions() -> u64 {
    12
}
fn default_current_streak() -> u64 {
    5
}

impl Default for UserProfile {
    fn default() -> Self {
        Self {
            vibe_points: default_vibe_points(),
            total_submissions: default_total_submissions(),
            current_streak: default_current_streak(),
        }
    }
}

impl UserProfile {
    /// A profile with every counter at zero.
    pub fn empty() -> Self {
        Self {
            vibe_points: 0,
            total_submissions: 0,
            current_streak: 0,
        }
    }

    /// Count one completed submission.
    pub fn record_submission(&mut self, points: u64) {
        self.vibe_points = self.vibe_points.saturating_add(points);
        self.total_submissions = self.total_submissions.saturating_add(1);
        self.current_streak = self.current_streak.saturating_add(1);
    }

    pub fn award(&mut self, points: u64) {
        self.vibe_points = self.vibe_points.saturating_add(points);
    }
}

/// Points granted per action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rewards {
    #[serde(default = "default_submission_points")]
    pub submission_points: u64,
    #[serde(default = "default_kit_order_points")]
    pub kit_order_points: u64,
}

fn default_submission_points() -> u64 {
    25
}
fn default_kit_order_points() -> u64 {
    50
}

impl Default for Rewards {
    fn default() -> Self {
        Self {
            submission_points: default_submission_points(),
            kit_order_points: default_kit_order_points(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn submission_bumps_all_counters() {
        let mut profile = UserProfile::default();
        profile.record_submission(25);
        assert_eq!(profile.vibe_points, 175);
        assert_eq!(profile.total_submissions, 13);
        assert_eq!(profile.current_streak, 6);
    }

    #[test]
    fn award_only_touches_points() {
        let mut profile = UserProfile::empty();
        profile.award(50);
        assert_eq!(profile, UserProfile { vibe_points: 50, ..UserProfile::empty() });
    }

    #[test]
    fn counters_saturate() {
        let mut profile = UserProfile {
            vibe_points: u64::MAX,
            ..UserProfile::empty()
        };
        profile.record_submission(25);
        assert_eq!(profile.vibe_points, u64::MAX);
    }
}
