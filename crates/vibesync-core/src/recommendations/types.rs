//! Recommendation record types.

use serde::{Deserialize, Serialize};

/// A curated music playlist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Playlist {
    /// Unique across the whole catalog (e.g., "calm-rain-lofi").
    pub id: String,
    pub name: String,
    pub description: String,
    /// Number of tracks.
    pub tracks: u32,
    /// Human-readable running time (e.g., "2h 10m").
    pub duration: String,
    /// Cover art asset reference.
    pub image: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spotify_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub youtube_url: Option<String>,
}

/// Step-by-step aromatherapy blend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiyRecipe {
    pub ingredients: Vec<String>,
    pub instructions: Vec<String>,
    /// How long the blend takes to prepare or how long it lasts.
    pub duration: String,
}

/// An aromatherapy suggestion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScentRecommendation {
    pub name: String,
    pub benefits: String,
    pub icon: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub diy_recipe: Option<DiyRecipe>,
}

/// A short movement or breathing exercise.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MovementRecommendation {
    pub name: String,
    pub duration: String,
    pub description: String,
    pub icon: String,
}

/// Everything recommended for one mood.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RecommendationBundle {
    pub playlists: Vec<Playlist>,
    pub scents: Vec<ScentRecommendation>,
    pub movements: Vec<MovementRecommendation>,
}

impl RecommendationBundle {
    /// True when at least one playlist, scent and movement is present.
    pub fn is_complete(&self) -> bool {
        !self.playlists.is_empty() && !self.scents.is_empty() && !self.movements.is_empty()
    }

    pub fn playlist(&self, id: &str) -> Option<&Playlist> {
        self.playlists.iter().find(|p| p.id == id)
    }
}
