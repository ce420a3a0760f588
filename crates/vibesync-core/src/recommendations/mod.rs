//! Recommendation selector.
//!
//! Maps a mood to its authored bundle of playlists, scents and movements.
//! Pure lookup: the same mood always yields the same bundle.

mod catalog;
mod types;

pub use catalog::{catalog, Catalog};
pub use types::{
    DiyRecipe, MovementRecommendation, Playlist, RecommendationBundle, ScentRecommendation,
};

use crate::mood::MoodKind;

/// Bundle for a mood.
pub fn recommend(kind: MoodKind) -> &'static RecommendationBundle {
    catalog().bundle(kind)
}

/// Bundle for a mood label. Unknown labels resolve to calm.
pub fn recommend_label(label: &str) -> &'static RecommendationBundle {
    recommend(MoodKind::parse_or_default(label))
}

/// Locate a playlist anywhere in the catalog.
pub fn find_playlist(id: &str) -> Option<(MoodKind, &'static Playlist)> {
    catalog().find_playlist(id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn label_lookup_matches_enum_lookup() {
        assert_eq!(recommend_label("Energetic"), recommend(MoodKind::Energetic));
        assert!(std::ptr::eq(recommend_label("FOCUSED"), recommend(MoodKind::Focused)));
    }

    #[test]
    fn unknown_label_resolves_to_calm() {
        assert!(std::ptr::eq(recommend_label("melancholy"), recommend(MoodKind::Calm)));
    }

    #[test]
    fn bundles_differ_between_moods() {
        assert_ne!(recommend(MoodKind::Stressed), recommend(MoodKind::Energetic));
    }

    #[test]
    fn bundle_serializes_with_camel_case_optionals() {
        let bundle = recommend(MoodKind::Stressed);
        let json = serde_json::to_value(bundle).unwrap();
        let first = &json["playlists"][0];
        assert!(first.get("spotifyUrl").is_some());
        assert!(first.get("spotify_url").is_none());

        let piano = &json["playlists"][2];
        assert!(piano.get("youtubeUrl").is_none());

        let with_recipe = &json["scents"][0];
        assert!(with_recipe["diyRecipe"]["ingredients"].is_array());
        let without_recipe = &json["scents"][2];
        assert!(without_recipe.get("diyRecipe").is_none());
    }
}
