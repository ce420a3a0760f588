//! Plain-text rendering shared by several commands.

use vibesync_core::{MoodCategory, RecommendationBundle, UserProfile};

pub fn rule() -> String {
    "─".repeat(50)
}

pub fn mood_card(mood: &MoodCategory) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "\n{} You're feeling {}\n",
        mood.category.emoji(),
        mood.category
    ));
    out.push_str(&format!("   {}\n", mood.category.description()));
    out.push_str(&format!("   Confidence: {}%\n", mood.confidence));
    out
}

pub fn bundle(bundle: &RecommendationBundle, show_recipes: bool) -> String {
    let mut out = String::new();

    out.push_str(&format!("\nMusic Playlists\n{}\n", rule()));
    for p in &bundle.playlists {
        out.push_str(&format!(
            "  {} [{}]\n    {} · {} tracks · {}\n",
            p.name, p.id, p.description, p.tracks, p.duration
        ));
        if let Some(url) = &p.spotify_url {
            out.push_str(&format!("    Spotify: {url}\n"));
        }
        if let Some(url) = &p.youtube_url {
            out.push_str(&format!("    YouTube: {url}\n"));
        }
    }

    out.push_str(&format!("\nAromatherapy\n{}\n", rule()));
    for s in &bundle.scents {
        out.push_str(&format!("  {} {}\n    {}\n", s.icon, s.name, s.benefits));
        if let (true, Some(recipe)) = (show_recipes, &s.diy_recipe) {
            out.push_str(&format!("    DIY recipe ({}):\n", recipe.duration));
            for ingredient in &recipe.ingredients {
                out.push_str(&format!("      • {ingredient}\n"));
            }
            for (i, step) in recipe.instructions.iter().enumerate() {
                out.push_str(&format!("      {}. {step}\n", i + 1));
            }
        }
    }

    out.push_str(&format!("\nMicro-Movements\n{}\n", rule()));
    for m in &bundle.movements {
        out.push_str(&format!(
            "  {} {} ({})\n    {}\n",
            m.icon, m.name, m.duration, m.description
        ));
    }

    out
}

pub fn profile(profile: &UserProfile) -> String {
    format!(
        "Vibe Points: {}  ·  Submissions: {}  ·  Day Streak: {}",
        profile.vibe_points, profile.total_submissions, profile.current_streak
    )
}
