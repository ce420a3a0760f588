//! Built-in recommendation bundles, one per mood.
//!
//! The catalog is authored data. It is assembled on first use and shared
//! read-only for the rest of the process.

use std::collections::BTreeMap;
use std::sync::OnceLock;

use super::types::{
    DiyRecipe, MovementRecommendation, Playlist, RecommendationBundle, ScentRecommendation,
};
use crate::mood::MoodKind;

/// Immutable mapping from mood to bundle.
#[derive(Debug)]
pub struct Catalog {
    bundles: BTreeMap<MoodKind, RecommendationBundle>,
}

impl Catalog {
    fn build() -> Self {
        let bundles = MoodKind::ALL
            .into_iter()
            .map(|kind| (kind, bundle_for(kind)))
            .collect();
        Self { bundles }
    }

    /// Bundle for `kind`.
    ///
    /// Every `MoodKind` has an entry; a miss would be a broken catalog, so it
    /// degrades to an empty bundle rather than panicking.
    pub fn bundle(&self, kind: MoodKind) -> &RecommendationBundle {
        static EMPTY: RecommendationBundle = RecommendationBundle {
            playlists: Vec::new(),
            scents: Vec::new(),
            movements: Vec::new(),
        };
        self.bundles.get(&kind).unwrap_or(&EMPTY)
    }

    pub fn iter(&self) -> impl Iterator<Item = (MoodKind, &RecommendationBundle)> {
        self.bundles.iter().map(|(kind, bundle)| (*kind, bundle))
    }

    /// Find a playlist by id along with the mood it belongs to.
    pub fn find_playlist(&self, id: &str) -> Option<(MoodKind, &Playlist)> {
        self.iter()
            .find_map(|(kind, bundle)| bundle.playlist(id).map(|p| (kind, p)))
    }
}

/// The process-wide catalog.
pub fn catalog() -> &'static Catalog {
    static CATALOG: OnceLock<Catalog> = OnceLock::new();
    CATALOG.get_or_init(Catalog::build)
}

fn bundle_for(kind: MoodKind) -> RecommendationBundle {
    match kind {
        MoodKind::Stressed => stressed_bundle(),
        MoodKind::Calm => calm_bundle(),
        MoodKind::Energetic => energetic_bundle(),
        MoodKind::Focused => focused_bundle(),
        MoodKind::Creative => creative_bundle(),
    }
}

// ============================================================================
// BUILDERS
// ============================================================================

#[allow(clippy::too_many_arguments)]
fn playlist(
    id: &str,
    name: &str,
    description: &str,
    tracks: u32,
    duration: &str,
    image: &str,
    spotify_url: Option<&str>,
    youtube_url: Option<&str>,
) -> Playlist {
    Playlist {
        id: id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        tracks,
        duration: duration.to_string(),
        image: image.to_string(),
        spotify_url: spotify_url.map(str::to_string),
        youtube_url: youtube_url.map(str::to_string),
    }
}

fn scent(name: &str, benefits: &str, icon: &str, diy_recipe: Option<DiyRecipe>) -> ScentRecommendation {
    ScentRecommendation {
        name: name.to_string(),
        benefits: benefits.to_string(),
        icon: icon.to_string(),
        diy_recipe,
    }
}

fn recipe(ingredients: &[&str], instructions: &[&str], duration: &str) -> Option<DiyRecipe> {
    Some(DiyRecipe {
        ingredients: ingredients.iter().map(|s| s.to_string()).collect(),
        instructions: instructions.iter().map(|s| s.to_string()).collect(),
        duration: duration.to_string(),
    })
}

fn movement(name: &str, duration: &str, description: &str, icon: &str) -> MovementRecommendation {
    MovementRecommendation {
        name: name.to_string(),
        duration: duration.to_string(),
        description: description.to_string(),
        icon: icon.to_string(),
    }
}

// ============================================================================
// BUNDLES
// ============================================================================

/// Stressed: slow the breath, lower the shoulders.
fn stressed_bundle() -> RecommendationBundle {
    RecommendationBundle {
        playlists: vec![
            playlist(
                "stressed-rain-lofi",
                "Rainy Day Lo-Fi",
                "Soft beats layered over steady rainfall to quiet a racing mind",
                42,
                "2h 18m",
                "images/playlists/rainy-lofi.jpg",
                Some("https://open.spotify.com/search/rainy%20lofi"),
                Some("https://www.youtube.com/results?search_query=rainy+lofi"),
            ),
            playlist(
                "stressed-ocean-ambient",
                "Ocean Breathing",
                "Slow ambient swells paced at six breaths per minute",
                18,
                "1h 24m",
                "images/playlists/ocean-ambient.jpg",
                None,
                Some("https://www.youtube.com/results?search_query=ocean+ambient+breathing"),
            ),
            playlist(
                "stressed-piano-unwind",
                "Gentle Piano Unwind",
                "Sparse solo piano for letting the day settle",
                30,
                "1h 52m",
                "images/playlists/piano-unwind.jpg",
                Some("https://open.spotify.com/search/calm%20piano"),
                None,
            ),
        ],
        scents: vec![
            scent(
                "Lavender",
                "Lowers heart rate and eases anxious tension",
                "🪻",
                recipe(
                    &[
                        "5 drops lavender essential oil",
                        "2 drops chamomile essential oil",
                        "100 ml distilled water",
                    ],
                    &[
                        "Fill the diffuser with distilled water",
                        "Add the lavender and chamomile drops",
                        "Run the diffuser on low while you breathe slowly",
                    ],
                    "30 minutes",
                ),
            ),
            scent(
                "Bergamot",
                "Bright citrus note that lifts mood without overstimulating",
                "🍊",
                recipe(
                    &[
                        "4 drops bergamot essential oil",
                        "1 tablespoon jojoba oil",
                        "Small glass roller bottle",
                    ],
                    &[
                        "Pour the jojoba oil into the roller bottle",
                        "Add the bergamot drops and close the cap",
                        "Roll gently and apply to wrists and temples",
                    ],
                    "5 minutes",
                ),
            ),
            scent(
                "Frankincense",
                "Grounding resin scent that encourages slower, deeper breaths",
                "🕯️",
                None,
            ),
        ],
        movements: vec![
            movement(
                "Box Breathing",
                "4 minutes",
                "Inhale for four counts, hold for four, exhale for four, hold for four",
                "🫁",
            ),
            movement(
                "Shoulder Release",
                "3 minutes",
                "Roll shoulders backwards ten times, then drop them away from the ears",
                "💆",
            ),
            movement(
                "Child's Pose",
                "2 minutes",
                "Kneel, fold forward with arms extended and let the back lengthen",
                "🧘",
            ),
        ],
    }
}

/// Calm: sustain the quiet.
fn calm_bundle() -> RecommendationBundle {
    RecommendationBundle {
        playlists: vec![
            playlist(
                "calm-forest-morning",
                "Forest Morning",
                "Birdsong, wind through leaves and warm acoustic guitar",
                25,
                "1h 36m",
                "images/playlists/forest-morning.jpg",
                Some("https://open.spotify.com/search/forest%20acoustic"),
                Some("https://www.youtube.com/results?search_query=forest+morning+acoustic"),
            ),
            playlist(
                "calm-tea-jazz",
                "Slow Sunday Jazz",
                "Brushed drums and mellow saxophone for an unhurried afternoon",
                36,
                "2h 05m",
                "images/playlists/tea-jazz.jpg",
                Some("https://open.spotify.com/search/slow%20jazz"),
                None,
            ),
            playlist(
                "calm-singing-bowls",
                "Singing Bowls",
                "Resonant Tibetan bowls for mindful stillness",
                12,
                "58m",
                "images/playlists/singing-bowls.jpg",
                None,
                Some("https://www.youtube.com/results?search_query=singing+bowls+meditation"),
            ),
        ],
        scents: vec![
            scent(
                "Sandalwood",
                "Warm woody base that deepens a relaxed, meditative state",
                "🪵",
                recipe(
                    &[
                        "3 drops sandalwood essential oil",
                        "2 drops cedarwood essential oil",
                        "100 ml distilled water",
                    ],
                    &[
                        "Fill the diffuser with distilled water",
                        "Add the sandalwood and cedarwood drops",
                        "Diffuse in a quiet room with soft lighting",
                    ],
                    "45 minutes",
                ),
            ),
            scent(
                "Chamomile",
                "Soft herbal sweetness that keeps the body at ease",
                "🌼",
                None,
            ),
            scent(
                "Ylang Ylang",
                "Floral note associated with contentment and steady breathing",
                "🌸",
                recipe(
                    &[
                        "2 drops ylang ylang essential oil",
                        "3 drops lavender essential oil",
                        "1 cup Epsom salt",
                    ],
                    &[
                        "Mix the oils into the Epsom salt",
                        "Dissolve the salt in a warm bath",
                        "Soak and breathe deeply",
                    ],
                    "20 minutes",
                ),
            ),
        ],
        movements: vec![
            movement(
                "Gentle Neck Stretches",
                "3 minutes",
                "Tilt the head slowly side to side, holding each stretch for five breaths",
                "🙆",
            ),
            movement(
                "Mindful Walking",
                "10 minutes",
                "Walk slowly and notice each footstep and the air on your skin",
                "🚶",
            ),
            movement(
                "Seated Forward Fold",
                "2 minutes",
                "Sit with legs extended and fold gently over them, spine long",
                "🧘",
            ),
        ],
    }
}

/// Energetic: channel it.
fn energetic_bundle() -> RecommendationBundle {
    RecommendationBundle {
        playlists: vec![
            playlist(
                "energetic-power-hour",
                "Power Hour",
                "High-tempo pop and dance anthems to keep momentum going",
                50,
                "2h 45m",
                "images/playlists/power-hour.jpg",
                Some("https://open.spotify.com/search/power%20workout"),
                Some("https://www.youtube.com/results?search_query=power+workout+mix"),
            ),
            playlist(
                "energetic-funk-groove",
                "Funk Groove",
                "Bass-heavy funk and disco for movement breaks",
                34,
                "2h 02m",
                "images/playlists/funk-groove.jpg",
                Some("https://open.spotify.com/search/funk%20groove"),
                None,
            ),
            playlist(
                "energetic-indie-sunrise",
                "Indie Sunrise",
                "Upbeat indie rock with bright guitars",
                28,
                "1h 41m",
                "images/playlists/indie-sunrise.jpg",
                None,
                Some("https://www.youtube.com/results?search_query=upbeat+indie+mix"),
            ),
        ],
        scents: vec![
            scent(
                "Peppermint",
                "Cooling, sharp scent that sustains alertness and stamina",
                "🌿",
                recipe(
                    &[
                        "4 drops peppermint essential oil",
                        "2 drops eucalyptus essential oil",
                        "100 ml distilled water",
                    ],
                    &[
                        "Fill the diffuser with distilled water",
                        "Add the peppermint and eucalyptus drops",
                        "Diffuse near your workout or work space",
                    ],
                    "30 minutes",
                ),
            ),
            scent(
                "Grapefruit",
                "Zesty citrus that pairs with an upbeat mood",
                "🍋",
                None,
            ),
            scent(
                "Rosemary",
                "Herbal note linked to vigor and clear thinking",
                "🌱",
                recipe(
                    &[
                        "3 drops rosemary essential oil",
                        "2 drops lemon essential oil",
                        "50 ml witch hazel",
                        "Small spray bottle",
                    ],
                    &[
                        "Pour the witch hazel into the spray bottle",
                        "Add the rosemary and lemon drops",
                        "Shake well and mist the room",
                    ],
                    "5 minutes",
                ),
            ),
        ],
        movements: vec![
            movement(
                "Jumping Jacks",
                "2 minutes",
                "Three rounds of thirty seconds on, ten seconds rest",
                "🤸",
            ),
            movement(
                "Dance Break",
                "5 minutes",
                "Put on one song and move however feels good",
                "💃",
            ),
            movement(
                "Stair Sprint",
                "4 minutes",
                "Climb a flight of stairs briskly, walk down slowly, repeat",
                "🏃",
            ),
        ],
    }
}

/// Focused: protect attention.
fn focused_bundle() -> RecommendationBundle {
    RecommendationBundle {
        playlists: vec![
            playlist(
                "focused-deep-focus",
                "Deep Focus",
                "Minimal electronic textures without vocals",
                60,
                "3h 30m",
                "images/playlists/deep-focus.jpg",
                Some("https://open.spotify.com/search/deep%20focus"),
                Some("https://www.youtube.com/results?search_query=deep+focus+music"),
            ),
            playlist(
                "focused-classical-study",
                "Classical Study",
                "Baroque and early classical pieces at a steady tempo",
                45,
                "3h 05m",
                "images/playlists/classical-study.jpg",
                Some("https://open.spotify.com/search/classical%20study"),
                None,
            ),
            playlist(
                "focused-brown-noise",
                "Brown Noise",
                "Low, even noise that masks office and cafe chatter",
                8,
                "2h 00m",
                "images/playlists/brown-noise.jpg",
                None,
                Some("https://www.youtube.com/results?search_query=brown+noise"),
            ),
        ],
        scents: vec![
            scent(
                "Rosemary",
                "Supports memory and sustained concentration",
                "🌱",
                recipe(
                    &[
                        "3 drops rosemary essential oil",
                        "2 drops peppermint essential oil",
                        "100 ml distilled water",
                    ],
                    &[
                        "Fill the diffuser with distilled water",
                        "Add the rosemary and peppermint drops",
                        "Diffuse at your desk for the length of one work block",
                    ],
                    "50 minutes",
                ),
            ),
            scent(
                "Lemon",
                "Clean citrus that sharpens attention",
                "🍋",
                None,
            ),
            scent(
                "Cedarwood",
                "Steady woody scent for calm, sustained effort",
                "🌲",
                recipe(
                    &[
                        "3 drops cedarwood essential oil",
                        "1 drop vetiver essential oil",
                        "Clay diffuser stone",
                    ],
                    &[
                        "Drip the oils onto the clay stone",
                        "Place the stone beside your keyboard",
                        "Refresh with one drop of cedarwood when the scent fades",
                    ],
                    "2 hours",
                ),
            ),
        ],
        movements: vec![
            movement(
                "20-20-20 Eye Break",
                "1 minute",
                "Every twenty minutes look at something twenty feet away for twenty seconds",
                "👀",
            ),
            movement(
                "Desk Stretch",
                "3 minutes",
                "Interlace fingers overhead, reach up, then lean gently left and right",
                "🙆",
            ),
            movement(
                "Wrist Circles",
                "1 minute",
                "Circle each wrist ten times in both directions",
                "✋",
            ),
        ],
    }
}

/// Creative: loosen up, follow curiosity.
fn creative_bundle() -> RecommendationBundle {
    RecommendationBundle {
        playlists: vec![
            playlist(
                "creative-dreamy-synth",
                "Dreamy Synthwave",
                "Warm retro synths for sketching and brainstorming",
                38,
                "2h 20m",
                "images/playlists/dreamy-synth.jpg",
                Some("https://open.spotify.com/search/dreamy%20synthwave"),
                Some("https://www.youtube.com/results?search_query=dreamy+synthwave"),
            ),
            playlist(
                "creative-world-fusion",
                "World Fusion",
                "Global rhythms and unexpected instrument pairings",
                32,
                "2h 08m",
                "images/playlists/world-fusion.jpg",
                Some("https://open.spotify.com/search/world%20fusion"),
                None,
            ),
            playlist(
                "creative-cinematic",
                "Cinematic Horizons",
                "Sweeping film scores to imagine bigger ideas",
                26,
                "1h 48m",
                "images/playlists/cinematic.jpg",
                None,
                Some("https://www.youtube.com/results?search_query=cinematic+score+mix"),
            ),
        ],
        scents: vec![
            scent(
                "Jasmine",
                "Rich floral note linked to inspiration and confidence",
                "🌺",
                recipe(
                    &[
                        "3 drops jasmine absolute",
                        "2 drops sweet orange essential oil",
                        "100 ml distilled water",
                    ],
                    &[
                        "Fill the diffuser with distilled water",
                        "Add the jasmine and sweet orange drops",
                        "Diffuse while you sketch, write or play",
                    ],
                    "40 minutes",
                ),
            ),
            scent(
                "Sweet Orange",
                "Playful citrus that encourages open, loose thinking",
                "🍊",
                recipe(
                    &[
                        "5 drops sweet orange essential oil",
                        "1 drop vanilla extract",
                        "Cotton pad",
                    ],
                    &[
                        "Drip the orange oil and vanilla onto the cotton pad",
                        "Tuck the pad into a small bowl on your workspace",
                    ],
                    "1 hour",
                ),
            ),
            scent(
                "Clary Sage",
                "Herbal, slightly sweet scent that eases creative blocks",
                "🌾",
                None,
            ),
        ],
        movements: vec![
            movement(
                "Free-Form Dance",
                "5 minutes",
                "Move without a plan and let the music lead",
                "💃",
            ),
            movement(
                "Sun Salutation",
                "6 minutes",
                "Flow through three rounds of sun salutations to reset perspective",
                "🌞",
            ),
            movement(
                "Doodle Walk",
                "10 minutes",
                "Take a notebook outside and sketch whatever catches your eye",
                "✏️",
            ),
        ],
    }
}
