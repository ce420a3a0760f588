//! Mood analysis: questionnaire in, mood card and recommendations out.

use std::time::Duration;

use clap::Args;
use serde::Serialize;
use vibesync_core::{
    Activity, Config, EnergyLevel, MoodCategory, MoodInput, Notification, RecommendationBundle,
    UserProfile,
};

use super::render;

#[derive(Args)]
pub struct AnalyzeArgs {
    /// Stress level, 0-10 (values outside are clamped)
    #[arg(long, allow_negative_numbers = true)]
    stress: i64,
    /// Energy level: low, medium or high
    #[arg(long)]
    energy: String,
    /// Current activity (studying, working, relaxing, exercising, socializing,
    /// creative, commuting, cooking, cleaning, reading)
    #[arg(long)]
    activity: String,
    /// Output JSON
    #[arg(long)]
    json: bool,
    /// Skip the simulated analysis delay
    #[arg(long)]
    instant: bool,
}

#[derive(Serialize)]
struct AnalyzeOutput<'a> {
    mood: MoodCategory,
    recommendations: &'a RecommendationBundle,
    profile: &'a UserProfile,
    notification: &'a Notification,
}

pub fn run(args: AnalyzeArgs) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load_or_default();
    let mut session = config.session()?;

    let input = MoodInput::new(
        args.stress,
        EnergyLevel::parse_or_default(&args.energy),
        Activity::parse_or_default(&args.activity),
    );
    tracing::debug!(?input, "parsed questionnaire");

    if !args.instant && config.ui.analysis_delay_ms > 0 {
        if !args.json {
            println!("Analyzing your vibe...");
        }
        std::thread::sleep(Duration::from_millis(config.ui.analysis_delay_ms));
    }

    let submission = session.submit(&input);

    if args.json {
        let output = AnalyzeOutput {
            mood: submission.mood,
            recommendations: submission.recommendations,
            profile: session.profile(),
            notification: &submission.notification,
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    print!("{}", render::mood_card(&submission.mood));
    print!(
        "{}",
        render::bundle(submission.recommendations, config.ui.show_recipes)
    );
    println!("\n{}", render::rule());
    println!("{}", submission.notification.message);
    println!("{}", render::profile(session.profile()));

    Ok(())
}
