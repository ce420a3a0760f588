use clap::Args;
use vibesync_core::{recommend_label, Config, MoodKind};

use super::render;

#[derive(Args)]
pub struct RecommendArgs {
    /// Mood category (stressed, calm, energetic, focused, creative)
    category: String,
    /// Output JSON
    #[arg(long)]
    json: bool,
}

pub fn run(args: RecommendArgs) -> Result<(), Box<dyn std::error::Error>> {
    let bundle = recommend_label(&args.category);

    if args.json {
        println!("{}", serde_json::to_string_pretty(bundle)?);
        return Ok(());
    }

    let kind = MoodKind::parse_or_default(&args.category);
    let config = Config::load_or_default();
    println!("{} Recommendations for {}", kind.emoji(), kind);
    print!("{}", render::bundle(bundle, config.ui.show_recipes));
    Ok(())
}
