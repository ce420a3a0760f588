use vibesync_core::{recommend, MoodKind};

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    println!("Mood Categories:");
    println!();

    for kind in MoodKind::ALL {
        let bundle = recommend(kind);
        println!("  {} {}", kind.emoji(), kind);
        println!("    {}", kind.description());
        println!(
            "    {} playlists · {} scents · {} movements",
            bundle.playlists.len(),
            bundle.scents.len(),
            bundle.movements.len()
        );
        println!();
    }

    Ok(())
}
