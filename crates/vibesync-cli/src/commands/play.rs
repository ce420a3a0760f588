//! Simulated playback. No music service is contacted.

use vibesync_core::{find_playlist, Config, NotificationKind};

pub fn run(id: &str) -> Result<(), Box<dyn std::error::Error>> {
    let session = Config::load_or_default().session()?;
    let note = session.play_by_id(id);
    if note.kind == NotificationKind::Warning {
        return Err(format!("{}. See `vibesync recommend <mood>`", note.message).into());
    }
    println!("{}", note.message);

    if let Some((kind, playlist)) = find_playlist(id) {
        println!(
            "  {} · {} tracks · {} ({kind} mix)",
            playlist.description, playlist.tracks, playlist.duration
        );
        if let Some(url) = playlist.spotify_url.as_ref().or(playlist.youtube_url.as_ref()) {
            println!("  Listen: {url}");
        }
    }
    Ok(())
}
