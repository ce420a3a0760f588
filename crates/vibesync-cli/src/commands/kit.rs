use clap::Subcommand;
use vibesync_core::Config;

use super::render;

#[derive(Subcommand)]
pub enum KitAction {
    /// Order a curated wellness kit (simulated)
    Order,
}

pub fn run(action: KitAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        KitAction::Order => {
            let mut session = Config::load_or_default().session()?;
            let note = session.order_kit();
            println!("{}", note.message);
            println!("{}", render::profile(session.profile()));
        }
    }
    Ok(())
}
