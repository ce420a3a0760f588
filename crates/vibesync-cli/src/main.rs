use clap::{CommandFactory, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "vibesync", version, about = "VibeSync wellness companion CLI")]
struct Cli {
    /// Enable debug logging (overrides RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze your mood and get recommendations
    Analyze(commands::analyze::AnalyzeArgs),
    /// Show the recommendation bundle for a mood
    Recommend(commands::recommend::RecommendArgs),
    /// List the mood categories
    Moods,
    /// Play a playlist (simulated)
    Play {
        /// Playlist ID (e.g. "calm-tea-jazz")
        id: String,
    },
    /// Wellness kit actions
    Kit {
        #[command(subcommand)]
        action: commands::kit::KitAction,
    },
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
    /// Generate shell completions
    Completions {
        shell: clap_complete::Shell,
    },
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.command {
        Commands::Analyze(args) => commands::analyze::run(args),
        Commands::Recommend(args) => commands::recommend::run(args),
        Commands::Moods => commands::moods::run(),
        Commands::Play { id } => commands::play::run(&id),
        Commands::Kit { action } => commands::kit::run(action),
        Commands::Config { action } => commands::config::run(action),
        Commands::Completions { shell } => {
            clap_complete::generate(shell, &mut Cli::command(), "vibesync", &mut std::io::stdout());
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
