use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "cleanslate", version, about = "Cleanslate recovery tracker CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Manage tracked addictions
    Addiction {
        #[command(subcommand)]
        action: commands::addiction::AddictionAction,
    },
    /// Live progress for one addiction
    Progress(commands::progress::ProgressArgs),
    /// Show the level for a day count
    Level {
        /// Clean days
        days: u64,
    },
    /// Month calendar of relapse and success days
    Calendar(commands::calendar::CalendarArgs),
    /// Report statistics for one addiction
    Report {
        /// Addiction id (or unique prefix)
        id: String,
    },
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
    /// Crisis-support steps for one addiction
    Urgency {
        /// Addiction id (or unique prefix)
        id: String,
    },
    /// Ask the support assistant
    Chat(commands::chat::ChatArgs),
    /// Print a motivational quote
    Quote {
        /// Use the stable quote of the day
        #[arg(long)]
        today: bool,
    },
}

fn init_logging() {
    let filter =
        EnvFilter::try_from_env("CLEANSLATE_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    init_logging();

    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Addiction { action } => commands::addiction::run(action),
        Commands::Progress(args) => commands::progress::run(args),
        Commands::Level { days } => commands::progress::run_level(days),
        Commands::Calendar(args) => commands::calendar::run(args),
        Commands::Report { id } => commands::progress::run_report(&id),
        Commands::Config { action } => commands::config::run(action),
        Commands::Urgency { id } => commands::urgency::run(&id),
        Commands::Chat(args) => commands::chat::run(args),
        Commands::Quote { today } => commands::quote::run(today),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
