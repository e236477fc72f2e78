use clap::{CommandFactory, Parser, Subcommand};
use studysprint_core::Config;
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "studysprint", version, about = "Study Sprint focus timer")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Focus timer control
    Timer {
        #[command(subcommand)]
        action: commands::timer::TimerAction,
    },
    /// Break countdown control
    Break {
        #[command(subcommand)]
        action: commands::breaks::BreakAction,
    },
    /// Session bookkeeping
    Session {
        #[command(subcommand)]
        action: commands::session::SessionAction,
    },
    /// Task list management
    Task {
        #[command(subcommand)]
        action: commands::task::TaskAction,
    },
    /// Study notes for the current session
    Notes {
        #[command(subcommand)]
        action: commands::notes::NotesAction,
    },
    /// Theme, sound and vibration settings
    Settings {
        #[command(subcommand)]
        action: commands::settings::SettingsAction,
    },
    /// Session statistics
    Stats {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
    /// Print shell completions
    Completions {
        /// Target shell
        shell: clap_complete::Shell,
    },
}

fn init_logging() {
    // The subscriber is not installed yet, so config problems go to stderr
    // directly. Nothing is written to disk here.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        let level = match Config::read_existing() {
            Ok(Some(cfg)) => cfg.logging.level,
            Ok(None) => Config::default().logging.level,
            Err(e) => {
                eprintln!("warning: {e}; using default log level");
                Config::default().logging.level
            }
        };
        EnvFilter::try_new(&level).unwrap_or_else(|_| EnvFilter::new("warn"))
    });
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn main() {
    let cli = Cli::parse();
    init_logging();

    let result = match cli.command {
        Commands::Timer { action } => commands::timer::run(action),
        Commands::Break { action } => commands::breaks::run(action),
        Commands::Session { action } => commands::session::run(action),
        Commands::Task { action } => commands::task::run(action),
        Commands::Notes { action } => commands::notes::run(action),
        Commands::Settings { action } => commands::settings::run(action),
        Commands::Stats { json } => commands::stats::run(json),
        Commands::Config { action } => commands::config::run(action),
        Commands::Completions { shell } => {
            clap_complete::generate(
                shell,
                &mut Cli::command(),
                "studysprint",
                &mut std::io::stdout(),
            );
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
