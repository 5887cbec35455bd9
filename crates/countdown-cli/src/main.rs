use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use countdown_core::storage::StorageBackend;

mod commands;
mod common;

#[derive(Parser)]
#[command(name = "countdown", version, about = "Countdown to a date, from the terminal")]
struct Cli {
    /// Persistence backend (defaults to `storage.backend` from config)
    #[arg(long, global = true, value_enum)]
    backend: Option<BackendArg>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, ValueEnum)]
enum BackendArg {
    File,
    Sqlite,
}

impl From<BackendArg> for StorageBackend {
    fn from(arg: BackendArg) -> Self {
        match arg {
            BackendArg::File => StorageBackend::File,
            BackendArg::Sqlite => StorageBackend::Sqlite,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Set the countdown target
    Set(commands::countdown::SetArgs),
    /// Print the current countdown frame as JSON
    Status,
    /// Forget the stored countdown
    Clear,
    /// Print a shareable link for the stored countdown
    Share {
        /// Base URL (defaults to `share.base_url` from config)
        #[arg(long)]
        base_url: Option<String>,
    },
    /// Store the countdown carried by a share link
    Open {
        /// Link produced by `share`
        url: String,
    },
    /// Live countdown until the target is reached (Ctrl-C to stop)
    Watch {
        /// Emit one JSON tick event per frame instead of a text line
        #[arg(long)]
        json: bool,
    },
    /// Fixed-length pomodoro session
    Pomodoro {
        #[command(subcommand)]
        action: commands::pomodoro::PomodoroAction,
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

fn main() {
    common::init_tracing();

    let cli = Cli::parse();
    let backend = cli.backend.map(StorageBackend::from);
    let result = match cli.command {
        Commands::Set(args) => commands::countdown::set(args, backend),
        Commands::Status => commands::countdown::status(backend),
        Commands::Clear => commands::countdown::clear(backend),
        Commands::Share { base_url } => commands::share::share(base_url, backend),
        Commands::Open { url } => commands::share::open(&url, backend),
        Commands::Watch { json } => commands::watch::run(json, backend),
        Commands::Pomodoro { action } => commands::pomodoro::run(action, backend),
        Commands::Config { action } => commands::config::run(action),
        Commands::Completions { shell } => {
            clap_complete::generate(shell, &mut Cli::command(), "countdown", &mut std::io::stdout());
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
