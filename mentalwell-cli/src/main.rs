use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;
mod logging;

#[derive(Parser)]
#[command(name = "mentalwell", about = "Mental wellness assessments in the terminal")]
#[command(version, propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Launch the terminal UI (default)
    Run(commands::run::RunArgs),
    /// Log in and store the session
    Login(commands::auth::LoginArgs),
    /// Create an account and store the session
    Signup(commands::auth::SignupArgs),
    /// Clear the stored session
    Logout,
    /// Show the stored session and assessment completion
    Status(commands::status::StatusArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or(Commands::Run(commands::run::RunArgs::default()));

    let filter = if cli.verbose { "debug" } else { "info" };
    match &command {
        // The full-screen UI owns the terminal; logs go to a file instead.
        Commands::Run(_) => logging::init_file_logging(filter)?,
        _ => tracing_subscriber::fmt().with_env_filter(filter).init(),
    }

    match command {
        Commands::Run(args) => commands::run::run(args).await,
        Commands::Login(args) => commands::auth::login(args).await,
        Commands::Signup(args) => commands::auth::signup(args).await,
        Commands::Logout => commands::auth::logout(),
        Commands::Status(args) => commands::status::run(args).await,
    }
}
