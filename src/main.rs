use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use budget_boards::cli::{
    handle_board_command, handle_categories, handle_entry_command, handle_goal_command,
    handle_insight_command, handle_journal, handle_login, handle_logout, handle_status,
    handle_sync, AppContext, BoardCommands, EntryCommands, GoalCommands, InsightCommands,
};
use budget_boards::config::BoardsPaths;

#[derive(Parser)]
#[command(
    name = "boards",
    version,
    about = "Board-based budgeting synced with your budget service",
    long_about = "Budget Boards organizes credits and debits into ordered boards tied to \
                  categories. Changes are saved locally first and then synced with the \
                  remote budget service."
)]
struct Cli {
    /// Log sync activity to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Save an API token (prompted for when omitted)
    Login {
        /// Bearer token; prefer the prompt so it stays out of shell history
        #[arg(long)]
        token: Option<String>,
    },

    /// Forget the token and cached boards
    Logout,

    /// Show configuration, session and cache state
    Status,

    /// Reload boards from the server
    Sync,

    /// Board management commands
    #[command(subcommand)]
    Board(BoardCommands),

    /// Entry management commands
    #[command(subcommand)]
    Entry(EntryCommands),

    /// List categories
    Categories,

    /// Budget goal commands
    #[command(subcommand)]
    Goal(GoalCommands),

    /// Recommendations, health score and analytics
    #[command(subcommand)]
    Insights(InsightCommands),

    /// Show recent sync journal entries
    Journal {
        /// Number of entries to show
        #[arg(short, long, default_value = "20")]
        limit: usize,
    },
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("budget_boards=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("budget_boards=warn"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let paths = BoardsPaths::new()?;
    let ctx = AppContext::load(paths)?;

    match cli.command {
        Some(Commands::Login { token }) => handle_login(&ctx, token)?,
        Some(Commands::Logout) => handle_logout(&ctx)?,
        Some(Commands::Status) => handle_status(&ctx)?,
        Some(Commands::Sync) => handle_sync(&ctx)?,
        Some(Commands::Board(cmd)) => handle_board_command(&ctx, cmd)?,
        Some(Commands::Entry(cmd)) => handle_entry_command(&ctx, cmd)?,
        Some(Commands::Categories) => handle_categories(&ctx)?,
        Some(Commands::Goal(cmd)) => handle_goal_command(&ctx, cmd)?,
        Some(Commands::Insights(cmd)) => handle_insight_command(&ctx, cmd)?,
        Some(Commands::Journal { limit }) => handle_journal(&ctx, limit)?,
        None => {
            println!("Budget Boards - board-based budgeting");
            println!();
            println!("Run 'boards --help' for usage information.");
            println!("Run 'boards login' to connect to your budget service.");
        }
    }

    Ok(())
}
