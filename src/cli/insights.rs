//! Insight CLI commands

use chrono::{Datelike, Utc};
use clap::Subcommand;

use crate::display::{format_analytics, format_health, format_recommendations};
use crate::error::BoardsResult;
use crate::services::InsightService;

use super::context::AppContext;

/// Insight subcommands
#[derive(Subcommand)]
pub enum InsightCommands {
    /// Show recommendations and budget insights
    Recommendations,

    /// Show the budget health score
    Health,

    /// Show spending per category for a month
    Analytics {
        /// Month (1-12), defaults to the current month
        #[arg(short, long)]
        month: Option<u32>,
        /// Year, defaults to the current year
        #[arg(short, long)]
        year: Option<i32>,
    },
}

/// Handle an insights command
pub fn handle_insight_command(ctx: &AppContext, cmd: InsightCommands) -> BoardsResult<()> {
    let client = ctx.client()?;
    let service = InsightService::new(&client, &ctx.session);

    match cmd {
        InsightCommands::Recommendations => {
            print!("{}", format_recommendations(&service.recommendations()?, ctx.symbol()));
        }
        InsightCommands::Health => {
            print!("{}", format_health(&service.health()?));
        }
        InsightCommands::Analytics { month, year } => {
            let today = Utc::now().date_naive();
            let month = month.unwrap_or(today.month());
            let year = year.unwrap_or(today.year());
            let analytics = service.analytics(year, month)?;
            print!("{}", format_analytics(&analytics, year, month, ctx.symbol()));
        }
    }

    Ok(())
}
