//! Goal CLI commands

use chrono::{Datelike, Utc};
use clap::{Subcommand, ValueEnum};

use crate::display::format_goal_list;
use crate::error::{BoardsError, BoardsResult};
use crate::models::{GoalId, GoalKind, GoalSpec, ReferencePeriod};
use crate::services::{CategoryService, GoalChanges, GoalService, InsightService};

use super::context::AppContext;

#[derive(Clone, Copy, ValueEnum)]
pub enum KindArg {
    Fixed,
    Percentage,
    Relative,
}

impl From<KindArg> for GoalKind {
    fn from(arg: KindArg) -> Self {
        match arg {
            KindArg::Fixed => GoalKind::Fixed,
            KindArg::Percentage => GoalKind::Percentage,
            KindArg::Relative => GoalKind::Relative,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
pub enum ReferenceArg {
    PreviousMonth,
    PreviousYear,
}

impl From<ReferenceArg> for ReferencePeriod {
    fn from(arg: ReferenceArg) -> Self {
        match arg {
            ReferenceArg::PreviousMonth => ReferencePeriod::PreviousMonth,
            ReferenceArg::PreviousYear => ReferencePeriod::PreviousYear,
        }
    }
}

/// Goal subcommands
#[derive(Subcommand)]
pub enum GoalCommands {
    /// List goals with their progress
    List,

    /// Create a goal for a category
    Create {
        /// Category name or ID
        category: String,
        /// Amount, or percentage for percentage/relative goals
        amount: f64,
        #[arg(short, long, value_enum, default_value = "fixed")]
        kind: KindArg,
        /// Period a relative goal compares against
        #[arg(short, long, value_enum)]
        reference: Option<ReferenceArg>,
        /// Month (1-12), defaults to the current month
        #[arg(short, long)]
        month: Option<u32>,
        /// Year, defaults to the current year
        #[arg(short, long)]
        year: Option<i32>,
        /// Create the goal switched off
        #[arg(long)]
        inactive: bool,
    },

    /// Change an existing goal
    Update {
        /// Goal ID
        goal: String,
        #[arg(short, long)]
        amount: Option<f64>,
        #[arg(short, long, value_enum)]
        kind: Option<KindArg>,
        #[arg(short, long, value_enum)]
        reference: Option<ReferenceArg>,
        #[arg(short, long)]
        month: Option<u32>,
        #[arg(short, long)]
        year: Option<i32>,
        /// Switch the goal on
        #[arg(long, conflicts_with = "deactivate")]
        activate: bool,
        /// Switch the goal off
        #[arg(long)]
        deactivate: bool,
    },

    /// Delete a goal
    Delete {
        /// Goal ID
        goal: String,
    },

    /// Show progress for one goal
    Progress {
        /// Goal ID
        goal: String,
    },

    /// Turn a recommendation into a fixed goal
    Adopt {
        /// Recommendation number as shown by 'boards insights recommendations'
        number: usize,
        #[arg(short, long)]
        month: Option<u32>,
        #[arg(short, long)]
        year: Option<i32>,
    },
}

/// Handle a goal command
pub fn handle_goal_command(ctx: &AppContext, cmd: GoalCommands) -> BoardsResult<()> {
    let client = ctx.client()?;
    let service = GoalService::new(&client, &ctx.session);
    let today = Utc::now().date_naive();

    match cmd {
        GoalCommands::List => {
            let rows = service.list_with_progress()?;
            let categories = CategoryService::new(&client, &ctx.session)
                .list()
                .unwrap_or_default();
            print!("{}", format_goal_list(&rows, &categories, ctx.symbol()));
        }

        GoalCommands::Create {
            category,
            amount,
            kind,
            reference,
            month,
            year,
            inactive,
        } => {
            let category = CategoryService::new(&client, &ctx.session).find(&category)?;
            let spec = GoalSpec {
                category_id: category.id,
                kind: kind.into(),
                amount,
                reference_period: reference.map(Into::into),
                month: month.unwrap_or(today.month()),
                year: year.unwrap_or(today.year()),
                is_active: !inactive,
            };

            let goal = service.create(&spec)?;
            println!(
                "Created goal #{} for {}: {}",
                goal.id,
                category.name,
                goal.spec.target_description(ctx.symbol())
            );
        }

        GoalCommands::Update {
            goal,
            amount,
            kind,
            reference,
            month,
            year,
            activate,
            deactivate,
        } => {
            let changes = GoalChanges {
                kind: kind.map(Into::into),
                amount,
                reference_period: reference.map(Into::into),
                month,
                year,
                is_active: match (activate, deactivate) {
                    (true, _) => Some(true),
                    (_, true) => Some(false),
                    _ => None,
                },
            };

            let goal = service.revise(parse_goal_id(&goal)?, &changes)?;
            println!(
                "Updated goal #{}: {}",
                goal.id,
                goal.spec.target_description(ctx.symbol())
            );
        }

        GoalCommands::Delete { goal } => {
            let id = parse_goal_id(&goal)?;
            service.delete(id)?;
            println!("Deleted goal #{}", id);
        }

        GoalCommands::Progress { goal } => {
            let progress = service.progress(parse_goal_id(&goal)?)?;
            println!("{}", crate::display::goal::format_progress_line(&progress));
            if let (Some(current), Some(target)) = (progress.current_amount, progress.target_amount) {
                println!(
                    "Spent {sym}{:.2} of {sym}{:.2}",
                    current,
                    target,
                    sym = ctx.symbol()
                );
            }
        }

        GoalCommands::Adopt {
            number,
            month,
            year,
        } => {
            let report = InsightService::new(&client, &ctx.session).recommendations()?;
            let recommendation = number
                .checked_sub(1)
                .and_then(|i| report.recommendations.get(i))
                .ok_or_else(|| BoardsError::NotFound {
                    entity_type: "Recommendation",
                    identifier: number.to_string(),
                })?;

            let goal = service.adopt_recommendation(
                recommendation,
                year.unwrap_or(today.year()),
                month.unwrap_or(today.month()),
            )?;
            println!(
                "Created goal #{} from '{}': {}",
                goal.id,
                recommendation.title,
                goal.spec.target_description(ctx.symbol())
            );
        }
    }

    Ok(())
}

fn parse_goal_id(s: &str) -> BoardsResult<GoalId> {
    s.parse()
        .map_err(|e| BoardsError::Validation(format!("Invalid goal ID '{}': {}", s, e)))
}
