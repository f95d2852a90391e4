//! Journal and category listing commands

use crate::display::{format_category_list, format_journal};
use crate::error::BoardsResult;
use crate::services::CategoryService;

use super::context::AppContext;

/// Print the most recent journal entries
pub fn handle_journal(ctx: &AppContext, limit: usize) -> BoardsResult<()> {
    let entries = ctx.journal().read_recent(limit)?;
    println!("{}", format_journal(&entries));
    Ok(())
}

pub fn handle_categories(ctx: &AppContext) -> BoardsResult<()> {
    let client = ctx.client()?;
    let categories = CategoryService::new(&client, &ctx.session).list()?;
    print!("{}", format_category_list(&categories));
    Ok(())
}
