//! Login, logout, status and sync

use tracing::warn;

use crate::display::format_board_tree;
use crate::error::{BoardsError, BoardsResult};
use crate::services::CategoryService;
use crate::session::Session;

use super::context::AppContext;

/// Store a token, prompting for it when not given
pub fn handle_login(ctx: &AppContext, token: Option<String>) -> BoardsResult<()> {
    let token = match token {
        Some(token) => token,
        None => rpassword::prompt_password("API token: ")
            .map_err(|e| BoardsError::Io(format!("Failed to read token: {}", e)))?,
    };

    let mut session = Session::with_token(token);
    if !session.is_authenticated() {
        return Err(BoardsError::Validation("Token cannot be empty".into()));
    }

    let client = ctx.client()?;
    match client.current_user(session.bearer()?) {
        Ok(profile) => {
            if let Some(name) = profile.full_name().or(profile.email) {
                session.set_display_name(name);
            }
        }
        Err(BoardsError::Server { status, body }) if status == 401 || status == 403 => {
            return Err(BoardsError::Server { status, body });
        }
        Err(e) => warn!("could not verify token, saving it anyway: {}", e),
    }

    session.save(&ctx.store)?;
    match session.display_name() {
        Some(name) => println!("Logged in as {}", name),
        None => println!("Token saved."),
    }
    Ok(())
}

/// Forget the token and the cached boards
pub fn handle_logout(ctx: &AppContext) -> BoardsResult<()> {
    Session::clear(&ctx.store)?;
    ctx.cache().clear()?;
    println!("Logged out.");
    Ok(())
}

pub fn handle_status(ctx: &AppContext) -> BoardsResult<()> {
    println!("Budget Boards");
    println!("=============");
    println!("Data directory: {}", ctx.paths.base_dir().display());
    println!("API:            {}", ctx.settings.api_base_url);

    let who = match (ctx.session.is_authenticated(), ctx.session.display_name()) {
        (true, Some(name)) => format!("logged in as {}", name),
        (true, None) => "logged in".to_string(),
        (false, _) => "not logged in".to_string(),
    };
    println!("Session:        {}", who);

    let cached = ctx.cache().load();
    let entries: usize = cached.iter().map(|b| b.entries.len()).sum();
    println!("Cached:         {} boards, {} entries", cached.len(), entries);

    if ctx.settings.journal_enabled {
        println!("Journal:        {}", ctx.paths.journal_file().display());
    }
    Ok(())
}

/// Reload boards from the server and show them
pub fn handle_sync(ctx: &AppContext) -> BoardsResult<()> {
    let client = ctx.client()?;
    let mut store = ctx.board_store(&client);
    let count = store.load()?;

    match CategoryService::new(&client, &ctx.session).list() {
        Ok(categories) => {
            store.annotate_categories(&categories);
        }
        Err(e) => warn!("could not fetch categories: {}", e),
    }

    println!("Synced {} boards.\n", count);
    print!("{}", format_board_tree(store.boards(), ctx.symbol()));
    Ok(())
}
