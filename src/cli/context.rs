//! Shared state for CLI commands
//!
//! Resolves paths, settings and the stored session once, and hands out the
//! API client and board store the command handlers need.

use tracing::debug;

use crate::api::ApiClient;
use crate::config::{BoardsPaths, Settings};
use crate::error::{BoardsError, BoardsResult};
use crate::journal::SyncJournal;
use crate::models::{Board, BoardId};
use crate::session::Session;
use crate::storage::{BoardCache, FileStore};
use crate::sync::BoardStore;

/// Everything a command handler needs from the environment
pub struct AppContext {
    pub paths: BoardsPaths,
    pub settings: Settings,
    pub store: FileStore,
    pub session: Session,
}

impl AppContext {
    pub fn load(paths: BoardsPaths) -> BoardsResult<Self> {
        paths.ensure_directories()?;
        let settings = Settings::load_or_create(&paths)?;
        let store = FileStore::new(paths.cache_dir());
        let session = Session::load(&store)?;

        debug!(
            base_dir = %paths.base_dir().display(),
            api = %settings.api_base_url,
            authenticated = session.is_authenticated(),
            "context loaded"
        );

        Ok(Self {
            paths,
            settings,
            store,
            session,
        })
    }

    pub fn client(&self) -> BoardsResult<ApiClient> {
        ApiClient::from_settings(&self.settings)
    }

    pub fn journal(&self) -> SyncJournal {
        SyncJournal::new(self.paths.journal_file())
    }

    /// A board store over the on-disk cache, journaling if enabled
    pub fn board_store<'a>(&'a self, client: &'a ApiClient) -> BoardStore<&'a ApiClient, &'a FileStore> {
        let store = BoardStore::open(client, &self.store, self.session.clone());
        if self.settings.journal_enabled {
            store.with_journal(self.journal())
        } else {
            store
        }
    }

    /// Snapshot cache without a remote, for offline reads
    pub fn cache(&self) -> BoardCache<&FileStore> {
        BoardCache::new(&self.store)
    }

    pub fn symbol(&self) -> &str {
        &self.settings.currency_symbol
    }
}

/// Find a board by ID or by title (case-insensitive)
pub fn resolve_board(boards: &[Board], identifier: &str) -> BoardsResult<BoardId> {
    if let Ok(id) = identifier.parse::<BoardId>() {
        if boards.iter().any(|b| b.id == id) {
            return Ok(id);
        }
    }

    let wanted = identifier.trim().to_lowercase();
    boards
        .iter()
        .find(|b| b.title.to_lowercase() == wanted)
        .map(|b| b.id)
        .ok_or_else(|| BoardsError::board_not_found(identifier))
}
