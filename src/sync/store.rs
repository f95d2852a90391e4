//! Board synchronization store
//!
//! Owns the ordered board collection and mediates between optimistic local
//! changes and the remote service. Every mutation follows the same shape:
//!
//! 1. check the session has a credential (nothing happens without one)
//! 2. build the next collection and swap it in wholesale
//! 3. persist the snapshot cache
//! 4. call the remote service and settle the returned [`Mutation`]
//!
//! Failed syncs are not rolled back except for entry creation; they flag the
//! store for reconciliation, which the next successful [`BoardStore::load`]
//! clears. A malformed response triggers a full reload.

use tracing::{debug, info, warn};
use zeroize::Zeroizing;

use crate::api::{
    BoardOrder, BoardRemote, CreateBoard, CreateEntry, EntryOrder, RenameBoard, UpdateEntry,
};
use crate::error::{BoardsError, BoardsResult};
use crate::journal::{JournalEntry, SyncJournal};
use crate::models::board::validate_title;
use crate::models::category::find_by_id;
use crate::models::entry::validate_fields;
use crate::models::{
    Board, BoardId, BoardValidationError, Category, CategoryId, Entry, EntryId, EntryType, Money,
};
use crate::session::Session;
use crate::storage::{BoardCache, KeyValueStore};

use super::reorder::{self, EntryMove};
use super::state::{Mutation, MutationKind, SyncState};

/// Fields to change on an existing entry; `None` keeps the current value
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EntryChanges {
    pub name: Option<String>,
    pub amount: Option<Money>,
    pub entry_type: Option<EntryType>,
}

impl EntryChanges {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.amount.is_none() && self.entry_type.is_none()
    }

    fn apply_to(&self, entry: &mut Entry) {
        if let Some(name) = &self.name {
            entry.name = name.clone();
        }
        if let Some(amount) = self.amount {
            entry.amount = amount;
        }
        if let Some(entry_type) = self.entry_type {
            entry.entry_type = entry_type;
        }
    }
}

/// Ordered boards kept in step with the remote service
pub struct BoardStore<R, K> {
    remote: R,
    cache: BoardCache<K>,
    session: Session,
    journal: Option<SyncJournal>,
    boards: Vec<Board>,
    needs_reconcile: bool,
}

impl<R: BoardRemote, K: KeyValueStore> BoardStore<R, K> {
    /// Open a store, hydrating boards from the snapshot cache
    pub fn open(remote: R, store: K, session: Session) -> Self {
        let cache = BoardCache::new(store);
        let boards = cache.load();
        Self {
            remote,
            cache,
            session,
            journal: None,
            boards,
            needs_reconcile: false,
        }
    }

    /// Record settled mutations to `journal`
    pub fn with_journal(mut self, journal: SyncJournal) -> Self {
        self.journal = Some(journal);
        self
    }

    /// Boards in display order
    pub fn boards(&self) -> &[Board] {
        &self.boards
    }

    pub fn board(&self, id: BoardId) -> Option<&Board> {
        self.boards.iter().find(|b| b.id == id)
    }

    /// The board an entry currently lives on, and the entry
    pub fn entry(&self, id: EntryId) -> Option<(&Board, &Entry)> {
        self.boards
            .iter()
            .find_map(|b| b.entries.iter().find(|e| e.id == id).map(|e| (b, e)))
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Whether some remote sync failed since the last successful load
    pub fn needs_reconcile(&self) -> bool {
        self.needs_reconcile
    }

    // --- load ---------------------------------------------------------------

    /// Replace local state with the server's boards
    ///
    /// On failure the current boards and snapshot stay as they were. A
    /// malformed body is retried once before giving up. Returns the number of
    /// boards loaded.
    pub fn load(&mut self) -> BoardsResult<usize> {
        let token = self.token()?;

        let boards = match self.remote.fetch_boards(&token) {
            Ok(boards) => boards,
            Err(e) if e.requires_reload() => {
                warn!("board list was malformed, retrying once: {}", e);
                self.remote.fetch_boards(&token)?
            }
            Err(e) => return Err(e),
        };

        let boards: Vec<Board> = boards
            .into_iter()
            .map(|mut board| {
                board.claim_entries();
                board
            })
            .collect();

        let count = boards.len();
        self.commit(boards);
        self.needs_reconcile = false;
        info!(count, "loaded boards");
        Ok(count)
    }

    /// Fill in missing category names from `categories`
    ///
    /// Returns how many boards were annotated.
    pub fn annotate_categories(&mut self, categories: &[Category]) -> usize {
        let mut annotated = 0;
        let next: Vec<Board> = self
            .boards
            .iter()
            .map(|board| {
                let mut board = board.clone();
                if board.category_name.is_none() {
                    if let Some(category) = board
                        .category_id
                        .and_then(|id| find_by_id(categories, id))
                    {
                        board.category_name = Some(category.name.clone());
                        annotated += 1;
                    }
                }
                board
            })
            .collect();

        if annotated > 0 {
            self.commit(next);
        }
        annotated
    }

    // --- boards ---------------------------------------------------------------

    /// Create a board on the server and append it locally
    ///
    /// Unlike the other mutations this waits for the server: a failed create
    /// leaves the board list exactly as it was.
    pub fn add_board(&mut self, title: &str, category_id: Option<CategoryId>) -> BoardsResult<Board> {
        let token = self.token()?;

        let title = title.trim();
        validate_title(title).map_err(|e| BoardsError::Validation(e.to_string()))?;
        let category_id = category_id
            .ok_or_else(|| BoardsError::Validation(BoardValidationError::MissingCategory.to_string()))?;

        let body = CreateBoard {
            title: title.to_string(),
            category_id,
        };

        match self.remote.create_board(&token, &body) {
            Ok(mut board) => {
                board.claim_entries();
                let mut next = self.boards.clone();
                next.push(board.clone());
                self.commit(next);
                self.journal(JournalEntry::new(
                    MutationKind::AddBoard,
                    board.id.to_string(),
                    SyncState::SyncConfirmed,
                ));
                debug!(board = %board.id, "board created");
                Ok(board)
            }
            Err(e) => {
                warn!("failed to create board '{}': {}", title, e);
                self.journal(
                    JournalEntry::new(MutationKind::AddBoard, title, SyncState::SyncFailed)
                        .with_detail(e.to_string()),
                );
                if e.requires_reload() {
                    self.reload();
                }
                Err(e)
            }
        }
    }

    /// Move the board at `from` to `to`, then send the full ordering
    pub fn reorder_boards(&mut self, from: usize, to: usize) -> BoardsResult<Mutation> {
        let token = self.token()?;

        let next = reorder::reorder_boards(&self.boards, from, to)
            .ok_or_else(|| BoardsError::board_not_found(format!("position {}", from)))?;
        let moved = next[to.min(next.len() - 1)].id;
        self.commit(next);

        let mut mutation = Mutation::applied(MutationKind::ReorderBoards, moved);
        mutation.begin_sync();
        let result = self
            .remote
            .reorder_boards(&token, &BoardOrder::of(&self.boards));
        self.settle(&mut mutation, result);
        Ok(mutation)
    }

    pub fn rename_board(&mut self, id: BoardId, title: &str) -> BoardsResult<Mutation> {
        let token = self.token()?;

        let title = title.trim();
        validate_title(title).map_err(|e| BoardsError::Validation(e.to_string()))?;
        let index = self.board_index(id)?;

        let mut next = self.boards.clone();
        next[index].title = title.to_string();
        self.commit(next);

        let mut mutation = Mutation::applied(MutationKind::RenameBoard, id);
        mutation.begin_sync();
        let body = RenameBoard {
            title: title.to_string(),
        };
        let result = self.remote.rename_board(&token, id, &body);
        self.settle(&mut mutation, result);
        Ok(mutation)
    }

    pub fn delete_board(&mut self, id: BoardId) -> BoardsResult<Mutation> {
        let token = self.token()?;
        let index = self.board_index(id)?;

        let mut next = self.boards.clone();
        next.remove(index);
        self.commit(next);

        let mut mutation = Mutation::applied(MutationKind::DeleteBoard, id);
        mutation.begin_sync();
        let result = self.remote.delete_board(&token, id);
        self.settle(&mut mutation, result);
        Ok(mutation)
    }

    // --- entries --------------------------------------------------------------

    /// Move an entry within a board or onto another board
    ///
    /// A cross-board move updates the entry's owner on the server and sends
    /// the destination board's positions; both calls are issued even if one
    /// fails. A same-board move only sends the positions. Remote failures are
    /// not reverted.
    pub fn move_entry(&mut self, mv: EntryMove) -> BoardsResult<Mutation> {
        let token = self.token()?;

        let moved = reorder::move_entry(&self.boards, mv)?;
        let entry_id = moved.entry_id;
        self.commit(moved.boards);

        let mut mutation = Mutation::applied(MutationKind::MoveEntry, entry_id);
        mutation.begin_sync();
        let result = self.sync_move(&token, mv, entry_id);
        self.settle(&mut mutation, result);
        Ok(mutation)
    }

    fn sync_move(&self, token: &str, mv: EntryMove, entry_id: EntryId) -> BoardsResult<()> {
        require_confirmed(entry_id)?;
        let destination = self.board_by_id(mv.destination_board)?;

        let owner = if mv.is_cross_board() {
            let entry = destination
                .entries
                .iter()
                .find(|e| e.id == entry_id)
                .ok_or_else(|| BoardsError::entry_not_found(entry_id.to_string()))?;
            let body = UpdateEntry::from_entry(entry, destination.id);
            self.remote.assign_entry(token, entry_id, &body)
        } else {
            Ok(())
        };

        let order = EntryOrder::new(entry_id, mv.source_board, destination);
        let positions = self.remote.reorder_entries(token, &order);

        if let Err(e) = &owner {
            warn!(entry = %entry_id, error = %e, "owner update failed");
        }
        owner.and(positions)
    }

    /// Append an entry to a board
    ///
    /// A temporary entry is shown immediately and swapped for the server's
    /// entry once created. If the create fails the temporary entry is removed.
    pub fn add_entry(
        &mut self,
        board_id: BoardId,
        entry_type: EntryType,
        name: &str,
        amount: Money,
    ) -> BoardsResult<Mutation> {
        let token = self.token()?;

        let name = name.trim();
        validate_fields(name, amount).map_err(|e| BoardsError::Validation(e.to_string()))?;
        let index = self.board_index(board_id)?;

        let draft = Entry::draft(board_id, entry_type, name, amount);
        let temp_id = draft.id;
        let category_id = self.boards[index].category_id;

        let mut next = self.boards.clone();
        next[index].entries.push(draft);
        self.commit(next);

        let mut mutation = Mutation::applied(MutationKind::AddEntry, temp_id);
        mutation.begin_sync();

        let body = CreateEntry {
            board_id,
            entry_type,
            name: name.to_string(),
            amount,
            category_id,
        };
        let result = match self.remote.create_entry(&token, &body) {
            Ok(mut created) => {
                created.board_id = Some(board_id);
                mutation.retarget(created.id);
                self.replace_entry(temp_id, created);
                Ok(())
            }
            Err(e) => {
                self.remove_entry(temp_id);
                Err(e)
            }
        };

        self.settle(&mut mutation, result);
        Ok(mutation)
    }

    /// Change an entry in place, then adopt whatever the server returns
    ///
    /// A failed update keeps the local edit.
    pub fn edit_entry(&mut self, id: EntryId, changes: &EntryChanges) -> BoardsResult<Mutation> {
        let token = self.token()?;

        let (board_index, entry_index) = self.locate_entry(id)?;
        let mut edited = self.boards[board_index].entries[entry_index].clone();
        changes.apply_to(&mut edited);
        edited.name = edited.name.trim().to_string();
        edited
            .validate()
            .map_err(|e| BoardsError::Validation(e.to_string()))?;

        let board_id = self.boards[board_index].id;
        let body = UpdateEntry::from_entry(&edited, board_id);

        let mut next = self.boards.clone();
        next[board_index].entries[entry_index] = edited;
        self.commit(next);

        let mut mutation = Mutation::applied(MutationKind::EditEntry, id);
        mutation.begin_sync();

        let response = require_confirmed(id).and_then(|_| self.remote.update_entry(&token, id, &body));
        let result = match response {
            Ok(mut updated) => {
                updated.board_id = Some(board_id);
                self.replace_entry(id, updated);
                Ok(())
            }
            Err(e) => Err(e),
        };

        self.settle(&mut mutation, result);
        Ok(mutation)
    }

    pub fn delete_entry(&mut self, id: EntryId) -> BoardsResult<Mutation> {
        let token = self.token()?;
        self.locate_entry(id)?;

        self.remove_entry(id);

        let mut mutation = Mutation::applied(MutationKind::DeleteEntry, id);
        mutation.begin_sync();
        let result = require_confirmed(id).and_then(|_| self.remote.delete_entry(&token, id));
        self.settle(&mut mutation, result);
        Ok(mutation)
    }

    // --- internals ------------------------------------------------------------

    fn token(&self) -> BoardsResult<Zeroizing<String>> {
        self.session
            .bearer()
            .map(|token| Zeroizing::new(token.to_string()))
    }

    fn board_index(&self, id: BoardId) -> BoardsResult<usize> {
        self.boards
            .iter()
            .position(|b| b.id == id)
            .ok_or_else(|| BoardsError::board_not_found(id.to_string()))
    }

    fn board_by_id(&self, id: BoardId) -> BoardsResult<&Board> {
        self.board(id)
            .ok_or_else(|| BoardsError::board_not_found(id.to_string()))
    }

    fn locate_entry(&self, id: EntryId) -> BoardsResult<(usize, usize)> {
        self.boards
            .iter()
            .enumerate()
            .find_map(|(b, board)| board.position_of(id).map(|e| (b, e)))
            .ok_or_else(|| BoardsError::entry_not_found(id.to_string()))
    }

    /// Swap an entry for another wherever it currently lives
    fn replace_entry(&mut self, id: EntryId, replacement: Entry) {
        if let Ok((b, e)) = self.locate_entry(id) {
            let mut next = self.boards.clone();
            next[b].entries[e] = replacement;
            self.commit(next);
        }
    }

    fn remove_entry(&mut self, id: EntryId) {
        if let Ok((b, e)) = self.locate_entry(id) {
            let mut next = self.boards.clone();
            next[b].entries.remove(e);
            self.commit(next);
        }
    }

    /// Install the next collection and mirror it to the cache
    fn commit(&mut self, next: Vec<Board>) {
        self.boards = next;
        if let Err(e) = self.cache.save(&self.boards) {
            warn!("failed to persist board snapshot: {}", e);
        }
    }

    /// Settle a mutation from the remote outcome
    fn settle(&mut self, mutation: &mut Mutation, result: BoardsResult<()>) {
        match result {
            Ok(()) => {
                mutation.confirm();
                debug!(kind = %mutation.kind, entity = %mutation.entity, "synced");
            }
            Err(e) => {
                warn!("{} {} failed to sync: {}", mutation.kind, mutation.entity, e);
                mutation.fail(&e);
                self.needs_reconcile = true;
                if e.requires_reload() {
                    self.reload();
                }
            }
        }
        self.journal(JournalEntry::from(&*mutation));
    }

    /// Best-effort full reload after the server sent something unreadable
    fn reload(&mut self) {
        if let Err(e) = self.load() {
            warn!("reload after malformed response failed: {}", e);
        }
    }

    fn journal(&self, entry: JournalEntry) {
        if let Some(journal) = &self.journal {
            if let Err(e) = journal.record(&entry) {
                warn!("failed to write sync journal: {}", e);
            }
        }
    }
}

/// Refuse to send a temporary ID to the server
fn require_confirmed(id: EntryId) -> BoardsResult<()> {
    if id.is_temporary() {
        return Err(BoardsError::Validation(format!(
            "entry {} has not been confirmed by the server yet",
            id
        )));
    }
    Ok(())
}
