//! Scriptable in-memory remote for store tests

use std::cell::{Cell, RefCell};
use std::collections::VecDeque;

use crate::api::{
    BoardOrder, BoardRemote, CreateBoard, CreateEntry, EntryOrder, RenameBoard, UpdateEntry,
};
use crate::error::{BoardsError, BoardsResult};
use crate::models::{Board, BoardId, Entry, EntryId};

/// A failure to inject into the next remote call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fault {
    Server,
    Transport,
    Malformed,
}

impl Fault {
    fn into_error(self) -> BoardsError {
        match self {
            Self::Server => BoardsError::Server {
                status: 500,
                body: "internal error".into(),
            },
            Self::Transport => BoardsError::Transport("connection refused".into()),
            Self::Malformed => BoardsError::MalformedResponse("expected value at line 1".into()),
        }
    }
}

/// Records every call and answers from an in-memory board list
#[derive(Debug, Default)]
pub struct FakeRemote {
    boards: RefCell<Vec<Board>>,
    faults: RefCell<VecDeque<Fault>>,
    call_faults: RefCell<Vec<(String, Fault)>>,
    calls: RefCell<Vec<String>>,
    next_id: Cell<i64>,
    update_suffix: RefCell<String>,
    board_orders: RefCell<Vec<BoardOrder>>,
    entry_orders: RefCell<Vec<EntryOrder>>,
    created_entries: RefCell<Vec<CreateEntry>>,
}

impl FakeRemote {
    pub fn new() -> Self {
        Self::with_boards(Vec::new())
    }

    pub fn with_boards(boards: Vec<Board>) -> Self {
        let fake = Self::default();
        *fake.boards.borrow_mut() = boards;
        fake.next_id.set(100);
        fake
    }

    /// Fail the next call that has not been failed yet
    pub fn fail_next(&self, fault: Fault) {
        self.faults.borrow_mut().push_back(fault);
    }

    /// Fail the first call matching `call`, whatever comes before it
    pub fn fail_call(&self, call: &str, fault: Fault) {
        self.call_faults.borrow_mut().push((call.to_string(), fault));
    }

    /// Append `suffix` to names echoed back from entry updates
    pub fn set_update_suffix(&self, suffix: &str) {
        *self.update_suffix.borrow_mut() = suffix.to_string();
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }

    pub fn clear_calls(&self) {
        self.calls.borrow_mut().clear();
    }

    pub fn count(&self, call: &str) -> usize {
        self.calls.borrow().iter().filter(|c| *c == call).count()
    }

    pub fn last_board_order(&self) -> Option<BoardOrder> {
        self.board_orders.borrow().last().cloned()
    }

    pub fn last_entry_order(&self) -> Option<EntryOrder> {
        self.entry_orders.borrow().last().cloned()
    }

    pub fn last_create_entry(&self) -> Option<CreateEntry> {
        self.created_entries.borrow().last().cloned()
    }

    fn call(&self, token: &str, what: String) -> BoardsResult<()> {
        assert_eq!(token, "tok", "unexpected bearer token");
        let targeted = {
            let mut call_faults = self.call_faults.borrow_mut();
            call_faults
                .iter()
                .position(|(call, _)| *call == what)
                .map(|i| call_faults.remove(i).1)
        };
        self.calls.borrow_mut().push(what);
        if let Some(fault) = targeted {
            return Err(fault.into_error());
        }
        match self.faults.borrow_mut().pop_front() {
            Some(fault) => Err(fault.into_error()),
            None => Ok(()),
        }
    }

    fn next_id(&self) -> i64 {
        let id = self.next_id.get();
        self.next_id.set(id + 1);
        id
    }
}

impl BoardRemote for FakeRemote {
    fn fetch_boards(&self, token: &str) -> BoardsResult<Vec<Board>> {
        self.call(token, "GET /boards".into())?;
        Ok(self.boards.borrow().clone())
    }

    fn create_board(&self, token: &str, body: &CreateBoard) -> BoardsResult<Board> {
        self.call(token, "POST /boards".into())?;
        let board = Board::new(
            BoardId::server(self.next_id()),
            body.title.clone(),
            Some(body.category_id),
        );
        self.boards.borrow_mut().push(board.clone());
        Ok(board)
    }

    fn rename_board(&self, token: &str, id: BoardId, body: &RenameBoard) -> BoardsResult<()> {
        self.call(token, format!("PUT /boards/{}", id))?;
        if let Some(board) = self.boards.borrow_mut().iter_mut().find(|b| b.id == id) {
            board.title = body.title.clone();
        }
        Ok(())
    }

    fn delete_board(&self, token: &str, id: BoardId) -> BoardsResult<()> {
        self.call(token, format!("DELETE /boards/{}", id))?;
        self.boards.borrow_mut().retain(|b| b.id != id);
        Ok(())
    }

    fn reorder_boards(&self, token: &str, body: &BoardOrder) -> BoardsResult<()> {
        self.call(token, "PUT /boards/reorder".into())?;
        self.board_orders.borrow_mut().push(body.clone());
        Ok(())
    }

    fn create_entry(&self, token: &str, body: &CreateEntry) -> BoardsResult<Entry> {
        self.call(token, "POST /entries".into())?;
        self.created_entries.borrow_mut().push(body.clone());
        let entry = Entry {
            id: EntryId::server(self.next_id()),
            entry_type: body.entry_type,
            name: body.name.clone(),
            amount: body.amount,
            board_id: Some(body.board_id),
        };
        if let Some(board) = self
            .boards
            .borrow_mut()
            .iter_mut()
            .find(|b| b.id == body.board_id)
        {
            board.entries.push(entry.clone());
        }
        Ok(entry)
    }

    fn update_entry(&self, token: &str, id: EntryId, body: &UpdateEntry) -> BoardsResult<Entry> {
        self.call(token, format!("PUT /entries/{}", id))?;
        Ok(Entry {
            id,
            entry_type: body.entry_type,
            name: format!("{}{}", body.name, self.update_suffix.borrow()),
            amount: body.amount,
            board_id: Some(body.board_id),
        })
    }

    fn assign_entry(&self, token: &str, id: EntryId, body: &UpdateEntry) -> BoardsResult<()> {
        self.call(token, format!("PUT /entries/{}", id))?;
        let mut boards = self.boards.borrow_mut();
        let moved = boards
            .iter_mut()
            .find_map(|b| b.entries.iter().position(|e| e.id == id).map(|i| b.entries.remove(i)));
        if let Some(mut entry) = moved {
            entry.board_id = Some(body.board_id);
            if let Some(board) = boards.iter_mut().find(|b| b.id == body.board_id) {
                board.entries.push(entry);
            }
        }
        Ok(())
    }

    fn delete_entry(&self, token: &str, id: EntryId) -> BoardsResult<()> {
        self.call(token, format!("DELETE /entries/{}", id))?;
        for board in self.boards.borrow_mut().iter_mut() {
            board.entries.retain(|e| e.id != id);
        }
        Ok(())
    }

    fn reorder_entries(&self, token: &str, body: &EntryOrder) -> BoardsResult<()> {
        self.call(token, "PUT /entries/reorder".into())?;
        self.entry_orders.borrow_mut().push(body.clone());
        Ok(())
    }
}
