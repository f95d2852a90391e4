//! Pure ordering transforms
//!
//! These never touch the input; they build the next board collection so the
//! store can swap it in wholesale.

use crate::error::{BoardsError, BoardsResult};
use crate::models::{Board, BoardId, EntryId};

/// Where an entry move starts and ends
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EntryMove {
    pub source_board: BoardId,
    pub source_index: usize,
    pub destination_board: BoardId,
    pub destination_index: usize,
}

impl EntryMove {
    pub fn is_cross_board(&self) -> bool {
        self.source_board != self.destination_board
    }
}

/// Outcome of a successful entry move
#[derive(Debug, Clone, PartialEq)]
pub struct MovedEntry {
    pub boards: Vec<Board>,
    pub entry_id: EntryId,
    /// Index the entry actually landed at after clamping
    pub landed_at: usize,
}

/// Move the board at `from` to `to`
///
/// `to` is clamped to the last position. Returns `None` when `from` is out of
/// range.
pub fn reorder_boards(boards: &[Board], from: usize, to: usize) -> Option<Vec<Board>> {
    if from >= boards.len() {
        return None;
    }

    let mut next = boards.to_vec();
    let board = next.remove(from);
    let to = to.min(next.len());
    next.insert(to, board);
    Some(next)
}

/// Move one entry within a board or between two boards
///
/// The moved entry takes the destination board's ID. Fails without building
/// anything when either board is unknown or the source index is out of range.
pub fn move_entry(boards: &[Board], mv: EntryMove) -> BoardsResult<MovedEntry> {
    let source_pos = boards
        .iter()
        .position(|b| b.id == mv.source_board)
        .ok_or_else(|| BoardsError::board_not_found(mv.source_board.to_string()))?;
    let dest_pos = boards
        .iter()
        .position(|b| b.id == mv.destination_board)
        .ok_or_else(|| BoardsError::board_not_found(mv.destination_board.to_string()))?;

    let source = &boards[source_pos];
    if mv.source_index >= source.entries.len() {
        return Err(BoardsError::entry_not_found(format!(
            "position {} on board {}",
            mv.source_index, source.title
        )));
    }

    let mut next = boards.to_vec();
    let mut entry = next[source_pos].entries.remove(mv.source_index);
    let entry_id = entry.id;
    entry.board_id = Some(mv.destination_board);

    let destination = &mut next[dest_pos].entries;
    let landed_at = mv.destination_index.min(destination.len());
    destination.insert(landed_at, entry);

    Ok(MovedEntry {
        boards: next,
        entry_id,
        landed_at,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Entry, EntryType, Money};

    fn entry(id: i64, board: i64) -> Entry {
        Entry {
            id: EntryId::server(id),
            entry_type: EntryType::Debit,
            name: format!("e{}", id),
            amount: Money::from_cents(id * 100),
            board_id: Some(BoardId::server(board)),
        }
    }

    fn fixture() -> Vec<Board> {
        let mut a = Board::new(BoardId::server(1), "A", None);
        a.entries = vec![entry(10, 1), entry(11, 1), entry(12, 1)];
        let b = Board::new(BoardId::server(2), "B", None);
        let c = Board::new(BoardId::server(3), "C", None);
        vec![a, b, c]
    }

    fn ids(boards: &[Board]) -> Vec<i64> {
        boards.iter().filter_map(|b| b.id.as_server()).collect()
    }

    fn entry_ids(board: &Board) -> Vec<i64> {
        board.entries.iter().filter_map(|e| e.id.as_server()).collect()
    }

    #[test]
    fn test_reorder_boards_is_permutation() {
        let boards = fixture();
        let next = reorder_boards(&boards, 0, 2).unwrap();

        assert_eq!(ids(&next), vec![2, 3, 1]);
        let mut sorted = ids(&next);
        sorted.sort();
        assert_eq!(sorted, ids(&boards));
        // Input untouched
        assert_eq!(ids(&boards), vec![1, 2, 3]);
    }

    #[test]
    fn test_reorder_boards_clamps_destination() {
        let next = reorder_boards(&fixture(), 0, 99).unwrap();
        assert_eq!(ids(&next), vec![2, 3, 1]);
    }

    #[test]
    fn test_reorder_boards_bad_source() {
        assert!(reorder_boards(&fixture(), 3, 0).is_none());
        assert!(reorder_boards(&[], 0, 0).is_none());
    }

    #[test]
    fn test_same_board_move_keeps_count() {
        let boards = fixture();
        let moved = move_entry(
            &boards,
            EntryMove {
                source_board: BoardId::server(1),
                source_index: 0,
                destination_board: BoardId::server(1),
                destination_index: 2,
            },
        )
        .unwrap();

        assert_eq!(entry_ids(&moved.boards[0]), vec![11, 12, 10]);
        assert_eq!(moved.entry_id, EntryId::server(10));
        assert_eq!(moved.landed_at, 2);
    }

    #[test]
    fn test_cross_board_move_reassigns_owner() {
        let boards = fixture();
        let moved = move_entry(
            &boards,
            EntryMove {
                source_board: BoardId::server(1),
                source_index: 1,
                destination_board: BoardId::server(2),
                destination_index: 0,
            },
        )
        .unwrap();

        assert_eq!(moved.boards[0].entries.len(), 2);
        assert_eq!(moved.boards[1].entries.len(), 1);
        assert_eq!(moved.boards[1].entries[0].id, EntryId::server(11));
        assert_eq!(moved.boards[1].entries[0].board_id, Some(BoardId::server(2)));
        assert_eq!(boards[0].entries.len(), 3);
    }

    #[test]
    fn test_cross_board_move_clamps_index() {
        let moved = move_entry(
            &fixture(),
            EntryMove {
                source_board: BoardId::server(1),
                source_index: 0,
                destination_board: BoardId::server(3),
                destination_index: 40,
            },
        )
        .unwrap();
        assert_eq!(moved.landed_at, 0);
    }

    #[test]
    fn test_move_with_unknown_board_fails() {
        let err = move_entry(
            &fixture(),
            EntryMove {
                source_board: BoardId::server(1),
                source_index: 0,
                destination_board: BoardId::server(9),
                destination_index: 0,
            },
        )
        .unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_move_with_bad_index_fails() {
        let err = move_entry(
            &fixture(),
            EntryMove {
                source_board: BoardId::server(2),
                source_index: 0,
                destination_board: BoardId::server(1),
                destination_index: 0,
            },
        )
        .unwrap_err();
        assert!(err.is_not_found());
    }
}
