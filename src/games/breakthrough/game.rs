//! Breakthrough rules.

use log::debug;
use smallvec::smallvec;

use super::codec::ActionCodec;
use super::{render, validity};
use crate::core::{Action, Board, BoardError, ConfigError, Move, Player, BLACK, EMPTY, WHITE};
use crate::rules::{Game, Symmetries};

/// Default side length.
pub const DEFAULT_SIZE: usize = 8;

/// Breakthrough on an even n×n board.
///
/// Stateless: the game only holds the board size, so one value can be
/// shared across any number of search workers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BreakthroughGame {
    codec: ActionCodec,
}

impl BreakthroughGame {
    /// Create a game on a `size`×`size` board.
    ///
    /// The size must be even (the action numbering splits forward moves
    /// into two mirrored halves) and at least 4.
    pub fn new(size: usize) -> Result<Self, ConfigError> {
        if size < 4 {
            return Err(ConfigError::TooSmall { size });
        }
        if size % 2 != 0 {
            return Err(ConfigError::OddSize { size });
        }
        debug!("created {}x{} breakthrough game", size, size);
        Ok(Self {
            codec: ActionCodec::new(size),
        })
    }

    /// Board side length.
    #[must_use]
    pub fn size(&self) -> usize {
        self.codec.size()
    }

    /// The action codec for this board size.
    #[must_use]
    pub fn codec(&self) -> &ActionCodec {
        &self.codec
    }

    /// Decode an action without applying it.
    #[must_use]
    pub fn decode(&self, action: Action, player: Player) -> Move {
        self.codec.decode(action, player)
    }

    /// Check that a board built from caller data has this game's size.
    ///
    /// The rules index the board directly, so a board of another size must
    /// be rejected before it reaches them.
    pub fn check_board(&self, board: &Board) -> Result<(), BoardError> {
        if board.size() != self.size() {
            return Err(BoardError::ShapeMismatch {
                expected: self.size(),
                rows: board.size(),
                cols: board.size(),
            });
        }
        Ok(())
    }
}

impl Default for BreakthroughGame {
    fn default() -> Self {
        Self {
            codec: ActionCodec::new(DEFAULT_SIZE),
        }
    }
}

impl Game for BreakthroughGame {
    type Board = Board;

    /// Black fills rows 0 and 1, White fills the last two rows.
    fn init_board(&self) -> Board {
        let n = self.size();
        Board::from_fn(n, |row, _| match row {
            0 | 1 => BLACK,
            r if r >= n - 2 => WHITE,
            _ => EMPTY,
        })
    }

    fn board_size(&self) -> (usize, usize) {
        (self.size(), self.size())
    }

    fn action_size(&self) -> usize {
        self.codec.action_size()
    }

    /// Move the piece; whatever sat on the destination is captured.
    ///
    /// No legality check is made. An action outside the mask yields an
    /// inconsistent board.
    fn next_state(&self, board: &Board, player: Player, action: Action) -> (Board, Player) {
        let mv = self.codec.decode(action, player);
        let next = board
            .with_cell(mv.src_row, mv.src_col, EMPTY)
            .with_cell(mv.dest_row, mv.dest_col, player.sign());
        (next, -player)
    }

    fn valid_moves(&self, board: &Board, player: Player) -> Vec<bool> {
        let canonical = self.canonical_form(board, player);
        validity::canonical_mask(&self.codec, &canonical)
    }

    /// White reaching row 0 is checked before Black reaching the last row.
    ///
    /// Both at once cannot arise in play; if a constructed board has both,
    /// White's win is reported.
    fn game_ended(&self, board: &Board, player: Player) -> i8 {
        let n = self.size();
        if board.row(0).any(|v| v == WHITE) {
            return player.sign();
        }
        if board.row(n - 1).any(|v| v == BLACK) {
            return -player.sign();
        }
        0
    }

    /// Black's view: colors swapped and rows reversed, so the mover is +1
    /// and moves toward row 0.
    fn canonical_form(&self, board: &Board, player: Player) -> Board {
        match player {
            Player::White => board.clone(),
            Player::Black => board.negated().flip_rows(),
        }
    }

    /// Identity plus the left-right mirror, whose policy is the reversed vector.
    fn symmetries(&self, board: &Board, policy: &[f32]) -> Symmetries<Board> {
        debug_assert_eq!(policy.len(), self.action_size());
        smallvec![
            (board.clone(), policy.to_vec()),
            (board.flip_cols(), policy.iter().rev().copied().collect()),
        ]
    }

    fn string_representation(&self, board: &Board) -> String {
        render::string_representation(board)
    }

    fn display(&self, board: &Board) -> String {
        render::display(board)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_bad_sizes() {
        assert_eq!(BreakthroughGame::new(2), Err(ConfigError::TooSmall { size: 2 }));
        assert_eq!(BreakthroughGame::new(3), Err(ConfigError::TooSmall { size: 3 }));
        assert_eq!(BreakthroughGame::new(7), Err(ConfigError::OddSize { size: 7 }));
        assert!(BreakthroughGame::new(4).is_ok());
        assert!(BreakthroughGame::new(12).is_ok());
    }

    #[test]
    fn test_check_board_size() {
        let game = BreakthroughGame::default();
        assert!(game.check_board(&game.init_board()).is_ok());

        let small = Board::from_rows(&vec![vec![0; 4]; 4]).unwrap();
        assert!(matches!(
            game.check_board(&small),
            Err(BoardError::ShapeMismatch { expected: 8, rows: 4, cols: 4 })
        ));
    }

    #[test]
    fn test_default_is_eight() {
        let game = BreakthroughGame::default();
        assert_eq!(game.board_size(), (8, 8));
        assert_eq!(game.action_size(), 154);
        assert_eq!(game, BreakthroughGame::new(8).unwrap());
    }

    #[test]
    fn test_init_board() {
        let game = BreakthroughGame::new(6).unwrap();
        let board = game.init_board();
        let rows = board.to_rows();

        assert_eq!(rows[0], vec![-1; 6]);
        assert_eq!(rows[1], vec![-1; 6]);
        assert_eq!(rows[2], vec![0; 6]);
        assert_eq!(rows[3], vec![0; 6]);
        assert_eq!(rows[4], vec![1; 6]);
        assert_eq!(rows[5], vec![1; 6]);
    }

    #[test]
    fn test_initial_legal_count() {
        let game = BreakthroughGame::default();
        let board = game.init_board();

        // Front-row pieces: 2 at each edge, 3 for the six in between.
        let count = |p| game.valid_moves(&board, p).iter().filter(|&&v| v).count();
        assert_eq!(count(Player::White), 22);
        assert_eq!(count(Player::Black), 22);
    }

    #[test]
    fn test_next_state_moves_piece() {
        let game = BreakthroughGame::new(4).unwrap();
        let board = game.init_board();

        // Straight step (2, 1) -> (1, 1).
        let (next, player) = game.next_state(&board, Player::White, Action::new(12));
        assert_eq!(player, Player::Black);
        assert_eq!(next.get(2, 1), EMPTY);
        assert_eq!(next.get(1, 1), WHITE);
        assert_eq!(board.get(2, 1), WHITE, "input board must not change");
    }

    #[test]
    fn test_next_state_captures() {
        let game = BreakthroughGame::new(4).unwrap();
        let board = Board::new(4).with_cell(2, 0, WHITE).with_cell(1, 1, BLACK);

        // Region 1, dest row 1, src col 0: (2, 0) -> (1, 1).
        let action = Action::new(3);
        assert!(game.valid_moves(&board, Player::White)[3]);

        let (next, _) = game.next_state(&board, Player::White, action);
        assert_eq!(next.get(1, 1), WHITE);
        assert_eq!(next.count(BLACK), 0);
    }

    #[test]
    fn test_game_ended() {
        let game = BreakthroughGame::new(4).unwrap();
        let white_home = Board::new(4).with_cell(0, 2, WHITE);
        let black_home = Board::new(4).with_cell(3, 1, BLACK);

        assert_eq!(game.game_ended(&game.init_board(), Player::White), 0);
        assert_eq!(game.game_ended(&white_home, Player::White), 1);
        assert_eq!(game.game_ended(&white_home, Player::Black), -1);
        assert_eq!(game.game_ended(&black_home, Player::White), -1);
        assert_eq!(game.game_ended(&black_home, Player::Black), 1);
        assert_eq!(game.winner(&black_home), Some(Player::Black));
    }

    #[test]
    fn test_game_ended_prefers_white() {
        let game = BreakthroughGame::new(4).unwrap();
        let both = Board::new(4).with_cell(0, 0, WHITE).with_cell(3, 3, BLACK);
        assert_eq!(game.game_ended(&both, Player::White), 1);
        assert_eq!(game.winner(&both), Some(Player::White));
    }

    #[test]
    fn test_canonical_form() {
        let game = BreakthroughGame::new(4).unwrap();
        let board = Board::new(4).with_cell(1, 2, BLACK).with_cell(3, 0, WHITE);

        assert_eq!(game.canonical_form(&board, Player::White), board);

        let canonical = game.canonical_form(&board, Player::Black);
        assert_eq!(canonical.get(2, 2), WHITE);
        assert_eq!(canonical.get(0, 0), BLACK);
        assert_eq!(canonical.count(WHITE) + canonical.count(BLACK), 2);
    }

    #[test]
    fn test_symmetries() {
        let game = BreakthroughGame::new(4).unwrap();
        let board = Board::new(4).with_cell(2, 0, WHITE);
        let policy: Vec<f32> = (0..30).map(|i| i as f32).collect();

        let syms = game.symmetries(&board, &policy);
        assert_eq!(syms.len(), 2);
        assert_eq!(syms[0], (board.clone(), policy.clone()));
        assert_eq!(syms[1].0.get(2, 3), WHITE);
        assert_eq!(syms[1].1[0], 29.0);
        assert_eq!(syms[1].1[29], 0.0);
    }
}
