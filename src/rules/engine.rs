//! Game capability trait.
//!
//! Search and training code is written against `Game` so it can stay
//! polymorphic over variants. Every method takes an immutable board snapshot
//! and returns a fresh one, so a game value can be shared freely between
//! rollout workers.

use smallvec::SmallVec;

use crate::core::{Action, Player};

/// Board/policy pairs produced by [`Game::symmetries`].
///
/// Inline capacity covers the identity plus one mirror image.
pub type Symmetries<B> = SmallVec<[(B, Vec<f32>); 2]>;

/// Rules of a two-player, perfect-information board game.
///
/// ## Implementation Notes
///
/// - `next_state` does not validate: gate every call behind `valid_moves`
/// - `game_ended` returns 0 while play continues, otherwise the sign of the
///   result relative to `player`
/// - `canonical_form` must make `valid_moves(canonical, White)` equal to
///   `valid_moves(board, player)`
pub trait Game: Send + Sync {
    /// Board snapshot type.
    type Board: Clone;

    /// Get the starting position.
    fn init_board(&self) -> Self::Board;

    /// Get the board dimensions (rows, cols).
    fn board_size(&self) -> (usize, usize);

    /// Get the number of action indices, legal or not.
    fn action_size(&self) -> usize;

    /// Apply an action for `player`, returning the new board and the next player.
    fn next_state(
        &self,
        board: &Self::Board,
        player: Player,
        action: Action,
    ) -> (Self::Board, Player);

    /// Compute the legality of every action as a mask of length `action_size`.
    fn valid_moves(&self, board: &Self::Board, player: Player) -> Vec<bool>;

    /// Check whether the game is over.
    ///
    /// Returns 0 if not, `1` if `player` has won, `-1` if `player` has lost.
    fn game_ended(&self, board: &Self::Board, player: Player) -> i8;

    /// Re-express the board from `player`'s perspective as White.
    fn canonical_form(&self, board: &Self::Board, player: Player) -> Self::Board;

    /// Expand a board and its policy into symmetric training samples.
    ///
    /// The first entry is always the input unchanged.
    fn symmetries(&self, board: &Self::Board, policy: &[f32]) -> Symmetries<Self::Board>;

    /// Collision-free string key for caches and transposition tables.
    fn string_representation(&self, board: &Self::Board) -> String;

    /// Human-readable rendering.
    fn display(&self, board: &Self::Board) -> String;

    // === Convenience Methods ===

    /// Enumerate the legal actions for a player.
    fn legal_actions(&self, board: &Self::Board, player: Player) -> Vec<Action> {
        self.valid_moves(board, player)
            .iter()
            .enumerate()
            .filter(|&(_, &valid)| valid)
            .map(|(index, _)| Action::from(index))
            .collect()
    }

    /// The winner of a finished game, if any.
    fn winner(&self, board: &Self::Board) -> Option<Player> {
        Player::from_sign(self.game_ended(board, Player::White))
    }
}
