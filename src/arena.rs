//! Pitting two agents against each other.
//!
//! The arena owns the game loop: it keeps the real board and side to move,
//! hands each agent the canonical board, checks the returned action against
//! the legality mask, and applies it. A side left without a legal move
//! loses without its agent being asked.

use log::{debug, info};

use crate::agents::Agent;
use crate::core::{Action, AgentError, Player};
use crate::rules::Game;

/// Configuration for arena games.
#[derive(Clone, Debug)]
pub struct ArenaConfig {
    /// Maximum moves per game; a game cut off here is a draw.
    pub max_moves: usize,
}

impl Default for ArenaConfig {
    fn default() -> Self {
        Self { max_moves: 1000 }
    }
}

impl ArenaConfig {
    /// Create a new arena config.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the move limit.
    pub fn with_max_moves(mut self, max_moves: usize) -> Self {
        self.max_moves = max_moves;
        self
    }
}

/// Outcome of one game.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameRecord<B> {
    /// Winning side, `None` for a draw.
    pub winner: Option<Player>,
    /// Actions in play order, White first.
    pub moves: Vec<Action>,
    /// Board after the last move.
    pub final_board: B,
}

/// Tally over several games, from the arena's point of view.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ArenaStats {
    /// Games won by the first agent, whichever color it had.
    pub first_wins: usize,
    /// Games won by the second agent.
    pub second_wins: usize,
    /// Games cut off by the move limit.
    pub draws: usize,
}

impl ArenaStats {
    /// Total games recorded.
    #[must_use]
    pub fn games(&self) -> usize {
        self.first_wins + self.second_wins + self.draws
    }
}

/// Two agents and the game they play.
pub struct Arena<G, A, B> {
    game: G,
    first: A,
    second: B,
    config: ArenaConfig,
}

impl<G, A, B> Arena<G, A, B>
where
    G: Game,
    A: Agent<G>,
    B: Agent<G>,
{
    /// Create an arena. `first` plays White in [`Arena::play_game`].
    pub fn new(game: G, first: A, second: B) -> Self {
        Self {
            game,
            first,
            second,
            config: ArenaConfig::default(),
        }
    }

    /// Replace the configuration.
    #[must_use]
    pub fn with_config(mut self, config: ArenaConfig) -> Self {
        self.config = config;
        self
    }

    /// Play one game with the first agent as White.
    pub fn play_game(&mut self) -> Result<GameRecord<G::Board>, AgentError> {
        let board = self.game.init_board();
        self.play_from(board, Player::White)
    }

    /// Continue a game from `board` with `player` to move, the first agent
    /// playing White.
    pub fn play_from(
        &mut self,
        board: G::Board,
        player: Player,
    ) -> Result<GameRecord<G::Board>, AgentError> {
        play(&self.game, &mut self.first, &mut self.second, &self.config, board, player)
    }

    /// Play `count` games, the first agent taking White in the first half
    /// (rounded up) and Black in the rest.
    pub fn play_games(&mut self, count: usize) -> Result<ArenaStats, AgentError> {
        let mut stats = ArenaStats::default();
        let white_games = count - count / 2;

        for index in 0..count {
            let first_is_white = index < white_games;
            let (game, config) = (&self.game, &self.config);
            let board = game.init_board();
            let record = if first_is_white {
                play(game, &mut self.first, &mut self.second, config, board, Player::White)?
            } else {
                play(game, &mut self.second, &mut self.first, config, board, Player::White)?
            };

            let first_side = if first_is_white { Player::White } else { Player::Black };
            match record.winner {
                Some(side) if side == first_side => stats.first_wins += 1,
                Some(_) => stats.second_wins += 1,
                None => stats.draws += 1,
            }
        }

        info!(
            "arena finished {} games: {} / {} / {} draws",
            stats.games(),
            stats.first_wins,
            stats.second_wins,
            stats.draws
        );
        Ok(stats)
    }
}

fn play<G, W, K>(
    game: &G,
    white: &mut W,
    black: &mut K,
    config: &ArenaConfig,
    mut board: G::Board,
    mut player: Player,
) -> Result<GameRecord<G::Board>, AgentError>
where
    G: Game,
    W: Agent<G>,
    K: Agent<G>,
{
    let mut moves = Vec::new();

    while moves.len() < config.max_moves && game.game_ended(&board, player) == 0 {
        let canonical = game.canonical_form(&board, player);
        let valid = game.valid_moves(&canonical, Player::White);
        if !valid.contains(&true) {
            info!("{} has no legal moves and loses", player);
            return Ok(GameRecord {
                winner: Some(-player),
                moves,
                final_board: board,
            });
        }

        let choice = match player {
            Player::White => white.play(game, &canonical),
            Player::Black => black.play(game, &canonical),
        };

        let action = match choice {
            Ok(action) => action,
            Err(AgentError::NoLegalMoves) => {
                info!("{} gave up with legal moves left and loses", player);
                return Ok(GameRecord {
                    winner: Some(-player),
                    moves,
                    final_board: board,
                });
            }
            Err(err) => return Err(err),
        };

        if !valid.get(action.index()).copied().unwrap_or(false) {
            return Err(AgentError::IllegalAction(action));
        }

        debug!("move {}: {} plays {}", moves.len() + 1, player, action);
        let (next, next_player) = game.next_state(&board, player, action);
        board = next;
        player = next_player;
        moves.push(action);
    }

    let winner = game.winner(&board);
    info!("game over after {} moves, winner {:?}", moves.len(), winner);
    Ok(GameRecord {
        winner,
        moves,
        final_board: board,
    })
}
