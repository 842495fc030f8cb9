//! Interactive move entry.

use std::io::{BufRead, Write};

use colored::Colorize;
use log::{debug, warn};

use super::notation::parse_move;
use super::Agent;
use crate::core::{Action, AgentError, Board, Move, Player, WHITE};
use crate::games::BreakthroughGame;
use crate::rules::Game;

/// Reads moves typed as `a2a3` from `input`, prompting on `output`.
///
/// The board shown is the agent's canonical view, so coordinates are always
/// from its own side. Cells that changed since the agent last saw the board
/// are highlighted. Unparsable or illegal input is reported and the prompt
/// repeats until a legal move is entered or the input closes.
pub struct HumanAgent<R, W> {
    input: R,
    output: W,
    previous: Option<String>,
}

impl<R: BufRead, W: Write> HumanAgent<R, W> {
    /// Create an agent reading from `input` and writing to `output`.
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            previous: None,
        }
    }

    /// Consume the agent, returning its output sink.
    pub fn into_output(self) -> W {
        self.output
    }
}

/// Find the legal action whose effect changes both of `mv`'s cells.
///
/// A linear scan over the action space; only fit for human-paced input.
fn find_action(game: &BreakthroughGame, board: &Board, mv: Move) -> Option<(Action, Board)> {
    if board.get(mv.src_row, mv.src_col) != WHITE {
        return None;
    }
    game.legal_actions(board, Player::White)
        .into_iter()
        .map(|action| (action, game.next_state(board, Player::White, action).0))
        .find(|(_, next)| {
            next.get(mv.src_row, mv.src_col) != board.get(mv.src_row, mv.src_col)
                && next.get(mv.dest_row, mv.dest_col) != board.get(mv.dest_row, mv.dest_col)
        })
}

/// Render `current`, coloring characters that differ from `previous`.
fn highlight_changes(previous: &str, current: &str) -> String {
    previous
        .chars()
        .zip(current.chars())
        .map(|(old, new)| {
            if old == new {
                new.to_string()
            } else {
                new.to_string().red().to_string()
            }
        })
        .collect()
}

impl<R: BufRead, W: Write> Agent<BreakthroughGame> for HumanAgent<R, W> {
    fn play(&mut self, game: &BreakthroughGame, board: &Board) -> Result<Action, AgentError> {
        if game.legal_actions(board, Player::White).is_empty() {
            return Err(AgentError::NoLegalMoves);
        }
        let rendered = game.display(board);
        let previous = self
            .previous
            .get_or_insert_with(|| game.display(&game.init_board()));
        let shown = highlight_changes(previous, &rendered);
        writeln!(self.output, "{}", shown)?;

        loop {
            write!(self.output, "> ")?;
            self.output.flush()?;

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Err(AgentError::InputClosed);
            }
            let text = line.trim();

            let mv = match parse_move(text, game.size()) {
                Ok(mv) => mv,
                Err(err) => {
                    warn!("could not parse move {:?}: {}", text, err);
                    writeln!(self.output, "{}", err)?;
                    continue;
                }
            };

            match find_action(game, board, mv) {
                Some((action, next)) => {
                    debug!("human entered {} as {}", text, action);
                    self.previous = Some(game.display(&next));
                    return Ok(action);
                }
                None => {
                    warn!("move {:?} matches no legal action", text);
                    writeln!(self.output, "illegal move: {}", text)?;
                }
            }
        }
    }
}
