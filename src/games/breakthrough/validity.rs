//! Batched legality over the whole action space.
//!
//! Legality is never found by decoding and simulating actions one by one.
//! Instead each region of the numbering is a grid, and every cell of that
//! grid is one comparison between a "source" window and a "destination"
//! window of the canonical board, offset by one row. Reading the windows in
//! the order the regions are numbered yields the mask directly.

use log::trace;

use super::codec::ActionCodec;
use crate::core::Board;

/// Rectangular window of a row-major grid, optionally read bottom-up.
#[derive(Clone, Copy, Debug)]
struct Window {
    row: usize,
    col: usize,
    rows: usize,
    cols: usize,
    upside_down: bool,
}

impl Window {
    const fn new(row: usize, col: usize, rows: usize, cols: usize) -> Self {
        Self {
            row,
            col,
            rows,
            cols,
            upside_down: false,
        }
    }

    const fn flipped(self) -> Self {
        Self {
            upside_down: !self.upside_down,
            ..self
        }
    }

    /// Cell values in window order.
    fn cells<'a>(self, grid: &'a [i8], width: usize) -> impl Iterator<Item = i8> + 'a {
        (0..self.rows).flat_map(move |i| {
            let row = if self.upside_down {
                self.row + self.rows - 1 - i
            } else {
                self.row + i
            };
            let start = row * width + self.col;
            grid[start..start + self.cols].iter().copied()
        })
    }
}

/// Append one region: source holds a mover piece and `dest_ok` accepts the destination.
fn push_region(
    grid: &[i8],
    width: usize,
    src: Window,
    dest: Window,
    dest_ok: impl Fn(i8) -> bool,
    mask: &mut Vec<bool>,
) {
    debug_assert_eq!((src.rows, src.cols), (dest.rows, dest.cols));
    mask.extend(
        src.cells(grid, width)
            .zip(dest.cells(grid, width))
            .map(|(s, d)| s > 0 && dest_ok(d)),
    );
}

/// Legality mask for the side to move on a canonical board (mover is +1, moving up).
///
/// Regions are emitted in numbering order: right diagonal, forward left
/// half, forward right half (rows reversed), left diagonal (rows reversed).
#[must_use]
pub fn canonical_mask(codec: &ActionCodec, canonical: &Board) -> Vec<bool> {
    let n = codec.size();
    let half = n / 2;
    let grid: Vec<i8> = canonical.cells().collect();
    let mut mask = Vec::with_capacity(codec.action_size());

    let captures_or_empty = |d: i8| d <= 0;
    let empty = |d: i8| d == 0;

    // board[1:, :-1] -> board[:-1, 1:]
    push_region(
        &grid,
        n,
        Window::new(1, 0, n - 1, n - 1),
        Window::new(0, 1, n - 1, n - 1),
        captures_or_empty,
        &mut mask,
    );
    // board[1:, :n/2] -> board[:-1, :n/2]
    push_region(
        &grid,
        n,
        Window::new(1, 0, n - 1, half),
        Window::new(0, 0, n - 1, half),
        empty,
        &mut mask,
    );
    // flipud(board[1:, n/2:]) -> flipud(board[:-1, n/2:])
    push_region(
        &grid,
        n,
        Window::new(1, half, n - 1, half).flipped(),
        Window::new(0, half, n - 1, half).flipped(),
        empty,
        &mut mask,
    );
    // flipud(board[1:, 1:]) -> flipud(board[:-1, :-1])
    push_region(
        &grid,
        n,
        Window::new(1, 1, n - 1, n - 1).flipped(),
        Window::new(0, 0, n - 1, n - 1).flipped(),
        captures_or_empty,
        &mut mask,
    );

    debug_assert_eq!(mask.len(), codec.action_size());
    trace!(
        "computed mask: {} of {} actions legal",
        mask.iter().filter(|&&v| v).count(),
        mask.len()
    );
    mask
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Action, Player, EMPTY, WHITE};

    #[test]
    fn test_window_reads_rows_in_order() {
        let grid: Vec<i8> = (0..16).collect();
        let cells: Vec<_> = Window::new(1, 1, 2, 2).cells(&grid, 4).collect();
        assert_eq!(cells, vec![5, 6, 9, 10]);
    }

    #[test]
    fn test_flipped_window_reads_rows_bottom_up() {
        let grid: Vec<i8> = (0..16).collect();
        let cells: Vec<_> = Window::new(1, 1, 2, 2).flipped().cells(&grid, 4).collect();
        assert_eq!(cells, vec![9, 10, 5, 6]);
    }

    #[test]
    fn test_empty_board_has_no_moves() {
        let codec = ActionCodec::new(6);
        let mask = canonical_mask(&codec, &Board::new(6));
        assert_eq!(mask.len(), 80);
        assert!(mask.iter().all(|&v| !v));
    }

    #[test]
    fn test_single_piece_matches_decoded_moves() {
        let codec = ActionCodec::new(6);
        let board = Board::new(6).with_cell(3, 2, WHITE);
        let mask = canonical_mask(&codec, &board);

        let legal: Vec<_> = (0..codec.action_size())
            .filter(|&i| mask[i])
            .map(|i| codec.decode(Action::from(i), Player::White))
            .collect();

        assert_eq!(legal.len(), 3);
        for mv in legal {
            assert_eq!((mv.src_row, mv.src_col), (3, 2));
            assert_eq!(mv.dest_row, 2);
            assert_eq!(board.get(mv.dest_row, mv.dest_col), EMPTY);
        }
    }
}
