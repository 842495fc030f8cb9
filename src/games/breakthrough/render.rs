//! Text renderings of a board.

use crate::core::{Board, BLACK, WHITE};

/// One character per cell, row-major: `.` empty, `W` white, `B` black.
#[must_use]
pub fn string_representation(board: &Board) -> String {
    board.cells().map(|v| glyph(v, '.')).collect()
}

/// Grid with ` | ` between cells and a dashed rule between rows.
///
/// Empty cells render as `_`. The rule is four characters per column.
#[must_use]
pub fn display(board: &Board) -> String {
    let rule = format!("\n{}\n", "-".repeat(4 * board.size()));
    (0..board.size())
        .map(|r| {
            let cells: Vec<String> = board.row(r).map(|v| glyph(v, '_').to_string()).collect();
            format!(" {}", cells.join(" | "))
        })
        .collect::<Vec<_>>()
        .join(&rule)
}

fn glyph(value: i8, empty: char) -> char {
    match value {
        WHITE => 'W',
        BLACK => 'B',
        _ => empty,
    }
}
