//! `<file><rank><file><rank>` move notation, e.g. `a2a3`.
//!
//! Files are letters from `a` at column 0. Rank 1 is the last row (White's
//! home edge), so on an 8×8 board `a2` is row 6, column 0. Ranks may take
//! more than one digit on boards wider than 9.

use crate::core::{Move, NotationError};

/// Parse a move for a `size`×`size` board.
///
/// ```
/// use breakthrough::agents::parse_move;
/// use breakthrough::core::Move;
///
/// assert_eq!(parse_move("a2a3", 8).unwrap(), Move::new(6, 0, 5, 0));
/// ```
pub fn parse_move(text: &str, size: usize) -> Result<Move, NotationError> {
    let (src, rest) = parse_square(text, size)?;
    let (dest, rest) = parse_square(rest, size)?;
    if !rest.is_empty() {
        return Err(NotationError::Length);
    }
    Ok(Move::new(src.0, src.1, dest.0, dest.1))
}

/// Format a move in the notation accepted by [`parse_move`].
#[must_use]
pub fn format_move(mv: Move, size: usize) -> String {
    format!(
        "{}{}",
        format_square(mv.src_row, mv.src_col, size),
        format_square(mv.dest_row, mv.dest_col, size)
    )
}

fn format_square(row: usize, col: usize, size: usize) -> String {
    let file = (b'a' + col as u8) as char;
    format!("{}{}", file, size - row)
}

/// Parse one square off the front of `text`, returning `(row, col)` and the rest.
fn parse_square(text: &str, size: usize) -> Result<((usize, usize), &str), NotationError> {
    let file = text.chars().next().ok_or(NotationError::Length)?;
    if !file.is_ascii_alphabetic() {
        return Err(NotationError::File);
    }
    let col = (file.to_ascii_lowercase() as u8 - b'a') as usize;

    let rest = &text[1..];
    let digits = rest.bytes().take_while(u8::is_ascii_digit).count();
    if digits == 0 {
        return Err(if rest.is_empty() {
            NotationError::Length
        } else {
            NotationError::Rank
        });
    }
    let rank: usize = rest[..digits].parse().map_err(|_| NotationError::Rank)?;

    if col >= size || rank == 0 || rank > size {
        return Err(NotationError::OutOfBoard { size });
    }
    Ok(((size - rank, col), &rest[digits..]))
}
