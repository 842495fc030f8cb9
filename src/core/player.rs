//! Player identification.
//!
//! ## Player
//!
//! Breakthrough is a two-player game. Players are stored on the board as
//! their sign: `+1` for White (side A, home at the highest-index rows) and
//! `-1` for Black (side B, home at rows 0 and 1). Keeping the sign as the
//! discriminant lets board cells, terminal values and the player share one
//! arithmetic.

use serde::{Deserialize, Serialize};
use std::ops::Neg;

/// One of the two sides.
///
/// The discriminant is the value this side's pieces take on the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(i8)]
pub enum Player {
    /// Side A. Moves toward row 0.
    White = 1,
    /// Side B. Moves toward row `n - 1`.
    Black = -1,
}

impl Player {
    /// Both players in turn order.
    pub const ALL: [Player; 2] = [Player::White, Player::Black];

    /// Get the board value of this player's pieces (`+1` or `-1`).
    #[must_use]
    pub const fn sign(self) -> i8 {
        self as i8
    }

    /// Get the other player.
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Player::White => Player::Black,
            Player::Black => Player::White,
        }
    }

    /// Convert a signed value back into a player.
    ///
    /// Any positive value is White, any negative value is Black, zero is `None`.
    #[must_use]
    pub const fn from_sign(sign: i8) -> Option<Self> {
        if sign > 0 {
            Some(Player::White)
        } else if sign < 0 {
            Some(Player::Black)
        } else {
            None
        }
    }

    /// Board glyph for this player's pieces.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Player::White => 'W',
            Player::Black => 'B',
        }
    }
}

impl Neg for Player {
    type Output = Player;

    fn neg(self) -> Self::Output {
        self.opponent()
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Player::White => write!(f, "White"),
            Player::Black => write!(f, "Black"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_sign() {
        assert_eq!(Player::White.sign(), 1);
        assert_eq!(Player::Black.sign(), -1);
    }

    #[test]
    fn test_player_opponent() {
        assert_eq!(Player::White.opponent(), Player::Black);
        assert_eq!(Player::Black.opponent(), Player::White);
        assert_eq!(-Player::White, Player::Black);
        assert_eq!(-(-Player::Black), Player::Black);
    }

    #[test]
    fn test_player_from_sign() {
        assert_eq!(Player::from_sign(1), Some(Player::White));
        assert_eq!(Player::from_sign(5), Some(Player::White));
        assert_eq!(Player::from_sign(-1), Some(Player::Black));
        assert_eq!(Player::from_sign(0), None);
    }

    #[test]
    fn test_player_display() {
        assert_eq!(format!("{}", Player::White), "White");
        assert_eq!(format!("{}", Player::Black), "Black");
        assert_eq!(Player::White.symbol(), 'W');
        assert_eq!(Player::Black.symbol(), 'B');
    }

    #[test]
    fn test_player_serialization() {
        let json = serde_json::to_string(&Player::Black).unwrap();
        let deserialized: Player = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, Player::Black);
    }
}
