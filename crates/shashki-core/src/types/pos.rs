//! Board coordinates.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Square coordinate, `(row, col)` both in `0..8`.
///
/// Row 0 is Black's home edge (rank 8 in algebraic notation), row 7 is
/// White's home edge (rank 1). A square is playable iff `row + col` is
/// odd; `(0, 0)` = `a8` is an off-play light square.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Pos {
    pub row: u8,
    pub col: u8,
}

impl Pos {
    #[inline]
    pub const fn new(row: u8, col: u8) -> Pos {
        debug_assert!(row < 8 && col < 8);
        Pos { row, col }
    }

    /// Dark squares are the playable ones.
    #[inline]
    pub const fn is_playable(self) -> bool {
        (self.row + self.col) % 2 == 1
    }

    /// One diagonal step; `None` when it leaves the board.
    #[inline]
    pub fn step(self, dr: i8, dc: i8) -> Option<Pos> {
        let row = self.row as i8 + dr;
        let col = self.col as i8 + dc;
        if (0..8).contains(&row) && (0..8).contains(&col) {
            Some(Pos::new(row as u8, col as u8))
        } else {
            None
        }
    }
}

/// Algebraic square name: files `a`-`h` left to right, ranks `1`-`8`
/// from White's home edge, so `(0, 0)` is `a8` and `(7, 0)` is `a1`.
impl fmt::Display for Pos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let file = (b'a' + self.col) as char;
        let rank = (b'8' - self.row) as char;
        write!(f, "{file}{rank}")
    }
}

/// Failed to parse an algebraic square name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid square notation: {0:?}")]
pub struct ParsePosError(pub String);

impl std::str::FromStr for Pos {
    type Err = ParsePosError;

    /// Parse an algebraic square name such as `b6`.
    fn from_str(s: &str) -> Result<Pos, ParsePosError> {
        let mut chars = s.chars();
        let (Some(file), Some(rank), None) = (chars.next(), chars.next(), chars.next()) else {
            return Err(ParsePosError(s.to_string()));
        };
        let col = match file {
            'a'..='h' => file as u8 - b'a',
            _ => return Err(ParsePosError(s.to_string())),
        };
        let row = match rank {
            '1'..='8' => b'8' - rank as u8,
            _ => return Err(ParsePosError(s.to_string())),
        };
        Ok(Pos::new(row, col))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_playable_squares() {
        assert!(!Pos::new(0, 0).is_playable());
        assert!(Pos::new(0, 1).is_playable());
        assert!(Pos::new(5, 0).is_playable());
        assert!(!Pos::new(7, 7).is_playable());
    }

    #[test]
    fn test_step_stays_on_board() {
        assert_eq!(Pos::new(0, 1).step(-1, -1), None);
        assert_eq!(Pos::new(0, 1).step(1, 1), Some(Pos::new(1, 2)));
        assert_eq!(Pos::new(7, 0).step(1, -1), None);
    }

    #[test]
    fn test_display_round_trip() {
        for (pos, name) in [
            (Pos::new(0, 0), "a8"),
            (Pos::new(7, 0), "a1"),
            (Pos::new(0, 7), "h8"),
            (Pos::new(7, 7), "h1"),
            (Pos::new(5, 2), "c3"),
        ] {
            assert_eq!(pos.to_string(), name);
            assert_eq!(name.parse::<Pos>().unwrap(), pos);
        }
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!("".parse::<Pos>().is_err());
        assert!("i1".parse::<Pos>().is_err());
        assert!("a9".parse::<Pos>().is_err());
        assert!("a1x".parse::<Pos>().is_err());
    }
}
