//! Side to move.

use serde::{Deserialize, Serialize};

/// One of the two players.
///
/// White homes on row 7 and its men advance toward row 0; Black homes
/// on row 0 and advances toward row 7. White always moves first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Side {
    White = 0,
    Black = 1,
}

impl Side {
    /// Number of sides.
    pub const NUM: usize = 2;

    /// The other side.
    #[inline]
    pub const fn opponent(self) -> Side {
        match self {
            Side::White => Side::Black,
            Side::Black => Side::White,
        }
    }

    /// Row delta a man of this side advances in.
    #[inline]
    pub const fn forward(self) -> i8 {
        match self {
            Side::White => -1,
            Side::Black => 1,
        }
    }

    /// Opponent's back rank, where a man of this side promotes.
    #[inline]
    pub const fn promotion_row(self) -> u8 {
        match self {
            Side::White => 0,
            Side::Black => 7,
        }
    }

    /// Index for array access.
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }
}

impl std::ops::Not for Side {
    type Output = Side;

    #[inline]
    fn not(self) -> Side {
        self.opponent()
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Side::White => write!(f, "White"),
            Side::Black => write!(f, "Black"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_side_opponent() {
        assert_eq!(Side::White.opponent(), Side::Black);
        assert_eq!(Side::Black.opponent(), Side::White);
    }

    #[test]
    fn test_side_not() {
        assert_eq!(!Side::White, Side::Black);
        assert_eq!(!Side::Black, Side::White);
    }

    #[test]
    fn test_side_forward() {
        assert_eq!(Side::White.forward(), -1);
        assert_eq!(Side::Black.forward(), 1);
    }

    #[test]
    fn test_side_promotion_row() {
        assert_eq!(Side::White.promotion_row(), 0);
        assert_eq!(Side::Black.promotion_row(), 7);
    }
}
