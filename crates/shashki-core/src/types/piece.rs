//! Pieces: men and kings.

use serde::{Deserialize, Serialize};

use super::Side;

/// Piece rank. A man becomes a king the moment it lands on the
/// opponent's back rank, and may continue a capture chain as a king
/// within the same turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PieceRank {
    Man,
    King,
}

/// A piece on the board: owner plus rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Piece {
    pub side: Side,
    pub rank: PieceRank,
}

impl Piece {
    #[inline]
    pub const fn man(side: Side) -> Piece {
        Piece {
            side,
            rank: PieceRank::Man,
        }
    }

    #[inline]
    pub const fn king(side: Side) -> Piece {
        Piece {
            side,
            rank: PieceRank::King,
        }
    }

    #[inline]
    pub const fn is_king(self) -> bool {
        matches!(self.rank, PieceRank::King)
    }
}
