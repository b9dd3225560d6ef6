//! Board representation: an 8x8 grid of optionally occupied squares.
//!
//! Only dark squares (`(row + col)` odd) are playable; a light square
//! must never hold a piece. Staging positions through [`Board::set`]
//! is unchecked so tests and front ends can build arbitrary setups;
//! the invariant is enforced by the explicit [`Board::validate`] call.

use crate::error::RulesError;
use crate::types::{Piece, PieceRank, Pos, Side};

/// Board edge length.
pub const BOARD_SIZE: usize = 8;

/// Occupancy digest used for repetition detection: 3 bits per playable
/// square (empty, or side x rank) packed in board order. A pure
/// function of occupancy, never of how the position was reached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BoardHash(u128);

/// Per-side piece tallies.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PieceCount {
    pub white_men: u32,
    pub white_kings: u32,
    pub black_men: u32,
    pub black_kings: u32,
}

impl PieceCount {
    #[inline]
    pub const fn men(self, side: Side) -> u32 {
        match side {
            Side::White => self.white_men,
            Side::Black => self.black_men,
        }
    }

    #[inline]
    pub const fn kings(self, side: Side) -> u32 {
        match side {
            Side::White => self.white_kings,
            Side::Black => self.black_kings,
        }
    }

    #[inline]
    pub const fn side_total(self, side: Side) -> u32 {
        self.men(side) + self.kings(side)
    }

    #[inline]
    pub const fn total(self) -> u32 {
        self.white_men + self.white_kings + self.black_men + self.black_kings
    }
}

/// 8x8 board. `None` is an empty square; light squares stay `None` on
/// any well-formed board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    squares: [[Option<Piece>; BOARD_SIZE]; BOARD_SIZE],
}

impl Board {
    /// Board with no pieces.
    pub fn empty() -> Board {
        Board {
            squares: [[None; BOARD_SIZE]; BOARD_SIZE],
        }
    }

    /// Starting position: 12 Black men on the playable squares of rows
    /// 0-2, 12 White men on rows 5-7.
    pub fn initial() -> Board {
        let mut board = Board::empty();
        for row in 0..BOARD_SIZE as u8 {
            for col in 0..BOARD_SIZE as u8 {
                let pos = Pos::new(row, col);
                if !pos.is_playable() {
                    continue;
                }
                if row < 3 {
                    board.set(pos, Piece::man(Side::Black));
                } else if row > 4 {
                    board.set(pos, Piece::man(Side::White));
                }
            }
        }
        board
    }

    #[inline]
    pub fn piece_at(&self, pos: Pos) -> Option<Piece> {
        self.squares[pos.row as usize][pos.col as usize]
    }

    #[inline]
    pub fn set(&mut self, pos: Pos, piece: Piece) {
        self.squares[pos.row as usize][pos.col as usize] = Some(piece);
    }

    #[inline]
    pub fn clear(&mut self, pos: Pos) {
        self.squares[pos.row as usize][pos.col as usize] = None;
    }

    /// All pieces of one side, in row-major order.
    pub fn pieces(&self, side: Side) -> impl Iterator<Item = (Pos, Piece)> + '_ {
        self.squares.iter().enumerate().flat_map(move |(r, row)| {
            row.iter().enumerate().filter_map(move |(c, &sq)| {
                sq.filter(|p| p.side == side)
                    .map(|p| (Pos::new(r as u8, c as u8), p))
            })
        })
    }

    pub fn count_pieces(&self) -> PieceCount {
        let mut count = PieceCount::default();
        for row in &self.squares {
            for piece in row.iter().flatten() {
                let slot = match (piece.side, piece.rank) {
                    (Side::White, PieceRank::Man) => &mut count.white_men,
                    (Side::White, PieceRank::King) => &mut count.white_kings,
                    (Side::Black, PieceRank::Man) => &mut count.black_men,
                    (Side::Black, PieceRank::King) => &mut count.black_kings,
                };
                *slot += 1;
            }
        }
        count
    }

    /// Check the off-play invariant, reporting the first violating
    /// square.
    pub fn validate(&self) -> Result<(), RulesError> {
        for row in 0..BOARD_SIZE as u8 {
            for col in 0..BOARD_SIZE as u8 {
                let pos = Pos::new(row, col);
                if !pos.is_playable() && self.piece_at(pos).is_some() {
                    return Err(RulesError::MalformedBoard(pos));
                }
            }
        }
        Ok(())
    }

    /// Occupancy digest for repetition comparison.
    pub fn hash(&self) -> BoardHash {
        let mut acc: u128 = 0;
        for row in 0..BOARD_SIZE as u8 {
            for col in 0..BOARD_SIZE as u8 {
                let pos = Pos::new(row, col);
                if !pos.is_playable() {
                    continue;
                }
                let code: u128 = match self.piece_at(pos) {
                    None => 0,
                    Some(p) => 1 + 2 * p.side.index() as u128 + p.is_king() as u128,
                };
                acc = (acc << 3) | code;
            }
        }
        BoardHash(acc)
    }
}

impl Default for Board {
    fn default() -> Board {
        Board::initial()
    }
}
