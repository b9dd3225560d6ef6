//! Basic types for the draughts engine.

mod moves;
mod piece;
mod pos;
mod side;

pub use moves::{Move, MoveVec};
pub use piece::{Piece, PieceRank};
pub use pos::{ParsePosError, Pos};
pub use side::Side;
