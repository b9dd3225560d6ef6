//! Error taxonomy.
//!
//! "No legal moves" and "no pieces left" are ordinary [`GameStatus`]
//! outcomes, never errors.
//!
//! [`GameStatus`]: crate::draw::GameStatus

use thiserror::Error;

use crate::types::{Move, Pos};

/// Rule-level failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RulesError {
    /// The proposed move is not in the current legal set: a caller bug
    /// or stale UI state. Recoverable by recomputing the legal moves.
    #[error("illegal move {0}")]
    InvalidMove(Move),
    /// A piece sits on an off-play light square. This indicates a bug
    /// upstream; the operation is aborted rather than the board
    /// silently repaired.
    #[error("malformed board: piece on off-play square {0}")]
    MalformedBoard(Pos),
}

/// The external move source returned nothing usable. Recovered locally
/// by a uniform random choice from the legal set; the game continues.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OracleError {
    #[error("oracle unavailable: {0}")]
    Unavailable(String),
    #[error("oracle proposed a move outside the supplied legal set")]
    NotInLegalSet,
}
