//! # shashki-core
//!
//! Rules engine for Russian draughts (shashki): board representation,
//! legal move generation with board-wide mandatory captures and
//! multi-jump chains, flying-king movement, atomic promotion, and the
//! draw/termination detector (repetition, king dominance, stagnation,
//! king-endgame no-progress).
//!
//! ## Module layout
//!
//! - `types`: basic types (Side, PieceRank, Piece, Pos, Move)
//! - `board`: 8x8 board, occupancy digest, piece counts
//! - `movegen`: legal move generation and capture continuations
//! - `apply`: move application with promotion at landing
//! - `draw`: game history, draw counters, terminal status
//! - `session`: one game's composition root
//! - `oracle`: external move-selection seam

pub mod apply;
pub mod board;
pub mod draw;
pub mod error;
pub mod movegen;
pub mod oracle;
pub mod session;
pub mod types;

pub use apply::{apply_move, AppliedMove};
pub use board::{Board, BoardHash, PieceCount, BOARD_SIZE};
pub use draw::{
    game_status, DominanceClock, DrawCounters, DrawReason, GameHistory, GameStatus, HistoryEntry,
    PlySummary,
};
pub use error::{OracleError, RulesError};
pub use movegen::{capture_continuations, legal_moves, legal_moves_from};
pub use oracle::{Difficulty, MoveOracle, RandomOracle};
pub use session::{GameSession, PlyOutcome};
pub use types::{Move, MoveVec, Piece, PieceRank, Pos, Side};
