//! External move-selection seam.
//!
//! The engine never chooses among legal candidates itself: a human
//! input path, a search, or an LLM-backed service picks one move from
//! the supplied legal set. Anything outside that set, or an outright
//! failure, is recovered by the session with a uniform random choice.

use rand::prelude::IndexedRandom;
use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::error::OracleError;
use crate::types::{Move, Side};

/// Opaque difficulty tag forwarded to the oracle. The engine does not
/// interpret it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    #[default]
    Standard,
    Hard,
}

/// A move-selection strategy for one side.
pub trait MoveOracle {
    /// Pick exactly one element of `moves` (never empty). Returning a
    /// move outside the list counts as a failure at the call site.
    fn choose(
        &mut self,
        board: &Board,
        side: Side,
        moves: &[Move],
        difficulty: Difficulty,
    ) -> Result<Move, OracleError>;
}

/// Uniform random strategy. Doubles as the fallback behavior when an
/// external oracle fails.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomOracle;

impl MoveOracle for RandomOracle {
    fn choose(
        &mut self,
        _board: &Board,
        _side: Side,
        moves: &[Move],
        _difficulty: Difficulty,
    ) -> Result<Move, OracleError> {
        let mut rng = rand::rng();
        moves
            .choose(&mut rng)
            .copied()
            .ok_or_else(|| OracleError::Unavailable("empty move list".to_string()))
    }
}
