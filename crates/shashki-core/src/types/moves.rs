//! Move representation.
//!
//! A `Move` is a single leap: one piece displacement capturing at most
//! one piece. A multi-jump chain is a sequence of leaps applied one at
//! a time; the continuation obligation is enforced by the session, not
//! encoded in the move itself.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::fmt;

use super::Pos;

/// Legal-move list. Draughts positions rarely exceed a few dozen
/// moves, so this stays on the stack.
pub type MoveVec = SmallVec<[Move; 64]>;

/// One leap of one piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub from: Pos,
    pub to: Pos,
    /// Square of the piece removed by this leap, if any.
    pub captured: Option<Pos>,
}

impl Move {
    #[inline]
    pub const fn simple(from: Pos, to: Pos) -> Move {
        Move {
            from,
            to,
            captured: None,
        }
    }

    #[inline]
    pub const fn capture(from: Pos, to: Pos, captured: Pos) -> Move {
        Move {
            from,
            to,
            captured: Some(captured),
        }
    }

    #[inline]
    pub const fn is_capture(self) -> bool {
        self.captured.is_some()
    }
}

/// Draughts notation: `a3-b4` for a simple move, `c3:e5` for a capture.
impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sep = if self.is_capture() { ':' } else { '-' };
        write!(f, "{}{}{}", self.from, sep, self.to)
    }
}
