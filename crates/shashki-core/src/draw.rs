//! Game history, draw counters, and terminal status.
//!
//! Four draw triggers with different counting windows coexist here:
//!
//! 1. threefold repetition of (position, side to move);
//! 2. king dominance: >= 3 kings against a lone king (no men) for 15
//!    consecutive dominant-side moves;
//! 3. stagnation: 15 consecutive non-capturing king plies;
//! 4. no-progress king endgames: once both sides hold a king, a
//!    piece-count-dependent number of plies without capture or
//!    promotion (5 for 2-3 total pieces, 30 for 4-5, 60 for 6-7).
//!
//! History entries and counters advance exactly once per completed ply
//! (the end of a full capture chain), each a pure function of the
//! previous value, the ply just made, and the resulting piece counts.

use serde::{Deserialize, Serialize};

use crate::board::{Board, BoardHash, PieceCount};
use crate::movegen::legal_moves;
use crate::types::{PieceRank, Side};

/// Identical (position, side-to-move) pairs that end the game.
pub const REPETITIONS_FOR_DRAW: u32 = 3;
/// Dominant-side moves under the king-dominance configuration.
pub const KING_DOMINANCE_DRAW_MOVES: u32 = 15;
/// Consecutive non-capturing king plies.
pub const STAGNATION_DRAW_MOVES: u32 = 15;

const KING_ENDGAME_LIMIT_2_3: u32 = 5;
const KING_ENDGAME_LIMIT_4_5: u32 = 30;
const KING_ENDGAME_LIMIT_6_7: u32 = 60;

/// Why a game ended in a draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DrawReason {
    Repetition,
    KingDominance,
    Stagnation,
    NoProgressKingEndgame,
}

/// Game state after a completed ply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    Playing,
    Win(Side),
    Draw(DrawReason),
}

impl GameStatus {
    #[inline]
    pub const fn is_over(self) -> bool {
        !matches!(self, GameStatus::Playing)
    }
}

/// One record per completed ply: position digest plus whose turn came
/// next.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HistoryEntry {
    pub hash: BoardHash,
    pub side_to_move: Side,
}

/// Append-only record of positions reached at ply boundaries, seeded
/// with the starting position.
#[derive(Debug, Clone, Default)]
pub struct GameHistory {
    entries: Vec<HistoryEntry>,
}

impl GameHistory {
    pub fn new() -> GameHistory {
        GameHistory::default()
    }

    pub fn record(&mut self, hash: BoardHash, side_to_move: Side) {
        self.entries.push(HistoryEntry { hash, side_to_move });
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// How often this (position, side to move) pair has been recorded.
    pub fn occurrences(&self, hash: BoardHash, side_to_move: Side) -> u32 {
        self.entries
            .iter()
            .filter(|e| e.hash == hash && e.side_to_move == side_to_move)
            .count() as u32
    }
}

/// Facts about a completed ply that the counters depend on.
#[derive(Debug, Clone, Copy)]
pub struct PlySummary {
    pub mover: Side,
    /// Rank of the moved piece when the ply began.
    pub rank_before: PieceRank,
    /// Rank at the end of the ply.
    pub rank_after: PieceRank,
    /// Whether any leap of the ply captured.
    pub captured: bool,
}

impl PlySummary {
    #[inline]
    pub const fn was_promotion(self) -> bool {
        matches!(
            (self.rank_before, self.rank_after),
            (PieceRank::Man, PieceRank::King)
        )
    }
}

/// Move clock for the king-dominance rule. Neutral (`owner: None`)
/// whenever the dominant configuration is absent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DominanceClock {
    pub owner: Option<Side>,
    pub moves: u32,
}

/// Draw-rule counters, advanced exactly once per completed ply. All
/// reset to zero/neutral at game start and are never rolled back.
#[derive(Debug, Clone, Copy, Default)]
pub struct DrawCounters {
    pub dominance: DominanceClock,
    pub stagnation: u32,
    pub king_endgame: u32,
}

impl DrawCounters {
    pub fn new() -> DrawCounters {
        DrawCounters::default()
    }

    /// Advance the counters for one completed ply, given the piece
    /// counts of the resulting board.
    pub fn update(&mut self, ply: PlySummary, counts: PieceCount) {
        // Dominance: the clock counts only the dominant side's own
        // moves, and resets the instant the configuration lapses or
        // its owner changes.
        self.dominance = match dominant_side(counts) {
            Some(owner) => {
                let increment = (ply.mover == owner) as u32;
                let moves = if self.dominance.owner == Some(owner) {
                    self.dominance.moves + increment
                } else {
                    increment
                };
                DominanceClock {
                    owner: Some(owner),
                    moves,
                }
            }
            None => DominanceClock::default(),
        };

        // Stagnation: any man move or any capture resets.
        if ply.rank_before == PieceRank::King && !ply.captured {
            self.stagnation += 1;
        } else {
            self.stagnation = 0;
        }

        // King endgame: counted only while both sides hold a king; any
        // capture or promotion resets.
        let both_have_kings = counts.kings(Side::White) > 0 && counts.kings(Side::Black) > 0;
        if both_have_kings && !ply.captured && !ply.was_promotion() {
            self.king_endgame += 1;
        } else {
            self.king_endgame = 0;
        }
    }
}

/// The side holding >= 3 kings against a lone enemy king, provided the
/// weaker side has no men.
fn dominant_side(counts: PieceCount) -> Option<Side> {
    for side in [Side::White, Side::Black] {
        let weak = side.opponent();
        if counts.kings(side) >= 3 && counts.kings(weak) == 1 && counts.men(weak) == 0 {
            return Some(side);
        }
    }
    None
}

/// Ply threshold for the no-progress rule; `None` means the rule is
/// inactive at this piece count.
fn king_endgame_limit(total_pieces: u32) -> Option<u32> {
    match total_pieces {
        2..=3 => Some(KING_ENDGAME_LIMIT_2_3),
        4..=5 => Some(KING_ENDGAME_LIMIT_4_5),
        6..=7 => Some(KING_ENDGAME_LIMIT_6_7),
        _ => None,
    }
}

/// Terminal status after a completed ply, first match wins.
///
/// `side_to_move` is the side whose turn comes next; the entry for the
/// position being judged must already be recorded in `history`, and
/// `counters` must already be advanced for the ply.
pub fn game_status(
    board: &Board,
    side_to_move: Side,
    history: &GameHistory,
    counters: &DrawCounters,
) -> GameStatus {
    let counts = board.count_pieces();

    // Wins: out of pieces, or out of moves.
    if counts.side_total(side_to_move.opponent()) == 0 {
        return GameStatus::Win(side_to_move);
    }
    if counts.side_total(side_to_move) == 0 {
        return GameStatus::Win(side_to_move.opponent());
    }
    if legal_moves(board, side_to_move).is_empty() {
        return GameStatus::Win(side_to_move.opponent());
    }

    if history.occurrences(board.hash(), side_to_move) >= REPETITIONS_FOR_DRAW {
        return GameStatus::Draw(DrawReason::Repetition);
    }

    if dominant_side(counts).is_some() && counters.dominance.moves >= KING_DOMINANCE_DRAW_MOVES {
        return GameStatus::Draw(DrawReason::KingDominance);
    }

    if counters.stagnation >= STAGNATION_DRAW_MOVES {
        return GameStatus::Draw(DrawReason::Stagnation);
    }

    if counts.kings(Side::White) > 0 && counts.kings(Side::Black) > 0 {
        if let Some(limit) = king_endgame_limit(counts.total()) {
            if counters.king_endgame >= limit {
                return GameStatus::Draw(DrawReason::NoProgressKingEndgame);
            }
        }
    }

    GameStatus::Playing
}
