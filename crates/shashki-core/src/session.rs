//! One game of Russian draughts.
//!
//! `GameSession` is the composition root the front end and the move
//! oracle talk to. It owns the board, the side to move, the pending
//! capture-chain obligation, and the draw detector's running state,
//! and exposes a single "propose move, apply, report status"
//! operation. The engine is synchronous; a multi-jump chain is a
//! sequence of [`propose_move`] calls, and the turn does not pass
//! until the chain piece has no capture left.
//!
//! [`propose_move`]: GameSession::propose_move

use log::{debug, warn};
use rand::prelude::IndexedRandom;

use crate::apply::apply_move;
use crate::board::Board;
use crate::draw::{game_status, DrawCounters, GameHistory, GameStatus, PlySummary};
use crate::error::RulesError;
use crate::movegen::{capture_continuations, legal_moves, legal_moves_from};
use crate::oracle::{Difficulty, MoveOracle};
use crate::types::{Move, MoveVec, PieceRank, Pos, Side};

/// Result of one accepted leap.
#[derive(Debug, Clone)]
pub enum PlyOutcome {
    /// The leap captured and the same piece can capture again: the
    /// turn has not passed, and `moves` is the complete legal set.
    ContinueCapture { from: Pos, moves: MoveVec },
    /// The ply is complete; history, counters, and status are updated
    /// and the turn has passed unless the game ended.
    TurnOver { status: GameStatus },
}

/// Facts accumulated over the current capture chain.
#[derive(Debug, Clone, Copy)]
struct ChainState {
    rank_before: PieceRank,
    captured: bool,
}

/// A single game: board, side to move, and detector state. A new game
/// is a fresh instance; nothing here is shared or rolled back.
#[derive(Debug, Clone)]
pub struct GameSession {
    board: Board,
    side_to_move: Side,
    /// Square of the piece that must keep capturing, if mid-chain.
    continuation: Option<Pos>,
    chain: Option<ChainState>,
    history: GameHistory,
    counters: DrawCounters,
    status: GameStatus,
}

impl GameSession {
    /// Fresh game: initial board, White to move, history seeded with
    /// the starting position.
    pub fn new() -> GameSession {
        let board = Board::initial();
        let mut history = GameHistory::new();
        history.record(board.hash(), Side::White);
        GameSession {
            board,
            side_to_move: Side::White,
            continuation: None,
            chain: None,
            history,
            counters: DrawCounters::new(),
            status: GameStatus::Playing,
        }
    }

    /// Start a game from a staged position. The board is checked
    /// against the off-play invariant first; the history is seeded
    /// with the given position.
    pub fn from_position(board: Board, side_to_move: Side) -> Result<GameSession, RulesError> {
        board.validate()?;
        let mut history = GameHistory::new();
        history.record(board.hash(), side_to_move);
        Ok(GameSession {
            board,
            side_to_move,
            continuation: None,
            chain: None,
            history,
            counters: DrawCounters::new(),
            status: GameStatus::Playing,
        })
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn side_to_move(&self) -> Side {
        self.side_to_move
    }

    #[inline]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Square of the piece that must continue its capture chain, if
    /// any.
    #[inline]
    pub fn continuation(&self) -> Option<Pos> {
        self.continuation
    }

    #[inline]
    pub fn history(&self) -> &GameHistory {
        &self.history
    }

    #[inline]
    pub fn counters(&self) -> &DrawCounters {
        &self.counters
    }

    /// The complete legal set in the current state (continuation
    /// aware). Empty once the game is over.
    pub fn legal_moves(&self) -> MoveVec {
        if self.status.is_over() {
            return MoveVec::new();
        }
        match self.continuation {
            Some(from) => capture_continuations(&self.board, from),
            None => legal_moves(&self.board, self.side_to_move),
        }
    }

    /// Moves of the piece on `from`, for selection highlighting. Empty
    /// when that piece cannot act right now, e.g. because another
    /// piece holds a mandatory capture or the chain obligation.
    pub fn legal_moves_for(&self, from: Pos) -> MoveVec {
        if self.status.is_over() {
            return MoveVec::new();
        }
        match self.continuation {
            Some(chain) if chain == from => capture_continuations(&self.board, chain),
            Some(_) => MoveVec::new(),
            None => legal_moves_from(&self.board, self.side_to_move, from),
        }
    }

    /// Validate and apply one leap.
    ///
    /// Rejects with [`RulesError::InvalidMove`] anything outside the
    /// current legal set, including any move once the game is over.
    pub fn propose_move(&mut self, mv: Move) -> Result<PlyOutcome, RulesError> {
        if self.status.is_over() {
            return Err(RulesError::InvalidMove(mv));
        }
        let applied = apply_move(&self.board, self.side_to_move, mv, self.continuation)?;

        let chain = match self.chain.take() {
            Some(mut chain) => {
                chain.captured |= applied.is_capture();
                chain
            }
            None => ChainState {
                rank_before: applied.rank_before,
                captured: applied.is_capture(),
            },
        };
        let landing = applied.landing();
        let rank_after = applied.rank_after;
        self.board = applied.board;
        debug!("{} played {mv}", self.side_to_move);

        if chain.captured {
            let moves = capture_continuations(&self.board, landing);
            if !moves.is_empty() {
                self.continuation = Some(landing);
                self.chain = Some(chain);
                debug!("capture chain continues from {landing}");
                return Ok(PlyOutcome::ContinueCapture {
                    from: landing,
                    moves,
                });
            }
        }

        Ok(self.finish_ply(chain, rank_after))
    }

    /// Close out a completed ply: record history, advance the draw
    /// counters, recompute the status, pass the turn.
    fn finish_ply(&mut self, chain: ChainState, rank_after: PieceRank) -> PlyOutcome {
        let mover = self.side_to_move;
        let next_side = mover.opponent();
        self.continuation = None;

        let summary = PlySummary {
            mover,
            rank_before: chain.rank_before,
            rank_after,
            captured: chain.captured,
        };
        self.counters.update(summary, self.board.count_pieces());
        self.history.record(self.board.hash(), next_side);
        self.status = game_status(&self.board, next_side, &self.history, &self.counters);
        if !self.status.is_over() {
            self.side_to_move = next_side;
        } else {
            debug!("game over: {:?}", self.status);
        }
        PlyOutcome::TurnOver {
            status: self.status,
        }
    }

    /// Drive one full ply (a simple move or a whole capture chain) for
    /// the side to move through an external oracle.
    ///
    /// Each leap, forced continuations included, is offered to the
    /// oracle. A failed call, or a returned move outside the legal
    /// set, falls back to a uniform random choice from that set; the
    /// game always continues.
    pub fn play_oracle_ply(
        &mut self,
        oracle: &mut dyn MoveOracle,
        difficulty: Difficulty,
    ) -> Result<PlyOutcome, RulesError> {
        loop {
            let moves = self.legal_moves();
            let mut rng = rand::rng();
            let Some(&fallback) = moves.choose(&mut rng) else {
                // Game already decided; nothing to play.
                return Ok(PlyOutcome::TurnOver {
                    status: self.status,
                });
            };

            let chosen = match oracle.choose(&self.board, self.side_to_move, &moves, difficulty) {
                Ok(mv) if moves.contains(&mv) => mv,
                Ok(mv) => {
                    warn!("oracle chose {mv} outside the legal set, falling back to random");
                    fallback
                }
                Err(err) => {
                    warn!("oracle failed ({err}), falling back to random");
                    fallback
                }
            };

            match self.propose_move(chosen)? {
                PlyOutcome::ContinueCapture { .. } => continue,
                done @ PlyOutcome::TurnOver { .. } => return Ok(done),
            }
        }
    }
}

impl Default for GameSession {
    fn default() -> GameSession {
        GameSession::new()
    }
}
