//! Move application.

use crate::board::Board;
use crate::error::RulesError;
use crate::movegen::{capture_continuations, legal_moves};
use crate::types::{Move, Piece, PieceRank, Pos, Side};

/// Result of applying one leap.
#[derive(Debug, Clone)]
pub struct AppliedMove {
    /// Board after the leap, promotion included.
    pub board: Board,
    pub mv: Move,
    /// Rank of the moved piece before the leap.
    pub rank_before: PieceRank,
    /// Rank at the landing square; differs from `rank_before` exactly
    /// when the leap promoted.
    pub rank_after: PieceRank,
}

impl AppliedMove {
    #[inline]
    pub fn landing(&self) -> Pos {
        self.mv.to
    }

    #[inline]
    pub fn is_capture(&self) -> bool {
        self.mv.is_capture()
    }

    #[inline]
    pub fn was_promotion(&self) -> bool {
        self.rank_before != self.rank_after
    }
}

/// Apply one leap for `side`, validating it against the current legal
/// set first.
///
/// `continuation` names a piece that is mid capture chain; when set,
/// only that piece's capture moves are legal. Promotion happens
/// atomically at the landing square: a man reaching the opponent's
/// back rank lands as a king, and any further captures in the same
/// turn are generated for the king.
///
/// The input board is untouched; history and counters are the draw
/// detector's job, invoked by the session once the ply completes.
pub fn apply_move(
    board: &Board,
    side: Side,
    mv: Move,
    continuation: Option<Pos>,
) -> Result<AppliedMove, RulesError> {
    let piece = match board.piece_at(mv.from) {
        Some(p) if p.side == side => p,
        _ => return Err(RulesError::InvalidMove(mv)),
    };

    let allowed = match continuation {
        Some(from) => capture_continuations(board, from),
        None => legal_moves(board, side),
    };
    if !allowed.contains(&mv) {
        return Err(RulesError::InvalidMove(mv));
    }

    let mut next = board.clone();
    next.clear(mv.from);
    if let Some(captured) = mv.captured {
        next.clear(captured);
    }
    let rank_before = piece.rank;
    let rank_after = if rank_before == PieceRank::Man && mv.to.row == side.promotion_row() {
        PieceRank::King
    } else {
        rank_before
    };
    next.set(mv.to, Piece {
        side,
        rank: rank_after,
    });

    Ok(AppliedMove {
        board: next,
        mv,
        rank_before,
        rank_after,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_move_relocates_piece() {
        let board = Board::initial();
        let mv = Move::simple(Pos::new(5, 0), Pos::new(4, 1));
        let applied = apply_move(&board, Side::White, mv, None).unwrap();
        assert_eq!(applied.board.piece_at(Pos::new(5, 0)), None);
        assert_eq!(
            applied.board.piece_at(Pos::new(4, 1)),
            Some(Piece::man(Side::White))
        );
        assert!(!applied.is_capture());
        assert!(!applied.was_promotion());
    }

    #[test]
    fn test_capture_removes_victim() {
        let mut board = Board::empty();
        board.set(Pos::new(5, 2), Piece::man(Side::White));
        board.set(Pos::new(4, 3), Piece::man(Side::Black));
        let mv = Move::capture(Pos::new(5, 2), Pos::new(3, 4), Pos::new(4, 3));
        let applied = apply_move(&board, Side::White, mv, None).unwrap();
        assert_eq!(applied.board.piece_at(Pos::new(4, 3)), None);
        assert_eq!(applied.board.count_pieces().side_total(Side::Black), 0);
    }

    #[test]
    fn test_promotion_is_atomic() {
        let mut board = Board::empty();
        board.set(Pos::new(1, 2), Piece::man(Side::White));
        let mv = Move::simple(Pos::new(1, 2), Pos::new(0, 1));
        let applied = apply_move(&board, Side::White, mv, None).unwrap();
        assert!(applied.was_promotion());
        assert_eq!(applied.rank_before, PieceRank::Man);
        assert_eq!(applied.rank_after, PieceRank::King);
        assert_eq!(
            applied.board.piece_at(Pos::new(0, 1)),
            Some(Piece::king(Side::White))
        );
    }

    #[test]
    fn test_king_does_not_repromote() {
        let mut board = Board::empty();
        board.set(Pos::new(2, 1), Piece::king(Side::Black));
        let mv = Move::simple(Pos::new(2, 1), Pos::new(7, 6));
        let applied = apply_move(&board, Side::Black, mv, None).unwrap();
        assert!(!applied.was_promotion());
        assert_eq!(applied.rank_after, PieceRank::King);
    }

    #[test]
    fn test_rejects_move_outside_legal_set() {
        let board = Board::initial();
        // Backward step for a white man.
        let mv = Move::simple(Pos::new(5, 0), Pos::new(6, 1));
        assert_eq!(
            apply_move(&board, Side::White, mv, None).unwrap_err(),
            RulesError::InvalidMove(mv)
        );
        // Empty origin square.
        let mv = Move::simple(Pos::new(4, 1), Pos::new(3, 0));
        assert!(apply_move(&board, Side::White, mv, None).is_err());
        // Opponent's piece.
        let mv = Move::simple(Pos::new(2, 1), Pos::new(3, 0));
        assert!(apply_move(&board, Side::White, mv, None).is_err());
    }

    #[test]
    fn test_continuation_restricts_to_chain_piece() {
        let mut board = Board::empty();
        board.set(Pos::new(5, 2), Piece::man(Side::White));
        board.set(Pos::new(5, 6), Piece::man(Side::White));
        board.set(Pos::new(4, 3), Piece::man(Side::Black));
        board.set(Pos::new(4, 5), Piece::man(Side::Black));

        // Mid-chain at (5,2): the other man's capture is rejected.
        let other = Move::capture(Pos::new(5, 6), Pos::new(3, 4), Pos::new(4, 5));
        assert!(apply_move(&board, Side::White, other, Some(Pos::new(5, 2))).is_err());

        let own = Move::capture(Pos::new(5, 2), Pos::new(3, 4), Pos::new(4, 3));
        assert!(apply_move(&board, Side::White, own, Some(Pos::new(5, 2))).is_ok());
    }
}
