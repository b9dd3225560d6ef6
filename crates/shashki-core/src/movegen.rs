//! Legal move generation.
//!
//! Capture is mandatory board-wide: if any piece of the side to move
//! can capture, only capture moves are legal, for every piece. Men
//! step one square diagonally forward but capture one square in any
//! diagonal direction; kings fly any distance along clear diagonals
//! and capture the first (lone) enemy piece on a diagonal, landing on
//! any empty square beyond it before the next blocker. A single leap
//! removes at most one piece; chains are sequences of leaps driven by
//! [`capture_continuations`].

use crate::board::Board;
use crate::types::{Move, MoveVec, Piece, PieceRank, Pos, Side};

const DIAGONALS: [(i8, i8); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];

/// All legal moves for `side`.
pub fn legal_moves(board: &Board, side: Side) -> MoveVec {
    let mut captures = MoveVec::new();
    let mut quiets = MoveVec::new();
    for (pos, piece) in board.pieces(side) {
        piece_moves(board, pos, piece, &mut captures, &mut quiets);
    }
    if captures.is_empty() {
        quiets
    } else {
        captures
    }
}

/// Legal moves restricted to the piece on `from`.
///
/// May legitimately be empty while the side still has moves: under
/// mandatory capture a piece without a capture of its own cannot move
/// as long as another piece can capture.
pub fn legal_moves_from(board: &Board, side: Side, from: Pos) -> MoveVec {
    legal_moves(board, side)
        .into_iter()
        .filter(|m| m.from == from)
        .collect()
}

/// Capture moves of the piece on `from`, for continuing a jump chain.
/// Empty means the chain is over and the turn must be finalized. Never
/// contains simple moves.
pub fn capture_continuations(board: &Board, from: Pos) -> MoveVec {
    let mut captures = MoveVec::new();
    let mut quiets = MoveVec::new();
    if let Some(piece) = board.piece_at(from) {
        piece_moves(board, from, piece, &mut captures, &mut quiets);
    }
    captures
}

fn piece_moves(
    board: &Board,
    pos: Pos,
    piece: Piece,
    captures: &mut MoveVec,
    quiets: &mut MoveVec,
) {
    match piece.rank {
        PieceRank::Man => man_moves(board, pos, piece.side, captures, quiets),
        PieceRank::King => king_moves(board, pos, piece.side, captures, quiets),
    }
}

fn man_moves(board: &Board, pos: Pos, side: Side, captures: &mut MoveVec, quiets: &mut MoveVec) {
    // Simple steps go forward only.
    for dc in [-1, 1] {
        if let Some(to) = pos.step(side.forward(), dc) {
            if board.piece_at(to).is_none() {
                quiets.push(Move::simple(pos, to));
            }
        }
    }

    // Captures are legal backward as well.
    for (dr, dc) in DIAGONALS {
        let Some(over) = pos.step(dr, dc) else { continue };
        let Some(victim) = board.piece_at(over) else { continue };
        if victim.side == side {
            continue;
        }
        let Some(land) = over.step(dr, dc) else { continue };
        if board.piece_at(land).is_none() {
            captures.push(Move::capture(pos, land, over));
        }
    }
}

fn king_moves(board: &Board, pos: Pos, side: Side, captures: &mut MoveVec, quiets: &mut MoveVec) {
    for (dr, dc) in DIAGONALS {
        // The first enemy piece met on the diagonal, if any.
        let mut victim: Option<Pos> = None;
        let mut cur = pos;
        while let Some(next) = cur.step(dr, dc) {
            cur = next;
            match board.piece_at(cur) {
                None => match victim {
                    None => quiets.push(Move::simple(pos, cur)),
                    Some(v) => captures.push(Move::capture(pos, cur, v)),
                },
                Some(p) if p.side == side => break,
                Some(_) => {
                    if victim.is_some() {
                        // A second enemy piece before any landing
                        // square blocks the whole direction.
                        break;
                    }
                    victim = Some(cur);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_with(pieces: &[(Pos, Piece)]) -> Board {
        let mut board = Board::empty();
        for &(pos, piece) in pieces {
            board.set(pos, piece);
        }
        board
    }

    #[test]
    fn test_man_simple_moves_forward_only() {
        let board = board_with(&[(Pos::new(5, 2), Piece::man(Side::White))]);
        let moves = legal_moves(&board, Side::White);
        assert_eq!(moves.len(), 2);
        assert!(moves.contains(&Move::simple(Pos::new(5, 2), Pos::new(4, 1))));
        assert!(moves.contains(&Move::simple(Pos::new(5, 2), Pos::new(4, 3))));
    }

    #[test]
    fn test_man_captures_backward() {
        let board = board_with(&[
            (Pos::new(4, 3), Piece::man(Side::White)),
            (Pos::new(5, 4), Piece::man(Side::Black)),
        ]);
        let moves = legal_moves(&board, Side::White);
        assert_eq!(
            moves.as_slice(),
            [Move::capture(Pos::new(4, 3), Pos::new(6, 5), Pos::new(5, 4))]
        );
    }

    #[test]
    fn test_mandatory_capture_suppresses_simple_moves() {
        let board = board_with(&[
            (Pos::new(5, 2), Piece::man(Side::White)),
            (Pos::new(5, 6), Piece::man(Side::White)),
            (Pos::new(4, 3), Piece::man(Side::Black)),
        ]);
        let moves = legal_moves(&board, Side::White);
        assert!(moves.iter().all(|m| m.is_capture()));
        assert_eq!(
            moves.as_slice(),
            [Move::capture(Pos::new(5, 2), Pos::new(3, 4), Pos::new(4, 3))]
        );

        // The other man has no capture, so it has no legal moves at
        // all right now.
        assert!(legal_moves_from(&board, Side::White, Pos::new(5, 6)).is_empty());
        assert_eq!(
            legal_moves_from(&board, Side::White, Pos::new(5, 2)).len(),
            1
        );
    }

    #[test]
    fn test_capture_needs_empty_landing_square() {
        let board = board_with(&[
            (Pos::new(5, 2), Piece::man(Side::White)),
            (Pos::new(4, 3), Piece::man(Side::Black)),
            (Pos::new(3, 4), Piece::man(Side::Black)),
        ]);
        // Landing square occupied, so only the simple steps remain.
        let moves = legal_moves(&board, Side::White);
        assert!(moves.iter().all(|m| !m.is_capture()));
    }

    #[test]
    fn test_king_flies_along_clear_diagonals() {
        let board = board_with(&[(Pos::new(4, 3), Piece::king(Side::White))]);
        let moves = legal_moves(&board, Side::White);
        // 3 + 4 + 3 + 3 reachable squares from (4,3).
        assert_eq!(moves.len(), 13);
        assert!(moves.contains(&Move::simple(Pos::new(4, 3), Pos::new(0, 7))));
        assert!(moves.contains(&Move::simple(Pos::new(4, 3), Pos::new(7, 0))));
    }

    #[test]
    fn test_king_capture_lands_anywhere_beyond_victim() {
        let board = board_with(&[
            (Pos::new(6, 5), Piece::king(Side::White)),
            (Pos::new(4, 3), Piece::man(Side::Black)),
        ]);
        let moves = legal_moves(&board, Side::White);
        assert!(moves.iter().all(|m| m.is_capture()));
        let landings: Vec<Pos> = moves.iter().map(|m| m.to).collect();
        assert_eq!(
            landings,
            vec![Pos::new(3, 2), Pos::new(2, 1), Pos::new(1, 0)]
        );
        assert!(moves.iter().all(|m| m.captured == Some(Pos::new(4, 3))));
    }

    #[test]
    fn test_king_blocked_by_own_piece() {
        // Own man shields the enemy piece from the king, and the man's
        // own jump over it is blocked by the occupied landing square.
        let board = board_with(&[
            (Pos::new(6, 5), Piece::king(Side::White)),
            (Pos::new(5, 4), Piece::man(Side::White)),
            (Pos::new(4, 3), Piece::man(Side::Black)),
            (Pos::new(3, 2), Piece::man(Side::White)),
        ]);
        let moves = legal_moves(&board, Side::White);
        assert!(moves.iter().all(|m| !m.is_capture()));
        // Four king quiets on the open diagonals plus three man steps.
        assert_eq!(moves.len(), 7);
    }

    #[test]
    fn test_king_blocked_by_second_enemy_piece() {
        let board = board_with(&[
            (Pos::new(7, 6), Piece::king(Side::White)),
            (Pos::new(5, 4), Piece::man(Side::Black)),
            (Pos::new(4, 3), Piece::man(Side::Black)),
        ]);
        // Two enemy pieces in line with no gap: direction blocked.
        let moves = legal_moves(&board, Side::White);
        assert!(moves.iter().all(|m| !m.is_capture()));
    }

    #[test]
    fn test_king_captures_one_piece_per_leap() {
        // Gap between the two enemy pieces: the king may land in the
        // gap (capturing the first), but never beyond the second.
        let board = board_with(&[
            (Pos::new(7, 6), Piece::king(Side::White)),
            (Pos::new(5, 4), Piece::man(Side::Black)),
            (Pos::new(2, 1), Piece::man(Side::Black)),
        ]);
        let moves = legal_moves(&board, Side::White);
        let landings: Vec<Pos> = moves.iter().map(|m| m.to).collect();
        assert_eq!(landings, vec![Pos::new(4, 3), Pos::new(3, 2)]);
        assert!(moves.iter().all(|m| m.captured == Some(Pos::new(5, 4))));
    }

    #[test]
    fn test_capture_continuations_only_captures() {
        let board = board_with(&[
            (Pos::new(5, 2), Piece::man(Side::White)),
            (Pos::new(4, 3), Piece::man(Side::Black)),
        ]);
        let conts = capture_continuations(&board, Pos::new(5, 2));
        assert_eq!(conts.len(), 1);
        assert!(conts[0].is_capture());

        // No capture available: the chain is over, simple moves are
        // never offered on this path.
        let quiet = board_with(&[(Pos::new(5, 2), Piece::man(Side::White))]);
        assert!(capture_continuations(&quiet, Pos::new(5, 2)).is_empty());
        assert!(capture_continuations(&quiet, Pos::new(3, 0)).is_empty());
    }
}
