//! Plain-text board rendering.

use shashki_core::{Board, PieceRank, Pos, Side, BOARD_SIZE};

/// Render the board as ASCII with file and rank labels. Dark (playable)
/// squares show `.` when empty and `w`/`W`/`b`/`B` for men and kings;
/// light squares stay blank.
pub fn board_text(board: &Board) -> String {
    let mut out = String::new();
    out.push_str("  +-----------------+\n");
    for row in 0..BOARD_SIZE {
        out.push(char::from(b'8' - row as u8));
        out.push_str(" |");
        for col in 0..BOARD_SIZE {
            let pos = Pos::new(row as u8, col as u8);
            out.push(' ');
            out.push(square_char(board, pos));
        }
        out.push_str(" |\n");
    }
    out.push_str("  +-----------------+\n");
    out.push_str("    a b c d e f g h\n");
    out
}

fn square_char(board: &Board, pos: Pos) -> char {
    if !pos.is_playable() {
        return ' ';
    }
    match board.piece_at(pos) {
        None => '.',
        Some(piece) => {
            let ch = match piece.side {
                Side::White => 'w',
                Side::Black => 'b',
            };
            match piece.rank {
                PieceRank::Man => ch,
                PieceRank::King => ch.to_ascii_uppercase(),
            }
        }
    }
}
