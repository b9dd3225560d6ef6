//! Draughts notation: ply strings and the numbered game log.
//!
//! Squares use algebraic names (`a1`..`h8`, provided by `Pos`). A
//! simple ply reads `e3-d4`; a capture chain joins every station with
//! `:`  (`c3:e5:g7`). Completed plies pair up into numbered full moves
//! from White's perspective, `1. e3-d4 d6-c5`, with `...` standing in
//! for a missing White half when a game starts from a staged position.

use shashki_core::{GameStatus, Move, Pos, Side};

/// Result tag from White's perspective, `*` while undecided.
pub fn result_tag(status: GameStatus) -> &'static str {
    match status {
        GameStatus::Playing => "*",
        GameStatus::Win(Side::White) => "1-0",
        GameStatus::Win(Side::Black) => "0-1",
        GameStatus::Draw(_) => "1/2-1/2",
    }
}

/// Parse user input of the form `a3-b4`, `a3:c5`, or `a3 c5` into an
/// origin/destination pair. Captured squares are resolved against the
/// legal set by the caller, never typed by the user.
pub fn parse_move_text(text: &str) -> Option<(Pos, Pos)> {
    let mut parts = text.trim().split(['-', ':', 'x', ' ']).filter(|p| !p.is_empty());
    let from = parts.next()?.parse().ok()?;
    let to = parts.next()?.parse().ok()?;
    if parts.next().is_some() {
        return None;
    }
    Some((from, to))
}

/// Accumulates the move text of one game.
#[derive(Debug, Default)]
pub struct MoveLog {
    lines: Vec<String>,
    move_number: u32,
    white_part: Option<String>,
    /// Stations of the ply being assembled, `from` first.
    stations: Vec<Pos>,
    capture: bool,
}

impl MoveLog {
    pub fn new() -> MoveLog {
        MoveLog {
            move_number: 1,
            ..MoveLog::default()
        }
    }

    /// Record one leap of the current ply.
    pub fn record_leap(&mut self, mv: &Move) {
        if self.stations.is_empty() {
            self.stations.push(mv.from);
        }
        self.stations.push(mv.to);
        self.capture |= mv.is_capture();
    }

    /// Close the current ply for `mover` and fold it into the log.
    pub fn finish_ply(&mut self, mover: Side) {
        let sep = if self.capture { ":" } else { "-" };
        let ply = self
            .stations
            .drain(..)
            .map(|p| p.to_string())
            .collect::<Vec<_>>()
            .join(sep);
        self.capture = false;
        if ply.is_empty() {
            return;
        }

        match mover {
            Side::White => {
                self.white_part = Some(format!("{}. {ply}", self.move_number));
            }
            Side::Black => {
                let white = self
                    .white_part
                    .take()
                    .unwrap_or_else(|| format!("{}. ...", self.move_number));
                self.lines.push(format!("{white} {ply}"));
                self.move_number += 1;
            }
        }
    }

    /// Flush any dangling White half-move and append the result tag.
    pub fn finish_game(&mut self, status: GameStatus) {
        let tag = result_tag(status);
        match self.white_part.take() {
            Some(white) => self.lines.push(format!("{white} {{{tag}}}")),
            None => match self.lines.last_mut() {
                Some(last) => {
                    last.push_str(&format!(" {{{tag}}}"));
                }
                None => self.lines.push(format!("{{{tag}}}")),
            },
        }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }
}
