// Terminal front end: play Russian draughts against the engine.

mod notation;
mod render;

use std::io::{self, BufRead, Write as _};

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use rand::prelude::IndexedRandom;
use rand::Rng;
use shashki_core::{
    Difficulty, DrawReason, GameSession, GameStatus, Move, MoveOracle, PlyOutcome, RandomOracle,
    Side,
};

use notation::{parse_move_text, result_tag, MoveLog};
use render::board_text;

#[derive(ValueEnum, Debug, Clone, Copy)]
enum ColorArg {
    White,
    Black,
    Random,
}

#[derive(ValueEnum, Debug, Clone, Copy)]
enum DifficultyArg {
    Easy,
    Standard,
    Hard,
}

impl From<DifficultyArg> for Difficulty {
    fn from(arg: DifficultyArg) -> Difficulty {
        match arg {
            DifficultyArg::Easy => Difficulty::Easy,
            DifficultyArg::Standard => Difficulty::Standard,
            DifficultyArg::Hard => Difficulty::Hard,
        }
    }
}

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Side you play
    #[arg(long, value_enum, default_value_t = ColorArg::White)]
    color: ColorArg,

    /// Difficulty tag forwarded to the engine opponent
    #[arg(long, value_enum, default_value_t = DifficultyArg::Standard)]
    difficulty: DifficultyArg,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,
}

fn main() {
    let args = Args::parse();

    let log_level = if args.debug { "debug" } else { "info" };
    env_logger::Builder::from_env(
        env_logger::Env::default().filter_or(env_logger::DEFAULT_FILTER_ENV, log_level),
    )
    .format(|buf, record| {
        writeln!(buf, "[{}] {}: {}", record.level(), record.target(), record.args())
    })
    .target(env_logger::Target::Stderr)
    .init();

    if let Err(e) = run(args) {
        log::error!("Fatal error: {e}");
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<()> {
    let human = match args.color {
        ColorArg::White => Side::White,
        ColorArg::Black => Side::Black,
        ColorArg::Random => {
            if rand::rng().random_bool(0.5) {
                Side::White
            } else {
                Side::Black
            }
        }
    };
    let difficulty = Difficulty::from(args.difficulty);
    log::info!("new game: you play {human}, difficulty {difficulty:?}");

    let mut session = GameSession::new();
    let mut oracle = RandomOracle;
    let mut log = MoveLog::new();
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    println!("You play {human}. Enter moves like a3-b4; 'moves' lists options, 'quit' resigns the session.");
    println!("{}", board_text(session.board()));

    while !session.status().is_over() {
        let mover = session.side_to_move();
        if mover == human {
            if !human_ply(&mut session, &mut log, &mut lines)? {
                break;
            }
        } else {
            engine_ply(&mut session, &mut oracle, difficulty, &mut log)?;
        }
        log.finish_ply(mover);
        println!("{}", board_text(session.board()));
    }

    let status = session.status();
    log.finish_game(status);
    println!("{}", describe_status(status));
    println!();
    for line in log.lines() {
        println!("{line}");
    }
    Ok(())
}

/// Read and apply one complete human ply, forced continuations
/// included. Returns `false` if the user quit instead.
fn human_ply(
    session: &mut GameSession,
    log: &mut MoveLog,
    lines: &mut impl Iterator<Item = io::Result<String>>,
) -> Result<bool> {
    loop {
        let moves = session.legal_moves();
        if let Some(from) = session.continuation() {
            println!("capture continues from {from}:");
            for mv in &moves {
                println!("  {mv}");
            }
        }
        print!("{}> ", session.side_to_move());
        io::stdout().flush()?;

        let Some(line) = lines.next() else {
            return Ok(false);
        };
        let line = line.context("failed to read input")?;
        let text = line.trim();
        match text {
            "" => continue,
            "quit" | "exit" => return Ok(false),
            "moves" => {
                for mv in &moves {
                    println!("  {mv}");
                }
                continue;
            }
            "board" => {
                println!("{}", board_text(session.board()));
                continue;
            }
            _ => {}
        }

        let Some((from, to)) = parse_move_text(text) else {
            println!("could not read '{text}', expected something like a3-b4");
            continue;
        };
        let Some(&mv) = moves.iter().find(|m| m.from == from && m.to == to) else {
            println!("{from}-{to} is not legal here ('moves' lists the options)");
            continue;
        };

        log.record_leap(&mv);
        match session.propose_move(mv)? {
            PlyOutcome::ContinueCapture { .. } => continue,
            PlyOutcome::TurnOver { .. } => return Ok(true),
        }
    }
}

/// Drive one complete engine ply through the oracle, printing each
/// leap. An oracle failure or an out-of-set response falls back to a
/// uniform random legal move.
fn engine_ply(
    session: &mut GameSession,
    oracle: &mut dyn MoveOracle,
    difficulty: Difficulty,
    log: &mut MoveLog,
) -> Result<()> {
    loop {
        let moves = session.legal_moves();
        let mv = match oracle.choose(session.board(), session.side_to_move(), &moves, difficulty) {
            Ok(mv) if moves.contains(&mv) => mv,
            Ok(mv) => {
                log::warn!("oracle chose {mv} outside the legal set, falling back to random");
                random_member(&moves)?
            }
            Err(err) => {
                log::warn!("oracle failed ({err}), falling back to random");
                random_member(&moves)?
            }
        };

        println!("{} plays {mv}", session.side_to_move());
        log.record_leap(&mv);
        match session.propose_move(mv)? {
            PlyOutcome::ContinueCapture { .. } => continue,
            PlyOutcome::TurnOver { .. } => return Ok(()),
        }
    }
}

fn random_member(moves: &[Move]) -> Result<Move> {
    moves
        .choose(&mut rand::rng())
        .copied()
        .context("no legal moves available")
}

fn describe_status(status: GameStatus) -> String {
    let verdict = match status {
        GameStatus::Playing => "game unfinished".to_string(),
        GameStatus::Win(side) => format!("{side} wins"),
        GameStatus::Draw(reason) => {
            let why = match reason {
                DrawReason::Repetition => "threefold repetition",
                DrawReason::KingDominance => "king dominance held too long",
                DrawReason::Stagnation => "no progress by kings",
                DrawReason::NoProgressKingEndgame => "drawn king endgame",
            };
            format!("draw: {why}")
        }
    };
    format!("{verdict} {{{}}}", result_tag(status))
}
