//! Terminal front end: the reference display consumer for a game session.
//!
//! Reads moves as coordinate pairs from stdin, renders the board after every
//! published snapshot, and shows a thinking indicator while the engine
//! request is in flight.

use anyhow::Result;
use clap::Parser;
use shakmaty::{Color, File, Position, Rank, Square};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::EnvFilter;

use remote_chess::{EngineClient, EngineConfig, GameSession, Phase, TurnState};

#[derive(Parser)]
#[command(name = "remote-chess")]
#[command(version, about = "Play chess against a remote engine service")]
struct Cli {
    /// Base URL of the engine service
    #[arg(long, default_value = "http://localhost:2828")]
    engine_url: String,

    /// Search depth sent with every engine request
    #[arg(long, default_value_t = 3)]
    depth: u32,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let client = EngineClient::new(EngineConfig {
        base_url: cli.engine_url,
        depth: cli.depth,
    });
    let mut session = GameSession::new(client);

    // Display consumer: render every snapshot as it is published.
    let mut updates = session.subscribe();
    tokio::spawn(async move {
        while updates.changed().await.is_ok() {
            let state = updates.borrow_and_update().clone();
            render(&state);
        }
    });

    println!("you play white; enter moves as from/to squares, e.g. e2e4 (quit to exit)");
    render(session.state());

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let input = line.trim();
        if input.is_empty() {
            continue;
        }
        if input == "quit" {
            break;
        }

        let Some((from, to)) = parse_squares(input) else {
            println!("could not read {input:?}; moves look like e2e4");
            continue;
        };

        if let Err(err) = session.play_turn(from, to).await {
            println!("{err}");
        }

        if session.state().position.is_game_over() {
            println!("game over");
            break;
        }
    }

    Ok(())
}

fn parse_squares(input: &str) -> Option<(Square, Square)> {
    let bytes = input.as_bytes();
    if bytes.len() != 4 {
        return None;
    }
    let from = Square::from_ascii(&bytes[0..2]).ok()?;
    let to = Square::from_ascii(&bytes[2..4]).ok()?;
    Some((from, to))
}

fn render(state: &TurnState) {
    let board = state.position.board();
    let mut out = String::new();

    for rank in (0..8u32).rev() {
        out.push((b'1' + rank as u8) as char);
        out.push(' ');
        for file in 0..8u32 {
            let sq = Square::from_coords(File::new(file), Rank::new(rank));
            match board.piece_at(sq) {
                Some(piece) => out.push(piece.char()),
                None => out.push('.'),
            }
            out.push(' ');
        }
        out.push('\n');
    }
    out.push_str("  a b c d e f g h");

    println!();
    if let Some(last) = &state.last_move {
        println!("last move: {last}");
    }
    println!("{out}");
    match state.phase {
        Phase::AwaitingEngine => println!("computer is thinking..."),
        Phase::AwaitingHuman => match state.position.turn() {
            Color::White => println!("white to move"),
            Color::Black => println!("black to move"),
        },
    }
}
