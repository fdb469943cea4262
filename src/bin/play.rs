use std::io::{self, BufRead, Write};

use clap::Parser;
use clusterchess::cli::{parse_command, render_board_to_string};
use clusterchess::env::GameEnv;
use clusterchess::game::{GameConfig, GamePhase, Roster};

#[derive(Debug, Parser, Clone)]
#[command(name = "clusterchess-play")]
#[command(about = "Hot-seat cluster chess on one terminal")]
struct Args {
    /// Play the reduced one-king-each variant
    #[arg(long)]
    kings_only: bool,

    /// Emit a JSON snapshot after every action instead of the text board
    #[arg(long)]
    json: bool,
}

fn main() {
    let args = Args::parse();

    let roster = if args.kings_only {
        Roster::king_only()
    } else {
        Roster::standard()
    };
    let mut env = GameEnv::new(GameConfig { roster });

    println!("Commands: select <kind> | place <x> <y> | cell <x> <y> | quit");
    print_turn(&env, args.json);

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = match line {
            Ok(line) => line,
            Err(_) => break,
        };
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        if trimmed.eq_ignore_ascii_case("quit") {
            break;
        }

        let action = match parse_command(trimmed, env.current_player()) {
            Ok(action) => action,
            Err(err) => {
                println!("{err}");
                continue;
            }
        };

        let snapshot = env.apply(action);
        if args.json {
            match serde_json::to_string(&snapshot) {
                Ok(encoded) => println!("{encoded}"),
                Err(err) => eprintln!("snapshot encoding failed: {err}"),
            }
        } else {
            print!("{}", render_board_to_string(env.game_state()));
            println!("{}", snapshot.status);
        }

        if matches!(snapshot.phase, GamePhase::Completed { .. }) {
            break;
        }
        let _ = io::stdout().flush();
    }
}

fn print_turn(env: &GameEnv, json: bool) {
    if json {
        if let Ok(encoded) = serde_json::to_string(&env.snapshot()) {
            println!("{encoded}");
        }
    } else {
        print!("{}", render_board_to_string(env.game_state()));
        println!("{}", env.snapshot().status);
    }
}
