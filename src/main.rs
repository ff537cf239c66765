use anyhow::Result;

use std::io::{stdin, stdout, Write};

use connect4_model::*;

mod terminal;

fn main() -> Result<()> {
    env_logger::init();

    // an optional move string such as "4453" sets up the starting position
    let game = match std::env::args().nth(1) {
        Some(moves) => Game::from_script(&moves.parse::<Script>()?)?,
        None => Game::new(),
    };
    let mut history = History::new(game);

    let stdin = stdin();

    println!("Welcome to Connect 4\n");

    loop {
        terminal::draw(history.current())?;

        match history.current().state() {
            GameState::Turn(player) => {
                println!("{} to move. 1-{}: drop, u: undo, r: redo, n: new game, q: quit", player, WIDTH)
            }
            GameState::Win(player, _) => println!("{} wins! u: undo, n: new game, q: quit", player),
            GameState::Draw => println!("Draw! u: undo, n: new game, q: quit"),
        }
        print!("> ");
        stdout().flush()?;

        let mut input_str = String::new();
        if stdin.read_line(&mut input_str)? == 0 {
            // end of input
            break;
        }

        match input_str.trim() {
            "q" => break,
            "u" => {
                if !history.undo() {
                    println!("Nothing to undo");
                }
            }
            "r" => {
                if !history.redo() {
                    println!("Nothing to redo");
                }
            }
            "n" => history.reset(),
            other => match other.parse::<usize>() {
                Ok(column @ 1..=WIDTH) => {
                    if let Err(err) = history.try_make_turn(column - 1) {
                        println!("Invalid move: {}", err);
                    }
                }
                _ => println!("Unknown command: {}", other),
            },
        }
    }
    println!("Moves played: {}", history.current().script());
    Ok(())
}
