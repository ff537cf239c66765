use anyhow::Result;
use crossterm::{
    cursor::MoveTo,
    style::{style, Attribute, Color, PrintStyledContent},
    QueueableCommand,
};

use std::io::{stdout, Write};

use connect4_model::{Game, Player, Position, HEIGHT, WIDTH};

/// Draws the board of `game` below the cursor, bottom row last.
///
/// Cells of a winning four in a row are drawn on a lighter background.
pub fn draw(game: &Game) -> Result<()> {
    let mut stdout = stdout();

    let cols: String = (1..=WIDTH).map(|x| x.to_string()).collect();
    stdout.queue(PrintStyledContent(style(cols + "\n")))?;
    for _ in 0..HEIGHT {
        stdout.queue(PrintStyledContent(style("\n")))?;
    }
    stdout.flush()?;

    let (origin_x, origin_y) = crossterm::cursor::position()?;
    let winning_cells = game.winning_cells().unwrap_or_default();

    for pos in Position::all() {
        let (pos_x, pos_y) = (
            origin_x + pos.col() as u16,
            origin_y - 1 - pos.row() as u16,
        );
        let background = if winning_cells.contains(pos) {
            Color::Grey
        } else {
            Color::DarkBlue
        };

        stdout
            .queue(MoveTo(pos_x, pos_y))?
            .queue(PrintStyledContent(
                style("O")
                    .attribute(Attribute::Bold)
                    .on(background)
                    .with(match game.board()[pos] {
                        Some(Player::Odd) => Color::Yellow,
                        Some(Player::Even) => Color::Red,
                        None => background,
                    }),
            ))?;
    }
    stdout
        .queue(MoveTo(origin_x, origin_y))?
        .queue(PrintStyledContent(style("\n")))?;
    stdout.flush()?;
    Ok(())
}
