use anyhow::Result;
use crossterm::{
    style::{style, Attribute, Color, PrintStyledContent},
    QueueableCommand,
};

use std::io::{stdin, stdout, Write};

use connect4_engine::{Board, Cell, Side, HEIGHT, WIDTH};

/// What the human typed at the move prompt
pub enum Input {
    Column(usize),
    Quit,
    Invalid(String),
}

pub fn side_color(side: Side) -> Color {
    match side {
        Side::Red => Color::Red,
        Side::Yellow => Color::Yellow,
    }
}

pub fn display(board: &Board) -> Result<()> {
    let mut stdout = stdout();

    let cols: String = (0..WIDTH).map(|x| x.to_string()).collect();
    stdout.queue(PrintStyledContent(style(cols + "\n")))?;

    for row in 0..HEIGHT {
        for column in 0..WIDTH {
            stdout.queue(PrintStyledContent(
                style("O")
                    .attribute(Attribute::Bold)
                    .on(Color::DarkBlue)
                    .with(match board.get(row, column) {
                        Cell::Piece(side) => side_color(side),
                        Cell::Empty => Color::DarkBlue,
                    }),
            ))?;
        }
        stdout.queue(PrintStyledContent(style("\n")))?;
    }
    stdout.flush()?;
    Ok(())
}

pub fn announce(side: Side, message: &str) -> Result<()> {
    let mut stdout = stdout();
    stdout
        .queue(PrintStyledContent(
            style(side.name()).attribute(Attribute::Bold).with(side_color(side)),
        ))?
        .queue(PrintStyledContent(style(format!(" {}\n", message))))?;
    stdout.flush()?;
    Ok(())
}

pub fn read_move(side: Side) -> Result<Input> {
    print!("{} move input (0-{}, q to quit) > ", side, WIDTH - 1);
    stdout().flush()?;

    let mut input_str = String::new();
    // end of input
    if stdin().read_line(&mut input_str)? == 0 {
        return Ok(Input::Quit);
    }
    let input = input_str.trim();

    if input.eq_ignore_ascii_case("q") {
        return Ok(Input::Quit);
    }
    match input.parse::<usize>() {
        Ok(column) => Ok(Input::Column(column)),
        Err(_) => Ok(Input::Invalid(input.to_string())),
    }
}
