use anyhow::Result;
use clap::{Parser, ValueEnum};
use indicatif::ProgressBar;
use log::info;
use rand::{rngs::StdRng, Rng, SeedableRng};

use std::time::Duration;

use connect4_engine::*;

mod terminal;
use terminal::Input;

/// The side a human plays in every mode with a single human
const HUMAN: Side = Side::Red;

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum Mode {
    HumanVsAi,
    HumanVsHuman,
    AiVsAi,
    /// Human vs AI with a move suggestion before every human turn
    Assisted,
}

impl Mode {
    fn is_ai(self, side: Side) -> bool {
        match self {
            Mode::HumanVsAi | Mode::Assisted => side != HUMAN,
            Mode::HumanVsHuman => false,
            Mode::AiVsAi => true,
        }
    }
}

/// Connect 4 in the terminal against a minimax opponent
#[derive(Parser)]
#[command(name = "connect4")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[arg(long, value_enum, default_value_t = Mode::HumanVsAi)]
    mode: Mode,

    /// AI search depth: easy, medium or hard
    #[arg(long, default_value_t = Difficulty::Medium)]
    difficulty: Difficulty,

    /// Seed for the starting side and the search's tie-break draw
    #[arg(long)]
    seed: Option<u64>,

    /// Pause before each AI move, in milliseconds
    #[arg(long, default_value_t = 1000)]
    ai_delay_ms: u64,

    /// Start from a position given as 1-indexed column digits, Red first
    #[arg(long)]
    moves: Option<String>,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let mut config = EngineConfig::default();
    if let Some(seed) = cli.seed {
        config = config.with_seed(seed);
    }
    let mut engine = Engine::new(config);
    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    println!("Welcome to Connect 4\n");

    let mut board = match &cli.moves {
        Some(moves) => Board::from_moves(moves)?,
        None => engine.new_board(),
    };

    let mut side = if cli.moves.is_some() {
        // sides alternate from Red
        if board.num_pieces() % 2 == 0 {
            Side::Red
        } else {
            Side::Yellow
        }
    } else {
        match cli.mode {
            // the human always starts assisted games
            Mode::HumanVsHuman | Mode::Assisted => HUMAN,
            Mode::HumanVsAi | Mode::AiVsAi => {
                if rng.random_bool(0.5) {
                    Side::Red
                } else {
                    Side::Yellow
                }
            }
        }
    };
    info!(
        "starting {:?} game at {} difficulty, {} to move",
        cli.mode, cli.difficulty, side
    );

    // game loop
    loop {
        terminal::display(&board)?;

        match engine.outcome(&board) {
            Outcome::InProgress => {}
            Outcome::Win(winner) => {
                terminal::announce(winner, "wins!")?;
                break;
            }
            Outcome::Draw => {
                println!("It's a draw!");
                break;
            }
        }

        let column = if cli.mode.is_ai(side) {
            let spinner = ProgressBar::new_spinner();
            spinner.set_message(&format!("{} is thinking...", side));
            spinner.enable_steady_tick(100);
            std::thread::sleep(Duration::from_millis(cli.ai_delay_ms));

            let column = engine.choose_move_at(&board, cli.difficulty, side);
            spinner.finish_and_clear();

            let column = column?;
            terminal::announce(side, &format!("plays column {}", column))?;
            column
        } else {
            if cli.mode == Mode::Assisted {
                let spinner = ProgressBar::new_spinner();
                spinner.set_message("Thinking...");
                spinner.enable_steady_tick(100);
                let hint = engine.compute_hint(&board, side);
                spinner.finish_and_clear();
                println!("{}", hint);
            }

            match terminal::read_move(side)? {
                Input::Column(column) => column,
                Input::Quit => break,
                Input::Invalid(input) => {
                    println!("Invalid number: {}", input);
                    continue;
                }
            }
        };

        if let Err(err) = engine.apply_move(&mut board, column, side) {
            println!("{}", err);
            // try the move again
            continue;
        }
        side = side.other();
    }
    Ok(())
}
