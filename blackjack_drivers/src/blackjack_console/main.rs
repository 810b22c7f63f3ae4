use std::error::Error;
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use blackjack::{Game, GameEnding, GameOver, TableRules};
use blackjack_drivers::console::{ConsolePrompt, ConsoleTable};
use blackjack_drivers::load_config;
use clap::Parser;
use log::error;

#[derive(Debug, Parser)]
#[command(author, about = "Play blackjack against the dealer.", long_about = None)]
struct CommandLineArgs {
    /// The path of the config file. Defaults to ~/.blackjack.yml when it exists
    #[arg(short, long)]
    config: Option<PathBuf>,
    /// Money to sit down with, overriding the config file
    #[arg(short, long)]
    money: Option<u64>,
    /// Stop after this many rounds
    #[arg(short, long)]
    rounds: Option<u32>,
    /// Seed the shuffles for a reproducible game
    #[arg(short, long)]
    seed: Option<u64>,
    /// Never clear the terminal
    #[arg(long)]
    no_clear: bool,
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let args = CommandLineArgs::parse();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(args: CommandLineArgs) -> Result<(), Box<dyn Error>> {
    let mut config = load_config(args.config.as_deref())?;
    if let Some(money) = args.money {
        config.table.starting_money = money;
    }
    if args.no_clear {
        config.console.clear_screen = false;
    }
    let rules: TableRules = config.table.try_into()?;

    let mut game = match args.seed {
        Some(seed) => Game::with_seed(rules, seed),
        None => Game::new(rules),
    };
    if let Some(rounds) = args.rounds {
        game = game.max_rounds(rounds);
    }

    let stdin = io::stdin();
    let mut prompt = ConsolePrompt::new(stdin.lock(), io::stdout());
    let mut table = ConsoleTable::new(io::stdout(), &config.console);
    let summary = game.play(&mut prompt, &mut table)?;

    match summary.ending {
        GameEnding::Bankrupt => println!("{}", GameOver),
        GameEnding::RoundLimit | GameEnding::InputClosed => println!(
            "You leave the table with ${} after {} rounds.",
            summary.final_money, summary.rounds_played
        ),
    }
    Ok(())
}
