use std::io::{self, BufRead, Write};

use blackjack::{
    parse_bet, BetError, Player, PlayerInput, RoundError, RoundEventHandler, RoundOutcome, Winner,
};
use crossterm::{
    cursor::MoveTo,
    queue,
    terminal::{Clear, ClearType},
};
use log::{debug, warn};

use crate::ConfigConsole;

/// Reads bets and actions from a line-based reader, writing prompts to `writer`.
pub struct ConsolePrompt<R, W> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> ConsolePrompt<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        ConsolePrompt { reader, writer }
    }

    pub fn into_writer(self) -> W {
        self.writer
    }

    fn read_answer(&mut self, prompt: &str) -> Result<String, RoundError> {
        write!(self.writer, "{}", prompt)?;
        self.writer.flush()?;
        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Err(RoundError::InputClosed);
        }
        Ok(line.trim().to_string())
    }
}

impl<R: BufRead, W: Write> PlayerInput for ConsolePrompt<R, W> {
    fn prompt_for_bet(&mut self, money: u64) -> Result<u64, RoundError> {
        let prompt = format!("How much of your ${} would you like to wager? ", money);
        loop {
            let answer = self.read_answer(&prompt)?;
            match parse_bet(&answer) {
                Ok(wager) => return Ok(wager),
                Err(error) => {
                    debug!("unreadable bet {:?}", answer);
                    writeln!(self.writer, "{}", error)?;
                }
            }
        }
    }

    fn prompt_for_action(&mut self, prompt: &str) -> Result<String, RoundError> {
        self.read_answer(prompt)
    }
}

/// Draws the table after every change and announces the winner.
pub struct ConsoleTable<W> {
    writer: W,
    clear_screen: bool,
    width: usize,
}

impl<W: Write> ConsoleTable<W> {
    pub fn new(writer: W, config: &ConfigConsole) -> Self {
        ConsoleTable {
            writer,
            clear_screen: config.clear_screen,
            width: config.width,
        }
    }

    pub fn into_writer(self) -> W {
        self.writer
    }

    fn clear(&mut self) -> io::Result<()> {
        if self.clear_screen {
            queue!(self.writer, Clear(ClearType::All), MoveTo(0, 0))?;
        }
        Ok(())
    }

    fn draw(&mut self, dealer: &Player, player: &Player, winner: Option<Winner>) -> io::Result<()> {
        self.clear()?;
        writeln!(self.writer, "{}", format_cards(dealer, player, self.width))?;
        if let Some(winner) = winner {
            writeln!(self.writer, "{}", format_winner(winner, self.width))?;
        }
        self.writer.flush()
    }
}

impl<W: Write> RoundEventHandler for ConsoleTable<W> {
    fn on_round_begin(&mut self, money: u64) {
        debug!("new round, player has {}", money);
    }

    fn on_bet_rejected(&mut self, error: &BetError) {
        if let Err(e) = writeln!(self.writer, "{}", error) {
            warn!("cannot write to console: {}", e);
        }
    }

    fn on_cards_changed(&mut self, dealer: &Player, player: &Player) {
        if let Err(e) = self.draw(dealer, player, None) {
            warn!("cannot write to console: {}", e);
        }
    }

    fn on_round_end(&mut self, outcome: &RoundOutcome, dealer: &Player, player: &Player) {
        if let Err(e) = self.draw(dealer, player, Some(outcome.winner)) {
            warn!("cannot write to console: {}", e);
        }
    }
}

fn join_cards(player: &Player) -> String {
    player
        .hand
        .iter()
        .map(|card| card.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Both hands under centered headers, followed by the player's running total.
pub fn format_cards(dealer: &Player, player: &Player, width: usize) -> String {
    let total = format!("total: {}", player.score());
    format!(
        "{:-^width$}\n{}\n{:-^width$}\n{}\n{:^width$}",
        "dealer",
        join_cards(dealer),
        "player",
        join_cards(player),
        total,
        width = width
    )
}

pub fn format_winner(winner: Winner, width: usize) -> String {
    let banner = match winner {
        Winner::Player => "Player wins!",
        Winner::Dealer => "Dealer wins!",
    };
    format!("{:@^width$}", banner, width = width)
}
