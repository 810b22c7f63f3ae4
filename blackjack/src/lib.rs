pub mod card;
pub mod error;
pub mod game;
pub mod round;
pub mod score;
#[cfg(test)]
mod testing;

use serde::{Deserialize, Serialize};

pub use card::{Card, Rank, Suit};
pub use error::{BetError, GameOver, RoundError};
pub use game::{Game, GameEnding, GameSummary};
pub use round::{
    deck::Deck, parse_bet, play_round, player::Player, GamePhase, PlayerInput, Round,
    RoundEventHandler, RoundOutcome, RoundStatus, ACTION_PROMPT,
};
pub use score::{determine_winner, score, Winner};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableRules {
    /// Bankroll the human player sits down with.
    pub starting_money: u64,
    /// The dealer keeps drawing while below this score.
    pub dealer_stands_on: u32,
}

impl Default for TableRules {
    fn default() -> Self {
        TableRules {
            starting_money: 1_000,
            dealer_stands_on: 17,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Decision {
    Hit,
    Stand,
}

impl Decision {
    /// Reads a typed action. Anything that is not a hit or a stand is `None`.
    pub fn from_token(token: &str) -> Option<Decision> {
        match token.trim().to_ascii_lowercase().as_str() {
            "h" | "hit" => Some(Decision::Hit),
            "s" | "stand" => Some(Decision::Stand),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decision_tokens() {
        assert_eq!(Decision::from_token("h"), Some(Decision::Hit));
        assert_eq!(Decision::from_token(" S \n"), Some(Decision::Stand));
        assert_eq!(Decision::from_token("stand"), Some(Decision::Stand));
        assert_eq!(Decision::from_token("q"), None);
        assert_eq!(Decision::from_token(""), None);
    }

    #[test]
    fn default_rules() {
        let rules = TableRules::default();
        assert_eq!(rules.starting_money, 1000);
        assert_eq!(rules.dealer_stands_on, 17);
    }
}
