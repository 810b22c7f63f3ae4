use crate::error::RoundError;
use crate::round::{
    deck::Deck, play_round, player::Player, PlayerInput, RoundEventHandler, RoundStatus,
};
use crate::score::Winner;
use crate::TableRules;
use log::info;
use rand::rngs::StdRng;
use rand::SeedableRng;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEnding {
    /// The player started a round with no money.
    Bankrupt,
    /// The configured number of rounds has been played.
    RoundLimit,
    /// The player stopped answering prompts.
    InputClosed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameSummary {
    pub rounds_played: u32,
    pub wins: u32,
    pub losses: u32,
    pub final_money: u64,
    pub ending: GameEnding,
}

/// Owns the deck and both seats for a whole session and keeps playing rounds
/// until the player goes broke, the round limit is hit or input runs out.
pub struct Game {
    deck: Deck,
    player: Player,
    dealer: Player,
    rules: TableRules,
    rng: StdRng,
    max_rounds: Option<u32>,
}

impl Game {
    pub fn new(rules: TableRules) -> Self {
        Self::with_rng(rules, StdRng::from_entropy())
    }

    /// Creates a game whose shuffles are reproducible.
    pub fn with_seed(rules: TableRules, seed: u64) -> Self {
        Self::with_rng(rules, StdRng::seed_from_u64(seed))
    }

    fn with_rng(rules: TableRules, rng: StdRng) -> Self {
        Game {
            deck: Deck::new(),
            player: Player::new(rules.starting_money),
            dealer: Player::new(0),
            rules,
            rng,
            max_rounds: None,
        }
    }

    pub fn max_rounds(mut self, rounds: u32) -> Self {
        self.max_rounds = Some(rounds);
        self
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn dealer(&self) -> &Player {
        &self.dealer
    }

    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    pub fn play<I, H>(&mut self, input: &mut I, handler: &mut H) -> Result<GameSummary, RoundError>
    where
        I: PlayerInput + ?Sized,
        H: RoundEventHandler + ?Sized,
    {
        let mut rounds_played = 0;
        let mut wins = 0;
        let mut losses = 0;

        let ending = loop {
            if self.max_rounds.is_some_and(|limit| rounds_played >= limit) {
                break GameEnding::RoundLimit;
            }

            self.deck.shuffle_with(&mut self.rng);
            let status = play_round(
                &mut self.deck,
                &mut self.player,
                &mut self.dealer,
                &self.rules,
                input,
                handler,
            );
            match status {
                Ok(RoundStatus::Continue(outcome)) => {
                    rounds_played += 1;
                    match outcome.winner {
                        Winner::Player => wins += 1,
                        Winner::Dealer => losses += 1,
                    }
                }
                Ok(RoundStatus::GameOver(_)) => break GameEnding::Bankrupt,
                Err(RoundError::InputClosed) => {
                    self.collect_cards();
                    break GameEnding::InputClosed;
                }
                Err(error) => return Err(error),
            }
        };

        info!(
            "game ended ({:?}) after {} rounds with {} left",
            ending, rounds_played, self.player.money
        );
        Ok(GameSummary {
            rounds_played,
            wins,
            losses,
            final_money: self.player.money,
            ending,
        })
    }

    /// Puts back any cards still held after an interrupted round.
    fn collect_cards(&mut self) {
        let cards = self.player.take_cards();
        self.deck.return_cards(cards);
        let cards = self.dealer.take_cards();
        self.deck.return_cards(cards);
    }
}
