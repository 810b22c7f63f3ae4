use std::collections::VecDeque;

use crate::card::{Card, Rank, Suit};
use crate::error::{BetError, RoundError};
use crate::round::deck::Deck;
use crate::round::player::Player;
use crate::round::{PlayerInput, RoundEventHandler, RoundOutcome};

pub fn card(rank: Rank, suit: Suit) -> Card {
    Card::new(suit, rank)
}

/// Builds a deck that deals `top_first` in the given order.
pub fn stacked(mut top_first: Vec<Card>) -> Deck {
    top_first.reverse();
    Deck::from_cards(top_first)
}

pub fn hand_to_string(player: &Player) -> String {
    player
        .hand
        .iter()
        .map(|card| card.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Answers prompts from fixed queues; an exhausted queue reads as closed input.
#[derive(Debug, Default)]
pub struct ScriptedInput {
    bets: VecDeque<u64>,
    actions: VecDeque<String>,
}

impl ScriptedInput {
    pub fn new(bets: &[u64], actions: &[&str]) -> Self {
        ScriptedInput {
            bets: bets.iter().copied().collect(),
            actions: actions.iter().map(|action| action.to_string()).collect(),
        }
    }

    pub fn remaining_bets(&self) -> usize {
        self.bets.len()
    }

    pub fn remaining_actions(&self) -> usize {
        self.actions.len()
    }
}

impl PlayerInput for ScriptedInput {
    fn prompt_for_bet(&mut self, _money: u64) -> Result<u64, RoundError> {
        self.bets.pop_front().ok_or(RoundError::InputClosed)
    }

    fn prompt_for_action(&mut self, _prompt: &str) -> Result<String, RoundError> {
        self.actions.pop_front().ok_or(RoundError::InputClosed)
    }
}

#[derive(Debug, Default)]
pub struct RecordingHandler {
    pub rounds_begun: Vec<u64>,
    pub rejected: Vec<BetError>,
    /// (dealer, player) as shown during play.
    pub renders: Vec<(String, String)>,
    /// (dealer, player) as shown when the round ends.
    pub final_tables: Vec<(String, String)>,
    pub outcomes: Vec<RoundOutcome>,
}

impl RoundEventHandler for RecordingHandler {
    fn on_round_begin(&mut self, money: u64) {
        self.rounds_begun.push(money);
    }

    fn on_bet_rejected(&mut self, error: &BetError) {
        self.rejected.push(error.clone());
    }

    fn on_cards_changed(&mut self, dealer: &Player, player: &Player) {
        self.renders
            .push((hand_to_string(dealer), hand_to_string(player)));
    }

    fn on_round_end(&mut self, outcome: &RoundOutcome, dealer: &Player, player: &Player) {
        self.final_tables
            .push((hand_to_string(dealer), hand_to_string(player)));
        self.outcomes.push(*outcome);
    }
}
