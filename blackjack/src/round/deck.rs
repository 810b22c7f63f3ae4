use crate::card::{Card, Rank, Suit};
use crate::error::RoundError;

use strum::IntoEnumIterator;

use rand::seq::SliceRandom;
use rand::{thread_rng, Rng};

pub const DECK_SIZE: usize = 52;

/// Represents a single deck in the real world. The last card of `cards` is the
/// top of the deck and is dealt first.
#[derive(Debug, Clone)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Creates a new deck with ordered cards, one of each rank for every suit.
    pub fn new() -> Deck {
        let mut cards = Vec::with_capacity(DECK_SIZE);
        for suit in Suit::iter() {
            for rank in Rank::iter() {
                cards.push(Card::new(suit, rank));
            }
        }
        Deck { cards }
    }

    /// Creates a deck holding exactly the given cards, top card last.
    pub fn from_cards(cards: Vec<Card>) -> Deck {
        Deck { cards }
    }

    pub fn shuffle(&mut self) {
        self.cards.shuffle(&mut thread_rng());
    }

    pub fn shuffle_with<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards.shuffle(rng);
    }

    /// Removes the top card and turns it the requested way up.
    pub fn deal(&mut self, face_up: bool) -> Result<Card, RoundError> {
        let mut card = self.cards.pop().ok_or(RoundError::EmptyDeck)?;
        card.face_up = face_up;
        Ok(card)
    }

    /// Puts cards back on top of the deck in the given order, without shuffling.
    pub fn return_cards<I: IntoIterator<Item = Card>>(&mut self, cards: I) {
        self.cards.extend(cards);
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }
}

impl Default for Deck {
    fn default() -> Self {
        Deck::new()
    }
}

impl std::fmt::Display for Deck {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let listed: Vec<String> = self
            .cards
            .iter()
            .map(|card| format!("{}{},", card.rank.label(), card.suit.symbol()))
            .collect();
        write!(f, "{}", listed.join(" "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn distinct_cards(deck: &Deck) -> HashSet<(Suit, Rank)> {
        deck.cards.iter().map(|card| (card.suit, card.rank)).collect()
    }

    #[test]
    fn new_deck_is_complete_and_ordered() {
        let deck = Deck::new();
        assert_eq!(deck.len(), DECK_SIZE);
        assert_eq!(distinct_cards(&deck).len(), DECK_SIZE);
        assert_eq!(deck.cards[0], Card::new(Suit::Spade, Rank::Ace));
        assert_eq!(deck.cards[13], Card::new(Suit::Diamond, Rank::Ace));
        assert_eq!(deck.cards[51], Card::new(Suit::Club, Rank::King));
    }

    #[test]
    fn shuffle_keeps_the_same_cards() {
        let mut deck = Deck::new();
        let before = distinct_cards(&deck);
        deck.shuffle();
        assert_eq!(deck.len(), DECK_SIZE);
        assert_eq!(distinct_cards(&deck), before);
    }

    #[test]
    fn seeded_shuffle_is_reproducible_and_reorders() {
        let mut first = Deck::new();
        let mut second = Deck::new();
        first.shuffle_with(&mut StdRng::seed_from_u64(7));
        second.shuffle_with(&mut StdRng::seed_from_u64(7));
        assert_eq!(first.cards, second.cards);
        assert_ne!(first.cards, Deck::new().cards);
    }

    #[test]
    fn deal_takes_from_the_top() {
        let mut deck = Deck::new();
        let card = deck.deal(true).unwrap();
        assert_eq!(card.to_string(), "K♣");
        assert_eq!(deck.len(), DECK_SIZE - 1);
        assert_eq!(deck.cards.last().unwrap().to_string(), "Q♣");

        let hidden = deck.deal(false).unwrap();
        assert_eq!(hidden.to_string(), "??");
        assert_eq!((hidden.rank, hidden.suit), (Rank::Queen, Suit::Club));
    }

    #[test]
    fn dealing_from_an_empty_deck_fails() {
        let mut deck = Deck::from_cards(vec![Card::new(Suit::Heart, Rank::Five)]);
        assert!(deck.deal(true).is_ok());
        assert!(deck.is_empty());
        assert!(matches!(deck.deal(true), Err(RoundError::EmptyDeck)));
    }

    #[test]
    fn returned_cards_go_on_top_in_order() {
        let mut deck = Deck::from_cards(Vec::new());
        deck.return_cards(vec![
            Card::new(Suit::Spade, Rank::Two),
            Card::new(Suit::Spade, Rank::Three),
        ]);
        assert_eq!(deck.deal(true).unwrap().rank, Rank::Three);
        assert_eq!(deck.deal(true).unwrap().rank, Rank::Two);
    }

    #[test]
    fn display_lists_every_card() {
        let deck = Deck::new();
        let listed = deck.to_string();
        assert!(listed.starts_with("A♠, 2♠, 3♠,"));
        assert!(listed.ends_with("Q♣, K♣,"));
    }
}
