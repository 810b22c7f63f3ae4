use crate::card::Card;
use crate::score::score;

/// A seat at the table, used for the dealer as well. The dealer's money is
/// never touched.
#[derive(Debug, Clone)]
pub struct Player {
    pub money: u64,
    pub hand: Vec<Card>,
}

impl Player {
    pub fn new(money: u64) -> Player {
        Player {
            money,
            hand: Vec::with_capacity(5),
        }
    }

    pub fn receive_card(&mut self, card: Card) {
        self.hand.push(card);
    }

    pub fn score(&self) -> u32 {
        score(&self.hand)
    }

    pub fn is_bankrupt(&self) -> bool {
        self.money == 0
    }

    /// Turns every card in the hand face up.
    pub fn reveal_hand(&mut self) {
        for card in &mut self.hand {
            card.face_up = true;
        }
    }

    /// Empties the hand, handing the cards back to the caller.
    pub fn take_cards(&mut self) -> Vec<Card> {
        std::mem::take(&mut self.hand)
    }
}

impl Default for Player {
    fn default() -> Self {
        Player::new(crate::TableRules::default().starting_money)
    }
}
