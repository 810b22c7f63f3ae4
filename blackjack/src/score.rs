use serde::{Deserialize, Serialize};

use crate::card::Card;

pub const BLACKJACK: u32 = 21;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Winner {
    Player,
    Dealer,
}

impl std::fmt::Display for Winner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Winner::Player => write!(f, "player"),
            Winner::Dealer => write!(f, "dealer"),
        }
    }
}

/// Calculates the blackjack score of a hand. Aces count 11 unless that would
/// bust the hand, in which case each ace in turn drops to 1.
pub fn score(cards: &[Card]) -> u32 {
    let mut total: u32 = cards.iter().map(|card| card.rank.blackjack_value()).sum();
    for card in cards {
        if total > BLACKJACK && card.is_ace() {
            total -= 10;
        }
    }
    total
}

/// Decides who takes the round.
///
/// This is the house rule of this table, not casino blackjack: a busted player
/// still wins against a busted dealer, and a tie at or below 21 goes to the
/// player.
pub fn determine_winner(player_score: u32, dealer_score: u32) -> Winner {
    if player_score == BLACKJACK
        || dealer_score > BLACKJACK
        || (player_score >= dealer_score && player_score <= BLACKJACK)
    {
        Winner::Player
    } else {
        Winner::Dealer
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::{Rank, Suit};

    fn hand(ranks: &[Rank]) -> Vec<Card> {
        ranks.iter().map(|rank| Card::new(Suit::Spade, *rank)).collect()
    }

    #[test]
    fn empty_hand_scores_zero() {
        assert_eq!(score(&[]), 0);
    }

    #[test]
    fn hands_without_aces_sum_face_values() {
        assert_eq!(score(&hand(&[Rank::Two, Rank::Three, Rank::Five])), 10);
        assert_eq!(score(&hand(&[Rank::King, Rank::Queen, Rank::Five])), 25);
        assert_eq!(score(&hand(&[Rank::Jack, Rank::Nine])), 19);
    }

    #[test]
    fn ace_counts_eleven_when_it_fits() {
        assert_eq!(score(&hand(&[Rank::King, Rank::Ace])), 21);
        assert_eq!(score(&hand(&[Rank::Ace, Rank::Six])), 17);
    }

    #[test]
    fn aces_drop_to_one_when_busting() {
        assert_eq!(score(&hand(&[Rank::King, Rank::Ace, Rank::Ace])), 12);
        assert_eq!(score(&hand(&[Rank::Ace, Rank::Six, Rank::Nine])), 16);
        assert_eq!(score(&hand(&[Rank::Ace, Rank::Ace, Rank::Ace, Rank::Ace])), 14);
    }

    #[test]
    fn busted_hand_with_aces_stays_busted_once_aces_run_out() {
        assert_eq!(score(&hand(&[Rank::Ace, Rank::King, Rank::Queen, Rank::Five])), 26);
    }

    #[test]
    fn face_down_cards_still_score() {
        let mut cards = hand(&[Rank::Queen, Rank::King]);
        cards[1].face_up = false;
        assert_eq!(score(&cards), 20);
    }

    #[test]
    fn player_with_twenty_one_wins() {
        assert_eq!(determine_winner(21, 20), Winner::Player);
        assert_eq!(determine_winner(21, 21), Winner::Player);
    }

    #[test]
    fn busted_player_loses_to_standing_dealer() {
        assert_eq!(determine_winner(22, 20), Winner::Dealer);
    }

    #[test]
    fn dealer_bust_pays_player() {
        assert_eq!(determine_winner(18, 23), Winner::Player);
        // Both bust: the dealer bust clause still applies.
        assert_eq!(determine_winner(24, 23), Winner::Player);
    }

    #[test]
    fn ties_go_to_the_player() {
        assert_eq!(determine_winner(18, 18), Winner::Player);
    }

    #[test]
    fn lower_score_loses() {
        assert_eq!(determine_winner(13, 20), Winner::Dealer);
    }
}
