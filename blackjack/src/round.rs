pub mod deck;
pub mod player;

use crate::error::{BetError, GameOver, RoundError};
use crate::score::{determine_winner, Winner};
use crate::{Decision, TableRules};
use blackjack_macros::allowed_phase;
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};

use self::{deck::Deck, player::Player};

pub const ACTION_PROMPT: &str = "pick your action: (h)it (s)tand > ";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    AwaitingBet,
    Dealing,
    PlayerTurn,
    DealerTurn,
    Resolving,
    Cleanup,
    Finished,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundOutcome {
    pub winner: Winner,
    pub wager: u64,
    pub player_score: u32,
    pub dealer_score: u32,
}

/// What the game loop should do after a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundStatus {
    Continue(RoundOutcome),
    GameOver(GameOver),
}

/// Where the human's choices come from.
pub trait PlayerInput {
    /// Returns a positive wager. Implementations deal with malformed input
    /// themselves; the round only checks the wager against the bankroll.
    fn prompt_for_bet(&mut self, money: u64) -> Result<u64, RoundError>;
    /// Returns the raw action token typed by the player.
    fn prompt_for_action(&mut self, prompt: &str) -> Result<String, RoundError>;
}

pub trait RoundEventHandler {
    fn on_round_begin(&mut self, money: u64);
    fn on_bet_rejected(&mut self, error: &BetError);
    fn on_cards_changed(&mut self, dealer: &Player, player: &Player);
    fn on_round_end(&mut self, outcome: &RoundOutcome, dealer: &Player, player: &Player);
}

/// Parses a typed wager. Negative amounts count as their absolute value so a
/// player cannot bet below zero and lose on purpose.
pub fn parse_bet(input: &str) -> Result<u64, BetError> {
    let amount: i64 = input.trim().parse().map_err(|_| BetError::InvalidInput)?;
    match amount.unsigned_abs() {
        0 => Err(BetError::InvalidInput),
        wager => Ok(wager),
    }
}

/// One round of blackjack. Borrows the deck and both seats for the duration
/// of the round; every card dealt is back in the deck once the round reaches
/// `Finished`.
pub struct Round<'a> {
    deck: &'a mut Deck,
    player: &'a mut Player,
    dealer: &'a mut Player,
    rules: &'a TableRules,

    current_game_phase: GamePhase,
    wager: u64,
}

impl<'a> Round<'a> {
    /// Opens a round. Fails with `GameOver` before anything is touched if the
    /// player has no money left.
    pub fn begin(
        deck: &'a mut Deck,
        player: &'a mut Player,
        dealer: &'a mut Player,
        rules: &'a TableRules,
    ) -> Result<Self, GameOver> {
        if player.is_bankrupt() {
            return Err(GameOver);
        }
        Ok(Round {
            deck,
            player,
            dealer,
            rules,
            current_game_phase: GamePhase::AwaitingBet,
            wager: 0,
        })
    }

    /// Can be called at AwaitingBet phase.
    /// The wager is only settled at resolution, never deducted up front.
    #[allowed_phase(AwaitingBet)]
    pub fn place_bet(&mut self, wager: u64) -> Result<(), RoundError> {
        if wager == 0 {
            return Err(BetError::InvalidInput.into());
        }
        if wager > self.player.money {
            return Err(BetError::InsufficientFunds {
                wager,
                money: self.player.money,
            }
            .into());
        }
        self.wager = wager;
        self.move_to(GamePhase::Dealing);
        Ok(())
    }

    /// Can be called at Dealing phase.
    /// Deals the dealer an up card and a face-down hole card, then two face-up
    /// cards to the player.
    #[allowed_phase(Dealing)]
    pub fn deal_initial_cards(&mut self) -> Result<(), RoundError> {
        let leftovers = self.player.take_cards();
        self.deck.return_cards(leftovers);
        let leftovers = self.dealer.take_cards();
        self.deck.return_cards(leftovers);

        let up_card = self.deck.deal(true)?;
        self.dealer.receive_card(up_card);
        let hole_card = self.deck.deal(false)?;
        self.dealer.receive_card(hole_card);
        for _ in 0..2 {
            let card = self.deck.deal(true)?;
            self.player.receive_card(card);
        }

        self.move_to(GamePhase::PlayerTurn);
        Ok(())
    }

    /// Can be called at PlayerTurn phase. Busting does not end the turn.
    #[allowed_phase(PlayerTurn)]
    pub fn hit(&mut self) -> Result<(), RoundError> {
        let card = self.deck.deal(true)?;
        debug!("player hits and receives {}", card);
        self.player.receive_card(card);
        Ok(())
    }

    #[allowed_phase(PlayerTurn)]
    pub fn stand(&mut self) -> Result<(), RoundError> {
        self.move_to(GamePhase::DealerTurn);
        Ok(())
    }

    /// Can be called at DealerTurn phase.
    /// The dealer draws until reaching the table's stand threshold.
    #[allowed_phase(DealerTurn)]
    pub fn dealer_plays(&mut self) -> Result<(), RoundError> {
        while self.dealer.score() < self.rules.dealer_stands_on {
            let card = self.deck.deal(true)?;
            self.dealer.receive_card(card);
        }
        self.move_to(GamePhase::Resolving);
        Ok(())
    }

    /// Can be called at Resolving phase.
    /// A win pays twice the wager; a loss takes the wager.
    #[allowed_phase(Resolving)]
    pub fn resolve(&mut self) -> Result<RoundOutcome, RoundError> {
        let player_score = self.player.score();
        let dealer_score = self.dealer.score();
        let winner = determine_winner(player_score, dealer_score);
        match winner {
            Winner::Player => {
                self.player.money = self
                    .player
                    .money
                    .saturating_add(self.wager.saturating_mul(2));
            }
            Winner::Dealer => {
                self.player.money -= self.wager;
            }
        }
        info!(
            "{} wins {} ({} vs {}), player now has {}",
            winner, self.wager, player_score, dealer_score, self.player.money
        );

        self.move_to(GamePhase::Cleanup);
        Ok(RoundOutcome {
            winner,
            wager: self.wager,
            player_score,
            dealer_score,
        })
    }

    /// Can be called at Cleanup phase.
    /// Reveals the dealer's hand, lets the handler show the final table, then
    /// puts the player's cards and the dealer's cards back on the deck.
    #[allowed_phase(Cleanup)]
    pub fn cleanup<H: RoundEventHandler + ?Sized>(
        &mut self,
        outcome: &RoundOutcome,
        handler: &mut H,
    ) -> Result<(), RoundError> {
        self.dealer.reveal_hand();
        handler.on_round_end(outcome, self.dealer, self.player);

        let cards = self.player.take_cards();
        self.deck.return_cards(cards);
        let cards = self.dealer.take_cards();
        self.deck.return_cards(cards);

        self.move_to(GamePhase::Finished);
        Ok(())
    }

    pub fn phase(&self) -> GamePhase {
        self.current_game_phase
    }

    pub fn wager(&self) -> u64 {
        self.wager
    }

    pub fn player(&self) -> &Player {
        self.player
    }

    pub fn dealer(&self) -> &Player {
        self.dealer
    }

    fn move_to(&mut self, phase: GamePhase) {
        debug!("round phase {:?} -> {:?}", self.current_game_phase, phase);
        self.current_game_phase = phase;
    }
}

/// Plays one full round: bet, deal, the player's turn, the dealer's turn,
/// resolution and cleanup.
pub fn play_round<I, H>(
    deck: &mut Deck,
    player: &mut Player,
    dealer: &mut Player,
    rules: &TableRules,
    input: &mut I,
    handler: &mut H,
) -> Result<RoundStatus, RoundError>
where
    I: PlayerInput + ?Sized,
    H: RoundEventHandler + ?Sized,
{
    let mut round = match Round::begin(deck, player, dealer, rules) {
        Ok(round) => round,
        Err(game_over) => {
            info!("{}", game_over);
            return Ok(RoundStatus::GameOver(game_over));
        }
    };
    handler.on_round_begin(round.player().money);

    loop {
        let wager = input.prompt_for_bet(round.player().money)?;
        match round.place_bet(wager) {
            Ok(()) => break,
            Err(RoundError::Bet(error)) => {
                warn!("bet rejected: {}", error);
                handler.on_bet_rejected(&error);
            }
            Err(error) => return Err(error),
        }
    }

    round.deal_initial_cards()?;
    handler.on_cards_changed(round.dealer(), round.player());

    loop {
        let token = input.prompt_for_action(ACTION_PROMPT)?;
        match Decision::from_token(&token) {
            Some(Decision::Stand) => {
                round.stand()?;
                break;
            }
            Some(Decision::Hit) => {
                round.hit()?;
                handler.on_cards_changed(round.dealer(), round.player());
            }
            None => debug!("ignoring action {:?}", token),
        }
    }

    round.dealer_plays()?;
    let outcome = round.resolve()?;
    round.cleanup(&outcome, handler)?;
    Ok(RoundStatus::Continue(outcome))
}
