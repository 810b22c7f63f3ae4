use thiserror::Error;

use crate::round::GamePhase;

/// A wager that cannot be accepted. The bet loop reports it and asks again.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BetError {
    #[error("Your bet must be an integer. Example: 42")]
    InvalidInput,
    #[error("please change your bet. you bet ${wager}. you only have ${money}.")]
    InsufficientFunds { wager: u64, money: u64 },
}

/// Raised when a round is about to start and the player has no money left.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("Game over! You're bankrupt!")]
pub struct GameOver;

#[derive(Debug, Error)]
pub enum RoundError {
    #[error("cannot deal from an empty deck")]
    EmptyDeck,
    #[error("{operation} is only allowed in {expected:?} phase, current phase is {actual:?}")]
    WrongPhase {
        operation: &'static str,
        expected: GamePhase,
        actual: GamePhase,
    },
    #[error(transparent)]
    Bet(#[from] BetError),
    #[error("input closed before the round finished")]
    InputClosed,
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
