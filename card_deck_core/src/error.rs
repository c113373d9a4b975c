use thiserror::Error;

use crate::deck::DeckId;

/// Why a card code was rejected. Each variant carries the offending code.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CardCodeError {
    #[error("code {0:?} is invalid")]
    InvalidCode(String),
    #[error("code {0:?} is invalid, should have proper suit name")]
    InvalidSuit(String),
    #[error("code {0:?} is invalid, should have proper card value")]
    InvalidRank(String),
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DeckError {
    #[error(transparent)]
    InvalidCardCode(#[from] CardCodeError),
    #[error("input UUID '{0}' is not a valid deck id")]
    InvalidIdentifier(String),
    #[error("deck not found for the input uuid {0}")]
    DeckNotFound(DeckId),
    #[error("count must be more than zero")]
    InvalidCount,
    #[error("cannot draw any cards, deck is empty")]
    DeckExhausted,
    #[error("cannot draw {requested} cards, deck has only {remaining}")]
    InsufficientCards { requested: usize, remaining: usize },
}
