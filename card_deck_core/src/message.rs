use serde::{Deserialize, Serialize};

use crate::card::Card;
use crate::deck::{Deck, DeckId};

// --- Server -> client responses ---

/// Reply to `POST /deck`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct DeckCreated {
    pub deck_id: DeckId,
    pub shuffled: bool,
    pub remaining: usize,
}

/// Reply to `GET /deck/open`: the deck's metadata plus every card left in it.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct DeckOpened {
    pub deck_id: DeckId,
    pub shuffled: bool,
    pub remaining: usize,
    pub cards: Vec<Card>,
}

/// Reply to `GET /deck/draw`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct HandDrawn {
    pub cards: Vec<Card>,
}

/// Body of every failed request.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ErrorBody {
    #[serde(rename = "errorCode")]
    pub error_code: u8,
    pub error: String,
}

impl From<&Deck> for DeckCreated {
    fn from(deck: &Deck) -> Self {
        DeckCreated {
            deck_id: deck.id,
            shuffled: deck.shuffled,
            remaining: deck.remaining(),
        }
    }
}

impl From<Deck> for DeckOpened {
    fn from(deck: Deck) -> Self {
        DeckOpened {
            deck_id: deck.id,
            shuffled: deck.shuffled,
            remaining: deck.remaining(),
            cards: deck.cards,
        }
    }
}

impl From<Vec<Card>> for HandDrawn {
    fn from(cards: Vec<Card>) -> Self {
        HandDrawn { cards }
    }
}
