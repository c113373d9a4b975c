use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};

use dashmap::DashMap;
use parking_lot::Mutex;
use rand::SeedableRng;
use rand::rngs::StdRng;
use uuid::Uuid;

use crate::card::Card;
use crate::deck::{Deck, DeckId};
use crate::error::{CardCodeError, DeckError};

/// How the shuffle RNG gets its seed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SeedPolicy {
    /// Seeded from the wall clock when the registry is built.
    #[default]
    Clock,
    /// Fixed seed, for reproducible shuffles.
    Fixed(u64),
}

impl SeedPolicy {
    pub fn rng(self) -> StdRng {
        match self {
            SeedPolicy::Clock => {
                let nanos = SystemTime::now()
                    .duration_since(UNIX_EPOCH)
                    .unwrap_or_default()
                    .as_nanos();
                StdRng::seed_from_u64(nanos as u64)
            }
            SeedPolicy::Fixed(seed) => StdRng::seed_from_u64(seed),
        }
    }
}

/// Every deck created during the lifetime of the process, keyed by id.
///
/// Decks are never removed. Each deck sits behind its own mutex, which is
/// held across the whole read-modify-write of a draw; the map lock is only
/// held long enough to clone that handle.
pub struct DeckRegistry {
    decks: DashMap<DeckId, Arc<Mutex<Deck>>>,
    rng: Mutex<StdRng>,
}

impl DeckRegistry {
    pub fn new(seed: SeedPolicy) -> Self {
        Self::with_rng(seed.rng())
    }

    pub fn with_rng(rng: StdRng) -> Self {
        DeckRegistry {
            decks: DashMap::new(),
            rng: Mutex::new(rng),
        }
    }

    /// Number of decks ever created.
    pub fn len(&self) -> usize {
        self.decks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.decks.is_empty()
    }

    /// Builds and registers a new deck, returning a copy of it.
    ///
    /// Nothing is registered when a card code is invalid.
    pub fn create_deck(&self, shuffle: bool, codes: Option<&str>) -> Result<Deck, CardCodeError> {
        let deck = {
            let mut rng = self.rng.lock();
            Deck::build(shuffle, codes, &mut *rng)?
        };
        self.decks.insert(deck.id, Arc::new(Mutex::new(deck.clone())));
        Ok(deck)
    }

    /// Snapshot of a deck's current state.
    pub fn open_deck(&self, id: &str) -> Result<Deck, DeckError> {
        let handle = self.lookup(id)?;
        let deck = handle.lock().clone();
        Ok(deck)
    }

    /// Draws `count` cards off the top of a deck and stores what is left.
    pub fn draw_cards(&self, id: &str, count: usize) -> Result<Vec<Card>, DeckError> {
        if count == 0 {
            return Err(DeckError::InvalidCount);
        }
        let handle = self.lookup(id)?;

        let mut deck = handle.lock();
        let (hand, rest) = deck.draw(count)?;
        *deck = rest;
        Ok(hand)
    }

    fn lookup(&self, id: &str) -> Result<Arc<Mutex<Deck>>, DeckError> {
        let id = parse_deck_id(id)?;
        self.decks
            .get(&id)
            .map(|entry| Arc::clone(entry.value()))
            .ok_or(DeckError::DeckNotFound(id))
    }
}

impl Default for DeckRegistry {
    fn default() -> Self {
        DeckRegistry::new(SeedPolicy::default())
    }
}

pub fn parse_deck_id(id: &str) -> Result<DeckId, DeckError> {
    Uuid::parse_str(id).map_err(|_| DeckError::InvalidIdentifier(id.to_string()))
}
