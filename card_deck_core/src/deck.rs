use rand::Rng;
use rand::seq::SliceRandom;
use uuid::Uuid;

use crate::card::{Card, parse_codes, sequential_cards};
use crate::error::{CardCodeError, DeckError};

pub type DeckId = Uuid;

/// One deck of cards.
///
/// `id` and `shuffled` are fixed once the deck is built. `cards` only ever
/// shrinks from the front; a draw produces a successor deck instead of
/// mutating this one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    pub id: DeckId,
    pub cards: Vec<Card>,
    pub shuffled: bool,
}

impl Deck {
    /// Builds a new deck with a fresh id.
    ///
    /// With no codes (or an empty string) the deck holds all 52 cards in
    /// sequential order. Otherwise `codes` is a comma-separated list; any
    /// invalid entry fails the whole build.
    pub fn build<R: Rng + ?Sized>(
        shuffle: bool,
        codes: Option<&str>,
        rng: &mut R,
    ) -> Result<Deck, CardCodeError> {
        let mut cards = match codes {
            Some(codes) if !codes.is_empty() => parse_codes(codes)?,
            _ => sequential_cards(),
        };
        if shuffle {
            cards.shuffle(rng);
        }
        Ok(Deck {
            id: Uuid::new_v4(),
            cards,
            shuffled: shuffle,
        })
    }

    pub fn remaining(&self) -> usize {
        self.cards.len()
    }

    pub fn is_exhausted(&self) -> bool {
        self.cards.is_empty()
    }

    /// Takes `count` cards off the top.
    ///
    /// Returns the hand together with the deck that is left over (same id,
    /// same `shuffled` flag). All-or-nothing: a draw larger than what is
    /// left fails without touching anything.
    pub fn draw(&self, count: usize) -> Result<(Vec<Card>, Deck), DeckError> {
        if count == 0 {
            return Err(DeckError::InvalidCount);
        }
        if self.is_exhausted() {
            return Err(DeckError::DeckExhausted);
        }
        if count > self.remaining() {
            return Err(DeckError::InsufficientCards {
                requested: count,
                remaining: self.remaining(),
            });
        }

        let (hand, rest) = self.cards.split_at(count);
        let rest = Deck {
            id: self.id,
            cards: rest.to_vec(),
            shuffled: self.shuffled,
        };
        Ok((hand.to_vec(), rest))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn codes(cards: &[Card]) -> Vec<String> {
        cards.iter().map(Card::code).collect()
    }

    #[test]
    fn test_build_sequential() {
        let mut rng = StdRng::seed_from_u64(1);
        let deck = Deck::build(false, None, &mut rng).unwrap();
        assert_eq!(deck.remaining(), 52);
        assert_eq!(deck.cards[0].code(), "AS");
        assert_eq!(deck.cards[51].code(), "KH");
        assert!(!deck.shuffled);

        let from_empty = Deck::build(false, Some(""), &mut rng).unwrap();
        assert_eq!(from_empty.cards, deck.cards);
        assert_ne!(from_empty.id, deck.id);
    }

    #[test]
    fn test_build_from_codes_keeps_order() {
        let mut rng = StdRng::seed_from_u64(1);
        let deck = Deck::build(false, Some("AS,KD,AC,2C,KH,10H"), &mut rng).unwrap();
        assert_eq!(codes(&deck.cards), ["AS", "KD", "AC", "2C", "KH", "10H"]);
    }

    #[test]
    fn test_build_rejects_any_bad_code() {
        let mut rng = StdRng::seed_from_u64(1);
        for input in ["AS,11D,AC", "2C KH 10H", "D1", "  ", "aS", "As", "as"] {
            assert!(Deck::build(true, Some(input), &mut rng).is_err(), "{input:?}");
            assert!(Deck::build(false, Some(input), &mut rng).is_err(), "{input:?}");
        }
    }

    #[test]
    fn test_build_shuffled_is_flagged() {
        let mut rng = StdRng::seed_from_u64(7);
        let deck = Deck::build(true, None, &mut rng).unwrap();
        assert!(deck.shuffled);
        assert_eq!(deck.remaining(), 52);
    }

    #[test]
    fn test_draw_takes_prefix() {
        let mut rng = StdRng::seed_from_u64(1);
        let deck = Deck::build(true, Some("AS,KD,AC,2C,KH,10H"), &mut rng).unwrap();
        let (hand, rest) = deck.draw(2).unwrap();
        assert_eq!(hand, deck.cards[..2]);
        assert_eq!(rest.cards, deck.cards[2..]);
        assert_eq!(rest.id, deck.id);
        assert!(rest.shuffled);
        // the source deck is left untouched
        assert_eq!(deck.remaining(), 6);
    }

    #[test]
    fn test_draw_errors() {
        let mut rng = StdRng::seed_from_u64(1);
        let deck = Deck::build(false, Some("AS,KD"), &mut rng).unwrap();
        assert_eq!(deck.draw(0), Err(DeckError::InvalidCount));
        assert_eq!(
            deck.draw(3),
            Err(DeckError::InsufficientCards { requested: 3, remaining: 2 })
        );

        let (_, empty) = deck.draw(2).unwrap();
        assert!(empty.is_exhausted());
        assert_eq!(empty.draw(1), Err(DeckError::DeckExhausted));
    }

    proptest! {
        #[test]
        fn shuffle_is_a_permutation(seed in any::<u64>()) {
            let mut rng = StdRng::seed_from_u64(seed);
            let deck = Deck::build(true, None, &mut rng).unwrap();
            let mut shuffled = deck.cards.clone();
            shuffled.sort();
            let mut sequential = sequential_cards();
            sequential.sort();
            prop_assert_eq!(shuffled, sequential);
        }

        #[test]
        fn draw_removes_exactly_count(seed in any::<u64>(), count in 1usize..=52) {
            let mut rng = StdRng::seed_from_u64(seed);
            let deck = Deck::build(true, None, &mut rng).unwrap();
            let (hand, rest) = deck.draw(count).unwrap();
            prop_assert_eq!(hand.len(), count);
            prop_assert_eq!(rest.remaining(), 52 - count);
            prop_assert_eq!(&hand[..], &deck.cards[..count]);
            prop_assert_eq!(&rest.cards[..], &deck.cards[count..]);
        }
    }
}
