use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::CardCodeError;

// --- Core data structures ---

/// Suit, in the order a fresh deck is laid out.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy)]
pub enum Suit {
    Spades,
    Diamonds,
    Clubs,
    Hearts,
}

/// Rank, in the order a fresh deck is laid out (Ace low).
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy)]
pub enum Rank {
    Ace,
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King,
}

/// A single playing card.
///
/// On the wire a card is `{value, suit, code}`; deserializing goes back
/// through code validation, so a payload whose `value`/`suit` disagree with
/// its `code` is rejected.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy, Serialize, Deserialize)]
#[serde(into = "CardFace", try_from = "CardFace")]
pub struct Card {
    pub rank: Rank,
    pub suit: Suit,
}

impl Suit {
    pub const ALL: [Suit; 4] = [Suit::Spades, Suit::Diamonds, Suit::Clubs, Suit::Hearts];

    /// Single-letter suffix used in card codes.
    pub fn initial(self) -> char {
        match self {
            Suit::Spades => 'S',
            Suit::Diamonds => 'D',
            Suit::Clubs => 'C',
            Suit::Hearts => 'H',
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Suit::Spades => "SPADES",
            Suit::Diamonds => "DIAMONDS",
            Suit::Clubs => "CLUBS",
            Suit::Hearts => "HEARTS",
        }
    }

    pub fn from_initial(c: char) -> Option<Suit> {
        Suit::ALL.into_iter().find(|s| s.initial() == c)
    }
}

impl Rank {
    pub const ALL: [Rank; 13] = [
        Rank::Ace,
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
    ];

    /// Prefix used in card codes.
    pub fn token(self) -> &'static str {
        match self {
            Rank::Ace => "A",
            Rank::Two => "2",
            Rank::Three => "3",
            Rank::Four => "4",
            Rank::Five => "5",
            Rank::Six => "6",
            Rank::Seven => "7",
            Rank::Eight => "8",
            Rank::Nine => "9",
            Rank::Ten => "10",
            Rank::Jack => "J",
            Rank::Queen => "Q",
            Rank::King => "K",
        }
    }

    /// Name reported as `value` in the wire form.
    pub fn name(self) -> &'static str {
        match self {
            Rank::Ace => "ACE",
            Rank::Jack => "JACK",
            Rank::Queen => "QUEEN",
            Rank::King => "KING",
            numeric => numeric.token(),
        }
    }

    pub fn from_token(token: &str) -> Option<Rank> {
        Rank::ALL.into_iter().find(|r| r.token() == token)
    }
}

impl Card {
    pub fn new(rank: Rank, suit: Suit) -> Card {
        Card { rank, suit }
    }

    pub fn code(&self) -> String {
        format!("{}{}", self.rank.token(), self.suit.initial())
    }
}

// --- Display / parsing ---

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.token())
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}{}", self.rank, self.suit.initial())
    }
}

impl FromStr for Card {
    type Err = CardCodeError;

    /// Validates a card code such as `"AS"` or `"10H"`.
    ///
    /// The length check runs first, then the suit suffix, then the rank
    /// prefix. Matching is exact and case-sensitive.
    fn from_str(code: &str) -> Result<Self, Self::Err> {
        let mut chars = code.chars();
        let last = match chars.next_back() {
            Some(last) if chars.clone().next().is_some() => last,
            _ => return Err(CardCodeError::InvalidCode(code.to_string())),
        };

        let suit = Suit::from_initial(last)
            .ok_or_else(|| CardCodeError::InvalidSuit(code.to_string()))?;
        let rank = Rank::from_token(chars.as_str())
            .ok_or_else(|| CardCodeError::InvalidRank(code.to_string()))?;

        Ok(Card { rank, suit })
    }
}

/// Wire representation of a [`Card`].
#[derive(Debug, Clone, Serialize, Deserialize)]
struct CardFace {
    value: String,
    suit: String,
    code: String,
}

impl From<Card> for CardFace {
    fn from(card: Card) -> Self {
        CardFace {
            value: card.rank.name().to_string(),
            suit: card.suit.name().to_string(),
            code: card.code(),
        }
    }
}

impl TryFrom<CardFace> for Card {
    type Error = CardCodeError;

    fn try_from(face: CardFace) -> Result<Self, Self::Error> {
        let card: Card = face.code.parse()?;
        if card.rank.name() != face.value {
            return Err(CardCodeError::InvalidRank(face.code));
        }
        if card.suit.name() != face.suit {
            return Err(CardCodeError::InvalidSuit(face.code));
        }
        Ok(card)
    }
}

// --- Deck contents ---

/// The full 52-card set in canonical order: suits outer, ranks inner.
/// Starts at `AS` and ends at `KH`.
pub fn sequential_cards() -> Vec<Card> {
    let mut cards = Vec::with_capacity(52);
    for &suit in &Suit::ALL {
        for &rank in &Rank::ALL {
            cards.push(Card { rank, suit });
        }
    }
    cards
}

/// Parses a comma-separated list of card codes, trimming each token.
///
/// The first invalid token aborts the whole list.
pub fn parse_codes(codes: &str) -> Result<Vec<Card>, CardCodeError> {
    codes.split(',').map(|code| code.trim().parse()).collect()
}

// --- Unit tests ---

#[cfg(test)]
mod tests {
    use super::*;
    use Rank::*;
    use Suit::*;

    fn card(rank: Rank, suit: Suit) -> Card {
        Card { rank, suit }
    }

    #[test]
    fn test_sequential_cards_order() {
        let cards = sequential_cards();
        assert_eq!(cards.len(), 52);
        assert_eq!(cards[0].code(), "AS");
        assert_eq!(cards[9].code(), "10S");
        assert_eq!(cards[13].code(), "AD");
        assert_eq!(cards[51].code(), "KH");
    }

    #[test]
    fn test_sequential_cards_unique() {
        let mut codes: Vec<String> = sequential_cards().iter().map(Card::code).collect();
        codes.sort();
        codes.dedup();
        assert_eq!(codes.len(), 52);
    }

    #[test]
    fn test_every_code_parses_back() {
        for c in sequential_cards() {
            assert_eq!(c.code().parse::<Card>(), Ok(c));
        }
    }

    #[test]
    fn test_valid_codes() {
        assert_eq!("AH".parse::<Card>(), Ok(card(Ace, Hearts)));
        assert_eq!("KC".parse::<Card>(), Ok(card(King, Clubs)));
        assert_eq!("JD".parse::<Card>(), Ok(card(Jack, Diamonds)));
        assert_eq!("QS".parse::<Card>(), Ok(card(Queen, Spades)));
        assert_eq!("10D".parse::<Card>(), Ok(card(Ten, Diamonds)));
        assert_eq!("4C".parse::<Card>(), Ok(card(Four, Clubs)));
    }

    #[test]
    fn test_short_codes_are_invalid() {
        assert_eq!("".parse::<Card>(), Err(CardCodeError::InvalidCode("".into())));
        assert_eq!("S".parse::<Card>(), Err(CardCodeError::InvalidCode("S".into())));
    }

    #[test]
    fn test_bad_suit() {
        assert_eq!("D1".parse::<Card>(), Err(CardCodeError::InvalidSuit("D1".into())));
        assert_eq!("4h".parse::<Card>(), Err(CardCodeError::InvalidSuit("4h".into())));
        assert_eq!("As".parse::<Card>(), Err(CardCodeError::InvalidSuit("As".into())));
        assert_eq!("10".parse::<Card>(), Err(CardCodeError::InvalidSuit("10".into())));
        assert!(matches!("  ".parse::<Card>(), Err(CardCodeError::InvalidSuit(_))));
    }

    #[test]
    fn test_bad_rank() {
        assert_eq!("11D".parse::<Card>(), Err(CardCodeError::InvalidRank("11D".into())));
        assert_eq!("1S".parse::<Card>(), Err(CardCodeError::InvalidRank("1S".into())));
        assert_eq!("aS".parse::<Card>(), Err(CardCodeError::InvalidRank("aS".into())));
        assert_eq!("4 S".parse::<Card>(), Err(CardCodeError::InvalidRank("4 S".into())));
    }

    #[test]
    fn test_parse_codes_trims_and_keeps_order() {
        let cards = parse_codes(" AS, KD ,10H").unwrap();
        assert_eq!(cards, vec![card(Ace, Spades), card(King, Diamonds), card(Ten, Hearts)]);
    }

    #[test]
    fn test_parse_codes_stops_at_first_bad_token() {
        assert_eq!(parse_codes("AS,11D,AC"), Err(CardCodeError::InvalidRank("11D".into())));
        assert_eq!(parse_codes("   "), Err(CardCodeError::InvalidCode("".into())));
        assert_eq!(parse_codes("AS,"), Err(CardCodeError::InvalidCode("".into())));
    }

    #[test]
    fn test_wire_form() {
        let json = serde_json::to_value(card(Queen, Diamonds)).unwrap();
        assert_eq!(json, serde_json::json!({"value": "QUEEN", "suit": "DIAMONDS", "code": "QD"}));

        let seven: Card =
            serde_json::from_value(serde_json::json!({"value": "7", "suit": "CLUBS", "code": "7C"})).unwrap();
        assert_eq!(seven, card(Seven, Clubs));
    }

    #[test]
    fn test_wire_form_must_agree_with_code() {
        let mismatched = serde_json::json!({"value": "KING", "suit": "CLUBS", "code": "7C"});
        assert!(serde_json::from_value::<Card>(mismatched).is_err());
    }
}
