use crate::cards::{parse_cards, Card};
use std::str::FromStr;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum HandError {
    #[error("expected exactly three cards, got {0}")]
    CardCount(usize),
    #[error("card parse error: {0}")]
    CardParse(String),
}

/// A player's three cards.
///
/// Repeated faces are legal: the shoe replicates decks, so a hand can hold two
/// physically distinct copies of the same rank and suit.
///
/// ```
/// use teenpatti_rs::cards::{Card, Rank, Suit};
/// use teenpatti_rs::hand::Hand;
///
/// let hand = Hand::new([
///     Card::new(Rank::Ace, Suit::Spades),
///     Card::new(Rank::Ace, Suit::Hearts),
///     Card::new(Rank::Ace, Suit::Diamonds),
/// ]);
/// assert_eq!(hand.as_array().len(), 3);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hand([Card; 3]);

impl Hand {
    pub const fn new(cards: [Card; 3]) -> Self {
        Self(cards)
    }

    /// The cards in the order they were supplied (unsorted).
    pub const fn as_array(&self) -> [Card; 3] {
        self.0
    }

    pub fn from_slice(slice: &[Card]) -> Result<Self, HandError> {
        let cards: [Card; 3] =
            slice.try_into().map_err(|_| HandError::CardCount(slice.len()))?;
        Ok(Self(cards))
    }
}

impl FromStr for Hand {
    type Err = HandError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let cards = parse_cards(s).map_err(|e| HandError::CardParse(e.to_string()))?;
        Self::from_slice(&cards)
    }
}
