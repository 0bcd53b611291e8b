use crate::cards::{Card, Rank, Suit};
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::fmt;

/// A physical card in the shoe: a face plus a slot index unique across the
/// whole shoe. Replicated decks mean face equality cannot identify a card;
/// the slot can.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShoeCard {
    card: Card,
    slot: u32,
}

impl ShoeCard {
    pub const fn card(self) -> Card {
        self.card
    }

    pub const fn slot(self) -> u32 {
        self.slot
    }
}

impl From<ShoeCard> for Card {
    fn from(sc: ShoeCard) -> Card {
        sc.card
    }
}

impl fmt::Display for ShoeCard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.card)
    }
}

/// The multiset of cards available to a round: `num_decks` replications of the
/// 16-card AKQJ suit-set.
///
/// ```
/// use teenpatti_rs::shoe::Shoe;
///
/// let shoe = Shoe::default();
/// assert_eq!(shoe.len(), 48);
/// ```
#[derive(Debug, Clone)]
pub struct Shoe {
    cards: Vec<ShoeCard>,
}

impl Shoe {
    /// Deck replications in a standard round.
    pub const DEFAULT_DECKS: usize = 3;

    /// Cards per replication: four ranks crossed with four suits.
    pub const CARDS_PER_DECK: usize = 16;

    /// Build a shoe of `num_decks` replications in a fixed enumeration order.
    /// Zero decks yields an empty shoe.
    pub fn new(num_decks: usize) -> Self {
        let mut cards = Vec::with_capacity(num_decks * Self::CARDS_PER_DECK);
        let mut slot = 0u32;
        for _ in 0..num_decks {
            for &s in &Suit::ALL {
                for &r in &Rank::ALL {
                    cards.push(ShoeCard { card: Card::new(r, s), slot });
                    slot += 1;
                }
            }
        }
        Self { cards }
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn as_slice(&self) -> &[ShoeCard] {
        &self.cards
    }

    /// Face values of the remaining cards, in shoe order.
    pub fn faces(&self) -> Vec<Card> {
        self.cards.iter().map(|sc| sc.card).collect()
    }

    /// Shuffle using a seeded RNG for reproducibility.
    pub fn shuffle_seeded(&mut self, seed: u64) {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        self.cards.shuffle(&mut rng);
    }

    /// Shuffle using the provided RNG implementing Rng.
    pub fn shuffle_with<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards.shuffle(rng);
    }

    /// Draw one card from the top of the shoe.
    pub fn draw(&mut self) -> Option<ShoeCard> {
        self.cards.pop()
    }

    /// Draw `n` cards from the top of the shoe.
    pub fn draw_n(&mut self, n: usize) -> Vec<ShoeCard> {
        (0..n).filter_map(|_| self.draw()).collect()
    }

    /// A new shoe with exactly the given physical cards removed, identified by
    /// slot. Other copies of the same face stay in. The source shoe is left
    /// untouched.
    pub fn without_slots(&self, dealt: &[ShoeCard]) -> Shoe {
        let cards = self
            .cards
            .iter()
            .filter(|sc| !dealt.iter().any(|d| d.slot == sc.slot))
            .copied()
            .collect();
        Shoe { cards }
    }

    /// A new shoe with one copy removed per given face, for callers that only
    /// know face values (manual card entry). Faces with no copy left in the
    /// shoe are ignored. The source shoe is left untouched.
    pub fn without_copies(&self, faces: &[Card]) -> Shoe {
        let mut remaining: Vec<Card> = faces.to_vec();
        let cards = self
            .cards
            .iter()
            .filter(|sc| {
                if let Some(i) = remaining.iter().position(|&f| f == sc.card) {
                    remaining.swap_remove(i);
                    false
                } else {
                    true
                }
            })
            .copied()
            .collect();
        Shoe { cards }
    }
}

impl Default for Shoe {
    fn default() -> Self {
        Self::new(Self::DEFAULT_DECKS)
    }
}
