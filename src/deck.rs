//! The standard 52-card deck.

extern crate alloc;

use alloc::vec::Vec;

use rand::Rng;

use crate::card::{Card, Suit};
use crate::error::EmptyPileError;
use crate::pile::Pile;

/// A deck of standard playing cards.
///
/// The canonical full state is exactly 52 cards: four suits by ranks 1–13,
/// face-up, in suit-major generation order. [`Deck::reset`] restores that
/// state regardless of the current arrangement.
#[derive(Debug, Clone)]
pub struct Deck {
    pile: Pile,
}

impl Deck {
    /// Creates a full deck in canonical order.
    #[must_use]
    pub fn new() -> Self {
        let mut deck = Self { pile: Pile::new() };
        deck.build();
        deck
    }

    /// Populates the 52 canonical cards. Only adds; callers discard first.
    fn build(&mut self) {
        for suit in Suit::ALL {
            for rank in 1..=13 {
                self.pile.add(Card::new(suit, rank));
            }
        }
    }

    /// Discards everything and rebuilds the canonical 52 cards.
    pub fn reset(&mut self) {
        self.pile.discard();
        self.build();
    }

    /// Produces a uniformly random permutation of the deck.
    pub fn shuffle<R: Rng>(&mut self, rng: &mut R) {
        self.pile.shuffle(rng);
    }

    /// Removes and returns the front card.
    ///
    /// # Errors
    ///
    /// Returns [`EmptyPileError`] if the deck is exhausted.
    pub fn draw<R: Rng>(&mut self, rng: &mut R) -> Result<Card, EmptyPileError> {
        self.pile.draw(rng)
    }

    /// Replaces the deck contents with a known order, front card drawn first.
    ///
    /// Intended for stacking deterministic card sequences in tests and replays.
    pub fn stack(&mut self, cards: Vec<Card>) {
        self.pile.discard();
        self.pile.add_all(cards);
    }

    /// The remaining cards, front first.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        self.pile.cards()
    }

    /// The number of cards remaining.
    #[must_use]
    pub fn len(&self) -> usize {
        self.pile.len()
    }

    /// Whether the deck is exhausted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pile.is_empty()
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}
