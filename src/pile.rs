//! Ordered card containers shared by decks and hands.

extern crate alloc;

use alloc::vec::Vec;

use rand::Rng;
use rand::seq::{IndexedRandom, SliceRandom};

use crate::card::Card;
use crate::error::EmptyPileError;

/// An ordered, mutable pile of cards.
///
/// The draw mode is fixed at construction. Without replacement, [`Pile::draw`]
/// removes and returns the front card; with replacement, it returns a copy of
/// a random card and leaves the pile unchanged.
#[derive(Debug, Clone, Default)]
pub struct Pile {
    cards: Vec<Card>,
    with_replacement: bool,
}

impl Pile {
    /// Creates an empty pile drawn without replacement.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            cards: Vec::new(),
            with_replacement: false,
        }
    }

    /// Creates an empty pile drawn with replacement.
    #[must_use]
    pub const fn with_replacement() -> Self {
        Self {
            cards: Vec::new(),
            with_replacement: true,
        }
    }

    /// Appends a card, preserving insertion order.
    pub fn add(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Appends cards in iteration order.
    pub fn add_all<I>(&mut self, cards: I)
    where
        I: IntoIterator<Item = Card>,
    {
        self.cards.extend(cards);
    }

    /// Draws a card.
    ///
    /// Without replacement this removes and returns the front card. With
    /// replacement this returns a copy of a random card, leaving the pile
    /// unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`EmptyPileError`] if no cards remain.
    pub fn draw<R: Rng>(&mut self, rng: &mut R) -> Result<Card, EmptyPileError> {
        if self.with_replacement {
            return self.cards.choose(rng).copied().ok_or(EmptyPileError);
        }

        if self.cards.is_empty() {
            return Err(EmptyPileError);
        }
        Ok(self.cards.remove(0))
    }

    /// Produces a uniformly random permutation of the pile.
    pub fn shuffle<R: Rng>(&mut self, rng: &mut R) {
        self.cards.shuffle(rng);
    }

    /// Empties the pile.
    pub fn discard(&mut self) {
        self.cards.clear();
    }

    /// Turns every card face-down.
    pub fn hide(&mut self) {
        for card in &mut self.cards {
            card.set_face_up(false);
        }
    }

    /// Turns every card face-up.
    pub fn reveal(&mut self) {
        for card in &mut self.cards {
            card.set_face_up(true);
        }
    }

    /// The contained cards, front first.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// The number of cards in the pile.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Whether the pile holds no cards.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}
