//! Blackjack hands and the ace-counting score.

use crate::card::Card;
use crate::pile::Pile;

const fn provisional_score(rank: u8) -> u8 {
    match rank {
        1..=10 => rank,
        11..=13 => 10,
        _ => 0,
    }
}

/// Scores a set of cards.
///
/// Every card scores its provisional value first (aces as 1, faces as 10),
/// then aces are promoted from 1 to 11 one at a time as long as the total
/// stays at or below 21. Returns the total and whether an ace is currently
/// counted as 11 (a soft hand).
fn evaluate(cards: &[Card]) -> (u8, bool) {
    let mut total: u8 = 0;
    let mut low_aces: u8 = 0;

    for card in cards {
        if card.rank() == 1 {
            low_aces += 1;
        }
        total = total.saturating_add(provisional_score(card.rank()));
    }

    let mut promoted = false;
    // Promotion is allowed only while 21 - total >= 10, i.e. total <= 11.
    while low_aces > 0 && total <= 11 {
        total += 10;
        low_aces -= 1;
        promoted = true;
    }

    (total, promoted)
}

/// A participant's hand.
///
/// The score is derived from the cards on every query; nothing is cached, so
/// it can never go stale across mutation.
#[derive(Debug, Clone, Default)]
pub struct Hand {
    pile: Pile,
}

impl Hand {
    /// Creates an empty hand.
    #[must_use]
    pub const fn new() -> Self {
        Self { pile: Pile::new() }
    }

    /// Adds a card to the hand.
    pub fn add_card(&mut self, card: Card) {
        self.pile.add(card);
    }

    /// Adds cards in iteration order.
    pub fn add_cards<I>(&mut self, cards: I)
    where
        I: IntoIterator<Item = Card>,
    {
        self.pile.add_all(cards);
    }

    /// The blackjack score of the hand.
    ///
    /// Aces count as 11 where that keeps the total at or below 21, otherwise
    /// as 1. Two aces and a nine score 21 (one ace promoted); three aces and
    /// a nine score 12 (a hard 12 admits no promotion).
    #[must_use]
    pub fn value(&self) -> u8 {
        evaluate(self.pile.cards()).0
    }

    /// Whether an ace is currently counted as 11.
    #[must_use]
    pub fn is_soft(&self) -> bool {
        evaluate(self.pile.cards()).1
    }

    /// Whether the hand is a natural: two cards valued 21.
    #[must_use]
    pub fn is_blackjack(&self) -> bool {
        self.pile.len() == 2 && self.value() == 21
    }

    /// Whether the hand is over 21.
    #[must_use]
    pub fn is_bust(&self) -> bool {
        self.value() > 21
    }

    /// Discards every card.
    pub fn discard(&mut self) {
        self.pile.discard();
    }

    /// Turns every card face-down.
    pub fn hide(&mut self) {
        self.pile.hide();
    }

    /// Turns every card face-up.
    pub fn reveal(&mut self) {
        self.pile.reveal();
    }

    /// The cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        self.pile.cards()
    }

    /// The number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.pile.len()
    }

    /// Whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pile.is_empty()
    }
}
