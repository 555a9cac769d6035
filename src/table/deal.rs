use crate::error::{EmptyPileError, RoundError};
use crate::event::RoundObserver;

use super::Table;

impl Table {
    /// Deals the opening hands.
    ///
    /// The deck is reset and shuffled, every player receives two cards in
    /// entry order, then the dealer receives two with the first dealt card
    /// turned face-down as the hole card.
    ///
    /// # Errors
    ///
    /// Returns [`RoundError::DeckExhausted`] if 52 cards cannot cover the
    /// seated participants. That is a configuration error the embedding
    /// caller must fix before starting another round.
    pub fn deal(&mut self, observer: &mut dyn RoundObserver) -> Result<(), RoundError> {
        self.deck.reset();
        self.deck.shuffle(&mut self.rng);

        let needed = (self.players.len() + 1) * 2;
        if needed > self.deck.len() {
            return Err(EmptyPileError.into());
        }

        for player in &mut self.players {
            let first = self.deck.draw(&mut self.rng)?;
            let second = self.deck.draw(&mut self.rng)?;
            player.hand.add_cards([first, second]);
        }

        let mut hole = self.deck.draw(&mut self.rng)?;
        hole.set_face_up(false);
        let up_card = self.deck.draw(&mut self.rng)?;
        self.dealer.hand.add_cards([hole, up_card]);

        observer.deal_complete(&self.players, &self.dealer);
        Ok(())
    }
}
