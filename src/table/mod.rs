//! The round engine: one deck, one dealer, any number of players.

extern crate alloc;

use alloc::vec::Vec;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::deck::Deck;
use crate::error::RoundError;
use crate::event::RoundObserver;
use crate::participant::Participant;
use crate::result::RoundResult;

mod deal;
mod outcome;
mod turns;

/// A blackjack table that plays rounds for its participants.
///
/// The table owns the deck and the random source and is the sole mutator of
/// both. Participants persist across rounds; only the deck arrangement and
/// per-round participant state change between rounds.
pub struct Table {
    /// Players in entry order. Entry order is deal and turn order.
    pub players: Vec<Participant>,
    /// The dealer, who always acts after every player.
    pub dealer: Participant,
    /// The single deck used for every round.
    pub deck: Deck,
    rng: ChaCha8Rng,
}

impl Table {
    /// Creates a table with the given shuffle seed and no players.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            players: Vec::new(),
            dealer: Participant::dealer(),
            deck: Deck::new(),
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Seats a player. Players act in the order they were added.
    pub fn add_player(&mut self, player: Participant) {
        self.players.push(player);
    }

    /// Plays one complete round: deal, turns, outcome resolution, cleanup.
    ///
    /// The table is left ready for the next round; the returned
    /// [`RoundResult`] is the only record of what happened.
    ///
    /// # Errors
    ///
    /// Returns [`RoundError`] if the deck runs out of cards or a decision
    /// provider fails to produce a decision. Either error aborts the round.
    pub fn play_round(&mut self, observer: &mut dyn RoundObserver) -> Result<RoundResult, RoundError> {
        let result = self.try_round(observer);
        self.cleanup();
        result
    }

    fn try_round(&mut self, observer: &mut dyn RoundObserver) -> Result<RoundResult, RoundError> {
        self.deal(observer)?;
        self.run_turns(observer)?;
        let result = self.resolve_outcomes();
        observer.outcomes(&result);
        Ok(result)
    }

    /// Discards every hand, clears all per-round flags, and restores the
    /// deck to its canonical 52 cards.
    pub fn cleanup(&mut self) {
        for player in &mut self.players {
            player.reset_round();
        }
        self.dealer.reset_round();
        self.deck.reset();
    }
}
