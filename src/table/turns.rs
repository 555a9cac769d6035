use rand_chacha::ChaCha8Rng;

use crate::deck::Deck;
use crate::error::RoundError;
use crate::event::RoundObserver;
use crate::participant::{Decision, Participant, TurnState};

use super::Table;

impl Table {
    /// Runs the turn sequence: each player in entry order, then the dealer.
    ///
    /// The dealer's hand is revealed before their first decision.
    ///
    /// # Errors
    ///
    /// Returns [`RoundError`] if the deck is exhausted mid-turn or a decision
    /// provider fails to produce a decision.
    pub fn run_turns(&mut self, observer: &mut dyn RoundObserver) -> Result<(), RoundError> {
        for player in &mut self.players {
            run_turn(player, &mut self.deck, &mut self.rng, observer)?;
        }

        self.dealer.hand.reveal();
        observer.hole_revealed(&self.dealer);
        run_turn(&mut self.dealer, &mut self.deck, &mut self.rng, observer)
    }
}

/// The per-participant turn state machine.
///
/// `Active` loops: bust is checked after every card add, then the policy is
/// queried for exactly one of hit or stand. `Stood` and `Busted` are terminal.
fn run_turn(
    participant: &mut Participant,
    deck: &mut Deck,
    rng: &mut ChaCha8Rng,
    observer: &mut dyn RoundObserver,
) -> Result<(), RoundError> {
    participant.state = TurnState::Active;

    loop {
        if participant.hand.is_bust() {
            participant.state = TurnState::Busted;
            participant.busted = true;
            observer.busted(participant);
            return Ok(());
        }

        match participant.decide()? {
            Decision::Hit => {
                let card = deck.draw(rng)?;
                participant.hand.add_card(card);
                observer.hit(participant);
            }
            Decision::Stand => {
                participant.state = TurnState::Stood;
                observer.stood(participant);
                return Ok(());
            }
        }
    }
}
