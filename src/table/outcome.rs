extern crate alloc;

use alloc::vec::Vec;

use crate::result::{Outcome, ParticipantResult, RoundResult};

use super::Table;

impl Table {
    /// Resolves outcomes by comparing each hand against the dealer's.
    ///
    /// A non-busted player wins when the dealer busted or their value is at
    /// least the dealer's; a tie is a player win in this ruleset. Busted
    /// players keep `busted` alone and never win or lose by comparison.
    pub fn resolve_outcomes(&mut self) -> RoundResult {
        let dealer_value = self.dealer.hand.value();
        let dealer_busted = self.dealer.busted;

        let mut players = Vec::with_capacity(self.players.len());
        for player in &mut self.players {
            let value = player.hand.value();

            let outcome = if player.busted {
                Outcome::Busted
            } else if dealer_busted || value >= dealer_value {
                player.won = true;
                Outcome::Won
            } else {
                player.lost = true;
                Outcome::Lost
            };

            players.push(ParticipantResult {
                name: player.name.clone(),
                value,
                outcome,
            });
        }

        RoundResult {
            players,
            dealer_value,
            dealer_busted,
        }
    }
}
