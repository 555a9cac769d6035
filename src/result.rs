//! Round outcome types.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

/// Terminal outcome for one participant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The player beat or tied the dealer, or the dealer busted.
    Won,
    /// The dealer finished with a strictly higher value.
    Lost,
    /// The hand went over 21. Busted players never win or lose by comparison.
    Busted,
}

/// Outcome for a single participant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParticipantResult {
    /// The participant's display name.
    pub name: String,
    /// The final hand value.
    pub value: u8,
    /// The resolved outcome.
    pub outcome: Outcome,
}

/// Outcome of an entire round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundResult {
    /// Per-player results in entry order.
    pub players: Vec<ParticipantResult>,
    /// The dealer's final hand value.
    pub dealer_value: u8,
    /// Whether the dealer busted.
    pub dealer_busted: bool,
}
