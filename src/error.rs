//! Error types for engine operations.

use thiserror::Error;

/// Drawing from a pile that holds no cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("no cards left to draw")]
pub struct EmptyPileError;

/// Errors that abort a round.
///
/// Both variants are unrecoverable within the current round. The caller may
/// start a fresh round after fixing the underlying condition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RoundError {
    /// The deck ran out of cards: too many participants for a single deck.
    #[error("deck exhausted: too many participants for one deck")]
    DeckExhausted(#[from] EmptyPileError),
    /// A decision provider produced neither hit nor stand.
    #[error("decision provider returned no valid decision")]
    InvalidDecision,
}
