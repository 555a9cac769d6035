//! Presentation hooks for the round sequence.

use crate::participant::Participant;
use crate::result::RoundResult;

/// Observer invoked by [`Table`](crate::Table) as a round progresses.
///
/// Every method defaults to a no-op so implementations override only the
/// events they render. The observer is purely observational; it cannot
/// influence the round.
pub trait RoundObserver {
    /// All initial hands have been dealt.
    fn deal_complete(&mut self, _players: &[Participant], _dealer: &Participant) {}

    /// A participant hit; the drawn card is the last one in their hand.
    fn hit(&mut self, _participant: &Participant) {}

    /// A participant stood.
    fn stood(&mut self, _participant: &Participant) {}

    /// A participant busted.
    fn busted(&mut self, _participant: &Participant) {}

    /// The dealer's hole card was turned face-up.
    fn hole_revealed(&mut self, _dealer: &Participant) {}

    /// Outcomes have been resolved for every participant.
    fn outcomes(&mut self, _result: &RoundResult) {}
}

/// An observer that renders nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct Silent;

impl RoundObserver for Silent {}
