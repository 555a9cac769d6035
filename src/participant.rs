//! Participants and their hit-or-stand decision policies.

extern crate alloc;

use alloc::boxed::Box;
use alloc::string::String;

use crate::error::RoundError;
use crate::hand::Hand;

/// The hand value at or above which the dealer stands.
pub const DEALER_STANDS_AT: u8 = 17;

/// A turn decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    /// Draw one more card.
    Hit,
    /// End the turn without drawing.
    Stand,
}

/// Per-round turn progress for one participant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TurnState {
    /// The turn has not begun.
    #[default]
    NotStarted,
    /// The turn is in progress.
    Active,
    /// The participant stood. Terminal.
    Stood,
    /// The hand went over 21. Terminal.
    Busted,
}

/// An injected source of decisions for an interactively-driven participant.
///
/// The provider owns any re-prompting on invalid input and is expected to
/// always produce a decision; `None` signals a broken provider and aborts
/// the round with [`RoundError::InvalidDecision`].
pub type DecisionProvider = Box<dyn FnMut(&Hand) -> Option<Decision>>;

/// How a participant chooses between hit and stand.
///
/// One abstraction covers both kinds of seat: players defer to an injected
/// provider, the dealer follows a fixed threshold. Selected per participant
/// at construction.
pub enum DecisionPolicy {
    /// Decisions come from an external provider (a prompt, a bot, a script).
    Interactive(DecisionProvider),
    /// Hit while the hand value is strictly below the threshold.
    FixedThreshold(u8),
}

/// A seat at the table: a named hand plus turn and outcome state.
///
/// Participants are created once per session and persist across rounds; the
/// hand and all flags are cleared by [`Participant::reset_round`].
pub struct Participant {
    pub(crate) name: String,
    pub(crate) hand: Hand,
    pub(crate) state: TurnState,
    pub(crate) won: bool,
    pub(crate) lost: bool,
    pub(crate) busted: bool,
    policy: DecisionPolicy,
}

impl Participant {
    /// Creates a participant with the given decision policy.
    #[must_use]
    pub fn new(name: impl Into<String>, policy: DecisionPolicy) -> Self {
        Self {
            name: name.into(),
            hand: Hand::new(),
            state: TurnState::NotStarted,
            won: false,
            lost: false,
            busted: false,
            policy,
        }
    }

    /// Creates a participant driven by an injected decision provider.
    #[must_use]
    pub fn interactive(
        name: impl Into<String>,
        provider: impl FnMut(&Hand) -> Option<Decision> + 'static,
    ) -> Self {
        Self::new(name, DecisionPolicy::Interactive(Box::new(provider)))
    }

    /// Creates the dealer: a fixed-threshold participant standing at 17.
    #[must_use]
    pub fn dealer() -> Self {
        Self::new("Dealer", DecisionPolicy::FixedThreshold(DEALER_STANDS_AT))
    }

    /// The participant's display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The participant's hand.
    #[must_use]
    pub const fn hand(&self) -> &Hand {
        &self.hand
    }

    /// Mutable access to the hand, for embedding callers and tests.
    pub const fn hand_mut(&mut self) -> &mut Hand {
        &mut self.hand
    }

    /// The current turn state.
    #[must_use]
    pub const fn state(&self) -> TurnState {
        self.state
    }

    /// Whether the turn has reached a terminal state.
    #[must_use]
    pub const fn turn_complete(&self) -> bool {
        matches!(self.state, TurnState::Stood | TurnState::Busted)
    }

    /// Whether the participant won the last resolved round.
    #[must_use]
    pub const fn won(&self) -> bool {
        self.won
    }

    /// Whether the participant lost the last resolved round.
    #[must_use]
    pub const fn lost(&self) -> bool {
        self.lost
    }

    /// Whether the participant busted this round.
    #[must_use]
    pub const fn busted(&self) -> bool {
        self.busted
    }

    /// Queries the decision policy for the next move.
    pub(crate) fn decide(&mut self) -> Result<Decision, RoundError> {
        match &mut self.policy {
            DecisionPolicy::Interactive(provider) => {
                provider(&self.hand).ok_or(RoundError::InvalidDecision)
            }
            DecisionPolicy::FixedThreshold(stand_at) => {
                if self.hand.value() < *stand_at {
                    Ok(Decision::Hit)
                } else {
                    Ok(Decision::Stand)
                }
            }
        }
    }

    /// Empties the hand and resets turn and outcome state for a new round.
    pub fn reset_round(&mut self) {
        self.hand.discard();
        self.state = TurnState::NotStarted;
        self.won = false;
        self.lost = false;
        self.busted = false;
    }
}

impl core::fmt::Debug for Participant {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Participant")
            .field("name", &self.name)
            .field("hand", &self.hand)
            .field("state", &self.state)
            .field("won", &self.won)
            .field("lost", &self.lost)
            .field("busted", &self.busted)
            .finish_non_exhaustive()
    }
}
