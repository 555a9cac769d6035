//! A blackjack round engine with optional `no_std` support.
//!
//! The crate provides a [`Table`] type that plays complete rounds for one
//! dealer and any number of players: deal, per-participant turns, outcome
//! resolution, and cleanup. Player decisions come from injected providers;
//! the dealer follows the fixed stand-at-17 rule. Presentation is the
//! embedding caller's job, fed through the [`RoundObserver`] hooks.
//!
//! # Example
//!
//! ```no_run
//! use twentyone::{Decision, Participant, Silent, Table};
//!
//! let mut table = Table::new(42);
//! table.add_player(Participant::interactive("Ada", |_hand| Some(Decision::Stand)));
//! let result = table.play_round(&mut Silent)?;
//! println!("dealer finished on {}", result.dealer_value);
//! # Ok::<(), twentyone::RoundError>(())
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod deck;
pub mod error;
pub mod event;
pub mod hand;
pub mod participant;
pub mod pile;
pub mod result;
pub mod table;

// Re-export main types
pub use card::{Card, DECK_SIZE, Suit};
pub use deck::Deck;
pub use error::{EmptyPileError, RoundError};
pub use event::{RoundObserver, Silent};
pub use hand::Hand;
pub use participant::{
    DEALER_STANDS_AT, Decision, DecisionPolicy, DecisionProvider, Participant, TurnState,
};
pub use pile::Pile;
pub use result::{Outcome, ParticipantResult, RoundResult};
pub use table::Table;
