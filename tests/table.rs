//! Round engine integration tests.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use twentyone::{
    Card, DEALER_STANDS_AT, DECK_SIZE, Decision, Deck, EmptyPileError, Hand, Outcome, Participant,
    Pile, RoundError, RoundObserver, RoundResult, Silent, Suit, Table,
};

const fn card(suit: Suit, rank: u8) -> Card {
    Card::new(suit, rank)
}

fn hand_of(ranks: &[u8]) -> Hand {
    let mut hand = Hand::new();
    for &rank in ranks {
        hand.add_card(card(Suit::Spades, rank));
    }
    hand
}

fn standing(name: &str) -> Participant {
    Participant::interactive(name, |_| Some(Decision::Stand))
}

fn hitting(name: &str) -> Participant {
    Participant::interactive(name, |_| Some(Decision::Hit))
}

#[test]
fn value_without_aces_caps_faces_at_ten() {
    assert_eq!(hand_of(&[2, 5, 13]).value(), 17);
    assert_eq!(hand_of(&[7, 11]).value(), 17);
    assert_eq!(hand_of(&[10, 11, 12]).value(), 30);
    assert!(hand_of(&[10, 11, 12]).is_bust());
}

#[test]
fn ace_and_king_is_a_natural_21() {
    let hand = hand_of(&[1, 13]);
    assert_eq!(hand.value(), 21);
    assert!(hand.is_blackjack());
    assert!(hand.is_soft());
    assert!(!hand.is_bust());
}

#[test]
fn only_one_ace_is_ever_promoted() {
    // 1 + 1 + 9 = 11, promote one ace, 21. The second ace stays at 1.
    assert_eq!(hand_of(&[1, 1, 9]).value(), 21);
    // 1 + 1 + 1 + 9 = 12: a hard 12 admits no promotion.
    let hand = hand_of(&[1, 1, 1, 9]);
    assert_eq!(hand.value(), 12);
    assert!(!hand.is_soft());
}

#[test]
fn value_stays_within_promotion_bounds() {
    let mut rng = ChaCha8Rng::seed_from_u64(9);

    for _ in 0..200 {
        let count = rng.random_range(2..=6);
        let mut hand = Hand::new();
        let mut all_low: u16 = 0;
        let mut all_high: u16 = 0;

        for _ in 0..count {
            let rank: u8 = rng.random_range(1..=13);
            hand.add_card(card(Suit::Hearts, rank));
            let score = u16::from(rank.min(10));
            all_low += score;
            all_high += if rank == 1 { 11 } else { score };
        }

        let value = u16::from(hand.value());
        assert!(value >= all_low, "value below every-ace-as-1 total");
        assert!(value <= all_high, "value above every-ace-as-11 total");
    }
}

#[test]
fn deck_resets_to_canonical_contents() {
    let mut deck = Deck::new();
    let mut rng = ChaCha8Rng::seed_from_u64(1);
    deck.shuffle(&mut rng);
    let _ = deck.draw(&mut rng).unwrap();
    deck.reset();

    assert_eq!(deck.len(), DECK_SIZE);
    assert!(deck.cards().iter().all(|c| c.is_face_up()));
    for suit in Suit::ALL {
        assert_eq!(deck.cards().iter().filter(|c| c.suit() == suit).count(), 13);
    }

    let mut keys: Vec<(Suit, u8)> = deck.cards().iter().map(|c| (c.suit(), c.rank())).collect();
    keys.sort_unstable();
    keys.dedup();
    assert_eq!(keys.len(), DECK_SIZE);
}

#[test]
fn shuffle_preserves_the_card_multiset() {
    let mut deck = Deck::new();
    let canonical: Vec<(Suit, u8)> = deck.cards().iter().map(|c| (c.suit(), c.rank())).collect();

    let mut rng = ChaCha8Rng::seed_from_u64(7);
    deck.shuffle(&mut rng);
    let mut shuffled: Vec<(Suit, u8)> = deck.cards().iter().map(|c| (c.suit(), c.rank())).collect();
    assert_ne!(shuffled, canonical);

    shuffled.sort_unstable();
    assert_eq!(shuffled, canonical);
}

#[test]
fn empty_pile_draw_fails() {
    let mut rng = ChaCha8Rng::seed_from_u64(0);
    let mut pile = Pile::new();
    assert_eq!(pile.draw(&mut rng), Err(EmptyPileError));
}

#[test]
fn with_replacement_draws_leave_the_pile_unchanged() {
    let mut rng = ChaCha8Rng::seed_from_u64(0);
    let mut pile = Pile::with_replacement();
    pile.add(card(Suit::Clubs, 4));

    let first = pile.draw(&mut rng).unwrap();
    let second = pile.draw(&mut rng).unwrap();
    assert_eq!(first.rank(), 4);
    assert_eq!(second.rank(), 4);
    assert_eq!(pile.len(), 1);
}

#[test]
fn hide_and_reveal_flip_every_card() {
    let mut hand = hand_of(&[3, 8]);
    assert!(hand.cards().iter().all(|c| c.is_face_up()));

    hand.hide();
    assert!(hand.cards().iter().all(|c| !c.is_face_up()));

    hand.reveal();
    assert!(hand.cards().iter().all(|c| c.is_face_up()));
}

#[test]
fn deal_gives_two_cards_each_and_a_face_down_hole_card() {
    let mut table = Table::new(3);
    for name in ["a", "b", "c"] {
        table.add_player(standing(name));
    }

    table.deal(&mut Silent).unwrap();

    for player in &table.players {
        assert_eq!(player.hand().len(), 2);
        assert!(player.hand().cards().iter().all(|c| c.is_face_up()));
    }

    let dealer_cards = table.dealer.hand().cards();
    assert_eq!(dealer_cards.len(), 2);
    assert!(!dealer_cards[0].is_face_up());
    assert!(dealer_cards[1].is_face_up());

    assert_eq!(table.deck.len(), DECK_SIZE - 8);
}

#[test]
fn dealer_draws_to_seventeen_and_stops() {
    let mut table = Table::new(0);
    table.add_player(standing("a"));
    table.players[0].hand_mut().add_cards([card(Suit::Hearts, 10), card(Suit::Clubs, 8)]);
    table
        .dealer
        .hand_mut()
        .add_cards([card(Suit::Spades, 7), card(Suit::Diamonds, 9)]);
    table.deck.stack(vec![card(Suit::Hearts, 3)]);

    table.run_turns(&mut Silent).unwrap();

    assert_eq!(table.dealer.hand().value(), 19);
    assert!(table.dealer.turn_complete());
    assert!(!table.dealer.busted());
    assert!(table.deck.is_empty());
}

#[test]
fn dealer_stands_at_seventeen_exactly() {
    let mut table = Table::new(0);
    table.add_player(standing("a"));
    table.players[0].hand_mut().add_cards([card(Suit::Hearts, 10), card(Suit::Clubs, 8)]);
    table
        .dealer
        .hand_mut()
        .add_cards([card(Suit::Spades, 10), card(Suit::Diamonds, 7)]);
    table.deck.stack(vec![card(Suit::Hearts, 5)]);

    table.run_turns(&mut Silent).unwrap();

    // No draw at 17.
    assert_eq!(table.dealer.hand().value(), 17);
    assert_eq!(table.deck.len(), 1);
}

#[test]
fn dealer_bust_means_every_standing_player_wins() {
    let mut table = Table::new(0);
    table.add_player(standing("a"));
    table.players[0].hand_mut().add_cards([card(Suit::Hearts, 10), card(Suit::Clubs, 8)]);
    table
        .dealer
        .hand_mut()
        .add_cards([card(Suit::Spades, 7), card(Suit::Diamonds, 9)]);
    table.deck.stack(vec![card(Suit::Hearts, 13)]);

    table.run_turns(&mut Silent).unwrap();
    assert!(table.dealer.busted());
    assert!(table.dealer.turn_complete());

    let result = table.resolve_outcomes();
    assert!(result.dealer_busted);
    assert_eq!(result.players[0].outcome, Outcome::Won);
    assert!(table.players[0].won());
    assert!(!table.players[0].lost());
}

#[test]
fn tie_is_a_player_win() {
    let mut table = Table::new(0);
    table.add_player(standing("a"));
    table.players[0].hand_mut().add_cards([card(Suit::Hearts, 10), card(Suit::Clubs, 8)]);
    table
        .dealer
        .hand_mut()
        .add_cards([card(Suit::Spades, 10), card(Suit::Diamonds, 8)]);
    table.deck.stack(Vec::new());

    table.run_turns(&mut Silent).unwrap();
    let result = table.resolve_outcomes();

    assert_eq!(result.dealer_value, 18);
    assert_eq!(result.players[0].outcome, Outcome::Won);
    assert!(table.players[0].won());
}

#[test]
fn busted_player_gets_the_bust_flag_alone() {
    let mut table = Table::new(0);
    table.add_player(hitting("a"));
    table.players[0].hand_mut().add_cards([card(Suit::Hearts, 10), card(Suit::Clubs, 9)]);
    table
        .dealer
        .hand_mut()
        .add_cards([card(Suit::Spades, 10), card(Suit::Diamonds, 9)]);
    table.deck.stack(vec![card(Suit::Hearts, 5)]);

    table.run_turns(&mut Silent).unwrap();
    let result = table.resolve_outcomes();

    let player = &table.players[0];
    assert!(player.busted());
    assert!(player.turn_complete());
    assert!(!player.won());
    assert!(!player.lost());
    assert_eq!(result.players[0].outcome, Outcome::Busted);
}

#[test]
fn natural_21_may_stand_and_win() {
    let mut table = Table::new(0);
    table.add_player(standing("a"));
    table.players[0].hand_mut().add_cards([card(Suit::Spades, 1), card(Suit::Spades, 13)]);
    table
        .dealer
        .hand_mut()
        .add_cards([card(Suit::Hearts, 10), card(Suit::Diamonds, 9)]);
    table.deck.stack(Vec::new());

    assert!(table.players[0].hand().is_blackjack());

    table.run_turns(&mut Silent).unwrap();
    let result = table.resolve_outcomes();

    assert_eq!(result.players[0].value, 21);
    assert_eq!(result.players[0].outcome, Outcome::Won);
}

#[test]
fn invalid_decision_aborts_the_round() {
    let mut table = Table::new(0);
    table.add_player(Participant::interactive("broken", |_| None));
    table.players[0].hand_mut().add_cards([card(Suit::Hearts, 2), card(Suit::Clubs, 3)]);
    table
        .dealer
        .hand_mut()
        .add_cards([card(Suit::Spades, 10), card(Suit::Diamonds, 9)]);

    let err = table.run_turns(&mut Silent).unwrap_err();
    assert_eq!(err, RoundError::InvalidDecision);
}

#[test]
fn deck_exhaustion_mid_turn_aborts_the_round() {
    let mut table = Table::new(0);
    table.add_player(hitting("a"));
    table.players[0].hand_mut().add_cards([card(Suit::Hearts, 2), card(Suit::Clubs, 3)]);
    table
        .dealer
        .hand_mut()
        .add_cards([card(Suit::Spades, 10), card(Suit::Diamonds, 9)]);
    table.deck.stack(Vec::new());

    let err = table.run_turns(&mut Silent).unwrap_err();
    assert_eq!(err, RoundError::DeckExhausted(EmptyPileError));
}

#[test]
fn dealer_never_stands_below_seventeen() {
    for seed in 0..25 {
        let mut table = Table::new(seed);
        table.add_player(standing("a"));
        table.add_player(standing("b"));

        table.deal(&mut Silent).unwrap();
        table.run_turns(&mut Silent).unwrap();

        let dealer = &table.dealer;
        assert!(dealer.turn_complete());
        assert!(dealer.busted() || dealer.hand().value() >= DEALER_STANDS_AT);
        assert!(dealer.hand().cards().iter().all(|c| c.is_face_up()));
    }
}

#[test]
fn resolved_outcomes_follow_the_comparison_rule() {
    for seed in 0..25 {
        let mut table = Table::new(seed);
        table.add_player(standing("a"));
        table.add_player(standing("b"));

        let result = table.play_round(&mut Silent).unwrap();

        for player in &result.players {
            // Standing players never bust.
            assert!(player.value <= 21);
            let expected = if result.dealer_busted || player.value >= result.dealer_value {
                Outcome::Won
            } else {
                Outcome::Lost
            };
            assert_eq!(player.outcome, expected);
        }
    }
}

#[test]
fn cleanup_restores_the_table_for_the_next_round() {
    let mut table = Table::new(11);
    table.add_player(standing("a"));
    table.add_player(standing("b"));

    table.play_round(&mut Silent).unwrap();

    for player in &table.players {
        assert!(player.hand().is_empty());
        assert!(!player.turn_complete());
        assert!(!player.won());
        assert!(!player.lost());
        assert!(!player.busted());
    }
    assert!(table.dealer.hand().is_empty());
    assert!(!table.dealer.turn_complete());
    assert_eq!(table.deck.len(), DECK_SIZE);
    assert!(table.deck.cards().iter().all(|c| c.is_face_up()));
}

#[derive(Default)]
struct CountingObserver {
    deals: usize,
    hits: usize,
    stands: usize,
    busts: usize,
    reveals: usize,
    outcome_reports: usize,
}

impl RoundObserver for CountingObserver {
    fn deal_complete(&mut self, _players: &[Participant], _dealer: &Participant) {
        self.deals += 1;
    }

    fn hit(&mut self, _participant: &Participant) {
        self.hits += 1;
    }

    fn stood(&mut self, _participant: &Participant) {
        self.stands += 1;
    }

    fn busted(&mut self, _participant: &Participant) {
        self.busts += 1;
    }

    fn hole_revealed(&mut self, _dealer: &Participant) {
        self.reveals += 1;
    }

    fn outcomes(&mut self, _result: &RoundResult) {
        self.outcome_reports += 1;
    }
}

#[test]
fn observer_sees_every_round_event() {
    let mut observer = CountingObserver::default();

    let mut table = Table::new(0);
    table.add_player(standing("a"));
    table.players[0].hand_mut().add_cards([card(Suit::Hearts, 10), card(Suit::Clubs, 8)]);
    table
        .dealer
        .hand_mut()
        .add_cards([card(Suit::Spades, 7), card(Suit::Diamonds, 9)]);
    table.deck.stack(vec![card(Suit::Hearts, 3)]);

    table.run_turns(&mut observer).unwrap();
    let result = table.resolve_outcomes();
    observer.outcomes(&result);

    assert_eq!(observer.hits, 1); // dealer draws once
    assert_eq!(observer.stands, 2); // player and dealer both stand
    assert_eq!(observer.busts, 0);
    assert_eq!(observer.reveals, 1);
    assert_eq!(observer.outcome_reports, 1);
    assert_eq!(observer.deals, 0); // deal was bypassed with stacked hands
}

#[test]
fn observer_sees_the_deal_in_a_full_round() {
    let mut observer = CountingObserver::default();

    let mut table = Table::new(5);
    table.add_player(standing("a"));
    table.play_round(&mut observer).unwrap();

    assert_eq!(observer.deals, 1);
    assert_eq!(observer.reveals, 1);
    assert_eq!(observer.outcome_reports, 1);
}
