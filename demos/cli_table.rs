//! Interactive table example.
//!
//! All input handling lives out here: the decision providers re-prompt until
//! they can parse a valid action, so the engine only ever sees `Hit` or
//! `Stand`.

#![allow(clippy::missing_docs_in_private_items)]

use std::io::{self, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use twentyone::{
    Card, Decision, Hand, Outcome, Participant, RoundObserver, RoundResult, Table,
};

fn main() {
    println!("Blackjack table (hit/stand only)");

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let mut table = Table::new(seed);

    let count = prompt_player_count();
    for index in 1..=count {
        let name = prompt_line(&format!("Name of player {index}: "));
        let prompt_name = if name.is_empty() {
            format!("Player {index}")
        } else {
            name
        };
        let shown = prompt_name.clone();
        table.add_player(Participant::interactive(prompt_name, move |hand| {
            Some(prompt_decision(&shown, hand))
        }));
    }

    let mut printer = Printer;
    loop {
        match table.play_round(&mut printer) {
            Ok(_) => {}
            Err(err) => {
                println!("Round aborted: {err}");
                break;
            }
        }

        let again = prompt_line("Another round? (y/n): ");
        if again != "y" && again != "yes" {
            println!("Goodbye.");
            break;
        }
    }
}

/// Loops until the user types hit or stand. This is the only retry loop in
/// the program; the engine never sees invalid input.
fn prompt_decision(name: &str, hand: &Hand) -> Decision {
    println!("\n{name}: {} (value {})", format_hand(hand), hand.value());
    loop {
        match prompt_line("Enter \"hit\" or \"stand\": ").as_str() {
            "h" | "hit" => return Decision::Hit,
            "s" | "stand" | "stay" => return Decision::Stand,
            _ => println!("You must type \"hit\" or \"stand\"."),
        }
    }
}

fn prompt_player_count() -> usize {
    loop {
        let input = prompt_line("How many players? ");
        match input.parse::<usize>() {
            Ok(count) if count > 0 => return count,
            _ => println!("Please enter a positive number."),
        }
    }
}

fn prompt_line(prompt: &str) -> String {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut input = String::new();
    if io::stdin().read_line(&mut input).is_err() {
        return String::new();
    }
    input.trim().to_lowercase()
}

fn format_card(card: &Card) -> String {
    if card.is_face_up() {
        card.to_string()
    } else {
        "[hidden]".to_string()
    }
}

fn format_hand(hand: &Hand) -> String {
    if hand.is_empty() {
        return "(empty)".to_string();
    }
    hand.cards()
        .iter()
        .map(format_card)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Renders every round event to stdout.
struct Printer;

impl RoundObserver for Printer {
    fn deal_complete(&mut self, players: &[Participant], dealer: &Participant) {
        println!("\n----- New round -----");
        println!("Dealer: {}", format_hand(dealer.hand()));
        for player in players {
            println!(
                "{}: {} (value {})",
                player.name(),
                format_hand(player.hand()),
                player.hand().value()
            );
            if player.hand().is_blackjack() {
                println!("  Blackjack!");
            }
        }
    }

    fn hit(&mut self, participant: &Participant) {
        println!(
            "{} hits: {} (value {})",
            participant.name(),
            format_hand(participant.hand()),
            participant.hand().value()
        );
    }

    fn stood(&mut self, participant: &Participant) {
        println!(
            "{} stands with {}.",
            participant.name(),
            participant.hand().value()
        );
    }

    fn busted(&mut self, participant: &Participant) {
        println!(
            "{} busts with {}!",
            participant.name(),
            participant.hand().value()
        );
    }

    fn hole_revealed(&mut self, dealer: &Participant) {
        println!(
            "\nDealer reveals: {} (value {})",
            format_hand(dealer.hand()),
            dealer.hand().value()
        );
    }

    fn outcomes(&mut self, result: &RoundResult) {
        println!("\n----- Results -----");
        if result.dealer_busted {
            println!("Dealer busts with {}.", result.dealer_value);
        } else {
            println!("Dealer finishes on {}.", result.dealer_value);
        }
        for player in &result.players {
            let verdict = match player.outcome {
                Outcome::Won => "wins",
                Outcome::Lost => "loses",
                Outcome::Busted => "busted",
            };
            println!("{} {} with {}.", player.name, verdict, player.value);
        }
    }
}
