//! CLI Brisca example: two seats sharing one terminal.

use std::io::{self, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use brisca::{Card, Game, GameEvent, GameOptions, GameState, Suit};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    println!("Brisca CLI example (type 'q' to quit)");

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let game = Game::new(GameOptions::default(), seed);

    game.subscribe(|event: &GameEvent| match event {
        GameEvent::PlayerWonRound { winner, points } => {
            println!("Player {winner} takes the round ({points} points).");
        }
        GameEvent::EndgameReached => println!("The deck is empty. Play out your hands."),
        _ => {}
    });

    if let Err(err) = game.start_deal() {
        println!("Deal error: {err}");
        return;
    }

    if let Some(trump) = game.trump_card() {
        println!("Trump card: {}", format_card(&trump));
    }

    while game.state() != GameState::GameOver {
        let player = game.current_turn();
        print_table(&game, player);

        let Some(choice) = prompt_usize(&format!("Player {player}, pick a card: ")) else {
            println!("Goodbye.");
            return;
        };

        let Some(card) = game
            .hand(player)
            .and_then(|hand| choice.checked_sub(1).and_then(|index| hand.get(index).copied()))
        else {
            println!("No card at position {choice}.");
            continue;
        };

        if let Err(err) = game.play_card(player, card) {
            println!("Play error: {err}");
        }
    }

    let scores = game.scores();
    println!("Final scores: {scores:?}");
    match game.winner() {
        Some(winner) => println!("Player {winner} wins."),
        None => println!("It's a tie."),
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

fn prompt_usize(prompt: &str) -> Option<usize> {
    loop {
        let input = prompt_line(prompt);
        if input == "q" || input == "quit" {
            return None;
        }
        match input.parse::<usize>() {
            Ok(value) => return Some(value),
            Err(_) => println!("Please enter a number."),
        }
    }
}

fn print_table(game: &Game, player: usize) {
    println!();
    println!(
        "Round {} | deck: {} | scores: {:?}",
        game.round_count() + 1,
        game.cards_remaining(),
        game.scores()
    );

    let table = game
        .table()
        .iter()
        .enumerate()
        .filter_map(|(seat, slot)| slot.map(|card| format!("P{seat}: {}", format_card(&card))))
        .collect::<Vec<_>>();
    if !table.is_empty() {
        println!("Table: {}", table.join("  "));
    }

    let hand = game.hand(player).unwrap_or_default();
    let cards = hand
        .iter()
        .enumerate()
        .map(|(index, card)| format!("{}) {}", index + 1, format_card(card)))
        .collect::<Vec<_>>();
    println!("Hand: {}", cards.join("  "));
}

fn colorize(text: &str, code: &str) -> String {
    format!("\u{1b}[{code}m{text}\u{1b}[0m")
}

fn format_card(card: &Card) -> String {
    let (suit, color_code) = match card.suit {
        Suit::Coins => ("O", "33"),
        Suit::Cups => ("C", "31"),
        Suit::Swords => ("E", "34"),
        Suit::Clubs => ("B", "32"),
    };

    let rank = match card.rank {
        1 => "A".to_string(),
        10 => "S".to_string(),
        11 => "C".to_string(),
        12 => "R".to_string(),
        _ => card.rank.to_string(),
    };

    colorize(&format!("{rank}{suit}"), color_code)
}
