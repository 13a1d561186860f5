//! Session Walkthrough
//!
//! This demo plays a handful of rounds against a seeded random opponent,
//! then shows both reset operations and the JSON read model.
//!
//! Key concepts:
//! - Injected randomness (seeded for a reproducible run)
//! - Bounded history rendered with fail-safe glyph lookups
//! - Strict rejection of unknown moves
//!
//! Run with: RUST_LOG=debug cargo run --example session

use stonepaper::builder::SessionBuilder;
use stonepaper::effects::RandomMoveSource;

fn main() {
    env_logger::init();

    println!("=== Stone Paper Scissors ===\n");

    let mut session = SessionBuilder::new()
        .move_source(RandomMoveSource::seeded(2024))
        .build()
        .expect("default session should build");

    for choice in session.list_choices() {
        println!("  {} {} ({})", choice.glyph, choice.label, choice.id);
    }

    println!("\nPlaying seven rounds...");
    for id in ["stone", "paper", "scissors", "stone", "stone", "paper", "scissors"] {
        let report = session.play(id).expect("catalog move");
        let catalog = session.catalog();
        println!(
            "  {} vs {}  {}",
            catalog.glyph(report.player_move.id()),
            catalog.glyph(report.computer_move.id()),
            report.outcome
        );
    }

    let score = session.state().score();
    println!("\nScore: you {} - {} computer", score.player, score.computer);

    println!("\nRecent games:");
    for line in session.history_lines() {
        println!("  {line}");
    }

    match session.play("rock") {
        Ok(_) => println!("\n'rock' was accepted?"),
        Err(err) => println!("\nRejected: {err}"),
    }

    session.reset_round();
    println!("\nAfter play again: phase = {}", session.state().phase().name());

    session.reset_score();
    println!(
        "After reset score: {} rounds in history",
        session.state().history().len()
    );

    match session.snapshot().to_json_pretty() {
        Ok(json) => println!("\nSnapshot:\n{json}"),
        Err(err) => eprintln!("snapshot failed: {err}"),
    }

    println!("\n=== Demo Complete ===");
}
