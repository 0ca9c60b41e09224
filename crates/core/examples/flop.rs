// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0
//
// ```bash
// $ cargo r --release --example flop -- --hand AhKs --board AdKd2c
// ```
use clap::Parser;
use std::time::Instant;

use equichart_core::*;

#[derive(Debug, Parser)]
struct Cli {
    /// The player hole cards.
    #[clap(long, short = 'H', default_value = "AhKs")]
    hand: String,
    /// The flop cards.
    #[clap(long, short, default_value = "AdKd2c")]
    board: String,
    /// Number of parallel tasks, defaults to the number of cpus.
    #[clap(long, short)]
    tasks: Option<usize>,
}

fn main() -> Result<(), EquityError> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .format_target(false)
        .format_timestamp_millis()
        .init();

    let cli = Cli::parse();
    let hand = cli.hand.parse::<Hand>()?;
    let board = Board::parse(&cli.board)?;
    let deck = Deck::default().without(&hand.cards()).without(board.cards());

    let mut config = Config::default();
    if let Some(tasks) = cli.tasks {
        config.num_tasks = tasks;
    }

    let num_tasks = config.num_tasks;
    let equity = Equity::new(PokerEvaluator, config);

    let now = Instant::now();
    let probs = equity.flop(&hand, board.cards(), &deck)?;
    let elapsed = now.elapsed().as_secs_f64();

    let total = probs.total_observations();
    println!("Hand {hand} on {board} with {num_tasks} tasks");
    println!("Showdowns:       {total}");
    println!("Elapsed:         {elapsed:.3}s");
    println!("Showdowns/sec:   {:.0}\n", total as f64 / elapsed);

    // The five best and worst classes to play against.
    let mut classes = probs.iter().collect::<Vec<_>>();
    classes.sort_by(|a, b| b.1.total_cmp(&a.1));
    for (class, p) in classes.iter().take(5).chain(classes.iter().rev().take(5)) {
        println!("{:<17}{p:.3}", format!("{class}:"));
    }

    Ok(())
}
