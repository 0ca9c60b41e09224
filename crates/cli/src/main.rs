// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Equichart CLI, prints a player equity against all the starting hands.
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
use anyhow::{Result, bail};
use clap::Parser;
use log::error;
use std::io::{self, Write};

use equichart_core::{Board, Card, Config, Deck, Equity, EquityError, Hand, PokerEvaluator, Street};

mod terminal;

#[derive(Debug, Parser)]
struct Cli {
    /// The player hole cards, e.g. AhKs.
    #[clap(long, short = 'H')]
    hand: Option<String>,
    /// The board cards, flop, turn or river, e.g. AdKd2c.
    #[clap(long, short)]
    board: Option<String>,
    /// Prompt for hand and board cards street by street.
    #[clap(long, short = 'I')]
    interactive: bool,
    /// Number of parallel tasks, defaults to the number of cpus.
    #[clap(long, short, value_parser = clap::value_parser!(u16).range(1..=1024))]
    tasks: Option<u16>,
    /// Prints the probabilities as JSON.
    #[clap(long)]
    json: bool,
}

fn main() {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .format_target(false)
        .format_timestamp_millis()
        .parse_default_env()
        .init();

    let cli = Cli::parse();
    if let Err(e) = run(&cli) {
        error!("{e:#}");
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    let mut config = Config::default();
    if let Some(tasks) = cli.tasks {
        config.num_tasks = tasks as usize;
    }

    let equity = Equity::new(PokerEvaluator, config);

    if cli.interactive {
        return interactive(&equity, cli.json);
    }

    let (Some(hand), Some(board)) = (&cli.hand, &cli.board) else {
        bail!("--hand and --board are required unless running with --interactive");
    };

    let hand = hand.parse::<Hand>()?;
    let board = Board::parse(board)?;
    if board.street().is_none() {
        bail!("The board must have 3, 4 or 5 cards");
    }

    show(&equity, &hand, &board, cli.json)
}

/// Prompts for a hand and board, showing each street until the river.
fn interactive(equity: &Equity<PokerEvaluator>, json: bool) -> Result<()> {
    let mut input = io::stdin().lock();
    let mut stdout = io::stdout();

    'hands: loop {
        let Some(hand) = read(&mut input, &mut stdout, "Hand", |s| s.parse::<Hand>())? else {
            break;
        };

        let Some(mut board) = read(&mut input, &mut stdout, "Flop", |s| parse_flop(s, &hand))? else {
            break;
        };

        if let Err(e) = show(equity, &hand, &board, json) {
            error!("{e:#}");
            continue;
        }

        for street in [Street::Turn, Street::River] {
            let label = if street == Street::Turn { "Turn" } else { "River" };
            let Some(next) = read(&mut input, &mut stdout, label, |s| parse_next_card(s, &hand, &board))? else {
                continue 'hands;
            };

            board = next;
            if let Err(e) = show(equity, &hand, &board, json) {
                error!("{e:#}");
                continue 'hands;
            }
        }

        writeln!(stdout)?;
    }

    Ok(())
}

/// Prompts until the input is valid, returns `None` if the user quits.
fn read<T>(
    r: &mut impl io::BufRead,
    w: &mut impl Write,
    label: &str,
    parse: impl Fn(&str) -> Result<T, EquityError>,
) -> Result<Option<T>> {
    while let Some(line) = terminal::prompt(r, w, label)? {
        match parse(&line) {
            Ok(value) => return Ok(Some(value)),
            Err(e) => error!("{e}"),
        }
    }

    Ok(None)
}

/// Parses a flop that shares no cards with the hand.
fn parse_flop(s: &str, hand: &Hand) -> Result<Board, EquityError> {
    let board = Board::parse(s)?;
    if board.street() != Some(Street::Flop) {
        return Err(EquityError::InvalidBoardSize {
            expected: Street::Flop.board_len(),
            actual: board.len(),
        });
    }

    if let Some(card) = board.cards().iter().find(|&&c| hand.cards().contains(&c)) {
        return Err(EquityError::DuplicateCard(*card));
    }

    Ok(board)
}

/// Parses the turn or river card, returns the board with the new card.
fn parse_next_card(s: &str, hand: &Hand, board: &Board) -> Result<Board, EquityError> {
    let card = s.parse::<Card>()?;
    if hand.cards().contains(&card) {
        return Err(EquityError::DuplicateCard(card));
    }

    let mut board = board.clone();
    board.push(card)?;
    Ok(board)
}

/// Computes and prints the probabilities for the board street.
fn show(equity: &Equity<PokerEvaluator>, hand: &Hand, board: &Board, json: bool) -> Result<()> {
    let deck = Deck::default().without(&hand.cards()).without(board.cards());
    let probs = equity.compute(hand, board.cards(), &deck)?;

    let mut stdout = io::stdout();
    if json {
        serde_json::to_writer(&mut stdout, &probs)?;
        writeln!(stdout)?;
    } else {
        writeln!(stdout, "\n{hand} on {board}")?;
        terminal::print_grid(&mut stdout, &probs)?;
    }

    Ok(())
}
