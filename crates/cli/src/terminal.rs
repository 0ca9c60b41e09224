// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Terminal I/O.
use anyhow::Result;
use crossterm::{
    queue,
    style::{self, StyledContent, Stylize},
};
use std::io;

use equichart_core::{HandClass, Probabilities};

/// Text shown for classes blocked by the known cards.
const NOT_POSSIBLE: &str = "Not Poss";

/// Prints the probabilities on a 13x13 colored grid.
pub fn print_grid(w: &mut impl io::Write, probs: &Probabilities) -> Result<()> {
    for class in HandClass::all() {
        queue!(w, style::PrintStyledContent(cell(class, probs.get(class))))?;

        let (_, col) = class.grid_pos();
        let sep = if col + 1 == HandClass::GRID_SIZE { "\n" } else { " " };
        queue!(w, style::Print(sep))?;
    }

    w.flush()?;

    Ok(())
}

/// Formats a grid cell, e.g. `AKs:0.62`.
fn cell(class: HandClass, p: Option<f64>) -> StyledContent<String> {
    let Some(p) = p else {
        return NOT_POSSIBLE.to_string().yellow();
    };

    let text = format!("{:<8}", format!("{class}:{p:.2}"));
    if p >= 0.5 {
        text.blue()
    } else if p >= 0.33 {
        text.white()
    } else {
        text.red()
    }
}

/// Prompts for a line of input.
///
/// Returns `None` at end of input, on an empty line, or when the user types
/// `exit`.
pub fn prompt(r: &mut impl io::BufRead, w: &mut impl io::Write, label: &str) -> Result<Option<String>> {
    write!(w, "{label}: ")?;
    w.flush()?;

    let mut line = String::new();
    if r.read_line(&mut line)? == 0 {
        return Ok(None);
    }

    let line = line.trim();
    if line.is_empty() || line.eq_ignore_ascii_case("exit") {
        Ok(None)
    } else {
        Ok(Some(line.to_string()))
    }
}
