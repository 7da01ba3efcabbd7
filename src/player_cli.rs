#![cfg(feature = "std")]

use std::io::{BufRead, Write};
use std::string::String;

use crate::board::Board;
use crate::common::ShotResult;
use crate::config::BOARD_SIZE;
use crate::sim::SimReport;

/// One line of player input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Fire(usize, usize),
    /// Show the board with ships revealed.
    Show,
    Quit,
}

/// Format (`r`, `c`) the way players type it, e.g. `A5`.
pub fn coord_to_string(r: usize, c: usize) -> String {
    let col = (b'A' + c as u8) as char;
    std::format!("{}{}", col, r + 1)
}

/// Parse a coordinate such as `A5` or `j10` into (row, col).
pub fn parse_coord(input: &str) -> Result<(usize, usize), String> {
    if input.is_empty() {
        return Err("Empty input".to_string());
    }
    if input.len() < 2 {
        return Err("Too short - need column letter and row number (e.g., A5)".to_string());
    }
    let mut chars = input.chars();
    let col_ch = chars.next().ok_or("No column letter")?.to_ascii_uppercase();
    if !col_ch.is_ascii_alphabetic() {
        return Err(format!("Invalid column '{}' - must be a letter A-J", col_ch));
    }
    let col = (col_ch as u8).wrapping_sub(b'A') as usize;
    if col >= BOARD_SIZE {
        return Err(format!("Column '{}' out of bounds - must be A-J", col_ch));
    }
    let row_str: String = chars.collect();
    let row: usize = row_str
        .parse()
        .map_err(|_| format!("Invalid row '{}' - must be a number 1-10", row_str))?;
    if row == 0 {
        return Err("Row cannot be 0 - must be 1-10".to_string());
    }
    if row > BOARD_SIZE {
        return Err(format!("Row {} out of bounds - must be 1-10", row));
    }
    Ok((row - 1, col))
}

pub fn parse_command(line: &str) -> Result<Command, String> {
    match line.trim() {
        "show" => Ok(Command::Show),
        "quit" | "exit" => Ok(Command::Quit),
        other => parse_coord(other).map(|(r, c)| Command::Fire(r, c)),
    }
}

/// Play `board` interactively, reading commands from `input` until the fleet
/// is sunk, the player quits or input runs out.
pub fn run_session<R: BufRead, W: Write>(
    board: &mut Board,
    input: R,
    output: &mut W,
    reveal: bool,
) -> anyhow::Result<SimReport> {
    let mut report = SimReport::default();
    writeln!(output, "Fire with coordinates like A5. Type 'show' or 'quit'.")?;
    write!(output, "{}", board.view(reveal))?;

    for line in input.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        match parse_command(&line) {
            Ok(Command::Fire(r, c)) => {
                let result = board.fire(r, c)?;
                report.record(result);
                writeln!(output, "{} -> {}", coord_to_string(r, c), result)?;
                write!(output, "{}", board.view(reveal))?;
                if result == ShotResult::Sunk {
                    writeln!(output, "Ships remaining: {}", board.ships_remaining())?;
                }
                if board.all_sunk() {
                    report.cleared = true;
                    writeln!(output, "All ships sunk in {} shots!", report.shots)?;
                    break;
                }
            }
            Ok(Command::Show) => write!(output, "{}", board)?,
            Ok(Command::Quit) => break,
            Err(e) => writeln!(output, "Invalid input: {}", e)?,
        }
    }
    output.flush()?;
    Ok(report)
}
