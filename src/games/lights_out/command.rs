//! Player commands and their interpretation.
//!
//! Parsing is a pure function of the raw line, the current mode and the
//! board size. Applying the result is the session's job.

use super::types::{Location, Mode};
use tracing::{debug, instrument};

/// Punctuation the player may use between row and column (`a,1`, `a-1`, `a.1`).
const IGNORED_PUNCTUATION: [char; 3] = ['.', '-', ','];

/// A command typed by the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    /// Select a light in Play mode.
    MakeMove(Location),
    /// Flip a single light in Edit mode.
    ToggleLight(Location),
    /// Switch between Play and Edit.
    ToggleEditMode,
    /// Leave the game.
    Exit,
    /// Anything not understood.
    Unknown,
}

impl Command {
    /// Interprets one line of player input.
    ///
    /// Locations are a row letter followed by a single column digit, so
    /// columns past 9 cannot be addressed.
    #[instrument]
    pub fn interpret(raw: &str, mode: Mode, size: usize) -> Self {
        let normalized = normalize(raw);

        let command = match normalized.as_str() {
            "exit" => Command::Exit,
            "edit" => Command::ToggleEditMode,
            other => match (parse_location(other, size), mode) {
                (Some(location), Mode::Play) => Command::MakeMove(location),
                (Some(location), Mode::Edit) => Command::ToggleLight(location),
                _ => Command::Unknown,
            },
        };

        debug!(?command, "Interpreted input");
        command
    }

    /// Whether the board should be redrawn after this command.
    pub fn changes_state(&self) -> bool {
        !matches!(self, Command::Unknown)
    }
}

/// Trims, lowercases and strips separator punctuation.
fn normalize(raw: &str) -> String {
    raw.trim()
        .to_lowercase()
        .chars()
        .filter(|c| !IGNORED_PUNCTUATION.contains(c))
        .collect()
}

/// Decodes a two character `<row letter><column digit>` label.
fn parse_location(normalized: &str, size: usize) -> Option<Location> {
    let mut chars = normalized.chars();
    let (row_char, column_char) = match (chars.next(), chars.next(), chars.next()) {
        (Some(r), Some(c), None) => (r, c),
        _ => return None,
    };

    if !row_char.is_ascii_lowercase() {
        return None;
    }
    let row = usize::from(row_char as u8 - b'a');
    if row >= size {
        return None;
    }

    let digit = usize::try_from(column_char.to_digit(10)?).ok()?;
    if !(1..=size).contains(&digit) {
        return None;
    }

    Some(Location::new(row, digit - 1))
}
