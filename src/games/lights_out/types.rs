//! Core domain types for Lights Out.

use serde::{Deserialize, Serialize};
use tracing::instrument;

/// State of a single light on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    /// Light is lit.
    On,
    /// Light is dark.
    #[default]
    Off,
}

impl Cell {
    /// Returns the opposite state.
    pub fn toggled(self) -> Self {
        match self {
            Cell::On => Cell::Off,
            Cell::Off => Cell::On,
        }
    }

    /// Returns true if the light is lit.
    pub fn is_on(self) -> bool {
        matches!(self, Cell::On)
    }

    /// Glyph used when drawing the board.
    pub fn glyph(self) -> char {
        match self {
            Cell::On => 'O',
            Cell::Off => '.',
        }
    }
}

impl From<bool> for Cell {
    fn from(lit: bool) -> Self {
        if lit { Cell::On } else { Cell::Off }
    }
}

/// A (top left, 0-based) coordinate on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Location {
    /// Row index, 0 is the top row.
    pub row: usize,
    /// Column index, 0 is the left column.
    pub column: usize,
}

impl Location {
    /// Creates a new location.
    pub fn new(row: usize, column: usize) -> Self {
        Self { row, column }
    }

    /// Row label as typed by the player (`A`, `B`, ...).
    ///
    /// Rows past `Z` have no label and fall back to `?`.
    #[instrument]
    pub fn row_label(row: usize) -> char {
        u8::try_from(row)
            .ok()
            .filter(|r| *r < 26)
            .map(|r| char::from(b'A' + r))
            .unwrap_or('?')
    }
}

impl std::fmt::Display for Location {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", Self::row_label(self.row), self.column + 1)
    }
}

/// Interaction mode of a game session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, strum::Display)]
#[strum(serialize_all = "lowercase")]
pub enum Mode {
    /// Normal play: a selected light toggles its neighbours too.
    #[default]
    Play,
    /// Board authoring: a selected light toggles on its own.
    Edit,
    /// Session is over. Terminal.
    Exited,
}

impl Mode {
    /// Swaps Play and Edit. Exited stays Exited.
    pub fn toggle_edit(self) -> Self {
        match self {
            Mode::Play => Mode::Edit,
            Mode::Edit => Mode::Play,
            Mode::Exited => Mode::Exited,
        }
    }
}
