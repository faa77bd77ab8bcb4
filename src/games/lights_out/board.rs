//! Board state machine for Lights Out.
//!
//! The board exclusively owns its grid. Callers read it through the
//! [`Lights`] view, which hands out shared slices only.

use super::types::{Cell, Location};
use rand::Rng;
use tracing::{debug, instrument};

/// Offsets toggled by a move: the cell itself and its orthogonal neighbours.
const MOVE_DELTAS: [(isize, isize); 5] = [(0, 0), (0, 1), (1, 0), (-1, 0), (0, -1)];

/// Error raised by board operations.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum BoardError {
    /// Board size must be at least 1.
    #[display("Invalid board size {}: must be at least 1", _0)]
    InvalidSize(usize),

    /// Location lies outside the grid.
    #[display("Location {location} is outside a {size}x{size} board")]
    OutOfBounds {
        /// Offending location.
        location: Location,
        /// Size of the board.
        size: usize,
    },
}

impl std::error::Error for BoardError {}

/// Square grid of lights.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    size: usize,
    /// Row-major, row 0 at the top.
    cells: Vec<Vec<Cell>>,
    /// Set by the first move. Edit toggles leave it alone.
    started: bool,
}

impl Board {
    /// Creates a board with every light off.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::InvalidSize`] when `size` is zero.
    #[instrument]
    pub fn new(size: usize) -> Result<Self, BoardError> {
        if size < 1 {
            return Err(BoardError::InvalidSize(size));
        }

        Ok(Self {
            size,
            cells: vec![vec![Cell::Off; size]; size],
            started: false,
        })
    }

    /// Width and height of the grid.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Whether at least one move has been made.
    pub fn started(&self) -> bool {
        self.started
    }

    /// Read-only view of the grid.
    pub fn lights(&self) -> Lights<'_> {
        Lights { rows: &self.cells }
    }

    /// Returns the cell at `location`, or `None` if out of bounds.
    pub fn get(&self, location: Location) -> Option<Cell> {
        self.cells
            .get(location.row)
            .and_then(|row| row.get(location.column))
            .copied()
    }

    /// Number of lit cells.
    pub fn lit_count(&self) -> usize {
        self.lights().iter().filter(|cell| cell.is_on()).count()
    }

    /// Sets every light independently at random, guaranteeing at least one is lit.
    ///
    /// Does not mark the board as started.
    #[instrument(skip(self, rng), fields(size = self.size))]
    pub fn randomize<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        for row in self.cells.iter_mut() {
            for cell in row.iter_mut() {
                *cell = Cell::from(rng.gen_bool(0.5));
            }
        }

        if self.lit_count() == 0 {
            let row = rng.gen_range(0..self.size);
            let column = rng.gen_range(0..self.size);
            debug!(row, column, "Random draw was all off, forcing one light on");
            self.cells[row][column] = Cell::On;
        }

        debug!(lit = self.lit_count(), "Board randomized");
    }

    /// Selects a light: toggles it and its in-bounds orthogonal neighbours.
    ///
    /// Neighbours past an edge are skipped, there is no wraparound.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::OutOfBounds`] if `location` is off the grid.
    #[instrument(skip(self), fields(row = location.row, column = location.column))]
    pub fn make_move(&mut self, location: Location) -> Result<(), BoardError> {
        self.check_bounds(location)?;

        for target in self.neighbourhood(location) {
            self.flip(target);
        }
        self.started = true;

        debug!(lit = self.lit_count(), "Move applied");
        Ok(())
    }

    /// Toggles a single light without touching its neighbours.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::OutOfBounds`] if `location` is off the grid.
    #[instrument(skip(self), fields(row = location.row, column = location.column))]
    pub fn toggle_light(&mut self, location: Location) -> Result<(), BoardError> {
        self.check_bounds(location)?;
        self.flip(location);
        Ok(())
    }

    /// True once a move has been made and every light is off.
    pub fn is_complete(&self) -> bool {
        self.started && self.lights().iter().all(|cell| !cell.is_on())
    }

    /// In-bounds locations affected by a move at `location`.
    fn neighbourhood(&self, location: Location) -> Vec<Location> {
        MOVE_DELTAS
            .iter()
            .filter_map(|&(dr, dc)| {
                let row = location.row.checked_add_signed(dr)?;
                let column = location.column.checked_add_signed(dc)?;
                (row < self.size && column < self.size).then(|| Location::new(row, column))
            })
            .collect()
    }

    fn flip(&mut self, location: Location) {
        let cell = &mut self.cells[location.row][location.column];
        *cell = cell.toggled();
    }

    fn check_bounds(&self, location: Location) -> Result<(), BoardError> {
        if location.row < self.size && location.column < self.size {
            Ok(())
        } else {
            Err(BoardError::OutOfBounds {
                location,
                size: self.size,
            })
        }
    }
}

/// Immutable, iteration-only view of a board's grid.
#[derive(Debug, Clone, Copy)]
pub struct Lights<'a> {
    rows: &'a [Vec<Cell>],
}

impl<'a> Lights<'a> {
    /// Width and height of the grid.
    pub fn size(&self) -> usize {
        self.rows.len()
    }

    /// Rows from top to bottom.
    pub fn rows(self) -> impl Iterator<Item = &'a [Cell]> + 'a {
        self.rows.iter().map(Vec::as_slice)
    }

    /// Every cell in row-major order.
    pub fn iter(self) -> impl Iterator<Item = Cell> + 'a {
        self.rows.iter().flat_map(|row| row.iter().copied())
    }

    /// Copies the grid out as owned rows.
    pub fn to_vec(&self) -> Vec<Vec<Cell>> {
        self.rows.to_vec()
    }
}

impl std::fmt::Display for Lights<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in self.rows() {
            let line = row
                .iter()
                .map(|cell| cell.glyph().to_string())
                .collect::<Vec<_>>()
                .join(" ");
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}
