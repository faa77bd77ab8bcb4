//! Game session: owns the board and drives the turn loop.

use crate::games::lights_out::{Board, BoardError, Command, Lights, Mode};
use anyhow::{Context, Result};
use rand::Rng;
use tracing::{debug, info, instrument, trace, warn};

/// Prompt shown before every read.
pub const PROMPT: &str = "> ";

/// Draws the board for the player.
pub trait BoardRenderer {
    /// Draws the grid. `mode` lets the renderer flag Edit mode.
    fn render_board(&mut self, lights: Lights<'_>, mode: Mode) -> Result<()>;

    /// Shows the list of accepted commands after unrecognised input.
    fn render_help(&mut self, size: usize) -> Result<()>;
}

/// Supplies raw lines of player input.
pub trait CommandSource {
    /// Blocks until a line is available. `None` means input is exhausted.
    fn next_line(&mut self, prompt: &str) -> Result<Option<String>>;
}

/// How a session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    /// Every light was switched off.
    Won {
        /// Moves it took.
        moves: usize,
    },
    /// The player left before solving the board.
    Quit,
}

/// One run of the game from board generation to exit or win.
#[derive(Debug, Clone)]
pub struct GameSession {
    board: Board,
    mode: Mode,
    /// Redraw the board before the next prompt.
    state_changed: bool,
    moves: usize,
    outcome: Option<Outcome>,
}

impl GameSession {
    /// Creates a session around an existing board, starting in Play mode.
    #[instrument(skip(board), fields(size = board.size()))]
    pub fn new(board: Board) -> Self {
        Self {
            board,
            mode: Mode::Play,
            state_changed: true,
            moves: 0,
            outcome: None,
        }
    }

    /// Creates a session with a freshly randomized board.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::InvalidSize`] when `size` is zero.
    #[instrument(skip(rng))]
    pub fn with_random_board<R: Rng + ?Sized>(size: usize, rng: &mut R) -> Result<Self, BoardError> {
        let mut board = Board::new(size)?;
        board.randomize(rng);
        Ok(Self::new(board))
    }

    /// The board being played.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Current mode.
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Whether the board needs redrawing before the next prompt.
    pub fn state_changed(&self) -> bool {
        self.state_changed
    }

    /// Moves made so far. Edit toggles are not counted.
    pub fn moves(&self) -> usize {
        self.moves
    }

    /// How the session ended, once it has.
    pub fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    /// Applies an interpreted command to the session.
    ///
    /// A solved board in Play mode ends the session with a win.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::OutOfBounds`] if a command carries a location
    /// off the board. [`Command::interpret`] never produces one.
    #[instrument(skip(self), fields(mode = %self.mode))]
    pub fn apply(&mut self, command: Command) -> Result<(), BoardError> {
        if self.mode == Mode::Exited {
            warn!(?command, "Command ignored, session already exited");
            return Ok(());
        }

        match command {
            Command::MakeMove(location) => {
                self.board.make_move(location)?;
                self.moves += 1;
            }
            Command::ToggleLight(location) => self.board.toggle_light(location)?,
            Command::ToggleEditMode => {
                self.mode = self.mode.toggle_edit();
                info!(mode = %self.mode, "Switched mode");
            }
            Command::Exit => {
                info!("Player exited");
                self.finish(Outcome::Quit);
            }
            Command::Unknown => {}
        }
        self.state_changed = command.changes_state();
        trace!(board = %self.board.lights(), "Board after command");

        if self.mode == Mode::Play && self.board.is_complete() {
            info!(moves = self.moves, "Board solved");
            self.finish(Outcome::Won { moves: self.moves });
        }

        Ok(())
    }

    /// Runs turns until the player wins or exits.
    ///
    /// Exhausted input counts as an exit.
    #[instrument(skip_all, fields(size = self.board.size()))]
    pub fn run<R, S>(&mut self, renderer: &mut R, source: &mut S) -> Result<Outcome>
    where
        R: BoardRenderer + ?Sized,
        S: CommandSource + ?Sized,
    {
        info!(lit = self.board.lit_count(), "Session started");

        while self.mode != Mode::Exited {
            if self.state_changed {
                renderer
                    .render_board(self.board.lights(), self.mode)
                    .context("Failed to render board")?;
            }

            let command = match source.next_line(PROMPT).context("Failed to read input")? {
                Some(line) => Command::interpret(&line, self.mode, self.board.size()),
                None => {
                    debug!("Input exhausted, treating as exit");
                    Command::Exit
                }
            };

            if command == Command::Unknown {
                renderer
                    .render_help(self.board.size())
                    .context("Failed to show help")?;
            }

            self.apply(command)
                .context("Command referenced a location off the board")?;
        }

        // Loop only ends once an outcome is recorded.
        Ok(self.outcome.unwrap_or(Outcome::Quit))
    }

    fn finish(&mut self, outcome: Outcome) {
        self.mode = Mode::Exited;
        self.outcome = Some(outcome);
    }
}
