//! Lights Out - a text-driven puzzle library
//!
//! An N×N grid of lights where selecting a light toggles it and its
//! orthogonal neighbours. The player wins by switching every light off.
//!
//! # Architecture
//!
//! - **Games**: the board state machine and command interpretation
//! - **Session**: the turn loop driving a board through pluggable I/O
//! - **Console**: terminal rendering and line input
//! - **Config**: board size and seed, from TOML or the command line
//!
//! # Example
//!
//! ```
//! use lights_out::{Board, Command, GameSession, Location, Mode, Outcome};
//!
//! let mut session = GameSession::new(Board::new(5)?);
//! session.apply(Command::interpret("b2", Mode::Play, 5))?;
//! session.apply(Command::interpret("B,2", Mode::Play, 5))?;
//! assert_eq!(session.outcome(), Some(Outcome::Won { moves: 2 }));
//! assert_eq!(session.board().get(Location::new(1, 1)), Some(lights_out::Cell::Off));
//! # Ok::<(), lights_out::BoardError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
mod console;
mod games;
mod session;

// Crate-level exports - Configuration
pub use config::{ConfigError, DEFAULT_BOARD_SIZE, GameConfig, MAX_BOARD_SIZE, MIN_BOARD_SIZE};

// Crate-level exports - Terminal collaborators
pub use console::{COMMAND_SUMMARY, ConsoleRenderer, ConsoleSource, INSTRUCTIONS};

// Crate-level exports - Game types
pub use games::lights_out::{Board, BoardError, Cell, Command, Lights, Location, Mode};

// Crate-level exports - Session
pub use session::{BoardRenderer, CommandSource, GameSession, Outcome, PROMPT};
