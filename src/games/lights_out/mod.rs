//! Lights Out: a square grid of lights where selecting one toggles it and
//! its orthogonal neighbours. The puzzle is solved when every light is off.

mod board;
mod command;
mod types;

pub use board::{Board, BoardError, Lights};
pub use command::Command;
pub use types::{Cell, Location, Mode};
