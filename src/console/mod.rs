//! Terminal collaborators: coloured board rendering, line input and
//! player-facing text.

mod input;
mod render;
mod text;

pub use input::ConsoleSource;
pub use render::ConsoleRenderer;
pub use text::{COMMAND_SUMMARY, INSTRUCTIONS};
