//! Player-facing text.

/// Shown once before the first board, and by `--help`.
pub const INSTRUCTIONS: &str = "\
The game displays a grid of lights (5x5 unless a size is given). Initially some of the lights will be turned on.

For each turn the game displays the current state of the grid and asks you to specify a light. That light and any horizontal or vertical neighbours will be toggled.

The goal is to turn all the lights off.

To specify a light enter its row and column, e.g. 'A1' refers to the top left light (lowercase letters are also acceptable). Type 'edit' to switch single lights on and off without affecting their neighbours, and 'edit' again to resume play. To exit type 'exit'.
";

/// Shown after input that could not be understood.
pub const COMMAND_SUMMARY: &str = "\
Commands:
  <row><column>  select a light, e.g. A1 or b,3
  edit           toggle edit mode (flip single lights)
  exit           leave the game
";
