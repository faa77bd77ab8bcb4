//! Coloured board rendering.

use super::text::COMMAND_SUMMARY;
use crate::games::lights_out::{Cell, Lights, Location, Mode};
use crate::session::BoardRenderer;
use anyhow::Result;
use crossterm::{
    queue,
    style::{Color, Print, ResetColor, SetForegroundColor},
};
use std::io::Write;
use tracing::instrument;

const LABEL_COLOR: Color = Color::Cyan;
const BANNER_COLOR: Color = Color::Magenta;

/// Draws the board to a terminal writer using ANSI colours.
///
/// ```text
///    1 2 3
///
/// A   O . .
/// B   . O .
/// C   . . .
/// ```
#[derive(Debug)]
pub struct ConsoleRenderer<W: Write> {
    out: W,
}

impl<W: Write> ConsoleRenderer<W> {
    /// Creates a renderer writing to `out`.
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Consumes the renderer, returning the writer.
    pub fn into_inner(self) -> W {
        self.out
    }

    /// Writes plain text with no styling.
    pub fn message(&mut self, text: &str) -> Result<()> {
        writeln!(self.out, "{}", text)?;
        self.out.flush()?;
        Ok(())
    }

    fn light_color(cell: Cell) -> Color {
        match cell {
            Cell::On => Color::Yellow,
            Cell::Off => Color::Grey,
        }
    }
}

impl<W: Write> BoardRenderer for ConsoleRenderer<W> {
    #[instrument(skip_all, fields(size = lights.size(), mode = %mode))]
    fn render_board(&mut self, lights: Lights<'_>, mode: Mode) -> Result<()> {
        let header = (1..=lights.size())
            .map(|column| column.to_string())
            .collect::<Vec<_>>()
            .join(" ");

        queue!(self.out, Print("\n"))?;
        if mode == Mode::Edit {
            queue!(
                self.out,
                SetForegroundColor(BANNER_COLOR),
                Print("EDIT MODE: lights toggle individually, type 'edit' to resume play\n\n")
            )?;
        }
        queue!(
            self.out,
            SetForegroundColor(LABEL_COLOR),
            Print(format!("    {}\n\n", header))
        )?;

        for (row, cells) in lights.rows().enumerate() {
            queue!(
                self.out,
                SetForegroundColor(LABEL_COLOR),
                Print(format!("{}  ", Location::row_label(row)))
            )?;
            for cell in cells {
                queue!(
                    self.out,
                    Print(" "),
                    SetForegroundColor(Self::light_color(*cell)),
                    Print(cell.glyph())
                )?;
            }
            queue!(self.out, Print("\n"))?;
        }

        queue!(self.out, ResetColor, Print("\n"))?;
        self.out.flush()?;
        Ok(())
    }

    #[instrument(skip(self))]
    fn render_help(&mut self, size: usize) -> Result<()> {
        let last_row = Location::row_label(size.saturating_sub(1));
        let last_column = size.min(9);
        writeln!(self.out, "Sorry, I didn't understand that.")?;
        write!(self.out, "{}", COMMAND_SUMMARY)?;
        writeln!(self.out, "Rows run A-{}, columns 1-{}.", last_row, last_column)?;
        self.out.flush()?;
        Ok(())
    }
}
