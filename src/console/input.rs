//! Line-oriented player input.

use crate::session::CommandSource;
use anyhow::Result;
use std::io::{BufRead, Write};
use tracing::{debug, instrument};

/// Reads one line per turn from `input`, prompting on `prompt_out`.
#[derive(Debug)]
pub struct ConsoleSource<R: BufRead, W: Write> {
    input: R,
    prompt_out: W,
}

impl<R: BufRead, W: Write> ConsoleSource<R, W> {
    /// Creates a source reading from `input` and prompting on `prompt_out`.
    pub fn new(input: R, prompt_out: W) -> Self {
        Self { input, prompt_out }
    }
}

impl<R: BufRead, W: Write> CommandSource for ConsoleSource<R, W> {
    #[instrument(skip(self))]
    fn next_line(&mut self, prompt: &str) -> Result<Option<String>> {
        write!(self.prompt_out, "{}", prompt)?;
        self.prompt_out.flush()?;

        // Undecodable bytes become U+FFFD and the line falls through as unknown input.
        let mut buf = Vec::new();
        if self.input.read_until(b'\n', &mut buf)? == 0 {
            debug!("End of input");
            return Ok(None);
        }
        Ok(Some(String::from_utf8_lossy(&buf).into_owned()))
    }
}
