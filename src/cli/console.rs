use std::io::{BufRead, Write};

use crate::error::Result;
use crate::utils::constants::{AFFIRMATIVE, SEPARATOR_WIDTH};

/// Line-oriented prompt/print adapter over any reader and writer.
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Print `message` and read one line. `None` on end of input.
    pub fn prompt(&mut self, message: &str) -> Result<Option<String>> {
        write!(self.output, "{}", message)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(&['\r', '\n'][..]).to_string()))
    }

    /// True only for "yes" in any letter case.
    pub fn confirm(&mut self, message: &str) -> Result<bool> {
        Ok(self
            .prompt(message)?
            .map_or(false, |answer| is_affirmative(&answer)))
    }

    pub fn println(&mut self, text: &str) -> Result<()> {
        writeln!(self.output, "{}", text)?;
        Ok(())
    }

    pub fn separator(&mut self) -> Result<()> {
        self.println(&"-".repeat(SEPARATOR_WIDTH))
    }

    pub fn into_output(self) -> W {
        self.output
    }
}

pub fn is_affirmative(answer: &str) -> bool {
    answer.eq_ignore_ascii_case(AFFIRMATIVE)
}
