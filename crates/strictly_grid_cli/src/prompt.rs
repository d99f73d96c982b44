//! Line-based terminal prompts.
//!
//! Reads answers from any `BufRead` and writes prompts to any `Write`, so
//! the same code drives stdin/stdout and scripted tests.

use anyhow::{Context, Result};
use std::io::{BufRead, Write};
use std::str::FromStr;
use strictly_grid::{Controller, GameEngine, GameMode, Position, Symbol};
use strum::IntoEnumIterator;
use tracing::{debug, instrument, warn};

/// Terminal prompter over an input reader and an output writer.
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    /// Creates a prompter.
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Writer used for prompts and board display.
    pub fn output(&mut self) -> &mut W {
        &mut self.output
    }

    /// Consumes the prompter, returning the output writer.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Prints the welcome line.
    pub fn banner(&mut self) -> Result<()> {
        writeln!(self.output, "Welcome to Tic-Tac-Toe")?;
        Ok(())
    }

    /// Reads one line.
    ///
    /// # Errors
    ///
    /// Fails when input is closed, so retry loops cannot spin forever.
    fn read_line(&mut self) -> Result<String> {
        self.output.flush()?;
        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .context("Failed to read input")?;
        if read == 0 {
            anyhow::bail!("Input closed");
        }
        Ok(line.trim().to_string())
    }

    /// Prompts until the answer parses as `T`.
    #[instrument(skip(self))]
    pub fn ask<T: FromStr>(&mut self, prompt: &str) -> Result<T> {
        loop {
            write!(self.output, "{}", prompt)?;
            let line = self.read_line()?;
            match line.parse::<T>() {
                Ok(value) => return Ok(value),
                Err(_) => {
                    debug!(input = %line, "Unparsable answer");
                    writeln!(self.output, "Please enter a number.")?;
                }
            }
        }
    }

    /// Asks for the board edge. Range checking is left to the engine.
    pub fn board_size(&mut self) -> Result<usize> {
        self.ask("Enter board size N (3-10): ")
    }

    /// Shows the mode menu and reads a choice. Range checking is left to
    /// the engine.
    pub fn mode(&mut self) -> Result<u8> {
        writeln!(self.output, "Choose mode:")?;
        for mode in GameMode::iter() {
            writeln!(self.output, "{}. {}", mode.number(), mode)?;
        }
        self.ask("Enter choice: ")
    }

    /// Asks whether one player is computer-controlled, re-asking until the
    /// answer is 1 or 0.
    #[instrument(skip(self))]
    pub fn controller(&mut self, player_index: usize, symbol: Symbol) -> Result<Controller> {
        loop {
            let prompt = format!(
                "Is Player {} ({}) a computer? (1 = Yes, 0 = No): ",
                player_index + 1,
                symbol
            );
            match self.ask::<u8>(&prompt)? {
                1 => return Ok(Controller::Computer),
                0 => return Ok(Controller::Human),
                other => {
                    debug!(answer = other, "Answer out of range");
                    writeln!(self.output, "Please answer 1 or 0.")?;
                }
            }
        }
    }

    /// Reads a move for the current player, re-asking until the engine
    /// accepts the cell.
    #[instrument(skip(self, engine), fields(turn = engine.turn()))]
    pub fn human_move(&mut self, engine: &GameEngine) -> Result<Position> {
        let index = engine.current_player_index();
        let symbol = *engine.current_player().symbol();
        loop {
            write!(
                self.output,
                "Player {} ({}), enter row and column: ",
                index + 1,
                symbol
            )?;
            let line = self.read_line()?;
            let Some((row, col)) = parse_coordinates(&line) else {
                debug!(input = %line, "Unparsable coordinates");
                writeln!(self.output, "Please enter two numbers, e.g. `0 2`.")?;
                continue;
            };
            match engine.validate(row, col) {
                Ok(pos) => return Ok(pos),
                Err(e) => {
                    warn!(row, col, error = %e, "Rejected move");
                    writeln!(self.output, "Invalid move: {}", e)?;
                }
            }
        }
    }
}

/// Parses `row col` (spaces or a comma between them).
pub fn parse_coordinates(line: &str) -> Option<(isize, isize)> {
    let mut parts = line
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|s| !s.is_empty());
    let row = parts.next()?.parse().ok()?;
    let col = parts.next()?.parse().ok()?;
    if parts.next().is_some() {
        return None;
    }
    Some((row, col))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_coordinates() {
        assert_eq!(parse_coordinates("1 2"), Some((1, 2)));
        assert_eq!(parse_coordinates("  0,  2 "), Some((0, 2)));
        assert_eq!(parse_coordinates("-1 0"), Some((-1, 0)));
        assert_eq!(parse_coordinates("1"), None);
        assert_eq!(parse_coordinates("a b"), None);
        assert_eq!(parse_coordinates("1 2 3"), None);
    }

    #[test]
    fn test_ask_retries_until_number() {
        let input: &[u8] = b"ten\n\n4\n";
        let mut prompter = Prompter::new(input, Vec::new());
        assert_eq!(prompter.board_size().unwrap(), 4);

        let output = String::from_utf8(prompter.into_output()).unwrap();
        assert_eq!(output.matches("Enter board size N (3-10): ").count(), 3);
        assert_eq!(output.matches("Please enter a number.").count(), 2);
    }

    #[test]
    fn test_closed_input_is_an_error() {
        let input: &[u8] = b"";
        let mut prompter = Prompter::new(input, Vec::new());
        assert!(prompter.mode().is_err());
    }
}
