//! Append-only plaintext move log.

use anyhow::{Context, Result};
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::Path;
use strictly_grid::MoveRecord;
use tracing::{debug, info, instrument};

/// Writes one line per applied move, e.g. `Player 1 (X) moved at (0, 2)`.
pub struct MoveLog<W> {
    writer: W,
}

impl MoveLog<File> {
    /// Creates (or empties) the log file at `path`.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn create(path: impl AsRef<Path>) -> Result<Self> {
        let file = OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(path.as_ref())
            .with_context(|| format!("Failed to open move log {}", path.as_ref().display()))?;
        info!("Move log ready");
        Ok(Self::new(file))
    }
}

impl<W: Write> MoveLog<W> {
    /// Wraps any writer.
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Appends one move and flushes it.
    #[instrument(skip(self))]
    pub fn record(&mut self, record: &MoveRecord) -> Result<()> {
        writeln!(self.writer, "{}", record).context("Failed to write move log")?;
        self.writer.flush().context("Failed to flush move log")?;
        debug!("Move logged");
        Ok(())
    }

    /// Consumes the log, returning the writer.
    pub fn into_inner(self) -> W {
        self.writer
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strictly_grid::{Position, Symbol};

    #[test]
    fn test_record_format() {
        let mut log = MoveLog::new(Vec::new());
        log.record(&MoveRecord::new(0, Symbol::X, Position::new(0, 0)))
            .unwrap();
        log.record(&MoveRecord::new(2, Symbol::Z, Position::new(3, 1)))
            .unwrap();

        let text = String::from_utf8(log.into_inner()).unwrap();
        assert_eq!(
            text,
            "Player 1 (X) moved at (0, 0)\nPlayer 3 (Z) moved at (3, 1)\n"
        );
    }
}
