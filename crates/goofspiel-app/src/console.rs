//! Terminal adapters for the game's input and display boundary.

use goofspiel_core::game::io::{GameEvent, InputError, InputSource, Reporter};
use std::io::{BufRead, Write};

/// Prompts on a writer and reads one line per request.
pub struct ConsoleInput<R, W> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> ConsoleInput<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }
}

impl<R: BufRead, W: Write> InputSource for ConsoleInput<R, W> {
    fn request_text(&mut self, prompt: &str) -> Result<String, InputError> {
        self.writer.write_all(prompt.as_bytes())?;
        self.writer.flush()?;

        // Undecodable bytes still count as an answer and get re-prompted.
        let mut line = Vec::new();
        if self.reader.read_until(b'\n', &mut line)? == 0 {
            return Err(InputError::Closed);
        }
        let text = String::from_utf8_lossy(&line);
        Ok(text.trim_end_matches(['\r', '\n']).to_string())
    }
}

/// Prints each event's message on its own line.
pub struct ConsoleReporter<W> {
    writer: W,
}

impl<W: Write> ConsoleReporter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> Reporter for ConsoleReporter<W> {
    fn report(&mut self, event: &GameEvent) {
        if let Err(err) = writeln!(self.writer, "{event}").and_then(|()| self.writer.flush()) {
            tracing::warn!(%err, "failed to write game output");
        }
    }
}
