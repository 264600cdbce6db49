//! JSON output formatting

use std::io::{self, Stdout, Write};

use crate::error::{TreeError, TreeResult};
use crate::tree::LineSequence;

use super::LineSink;

/// Render rows as a pretty-printed JSON array.
pub fn to_json(lines: &LineSequence) -> serde_json::Result<String> {
    serde_json::to_string_pretty(lines)
}

/// Writes rows as one pretty-printed JSON array.
pub struct JsonFormatter<W: Write> {
    out: W,
    label: String,
}

impl JsonFormatter<Stdout> {
    pub fn stdout() -> Self {
        Self {
            out: io::stdout(),
            label: "stdout".to_string(),
        }
    }
}

impl<W: Write> JsonFormatter<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            label: "stream".to_string(),
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> LineSink for JsonFormatter<W> {
    fn write_lines(&mut self, lines: &LineSequence) -> TreeResult<()> {
        let json = to_json(lines)
            .map_err(|e| TreeError::io(self.label.clone(), io::Error::other(e)))?;
        writeln!(self.out, "{}", json)
            .and_then(|()| self.out.flush())
            .map_err(|e| TreeError::io(self.label.clone(), e))
    }
}
