//! Fenced file output
//!
//! Writes the tree into a file wrapped in a Markdown code fence so it can be
//! pasted straight into documentation.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use tracing::debug;

use crate::error::{TreeError, TreeResult};
use crate::tree::LineSequence;

use super::LineSink;

/// Fence marker written before and after the tree.
pub const FENCE: &str = "```";

/// Write the fenced tree to any writer. Every line ends with `\n`.
pub fn write_fenced<W: Write>(out: &mut W, lines: &LineSequence) -> io::Result<()> {
    writeln!(out, "{}", FENCE)?;
    for line in lines {
        writeln!(out, "{}", line)?;
    }
    writeln!(out, "{}", FENCE)?;
    Ok(())
}

/// Overwrites the file at `path` with the fenced tree.
pub struct FencedFileWriter {
    path: PathBuf,
}

impl FencedFileWriter {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn label(&self) -> String {
        format!("'{}'", self.path.display())
    }
}

impl LineSink for FencedFileWriter {
    fn write_lines(&mut self, lines: &LineSequence) -> TreeResult<()> {
        let file = File::create(&self.path).map_err(|e| TreeError::io(self.label(), e))?;
        let mut out = BufWriter::new(file);
        write_fenced(&mut out, lines)
            .and_then(|()| out.flush())
            .map_err(|e| TreeError::io(self.label(), e))?;
        debug!(path = %self.path.display(), lines = lines.len(), "wrote fenced tree");
        Ok(())
    }
}
