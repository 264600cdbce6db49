//! Where a rendered tree goes

use std::path::PathBuf;

use crate::error::TreeResult;
use crate::tree::LineSequence;

use super::LineSink;
use super::config::OutputConfig;
use super::fenced::FencedFileWriter;
use super::json::JsonFormatter;
use super::streaming::StreamingFormatter;

/// Output destination for a rendered tree.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Destination {
    /// Live stdout, one line at a time, no fence.
    #[default]
    Stdout,
    /// File overwritten with the fenced tree.
    File(PathBuf),
    /// Stdout as a JSON array of rows.
    Json,
}

impl Destination {
    pub fn write_lines(&self, lines: &LineSequence, config: &OutputConfig) -> TreeResult<()> {
        match self {
            Destination::Stdout => StreamingFormatter::stdout(config.clone()).write_lines(lines),
            Destination::File(path) => FencedFileWriter::new(path).write_lines(lines),
            Destination::Json => JsonFormatter::stdout().write_lines(lines),
        }
    }
}

impl From<Option<PathBuf>> for Destination {
    fn from(path: Option<PathBuf>) -> Self {
        path.map_or(Destination::Stdout, Destination::File)
    }
}
