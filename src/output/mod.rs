//! Tree output
//!
//! This module delivers a built [`LineSequence`] to its destination:
//!
//! - `streaming` - line-by-line stream output with optional color
//! - `fenced` - file output wrapped in a Markdown code fence
//! - `json` - JSON rows for tooling
//! - `printer` - `TreePrinter`, which ties a builder to a destination

mod config;
mod destination;
mod fenced;
mod json;
mod printer;
mod streaming;

use crate::error::TreeResult;
use crate::tree::LineSequence;

pub use config::OutputConfig;
pub use destination::Destination;
pub use fenced::{FENCE, FencedFileWriter, write_fenced};
pub use json::{JsonFormatter, to_json};
pub use printer::{RenderOptions, TreePrinter, render};
pub use streaming::StreamingFormatter;

/// Anything that can receive a full set of rendered rows.
pub trait LineSink {
    fn write_lines(&mut self, lines: &LineSequence) -> TreeResult<()>;
}
