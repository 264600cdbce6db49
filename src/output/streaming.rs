//! Streaming output formatter
//!
//! This module provides `StreamingFormatter`, which writes rows directly to a
//! color-capable stream (stdout by default) one line at a time.

use std::io::{self, Write};
use std::path::MAIN_SEPARATOR;

use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

use crate::error::{TreeError, TreeResult};
use crate::tree::{LineSequence, TreeLine};

use super::LineSink;
use super::config::OutputConfig;

/// Writes rows to a live stream, coloring directory names when enabled.
pub struct StreamingFormatter<W: WriteColor> {
    config: OutputConfig,
    out: W,
    label: String,
}

impl StreamingFormatter<StandardStream> {
    /// Formatter over the process's stdout. `use_color` is final here; terminal
    /// and environment detection happen before the config is built.
    pub fn stdout(config: OutputConfig) -> Self {
        let choice = if config.use_color {
            ColorChoice::Always
        } else {
            ColorChoice::Never
        };
        Self {
            config,
            out: StandardStream::stdout(choice),
            label: "stdout".to_string(),
        }
    }
}

impl<W: WriteColor> StreamingFormatter<W> {
    pub fn new(config: OutputConfig, out: W) -> Self {
        Self {
            config,
            out,
            label: "stream".to_string(),
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn write_line(&mut self, line: &TreeLine) -> io::Result<()> {
        write!(self.out, "{}", line.prefix)?;
        if line.is_dir {
            if self.config.use_color {
                self.out
                    .set_color(ColorSpec::new().set_fg(Some(Color::Blue)).set_bold(true))?;
            }
            write!(self.out, "{}", line.name)?;
            if self.config.use_color {
                self.out.reset()?;
            }
            writeln!(self.out, "{}", MAIN_SEPARATOR)?;
        } else {
            writeln!(self.out, "{}", line.name)?;
        }
        Ok(())
    }
}

impl<W: WriteColor> LineSink for StreamingFormatter<W> {
    fn write_lines(&mut self, lines: &LineSequence) -> TreeResult<()> {
        for line in lines {
            self.write_line(line)
                .map_err(|e| TreeError::io(self.label.clone(), e))?;
        }
        self.out
            .flush()
            .map_err(|e| TreeError::io(self.label.clone(), e))
    }
}
