//! TreePrinter - builds a tree and delivers it to a destination

use std::path::Path;

use tracing::debug;

use crate::error::TreeResult;
use crate::tree::{BuilderConfig, TreeBuilder};

use super::config::OutputConfig;
use super::destination::Destination;

/// Everything needed to render one tree.
#[derive(Debug, Clone, Default)]
pub struct RenderOptions {
    pub builder: BuilderConfig,
    pub output: OutputConfig,
    pub destination: Destination,
}

pub struct TreePrinter {
    builder: TreeBuilder,
    output: OutputConfig,
    destination: Destination,
}

impl TreePrinter {
    pub fn new(root: impl AsRef<Path>, options: RenderOptions) -> TreeResult<Self> {
        Ok(Self {
            builder: TreeBuilder::new(root, options.builder)?,
            output: options.output,
            destination: options.destination,
        })
    }

    pub fn builder(&self) -> &TreeBuilder {
        &self.builder
    }

    pub fn destination(&self) -> &Destination {
        &self.destination
    }

    /// Build the tree and write it out. Nothing is written if the build fails.
    pub fn render(&self) -> TreeResult<()> {
        let lines = self.builder.build()?;
        debug!(destination = ?self.destination, lines = lines.len(), "rendering tree");
        self.destination.write_lines(&lines, &self.output)
    }
}

/// Render the tree at `root` in one call.
pub fn render(root: impl AsRef<Path>, options: RenderOptions) -> TreeResult<()> {
    TreePrinter::new(root, options)?.render()
}
