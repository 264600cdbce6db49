//! mdtree - render a directory as a text tree, on the terminal or fenced for Markdown

pub mod error;
pub mod output;
pub mod tree;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use error::{TreeError, TreeResult};
pub use output::{
    Destination, FencedFileWriter, JsonFormatter, LineSink, OutputConfig, RenderOptions,
    StreamingFormatter, TreePrinter, render,
};
pub use tree::{BuilderConfig, LineSequence, TreeBuilder, TreeLine, build};
