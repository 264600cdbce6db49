//! Output configuration types

/// Configuration for stream output formatting.
#[derive(Debug, Clone)]
pub struct OutputConfig {
    /// Color directory names. Ignored for file destinations.
    pub use_color: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self { use_color: true }
    }
}
