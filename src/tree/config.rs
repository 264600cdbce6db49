//! Configuration types for the tree builder

/// Default ignore prefix: hide dot-files.
pub const DEFAULT_IGNORE_PREFIX: &str = ".";

/// Configuration for tree building behavior.
#[derive(Debug, Clone)]
pub struct BuilderConfig {
    /// Entries whose name starts with this prefix are skipped along with their
    /// contents. `None` disables the filter; an empty prefix matches every name.
    pub ignore_prefix: Option<String>,
    pub dirs_only: bool,
    /// Directories at this depth are listed but not descended into.
    pub max_depth: Option<usize>,
}

impl BuilderConfig {
    /// The active ignore prefix, if filtering is enabled.
    pub fn ignore_prefix(&self) -> Option<&str> {
        self.ignore_prefix.as_deref()
    }
}

impl Default for BuilderConfig {
    fn default() -> Self {
        Self {
            ignore_prefix: Some(DEFAULT_IGNORE_PREFIX.to_string()),
            dirs_only: false,
            max_depth: None,
        }
    }
}
