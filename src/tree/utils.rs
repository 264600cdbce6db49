//! Shared helpers for tree building

use std::path::Path;

/// Connector for every entry but the last among its siblings.
pub const TEE: &str = "├──";
/// Connector for the last entry among its siblings.
pub const ELBOW: &str = "└──";
/// Child prefix segment when siblings still follow.
pub const PIPE_PREFIX: &str = "│   ";
/// Child prefix segment below the last sibling.
pub const SPACE_PREFIX: &str = "    ";

/// Get the name of a path as displayed in the tree.
pub fn entry_name(path: &Path) -> String {
    path.file_name()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_default()
}

/// Sort key for sibling ordering: the full path, lowercased.
pub fn sort_key(path: &Path) -> String {
    path.to_string_lossy().to_lowercase()
}

/// Check if an entry name is hidden by the ignore prefix.
pub fn is_ignored(name: &str, ignore_prefix: Option<&str>) -> bool {
    ignore_prefix.is_some_and(|prefix| name.starts_with(prefix))
}

pub fn connector(is_last: bool) -> &'static str {
    if is_last { ELBOW } else { TEE }
}

/// Calculate the prefix handed down to an entry's children.
pub fn child_prefix(current_prefix: &str, is_last: bool) -> String {
    if is_last {
        format!("{}{}", current_prefix, SPACE_PREFIX)
    } else {
        format!("{}{}", current_prefix, PIPE_PREFIX)
    }
}
