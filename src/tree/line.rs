//! Rendered rows of a tree

use std::fmt;
use std::path::MAIN_SEPARATOR;

use serde::Serialize;

/// One rendered row: ancestor continuation and connector, then the entry name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TreeLine {
    /// Everything before the name, e.g. `"│   └── "`. Empty for the root.
    pub prefix: String,
    pub name: String,
    pub is_dir: bool,
    /// Root is depth 0.
    pub depth: usize,
}

impl TreeLine {
    pub fn root(name: String) -> Self {
        Self {
            prefix: String::new(),
            name,
            is_dir: true,
            depth: 0,
        }
    }
}

impl fmt::Display for TreeLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.prefix)?;
        f.write_str(&self.name)?;
        if self.is_dir {
            write!(f, "{}", MAIN_SEPARATOR)?;
        }
        Ok(())
    }
}

/// Ordered rows of a tree in depth-first pre-order.
///
/// Filled once by [`TreeBuilder`](super::TreeBuilder) and read-only afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct LineSequence(Vec<TreeLine>);

impl LineSequence {
    pub(crate) fn push(&mut self, line: TreeLine) {
        self.0.push(line);
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TreeLine> {
        self.0.iter()
    }

    /// The rows as plain text, in order.
    pub fn lines(&self) -> impl Iterator<Item = String> + '_ {
        self.0.iter().map(TreeLine::to_string)
    }

    pub fn to_strings(&self) -> Vec<String> {
        self.lines().collect()
    }
}

impl<'a> IntoIterator for &'a LineSequence {
    type Item = &'a TreeLine;
    type IntoIter = std::slice::Iter<'a, TreeLine>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
