//! TreeBuilder - walks a directory and renders it into a LineSequence

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, trace};

use crate::error::{TreeError, TreeResult};

use super::config::BuilderConfig;
use super::line::{LineSequence, TreeLine};
use super::utils::{child_prefix, connector, entry_name, is_ignored, sort_key};

/// A directory entry that survived filtering.
#[derive(Debug)]
struct Entry {
    path: PathBuf,
    name: String,
    is_dir: bool,
}

/// Depth-first, sorted tree builder.
///
/// Symbolic links are followed like any other entry, so a link cycle recurses
/// until `max_depth` (if set) or the filesystem stops it.
pub struct TreeBuilder {
    root: PathBuf,
    config: BuilderConfig,
}

impl TreeBuilder {
    /// Resolve `root` to an absolute path. Existence is checked by [`build`](Self::build).
    pub fn new(root: impl AsRef<Path>, config: BuilderConfig) -> TreeResult<Self> {
        let root = root.as_ref();
        let root = std::path::absolute(root).map_err(|e| TreeError::filesystem(root, e))?;
        Ok(Self { root, config })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Walk the root and return every rendered row in pre-order.
    pub fn build(&self) -> TreeResult<LineSequence> {
        let meta = fs::metadata(&self.root).map_err(|e| TreeError::filesystem(&self.root, e))?;
        if !meta.is_dir() {
            return Err(TreeError::filesystem(
                &self.root,
                std::io::Error::new(std::io::ErrorKind::NotADirectory, "Not a directory"),
            ));
        }

        let mut lines = LineSequence::default();
        lines.push(TreeLine::root(self.root_name()));
        if self.should_descend(0) {
            self.add_directory_contents(&self.root, "", 1, &mut lines)?;
        }

        debug!(
            root = %self.root.display(),
            lines = lines.len(),
            "built tree"
        );
        Ok(lines)
    }

    /// `foo/..` has no file name of its own; fall back to the resolved directory.
    fn root_name(&self) -> String {
        let name = entry_name(&self.root);
        if !name.is_empty() {
            return name;
        }
        fs::canonicalize(&self.root)
            .map(|p| entry_name(&p))
            .unwrap_or_default()
    }

    fn should_descend(&self, depth: usize) -> bool {
        self.config.max_depth.is_none_or(|max| depth < max)
    }

    fn add_directory_contents(
        &self,
        dir: &Path,
        prefix: &str,
        depth: usize,
        lines: &mut LineSequence,
    ) -> TreeResult<()> {
        let entries = self.read_entries(dir)?;
        let last_index = entries.len().saturating_sub(1);

        for (index, entry) in entries.into_iter().enumerate() {
            let is_last = index == last_index;
            lines.push(TreeLine {
                prefix: format!("{}{} ", prefix, connector(is_last)),
                name: entry.name,
                is_dir: entry.is_dir,
                depth,
            });

            if entry.is_dir && self.should_descend(depth) {
                let extended = child_prefix(prefix, is_last);
                self.add_directory_contents(&entry.path, &extended, depth + 1, lines)?;
            }
        }
        Ok(())
    }

    /// List, sort and filter the immediate children of `dir`.
    fn read_entries(&self, dir: &Path) -> TreeResult<Vec<Entry>> {
        let read = fs::read_dir(dir).map_err(|e| TreeError::filesystem(dir, e))?;

        let mut paths = Vec::new();
        for entry in read {
            let entry = entry.map_err(|e| TreeError::filesystem(dir, e))?;
            paths.push(entry.path());
        }
        paths.sort_by_cached_key(|p| sort_key(p));

        let ignore_prefix = self.config.ignore_prefix();
        let entries: Vec<Entry> = paths
            .into_iter()
            .map(|path| Entry {
                name: entry_name(&path),
                is_dir: path.is_dir(),
                path,
            })
            .filter(|e| !is_ignored(&e.name, ignore_prefix))
            .filter(|e| e.is_dir || !self.config.dirs_only)
            .collect();

        trace!(dir = %dir.display(), entries = entries.len(), "listed directory");
        Ok(entries)
    }
}

/// Build the rows for `root` in one call.
pub fn build(root: impl AsRef<Path>, config: BuilderConfig) -> TreeResult<LineSequence> {
    TreeBuilder::new(root, config)?.build()
}
