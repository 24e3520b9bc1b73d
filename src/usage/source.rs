//! Content discovery: expand glob patterns and read matched files.

use std::path::{Path, PathBuf};

use tracing::trace;

use crate::error::{Error, Result};
use crate::usage::index::UsageIndex;

/// A set of glob patterns resolved against a project root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentSource {
    root: PathBuf,
    patterns: Vec<String>,
}

impl ContentSource {
    pub fn new(root: impl Into<PathBuf>, patterns: Vec<String>) -> Self {
        Self {
            root: root.into(),
            patterns,
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn patterns(&self) -> &[String] {
        &self.patterns
    }

    /// Absolute glob pattern strings, rooted at [`Self::root`].
    pub fn rooted_patterns(&self) -> Vec<String> {
        self.patterns
            .iter()
            .map(|pattern| {
                let relative = pattern.strip_prefix("./").unwrap_or(pattern);
                self.root.join(relative).to_string_lossy().into_owned()
            })
            .collect()
    }

    /// Returns `true` if `path` matches any content pattern.
    pub fn matches(&self, path: &Path) -> bool {
        self.rooted_patterns().iter().any(|pattern| {
            glob::Pattern::new(pattern).is_ok_and(|p| p.matches_path(path))
        })
    }

    /// Expand every pattern into a sorted, deduplicated list of files.
    ///
    /// An invalid pattern or an unreadable directory entry is fatal.
    pub fn files(&self) -> Result<Vec<PathBuf>> {
        let mut files = Vec::new();
        for pattern in self.rooted_patterns() {
            let entries = glob::glob(&pattern).map_err(|source| Error::Pattern {
                pattern: pattern.clone(),
                source,
            })?;
            for entry in entries {
                let path = entry?;
                if path.is_file() {
                    files.push(path);
                }
            }
        }
        files.sort();
        files.dedup();
        Ok(files)
    }

    /// Read every matched file as UTF-8 text.
    pub async fn read_documents(&self) -> Result<Vec<String>> {
        let files = self.files()?;
        let mut documents = Vec::with_capacity(files.len());
        for path in files {
            trace!(path = %path.display(), "reading content file");
            let text = tokio::fs::read_to_string(&path)
                .await
                .map_err(|source| Error::Read { path, source })?;
            documents.push(text);
        }
        Ok(documents)
    }

    /// Scan every matched file into a fresh usage index.
    pub async fn scan(&self) -> Result<UsageIndex> {
        let documents = self.read_documents().await?;
        let mut index = UsageIndex::new();
        for document in &documents {
            index.scan(document);
        }
        Ok(index)
    }
}
