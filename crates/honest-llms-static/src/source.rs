//! Document sources.
//!
//! The builder never touches the docs directory directly. It asks a
//! [`DocSource`] for the list of markdown documents and for their contents,
//! which lets the pipeline run against an in-memory tree.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::builder::BuildError;

/// Provides markdown documents to the builder.
pub trait DocSource {
    /// Relative paths of every `.md` document, sorted.
    fn discover(&self) -> Result<Vec<PathBuf>, BuildError>;

    /// Read the raw content of a document by its relative path.
    fn read(&self, relative: &Path) -> Result<String, BuildError>;
}

/// Documents stored on disk under a root directory.
#[derive(Debug, Clone)]
pub struct FsSource {
    root: PathBuf,
}

impl FsSource {
    /// Create a source rooted at `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl DocSource for FsSource {
    fn discover(&self) -> Result<Vec<PathBuf>, BuildError> {
        if !self.root.is_dir() {
            return Err(BuildError::DocsNotFound(self.root.display().to_string()));
        }

        let mut docs = Vec::new();

        // Dot-prefixed files and directories (e.g. `.vitepress/`) are not docs.
        let walker = WalkDir::new(&self.root)
            .follow_links(true)
            .into_iter()
            .filter_entry(|e| e.depth() == 0 || !is_hidden(Path::new(e.file_name())));

        for entry in walker {
            let entry = entry.map_err(|e| BuildError::ReadError {
                path: e
                    .path()
                    .unwrap_or(&self.root)
                    .display()
                    .to_string(),
                message: e.to_string(),
            })?;

            if !entry.file_type().is_file() {
                continue;
            }

            let path = entry.path();
            let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("");
            if ext != "md" {
                continue;
            }

            let relative = path.strip_prefix(&self.root).unwrap_or(path).to_path_buf();
            tracing::debug!("Discovered {}", relative.display());
            docs.push(relative);
        }

        docs.sort();

        Ok(docs)
    }

    fn read(&self, relative: &Path) -> Result<String, BuildError> {
        let path = self.root.join(relative);

        fs::read_to_string(&path).map_err(|e| BuildError::ReadError {
            path: path.display().to_string(),
            message: e.to_string(),
        })
    }
}

/// Documents held in memory, keyed by relative path.
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    docs: BTreeMap<PathBuf, String>,
}

impl MemorySource {
    /// Create an empty source.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a document, replacing any previous content at the same path.
    pub fn insert(&mut self, relative: impl Into<PathBuf>, content: impl Into<String>) {
        self.docs.insert(relative.into(), content.into());
    }

    /// Builder-style variant of [`MemorySource::insert`].
    pub fn with(mut self, relative: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        self.insert(relative, content);
        self
    }
}

impl DocSource for MemorySource {
    fn discover(&self) -> Result<Vec<PathBuf>, BuildError> {
        Ok(self
            .docs
            .keys()
            .filter(|p| p.extension().and_then(|e| e.to_str()) == Some("md"))
            .filter(|p| !p.iter().any(|part| is_hidden(Path::new(part))))
            .cloned()
            .collect())
    }

    fn read(&self, relative: &Path) -> Result<String, BuildError> {
        self.docs
            .get(relative)
            .cloned()
            .ok_or_else(|| BuildError::ReadError {
                path: relative.display().to_string(),
                message: "document not found".to_string(),
            })
    }
}

/// Whether a path segment starts with a dot.
fn is_hidden(segment: &Path) -> bool {
    segment
        .to_str()
        .map(|s| s.starts_with('.'))
        .unwrap_or(false)
}
