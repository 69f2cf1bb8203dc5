//! llms.txt bundle builder.

use std::path::{Path, PathBuf};
use std::time::Instant;

use honest_llms_mdx::{doc_slug, index_label, strip_front_matter};

use crate::source::{DocSource, FsSource};
use crate::templates::{IndexContext, IndexEntry, TemplateEngine};

/// Framework the documentation describes.
pub const FRAMEWORK: &str = "HonestJS";

/// Configuration for building the llms.txt artifacts.
#[derive(Debug, Clone)]
pub struct BuildConfig {
    /// Source docs directory
    pub docs_dir: PathBuf,

    /// Output path of the link index
    pub index_output: PathBuf,

    /// Output path of the full bundle
    pub full_output: PathBuf,

    /// Output path of the tiny bundle
    pub tiny_output: PathBuf,

    /// Public site URL, without trailing slash
    pub site_url: String,

    /// Framework name used in headings
    pub framework: String,

    /// One-line description shown at the top of the index
    pub description: String,

    /// Directory names whose documents are left out of the tiny bundle
    pub excluded_segments: Vec<String>,

    /// Text prepended to the full bundle
    pub full_header: String,

    /// Text prepended to the tiny bundle
    pub tiny_header: String,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            docs_dir: PathBuf::from("docs"),
            index_output: PathBuf::from("public/llms.txt"),
            full_output: PathBuf::from("public/llms-full.txt"),
            tiny_output: PathBuf::from("public/llms-small.txt"),
            site_url: "https://honestjs.dev".to_string(),
            framework: FRAMEWORK.to_string(),
            description: "HonestJS is a lightweight web framework for TypeScript built on Hono, \
                          with decorators, dependency injection, routing, MVC and plugins."
                .to_string(),
            excluded_segments: vec![
                "concepts".to_string(),
                "helpers".to_string(),
                "middleware".to_string(),
            ],
            full_header: full_header(FRAMEWORK),
            tiny_header: tiny_header(FRAMEWORK),
        }
    }
}

/// Default header of the full bundle.
pub fn full_header(framework: &str) -> String {
    format!("<SYSTEM>This is the full developer documentation for {framework}</SYSTEM>\n\n")
}

/// Default header of the tiny bundle.
pub fn tiny_header(framework: &str) -> String {
    format!("<SYSTEM>This is the abridged developer documentation for {framework}</SYSTEM>\n\n")
}

/// Result of a build operation.
#[derive(Debug)]
pub struct BuildResult {
    /// Number of documents in the index and the full bundle
    pub documents: usize,

    /// Number of documents in the tiny bundle
    pub tiny_documents: usize,

    /// Files written, in order: index, full bundle, tiny bundle
    pub outputs: Vec<PathBuf>,

    /// Total build time in milliseconds
    pub duration_ms: u64,
}

/// Errors that can occur during build.
#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    #[error("Docs directory not found: {0}")]
    DocsNotFound(String),

    #[error("Failed to read {path}: {message}")]
    ReadError { path: String, message: String },

    #[error("Failed to render template: {0}")]
    TemplateError(String),

    #[error("Failed to write {path}: {message}")]
    WriteError { path: String, message: String },
}

/// Builds the link index and the text bundles from a document source.
pub struct LlmsBuilder<S = FsSource> {
    config: BuildConfig,
    source: S,
    templates: TemplateEngine,
}

impl LlmsBuilder<FsSource> {
    /// Create a builder reading documents from `config.docs_dir`.
    pub fn new(config: BuildConfig) -> Self {
        let source = FsSource::new(&config.docs_dir);
        Self::with_source(config, source)
    }
}

impl<S: DocSource> LlmsBuilder<S> {
    /// Create a builder reading documents from a custom source.
    pub fn with_source(config: BuildConfig, source: S) -> Self {
        Self {
            config,
            source,
            templates: TemplateEngine::new(),
        }
    }

    /// Build and write all three artifacts.
    ///
    /// Any error aborts the build; files written by earlier steps are kept.
    pub async fn build(&self) -> Result<BuildResult, BuildError> {
        let start = Instant::now();

        let docs = self.discover()?;

        let index = self.build_index(&docs)?;
        write_output(&self.config.index_output, &index).await?;

        let full = self.build_bundle(&docs, &self.config.full_header)?;
        write_output(&self.config.full_output, &full).await?;

        let tiny_docs = self.tiny_documents(&docs);
        let tiny = self.build_bundle(&tiny_docs, &self.config.tiny_header)?;
        write_output(&self.config.tiny_output, &tiny).await?;

        Ok(BuildResult {
            documents: docs.len(),
            tiny_documents: tiny_docs.len(),
            outputs: vec![
                self.config.index_output.clone(),
                self.config.full_output.clone(),
                self.config.tiny_output.clone(),
            ],
            duration_ms: start.elapsed().as_millis() as u64,
        })
    }

    /// Discover all markdown documents, sorted by relative path.
    pub fn discover(&self) -> Result<Vec<PathBuf>, BuildError> {
        let docs = self.source.discover()?;
        tracing::debug!("Discovered {} documents", docs.len());
        Ok(docs)
    }

    /// Read the raw content of a discovered document.
    pub fn read(&self, doc: &Path) -> Result<String, BuildError> {
        self.source.read(doc)
    }

    /// Index entries for the given documents, in the same order.
    pub fn entries(&self, docs: &[PathBuf]) -> Vec<IndexEntry> {
        let site = self.config.site_url.trim_end_matches('/');

        docs.iter()
            .map(|doc| IndexEntry {
                label: index_label(doc),
                url: format!("{}/docs/{}", site, doc_slug(doc)),
            })
            .collect()
    }

    /// Render the `llms.txt` index for the given documents.
    pub fn build_index(&self, docs: &[PathBuf]) -> Result<String, BuildError> {
        let context = IndexContext {
            framework: self.config.framework.clone(),
            description: self.config.description.clone(),
            full_url: self.artifact_url(&self.config.full_output, "llms-full.txt"),
            tiny_url: self.artifact_url(&self.config.tiny_output, "llms-small.txt"),
            entries: self.entries(docs),
        };

        self.templates
            .render_index(&context)
            .map_err(|e| BuildError::TemplateError(e.to_string()))
    }

    /// Concatenate the given documents under `header`.
    ///
    /// Each document is front-matter-stripped and followed by a blank line.
    /// Nothing is written to disk.
    pub fn build_bundle(&self, docs: &[PathBuf], header: &str) -> Result<String, BuildError> {
        let mut bundle = String::new();
        bundle.push_str(header);
        bundle.push_str(&format!("# Start of {} documentation\n\n", self.config.framework));

        for doc in docs {
            let content = self.read(doc)?;
            bundle.push_str(strip_front_matter(&content));
            bundle.push_str("\n\n");
        }

        Ok(bundle)
    }

    /// Documents kept in the tiny bundle.
    pub fn tiny_documents(&self, docs: &[PathBuf]) -> Vec<PathBuf> {
        docs.iter()
            .filter(|doc| {
                let keep = self.in_tiny_bundle(doc);
                if !keep {
                    tracing::debug!("Excluding {} from tiny bundle", doc.display());
                }
                keep
            })
            .cloned()
            .collect()
    }

    /// Whether a document belongs in the tiny bundle.
    ///
    /// A document is excluded when any directory segment of its relative path
    /// equals one of the excluded names. The file name itself is not checked.
    pub fn in_tiny_bundle(&self, doc: &Path) -> bool {
        let Some(parent) = doc.parent() else {
            return true;
        };

        !parent.iter().any(|segment| {
            self.config
                .excluded_segments
                .iter()
                .any(|excluded| segment == excluded.as_str())
        })
    }

    /// Public URL of an output artifact, served from the site root.
    fn artifact_url(&self, output: &Path, fallback: &str) -> String {
        let name = output
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or(fallback);

        format!("{}/{}", self.config.site_url.trim_end_matches('/'), name)
    }
}

/// Write an artifact, creating parent directories as needed.
async fn write_output(path: &Path, content: &str) -> Result<(), BuildError> {
    let write_error = |e: std::io::Error| BuildError::WriteError {
        path: path.display().to_string(),
        message: e.to_string(),
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        tokio::fs::create_dir_all(parent).await.map_err(write_error)?;
    }

    tokio::fs::write(path, content).await.map_err(write_error)?;

    tracing::info!("Wrote {}", path.display());

    Ok(())
}
