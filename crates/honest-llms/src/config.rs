//! Optional llms.toml configuration.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Result;
use honest_llms_static::builder::{full_header, tiny_header};
use honest_llms_static::BuildConfig;
use serde::Deserialize;

/// Configuration file structure (llms.toml).
#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    #[serde(default)]
    docs: DocsConfig,
    #[serde(default)]
    output: OutputConfig,
    #[serde(default)]
    tiny: TinyConfig,
}

#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
struct DocsConfig {
    dir: Option<PathBuf>,
    site_url: Option<String>,
    framework: Option<String>,
    description: Option<String>,
}

#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
struct OutputConfig {
    index: Option<PathBuf>,
    full: Option<PathBuf>,
    tiny: Option<PathBuf>,
}

#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
struct TinyConfig {
    /// Directory names left out of the tiny bundle
    exclude: Option<Vec<String>>,
}

impl ConfigFile {
    /// Merge the file over the built-in defaults.
    pub fn into_build_config(self) -> BuildConfig {
        let defaults = BuildConfig::default();

        // Headers follow the framework name unless it is left at the default.
        let (full, tiny) = match &self.docs.framework {
            Some(name) => (full_header(name), tiny_header(name)),
            None => (defaults.full_header.clone(), defaults.tiny_header.clone()),
        };

        BuildConfig {
            docs_dir: self.docs.dir.unwrap_or(defaults.docs_dir),
            index_output: self.output.index.unwrap_or(defaults.index_output),
            full_output: self.output.full.unwrap_or(defaults.full_output),
            tiny_output: self.output.tiny.unwrap_or(defaults.tiny_output),
            site_url: self.docs.site_url.unwrap_or(defaults.site_url),
            framework: self.docs.framework.unwrap_or(defaults.framework),
            description: self.docs.description.unwrap_or(defaults.description),
            excluded_segments: self.tiny.exclude.unwrap_or(defaults.excluded_segments),
            full_header: full,
            tiny_header: tiny,
        }
    }
}

/// Load configuration from `path` if it exists.
/// Returns an error if the config file exists but is malformed.
pub fn load_config(path: &Path) -> Result<ConfigFile> {
    if path.exists() {
        let content = fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("Failed to read {}: {}", path.display(), e))?;
        let config: ConfigFile = toml::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse {}: {}", path.display(), e))?;
        tracing::info!("Loaded config from {}", path.display());
        return Ok(config);
    }
    Ok(ConfigFile::default())
}
