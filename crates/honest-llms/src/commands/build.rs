//! Build command.

use anyhow::Result;
use honest_llms_static::{BuildConfig, LlmsBuilder};

/// Run the build command.
pub async fn run(config: BuildConfig) -> Result<()> {
    tracing::info!("Building llms.txt from {}...", config.docs_dir.display());

    let result = LlmsBuilder::new(config).build().await?;

    tracing::info!(
        "Bundled {} documents ({} in tiny bundle) in {}ms",
        result.documents,
        result.tiny_documents,
        result.duration_ms
    );

    Ok(())
}
