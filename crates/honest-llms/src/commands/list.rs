//! Discovery dry-run.

use std::path::Path;

use anyhow::{Context, Result};
use honest_llms_mdx::has_front_matter;
use honest_llms_static::{BuildConfig, IndexEntry, LlmsBuilder};

/// Run the list command.
pub fn run(config: BuildConfig) -> Result<()> {
    let builder = LlmsBuilder::new(config);
    let docs = builder.discover().context("Failed to discover documents")?;
    let entries = builder.entries(&docs);

    for (doc, entry) in docs.iter().zip(&entries) {
        let content = builder.read(doc)?;
        println!(
            "{}",
            format_row(doc, entry, builder.in_tiny_bundle(doc), has_front_matter(&content))
        );
    }

    let tiny = builder.tiny_documents(&docs).len();
    println!("{} documents, {} in tiny bundle", docs.len(), tiny);

    Ok(())
}

/// One tab-separated line: path, label, url, bundles, front matter marker.
fn format_row(doc: &Path, entry: &IndexEntry, tiny: bool, front_matter: bool) -> String {
    let bundles = if tiny { "full+tiny" } else { "full" };
    let fm = if front_matter { "front-matter" } else { "-" };

    format!(
        "{}\t{}\t{}\t{}\t{}",
        doc.display(),
        entry.label,
        entry.url,
        bundles,
        fm
    )
}
