use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use tracing::info;

use containerspec::document::{self, DocumentFormat};

/// Decode a container document and write back its encoded shape.
pub fn run(
    input: &Path,
    from: Option<DocumentFormat>,
    to: DocumentFormat,
    output: Option<PathBuf>,
) -> Result<()> {
    let container = document::load_file(input, from)
        .with_context(|| format!("Failed to load container from {}", input.display()))?;

    info!(
        "Decoded {}:{} ({:?})",
        container.image_name,
        container.version,
        container.shape()
    );

    let rendered = document::render(to, &container)
        .with_context(|| format!("Failed to render {} as {}", container.image_name, to))?;

    match output {
        Some(path) => {
            std::fs::write(&path, &rendered)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            info!("Wrote {} document to {}", to, path.display());
        }
        None => {
            print!("{}", rendered);
            if !rendered.ends_with('\n') {
                println!();
            }
        }
    }

    Ok(())
}
