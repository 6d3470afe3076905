use anyhow::{Context, Result};
use std::path::PathBuf;
use tracing::info;

use containerspec::document::{self, DocumentFormat};
use containerspec::models::link_subscribed_events;

/// Load component documents, wire published events to their subscribers and
/// print what each container ends up subscribed to.
pub fn run(inputs: Vec<PathBuf>, from: Option<DocumentFormat>) -> Result<()> {
    let mut components = Vec::with_capacity(inputs.len());
    for input in &inputs {
        let component = document::load_component(input, from)
            .with_context(|| format!("Failed to load component from {}", input.display()))?;
        components.push(component);
    }

    let delivered = link_subscribed_events(&mut components);
    info!("Linked {} subscriptions across {} components", delivered, components.len());

    let mut report = serde_json::Map::new();
    for component in &components {
        for container in &component.containers {
            let key = format!("{}/{}", component.name, container.image_name);
            report.insert(key, serde_json::to_value(&container.subscribed_events)?);
        }
    }

    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
