use anyhow::{Context, Result};
use std::path::Path;

use containerspec::document::{self, DocumentFormat};
use containerspec::{Container, Shape};

pub fn run(input: &Path, from: Option<DocumentFormat>) -> Result<()> {
    let container = document::load_file(input, from)
        .with_context(|| format!("Failed to load container from {}", input.display()))?;

    print!("{}", summary(&container));
    Ok(())
}

fn summary(container: &Container) -> String {
    let mut out = String::new();
    let name = if container.display_name.is_empty() {
        &container.image_name
    } else {
        &container.display_name
    };

    out.push_str(&format!("Container: {}\n", name));
    out.push_str(&format!(
        "Image:     {}/{}:{}\n",
        container.source, container.image_name, container.version
    ));

    match container.shape() {
        Shape::Clusterable => {
            let count = &container.cluster_instance_count;
            let max = if count.is_unbounded() {
                "unlimited".to_string()
            } else {
                count.max.to_string()
            };
            out.push_str(&format!("Cluster:   initial {}, max {}\n", count.initial, max));
            let degraded = if count.has_degraded_state() {
                format!("below {}", count.threshold_degraded)
            } else {
                "never".to_string()
            };
            out.push_str(&format!(
                "Health:    healthy at {}, degraded {}\n",
                count.threshold_healthy, degraded
            ));
        }
        Shape::NonClusterable => out.push_str("Cluster:   no\n"),
    }

    if let Some(restart) = &container.restart {
        out.push_str(&format!("Restart:   {} (max {})\n", restart.policy, restart.max));
    }

    out.push_str(&format!(
        "Attached:  {} ports, {} volumes, {} env vars, {} config files, {} hosts\n",
        container.ports.len(),
        container.volumes.len(),
        container.env_vars.len(),
        container.config_files.len(),
        container.extra_hosts.len(),
    ));
    out.push_str(&format!("Events:    {} published\n", container.publish_events.len()));

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_reports_cluster_bounds() {
        let mut container = Container::new("reg", "app", "1.0");
        container.cluster = true;
        container.apply_cluster_defaults();

        let text = summary(&container);
        assert!(text.contains("Container: app"));
        assert!(text.contains("Image:     reg/app:1.0"));
        assert!(text.contains("initial 1, max unlimited"));
    }

    #[test]
    fn summary_reports_degraded_threshold() {
        let mut container = Container::new("reg", "app", "1.0");
        container.cluster = true;
        container.cluster_instance_count.initial = 3;
        container.cluster_instance_count.threshold_healthy = 2;
        container.cluster_instance_count.threshold_degraded = 1;

        let text = summary(&container);
        assert!(text.contains("Health:    healthy at 2, degraded below 1"));

        container.cluster_instance_count.threshold_degraded = 0;
        assert!(summary(&container).contains("degraded never"));
    }

    #[test]
    fn summary_for_single_instance() {
        let mut container = Container::new("reg", "app", "1.0");
        container.display_name = "Web".to_string();

        let text = summary(&container);
        assert!(text.contains("Container: Web"));
        assert!(text.contains("Cluster:   no"));
    }
}
