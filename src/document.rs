//! Text and file front end for container documents.
//!
//! Parsing turns YAML or JSON into the same [`Container`] model, and rendering
//! writes the encoded shape back out in either format.

use serde::{Deserialize, Deserializer};
use std::fmt;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, trace};

use crate::models::{Component, Container, DecodeError, RenderError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DocumentFormat {
    #[default]
    Yaml,
    Json,
}

impl DocumentFormat {
    /// Guess the format from a file extension.
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?;
        ext.parse().ok()
    }

    pub fn extension(&self) -> &'static str {
        match self {
            DocumentFormat::Yaml => "yaml",
            DocumentFormat::Json => "json",
        }
    }
}

impl std::str::FromStr for DocumentFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "yaml" | "yml" => Ok(DocumentFormat::Yaml),
            "json" => Ok(DocumentFormat::Json),
            _ => Err(format!("Unknown document format: {}. Valid options: yaml, json", s)),
        }
    }
}

impl fmt::Display for DocumentFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

#[derive(Error, Debug)]
pub enum DocumentError {
    #[error("Failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Cannot tell the document format of {}", path.display())]
    UnknownFormat { path: PathBuf },
    #[error(transparent)]
    Decode(#[from] DecodeError),
    #[error(transparent)]
    Render(#[from] RenderError),
}

// Decoding

// A container read through the JSON channel
struct JsonContainer(Container);

impl<'de> Deserialize<'de> for JsonContainer {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Container::deserialize_json(deserializer).map(JsonContainer)
    }
}

#[derive(Deserialize)]
struct JsonComponent {
    name: String,
    #[serde(default)]
    containers: Vec<JsonContainer>,
}

impl From<JsonComponent> for Component {
    fn from(doc: JsonComponent) -> Self {
        Self {
            name: doc.name,
            containers: doc.containers.into_iter().map(|c| c.0).collect(),
        }
    }
}

pub fn from_yaml_str(text: &str) -> Result<Container, DecodeError> {
    Ok(serde_yaml::from_str(text)?)
}

pub fn from_json_str(text: &str) -> Result<Container, DecodeError> {
    let JsonContainer(container) = serde_json::from_str::<JsonContainer>(text)?;
    Ok(container)
}

pub fn from_yaml_value(value: serde_yaml::Value) -> Result<Container, DecodeError> {
    Ok(serde_yaml::from_value(value)?)
}

pub fn from_json_value(value: serde_json::Value) -> Result<Container, DecodeError> {
    Ok(Container::deserialize_json(value)?)
}

pub fn decode_str(format: DocumentFormat, text: &str) -> Result<Container, DecodeError> {
    trace!("Decoding {} bytes of {}", text.len(), format);
    match format {
        DocumentFormat::Yaml => from_yaml_str(text),
        DocumentFormat::Json => from_json_str(text),
    }
}

pub fn decode_component_str(format: DocumentFormat, text: &str) -> Result<Component, DecodeError> {
    match format {
        DocumentFormat::Yaml => Ok(serde_yaml::from_str(text)?),
        DocumentFormat::Json => Ok(serde_json::from_str::<JsonComponent>(text)?.into()),
    }
}

// Rendering

pub fn to_yaml_string(container: &Container) -> Result<String, RenderError> {
    serde_yaml::to_string(&container.encode_for(DocumentFormat::Yaml)).map_err(RenderError::Yaml)
}

pub fn to_json_string(container: &Container) -> Result<String, RenderError> {
    serde_json::to_string_pretty(&container.encode_for(DocumentFormat::Json)).map_err(RenderError::Json)
}

pub fn render(format: DocumentFormat, container: &Container) -> Result<String, RenderError> {
    match format {
        DocumentFormat::Yaml => to_yaml_string(container),
        DocumentFormat::Json => to_json_string(container),
    }
}

// Files

fn resolve_format(path: &Path, format: Option<DocumentFormat>) -> Result<DocumentFormat, DocumentError> {
    format
        .or_else(|| DocumentFormat::from_path(path))
        .ok_or_else(|| DocumentError::UnknownFormat {
            path: path.to_path_buf(),
        })
}

fn read_document(path: &Path, format: Option<DocumentFormat>) -> Result<(DocumentFormat, String), DocumentError> {
    let format = resolve_format(path, format)?;
    let text = std::fs::read_to_string(path).map_err(|source| DocumentError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    debug!("Loaded {} as {}", path.display(), format);
    Ok((format, text))
}

/// Read and decode a container document. Without an explicit `format` the
/// file extension decides.
pub fn load_file(path: &Path, format: Option<DocumentFormat>) -> Result<Container, DocumentError> {
    let (format, text) = read_document(path, format)?;
    Ok(decode_str(format, &text)?)
}

/// Read a component document (`name` plus a list of `containers`).
pub fn load_component(path: &Path, format: Option<DocumentFormat>) -> Result<Component, DocumentError> {
    let (format, text) = read_document(path, format)?;
    Ok(decode_component_str(format, &text)?)
}
