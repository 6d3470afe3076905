use thiserror::Error;

pub mod attachments;
pub mod container;
pub mod events;
pub mod lifecycle;

pub use attachments::{
    ContainerConfigFile, ContainerCustomerFile, ContainerEnvVar, ContainerEvent,
    ContainerEventSubscription, ContainerExtraHost, ContainerPort, ContainerSupportCommand,
    ContainerSupportFile, ContainerVolume,
};
pub use container::{Container, EncodedContainer, Shape, SubscribedEvent};
pub use events::{link_subscribed_events, Component};
pub use lifecycle::{ClusterInstanceCount, RestartPolicy};

// Decode errors carry the parser's error unchanged
#[derive(Error, Debug)]
pub enum DecodeError {
    #[error("YAML decode error: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("JSON decode error: {0}")]
    Json(#[from] serde_json::Error),
}

// Only the text serializers can fail; building the encoded shape cannot
#[derive(Error, Debug)]
pub enum RenderError {
    #[error("YAML render error: {0}")]
    Yaml(#[source] serde_yaml::Error),
    #[error("JSON render error: {0}")]
    Json(#[source] serde_json::Error),
}
