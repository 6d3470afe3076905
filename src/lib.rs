//! Container descriptors for deployment configuration.
//!
//! A [`Container`] decodes from YAML or JSON, filling cluster defaults on the
//! way in, and encodes to one of two shapes depending on its `cluster` flag.

pub mod document;
pub mod models;
pub mod shared;

pub use document::{DocumentError, DocumentFormat};
pub use models::{
    ClusterInstanceCount, Component, Container, DecodeError, EncodedContainer, RenderError,
    RestartPolicy, Shape,
};
