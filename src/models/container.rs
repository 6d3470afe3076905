use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};

use super::attachments::{
    ContainerConfigFile, ContainerCustomerFile, ContainerEnvVar, ContainerEvent,
    ContainerExtraHost, ContainerPort, ContainerSupportCommand, ContainerSupportFile,
    ContainerVolume,
};
use super::lifecycle::{ClusterInstanceCount, RestartPolicy};
use crate::document::DocumentFormat;

/// One entry of `subscribed_events`. Filled in from other containers'
/// `publish_events`, never from the container's own document.
pub type SubscribedEvent = Map<String, Value>;

/// Declarative description of an application container.
///
/// Decoding fills a zero `cluster_instance_count.initial` when `cluster` is
/// set. Encoding only emits `cluster_instance_count` for clustered containers
/// and never emits `subscribed_events`.
///
/// The YAML and JSON channels agree on every key except one: extra hosts are
/// `extra_hosts` in YAML and `hosts` in JSON, in both directions. The serde
/// impls on `Container` speak YAML; use [`Container::deserialize_json`] and
/// [`Container::encode_for`] for JSON.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Container {
    pub source: String,
    pub image_name: String,
    pub display_name: String,
    pub version: String,
    pub privileged: bool,
    pub network_mode: String,
    pub cpu_shares: String,
    pub memory_limit: String,
    pub memory_swap_limit: String,
    pub allocate_tty: String,
    pub security_cap_add: Vec<String>,
    pub security_options: Vec<String>,
    pub hostname: String,
    pub cmd: String,
    pub ephemeral: bool,
    pub suppress_restart: Vec<String>,
    pub cluster: bool,
    pub restart: Option<RestartPolicy>,
    pub cluster_instance_count: ClusterInstanceCount,
    pub publish_events: Vec<ContainerEvent>,
    pub subscribed_events: Vec<SubscribedEvent>,
    pub config_files: Vec<ContainerConfigFile>,
    pub customer_files: Vec<ContainerCustomerFile>,
    pub env_vars: Vec<ContainerEnvVar>,
    pub ports: Vec<ContainerPort>,
    pub volumes: Vec<ContainerVolume>,
    pub extra_hosts: Vec<ContainerExtraHost>,
    pub support_files: Vec<ContainerSupportFile>,
    pub support_commands: Vec<ContainerSupportCommand>,
    pub when: String,
}

/// Output shape of a container, selected by its `cluster` flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    NonClusterable,
    Clusterable,
}

impl Container {
    pub fn new(
        source: impl Into<String>,
        image_name: impl Into<String>,
        version: impl Into<String>,
    ) -> Self {
        Self {
            source: source.into(),
            image_name: image_name.into(),
            version: version.into(),
            ..Default::default()
        }
    }

    pub fn shape(&self) -> Shape {
        if self.cluster {
            Shape::Clusterable
        } else {
            Shape::NonClusterable
        }
    }

    /// A clustered container always starts at least one instance. Safe to call
    /// any number of times. Returns true if `initial` was raised.
    pub fn apply_cluster_defaults(&mut self) -> bool {
        match self.shape() {
            Shape::Clusterable => self.cluster_instance_count.fill_initial(),
            Shape::NonClusterable => false,
        }
    }

    /// Borrowed view of the fields that get written out on the YAML channel.
    pub fn encode(&self) -> EncodedContainer<'_> {
        self.encode_for(DocumentFormat::Yaml)
    }

    pub fn encode_for(&self, format: DocumentFormat) -> EncodedContainer<'_> {
        let cluster_instance_count = match self.shape() {
            Shape::NonClusterable => None,
            Shape::Clusterable => Some(&self.cluster_instance_count),
        };

        let (extra_hosts, hosts) = match format {
            DocumentFormat::Yaml => (Some(self.extra_hosts.as_slice()), None),
            DocumentFormat::Json => (None, Some(self.extra_hosts.as_slice())),
        };

        EncodedContainer {
            source: &self.source,
            image_name: &self.image_name,
            display_name: &self.display_name,
            version: &self.version,
            privileged: self.privileged,
            network_mode: &self.network_mode,
            cpu_shares: &self.cpu_shares,
            memory_limit: &self.memory_limit,
            memory_swap_limit: &self.memory_swap_limit,
            allocate_tty: &self.allocate_tty,
            security_cap_add: &self.security_cap_add,
            security_options: &self.security_options,
            hostname: &self.hostname,
            cmd: &self.cmd,
            ephemeral: self.ephemeral,
            suppress_restart: &self.suppress_restart,
            // The non-clusterable shape always says so, whatever the descriptor holds.
            cluster: cluster_instance_count.is_some(),
            restart: self.restart.as_ref(),
            cluster_instance_count,
            publish_events: &self.publish_events,
            config_files: &self.config_files,
            customer_files: &self.customer_files,
            env_vars: &self.env_vars,
            ports: &self.ports,
            volumes: &self.volumes,
            extra_hosts,
            hosts,
            support_files: &self.support_files,
            support_commands: &self.support_commands,
            when: &self.when,
        }
    }

    /// Decode from the JSON channel, where extra hosts live under `hosts`.
    pub fn deserialize_json<'de, D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        decode_with::<JsonHosts, D>(deserializer)
    }
}

// Decode

/// Channel-specific home of the extra hosts list.
trait HostsField {
    fn into_hosts(self) -> Vec<ContainerExtraHost>;
}

#[derive(Deserialize)]
struct YamlHosts {
    #[serde(default)]
    extra_hosts: Vec<ContainerExtraHost>,
}

impl HostsField for YamlHosts {
    fn into_hosts(self) -> Vec<ContainerExtraHost> {
        self.extra_hosts
    }
}

#[derive(Deserialize)]
struct JsonHosts {
    #[serde(default)]
    hosts: Vec<ContainerExtraHost>,
}

impl HostsField for JsonHosts {
    fn into_hosts(self) -> Vec<ContainerExtraHost> {
        self.hosts
    }
}

#[derive(Deserialize)]
struct DecodedContainer<H> {
    source: String,
    image_name: String,
    #[serde(default)]
    display_name: String,
    version: String,
    #[serde(default)]
    privileged: bool,
    #[serde(default)]
    network_mode: String,
    #[serde(default)]
    cpu_shares: String,
    #[serde(default)]
    memory_limit: String,
    #[serde(default)]
    memory_swap_limit: String,
    #[serde(default)]
    allocate_tty: String,
    #[serde(default)]
    security_cap_add: Vec<String>,
    #[serde(default)]
    security_options: Vec<String>,
    #[serde(default)]
    hostname: String,
    #[serde(default)]
    cmd: String,
    #[serde(default)]
    ephemeral: bool,
    #[serde(default)]
    suppress_restart: Vec<String>,
    #[serde(default)]
    cluster: bool,
    #[serde(default)]
    restart: Option<RestartPolicy>,
    #[serde(default)]
    cluster_instance_count: ClusterInstanceCount,
    #[serde(default)]
    publish_events: Vec<ContainerEvent>,
    #[serde(default)]
    config_files: Vec<ContainerConfigFile>,
    #[serde(default)]
    customer_files: Vec<ContainerCustomerFile>,
    #[serde(default)]
    env_vars: Vec<ContainerEnvVar>,
    #[serde(default)]
    ports: Vec<ContainerPort>,
    #[serde(default)]
    volumes: Vec<ContainerVolume>,
    #[serde(flatten)]
    hosts: H,
    #[serde(default)]
    support_files: Vec<ContainerSupportFile>,
    #[serde(default)]
    support_commands: Vec<ContainerSupportCommand>,
    #[serde(default)]
    when: String,
}

impl<H: HostsField> From<DecodedContainer<H>> for Container {
    fn from(doc: DecodedContainer<H>) -> Self {
        Self {
            source: doc.source,
            image_name: doc.image_name,
            display_name: doc.display_name,
            version: doc.version,
            privileged: doc.privileged,
            network_mode: doc.network_mode,
            cpu_shares: doc.cpu_shares,
            memory_limit: doc.memory_limit,
            memory_swap_limit: doc.memory_swap_limit,
            allocate_tty: doc.allocate_tty,
            security_cap_add: doc.security_cap_add,
            security_options: doc.security_options,
            hostname: doc.hostname,
            cmd: doc.cmd,
            ephemeral: doc.ephemeral,
            suppress_restart: doc.suppress_restart,
            cluster: doc.cluster,
            restart: doc.restart,
            cluster_instance_count: doc.cluster_instance_count,
            publish_events: doc.publish_events,
            subscribed_events: Vec::new(),
            config_files: doc.config_files,
            customer_files: doc.customer_files,
            env_vars: doc.env_vars,
            ports: doc.ports,
            volumes: doc.volumes,
            extra_hosts: doc.hosts.into_hosts(),
            support_files: doc.support_files,
            support_commands: doc.support_commands,
            when: doc.when,
        }
    }
}

impl<'de> Deserialize<'de> for Container {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        decode_with::<YamlHosts, D>(deserializer)
    }
}

fn decode_with<'de, H, D>(deserializer: D) -> Result<Container, D::Error>
where
    H: Deserialize<'de> + HostsField,
    D: Deserializer<'de>,
{
    let mut container = Container::from(DecodedContainer::<H>::deserialize(deserializer)?);
    container.apply_cluster_defaults();
    Ok(container)
}

// Encode

/// The document a [`Container`] serializes to. `cluster_instance_count` is
/// `Some` exactly when `cluster` is true. Exactly one of `extra_hosts` and
/// `hosts` is set, depending on the channel.
#[derive(Debug, Clone, Serialize)]
pub struct EncodedContainer<'a> {
    pub source: &'a str,
    pub image_name: &'a str,
    pub display_name: &'a str,
    pub version: &'a str,
    pub privileged: bool,
    pub network_mode: &'a str,
    pub cpu_shares: &'a str,
    pub memory_limit: &'a str,
    pub memory_swap_limit: &'a str,
    pub allocate_tty: &'a str,
    pub security_cap_add: &'a [String],
    pub security_options: &'a [String],
    pub hostname: &'a str,
    pub cmd: &'a str,
    pub ephemeral: bool,
    pub suppress_restart: &'a [String],
    pub cluster: bool,
    pub restart: Option<&'a RestartPolicy>, // written as null when absent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cluster_instance_count: Option<&'a ClusterInstanceCount>,
    pub publish_events: &'a [ContainerEvent],
    pub config_files: &'a [ContainerConfigFile],
    pub customer_files: &'a [ContainerCustomerFile],
    pub env_vars: &'a [ContainerEnvVar],
    pub ports: &'a [ContainerPort],
    pub volumes: &'a [ContainerVolume],
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extra_hosts: Option<&'a [ContainerExtraHost]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hosts: Option<&'a [ContainerExtraHost]>,
    pub support_files: &'a [ContainerSupportFile],
    pub support_commands: &'a [ContainerSupportCommand],
    pub when: &'a str,
}

impl Serialize for Container {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.encode().serialize(serializer)
    }
}
