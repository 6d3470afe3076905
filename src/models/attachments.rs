//! Records attached to a container. Fields without `#[serde(default)]` must be
//! present in every list element, otherwise the whole container fails to decode.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContainerEvent {
    pub name: String,
    pub trigger: String,
    #[serde(default)]
    pub data: String,
    #[serde(default)]
    pub args: Vec<String>,
    #[serde(default)]
    pub subscriptions: Vec<ContainerEventSubscription>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContainerEventSubscription {
    pub component: String,
    pub container: String, // image_name of the subscribing container
    pub action: String,
    #[serde(default)]
    pub args: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContainerConfigFile {
    pub filename: String,
    #[serde(default)]
    pub contents: String,
    #[serde(default)]
    pub source: String,
    #[serde(default)]
    pub owner: String,
    #[serde(default)]
    pub repo: String,
    #[serde(default)]
    pub path: String,
    #[serde(default, rename = "ref")]
    pub git_ref: String,
    #[serde(default)]
    pub file_mode: String,
    #[serde(default)]
    pub file_owner: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContainerCustomerFile {
    pub name: String,
    pub filename: String,
    #[serde(default)]
    pub file_mode: String,
    #[serde(default)]
    pub file_owner: String,
    #[serde(default)]
    pub when: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContainerEnvVar {
    pub name: String,
    #[serde(default)]
    pub static_val: String,
    #[serde(default)]
    pub value: String,
    #[serde(default)]
    pub is_excluded_from_support: bool,
    #[serde(default)]
    pub when: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContainerPort {
    pub private_port: String,
    #[serde(default)]
    pub public_port: String,
    #[serde(default)]
    pub port_type: String,
    #[serde(default)]
    pub interface: String,
    #[serde(default)]
    pub when: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContainerVolume {
    pub host_path: String,
    pub container_path: String,
    #[serde(default)]
    pub permission: String,
    #[serde(default)]
    pub owner: String,
    #[serde(default)]
    pub is_ephemeral: bool,
    #[serde(default)]
    pub is_excluded_from_backup: bool,
    #[serde(default)]
    pub when: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContainerExtraHost {
    pub hostname: String,
    pub address: String,
    #[serde(default)]
    pub when: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContainerSupportFile {
    pub filename: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContainerSupportCommand {
    pub filename: String,
    pub command: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_file_ref_uses_reserved_key() {
        let file: ContainerConfigFile =
            serde_yaml::from_str("filename: /etc/app.conf\nref: main").unwrap();
        assert_eq!(file.git_ref, "main");

        let out = serde_yaml::to_value(&file).unwrap();
        assert_eq!(out["ref"], serde_yaml::Value::from("main"));
    }

    #[test]
    fn volume_requires_both_paths() {
        let err = serde_yaml::from_str::<ContainerVolume>("host_path: /data").unwrap_err();
        assert!(err.to_string().contains("container_path"));
    }

    #[test]
    fn event_subscriptions_default_to_empty() {
        let event: ContainerEvent =
            serde_yaml::from_str("name: started\ntrigger: container-start").unwrap();
        assert!(event.subscriptions.is_empty());
        assert!(event.args.is_empty());
        assert_eq!(event.data, "");
    }
}
