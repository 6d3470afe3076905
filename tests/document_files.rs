//! Loading container and component documents from disk.

use containerspec::document::{self, DocumentError, DocumentFormat};
use containerspec::models::link_subscribed_events;
use serde_json::json;
use std::fs;

#[test]
fn format_follows_extension() {
    let dir = tempfile::tempdir().unwrap();

    let yaml = dir.path().join("app.yml");
    fs::write(&yaml, "source: reg\nimage_name: app\nversion: '1.0'\ncluster: true\n").unwrap();
    let json = dir.path().join("app.json");
    fs::write(&json, r#"{"source":"reg","image_name":"app","version":"1.0","cluster":true}"#).unwrap();

    let from_yaml = document::load_file(&yaml, None).unwrap();
    let from_json = document::load_file(&json, None).unwrap();
    assert_eq!(from_yaml, from_json);
    assert_eq!(from_yaml.cluster_instance_count.initial, 1);
}

#[test]
fn explicit_format_overrides_extension() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("container.txt");
    fs::write(&path, "source: reg\nimage_name: app\nversion: '1.0'\n").unwrap();

    assert!(matches!(
        document::load_file(&path, None),
        Err(DocumentError::UnknownFormat { .. })
    ));
    let container = document::load_file(&path, Some(DocumentFormat::Yaml)).unwrap();
    assert_eq!(container.image_name, "app");
}

#[test]
fn malformed_file_reports_decode_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bad.yaml");
    fs::write(&path, "source: reg\nimage_name: app\nversion: '1.0'\nports:\n  - public_port: '80'\n").unwrap();

    let err = document::load_file(&path, None).unwrap_err();
    assert!(matches!(err, DocumentError::Decode(_)));
}

#[test]
fn render_switches_format() {
    let container = document::from_yaml_str("source: reg\nimage_name: app\nversion: '1.0'\n").unwrap();

    let json: serde_json::Value =
        serde_json::from_str(&document::render(DocumentFormat::Json, &container).unwrap()).unwrap();
    assert_eq!(json["image_name"], json!("app"));

    let yaml = document::render(DocumentFormat::Yaml, &container).unwrap();
    assert!(yaml.contains("image_name: app"));
    assert!(!yaml.contains("cluster_instance_count"));
}

#[test]
fn components_link_subscriptions_from_files() {
    let dir = tempfile::tempdir().unwrap();
    let data = dir.path().join("data.yaml");
    fs::write(
        &data,
        r#"
name: data
containers:
  - source: public
    image_name: postgres
    version: "9.6"
    publish_events:
      - name: postgres started
        trigger: port-listen
        subscriptions:
          - component: app
            container: web
            action: start
"#,
    )
    .unwrap();
    let app = dir.path().join("app.yaml");
    fs::write(
        &app,
        r#"
name: app
containers:
  - source: public
    image_name: web
    version: "1.0"
    cluster: true
"#,
    )
    .unwrap();

    let mut components = vec![
        document::load_component(&data, None).unwrap(),
        document::load_component(&app, None).unwrap(),
    ];
    assert_eq!(link_subscribed_events(&mut components), 1);

    let web = &components[1].containers[0];
    assert_eq!(web.cluster_instance_count.initial, 1);
    assert_eq!(web.subscribed_events[0]["event"], json!("postgres started"));

    // Subscriptions never leak into the encoded document
    let rendered = document::to_yaml_string(web).unwrap();
    assert!(!rendered.contains("subscribed_events"));
    assert!(!rendered.contains("postgres started"));
}
