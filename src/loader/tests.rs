//! Tests for loader module

use super::*;
use crate::error::Error;
use serde_json::json;
use std::io::Write;

// ============================================================================
// Config Loading Tests
// ============================================================================

#[test]
fn test_load_minimal_config() {
    let yaml = r"
connections:
  users:
    name: User
    key: [id]
";

    let config = load_config_from_str(yaml).unwrap();
    assert_eq!(config.kind, "connections");
    assert!(!config.strict_cursors);
    let key_spec = config.key_spec("users").unwrap();
    assert_eq!(key_spec.name, "User");
    assert_eq!(key_spec.fields, vec!["id"]);
}

#[test]
fn test_load_config_default_cursor_name() {
    let yaml = r"
strict_cursors: true
connections:
  posts:
    key: [created_at, id]
";

    let config = load_config_from_str(yaml).unwrap();
    assert!(config.strict_cursors);
    let key_spec = config.key_spec("posts").unwrap();
    assert_eq!(key_spec.name, "cursor");
    assert_eq!(key_spec.fields, vec!["created_at", "id"]);
}

#[test]
fn test_load_config_accepts_fields_spelling() {
    let yaml = r"
connections:
  users:
    name: User
    fields: [id]
";

    let config = load_config_from_str(yaml).unwrap();
    assert_eq!(config.key_spec("users").unwrap().fields, vec!["id"]);
}

#[test]
fn test_load_config_empty_key_fails() {
    let yaml = r"
connections:
  users:
    name: User
    key: []
";

    let err = load_config_from_str(yaml).unwrap_err();
    assert!(err.to_string().contains("at least one key field"));
}

#[test]
fn test_load_config_invalid_yaml() {
    let err = load_config_from_str("connections: [not, a, map").unwrap_err();
    assert!(matches!(err, Error::YamlParse(_)));
    assert!(err.to_string().starts_with("Failed to parse YAML"));
}

#[test]
fn test_load_config_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "connections:\n  users:\n    name: User\n    key: [id]").unwrap();

    let config = load_config(file.path()).unwrap();
    assert_eq!(config.connection_names(), vec!["users"]);
}

#[test]
fn test_load_config_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let err = load_config(dir.path().join("missing.yaml")).unwrap_err();
    assert!(matches!(err, Error::FileNotFound { .. }));
}

// ============================================================================
// Collection Tests
// ============================================================================

#[test]
fn test_resolve_top_level_array() {
    let records = resolve_collection(json!([{"id": 1}, {"id": 2}]), None).unwrap();
    assert_eq!(records.len(), 2);
}

#[test]
fn test_resolve_parent_field() {
    let document = json!({"users": [{"id": 1}], "total": 1});
    let records = resolve_collection(document, Some("users")).unwrap();
    assert_eq!(records, vec![json!({"id": 1})]);
}

#[test]
fn test_resolve_missing_or_null_field_is_empty() {
    assert!(resolve_collection(json!({}), Some("users")).unwrap().is_empty());
    assert!(resolve_collection(json!({"users": null}), Some("users"))
        .unwrap()
        .is_empty());
}

#[test]
fn test_resolve_rejects_non_array() {
    let err = resolve_collection(json!({"users": 3}), Some("users")).unwrap_err();
    assert!(err.to_string().contains("field 'users' is not an array"));

    let err = resolve_collection(json!({"users": []}), None).unwrap_err();
    assert!(matches!(err, Error::InvalidCollection { .. }));

    let err = resolve_collection(json!([1]), Some("users")).unwrap_err();
    assert!(err.to_string().contains("non-object"));
}

#[test]
fn test_load_collection_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, r#"{{"users": [{{"id": 1}}, {{"id": 2}}]}}"#).unwrap();

    let records = load_collection(file.path(), Some("users")).unwrap();
    assert_eq!(records.len(), 2);
}

#[test]
fn test_load_collection_invalid_json() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "[{{").unwrap();

    let err = load_collection(file.path(), None).unwrap_err();
    assert!(err.to_string().contains("Failed to parse data file"));
}
