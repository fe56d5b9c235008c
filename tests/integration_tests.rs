//! Integration tests
//!
//! End-to-end flow: YAML connections config → JSON collection → Relay connection

use pretty_assertions::assert_eq;
use relay_window::loader::resolve_collection;
use relay_window::{
    load_config_from_str, paginate, CursorCodec, Error, KeySpec, PaginationArgs, Record,
};
use serde_json::{json, Value};
use std::collections::HashMap;

const CONFIG: &str = r"
connections:
  users:
    name: User
    key: [id]
  events:
    name: Event
    key: [day, seq]
";

fn users(n: usize) -> Vec<Value> {
    (1..=n)
        .map(|i| json!({"id": i, "name": format!("user-{i}")}))
        .collect()
}

fn page_ids(records: &[Value], args: &PaginationArgs) -> (Vec<u64>, bool, bool) {
    let config = load_config_from_str(CONFIG).unwrap();
    let page = paginate(records, config.key_spec("users").unwrap(), args);
    (
        page.nodes().map(|n| n["id"].as_u64().unwrap()).collect(),
        page.page_info.has_previous_page,
        page.page_info.has_next_page,
    )
}

// ============================================================================
// Relay Behaviour
// ============================================================================

#[test]
fn test_full_collection_without_arguments() {
    assert_eq!(
        page_ids(&users(4), &PaginationArgs::new()),
        (vec![1, 2, 3, 4], false, false)
    );
}

#[test]
fn test_after_index_returns_remaining_records() {
    let records = users(5);
    let key_spec = KeySpec::new("User", ["id"]);
    for i in 0..records.len() {
        let args = PaginationArgs::new().with_after(key_spec.cursor(&records[i]).into_string());
        let (ids, _, _) = page_ids(&records, &args);
        let expected: Vec<u64> = ((i as u64 + 2)..=5).collect();
        assert_eq!(ids, expected);
    }
}

#[test]
fn test_before_index_returns_preceding_records() {
    let records = users(5);
    let key_spec = KeySpec::new("User", ["id"]);
    for i in 0..records.len() {
        let args = PaginationArgs::new().with_before(key_spec.cursor(&records[i]).into_string());
        let (ids, _, _) = page_ids(&records, &args);
        let expected: Vec<u64> = (1..=i as u64).collect();
        assert_eq!(ids, expected);
    }
}

#[test]
fn test_after_first_with_last_one_on_five_records() {
    let records = users(5);
    let after = KeySpec::new("User", ["id"]).cursor(&records[0]);
    let args = PaginationArgs::new()
        .with_after(after.into_string())
        .with_last(1);
    assert_eq!(page_ids(&records, &args), (vec![5], true, false));
}

#[test]
fn test_first_n_reports_next_page() {
    assert_eq!(
        page_ids(&users(5), &PaginationArgs::new().with_first(3)),
        (vec![1, 2, 3], false, true)
    );
}

#[test]
fn test_empty_collection_with_any_arguments() {
    let args = PaginationArgs::new()
        .with_first(3)
        .with_after("VXNlcjox")
        .with_last(2)
        .with_before("VXNlcjoy");
    assert_eq!(page_ids(&[], &args), (vec![], false, false));
}

#[test]
fn test_backward_walk_with_last_and_before() {
    let records = users(5);
    let config = load_config_from_str(CONFIG).unwrap();
    let key_spec = config.key_spec("users").unwrap();

    let mut args = PaginationArgs::new().with_last(2);
    let mut pages = Vec::new();
    loop {
        let page = paginate(&records, key_spec, &args);
        pages.push(
            page.nodes()
                .map(|n| n["id"].as_u64().unwrap())
                .collect::<Vec<_>>(),
        );
        if !page.page_info.has_previous_page {
            break;
        }
        let start = page.page_info.start_cursor.clone().unwrap();
        args = PaginationArgs::new()
            .with_last(2)
            .with_before(start.into_string());
    }

    assert_eq!(pages, vec![vec![4, 5], vec![2, 3], vec![1]]);
}

// ============================================================================
// Composite Keys and Record Types
// ============================================================================

#[test]
fn test_composite_key_connection() {
    let config = load_config_from_str(CONFIG).unwrap();
    let key_spec = config.key_spec("events").unwrap();
    let events = vec![
        json!({"day": "2024-01-01", "seq": 1}),
        json!({"day": "2024-01-01", "seq": 2}),
        json!({"day": "2024-01-02", "seq": 1}),
    ];

    assert_eq!(
        CursorCodec::decode(key_spec.cursor(&events[1]).as_str()).unwrap(),
        "Event:2024-01-01:2"
    );

    let after = key_spec.cursor(&events[0]).into_string();
    let page = paginate(&events, key_spec, &PaginationArgs::new().with_after(after));
    assert_eq!(page.edges.len(), 2);
    assert_eq!(page.edges[0].node["seq"], 2);
}

#[test]
fn test_string_map_records() {
    let records: Vec<HashMap<String, String>> = ["a", "b", "c"]
        .iter()
        .map(|id| HashMap::from([("id".to_string(), (*id).to_string())]))
        .collect();
    let key_spec = KeySpec::with_fields(["id"]);

    assert_eq!(records[0].field("id").as_deref(), Some("a"));

    let args = PaginationArgs::new().with_before(key_spec.cursor(&records[2]).into_string());
    let page = paginate(&records, &key_spec, &args);
    assert_eq!(page.edges.len(), 2);
    assert!(page.page_info.has_next_page);
    assert!(!page.page_info.has_previous_page);
}

// ============================================================================
// Parameter Handling
// ============================================================================

#[test]
fn test_field_params_to_connection_json() {
    let config = load_config_from_str(CONFIG).unwrap();
    let parent = json!({"users": users(3)});
    let records = resolve_collection(parent, Some("users")).unwrap();

    let params = json!({"first": 1, "after": "VXNlcjox", "last": null, "before": null});
    let args = PaginationArgs::from_params(&params).unwrap();
    let page = config
        .paginator()
        .paginate(&records, config.key_spec("users").unwrap(), &args)
        .unwrap();

    assert_eq!(
        serde_json::to_value(&page).unwrap(),
        json!({
            "edges": [{"node": {"id": 2, "name": "user-2"}, "cursor": "VXNlcjoy"}],
            "pageInfo": {
                "hasNextPage": true,
                "hasPreviousPage": true,
                "startCursor": "VXNlcjoy",
                "endCursor": "VXNlcjoy"
            }
        })
    );
}

#[test]
fn test_negative_limit_rejected() {
    let err = PaginationArgs::from_params(&json!({"last": -2})).unwrap_err();
    assert!(err.is_input_error());
    assert!(matches!(err, Error::InvalidArgument { .. }));
}

#[test]
fn test_strict_config_rejects_foreign_cursor() {
    let config = load_config_from_str(&format!("strict_cursors: true\n{CONFIG}")).unwrap();
    let records = users(2);
    let foreign = KeySpec::new("Event", ["id"]).cursor(&records[0]);

    let result = config.paginator().paginate(
        &records,
        config.key_spec("users").unwrap(),
        &PaginationArgs::new().with_after(foreign.into_string()),
    );
    assert!(matches!(result, Err(Error::MalformedCursor { .. })));
}
