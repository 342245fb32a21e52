//! Integration tests for dispatch by action name with JSON payloads

use serde_json::json;
use uiconfig::{ConfigStore, UiConfigError};

#[test]
fn test_host_payload_deep_merges() {
    let store = ConfigStore::new();
    store
        .dispatch_named(
            "adminUI/uiConfig/update",
            Some(json!({
                "isTenant": true,
                "pages": { "statementDetails": { "showStatementDiagnosticsLink": false } }
            })),
        )
        .unwrap();

    let state = store.state();
    assert!(state.is_tenant);
    assert!(!state.pages.statement_details.show_statement_diagnostics_link);
    assert!(!state.pages.session_details.show_gateway_node_link);
}

#[test]
fn test_update_roles_list_replaces_wholesale() {
    let store = ConfigStore::new();
    store
        .dispatch_named("receivedUserSQLRoles", Some(json!(["a", "b", "c"])))
        .unwrap();
    store
        .dispatch_named("update", Some(json!({ "userSQLRoles": ["z"] })))
        .unwrap();

    assert_eq!(store.state().user_sql_roles, vec!["z"]);
}

#[test]
fn test_null_roles_payload_is_noop() {
    let store = ConfigStore::new();
    store
        .dispatch_named("receivedUserSQLRoles", Some(json!(["admin"])))
        .unwrap();

    let envelope = store
        .dispatch_named("adminUI/uiConfig/receivedUserSQLRoles", Some(json!(null)))
        .unwrap();

    assert!(!envelope.changed);
    assert_eq!(store.state().user_sql_roles, vec!["admin"]);
}

#[test]
fn test_malformed_payload_rejected_before_transition() {
    let store = ConfigStore::new();
    let receiver = store.subscribe();

    let err = store
        .dispatch_named("update", Some(json!({ "userSQLRoles": { "0": "admin" } })))
        .unwrap_err();

    assert!(matches!(err, UiConfigError::InvalidPayload { .. }));
    assert_eq!(store.dispatch_count(), 0);
    assert!(receiver.try_recv().is_err());
}

#[test]
fn test_unknown_action_name() {
    let store = ConfigStore::new();
    let err = store.dispatch_named("adminUI/uiConfig/clear", None).unwrap_err();
    assert_eq!(err.to_string(), "Unknown action: adminUI/uiConfig/clear");
}
