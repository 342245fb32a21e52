//! Integration tests for store creation, dispatch and disposal

use std::sync::Arc;
use std::thread;
use uiconfig::{ActionKind, ConfigStore, UiConfigAction, UiConfigPatch, UiConfigState};

#[test]
fn test_fresh_store_default_state() {
    let store = ConfigStore::new();
    let state = store.state();

    assert!(!state.is_tenant);
    assert!(state.user_sql_roles.is_empty());
    assert!(!state.has_view_activity_redacted_role);
    assert!(!state.has_admin_role);
    assert!(!state.use_obs_service);
    assert!(state.pages.statement_details.show_statement_diagnostics_link);
    assert!(!state.pages.session_details.show_gateway_node_link);
}

#[test]
fn test_nested_update_preserves_sibling_page() {
    let store = ConfigStore::new();
    store.update(UiConfigPatch::new().show_gateway_node_link(true));

    let state = store.state();
    assert!(state.pages.session_details.show_gateway_node_link);
    assert!(state.pages.statement_details.show_statement_diagnostics_link);
}

#[test]
fn test_update_then_roles_lifecycle() {
    let store = ConfigStore::new();

    store.update(
        UiConfigPatch::new()
            .is_tenant(true)
            .has_admin_role(true)
            .user_sql_roles(["admin"]),
    );
    store.received_user_roles(Some(vec!["reader".to_string(), "writer".to_string()]));
    assert_eq!(store.state().user_sql_roles, vec!["reader", "writer"]);

    store.received_user_roles(None);
    assert_eq!(store.state().user_sql_roles, vec!["reader", "writer"]);

    store.invalidated_user_roles();
    let state = store.state();
    assert!(state.user_sql_roles.is_empty());
    assert!(state.is_tenant);
    assert!(state.has_admin_role);
}

#[test]
fn test_signal_actions_are_observed_but_pure() {
    let store = ConfigStore::new();
    store.update(UiConfigPatch::new().user_sql_roles(["admin"]).use_obs_service(true));
    let before = store.state();
    let signals = store.subscribe_signals();

    let refresh = store.refresh_user_roles();
    let request = store.request_user_roles();

    assert_eq!(store.state(), before);
    assert!(!refresh.changed);
    assert!(!request.changed);

    let kinds: Vec<ActionKind> = signals.try_iter().map(|e| e.kind).collect();
    assert_eq!(kinds, vec![ActionKind::RefreshUserRoles, ActionKind::RequestUserRoles]);
}

#[test]
fn test_views_read_from_other_threads() {
    let store = ConfigStore::new();
    store.dispatch(UiConfigAction::Update(UiConfigPatch::new().is_tenant(true)));

    let view = store.view();
    let handle = thread::spawn(move || view.read(|state| state.is_tenant));
    assert!(handle.join().unwrap());
}

#[test]
fn test_dispose_hands_back_final_state() {
    let store = ConfigStore::new();
    let receiver = store.subscribe();
    store.update(UiConfigPatch::new().use_obs_service(true));

    let final_state = store.dispose();
    assert_eq!(
        final_state,
        UiConfigState {
            use_obs_service: true,
            ..UiConfigState::default()
        }
    );

    let envelopes: Vec<_> = receiver.iter().collect();
    assert_eq!(envelopes.len(), 1);
    assert_eq!(envelopes[0].action_type, "adminUI/uiConfig/update");
}

#[test]
fn test_concurrent_dispatch_delivers_in_seq_order() {
    let store = Arc::new(ConfigStore::new());
    let receiver = store.subscribe();

    let handles: Vec<_> = (0..4)
        .map(|worker| {
            let store = Arc::clone(&store);
            thread::spawn(move || {
                for i in 0..50 {
                    if (worker + i) % 2 == 0 {
                        store.refresh_user_roles();
                    } else {
                        store.update(UiConfigPatch::new().is_tenant(i % 3 == 0));
                    }
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }

    let seqs: Vec<u64> = receiver.try_iter().map(|e| e.seq).collect();
    assert_eq!(seqs, (1..=200).collect::<Vec<u64>>());
}
