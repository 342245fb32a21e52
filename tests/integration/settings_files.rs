//! Integration tests for loading store settings from TOML files

use std::fs;
use tempfile::TempDir;
use uiconfig::{ConfigStore, SettingsLoader, StoreSettings, UiConfigError, UiConfigPatch};

#[test]
fn test_store_created_from_settings_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("uiconfig.toml");
    fs::write(
        &path,
        r#"
[logging]
level = "warn"
format = "json"

[overrides]
is_tenant = true
user_sql_roles = ["admin", "reader"]

[overrides.pages.statement_details]
show_statement_diagnostics_link = false
"#,
    )
    .unwrap();

    let settings = SettingsLoader::load_from_file(&path).unwrap();
    assert_eq!(settings.logging.level, "warn");
    assert_eq!(settings.logging.format, "json");

    let store = ConfigStore::create(settings);
    let state = store.state();
    assert!(state.is_tenant);
    assert_eq!(state.user_sql_roles, vec!["admin", "reader"]);
    assert!(!state.pages.statement_details.show_statement_diagnostics_link);
    assert!(!state.pages.session_details.show_gateway_node_link);
}

#[test]
fn test_layered_files_later_wins() {
    let temp_dir = TempDir::new().unwrap();
    let base = temp_dir.path().join("base.toml");
    let local = temp_dir.path().join("local.toml");
    fs::write(
        &base,
        r#"
[logging]
level = "debug"

[overrides]
is_tenant = true
user_sql_roles = ["a", "b"]

[overrides.pages.session_details]
show_gateway_node_link = true
"#,
    )
    .unwrap();
    fs::write(
        &local,
        r#"
[overrides]
user_sql_roles = ["c"]
use_obs_service = true
"#,
    )
    .unwrap();

    let settings = SettingsLoader::load_layered(&[base.as_path(), local.as_path()]).unwrap();

    assert_eq!(settings.logging.level, "debug");
    assert_eq!(
        settings.overrides,
        UiConfigPatch::new()
            .is_tenant(true)
            .user_sql_roles(["c"])
            .use_obs_service(true)
            .show_gateway_node_link(true)
    );
}

#[test]
fn test_missing_file_is_config_error() {
    let temp_dir = TempDir::new().unwrap();
    let err = SettingsLoader::load_from_file(&temp_dir.path().join("absent.toml")).unwrap_err();
    assert!(matches!(err, UiConfigError::ConfigError(_)));
}

#[test]
fn test_wrong_override_type_is_config_error() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("bad.toml");
    fs::write(&path, "[overrides]\nuser_sql_roles = { first = \"admin\" }\n").unwrap();

    assert!(SettingsLoader::load_from_file(&path).is_err());
}

#[test]
fn test_rendered_settings_load_back_from_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("rendered.toml");
    let settings = StoreSettings::with_overrides(
        UiConfigPatch::new()
            .user_sql_roles(["admin"])
            .use_obs_service(true)
            .show_gateway_node_link(true),
    );
    fs::write(&path, settings.to_toml_string().unwrap()).unwrap();

    let loaded = SettingsLoader::load_from_file(&path).unwrap();
    assert_eq!(loaded, settings);

    let state = ConfigStore::create(loaded).state();
    assert_eq!(state.user_sql_roles, vec!["admin"]);
    assert!(state.use_obs_service);
    assert!(state.pages.session_details.show_gateway_node_link);
    assert!(state.pages.statement_details.show_statement_diagnostics_link);
}

#[test]
fn test_camel_case_overrides_from_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("host.toml");
    fs::write(
        &path,
        r#"
[overrides]
isTenant = true
hasViewActivityRedactedRole = true

[overrides.pages.statementDetails]
showStatementDiagnosticsLink = false
"#,
    )
    .unwrap();

    let settings = SettingsLoader::load_from_file(&path).unwrap();
    assert_eq!(
        settings.overrides,
        UiConfigPatch::new()
            .is_tenant(true)
            .has_view_activity_redacted_role(true)
            .show_statement_diagnostics_link(false)
    );
}
