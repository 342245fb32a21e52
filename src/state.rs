//! UI configuration state.
//!
//! Feature-flag-like settings a host application can override at runtime:
//! tenancy mode, role-derived capability flags, and per-page toggles.
//! Every field has a default, so a state value is never partially defined.

use serde::{Deserialize, Serialize};

/// The single state value owned by a [`crate::store::ConfigStore`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct UiConfigState {
    /// Whether the host runs in multi-tenant mode.
    pub is_tenant: bool,

    /// Role names known for the active user, in the order last received.
    #[serde(rename = "userSQLRoles")]
    pub user_sql_roles: Vec<String>,

    pub has_view_activity_redacted_role: bool,
    pub has_admin_role: bool,

    /// Routes observability data to the alternate backend.
    pub use_obs_service: bool,

    pub pages: Pages,
}

/// Per-page visibility toggles. New pages are added as further groups.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Pages {
    pub statement_details: StatementDetailsPage,
    pub session_details: SessionDetailsPage,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct StatementDetailsPage {
    pub show_statement_diagnostics_link: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SessionDetailsPage {
    pub show_gateway_node_link: bool,
}

impl Default for UiConfigState {
    fn default() -> Self {
        Self {
            is_tenant: false,
            user_sql_roles: Vec::new(),
            has_view_activity_redacted_role: false,
            has_admin_role: false,
            use_obs_service: false,
            pages: Pages::default(),
        }
    }
}

impl Default for StatementDetailsPage {
    fn default() -> Self {
        Self {
            show_statement_diagnostics_link: true,
        }
    }
}

impl UiConfigState {
    /// True if `role` is among the currently known user roles.
    pub fn has_role(&self, role: &str) -> bool {
        self.user_sql_roles.iter().any(|r| r == role)
    }
}
