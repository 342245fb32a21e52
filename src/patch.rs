//! Partial updates and the typed deep merge.
//!
//! A patch mirrors [`UiConfigState`] with every field optional. Applying a
//! patch overwrites the scalars it sets, recurses into the page groups it
//! mentions, and leaves everything else alone. The role list is a single
//! value: a patch either carries a whole list, which replaces the current
//! one, or nothing.
//!
//! Patches deserialize from the host's camelCase field names; the snake_case
//! spellings are accepted too so settings files can follow TOML convention.

use crate::state::{Pages, SessionDetailsPage, StatementDetailsPage, UiConfigState};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields, rename_all = "camelCase")]
pub struct UiConfigPatch {
    #[serde(alias = "is_tenant", skip_serializing_if = "Option::is_none")]
    pub is_tenant: Option<bool>,

    #[serde(
        rename = "userSQLRoles",
        alias = "user_sql_roles",
        skip_serializing_if = "Option::is_none"
    )]
    pub user_sql_roles: Option<Vec<String>>,

    #[serde(
        alias = "has_view_activity_redacted_role",
        skip_serializing_if = "Option::is_none"
    )]
    pub has_view_activity_redacted_role: Option<bool>,

    #[serde(alias = "has_admin_role", skip_serializing_if = "Option::is_none")]
    pub has_admin_role: Option<bool>,

    #[serde(alias = "use_obs_service", skip_serializing_if = "Option::is_none")]
    pub use_obs_service: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub pages: Option<PagesPatch>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields, rename_all = "camelCase")]
pub struct PagesPatch {
    #[serde(alias = "statement_details", skip_serializing_if = "Option::is_none")]
    pub statement_details: Option<StatementDetailsPatch>,

    #[serde(alias = "session_details", skip_serializing_if = "Option::is_none")]
    pub session_details: Option<SessionDetailsPatch>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields, rename_all = "camelCase")]
pub struct StatementDetailsPatch {
    #[serde(
        alias = "show_statement_diagnostics_link",
        skip_serializing_if = "Option::is_none"
    )]
    pub show_statement_diagnostics_link: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields, rename_all = "camelCase")]
pub struct SessionDetailsPatch {
    #[serde(alias = "show_gateway_node_link", skip_serializing_if = "Option::is_none")]
    pub show_gateway_node_link: Option<bool>,
}

/// Later-wins combination of two optional nested patches.
fn merge_nested<T>(base: Option<T>, next: Option<T>, merge: impl FnOnce(T, T) -> T) -> Option<T> {
    match (base, next) {
        (Some(base), Some(next)) => Some(merge(base, next)),
        (base, next) => next.or(base),
    }
}

impl UiConfigPatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_tenant(mut self, value: bool) -> Self {
        self.is_tenant = Some(value);
        self
    }

    pub fn user_sql_roles<I, S>(mut self, roles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.user_sql_roles = Some(roles.into_iter().map(Into::into).collect());
        self
    }

    pub fn has_view_activity_redacted_role(mut self, value: bool) -> Self {
        self.has_view_activity_redacted_role = Some(value);
        self
    }

    pub fn has_admin_role(mut self, value: bool) -> Self {
        self.has_admin_role = Some(value);
        self
    }

    pub fn use_obs_service(mut self, value: bool) -> Self {
        self.use_obs_service = Some(value);
        self
    }

    pub fn show_statement_diagnostics_link(self, value: bool) -> Self {
        self.with_pages(PagesPatch {
            statement_details: Some(StatementDetailsPatch {
                show_statement_diagnostics_link: Some(value),
            }),
            session_details: None,
        })
    }

    pub fn show_gateway_node_link(self, value: bool) -> Self {
        self.with_pages(PagesPatch {
            statement_details: None,
            session_details: Some(SessionDetailsPatch {
                show_gateway_node_link: Some(value),
            }),
        })
    }

    fn with_pages(mut self, pages: PagesPatch) -> Self {
        self.pages = merge_nested(self.pages.take(), Some(pages), PagesPatch::merge);
        self
    }

    /// True if applying this patch can never change a state.
    pub fn is_empty(&self) -> bool {
        self.is_tenant.is_none()
            && self.user_sql_roles.is_none()
            && self.has_view_activity_redacted_role.is_none()
            && self.has_admin_role.is_none()
            && self.use_obs_service.is_none()
            && self.pages.as_ref().map_or(true, PagesPatch::is_empty)
    }

    /// Combine two patches; fields set in `next` win, nested groups recurse,
    /// and role lists replace rather than concatenate.
    pub fn merge(self, next: UiConfigPatch) -> UiConfigPatch {
        UiConfigPatch {
            is_tenant: next.is_tenant.or(self.is_tenant),
            user_sql_roles: next.user_sql_roles.or(self.user_sql_roles),
            has_view_activity_redacted_role: next
                .has_view_activity_redacted_role
                .or(self.has_view_activity_redacted_role),
            has_admin_role: next.has_admin_role.or(self.has_admin_role),
            use_obs_service: next.use_obs_service.or(self.use_obs_service),
            pages: merge_nested(self.pages, next.pages, PagesPatch::merge),
        }
    }
}

impl PagesPatch {
    pub fn is_empty(&self) -> bool {
        self.statement_details
            .as_ref()
            .map_or(true, |p| p.show_statement_diagnostics_link.is_none())
            && self
                .session_details
                .as_ref()
                .map_or(true, |p| p.show_gateway_node_link.is_none())
    }

    pub fn merge(self, next: PagesPatch) -> PagesPatch {
        PagesPatch {
            statement_details: merge_nested(
                self.statement_details,
                next.statement_details,
                |base, next| StatementDetailsPatch {
                    show_statement_diagnostics_link: next
                        .show_statement_diagnostics_link
                        .or(base.show_statement_diagnostics_link),
                },
            ),
            session_details: merge_nested(
                self.session_details,
                next.session_details,
                |base, next| SessionDetailsPatch {
                    show_gateway_node_link: next
                        .show_gateway_node_link
                        .or(base.show_gateway_node_link),
                },
            ),
        }
    }
}

impl UiConfigState {
    /// Deep-merge `patch` into this state.
    pub fn apply_patch(&mut self, patch: &UiConfigPatch) {
        if let Some(value) = patch.is_tenant {
            self.is_tenant = value;
        }
        if let Some(roles) = &patch.user_sql_roles {
            self.user_sql_roles = roles.clone();
        }
        if let Some(value) = patch.has_view_activity_redacted_role {
            self.has_view_activity_redacted_role = value;
        }
        if let Some(value) = patch.has_admin_role {
            self.has_admin_role = value;
        }
        if let Some(value) = patch.use_obs_service {
            self.use_obs_service = value;
        }
        if let Some(pages) = &patch.pages {
            self.pages.apply_patch(pages);
        }
    }
}

impl Pages {
    pub fn apply_patch(&mut self, patch: &PagesPatch) {
        if let Some(statement) = &patch.statement_details {
            self.statement_details.apply_patch(statement);
        }
        if let Some(session) = &patch.session_details {
            self.session_details.apply_patch(session);
        }
    }
}

impl StatementDetailsPage {
    pub fn apply_patch(&mut self, patch: &StatementDetailsPatch) {
        if let Some(value) = patch.show_statement_diagnostics_link {
            self.show_statement_diagnostics_link = value;
        }
    }
}

impl SessionDetailsPage {
    pub fn apply_patch(&mut self, patch: &SessionDetailsPatch) {
        if let Some(value) = patch.show_gateway_node_link {
            self.show_gateway_node_link = value;
        }
    }
}

/// A patch that sets every field to the given state's value.
impl From<UiConfigState> for UiConfigPatch {
    fn from(state: UiConfigState) -> Self {
        UiConfigPatch {
            is_tenant: Some(state.is_tenant),
            user_sql_roles: Some(state.user_sql_roles),
            has_view_activity_redacted_role: Some(state.has_view_activity_redacted_role),
            has_admin_role: Some(state.has_admin_role),
            use_obs_service: Some(state.use_obs_service),
            pages: Some(PagesPatch {
                statement_details: Some(StatementDetailsPatch {
                    show_statement_diagnostics_link: Some(
                        state.pages.statement_details.show_statement_diagnostics_link,
                    ),
                }),
                session_details: Some(SessionDetailsPatch {
                    show_gateway_node_link: Some(state.pages.session_details.show_gateway_node_link),
                }),
            }),
        }
    }
}
