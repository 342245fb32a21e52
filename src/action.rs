//! The five operations a host can dispatch against the store.

use crate::patch::UiConfigPatch;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Namespace shared by every action type string dispatched by the host.
pub const DOMAIN_NAME: &str = "adminUI";
/// Slice name under [`DOMAIN_NAME`].
pub const SLICE_NAME: &str = "uiConfig";

/// A dispatched request to transition the store's state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiConfigAction {
    /// Deep-merge a partial state.
    Update(UiConfigPatch),
    /// Replace the role list; `None` leaves it unchanged.
    ReceivedUserRoles(Option<Vec<String>>),
    /// Clear the role list.
    InvalidatedUserRoles,
    /// Signal only: roles should be refreshed unconditionally.
    RefreshUserRoles,
    /// Signal only: roles should be requested because they are stale.
    RequestUserRoles,
}

/// Payload-less discriminant of [`UiConfigAction`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ActionKind {
    #[serde(rename = "update")]
    Update,
    #[serde(rename = "receivedUserSQLRoles")]
    ReceivedUserRoles,
    #[serde(rename = "invalidatedUserSQLRoles")]
    InvalidatedUserRoles,
    #[serde(rename = "refreshUserSQLRoles")]
    RefreshUserRoles,
    #[serde(rename = "requestUserSQLRoles")]
    RequestUserRoles,
}

impl ActionKind {
    pub const ALL: [ActionKind; 5] = [
        ActionKind::Update,
        ActionKind::ReceivedUserRoles,
        ActionKind::InvalidatedUserRoles,
        ActionKind::RefreshUserRoles,
        ActionKind::RequestUserRoles,
    ];

    /// Short name within the slice, e.g. `receivedUserSQLRoles`.
    pub fn name(self) -> &'static str {
        match self {
            ActionKind::Update => "update",
            ActionKind::ReceivedUserRoles => "receivedUserSQLRoles",
            ActionKind::InvalidatedUserRoles => "invalidatedUserSQLRoles",
            ActionKind::RefreshUserRoles => "refreshUserSQLRoles",
            ActionKind::RequestUserRoles => "requestUserSQLRoles",
        }
    }

    /// Fully qualified type string, e.g. `adminUI/uiConfig/update`.
    pub fn action_type(self) -> String {
        format!("{}/{}/{}", DOMAIN_NAME, SLICE_NAME, self.name())
    }

    /// Signal-only kinds never transition state.
    pub fn is_signal(self) -> bool {
        matches!(self, ActionKind::RefreshUserRoles | ActionKind::RequestUserRoles)
    }
}

impl fmt::Display for ActionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl UiConfigAction {
    pub fn kind(&self) -> ActionKind {
        match self {
            UiConfigAction::Update(_) => ActionKind::Update,
            UiConfigAction::ReceivedUserRoles(_) => ActionKind::ReceivedUserRoles,
            UiConfigAction::InvalidatedUserRoles => ActionKind::InvalidatedUserRoles,
            UiConfigAction::RefreshUserRoles => ActionKind::RefreshUserRoles,
            UiConfigAction::RequestUserRoles => ActionKind::RequestUserRoles,
        }
    }

    pub fn action_type(&self) -> String {
        self.kind().action_type()
    }

    pub fn is_signal(&self) -> bool {
        self.kind().is_signal()
    }

    pub fn received_user_roles<I, S>(roles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        UiConfigAction::ReceivedUserRoles(Some(roles.into_iter().map(Into::into).collect()))
    }
}
