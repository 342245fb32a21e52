//! Action registry: resolves dispatched names to typed actions.
//!
//! Hosts that dispatch by string (action type plus an untyped JSON payload)
//! go through here. Both the fully qualified type (`adminUI/uiConfig/update`)
//! and the short name (`update`) resolve.

use crate::action::{ActionKind, UiConfigAction};
use crate::error::UiConfigError;
use crate::patch::UiConfigPatch;
use serde_json::Value;
use std::collections::HashMap;

pub struct ActionRegistry {
    kinds: HashMap<String, ActionKind>,
}

impl ActionRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self {
            kinds: HashMap::new(),
        }
    }

    /// Registry holding every store action under its type and short name
    pub fn standard() -> Self {
        let mut registry = Self::new();
        for kind in ActionKind::ALL {
            registry.register(kind.action_type(), kind);
            registry.register(kind.name(), kind);
        }
        registry
    }

    /// Register an additional name for an action kind
    pub fn register(&mut self, name: impl Into<String>, kind: ActionKind) {
        self.kinds.insert(name.into(), kind);
    }

    pub fn get(&self, name: &str) -> Option<ActionKind> {
        self.kinds.get(name).copied()
    }

    pub fn get_or_error(&self, name: &str) -> Result<ActionKind, UiConfigError> {
        self.get(name)
            .ok_or_else(|| UiConfigError::UnknownAction(name.to_string()))
    }

    /// All registered names, sorted
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.kinds.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Build a typed action from a name and an optional payload.
    ///
    /// A missing or `null` payload means "nothing to apply" for `update`
    /// and "no change" for `receivedUserSQLRoles`. Payloads sent with the
    /// payload-less actions are ignored.
    pub fn decode(&self, name: &str, payload: Option<Value>) -> Result<UiConfigAction, UiConfigError> {
        let kind = self.get_or_error(name)?;
        let payload = payload.filter(|value| !value.is_null());

        let action = match kind {
            ActionKind::Update => {
                let patch = match payload {
                    Some(value) => decode_payload::<UiConfigPatch>(kind, value)?,
                    None => UiConfigPatch::default(),
                };
                UiConfigAction::Update(patch)
            }
            ActionKind::ReceivedUserRoles => {
                let roles = payload
                    .map(|value| decode_payload::<Vec<String>>(kind, value))
                    .transpose()?;
                UiConfigAction::ReceivedUserRoles(roles)
            }
            ActionKind::InvalidatedUserRoles => UiConfigAction::InvalidatedUserRoles,
            ActionKind::RefreshUserRoles => UiConfigAction::RefreshUserRoles,
            ActionKind::RequestUserRoles => UiConfigAction::RequestUserRoles,
        };

        Ok(action)
    }
}

impl Default for ActionRegistry {
    fn default() -> Self {
        Self::standard()
    }
}

fn decode_payload<T: serde::de::DeserializeOwned>(
    kind: ActionKind,
    value: Value,
) -> Result<T, UiConfigError> {
    serde_json::from_value(value).map_err(|e| UiConfigError::InvalidPayload {
        action: kind.action_type(),
        message: e.to_string(),
    })
}
