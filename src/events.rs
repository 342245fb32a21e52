//! Dispatch notifications.
//!
//! The store publishes one envelope per dispatched action, after the state
//! transition has run. Collaborators that react to signal-only actions (role
//! fetching) subscribe here instead of hooking into the transition path.

pub mod bus;

use crate::action::{ActionKind, UiConfigAction};
use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

pub use bus::DispatchBus;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DispatchEnvelope {
    /// Position in the store's dispatch order, starting at 1.
    pub seq: u64,
    pub ts: String,
    #[serde(rename = "type")]
    pub action_type: String,
    pub kind: ActionKind,
    /// Whether the transition changed the state.
    pub changed: bool,
}

impl DispatchEnvelope {
    pub fn new(seq: u64, ts: String, kind: ActionKind, changed: bool) -> Self {
        Self {
            seq,
            ts,
            action_type: kind.action_type(),
            kind,
            changed,
        }
    }

    pub fn with_now(seq: u64, action: &UiConfigAction, changed: bool) -> Self {
        Self::new(
            seq,
            Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
            action.kind(),
            changed,
        )
    }

    pub fn is_signal(&self) -> bool {
        self.kind.is_signal()
    }
}
