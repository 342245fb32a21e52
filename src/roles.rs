//! Role synchronization.
//!
//! Reacts to the signal-only role actions by fetching the active user's
//! roles from a [`RoleSource`] and dispatching the result back into the
//! store. `refreshUserSQLRoles` is turned into `requestUserSQLRoles`; a
//! request performs the fetch and dispatches `receivedUserSQLRoles` on
//! success. A failed fetch is logged and leaves the state untouched.

use crate::action::{ActionKind, UiConfigAction};
use crate::events::DispatchEnvelope;
use crate::store::ConfigStore;
use std::sync::mpsc::Receiver;
use thiserror::Error;
use tracing::{debug, warn};

#[derive(Debug, Error)]
#[error("Role fetch failed: {0}")]
pub struct RoleFetchError(pub String);

/// Where role names come from. Implemented by the host, usually over HTTP.
pub trait RoleSource {
    fn fetch_roles(&self) -> Result<Vec<String>, RoleFetchError>;
}

impl<F> RoleSource for F
where
    F: Fn() -> Result<Vec<String>, RoleFetchError>,
{
    fn fetch_roles(&self) -> Result<Vec<String>, RoleFetchError> {
        self()
    }
}

pub struct RoleSync<S: RoleSource> {
    source: S,
}

impl<S: RoleSource> RoleSync<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// React to one envelope. Returns true if it was a role signal.
    pub fn handle(&self, store: &ConfigStore, envelope: &DispatchEnvelope) -> bool {
        match envelope.kind {
            ActionKind::RefreshUserRoles => {
                store.dispatch(UiConfigAction::RequestUserRoles);
                true
            }
            ActionKind::RequestUserRoles => {
                match self.source.fetch_roles() {
                    Ok(roles) => {
                        debug!(count = roles.len(), "Fetched user roles");
                        store.dispatch(UiConfigAction::ReceivedUserRoles(Some(roles)));
                    }
                    Err(e) => {
                        warn!(error = %e, seq = envelope.seq, "Failed to fetch user roles");
                    }
                }
                true
            }
            _ => false,
        }
    }

    /// Handle every envelope already queued on `receiver` without blocking,
    /// including the ones queued by handling earlier envelopes. Returns the
    /// number of role signals handled.
    pub fn drain(&self, store: &ConfigStore, receiver: &Receiver<DispatchEnvelope>) -> usize {
        let mut handled = 0;
        while let Ok(envelope) = receiver.try_recv() {
            if self.handle(store, &envelope) {
                handled += 1;
            }
        }
        handled
    }
}
