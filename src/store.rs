//! Configuration Store
//!
//! Owns the single [`UiConfigState`] for its lifetime and applies dispatched
//! actions to it. Every dispatch runs the transition first and then publishes
//! a [`DispatchEnvelope`] on the store's bus, so collaborators that only care
//! about signal-only actions never touch the transition path.
//!
//! The store expects its host to dispatch one action at a time. The internal
//! lock keeps readers on other threads from observing a half-applied update
//! and keeps envelope delivery in `seq` order; it does not decide which of
//! two competing writers goes first.

use crate::action::UiConfigAction;
use crate::config::StoreSettings;
use crate::error::UiConfigError;
use crate::events::{DispatchBus, DispatchEnvelope};
use crate::patch::UiConfigPatch;
use crate::reducer;
use crate::registry::ActionRegistry;
use crate::state::UiConfigState;
use parking_lot::RwLock;
use serde_json::Value;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::mpsc::Receiver;
use std::sync::Arc;
use tracing::{debug, info};

pub struct ConfigStore {
    state: Arc<RwLock<UiConfigState>>,
    bus: DispatchBus,
    registry: ActionRegistry,
    /// Sequence number of the last dispatch; only advanced under the state write lock.
    last_seq: AtomicU64,
}

/// Cloneable read-only handle onto a store's state.
#[derive(Clone)]
pub struct StateView {
    state: Arc<RwLock<UiConfigState>>,
}

impl StateView {
    /// Snapshot of the current state
    pub fn get(&self) -> UiConfigState {
        self.state.read().clone()
    }

    /// Run `f` against the current state without cloning it
    pub fn read<R>(&self, f: impl FnOnce(&UiConfigState) -> R) -> R {
        f(&*self.state.read())
    }
}

impl ConfigStore {
    /// Create a store holding the default state.
    pub fn new() -> Self {
        Self::create(StoreSettings::default())
    }

    /// Create a store from the default state with `settings.overrides` applied.
    pub fn create(settings: StoreSettings) -> Self {
        let mut state = UiConfigState::default();
        state.apply_patch(&settings.overrides);

        let has_overrides = !settings.overrides.is_empty();
        info!(overrides = has_overrides, "UI config store created");

        Self {
            state: Arc::new(RwLock::new(state)),
            bus: DispatchBus::new(),
            registry: ActionRegistry::standard(),
            last_seq: AtomicU64::new(0),
        }
    }

    /// Apply `action`, then notify subscribers. Never fails.
    ///
    /// The envelope is published before the state lock is released, so
    /// subscribers receive envelopes in `seq` order.
    pub fn dispatch(&self, action: UiConfigAction) -> DispatchEnvelope {
        let mut state = self.state.write();
        let changed = reducer::apply(&mut state, &action);
        let seq = self.last_seq.fetch_add(1, Ordering::Relaxed) + 1;
        let envelope = DispatchEnvelope::with_now(seq, &action, changed);

        debug!(
            action = %envelope.action_type,
            seq = envelope.seq,
            changed = envelope.changed,
            "Dispatched action"
        );

        self.bus.publish(&envelope);
        drop(state);
        envelope
    }

    /// Dispatch by action name with an untyped payload.
    pub fn dispatch_named(
        &self,
        name: &str,
        payload: Option<Value>,
    ) -> Result<DispatchEnvelope, UiConfigError> {
        let action = self.registry.decode(name, payload)?;
        Ok(self.dispatch(action))
    }

    pub fn update(&self, patch: UiConfigPatch) -> DispatchEnvelope {
        self.dispatch(UiConfigAction::Update(patch))
    }

    pub fn received_user_roles(&self, roles: Option<Vec<String>>) -> DispatchEnvelope {
        self.dispatch(UiConfigAction::ReceivedUserRoles(roles))
    }

    pub fn invalidated_user_roles(&self) -> DispatchEnvelope {
        self.dispatch(UiConfigAction::InvalidatedUserRoles)
    }

    pub fn refresh_user_roles(&self) -> DispatchEnvelope {
        self.dispatch(UiConfigAction::RefreshUserRoles)
    }

    pub fn request_user_roles(&self) -> DispatchEnvelope {
        self.dispatch(UiConfigAction::RequestUserRoles)
    }

    /// Snapshot of the current state
    pub fn state(&self) -> UiConfigState {
        self.state.read().clone()
    }

    /// Run `f` against the current state without cloning it
    pub fn read<R>(&self, f: impl FnOnce(&UiConfigState) -> R) -> R {
        f(&*self.state.read())
    }

    /// Read-only handle for rendering and business-logic collaborators
    pub fn view(&self) -> StateView {
        StateView {
            state: Arc::clone(&self.state),
        }
    }

    /// Number of actions dispatched so far
    pub fn dispatch_count(&self) -> u64 {
        self.last_seq.load(Ordering::Relaxed)
    }

    pub fn registry(&self) -> &ActionRegistry {
        &self.registry
    }

    /// Receive an envelope for every subsequent dispatch
    pub fn subscribe(&self) -> Receiver<DispatchEnvelope> {
        self.bus.subscribe()
    }

    /// Receive envelopes for signal-only dispatches
    pub fn subscribe_signals(&self) -> Receiver<DispatchEnvelope> {
        self.bus.subscribe_signals()
    }

    /// Tear the store down. Subscribers observe disconnection; outstanding
    /// views keep reading the final state.
    pub fn dispose(self) -> UiConfigState {
        self.bus.close();
        let state = self.state();
        info!(dispatched = self.dispatch_count(), "UI config store disposed");
        state
    }
}

impl Default for ConfigStore {
    fn default() -> Self {
        Self::new()
    }
}
